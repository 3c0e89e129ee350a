// Copyright 2025 the Slicechart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point symbols.

use kurbo::{BezPath, Circle, Shape};

/// The classic six scatter symbols, in their conventional assignment order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// A circle.
    Circle,
    /// A plus-shaped cross.
    Cross,
    /// A square rotated by 45 degrees.
    Diamond,
    /// An axis-aligned square.
    Square,
    /// A triangle pointing down.
    TriangleDown,
    /// A triangle pointing up.
    TriangleUp,
}

impl Symbol {
    /// Assignment order used by shape lookups.
    pub const ALL: [Self; 6] = [
        Self::Circle,
        Self::Cross,
        Self::Diamond,
        Self::Square,
        Self::TriangleDown,
        Self::TriangleUp,
    ];

    /// Symbol for the `position`-th shape category, cycling after six.
    pub fn nth(position: usize) -> Self {
        Self::ALL[position % Self::ALL.len()]
    }

    /// Kebab-case name, as used in SVG class attributes.
    pub fn name(self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Cross => "cross",
            Self::Diamond => "diamond",
            Self::Square => "square",
            Self::TriangleDown => "triangle-down",
            Self::TriangleUp => "triangle-up",
        }
    }

    /// Outline centred at `cx, cy` fitting a `size` x `size` box.
    pub fn path(self, cx: f64, cy: f64, size: f64) -> BezPath {
        let h = size * 0.5;
        match self {
            Self::Circle => {
                // Flattening tolerance in surface units; fine for pixel output.
                Circle::new((cx, cy), h).path_elements(0.1).collect()
            }
            Self::Cross => {
                let t = size / 6.0;
                polygon(&[
                    (cx - t, cy - h),
                    (cx + t, cy - h),
                    (cx + t, cy - t),
                    (cx + h, cy - t),
                    (cx + h, cy + t),
                    (cx + t, cy + t),
                    (cx + t, cy + h),
                    (cx - t, cy + h),
                    (cx - t, cy + t),
                    (cx - h, cy + t),
                    (cx - h, cy - t),
                    (cx - t, cy - t),
                ])
            }
            Self::Diamond => polygon(&[(cx, cy - h), (cx + h, cy), (cx, cy + h), (cx - h, cy)]),
            Self::Square => polygon(&[
                (cx - h, cy - h),
                (cx + h, cy - h),
                (cx + h, cy + h),
                (cx - h, cy + h),
            ]),
            Self::TriangleDown => polygon(&[(cx - h, cy - h), (cx + h, cy - h), (cx, cy + h)]),
            Self::TriangleUp => polygon(&[(cx, cy - h), (cx + h, cy + h), (cx - h, cy + h)]),
        }
    }
}

fn polygon(points: &[(f64, f64)]) -> BezPath {
    let mut p = BezPath::new();
    if let Some((first, rest)) = points.split_first() {
        p.move_to(*first);
        for pt in rest {
            p.line_to(*pt);
        }
        p.close_path();
    }
    p
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_symbol_fits_its_box() {
        for s in Symbol::ALL {
            let b = s.path(50.0, 20.0, 10.0).bounding_box();
            assert!(b.x0 >= 45.0 - 0.15 && b.x1 <= 55.0 + 0.15, "{s:?} {b:?}");
            assert!(b.y0 >= 15.0 - 0.15 && b.y1 <= 25.0 + 0.15, "{s:?} {b:?}");
            assert!(b.width() > 0.0 && b.height() > 0.0, "{s:?} is empty");
        }
    }

    #[test]
    fn nth_cycles() {
        assert_eq!(Symbol::nth(0), Symbol::Circle);
        assert_eq!(Symbol::nth(5), Symbol::TriangleUp);
        assert_eq!(Symbol::nth(6), Symbol::Circle);
    }
}
