// Copyright 2025 the Slicechart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scales: value to pixel, rank to pixel, category to visual attribute.
//!
//! All scales are rebuilt on every render; nothing here caches across calls.

use alloc::vec::Vec;

use hashbrown::HashMap;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::dataset::{CategoryKey, Series};

/// A linear mapping from a continuous domain to a continuous range.
///
/// A flat domain (`d0 == d1`) maps every input to the middle of the range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLinear {
    domain: (f64, f64),
    range: (f64, f64),
}

impl ScaleLinear {
    /// Creates a scale mapping `domain` onto `range`.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Maps a domain value into the range.
    pub fn map(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let denom = d1 - d0;
        if denom == 0.0 {
            return 0.5 * (r0 + r1);
        }
        let t = (x - d0) / denom;
        r0 + t * (r1 - r0)
    }

    /// The configured domain.
    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// The configured range.
    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Roughly `count` round tick values inside the domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (d0, d1) = self.domain;
        let (lo, hi) = if d0 <= d1 { (d0, d1) } else { (d1, d0) };
        nice_ticks(lo, hi, count)
            .into_iter()
            .filter(|v| *v >= lo - 1e-9 * (hi - lo).abs() && *v <= hi + 1e-9 * (hi - lo).abs())
            .collect()
    }
}

fn nice_ticks(min: f64, max: f64, count: usize) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    if min == max {
        return alloc::vec![min];
    }
    let step = nice_step((max - min) / count as f64);
    if step == 0.0 {
        return alloc::vec![min, max];
    }

    let start = (min / step).ceil();
    let stop = (max / step).floor();
    let n = stop - start;
    if !n.is_finite() || n < 0.0 {
        return Vec::new();
    }
    #[allow(
        clippy::cast_possible_truncation,
        reason = "finite, non-negative and capped at 10k"
    )]
    let n = n.min(10_000.0) as u64;
    // Multiply from integer indices so 0.1 + 0.2 style drift never shows up in labels.
    (0..=n).map(|i| (start + i as f64) * step).collect()
}

/// The 1-2-5 step at or above `step`.
pub(crate) fn nice_step(step: f64) -> f64 {
    if !step.is_finite() || step <= 0.0 {
        return 0.0;
    }
    let power = step.log10().floor();
    #[allow(clippy::cast_possible_truncation, reason = "log10 of a finite f64 fits i32")]
    let base = 10_f64.powi(power as i32);
    let error = step / base;
    let nice = if error >= 7.5 {
        10.0
    } else if error >= 3.5 {
        5.0
    } else if error >= 1.5 {
        2.0
    } else {
        1.0
    };
    nice * base
}

/// Evenly spaced positions for ranks `0..count`.
///
/// Half a step of outer padding sits at each end; a single rank sits in the
/// middle of the range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScalePoint {
    range: (f64, f64),
    count: usize,
}

impl ScalePoint {
    /// Outer padding, in steps.
    pub const PADDING: f64 = 0.5;

    /// Creates a point scale over `range` for `count` ranks.
    pub fn new(range: (f64, f64), count: usize) -> Self {
        Self { range, count }
    }

    /// Number of ranks.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Distance between consecutive ranks.
    pub fn step(&self) -> f64 {
        let (r0, r1) = self.range;
        let n = self.count as f64;
        if self.count <= 1 {
            return 0.0;
        }
        let denom = (n - 1.0) + 2.0 * Self::PADDING;
        if denom == 0.0 { 0.0 } else { (r1 - r0).abs() / denom }
    }

    /// Position of `rank`.
    pub fn x(&self, rank: usize) -> f64 {
        let (r0, r1) = self.range;
        if self.count <= 1 {
            return 0.5 * (r0 + r1);
        }
        let start = r0.min(r1);
        start + Self::PADDING * self.step() + self.step() * rank as f64
    }
}

/// Distinct category values in first-seen order.
#[derive(Clone, Debug, Default)]
pub struct CategoryDomain {
    values: Vec<CategoryKey>,
    index: HashMap<CategoryKey, usize>,
}

impl CategoryDomain {
    /// Scans every point of every series in order, keeping each new value.
    pub fn discover<'a>(
        series: impl IntoIterator<Item = &'a Series>,
        attribute: impl Fn(&'a crate::dataset::Point) -> &'a CategoryKey,
    ) -> Self {
        let mut domain = Self::default();
        for s in series {
            for p in &s.values {
                domain.insert(attribute(p));
            }
        }
        domain
    }

    /// Adds `value` if unseen; returns its position.
    pub fn insert(&mut self, value: &CategoryKey) -> usize {
        if let Some(&i) = self.index.get(value) {
            return i;
        }
        let i = self.values.len();
        self.values.push(value.clone());
        self.index.insert(value.clone(), i);
        i
    }

    /// Position of `value`, if present.
    pub fn position(&self, value: &CategoryKey) -> Option<usize> {
        self.index.get(value).copied()
    }

    /// Values in first-seen order.
    pub fn values(&self) -> &[CategoryKey] {
        &self.values
    }

    /// Number of distinct values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no values were seen.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Categorical lookup: a [`CategoryDomain`] paired with one visual per value.
#[derive(Clone, Debug)]
pub struct OrdinalScale<R> {
    domain: CategoryDomain,
    range: Vec<R>,
}

impl<R> OrdinalScale<R> {
    /// Assigns `visual(value, position)` to every domain value.
    pub fn build<E>(
        domain: CategoryDomain,
        mut visual: impl FnMut(&CategoryKey, usize) -> Result<R, E>,
    ) -> Result<Self, E> {
        let range = domain
            .values()
            .iter()
            .enumerate()
            .map(|(i, v)| visual(v, i))
            .collect::<Result<Vec<_>, E>>()?;
        Ok(Self { domain, range })
    }

    /// Visual for `value`, if it is in the domain.
    pub fn get(&self, value: &CategoryKey) -> Option<&R> {
        self.domain.position(value).map(|i| &self.range[i])
    }

    /// The underlying domain.
    pub fn domain(&self) -> &CategoryDomain {
        &self.domain
    }

    /// `(value, visual)` pairs in domain order.
    pub fn entries(&self) -> impl Iterator<Item = (&CategoryKey, &R)> {
        self.domain.values().iter().zip(self.range.iter())
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;
    use crate::dataset::Point;

    #[test]
    fn linear_inverts_for_screen_y() {
        let s = ScaleLinear::new((1.0, 5.0), (200.0, 0.0));
        assert!((s.map(1.0) - 200.0).abs() < 1e-9);
        assert!((s.map(5.0) - 0.0).abs() < 1e-9);
        assert!(s.map(4.0) < s.map(2.0));
    }

    #[test]
    fn flat_domain_maps_to_range_middle() {
        let s = ScaleLinear::new((3.0, 3.0), (100.0, 0.0));
        assert_eq!(s.map(3.0), 50.0);
        assert_eq!(s.map(-7.0), 50.0);
    }

    #[test]
    fn linear_ticks_stay_in_domain() {
        let s = ScaleLinear::new((0.3, 9.7), (0.0, 1.0));
        let ticks = s.ticks(5);
        assert_eq!(ticks, vec![2.0, 4.0, 6.0, 8.0]);
    }

    #[test]
    fn point_scale_is_strictly_increasing() {
        let s = ScalePoint::new((0.0, 100.0), 5);
        let xs: Vec<f64> = (0..5).map(|i| s.x(i)).collect();
        assert!(xs.windows(2).all(|w| w[0] < w[1]));
        assert!((s.x(0) - 10.0).abs() < 1e-9);
        assert!((s.x(4) - 90.0).abs() < 1e-9);
    }

    #[test]
    fn single_point_is_centred() {
        let s = ScalePoint::new((40.0, 140.0), 1);
        assert_eq!(s.x(0), 90.0);
    }

    #[test]
    fn domain_keeps_first_seen_order() {
        let data = vec![
            Series::new(
                "a",
                vec![Point::new(1.0, "z", "x"), Point::new(1.0, "y", "x")],
            ),
            Series::new(
                "b",
                vec![Point::new(1.0, "y", "x"), Point::new(1.0, "a", "x")],
            ),
        ];
        let domain = CategoryDomain::discover(&data, |p| &p.color);
        let values: Vec<std::string::String> =
            domain.values().iter().map(|v| alloc::format!("{v}")).collect();
        assert_eq!(values, ["z", "y", "a"]);
        assert_eq!(domain.position(&CategoryKey::text("a")), Some(2));
    }

    #[test]
    fn ordinal_scale_assigns_by_position() {
        let mut domain = CategoryDomain::default();
        domain.insert(&CategoryKey::text("p"));
        domain.insert(&CategoryKey::text("q"));
        let scale: OrdinalScale<usize> =
            OrdinalScale::build(domain, |_, i| Ok::<_, ()>(i * 10)).expect("infallible");
        assert_eq!(scale.get(&CategoryKey::text("q")), Some(&10));
        assert_eq!(scale.get(&CategoryKey::text("r")), None);
        assert_eq!(scale.entries().count(), 2);
    }
}
