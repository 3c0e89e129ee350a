// Copyright 2025 the Slicechart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Marks and their builder.

use alloc::string::String;

use kurbo::{BezPath, Point, Rect, Shape};
use peniko::color::palette::css;
use peniko::{Brush, Color};

use crate::Tooltip;

/// Stable identity for a mark within one rendered chart.
///
/// Guide marks pack `(guide, role, index)` into disjoint bit fields below
/// [`MarkId::POINT_NAMESPACE`]; per-point marks live above it. Two marks get
/// the same id only if all of their components are equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkId(pub u64);

impl MarkId {
    /// First id used for per-point marks.
    pub const POINT_NAMESPACE: u64 = 1 << 62;

    /// Wraps a raw id.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Id of the `index`-th mark playing `role` in the guide `guide`.
    ///
    /// `guide` occupies bits 40..56, `role` bits 32..40 and `index` the low
    /// 32 bits.
    pub fn for_guide(guide: u16, role: u8, index: usize) -> Self {
        Self((u64::from(guide) << 40) | (u64::from(role) << 32) | (index as u64 & 0xFFFF_FFFF))
    }

    /// Id of the `point`-th point of the series at `rank` (after sorting).
    pub fn for_point(rank: usize, point: usize) -> Self {
        Self(Self::POINT_NAMESPACE | ((rank as u64) << 24) | (point as u64 & 0xFF_FFFF))
    }
}

/// Horizontal anchoring of a text mark relative to its position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextAnchor {
    /// Text starts at the position.
    Start,
    /// Text is centred on the position.
    Middle,
    /// Text ends at the position.
    End,
}

/// Vertical anchoring of a text mark relative to its position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextBaseline {
    /// Position is the vertical middle of the line.
    Middle,
    /// Position is the alphabetic baseline.
    Alphabetic,
    /// Position is the top of the line.
    Hanging,
}

/// The primitive shape kind of a mark.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MarkKind {
    /// Axis-aligned rectangle.
    Rect,
    /// Arbitrary filled and/or stroked path.
    Path,
    /// Single line of text.
    Text,
}

/// A filled rectangle.
#[derive(Clone, Debug, PartialEq)]
pub struct RectMark {
    /// Geometry in surface coordinates.
    pub rect: Rect,
    /// Fill paint.
    pub fill: Brush,
}

/// A path with independent fill and stroke.
#[derive(Clone, Debug, PartialEq)]
pub struct PathMark {
    /// Geometry in surface coordinates.
    pub path: BezPath,
    /// Fill paint; transparent for pure strokes.
    pub fill: Brush,
    /// Stroke paint.
    pub stroke: Brush,
    /// Stroke width; `0.0` disables the stroke.
    pub stroke_width: f64,
}

/// A line of unshaped text.
#[derive(Clone, Debug, PartialEq)]
pub struct TextMark {
    /// Anchor position.
    pub pos: Point,
    /// Content.
    pub text: String,
    /// Font size in surface units.
    pub font_size: f64,
    /// Rotation about `pos`, in degrees.
    pub angle: f64,
    /// Horizontal anchoring.
    pub anchor: TextAnchor,
    /// Vertical anchoring.
    pub baseline: TextBaseline,
    /// Fill paint.
    pub fill: Brush,
}

/// The geometry and paint of a mark.
#[derive(Clone, Debug, PartialEq)]
pub enum MarkPayload {
    /// See [`RectMark`].
    Rect(RectMark),
    /// See [`PathMark`].
    Path(PathMark),
    /// See [`TextMark`].
    Text(TextMark),
}

impl MarkPayload {
    /// Geometric bounds, if known without text measurement.
    pub fn bounds(&self) -> Option<Rect> {
        match self {
            Self::Rect(r) => Some(r.rect),
            Self::Path(p) => Some(p.path.bounding_box()),
            Self::Text(_) => None,
        }
    }
}

/// One drawable primitive.
#[derive(Clone, Debug, PartialEq)]
pub struct Mark {
    /// Stable identity.
    pub id: MarkId,
    /// Paint order; lower draws first, ties broken by `id`.
    pub z_index: i32,
    /// Optional semantic class, emitted as e.g. an SVG `class` attribute.
    pub class: Option<&'static str>,
    /// Optional hover text.
    pub tooltip: Option<Tooltip>,
    /// Geometry and paint.
    pub payload: MarkPayload,
}

impl Mark {
    /// Starts building a mark with the given id.
    pub fn builder(id: MarkId) -> MarkBuilder {
        MarkBuilder {
            id,
            z_index: 0,
            class: None,
            tooltip: None,
        }
    }

    /// The primitive kind.
    pub fn kind(&self) -> MarkKind {
        match self.payload {
            MarkPayload::Rect(_) => MarkKind::Rect,
            MarkPayload::Path(_) => MarkKind::Path,
            MarkPayload::Text(_) => MarkKind::Text,
        }
    }

    /// Text content, for text marks.
    pub fn text(&self) -> Option<&str> {
        match &self.payload {
            MarkPayload::Text(t) => Some(&t.text),
            _ => None,
        }
    }

    /// Geometric bounds, if known without text measurement.
    pub fn bounds(&self) -> Option<Rect> {
        self.payload.bounds()
    }
}

/// Common mark attributes; pick a shape with [`rect`](Self::rect),
/// [`path`](Self::path) or [`text`](Self::text).
#[derive(Clone, Debug)]
pub struct MarkBuilder {
    id: MarkId,
    z_index: i32,
    class: Option<&'static str>,
    tooltip: Option<Tooltip>,
}

impl MarkBuilder {
    /// Sets the paint order.
    #[must_use]
    pub fn z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Sets the semantic class.
    #[must_use]
    pub fn class(mut self, class: &'static str) -> Self {
        self.class = Some(class);
        self
    }

    /// Attaches hover text.
    #[must_use]
    pub fn tooltip(mut self, tooltip: Tooltip) -> Self {
        self.tooltip = Some(tooltip);
        self
    }

    /// A rectangle, filled black until told otherwise.
    pub fn rect(self, rect: Rect) -> RectBuilder {
        RectBuilder {
            base: self,
            mark: RectMark {
                rect,
                fill: Brush::Solid(css::BLACK),
            },
        }
    }

    /// A path, unfilled with a 1px black stroke until told otherwise.
    pub fn path(self, path: BezPath) -> PathBuilder {
        PathBuilder {
            base: self,
            mark: PathMark {
                path,
                fill: Brush::Solid(Color::TRANSPARENT),
                stroke: Brush::Solid(css::BLACK),
                stroke_width: 1.0,
            },
        }
    }

    /// A text line at `pos`, 12px black, start-anchored on its middle.
    pub fn text(self, pos: impl Into<Point>, text: impl Into<String>) -> TextBuilder {
        TextBuilder {
            base: self,
            mark: TextMark {
                pos: pos.into(),
                text: text.into(),
                font_size: 12.0,
                angle: 0.0,
                anchor: TextAnchor::Start,
                baseline: TextBaseline::Middle,
                fill: Brush::Solid(css::BLACK),
            },
        }
    }

    fn finish(self, payload: MarkPayload) -> Mark {
        Mark {
            id: self.id,
            z_index: self.z_index,
            class: self.class,
            tooltip: self.tooltip,
            payload,
        }
    }
}

/// Builder for [`RectMark`]s.
#[derive(Clone, Debug)]
pub struct RectBuilder {
    base: MarkBuilder,
    mark: RectMark,
}

impl RectBuilder {
    /// Sets the fill paint.
    #[must_use]
    pub fn fill_brush(mut self, fill: impl Into<Brush>) -> Self {
        self.mark.fill = fill.into();
        self
    }

    /// Finishes the mark.
    pub fn build(self) -> Mark {
        self.base.finish(MarkPayload::Rect(self.mark))
    }
}

/// Builder for [`PathMark`]s.
#[derive(Clone, Debug)]
pub struct PathBuilder {
    base: MarkBuilder,
    mark: PathMark,
}

impl PathBuilder {
    /// Sets the fill paint.
    #[must_use]
    pub fn fill_brush(mut self, fill: impl Into<Brush>) -> Self {
        self.mark.fill = fill.into();
        self
    }

    /// Sets the stroke paint.
    #[must_use]
    pub fn stroke_brush(mut self, stroke: impl Into<Brush>) -> Self {
        self.mark.stroke = stroke.into();
        self
    }

    /// Sets the stroke width.
    #[must_use]
    pub fn stroke_width(mut self, stroke_width: f64) -> Self {
        self.mark.stroke_width = stroke_width;
        self
    }

    /// Finishes the mark.
    pub fn build(self) -> Mark {
        self.base.finish(MarkPayload::Path(self.mark))
    }
}

/// Builder for [`TextMark`]s.
#[derive(Clone, Debug)]
pub struct TextBuilder {
    base: MarkBuilder,
    mark: TextMark,
}

impl TextBuilder {
    /// Sets the font size.
    #[must_use]
    pub fn font_size(mut self, font_size: f64) -> Self {
        self.mark.font_size = font_size;
        self
    }

    /// Sets the rotation in degrees.
    #[must_use]
    pub fn angle(mut self, angle: f64) -> Self {
        self.mark.angle = angle;
        self
    }

    /// Sets horizontal anchoring.
    #[must_use]
    pub fn anchor(mut self, anchor: TextAnchor) -> Self {
        self.mark.anchor = anchor;
        self
    }

    /// Sets vertical anchoring.
    #[must_use]
    pub fn baseline(mut self, baseline: TextBaseline) -> Self {
        self.mark.baseline = baseline;
        self
    }

    /// Sets the fill paint.
    #[must_use]
    pub fn fill_brush(mut self, fill: impl Into<Brush>) -> Self {
        self.mark.fill = fill.into();
        self
    }

    /// Finishes the mark.
    pub fn build(self) -> Mark {
        self.base.finish(MarkPayload::Text(self.mark))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_ids_do_not_collide_with_guide_ids() {
        let a = MarkId::for_point(0, 0);
        let b = MarkId::for_point(0, 1);
        let c = MarkId::for_point(1, 0);
        assert!(a.0 >= MarkId::POINT_NAMESPACE);
        assert_ne!(a, b);
        assert_ne!(a, c);
        assert_ne!(b, c);
    }

    #[test]
    fn guide_ids_keep_roles_apart_past_large_indices() {
        let tick = MarkId::for_guide(1, 1, 1000);
        let label = MarkId::for_guide(1, 2, 0);
        assert_ne!(tick, label);
        assert_ne!(MarkId::for_guide(1, 0, 70_000), MarkId::for_guide(2, 0, 0));
        assert!(MarkId::for_guide(u16::MAX, u8::MAX, usize::MAX).0 < MarkId::POINT_NAMESPACE);
    }

    #[test]
    fn builder_carries_common_attributes() {
        let m = Mark::builder(MarkId::from_raw(7))
            .z_index(3)
            .class("point")
            .tooltip(Tooltip::new().with_field("value", "1"))
            .rect(Rect::new(0.0, 0.0, 2.0, 4.0))
            .build();
        assert_eq!(m.kind(), MarkKind::Rect);
        assert_eq!(m.z_index, 3);
        assert_eq!(m.class, Some("point"));
        assert_eq!(m.bounds(), Some(Rect::new(0.0, 0.0, 2.0, 4.0)));
        assert!(m.tooltip.is_some());
    }

    #[test]
    fn text_marks_have_no_intrinsic_bounds() {
        let m = Mark::builder(MarkId::from_raw(1))
            .text((1.0, 2.0), "hi")
            .anchor(TextAnchor::Middle)
            .build();
        assert_eq!(m.kind(), MarkKind::Text);
        assert_eq!(m.text(), Some("hi"));
        assert!(m.bounds().is_none());
    }
}
