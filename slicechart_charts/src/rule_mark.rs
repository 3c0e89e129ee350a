// Copyright 2025 the Slicechart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Straight stroked segments: axis domains, ticks, gridlines and reference lines.

use kurbo::BezPath;
use peniko::{Brush, Color};
use slicechart_core::{Mark, MarkId};

use crate::z_order;

/// A stroked line segment.
#[derive(Clone, Debug)]
pub struct RuleMarkSpec {
    /// Stable mark id.
    pub id: MarkId,
    /// Start point.
    pub from: (f64, f64),
    /// End point.
    pub to: (f64, f64),
    /// Stroke paint.
    pub stroke: Brush,
    /// Stroke width.
    pub stroke_width: f64,
    /// Paint order.
    pub z_index: i32,
    /// Semantic class for the adapter.
    pub class: Option<&'static str>,
}

impl RuleMarkSpec {
    /// A 1px black rule from `from` to `to`.
    pub fn new(id: MarkId, from: (f64, f64), to: (f64, f64)) -> Self {
        Self {
            id,
            from,
            to,
            stroke: Brush::Solid(peniko::color::palette::css::BLACK),
            stroke_width: 1.0,
            z_index: z_order::AXIS_RULES,
            class: None,
        }
    }

    /// A horizontal rule at `y` spanning `x0..x1`.
    pub fn horizontal(id: MarkId, y: f64, x0: f64, x1: f64) -> Self {
        Self::new(id, (x0, y), (x1, y))
    }

    /// A vertical rule at `x` spanning `y0..y1`.
    pub fn vertical(id: MarkId, x: f64, y0: f64, y1: f64) -> Self {
        Self::new(id, (x, y0), (x, y1))
    }

    /// Sets stroke paint and width.
    #[must_use]
    pub fn with_stroke(mut self, stroke: impl Into<Brush>, stroke_width: f64) -> Self {
        self.stroke = stroke.into();
        self.stroke_width = stroke_width;
        self
    }

    /// Sets the paint order.
    #[must_use]
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Sets the semantic class.
    #[must_use]
    pub fn with_class(mut self, class: &'static str) -> Self {
        self.class = Some(class);
        self
    }

    /// Generates the mark.
    pub fn mark(&self) -> Mark {
        let mut p = BezPath::new();
        p.move_to(self.from);
        p.line_to(self.to);
        let mut builder = Mark::builder(self.id).z_index(self.z_index);
        if let Some(class) = self.class {
            builder = builder.class(class);
        }
        builder
            .path(p)
            .fill_brush(Color::TRANSPARENT)
            .stroke_brush(self.stroke.clone())
            .stroke_width(self.stroke_width)
            .build()
    }
}
