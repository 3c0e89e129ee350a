// Copyright 2025 the Slicechart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point marks: one symbol per data point, grouped by series rank.

use alloc::format;
use alloc::vec::Vec;

use peniko::Color;
use peniko::color::palette::css;
use slicechart_core::{Mark, MarkId, Tooltip};

use crate::dataset::{Point, Series};
use crate::format::NumberFormat;
use crate::scale::{OrdinalScale, ScaleLinear, ScalePoint};
use crate::symbol::Symbol;
use crate::z_order;

/// Generates symbol marks for already-sorted series.
///
/// Series `rank` is placed at `x_scale.x(rank)`; each of its points sits at
/// `y_scale.map(point.y)`, drawn with the shape and color looked up from the
/// point's categories.
#[derive(Clone, Debug)]
pub struct PointMarkSpec<'a> {
    /// Series in rank order.
    pub series: &'a [&'a Series],
    /// Rank to horizontal position.
    pub x_scale: ScalePoint,
    /// Value to vertical position.
    pub y_scale: ScaleLinear,
    /// Color category to fill.
    pub colors: &'a OrdinalScale<Color>,
    /// Shape category to symbol.
    pub shapes: &'a OrdinalScale<Symbol>,
    /// Symbol size.
    pub size: f64,
    /// Format of the value field in tooltips.
    pub value_format: NumberFormat,
    /// Paint order.
    pub z_index: i32,
}

impl<'a> PointMarkSpec<'a> {
    /// Creates a spec with size 8 and general value formatting.
    pub fn new(
        series: &'a [&'a Series],
        x_scale: ScalePoint,
        y_scale: ScaleLinear,
        colors: &'a OrdinalScale<Color>,
        shapes: &'a OrdinalScale<Symbol>,
    ) -> Self {
        Self {
            series,
            x_scale,
            y_scale,
            colors,
            shapes,
            size: 8.0,
            value_format: NumberFormat::default(),
            z_index: z_order::SERIES_POINTS,
        }
    }

    /// Sets the symbol size.
    #[must_use]
    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    /// Sets the tooltip value format.
    #[must_use]
    pub fn with_value_format(mut self, value_format: NumberFormat) -> Self {
        self.value_format = value_format;
        self
    }

    /// One mark per point, in rank then point order.
    pub fn marks(&self) -> Vec<Mark> {
        let mut out = Vec::with_capacity(self.series.iter().map(|s| s.values.len()).sum());
        for (rank, series) in self.series.iter().enumerate() {
            let x = self.x_scale.x(rank);
            tracing::trace!(rank, key = %series.key, x, points = series.values.len(), "series");
            for (i, point) in series.values.iter().enumerate() {
                out.push(self.point_mark(MarkId::for_point(rank, i), x, point));
            }
        }
        out
    }

    fn point_mark(&self, id: MarkId, x: f64, point: &Point) -> Mark {
        let y = self.y_scale.map(point.y);
        let fill = self.colors.get(&point.color).copied().unwrap_or(css::GRAY);
        let symbol = self
            .shapes
            .get(&point.shape)
            .copied()
            .unwrap_or(Symbol::Circle);
        let tooltip = Tooltip::new()
            .with_field("entity", point.entity.as_str())
            .with_field("color", format!("{}", point.color))
            .with_field("shape", format!("{}", point.shape))
            .with_field("value", self.value_format.format(point.y));
        Mark::builder(id)
            .z_index(self.z_index)
            .class("point")
            .tooltip(tooltip)
            .path(symbol.path(x, y, self.size))
            .fill_brush(fill)
            .stroke_width(0.0)
            .build()
    }
}
