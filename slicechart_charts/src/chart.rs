// Copyright 2025 the Slicechart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render inputs and outputs shared by every chart type.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use slicechart_core::Mark;
use slicechart_text::TextMeasurer;

use crate::config::ChartConfig;
use crate::dataset::CategoryKey;
use crate::layout::{PlotLayout, Size};
use crate::legend::LegendLayout;
use crate::palette::ColorResolver;

/// Everything a renderer needs besides the payload.
///
/// The context is borrowed for one render call; renderers keep no state
/// between calls.
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    /// Target surface size.
    pub surface: Size,
    /// Layout and styling policy.
    pub config: &'a ChartConfig,
    /// Text measurement service for legend and axis fitting.
    pub measurer: &'a dyn TextMeasurer,
    /// Category color lookup.
    pub colors: &'a dyn ColorResolver,
}

impl<'a> RenderContext<'a> {
    /// Bundles render inputs.
    pub fn new(
        surface: Size,
        config: &'a ChartConfig,
        measurer: &'a dyn TextMeasurer,
        colors: &'a dyn ColorResolver,
    ) -> Self {
        Self {
            surface,
            config,
            measurer,
            colors,
        }
    }
}

impl fmt::Debug for RenderContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderContext")
            .field("surface", &self.surface)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// A rendered chart: positioned marks plus the derived values that placed them.
#[derive(Clone, Debug)]
pub struct Chart {
    /// Surface size the chart was laid out for.
    pub size: Size,
    /// Computed bands.
    pub layout: PlotLayout,
    /// Every mark, unordered; sort by `(z_index, id)` to paint.
    pub marks: Vec<Mark>,
    /// Vertical value domain `(min, max)`.
    pub y_domain: (f64, f64),
    /// Series keys in rank order.
    pub series_order: Vec<String>,
    /// Horizontal position of each rank.
    pub category_positions: Vec<f64>,
    /// Ranks that carry a category-axis tick.
    pub category_ticks: Vec<usize>,
    /// Color categories in first-seen order.
    pub color_domain: Vec<CategoryKey>,
    /// Shape categories in first-seen order.
    pub shape_domain: Vec<CategoryKey>,
    /// Legend keys and rows, when a legend was drawn.
    pub legend: Option<LegendLayout>,
}

impl Chart {
    /// Marks tagged with `class`.
    pub fn marks_with_class<'a>(&'a self, class: &'a str) -> impl Iterator<Item = &'a Mark> + 'a {
        self.marks.iter().filter(move |m| m.class == Some(class))
    }

    /// Marks in paint order: ascending `z_index`, then id.
    pub fn paint_order(&self) -> Vec<&Mark> {
        let mut out: Vec<&Mark> = self.marks.iter().collect();
        out.sort_by_key(|m| (m.z_index, m.id));
        out
    }
}
