// Copyright 2025 the Slicechart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Categorical scatter charts for BI dashboards, built on `slicechart_core`.
//!
//! A render takes a [`RenderPayload`] (series, reference values and display
//! options) plus a [`RenderContext`] (surface size, [`ChartConfig`], a text
//! measurer and a color resolver) and produces a [`Chart`]: a flat list of
//! positioned marks together with the layout, domains and legend rows that
//! placed them.
//!
//! The pipeline is:
//! - validate the dataset and sort series by their first point's color,
//! - carve the surface into plot, label and legend bands ([`PlotLayout`]),
//! - build a linear value scale, a point scale over series ranks and
//!   categorical color and shape lookups,
//! - emit point marks, reference lines and axes,
//! - measure legend keys and greedily pack them into rows ([`pack_rows`]).
//!
//! Chart types are looked up by id through a [`ChartRegistry`].
//!
//! Drawing is out of scope; see `slicechart_svg` for an SVG adapter.

#![no_std]

extern crate alloc;

mod axis;
mod catscat;
mod chart;
mod config;
mod dataset;
mod error;
#[cfg(not(feature = "std"))]
mod float;
mod format;
mod layout;
mod legend;
mod palette;
mod payload;
mod point_mark;
mod registry;
mod rule_mark;
mod scale;
mod symbol;
mod ticks;
mod z_order;

pub use axis::{AxisOrient, AxisSpec, AxisStyle, AxisTick};
pub use catscat::{CatscatVariant, render, render_catscat, render_catscat_simple};
pub use chart::{Chart, RenderContext};
pub use config::{ChartConfig, HexColor, LegendStyle, PaddingPolicy, ReferenceLineStyle};
pub use dataset::{
    CategoryKey, Point, Series, compare_sort_keys, point_count, sorted_series, validate,
};
pub use error::{DatasetError, FormatError, RenderError};
pub use format::{DEFAULT_Y_FORMAT, Notation, NumberFormat};
pub use layout::{PlotLayout, Size};
pub use legend::{KeyVisual, LegendKey, LegendLayout, LegendRow, LegendSpec, MeasuredKey, pack_rows};
pub use palette::{
    ColorResolver, ColorScheme, DEFAULT_SCHEME, PaletteResolver, SCHEMES, parse_hex_color, rgb,
};
pub use payload::{ChartData, FormData, RenderPayload};
pub use point_mark::PointMarkSpec;
pub use registry::{ChartRegistry, RenderFn};
pub use rule_mark::RuleMarkSpec;
pub use scale::{CategoryDomain, OrdinalScale, ScaleLinear, ScalePoint};
pub use symbol::Symbol;
pub use ticks::{TickPolicy, decimal_digits, dynamic_ticks, tick_interval};
pub use z_order::*;
