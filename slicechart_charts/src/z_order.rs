// Copyright 2025 the Slicechart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Paint-order bands for generated marks.
//!
//! Adapters sort by `(z_index, MarkId)`, so marks within a band keep a
//! deterministic order.

/// Gridlines behind everything.
pub const GRID_LINES: i32 = -50;
/// Plotted point symbols.
pub const SERIES_POINTS: i32 = 20;
/// Reference lines drawn over the points.
pub const REFERENCE_LINES: i32 = 25;
/// Axis domain lines and tick marks.
pub const AXIS_RULES: i32 = 30;
/// Axis tick labels.
pub const AXIS_LABELS: i32 = 40;
/// Axis titles.
pub const AXIS_TITLES: i32 = 50;
/// Legend swatches and symbols.
pub const LEGEND_SWATCHES: i32 = 60;
/// Legend labels.
pub const LEGEND_LABELS: i32 = 70;
