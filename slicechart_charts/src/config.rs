// Copyright 2025 the Slicechart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renderer configuration.
//!
//! Every field has a default so a partial JSON document (or none at all) is a
//! valid configuration.

use alloc::string::String;

use peniko::Color;
use serde::Deserialize;

use crate::palette::parse_hex_color;

/// Fixed padding around the plot plus bands reserved below it.
///
/// Band heights are fractions of the surface height.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PaddingPolicy {
    /// Space above the plot.
    pub top: f64,
    /// Space right of the plot.
    pub right: f64,
    /// Space below the legend band.
    pub bottom: f64,
    /// Space left of the plot, holding the value axis.
    pub left: f64,
    /// Legend band height as a fraction of surface height.
    pub legend_fraction: f64,
    /// Category-label band height as a fraction of surface height.
    pub label_fraction: f64,
}

impl Default for PaddingPolicy {
    fn default() -> Self {
        Self {
            top: 20.0,
            right: 20.0,
            bottom: 10.0,
            left: 60.0,
            legend_fraction: 0.2,
            label_fraction: 0.1,
        }
    }
}

/// Legend key styling and packing gaps.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct LegendStyle {
    /// Swatch/symbol size.
    pub symbol_size: f64,
    /// Gap between a key's visual and its label.
    pub label_dx: f64,
    /// Horizontal gap between keys in a row.
    pub key_gap: f64,
    /// Vertical gap between rows.
    pub row_gap: f64,
    /// Label font size.
    pub font_size: f64,
}

impl Default for LegendStyle {
    fn default() -> Self {
        Self {
            symbol_size: 10.0,
            label_dx: 4.0,
            key_gap: 12.0,
            row_gap: 6.0,
            font_size: 10.0,
        }
    }
}

/// A color given as `#rrggbb` in configuration files.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(try_from = "String")]
pub struct HexColor(pub Color);

impl TryFrom<String> for HexColor {
    type Error = &'static str;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        parse_hex_color(&value)
            .map(Self)
            .ok_or("expected a color like `#rrggbb`")
    }
}

/// Styling for horizontal reference lines.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ReferenceLineStyle {
    /// Stroke color.
    pub color: HexColor,
    /// Stroke width.
    pub stroke_width: f64,
}

impl Default for ReferenceLineStyle {
    fn default() -> Self {
        Self {
            color: HexColor(crate::palette::rgb(0xff0000)),
            stroke_width: 2.0,
        }
    }
}

/// Everything a categorical scatter render needs besides data and surface.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Padding and band policy.
    pub padding: PaddingPolicy,
    /// Point symbol size (diameter / side).
    pub point_size: f64,
    /// Legend styling.
    pub legend: LegendStyle,
    /// Whether the legend band is reserved and drawn.
    pub show_legend: bool,
    /// Tick label font size.
    pub axis_font_size: f64,
    /// Axis title font size.
    pub axis_title_font_size: f64,
    /// Approximate number of value-axis ticks.
    pub y_tick_count: usize,
    /// Reference line styling.
    pub reference_line: ReferenceLineStyle,
    /// Horizontal gridlines at the value-axis ticks; `None` draws none.
    pub value_grid: Option<HexColor>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            padding: PaddingPolicy::default(),
            point_size: 8.0,
            legend: LegendStyle::default(),
            show_legend: true,
            axis_font_size: 10.0,
            axis_title_font_size: 11.0,
            y_tick_count: 5,
            reference_line: ReferenceLineStyle::default(),
            value_grid: None,
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg: ChartConfig = serde_json::from_str(
            r##"{"padding":{"left":80},"reference_line":{"color":"#00ff00"}}"##,
        )
        .expect("valid config");
        assert_eq!(cfg.padding.left, 80.0);
        assert_eq!(cfg.padding.top, 20.0);
        assert_eq!(cfg.reference_line.color.0, crate::palette::rgb(0x00ff00));
        assert_eq!(cfg.reference_line.stroke_width, 2.0);
        assert!(cfg.show_legend);
        assert_eq!(cfg.value_grid, None);
    }

    #[test]
    fn value_grid_parses_a_color() {
        let cfg: ChartConfig =
            serde_json::from_str(r##"{"value_grid":"#dddddd"}"##).expect("valid config");
        assert_eq!(cfg.value_grid, Some(HexColor(crate::palette::rgb(0xdddddd))));
    }

    #[test]
    fn bad_color_is_rejected() {
        let err = serde_json::from_str::<ChartConfig>(r#"{"reference_line":{"color":"red"}}"#);
        assert!(err.is_err());
    }
}
