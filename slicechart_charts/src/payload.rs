// Copyright 2025 the Slicechart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The render request as it arrives from the dashboard.
//!
//! ```json
//! {
//!   "formData": { "color_scheme": "bnbColors", "y_axis_format": ".3s" },
//!   "data": { "data": [ { "key": "a", "values": [ ... ] } ], "yLines": [3] }
//! }
//! ```

use alloc::string::String;
use alloc::vec::Vec;

use serde::Deserialize;

use crate::dataset::Series;
use crate::format::DEFAULT_Y_FORMAT;
use crate::palette::DEFAULT_SCHEME;

/// Display options supplied alongside the data.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FormData {
    /// Color scheme id.
    pub color_scheme: String,
    /// Category axis title; empty for none.
    pub x_axis_label: String,
    /// Value axis title; empty for none.
    pub y_axis_label: String,
    /// d3-style format for value-axis labels and tooltips.
    pub y_axis_format: String,
}

impl Default for FormData {
    fn default() -> Self {
        Self {
            color_scheme: String::from(DEFAULT_SCHEME),
            x_axis_label: String::new(),
            y_axis_label: String::new(),
            y_axis_format: String::from(DEFAULT_Y_FORMAT),
        }
    }
}

impl FormData {
    /// Replaces the color scheme.
    #[must_use]
    pub fn with_color_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.color_scheme = scheme.into();
        self
    }

    /// Sets both axis titles.
    #[must_use]
    pub fn with_axis_labels(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.x_axis_label = x.into();
        self.y_axis_label = y.into();
        self
    }

    /// Replaces the value format.
    #[must_use]
    pub fn with_y_axis_format(mut self, format: impl Into<String>) -> Self {
        self.y_axis_format = format.into();
        self
    }
}

/// Series plus optional horizontal reference values.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ChartData {
    /// The dataset.
    #[serde(default)]
    pub data: Vec<Series>,
    /// Reference-line values; missing, `null` and `[]` all mean none.
    #[serde(rename = "yLines", default)]
    pub y_lines: Option<Vec<f64>>,
}

impl ChartData {
    /// Reference values, treating `None` as empty.
    pub fn reference_values(&self) -> &[f64] {
        self.y_lines.as_deref().unwrap_or(&[])
    }
}

/// A complete render request.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct RenderPayload {
    /// Display options.
    #[serde(rename = "formData", default)]
    pub form_data: FormData,
    /// Data and reference lines.
    pub data: ChartData,
}

impl RenderPayload {
    /// A payload with default form data and no reference lines.
    pub fn new(series: Vec<Series>) -> Self {
        Self {
            form_data: FormData::default(),
            data: ChartData {
                data: series,
                y_lines: None,
            },
        }
    }

    /// Sets the reference-line values.
    #[must_use]
    pub fn with_y_lines(mut self, values: Vec<f64>) -> Self {
        self.data.y_lines = Some(values);
        self
    }

    /// Replaces the form data.
    #[must_use]
    pub fn with_form_data(mut self, form_data: FormData) -> Self {
        self.form_data = form_data;
        self
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::dataset::CategoryKey;

    #[test]
    fn parses_dashboard_payload() {
        let json = r#"{
            "formData": { "color_scheme": "d3Category10", "y_axis_label": "Score" },
            "data": {
                "data": [
                    { "key": "north", "values": [ { "y": 1.5, "color": "a", "shape": 3, "entity": "n1" } ] }
                ],
                "yLines": [2, 4.5]
            }
        }"#;
        let payload: RenderPayload = serde_json::from_str(json).expect("valid payload");
        assert_eq!(payload.form_data.color_scheme, "d3Category10");
        assert_eq!(payload.form_data.y_axis_label, "Score");
        assert_eq!(payload.form_data.y_axis_format, ".3s");
        let point = &payload.data.data[0].values[0];
        assert_eq!(point.color, CategoryKey::text("a"));
        assert_eq!(point.shape, CategoryKey::Number(3.0));
        assert_eq!(payload.data.reference_values(), &[2.0, 4.5]);
    }

    #[test]
    fn missing_and_null_y_lines_are_empty() {
        let missing: RenderPayload =
            serde_json::from_str(r#"{"data":{"data":[]}}"#).expect("valid payload");
        assert!(missing.data.reference_values().is_empty());
        assert_eq!(missing.form_data, FormData::default());

        let null: RenderPayload =
            serde_json::from_str(r#"{"data":{"data":[],"yLines":null}}"#).expect("valid payload");
        assert!(null.data.y_lines.is_none());
        assert!(null.data.reference_values().is_empty());
    }

    #[test]
    fn entity_defaults_to_empty() {
        let payload: RenderPayload = serde_json::from_str(
            r#"{"data":{"data":[{"key":"k","values":[{"y":1,"color":"c","shape":"s"}]}]}}"#,
        )
        .expect("valid payload");
        assert_eq!(payload.data.data[0].values[0].entity, "");
    }
}
