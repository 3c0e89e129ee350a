// Copyright 2025 the Slicechart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for rendering.

use alloc::string::String;

use thiserror::Error;

/// A dataset that cannot be rendered.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DatasetError {
    /// There are no series at all.
    #[error("dataset has no series")]
    Empty,
    /// Series exist but none of them has a point, so there is no value domain.
    #[error("dataset has no points in any series")]
    NoPoints,
    /// A point value is NaN or infinite.
    #[error("series `{series}` point {index} has a non-finite value")]
    NonFiniteValue {
        /// Key of the offending series.
        series: String,
        /// Index of the offending point within that series.
        index: usize,
    },
}

/// A number-format specifier that could not be parsed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("invalid number format `{spec}`: {reason}")]
pub struct FormatError {
    /// The specifier as given.
    pub spec: String,
    /// What was wrong with it.
    pub reason: &'static str,
}

/// Any failure from a chart renderer.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum RenderError {
    /// Input data failed validation.
    #[error("invalid dataset: {0}")]
    InvalidDataset(#[from] DatasetError),
    /// The vertical axis format could not be parsed.
    #[error(transparent)]
    InvalidFormat(#[from] FormatError),
    /// After reserving padding and bands, nothing is left to plot into.
    #[error("surface leaves no plot area ({width} x {height})")]
    DegenerateLayout {
        /// Computed plot width.
        width: f64,
        /// Computed plot height.
        height: f64,
    },
    /// No renderer is registered under this chart type.
    #[error("unknown chart type `{0}`")]
    UnknownChart(String),
    /// No palette is registered under this scheme id.
    #[error("unknown color scheme `{0}`")]
    UnknownColorScheme(String),
}
