// Copyright 2025 the Slicechart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout calculator.
//!
//! The surface is carved up by a fixed policy rather than by measuring guides:
//!
//! ```text
//! +------------------------------------------+
//! |                  top                     |
//! | left |          plot            | right |
//! |      |     label band (x axis)  |       |
//! |      |     legend band          |       |
//! |                 bottom                   |
//! +------------------------------------------+
//! ```
//!
//! Nothing is clamped: a surface too small for the padding yields a
//! non-positive plot size, which [`PlotLayout::check`] reports.

use kurbo::Rect;

use crate::config::PaddingPolicy;
use crate::error::RenderError;

/// A width/height pair in surface units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

impl Size {
    /// Convenience constructor.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Output of the layout calculator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotLayout {
    /// Whole surface.
    pub view: Rect,
    /// Data rectangle the scales map into.
    pub plot: Rect,
    /// Area left of the plot reserved for the value axis.
    pub axis_left: Rect,
    /// Band below the plot reserved for category labels.
    pub label_band: Rect,
    /// Band below the labels reserved for the legend, when enabled.
    pub legend_band: Option<Rect>,
}

impl PlotLayout {
    /// Applies `policy` to a surface of `size`.
    pub fn compute(size: Size, policy: &PaddingPolicy, with_legend: bool) -> Self {
        let legend_h = if with_legend {
            policy.legend_fraction * size.height
        } else {
            0.0
        };
        let label_h = policy.label_fraction * size.height;

        let plot_w = size.width - policy.left - policy.right;
        let plot_h = size.height - policy.top - policy.bottom - legend_h - label_h;

        let plot = Rect::new(
            policy.left,
            policy.top,
            policy.left + plot_w,
            policy.top + plot_h,
        );
        let axis_left = Rect::new(0.0, plot.y0, plot.x0, plot.y1);
        let label_band = Rect::new(plot.x0, plot.y1, plot.x1, plot.y1 + label_h);
        let legend_band = with_legend.then(|| {
            Rect::new(
                plot.x0,
                label_band.y1,
                plot.x1,
                label_band.y1 + legend_h,
            )
        });

        Self {
            view: Rect::new(0.0, 0.0, size.width, size.height),
            plot,
            axis_left,
            label_band,
            legend_band,
        }
    }

    /// Plot width (may be negative for undersized surfaces).
    pub fn plot_width(&self) -> f64 {
        self.plot.x1 - self.plot.x0
    }

    /// Plot height (may be negative for undersized surfaces).
    pub fn plot_height(&self) -> f64 {
        self.plot.y1 - self.plot.y0
    }

    /// Fails with [`RenderError::DegenerateLayout`] unless the plot has area.
    pub fn check(self) -> Result<Self, RenderError> {
        let (width, height) = (self.plot_width(), self.plot_height());
        if width > 0.0 && height > 0.0 {
            Ok(self)
        } else {
            Err(RenderError::DegenerateLayout { width, height })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_stack_below_the_plot() {
        let policy = PaddingPolicy::default();
        let layout = PlotLayout::compute(Size::new(400.0, 300.0), &policy, true);

        // 300 - 20 top - 10 bottom - 60 legend - 30 labels
        assert!((layout.plot_height() - 180.0).abs() < 1e-9);
        // 400 - 60 left - 20 right
        assert!((layout.plot_width() - 320.0).abs() < 1e-9);

        let legend = layout.legend_band.expect("legend band");
        assert_eq!(layout.label_band.y0, layout.plot.y1);
        assert_eq!(legend.y0, layout.label_band.y1);
        assert!((legend.height() - 60.0).abs() < 1e-9);
        assert!((legend.y1 + policy.bottom - 300.0).abs() < 1e-9);
    }

    #[test]
    fn no_legend_gives_the_band_back_to_the_plot() {
        let policy = PaddingPolicy::default();
        let with = PlotLayout::compute(Size::new(400.0, 300.0), &policy, true);
        let without = PlotLayout::compute(Size::new(400.0, 300.0), &policy, false);
        assert!(without.legend_band.is_none());
        assert!((without.plot_height() - with.plot_height() - 60.0).abs() < 1e-9);
    }

    #[test]
    fn tiny_surface_is_reported_not_clamped() {
        let layout = PlotLayout::compute(Size::new(50.0, 40.0), &PaddingPolicy::default(), true);
        assert!(layout.plot_width() < 0.0);
        let err = layout.check().expect_err("degenerate");
        assert!(matches!(err, RenderError::DegenerateLayout { width, .. } if width < 0.0));
    }
}
