// Copyright 2025 the Slicechart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Categorical scatter renderer.
//!
//! Each series becomes one column of symbols. Columns are ordered by the
//! color of each series' first point, values map onto a linear vertical
//! scale, and the color and shape of every symbol come from categorical
//! lookups built over the whole dataset.
//!
//! Two variants share the pipeline:
//! - [`CatscatVariant::Full`] reserves a legend band and thins category ticks
//!   with [`TickPolicy::Dynamic`].
//! - [`CatscatVariant::Simple`] draws no legend and ticks every category.

use alloc::string::ToString;
use alloc::vec::Vec;

use slicechart_core::{Mark, MarkId};

use crate::axis::{AxisSpec, AxisStyle, AxisTick};
use crate::chart::{Chart, RenderContext};
use crate::dataset::{point_count, sorted_series, validate};
use crate::error::RenderError;
use crate::format::NumberFormat;
use crate::layout::PlotLayout;
use crate::legend::{LegendKey, LegendSpec};
use crate::payload::RenderPayload;
use crate::point_mark::PointMarkSpec;
use crate::rule_mark::RuleMarkSpec;
use crate::scale::{CategoryDomain, OrdinalScale, ScaleLinear, ScalePoint};
use crate::symbol::Symbol;
use crate::ticks::TickPolicy;
use crate::z_order;

const Y_AXIS_GUIDE: u16 = 1;
const X_AXIS_GUIDE: u16 = 2;
const REFERENCE_LINE_GUIDE: u16 = 3;
const LEGEND_GUIDE: u16 = 4;

/// Which of the two categorical scatter renderers to run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CatscatVariant {
    /// Legend plus dynamic category ticks.
    #[default]
    Full,
    /// No legend; every category ticked.
    Simple,
}

impl CatscatVariant {
    /// Category tick policy for this variant.
    pub fn tick_policy(self) -> TickPolicy {
        match self {
            Self::Full => TickPolicy::Dynamic,
            Self::Simple => TickPolicy::EveryCategory,
        }
    }

    fn draws_legend(self, show_legend: bool) -> bool {
        self == Self::Full && show_legend
    }
}

/// Renders with [`CatscatVariant::Full`].
pub fn render_catscat(ctx: &RenderContext<'_>, payload: &RenderPayload) -> Result<Chart, RenderError> {
    render(ctx, payload, CatscatVariant::Full)
}

/// Renders with [`CatscatVariant::Simple`].
pub fn render_catscat_simple(
    ctx: &RenderContext<'_>,
    payload: &RenderPayload,
) -> Result<Chart, RenderError> {
    render(ctx, payload, CatscatVariant::Simple)
}

/// Runs the categorical scatter pipeline.
///
/// Fails before drawing anything if the dataset is empty or holds a
/// non-finite value, if the value format does not parse, if the surface
/// leaves no plot area, or if the color scheme is unknown.
pub fn render(
    ctx: &RenderContext<'_>,
    payload: &RenderPayload,
    variant: CatscatVariant,
) -> Result<Chart, RenderError> {
    let config = ctx.config;
    let form = &payload.form_data;
    let series = &payload.data.data;

    let y_domain = validate(series)?;
    let value_format = NumberFormat::parse(&form.y_axis_format)?;
    let with_legend = variant.draws_legend(config.show_legend);
    let layout = PlotLayout::compute(ctx.surface, &config.padding, with_legend).check()?;
    tracing::debug!(
        width = ctx.surface.width,
        height = ctx.surface.height,
        plot_width = layout.plot_width(),
        plot_height = layout.plot_height(),
        legend = with_legend,
        "layout"
    );

    let sorted = sorted_series(series);
    let plot = layout.plot;
    let y_scale = ScaleLinear::new(y_domain, (plot.y1, plot.y0));
    let x_scale = ScalePoint::new((plot.x0, plot.x1), sorted.len());

    let scheme = form.color_scheme.as_str();
    let colors = OrdinalScale::build(
        CategoryDomain::discover(sorted.iter().copied(), |p| &p.color),
        |value, position| ctx.colors.resolve(value, position, scheme),
    )?;
    let shapes = OrdinalScale::build(
        CategoryDomain::discover(sorted.iter().copied(), |p| &p.shape),
        |_, position| Ok::<_, RenderError>(Symbol::nth(position)),
    )?;
    tracing::debug!(
        min = y_domain.0,
        max = y_domain.1,
        series = sorted.len(),
        colors = colors.domain().len(),
        shapes = shapes.domain().len(),
        scheme,
        "domains"
    );

    let mut marks = PointMarkSpec::new(&sorted, x_scale, y_scale, &colors, &shapes)
        .with_size(config.point_size)
        .with_value_format(value_format)
        .marks();
    debug_assert_eq!(marks.len(), point_count(series), "one mark per point");

    marks.extend(reference_lines(ctx, payload.data.reference_values(), &layout, y_scale));

    let category_positions: Vec<f64> = (0..sorted.len()).map(|rank| x_scale.x(rank)).collect();
    let category_ticks = variant.tick_policy().ticks(sorted.len());
    tracing::debug!(ticks = ?category_ticks, "category ticks");

    let axis_style = AxisStyle {
        label_font_size: config.axis_font_size,
        title_font_size: config.axis_title_font_size,
        ..AxisStyle::default()
    };
    let y_ticks = y_scale
        .ticks(config.y_tick_count)
        .into_iter()
        .map(|v| AxisTick::new(y_scale.map(v), value_format.format(v)))
        .collect();
    marks.extend(
        AxisSpec::left(Y_AXIS_GUIDE, y_ticks)
            .with_title(form.y_axis_label.as_str())
            .with_style(axis_style.clone())
            .with_grid(config.value_grid.map(|c| c.0))
            .marks(plot, layout.axis_left),
    );
    let x_ticks = category_ticks
        .iter()
        .map(|&rank| AxisTick::new(category_positions[rank], sorted[rank].key.as_str()))
        .collect();
    marks.extend(
        AxisSpec::bottom(X_AXIS_GUIDE, x_ticks)
            .with_title(form.x_axis_label.as_str())
            .with_style(axis_style)
            .with_fitted_labels(ctx.measurer)
            .marks(plot, layout.label_band),
    );

    let legend = match layout.legend_band {
        Some(band) => {
            let color_keys = colors
                .entries()
                .map(|(value, color)| LegendKey::swatch(value.to_string(), *color))
                .collect();
            let shape_keys = shapes
                .entries()
                .map(|(value, symbol)| LegendKey::symbol(value.to_string(), *symbol))
                .collect();
            let legend = LegendSpec::new(LEGEND_GUIDE, color_keys, shape_keys)
                .with_style(config.legend)
                .arrange(ctx.measurer, band);
            marks.extend(legend.marks.iter().cloned());
            Some(legend)
        }
        None => None,
    };

    Ok(Chart {
        size: ctx.surface,
        layout,
        marks,
        y_domain,
        series_order: sorted.iter().map(|s| s.key.clone()).collect(),
        category_positions,
        category_ticks,
        color_domain: colors.domain().values().to_vec(),
        shape_domain: shapes.domain().values().to_vec(),
        legend,
    })
}

/// Full-width horizontal lines at each finite reference value.
fn reference_lines(
    ctx: &RenderContext<'_>,
    values: &[f64],
    layout: &PlotLayout,
    y_scale: ScaleLinear,
) -> Vec<Mark> {
    let style = ctx.config.reference_line;
    values
        .iter()
        .enumerate()
        .filter(|(_, v)| v.is_finite())
        .map(|(i, &v)| {
            RuleMarkSpec::horizontal(
                MarkId::for_guide(REFERENCE_LINE_GUIDE, 0, i),
                y_scale.map(v),
                layout.plot.x0,
                layout.plot.x1,
            )
            .with_stroke(style.color.0, style.stroke_width)
            .with_z_index(z_order::REFERENCE_LINES)
            .with_class("y-line")
            .mark()
        })
        .collect()
}
