// Copyright 2025 the Slicechart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis mark generation.
//!
//! An axis here is given its ticks already placed: the caller resolves tick
//! values through whatever scale it uses and hands over `(position, label)`
//! pairs. That keeps value axes (linear, formatted) and category axes (ranked,
//! thinned by a tick policy) on one code path.

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Rect;
use peniko::Brush;
use peniko::color::palette::css;
use slicechart_core::{Mark, MarkId, TextAnchor, TextBaseline};
use slicechart_text::{TextMeasurer, TextStyle};

use crate::rule_mark::RuleMarkSpec;
use crate::z_order;

/// Mark roles within an axis guide.
const ROLE_DOMAIN: u8 = 0;
const ROLE_TICK: u8 = 1;
const ROLE_LABEL: u8 = 2;
const ROLE_GRID: u8 = 3;
const ROLE_TITLE: u8 = 4;

/// Which side of the plot the axis sits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisOrient {
    /// Vertical axis left of the plot; tick positions are y coordinates.
    Left,
    /// Horizontal axis below the plot; tick positions are x coordinates.
    Bottom,
}

/// A tick at a resolved surface position.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisTick {
    /// Surface coordinate along the axis.
    pub pos: f64,
    /// Label text.
    pub label: String,
}

impl AxisTick {
    /// Convenience constructor.
    pub fn new(pos: f64, label: impl Into<String>) -> Self {
        Self {
            pos,
            label: label.into(),
        }
    }
}

/// Paint and font sizes for an axis.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisStyle {
    /// Domain line and tick paint.
    pub rule: Brush,
    /// Domain line and tick width.
    pub rule_width: f64,
    /// Tick label paint.
    pub label_fill: Brush,
    /// Tick label font size.
    pub label_font_size: f64,
    /// Title paint.
    pub title_fill: Brush,
    /// Title font size.
    pub title_font_size: f64,
}

impl Default for AxisStyle {
    fn default() -> Self {
        Self {
            rule: Brush::Solid(css::BLACK),
            rule_width: 1.0,
            label_fill: Brush::Solid(css::BLACK),
            label_font_size: 10.0,
            title_fill: Brush::Solid(css::BLACK),
            title_font_size: 11.0,
        }
    }
}

/// An axis with pre-resolved ticks.
#[derive(Clone, Debug)]
pub struct AxisSpec {
    /// Guide number for [`MarkId::for_guide`].
    pub guide: u16,
    /// Placement.
    pub orient: AxisOrient,
    /// Ticks in drawing order.
    pub ticks: Vec<AxisTick>,
    /// Tick length.
    pub tick_size: f64,
    /// Gap between tick end and label.
    pub tick_padding: f64,
    /// Optional title.
    pub title: Option<String>,
    /// Styling.
    pub style: AxisStyle,
    /// Gridline paint; `None` draws no gridlines.
    pub grid: Option<Brush>,
    /// Label rotation in degrees.
    pub label_angle: f64,
}

impl AxisSpec {
    /// An axis with 5px ticks, 3px label padding, no title and no grid.
    pub fn new(guide: u16, orient: AxisOrient, ticks: Vec<AxisTick>) -> Self {
        Self {
            guide,
            orient,
            ticks,
            tick_size: 5.0,
            tick_padding: 3.0,
            title: None,
            style: AxisStyle::default(),
            grid: None,
            label_angle: 0.0,
        }
    }

    /// A left axis.
    pub fn left(guide: u16, ticks: Vec<AxisTick>) -> Self {
        Self::new(guide, AxisOrient::Left, ticks)
    }

    /// A bottom axis.
    pub fn bottom(guide: u16, ticks: Vec<AxisTick>) -> Self {
        Self::new(guide, AxisOrient::Bottom, ticks)
    }

    /// Sets the title; an empty string clears it.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        let title = title.into();
        self.title = (!title.is_empty()).then_some(title);
        self
    }

    /// Sets the styling.
    #[must_use]
    pub fn with_style(mut self, style: AxisStyle) -> Self {
        self.style = style;
        self
    }

    /// Sets the gridline paint; `None` disables gridlines.
    #[must_use]
    pub fn with_grid(mut self, grid: Option<impl Into<Brush>>) -> Self {
        self.grid = grid.map(Into::into);
        self
    }

    /// Widest tick label.
    pub fn max_label_width(&self, measurer: &dyn TextMeasurer) -> f64 {
        let style = TextStyle::new(self.style.label_font_size);
        self.ticks
            .iter()
            .map(|t| measurer.width(&t.label, &style))
            .fold(0.0, f64::max)
    }

    /// Rotates bottom labels by -45 degrees when the widest one is wider than
    /// the smallest gap between adjacent ticks.
    #[must_use]
    pub fn with_fitted_labels(mut self, measurer: &dyn TextMeasurer) -> Self {
        if self.orient != AxisOrient::Bottom || self.ticks.len() < 2 {
            return self;
        }
        let min_gap = self
            .ticks
            .windows(2)
            .map(|w| (w[1].pos - w[0].pos).abs())
            .fold(f64::INFINITY, f64::min);
        if self.max_label_width(measurer) > min_gap {
            self.label_angle = -45.0;
        }
        self
    }

    /// Generates marks for `plot`, with the title placed at the outer edge of
    /// `axis_rect`.
    pub fn marks(&self, plot: Rect, axis_rect: Rect) -> Vec<Mark> {
        let mut out = Vec::new();
        let id = |role: u8, index: usize| MarkId::for_guide(self.guide, role, index);
        let rule = |mark_id: MarkId, from, to| {
            RuleMarkSpec::new(mark_id, from, to)
                .with_stroke(self.style.rule.clone(), self.style.rule_width)
                .with_z_index(z_order::AXIS_RULES)
                .with_class("axis")
                .mark()
        };

        match self.orient {
            AxisOrient::Left => {
                let x = plot.x0;
                out.push(rule(id(ROLE_DOMAIN, 0), (x, plot.y0), (x, plot.y1)));
                for (i, tick) in self.ticks.iter().enumerate() {
                    out.push(rule(
                        id(ROLE_TICK, i),
                        (x - self.tick_size, tick.pos),
                        (x, tick.pos),
                    ));
                    out.push(
                        Mark::builder(id(ROLE_LABEL, i))
                            .z_index(z_order::AXIS_LABELS)
                            .class("tick-label")
                            .text((x - self.tick_size - self.tick_padding, tick.pos), tick.label.clone())
                            .font_size(self.style.label_font_size)
                            .anchor(TextAnchor::End)
                            .baseline(TextBaseline::Middle)
                            .angle(self.label_angle)
                            .fill_brush(self.style.label_fill.clone())
                            .build(),
                    );
                    if let Some(grid) = &self.grid {
                        out.push(
                            RuleMarkSpec::horizontal(
                                id(ROLE_GRID, i),
                                tick.pos,
                                plot.x0,
                                plot.x1,
                            )
                            .with_stroke(grid.clone(), 1.0)
                            .with_z_index(z_order::GRID_LINES)
                            .with_class("grid")
                            .mark(),
                        );
                    }
                }
                if let Some(title) = &self.title {
                    out.push(
                        Mark::builder(id(ROLE_TITLE, 0))
                            .z_index(z_order::AXIS_TITLES)
                            .class("axis-title")
                            .text(
                                (
                                    axis_rect.x0 + 0.5 * self.style.title_font_size,
                                    0.5 * (plot.y0 + plot.y1),
                                ),
                                title.clone(),
                            )
                            .font_size(self.style.title_font_size)
                            .anchor(TextAnchor::Middle)
                            .baseline(TextBaseline::Middle)
                            .angle(-90.0)
                            .fill_brush(self.style.title_fill.clone())
                            .build(),
                    );
                }
            }
            AxisOrient::Bottom => {
                let y = plot.y1;
                out.push(rule(id(ROLE_DOMAIN, 0), (plot.x0, y), (plot.x1, y)));
                let (anchor, baseline) = if self.label_angle == 0.0 {
                    (TextAnchor::Middle, TextBaseline::Hanging)
                } else {
                    (TextAnchor::End, TextBaseline::Middle)
                };
                for (i, tick) in self.ticks.iter().enumerate() {
                    out.push(rule(
                        id(ROLE_TICK, i),
                        (tick.pos, y),
                        (tick.pos, y + self.tick_size),
                    ));
                    out.push(
                        Mark::builder(id(ROLE_LABEL, i))
                            .z_index(z_order::AXIS_LABELS)
                            .class("tick-label")
                            .text((tick.pos, y + self.tick_size + self.tick_padding), tick.label.clone())
                            .font_size(self.style.label_font_size)
                            .anchor(anchor)
                            .baseline(baseline)
                            .angle(self.label_angle)
                            .fill_brush(self.style.label_fill.clone())
                            .build(),
                    );
                    if let Some(grid) = &self.grid {
                        out.push(
                            RuleMarkSpec::vertical(
                                id(ROLE_GRID, i),
                                tick.pos,
                                plot.y0,
                                plot.y1,
                            )
                            .with_stroke(grid.clone(), 1.0)
                            .with_z_index(z_order::GRID_LINES)
                            .with_class("grid")
                            .mark(),
                        );
                    }
                }
                if let Some(title) = &self.title {
                    out.push(
                        Mark::builder(id(ROLE_TITLE, 0))
                            .z_index(z_order::AXIS_TITLES)
                            .class("axis-title")
                            .text(
                                (
                                    0.5 * (plot.x0 + plot.x1),
                                    axis_rect.y1 - self.style.title_font_size,
                                ),
                                title.clone(),
                            )
                            .font_size(self.style.title_font_size)
                            .anchor(TextAnchor::Middle)
                            .baseline(TextBaseline::Hanging)
                            .fill_brush(self.style.title_fill.clone())
                            .build(),
                    );
                }
            }
        }
        out
    }
}
