// Copyright 2025 the Slicechart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Legend layout.
//!
//! Legends are built in two passes:
//! - Measure: [`LegendSpec::measure`] sizes every key (visual, gap and label)
//!   through a [`TextMeasurer`], truncating labels that could never fit.
//! - Pack: [`pack_rows`] greedily fills rows left to right from those widths.
//!
//! Color keys are packed first; shape keys always start on a fresh row.

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Rect;
use peniko::color::palette::css;
use peniko::{Brush, Color};
use slicechart_core::{Mark, MarkId, TextAnchor, TextBaseline};
use slicechart_text::{TextMeasurer, TextStyle, truncate_to_width};
use smallvec::SmallVec;

use crate::config::LegendStyle;
use crate::symbol::Symbol;
use crate::z_order;

/// Mark roles within the legend guide.
const ROLE_VISUAL: u8 = 0;
const ROLE_LABEL: u8 = 1;

/// What a legend key draws next to its label.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum KeyVisual {
    /// A filled square.
    Swatch(Color),
    /// A neutral symbol outline.
    Symbol(Symbol),
}

/// One visual plus label pair.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendKey {
    /// Label text.
    pub label: String,
    /// Visual shown before the label.
    pub visual: KeyVisual,
}

impl LegendKey {
    /// A color key.
    pub fn swatch(label: impl Into<String>, color: Color) -> Self {
        Self {
            label: label.into(),
            visual: KeyVisual::Swatch(color),
        }
    }

    /// A shape key.
    pub fn symbol(label: impl Into<String>, symbol: Symbol) -> Self {
        Self {
            label: label.into(),
            visual: KeyVisual::Symbol(symbol),
        }
    }
}

/// A key after the measure pass.
#[derive(Clone, Debug, PartialEq)]
pub struct MeasuredKey {
    /// Label as it will be drawn (possibly truncated).
    pub label: String,
    /// Full key width: visual, label gap and label.
    pub width: f64,
}

/// A packed row of keys.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LegendRow {
    /// Indices into the measured key list, left to right.
    pub items: SmallVec<[usize; 8]>,
    /// Keys plus inner gaps.
    pub width: f64,
}

/// Greedy row packing.
///
/// Keys are appended to the current row while `row width + gap + key width`
/// stays within `max_width`; otherwise a new row is started. A key wider than
/// `max_width` on its own occupies a row by itself, which is the only way a row
/// can exceed the limit.
pub fn pack_rows(widths: &[f64], max_width: f64, gap: f64) -> Vec<LegendRow> {
    let mut rows: Vec<LegendRow> = Vec::new();
    let mut current = LegendRow::default();
    for (i, &w) in widths.iter().enumerate() {
        if current.items.is_empty() {
            current.items.push(i);
            current.width = w;
            continue;
        }
        let next = current.width + gap + w;
        if next <= max_width {
            current.items.push(i);
            current.width = next;
        } else {
            rows.push(core::mem::take(&mut current));
            current.items.push(i);
            current.width = w;
        }
    }
    if !current.items.is_empty() {
        rows.push(current);
    }
    rows
}

/// Output of [`LegendSpec::arrange`].
#[derive(Clone, Debug)]
pub struct LegendLayout {
    /// Measured keys, color keys first.
    pub keys: Vec<MeasuredKey>,
    /// Packed rows indexing into `keys`.
    pub rows: Vec<LegendRow>,
    /// Generated marks.
    pub marks: Vec<Mark>,
}

/// Color and shape keys plus styling.
#[derive(Clone, Debug)]
pub struct LegendSpec {
    /// Guide number for [`MarkId::for_guide`].
    pub guide: u16,
    /// Keys for the color encoding.
    pub color_keys: Vec<LegendKey>,
    /// Keys for the shape encoding.
    pub shape_keys: Vec<LegendKey>,
    /// Sizes and gaps.
    pub style: LegendStyle,
    /// Label paint.
    pub text_fill: Brush,
    /// Paint for shape-key symbols.
    pub symbol_fill: Brush,
}

impl LegendSpec {
    /// Creates a legend with default styling.
    pub fn new(guide: u16, color_keys: Vec<LegendKey>, shape_keys: Vec<LegendKey>) -> Self {
        Self {
            guide,
            color_keys,
            shape_keys,
            style: LegendStyle::default(),
            text_fill: css::BLACK.into(),
            symbol_fill: css::GRAY.into(),
        }
    }

    /// Sets sizes and gaps.
    #[must_use]
    pub fn with_style(mut self, style: LegendStyle) -> Self {
        self.style = style;
        self
    }

    fn all_keys(&self) -> impl Iterator<Item = &LegendKey> {
        self.color_keys.iter().chain(self.shape_keys.iter())
    }

    fn text_style(&self) -> TextStyle {
        TextStyle::new(self.style.font_size)
    }

    /// Measure pass: width of every key, color keys first.
    ///
    /// Labels are truncated so that no key is wider than `max_width`. A label
    /// that cannot fit even as a bare ellipsis is dropped, and the key shrinks
    /// to its visual alone, clamped to `max_width` for bands narrower than a
    /// swatch.
    pub fn measure(&self, measurer: &dyn TextMeasurer, max_width: f64) -> Vec<MeasuredKey> {
        let style = self.text_style();
        let visual = self.style.symbol_size + self.style.label_dx;
        let room = max_width - visual;
        let bare = self.style.symbol_size.min(max_width.max(0.0));
        self.all_keys()
            .map(|key| {
                let label = truncate_to_width(measurer, &key.label, &style, room);
                let text_w = measurer.width(&label, &style);
                if room < 0.0 || text_w > room {
                    MeasuredKey {
                        label: String::new(),
                        width: bare,
                    }
                } else {
                    MeasuredKey {
                        label,
                        width: visual + text_w,
                    }
                }
            })
            .collect()
    }

    /// Pack pass over measured keys: color rows, then shape rows.
    pub fn pack(&self, keys: &[MeasuredKey], max_width: f64) -> Vec<LegendRow> {
        let widths: Vec<f64> = keys.iter().map(|k| k.width).collect();
        let split = self.color_keys.len().min(widths.len());
        let mut rows = pack_rows(&widths[..split], max_width, self.style.key_gap);
        for mut row in pack_rows(&widths[split..], max_width, self.style.key_gap) {
            for i in &mut row.items {
                *i += split;
            }
            rows.push(row);
        }
        rows
    }

    /// Measures, packs and emits marks inside `band`.
    ///
    /// Rows run top to bottom from the band's top-left corner. Rows past the
    /// band's bottom edge are still emitted.
    pub fn arrange(&self, measurer: &dyn TextMeasurer, band: Rect) -> LegendLayout {
        let max_width = band.width();
        let keys = self.measure(measurer, max_width);
        let rows = self.pack(&keys, max_width);
        let row_h = self.style.symbol_size.max(self.style.font_size);

        tracing::debug!(
            keys = keys.len(),
            rows = rows.len(),
            max_width,
            height = rows.len() as f64 * (row_h + self.style.row_gap) - self.style.row_gap,
            "legend packed"
        );

        let visuals: Vec<KeyVisual> = self.all_keys().map(|k| k.visual).collect();
        let mut marks = Vec::with_capacity(keys.len() * 2);
        for (r, row) in rows.iter().enumerate() {
            let y = band.y0 + r as f64 * (row_h + self.style.row_gap);
            let mut x = band.x0;
            for &i in &row.items {
                self.push_key(&mut marks, i, &keys[i], visuals[i], x, y, row_h);
                x += keys[i].width + self.style.key_gap;
            }
        }

        LegendLayout { keys, rows, marks }
    }

    fn push_key(
        &self,
        out: &mut Vec<Mark>,
        i: usize,
        key: &MeasuredKey,
        visual: KeyVisual,
        x: f64,
        y: f64,
        row_h: f64,
    ) {
        let size = self.style.symbol_size.min(key.width);
        let id = MarkId::for_guide(self.guide, ROLE_VISUAL, i);
        let visual_mark = match visual {
            KeyVisual::Swatch(color) => {
                let y0 = y + 0.5 * (row_h - size);
                Mark::builder(id)
                    .z_index(z_order::LEGEND_SWATCHES)
                    .class("legend-swatch")
                    .rect(Rect::new(x, y0, x + size, y0 + size))
                    .fill_brush(color)
                    .build()
            }
            KeyVisual::Symbol(symbol) => Mark::builder(id)
                .z_index(z_order::LEGEND_SWATCHES)
                .class("legend-symbol")
                .path(symbol.path(x + 0.5 * size, y + 0.5 * row_h, size))
                .fill_brush(self.symbol_fill.clone())
                .stroke_width(0.0)
                .build(),
        };
        out.push(visual_mark);

        if key.label.is_empty() {
            return;
        }
        out.push(
            Mark::builder(MarkId::for_guide(self.guide, ROLE_LABEL, i))
                .z_index(z_order::LEGEND_LABELS)
                .class("legend-label")
                .text((x + size + self.style.label_dx, y + 0.5 * row_h), key.label.clone())
                .font_size(self.style.font_size)
                .anchor(TextAnchor::Start)
                .baseline(TextBaseline::Middle)
                .fill_brush(self.text_fill.clone())
                .build(),
        );
    }
}
