// Copyright 2025 the Slicechart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text measurement for chart layout.
//!
//! Legend packing and axis sizing need the extent of rendered text before the
//! final positions are known. Glyph shaping belongs to whatever surface draws
//! the chart, so layout code only talks to the [`TextMeasurer`] trait and the
//! surface (or a test) supplies the implementation.
//!
//! The crate is `no_std` and allocation-free apart from owned family names.

#![no_std]

extern crate alloc;

use alloc::string::String;
use alloc::sync::Arc;

/// Measures a single line of text.
///
/// Implementations range from the built-in [`HeuristicTextMeasurer`] to
/// adapters over a real shaping engine or a browser canvas.
pub trait TextMeasurer {
    /// Measure `text` as one line; anything after the first `\n` is ignored by
    /// well-behaved implementations.
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics;

    /// Convenience for the advance width alone.
    fn width(&self, text: &str, style: &TextStyle) -> f64 {
        self.measure(text, style).advance_width
    }
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for &T {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        (**self).measure(text, style)
    }
}

/// Font inputs that influence measured extents.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    /// Font size in surface units (pixels for SVG).
    pub font_size: f64,
    /// Requested family.
    pub font_family: FontFamily,
    /// CSS-style weight.
    pub font_weight: FontWeight,
}

impl TextStyle {
    /// A sans-serif, normal-weight style at `font_size`.
    #[must_use]
    pub fn new(font_size: f64) -> Self {
        Self {
            font_size,
            font_family: FontFamily::SansSerif,
            font_weight: FontWeight::NORMAL,
        }
    }

    /// Returns a copy with the given weight.
    #[must_use]
    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.font_weight = weight;
        self
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new(12.0)
    }
}

/// Font family selection.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FontFamily {
    /// CSS `sans-serif`.
    SansSerif,
    /// CSS `monospace`.
    Monospace,
    /// A named family such as `"Helvetica Neue"`.
    Named(Arc<str>),
}

impl FontFamily {
    /// The family as written in an SVG `font-family` attribute.
    #[must_use]
    pub fn as_css_family(&self) -> &str {
        match self {
            Self::SansSerif => "sans-serif",
            Self::Monospace => "monospace",
            Self::Named(name) => name,
        }
    }
}

/// CSS-style font weight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FontWeight(pub u16);

impl FontWeight {
    /// `400`.
    pub const NORMAL: Self = Self(400);
    /// `700`.
    pub const BOLD: Self = Self(700);
}

/// Extents of one measured line.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextMetrics {
    /// Horizontal advance of the whole line.
    pub advance_width: f64,
    /// Baseline to top of typical glyphs.
    pub ascent: f64,
    /// Baseline to bottom of typical glyphs.
    pub descent: f64,
    /// Extra spacing beyond ascent and descent.
    pub leading: f64,
}

impl TextMetrics {
    /// `ascent + descent + leading`.
    #[must_use]
    pub fn line_height(&self) -> f64 {
        self.ascent + self.descent + self.leading
    }
}

/// Font-free estimate: every glyph advances 0.6em, ascent 0.8em, descent 0.2em.
///
/// Bold text is widened by ten percent and monospace uses the same advance as
/// sans-serif. Good enough for deterministic layout in tests and headless
/// rendering where no font database is available.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicTextMeasurer;

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        let line = text.split('\n').next().unwrap_or("");
        let weight_factor = if style.font_weight >= FontWeight::BOLD {
            1.1
        } else {
            1.0
        };
        TextMetrics {
            advance_width: 0.6 * weight_factor * style.font_size * line.chars().count() as f64,
            ascent: 0.8 * style.font_size,
            descent: 0.2 * style.font_size,
            leading: 0.0,
        }
    }
}

/// Shortens `text` with a trailing `…` until it measures at most `max_width`.
///
/// Returns the text unchanged when it already fits. If not even the ellipsis
/// fits, the ellipsis alone is returned.
pub fn truncate_to_width(
    measurer: &dyn TextMeasurer,
    text: &str,
    style: &TextStyle,
    max_width: f64,
) -> String {
    if measurer.width(text, style) <= max_width {
        return String::from(text);
    }
    let chars: alloc::vec::Vec<char> = text.chars().collect();
    let mut keep = chars.len();
    while keep > 0 {
        keep -= 1;
        let mut candidate: String = chars[..keep].iter().collect();
        candidate.push('\u{2026}');
        if measurer.width(&candidate, style) <= max_width {
            return candidate;
        }
    }
    String::from("\u{2026}")
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn heuristic_width_scales_with_length_and_size() {
        let m = HeuristicTextMeasurer;
        let a = m.measure("abcd", &TextStyle::new(10.0));
        assert!((a.advance_width - 24.0).abs() < 1e-9);
        assert!((a.line_height() - 10.0).abs() < 1e-9);

        let bold = m.measure("abcd", &TextStyle::new(10.0).with_weight(FontWeight::BOLD));
        assert!(bold.advance_width > a.advance_width);
    }

    #[test]
    fn heuristic_ignores_text_after_newline() {
        let m = HeuristicTextMeasurer;
        let style = TextStyle::new(10.0);
        assert_eq!(m.width("ab\ncdef", &style), m.width("ab", &style));
    }

    #[test]
    fn truncate_keeps_fitting_text() {
        let m = HeuristicTextMeasurer;
        let style = TextStyle::new(10.0);
        assert_eq!(truncate_to_width(&m, "abc", &style, 100.0), "abc");
    }

    #[test]
    fn truncate_appends_ellipsis_and_fits() {
        let m = HeuristicTextMeasurer;
        let style = TextStyle::new(10.0);
        // 6px per glyph: four glyphs (three letters + ellipsis) fit in 24px.
        let out = truncate_to_width(&m, "abcdefgh", &style, 24.0);
        assert_eq!(out, "abc\u{2026}");
        assert!(m.width(&out, &style) <= 24.0);
    }

    #[test]
    fn truncate_degrades_to_bare_ellipsis() {
        let m = HeuristicTextMeasurer;
        let style = TextStyle::new(10.0);
        assert_eq!(truncate_to_width(&m, "abcdef", &style, 1.0), "\u{2026}");
    }
}
