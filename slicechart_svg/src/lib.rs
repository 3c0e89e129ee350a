// Copyright 2025 the Slicechart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG output for slicechart marks.
//!
//! The writer is deliberately flat: one element per mark, painted in
//! `(z_index, id)` order, with no grouping or styling beyond what each mark
//! carries. Marks with a tooltip get a `<title>` child and one `data-*`
//! attribute per tooltip field.

use kurbo::Rect;
use peniko::Brush;
use slicechart_charts::{Chart, Size};
use slicechart_core::{Mark, MarkPayload, TextAnchor, TextBaseline, Tooltip};
use slicechart_text::FontFamily;

/// Document-level settings.
#[derive(Clone, Debug, PartialEq)]
pub struct SvgOptions {
    /// Font family applied to the root element.
    pub font_family: FontFamily,
    /// Optional background fill painted under every mark.
    pub background: Option<Brush>,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            font_family: FontFamily::SansSerif,
            background: None,
        }
    }
}

impl SvgOptions {
    /// Sets the root font family.
    #[must_use]
    pub fn with_font_family(mut self, font_family: FontFamily) -> Self {
        self.font_family = font_family;
        self
    }

    /// Paints `background` behind the chart.
    #[must_use]
    pub fn with_background(mut self, background: impl Into<Brush>) -> Self {
        self.background = Some(background.into());
        self
    }
}

/// Serializes a rendered chart with default options.
pub fn to_svg_string(chart: &Chart) -> String {
    chart_to_svg(chart, &SvgOptions::default())
}

/// Serializes a rendered chart.
pub fn chart_to_svg(chart: &Chart, options: &SvgOptions) -> String {
    marks_to_svg(&chart.marks, chart.size, options)
}

/// Serializes `marks` onto a `size` surface.
pub fn marks_to_svg(marks: &[Mark], size: Size, options: &SvgOptions) -> String {
    let view = Rect::new(0.0, 0.0, size.width, size.height);
    let mut out = String::new();

    out.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}" width="{}" height="{}" font-family="{}">"#,
        view.x0,
        view.y0,
        view.width(),
        view.height(),
        view.width(),
        view.height(),
        escape_xml(options.font_family.as_css_family()),
    ));
    out.push('\n');

    if let Some(background) = &options.background {
        out.push_str(&format!(
            r#"<rect x="0" y="0" width="{}" height="{}""#,
            view.width(),
            view.height()
        ));
        write_paint_attr(&mut out, "fill", background);
        out.push_str("/>\n");
    }

    let mut ordered: Vec<&Mark> = marks.iter().collect();
    ordered.sort_by_key(|m| (m.z_index, m.id));
    for mark in &ordered {
        write_mark(&mut out, mark);
    }

    out.push_str("</svg>\n");
    tracing::debug!(marks = ordered.len(), bytes = out.len(), "svg written");
    out
}

fn write_mark(out: &mut String, mark: &Mark) {
    let element = match &mark.payload {
        MarkPayload::Rect(r) => {
            out.push_str(&format!(
                r#"<rect x="{}" y="{}" width="{}" height="{}""#,
                r.rect.x0,
                r.rect.y0,
                r.rect.width(),
                r.rect.height(),
            ));
            write_paint_attr(out, "fill", &r.fill);
            "rect"
        }
        MarkPayload::Path(p) => {
            let d = p.path.to_svg();
            out.push_str(&format!(r#"<path d="{d}""#));
            write_paint_attr(out, "fill", &p.fill);
            if p.stroke_width > 0.0 {
                write_paint_attr(out, "stroke", &p.stroke);
                out.push_str(&format!(r#" stroke-width="{}""#, p.stroke_width));
            }
            "path"
        }
        MarkPayload::Text(t) => {
            let baseline = match t.baseline {
                TextBaseline::Middle => "middle",
                TextBaseline::Alphabetic => "alphabetic",
                TextBaseline::Hanging => "hanging",
            };
            out.push_str(&format!(
                r#"<text x="{}" y="{}" font-size="{}" dominant-baseline="{}""#,
                t.pos.x, t.pos.y, t.font_size, baseline
            ));
            if t.angle != 0.0 {
                out.push_str(&format!(
                    r#" transform="rotate({} {} {})""#,
                    t.angle, t.pos.x, t.pos.y
                ));
            }
            out.push_str(match t.anchor {
                TextAnchor::Start => r#" text-anchor="start""#,
                TextAnchor::Middle => r#" text-anchor="middle""#,
                TextAnchor::End => r#" text-anchor="end""#,
            });
            write_paint_attr(out, "fill", &t.fill);
            "text"
        }
    };

    if let Some(class) = mark.class {
        out.push_str(&format!(r#" class="{}""#, escape_xml(class)));
    }
    if let Some(tooltip) = &mark.tooltip {
        write_data_attrs(out, tooltip);
    }

    let text = mark.text();
    let tooltip = mark.tooltip.as_ref().filter(|t| !t.is_empty());
    if text.is_none() && tooltip.is_none() {
        out.push_str("/>\n");
        return;
    }

    out.push('>');
    if let Some(tooltip) = tooltip {
        out.push_str("<title>");
        out.push_str(&escape_xml(&tooltip.to_text()));
        out.push_str("</title>");
    }
    if let Some(text) = text {
        out.push_str(&escape_xml(text));
    }
    out.push_str(&format!("</{element}>\n"));
}

fn write_data_attrs(out: &mut String, tooltip: &Tooltip) {
    for (label, value) in tooltip.fields() {
        let name: String = label
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() {
                    c.to_ascii_lowercase()
                } else {
                    '-'
                }
            })
            .collect();
        out.push_str(&format!(r#" data-{name}="{}""#, escape_xml(value)));
    }
}

fn svg_paint(brush: &Brush) -> (String, Option<f64>) {
    match brush {
        Brush::Solid(color) => {
            let rgba = color.to_rgba8();
            let fill = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
            let opacity = if rgba.a == 255 {
                None
            } else {
                Some(f64::from(rgba.a) / 255.0)
            };
            (fill, opacity)
        }
        _ => ("none".to_string(), None),
    }
}

fn write_paint_attr(out: &mut String, name: &str, brush: &Brush) {
    let (value, opacity) = svg_paint(brush);
    out.push_str(&format!(r#" {name}="{value}""#));
    if let Some(o) = opacity {
        out.push_str(&format!(r#" {name}-opacity="{o}""#));
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use kurbo::BezPath;
    use peniko::color::palette::css;
    use slicechart_charts::{
        CatscatVariant, ChartConfig, PaletteResolver, Point, RenderContext, RenderPayload,
        Series, render,
    };
    use slicechart_core::MarkId;
    use slicechart_text::HeuristicTextMeasurer;

    use super::*;

    fn example_chart(variant: CatscatVariant) -> Chart {
        let payload = RenderPayload::new(vec![
            Series::new("first", vec![Point::new(1.0, "a", "x").with_entity("A & B")]),
            Series::new("second", vec![Point::new(5.0, "b", "y")]),
        ])
        .with_y_lines(vec![3.0]);
        let config = ChartConfig::default();
        let ctx = RenderContext::new(
            Size::new(400.0, 300.0),
            &config,
            &HeuristicTextMeasurer,
            &PaletteResolver,
        );
        render(&ctx, &payload, variant).expect("renderable")
    }

    #[test]
    fn document_has_surface_viewbox() {
        let svg = to_svg_string(&example_chart(CatscatVariant::Full));
        assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 400 300""#));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains(r#"font-family="sans-serif""#));
    }

    #[test]
    fn points_carry_tooltips_and_data_attributes() {
        let svg = to_svg_string(&example_chart(CatscatVariant::Full));
        assert_eq!(svg.matches(r#"class="point""#).count(), 2);
        assert!(svg.contains(r#"data-entity="A &amp; B""#));
        assert!(svg.contains("<title>entity: A &amp; B\ncolor: a\nshape: x\nvalue: 1.00</title>"));
    }

    #[test]
    fn reference_line_is_stroked() {
        let svg = to_svg_string(&example_chart(CatscatVariant::Full));
        let line = svg
            .lines()
            .find(|l| l.contains(r#"class="y-line""#))
            .expect("reference line element");
        assert!(line.contains(r##"stroke="#ff0000""##));
        assert!(line.contains(r#"stroke-width="2""#));
    }

    #[test]
    fn simple_variant_has_no_legend_elements() {
        let svg = to_svg_string(&example_chart(CatscatVariant::Simple));
        assert!(!svg.contains("legend-"));
    }

    #[test]
    fn marks_are_painted_in_z_order() {
        let low = Mark::builder(MarkId::from_raw(2))
            .z_index(-1)
            .class("low")
            .rect(Rect::new(0.0, 0.0, 1.0, 1.0))
            .fill_brush(css::RED)
            .build();
        let high = Mark::builder(MarkId::from_raw(1))
            .z_index(5)
            .class("high")
            .path(BezPath::new())
            .build();
        let svg = marks_to_svg(&[high, low], Size::new(10.0, 10.0), &SvgOptions::default());
        let low_at = svg.find(r#"class="low""#).expect("low");
        let high_at = svg.find(r#"class="high""#).expect("high");
        assert!(low_at < high_at);
    }

    #[test]
    fn rotated_text_gets_a_transform() {
        let mark = Mark::builder(MarkId::from_raw(1))
            .text((10.0, 20.0), "a<b")
            .angle(-90.0)
            .build();
        let svg = marks_to_svg(&[mark], Size::new(50.0, 50.0), &SvgOptions::default());
        assert!(svg.contains(r#"transform="rotate(-90 10 20)""#));
        assert!(svg.contains(">a&lt;b</text>"));
    }

    #[test]
    fn background_and_transparency() {
        let mark = Mark::builder(MarkId::from_raw(1))
            .rect(Rect::new(0.0, 0.0, 5.0, 5.0))
            .fill_brush(peniko::Color::TRANSPARENT)
            .build();
        let options = SvgOptions::default()
            .with_background(css::WHITE)
            .with_font_family(FontFamily::Monospace);
        let svg = marks_to_svg(&[mark], Size::new(5.0, 5.0), &options);
        assert!(svg.contains(r##"<rect x="0" y="0" width="5" height="5" fill="#ffffff"/>"##));
        assert!(svg.contains(r#"fill-opacity="0""#));
        assert!(svg.contains(r#"font-family="monospace""#));
    }

    #[test]
    fn xml_escaping() {
        assert_eq!(escape_xml(r#"<a & "b">'"#), "&lt;a &amp; &quot;b&quot;&gt;&apos;");
    }
}
