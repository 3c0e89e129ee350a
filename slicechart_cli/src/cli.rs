// Copyright 2025 the Slicechart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use slicechart_charts::{ChartConfig, ChartRegistry, PaletteResolver, RenderContext, RenderPayload, Size};
use slicechart_text::HeuristicTextMeasurer;

#[derive(Parser, Debug)]
#[command(name = "slicechart", version, about = "Render BI dashboard chart payloads to SVG")]
pub(crate) struct Args {
    /// Payload JSON file, or '-' for stdin
    #[arg(short = 'i', long = "input")]
    pub(crate) input: Option<PathBuf>,

    /// Output SVG file. Defaults to stdout.
    #[arg(short = 'o', long = "output")]
    pub(crate) output: Option<PathBuf>,

    /// Chart type id
    #[arg(short = 'c', long = "chart", default_value = "catscat")]
    pub(crate) chart: String,

    /// Surface width
    #[arg(short = 'w', long = "width", default_value_t = 960.0)]
    pub(crate) width: f64,

    /// Surface height
    #[arg(short = 'H', long = "height", default_value_t = 540.0)]
    pub(crate) height: f64,

    /// Chart config JSON file
    #[arg(long = "config")]
    pub(crate) config: Option<PathBuf>,

    /// Color scheme id, overriding the payload's
    #[arg(long = "color-scheme")]
    pub(crate) color_scheme: Option<String>,
}

pub(crate) fn run() -> Result<()> {
    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;
    let input = read_input(args.input.as_deref())?;
    let svg = render_document(&args, &config, &input)?;
    write_output(&svg, args.output.as_deref())
}

/// Parses `input` as a payload and renders it to an SVG string.
pub(crate) fn render_document(args: &Args, config: &ChartConfig, input: &str) -> Result<String> {
    let mut payload: RenderPayload =
        serde_json::from_str(input).context("failed to parse payload JSON")?;
    if let Some(scheme) = &args.color_scheme {
        payload.form_data.color_scheme.clone_from(scheme);
    }

    let registry = ChartRegistry::with_builtin();
    let ctx = RenderContext::new(
        Size::new(args.width, args.height),
        config,
        &HeuristicTextMeasurer,
        &PaletteResolver,
    );
    let chart = registry
        .render(&args.chart, &ctx, &payload)
        .with_context(|| format!("failed to render `{}` chart", args.chart))?;
    tracing::info!(
        chart = %args.chart,
        series = chart.series_order.len(),
        marks = chart.marks.len(),
        "rendered"
    );
    Ok(slicechart_svg::to_svg_string(&chart))
}

fn load_config(path: Option<&Path>) -> Result<ChartConfig> {
    let Some(path) = path else {
        return Ok(ChartConfig::default());
    };
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse config {}", path.display()))
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read input {}", path.display())),
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(svg: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, svg)
            .with_context(|| format!("failed to write {}", path.display())),
        None => io::stdout()
            .write_all(svg.as_bytes())
            .context("failed to write stdout"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYLOAD: &str = r#"{
        "formData": { "y_axis_label": "Score" },
        "data": {
            "data": [
                { "key": "first", "values": [ { "y": 1, "color": "a", "shape": "x" } ] },
                { "key": "second", "values": [ { "y": 5, "color": "b", "shape": "y" } ] }
            ],
            "yLines": [3]
        }
    }"#;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["slicechart"];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).expect("valid arguments")
    }

    #[test]
    fn defaults() {
        let a = args(&[]);
        assert_eq!(a.chart, "catscat");
        assert_eq!((a.width, a.height), (960.0, 540.0));
        assert!(a.input.is_none() && a.output.is_none());
    }

    #[test]
    fn renders_payload_to_svg() {
        let svg = render_document(&args(&["-w", "400", "-H", "300"]), &ChartConfig::default(), PAYLOAD)
            .expect("render");
        assert!(svg.contains(r#"viewBox="0 0 400 300""#));
        assert_eq!(svg.matches(r#"class="point""#).count(), 2);
        assert_eq!(svg.matches(r#"class="y-line""#).count(), 1);
        assert!(svg.contains(">Score</text>"));
    }

    #[test]
    fn unknown_chart_is_an_error() {
        let err = render_document(&args(&["--chart", "pie"]), &ChartConfig::default(), PAYLOAD)
            .expect_err("unregistered chart");
        assert!(format!("{err:#}").contains("unknown chart type `pie`"));
    }

    #[test]
    fn color_scheme_flag_overrides_payload() {
        let err = render_document(
            &args(&["--color-scheme", "nope"]),
            &ChartConfig::default(),
            PAYLOAD,
        )
        .expect_err("unknown scheme");
        assert!(format!("{err:#}").contains("unknown color scheme `nope`"));
    }

    #[test]
    fn malformed_payload_is_reported() {
        let err = render_document(&args(&[]), &ChartConfig::default(), "{")
            .expect_err("bad json");
        assert!(format!("{err:#}").contains("failed to parse payload JSON"));
    }
}
