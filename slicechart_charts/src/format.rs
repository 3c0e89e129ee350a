// Copyright 2025 the Slicechart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Number formatting for axis labels and tooltips.
//!
//! Dashboards store formats as d3-format specifiers. This supports the subset
//! that value axes use: `[,][.precision][~][type]` with `type` one of `f`,
//! `d`, `%`, `s`, `e`, `r`, or nothing.

use alloc::format;
use alloc::string::{String, ToString};

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::error::FormatError;

/// Default vertical-axis format.
pub const DEFAULT_Y_FORMAT: &str = ".3s";

/// Notation selected by the trailing type character.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notation {
    /// No type: shortest representation, or `precision` significant digits.
    General,
    /// `f`: fixed decimals.
    Fixed,
    /// `d`: rounded integer.
    Integer,
    /// `%`: times 100, fixed decimals, percent sign.
    Percent,
    /// `s`: significant digits with an SI prefix.
    Si,
    /// `e`: exponent notation.
    Exponent,
    /// `r`: significant digits in fixed notation.
    Rounded,
}

/// A parsed number format.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NumberFormat {
    /// Group thousands with `,`.
    pub grouping: bool,
    /// Explicit precision, if given.
    pub precision: Option<usize>,
    /// Trim insignificant trailing zeros.
    pub trim: bool,
    /// Notation.
    pub notation: Notation,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            grouping: false,
            precision: None,
            trim: false,
            notation: Notation::General,
        }
    }
}

impl NumberFormat {
    /// Parses a specifier such as `",.2f"` or `".3s"`.
    pub fn parse(spec: &str) -> Result<Self, FormatError> {
        let err = |reason| FormatError {
            spec: spec.to_string(),
            reason,
        };
        let mut out = Self::default();
        let mut rest = spec;

        if let Some(r) = rest.strip_prefix(',') {
            out.grouping = true;
            rest = r;
        }
        if let Some(r) = rest.strip_prefix('.') {
            let digits = r.bytes().take_while(u8::is_ascii_digit).count();
            if digits == 0 {
                return Err(err("`.` must be followed by a precision"));
            }
            let precision = r[..digits]
                .parse::<usize>()
                .map_err(|_| err("precision out of range"))?;
            if precision > 20 {
                return Err(err("precision must be at most 20"));
            }
            out.precision = Some(precision);
            rest = &r[digits..];
        }
        if let Some(r) = rest.strip_prefix('~') {
            out.trim = true;
            rest = r;
        }
        let mut chars = rest.chars();
        out.notation = match chars.next() {
            None => Notation::General,
            Some('f') => Notation::Fixed,
            Some('d') => Notation::Integer,
            Some('%') => Notation::Percent,
            Some('s') => Notation::Si,
            Some('e') => Notation::Exponent,
            Some('r') => Notation::Rounded,
            Some(_) => return Err(err("unsupported format type")),
        };
        if chars.next().is_some() {
            return Err(err("unexpected trailing characters"));
        }
        Ok(out)
    }

    /// Formats `value`.
    pub fn format(&self, value: f64) -> String {
        if !value.is_finite() {
            return value.to_string();
        }
        let (body, suffix) = match self.notation {
            Notation::General => match self.precision {
                Some(p) => (fixed(round_significant(value, p.max(1)), None), ""),
                None => (value.to_string(), ""),
            },
            Notation::Fixed => (format!("{:.*}", self.precision.unwrap_or(6), value), ""),
            Notation::Integer => (format!("{:.0}", value), ""),
            Notation::Percent => (
                format!("{:.*}", self.precision.unwrap_or(0), value * 100.0),
                "%",
            ),
            Notation::Si => return self.finish_si(value),
            Notation::Exponent => (exponent(value, self.precision.unwrap_or(6)), ""),
            Notation::Rounded => {
                let p = self.precision.unwrap_or(6).max(1);
                (fixed(value, Some(p)), "")
            }
        };
        let body = if self.trim { trim_zeros(&body) } else { body };
        let body = if self.grouping { group(&body) } else { body };
        format!("{body}{suffix}")
    }

    fn finish_si(&self, value: f64) -> String {
        let p = self.precision.unwrap_or(6).max(1);
        if value == 0.0 {
            let body = fixed(0.0, Some(p));
            return if self.trim { trim_zeros(&body) } else { body };
        }
        let rounded = round_significant(value, p);
        let exp = magnitude(rounded);
        let si = (exp.div_euclid(3) * 3).clamp(-24, 24);
        let scaled = if si >= 0 {
            rounded / 10_f64.powi(si)
        } else {
            rounded * 10_f64.powi(-si)
        };
        let body = fixed(scaled, Some(p));
        let body = if self.trim { trim_zeros(&body) } else { body };
        let body = if self.grouping { group(&body) } else { body };
        format!("{body}{}", si_prefix(si))
    }
}

fn magnitude(value: f64) -> i32 {
    #[allow(clippy::cast_possible_truncation, reason = "log10 of a finite f64 fits i32")]
    {
        value.abs().log10().floor() as i32
    }
}

fn round_significant(value: f64, digits: usize) -> f64 {
    if value == 0.0 {
        return 0.0;
    }
    #[allow(clippy::cast_possible_wrap, reason = "precision is at most 20")]
    let shift = digits as i32 - 1 - magnitude(value);
    if shift >= 0 {
        // Subnormal inputs need shifts past 10^308, so scale in two halves.
        let (a, b) = (10_f64.powi(shift / 2), 10_f64.powi(shift - shift / 2));
        (value * a * b).round() / b / a
    } else {
        let factor = 10_f64.powi(-shift);
        (value / factor).round() * factor
    }
}

/// Fixed notation; with `significant`, as many decimals as needed for that
/// many significant digits.
fn fixed(value: f64, significant: Option<usize>) -> String {
    match significant {
        None => value.to_string(),
        Some(p) => {
            let value = round_significant(value, p);
            let decimals = if value == 0.0 {
                p.saturating_sub(1)
            } else {
                #[allow(clippy::cast_possible_wrap, reason = "precision is at most 20")]
                let d = p as i32 - 1 - magnitude(value);
                usize::try_from(d).unwrap_or(0)
            };
            format!("{value:.decimals$}")
        }
    }
}

fn exponent(value: f64, precision: usize) -> String {
    let raw = format!("{value:.precision$e}");
    match raw.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
        _ => raw,
    }
}

fn trim_zeros(s: &str) -> String {
    let (num, exp) = match s.find('e') {
        Some(i) => s.split_at(i),
        None => (s, ""),
    };
    if !num.contains('.') {
        return s.to_string();
    }
    let trimmed = num.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed}{exp}")
}

fn group(s: &str) -> String {
    let (sign, rest) = match s.strip_prefix('-') {
        Some(r) => ("-", r),
        None => ("", s),
    };
    let split = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
    let (int, tail) = rest.split_at(split);
    let mut out = String::with_capacity(s.len() + int.len() / 3);
    out.push_str(sign);
    for (i, c) in int.chars().enumerate() {
        if i > 0 && (int.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out.push_str(tail);
    out
}

fn si_prefix(exp: i32) -> &'static str {
    match exp {
        -24 => "y",
        -21 => "z",
        -18 => "a",
        -15 => "f",
        -12 => "p",
        -9 => "n",
        -6 => "\u{b5}",
        -3 => "m",
        3 => "k",
        6 => "M",
        9 => "G",
        12 => "T",
        15 => "P",
        18 => "E",
        21 => "Z",
        24 => "Y",
        _ => "",
    }
}
