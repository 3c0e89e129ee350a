// Copyright 2025 the Slicechart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Named categorical color schemes and the color lookup seam.

use alloc::string::String;

use peniko::Color;

use crate::dataset::CategoryKey;
use crate::error::RenderError;

/// A fixed categorical palette addressed by id.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorScheme {
    /// Scheme id as used in dashboard form data.
    pub id: &'static str,
    /// Palette entries as `0xRRGGBB`.
    pub colors: &'static [u32],
}

impl ColorScheme {
    /// Looks up a built-in scheme.
    pub fn by_id(id: &str) -> Option<&'static Self> {
        SCHEMES.iter().find(|s| s.id == id)
    }

    /// Palette color at `position`, cycling when the palette is shorter.
    pub fn color_at(&self, position: usize) -> Color {
        rgb(self.colors[position % self.colors.len()])
    }
}

/// Default scheme id.
pub const DEFAULT_SCHEME: &str = "bnbColors";

/// Built-in schemes.
pub static SCHEMES: &[ColorScheme] = &[
    ColorScheme {
        id: "bnbColors",
        colors: &[
            0xff5a5f, 0x7b0051, 0x007a87, 0x00d1c1, 0x8ce071, 0xffb400, 0xb4a76c, 0xff8083,
            0xcc0086, 0x00a1b3, 0x00ffeb, 0xbbedab, 0xffd266, 0xcbc29a, 0xff3339, 0xff1ab1,
            0x005c66, 0x00b3a5, 0x55d12e, 0xb37e00, 0x988b4e,
        ],
    },
    ColorScheme {
        id: "d3Category10",
        colors: &[
            0x1f77b4, 0xff7f0e, 0x2ca02c, 0xd62728, 0x9467bd, 0x8c564b, 0xe377c2, 0x7f7f7f,
            0xbcbd22, 0x17becf,
        ],
    },
    ColorScheme {
        id: "d3Category20",
        colors: &[
            0x1f77b4, 0xaec7e8, 0xff7f0e, 0xffbb78, 0x2ca02c, 0x98df8a, 0xd62728, 0xff9896,
            0x9467bd, 0xc5b0d5, 0x8c564b, 0xc49c94, 0xe377c2, 0xf7b6d2, 0x7f7f7f, 0xc7c7c7,
            0xbcbd22, 0xdbdb8d, 0x17becf, 0x9edae5,
        ],
    },
    ColorScheme {
        id: "googleCategory10c",
        colors: &[
            0x3366cc, 0xdc3912, 0xff9900, 0x109618, 0x990099, 0x0099c6, 0xdd4477, 0x66aa00,
            0xb82e2e, 0x316395,
        ],
    },
];

/// Converts `0xRRGGBB` to an opaque color.
pub fn rgb(hex: u32) -> Color {
    let [_, r, g, b] = hex.to_be_bytes();
    Color::from_rgb8(r, g, b)
}

/// Parses `#rrggbb` or `#rgb` (leading `#` optional).
pub fn parse_hex_color(s: &str) -> Option<Color> {
    let digits = s.strip_prefix('#').unwrap_or(s);
    let value = u32::from_str_radix(digits, 16).ok()?;
    match digits.len() {
        6 => Some(rgb(value)),
        3 => {
            let r = (value >> 8) & 0xf;
            let g = (value >> 4) & 0xf;
            let b = value & 0xf;
            Some(rgb((r * 0x11) << 16 | (g * 0x11) << 8 | (b * 0x11)))
        }
        _ => None,
    }
}

/// Maps a category value to a fill color.
///
/// `position` is the value's index in the category domain (first-seen order),
/// which palette-based resolvers use to pick an entry.
pub trait ColorResolver {
    /// Resolves the color for `value` under `scheme`.
    fn resolve(
        &self,
        value: &CategoryKey,
        position: usize,
        scheme: &str,
    ) -> Result<Color, RenderError>;
}

/// Resolves colors from the built-in [`SCHEMES`] by domain position.
#[derive(Clone, Copy, Debug, Default)]
pub struct PaletteResolver;

impl ColorResolver for PaletteResolver {
    fn resolve(
        &self,
        _value: &CategoryKey,
        position: usize,
        scheme: &str,
    ) -> Result<Color, RenderError> {
        ColorScheme::by_id(scheme)
            .map(|s| s.color_at(position))
            .ok_or_else(|| RenderError::UnknownColorScheme(String::from(scheme)))
    }
}
