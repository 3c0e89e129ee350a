// Copyright 2025 the Slicechart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawable primitives for slicechart.
//!
//! Renderers are pure functions from `(layout, scales, data)` to a flat list of
//! [`Mark`]s. Each mark is one rect, path, or line of text in surface
//! coordinates, carrying a stable [`MarkId`], a paint-order `z_index`, and an
//! optional [`Tooltip`]. Nothing here knows how to draw; a separate adapter
//! (for example `slicechart_svg`) turns marks into output.

#![no_std]

extern crate alloc;

mod mark;
mod tooltip;

pub use mark::{
    Mark, MarkBuilder, MarkId, MarkKind, MarkPayload, PathBuilder, PathMark, RectBuilder,
    RectMark, TextAnchor, TextBaseline, TextBuilder, TextMark,
};
pub use tooltip::Tooltip;
