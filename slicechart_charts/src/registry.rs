// Copyright 2025 the Slicechart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart-type id to renderer lookup.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use hashbrown::HashMap;

use crate::catscat::{render_catscat, render_catscat_simple};
use crate::chart::{Chart, RenderContext};
use crate::error::RenderError;
use crate::payload::RenderPayload;

/// Signature shared by every registered renderer.
pub type RenderFn = fn(&RenderContext<'_>, &RenderPayload) -> Result<Chart, RenderError>;

/// Maps chart-type ids (as used by dashboard payloads) to renderers.
#[derive(Clone, Default)]
pub struct ChartRegistry {
    renderers: HashMap<&'static str, RenderFn>,
}

impl ChartRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding `catscat` and `catscat_simple`.
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.register("catscat", render_catscat);
        registry.register("catscat_simple", render_catscat_simple);
        registry
    }

    /// Registers `render` under `id`, returning any renderer it replaces.
    pub fn register(&mut self, id: &'static str, render: RenderFn) -> Option<RenderFn> {
        self.renderers.insert(id, render)
    }

    /// The renderer registered under `id`.
    pub fn get(&self, id: &str) -> Option<RenderFn> {
        self.renderers.get(id).copied()
    }

    /// Registered ids, sorted.
    pub fn ids(&self) -> Vec<&'static str> {
        let mut ids: Vec<_> = self.renderers.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Looks up `id` and renders `payload` with it.
    pub fn render(
        &self,
        id: &str,
        ctx: &RenderContext<'_>,
        payload: &RenderPayload,
    ) -> Result<Chart, RenderError> {
        let render = self
            .get(id)
            .ok_or_else(|| RenderError::UnknownChart(String::from(id)))?;
        tracing::debug!(chart = id, "render");
        render(ctx, payload)
    }
}

impl fmt::Debug for ChartRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChartRegistry")
            .field("ids", &self.ids())
            .finish_non_exhaustive()
    }
}
