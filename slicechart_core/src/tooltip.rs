// Copyright 2025 the Slicechart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover text attached to marks.

use alloc::string::String;

use smallvec::SmallVec;

/// Ordered `(label, value)` pairs shown while the pointer is over a mark.
///
/// Showing and hiding is left to the surface; an SVG viewer does it natively
/// for `<title>` children.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tooltip {
    fields: SmallVec<[(String, String); 4]>,
}

impl Tooltip {
    /// An empty tooltip.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a field, keeping insertion order.
    #[must_use]
    pub fn with_field(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((label.into(), value.into()));
        self
    }

    /// Looks up the first field with `label`.
    pub fn get(&self, label: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| v.as_str())
    }

    /// All fields in display order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(l, v)| (l.as_str(), v.as_str()))
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether there are no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Renders `label: value` lines joined by `\n`.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for (i, (label, value)) in self.fields().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.push_str(label);
            out.push_str(": ");
            out.push_str(value);
        }
        out
    }
}
