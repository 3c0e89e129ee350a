// Copyright 2025 the Slicechart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input data: series of categorised points, plus validation and ordering.

use alloc::string::String;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};

use serde::Deserialize;

use crate::error::DatasetError;

/// A category value as it arrives from the query layer: a number or a string.
///
/// Ordering puts every number (by [`f64::total_cmp`]) before every string
/// (lexicographic), so mixed columns still sort deterministically.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum CategoryKey {
    /// Numeric category.
    Number(f64),
    /// Textual category.
    Text(String),
}

impl CategoryKey {
    /// Convenience for a textual key.
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }
}

impl From<&str> for CategoryKey {
    fn from(value: &str) -> Self {
        Self::Text(value.into())
    }
}

impl From<String> for CategoryKey {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for CategoryKey {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl PartialEq for CategoryKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for CategoryKey {}

impl PartialOrd for CategoryKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CategoryKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a.total_cmp(b),
            (Self::Number(_), Self::Text(_)) => Ordering::Less,
            (Self::Text(_), Self::Number(_)) => Ordering::Greater,
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
        }
    }
}

impl Hash for CategoryKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Number(n) => {
                0_u8.hash(state);
                n.to_bits().hash(state);
            }
            Self::Text(s) => {
                1_u8.hash(state);
                s.hash(state);
            }
        }
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// One plotted observation.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Point {
    /// Vertical value.
    pub y: f64,
    /// Category driving the fill color.
    pub color: CategoryKey,
    /// Category driving the symbol shape.
    pub shape: CategoryKey,
    /// Label of the entity the point describes.
    #[serde(default)]
    pub entity: String,
}

impl Point {
    /// Builds a point with an empty entity label.
    pub fn new(y: f64, color: impl Into<CategoryKey>, shape: impl Into<CategoryKey>) -> Self {
        Self {
            y,
            color: color.into(),
            shape: shape.into(),
            entity: String::new(),
        }
    }

    /// Sets the entity label.
    #[must_use]
    pub fn with_entity(mut self, entity: impl Into<String>) -> Self {
        self.entity = entity.into();
        self
    }
}

/// A labelled group of points plotted in one horizontal slot.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Series {
    /// Series label, shown on the category axis.
    #[serde(default)]
    pub key: String,
    /// Points in input order.
    #[serde(default)]
    pub values: Vec<Point>,
}

impl Series {
    /// Builds a series.
    pub fn new(key: impl Into<String>, values: Vec<Point>) -> Self {
        Self {
            key: key.into(),
            values,
        }
    }

    /// Color of the first point, the sort key of the series.
    pub fn first_color(&self) -> Option<&CategoryKey> {
        self.values.first().map(|p| &p.color)
    }
}

/// Orders two optional sort keys with `None` after every `Some`.
pub fn compare_sort_keys(a: Option<&CategoryKey>, b: Option<&CategoryKey>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Returns the series ordered by their first point's color.
///
/// The sort is stable: series with equal keys keep their input order. Empty
/// series have no key and go last.
pub fn sorted_series(series: &[Series]) -> Vec<&Series> {
    let mut out: Vec<&Series> = series.iter().collect();
    out.sort_by(|a, b| compare_sort_keys(a.first_color(), b.first_color()));
    out
}

/// Checks the dataset can be rendered and returns the `(min, max)` of all values.
pub fn validate(series: &[Series]) -> Result<(f64, f64), DatasetError> {
    if series.is_empty() {
        return Err(DatasetError::Empty);
    }
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut seen = false;
    for s in series {
        for (index, p) in s.values.iter().enumerate() {
            if !p.y.is_finite() {
                return Err(DatasetError::NonFiniteValue {
                    series: s.key.clone(),
                    index,
                });
            }
            min = min.min(p.y);
            max = max.max(p.y);
            seen = true;
        }
    }
    if seen {
        Ok((min, max))
    } else {
        Err(DatasetError::NoPoints)
    }
}

/// Total number of points across all series.
pub fn point_count(series: &[Series]) -> usize {
    series.iter().map(|s| s.values.len()).sum()
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;

    fn one(key: &str, color: impl Into<CategoryKey>) -> Series {
        Series::new(key, vec![Point::new(1.0, color, "x")])
    }

    #[test]
    fn numbers_sort_before_text() {
        let mut keys = vec![
            CategoryKey::text("b"),
            CategoryKey::Number(10.0),
            CategoryKey::text("a"),
            CategoryKey::Number(9.0),
        ];
        keys.sort();
        assert_eq!(
            keys,
            vec![
                CategoryKey::Number(9.0),
                CategoryKey::Number(10.0),
                CategoryKey::text("a"),
                CategoryKey::text("b"),
            ]
        );
    }

    #[test]
    fn sort_is_stable_for_equal_colors() {
        let data = vec![one("s0", "b"), one("s1", "a"), one("s2", "b"), one("s3", "a")];
        let keys: Vec<&str> = sorted_series(&data).into_iter().map(|s| s.key.as_str()).collect();
        assert_eq!(keys, ["s1", "s3", "s0", "s2"]);
    }

    #[test]
    fn empty_series_sort_last() {
        let data = vec![
            Series::new("empty", Vec::new()),
            one("z", "z"),
            one("a", "a"),
        ];
        let keys: Vec<&str> = sorted_series(&data).into_iter().map(|s| s.key.as_str()).collect();
        assert_eq!(keys, ["a", "z", "empty"]);
    }

    #[test]
    fn validate_reports_extent() {
        let data = vec![
            Series::new("a", vec![Point::new(3.0, "a", "x"), Point::new(-2.0, "a", "x")]),
            Series::new("b", vec![Point::new(7.5, "b", "y")]),
        ];
        assert_eq!(validate(&data), Ok((-2.0, 7.5)));
        assert_eq!(point_count(&data), 3);
    }

    #[test]
    fn validate_rejects_unusable_input() {
        assert_eq!(validate(&[]), Err(DatasetError::Empty));
        assert_eq!(
            validate(&[Series::new("a", Vec::new())]),
            Err(DatasetError::NoPoints)
        );
        let bad = vec![Series::new(
            "a",
            vec![Point::new(1.0, "a", "x"), Point::new(f64::NAN, "a", "x")],
        )];
        assert_eq!(
            validate(&bad),
            Err(DatasetError::NonFiniteValue {
                series: "a".into(),
                index: 1
            })
        );
    }

    #[test]
    fn deserializes_mixed_category_types() {
        let json = r#"{"key":"k","values":[
            {"y":1,"color":"red","shape":3,"entity":"e1"},
            {"y":2.5,"color":7,"shape":"sq"}
        ]}"#;
        let s: Series = serde_json::from_str(json).expect("valid series");
        assert_eq!(s.values[0].color, CategoryKey::text("red"));
        assert_eq!(s.values[0].shape, CategoryKey::Number(3.0));
        assert_eq!(s.values[1].entity, "");
        assert_eq!(alloc::format!("{}", s.values[1].color), "7");
    }
}
