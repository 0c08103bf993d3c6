//! Category keys and first-occurrence distinct value sets.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Label used when a missing value has to be shown or used as a column name.
pub const MISSING_LABEL: &str = "null";

/// One cell value of a categorical column, in owned comparable form.
///
/// Values are rendered to text before they get here; within a single column
/// the rendering is injective, so two cells hold the same category exactly
/// when their values are equal. All missing cells share [`Category::Missing`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Category {
    /// Null cell.
    Missing,
    /// Any non-null cell, rendered as text.
    Value(String),
}

impl Category {
    /// Build a non-missing category.
    pub fn value(value: impl Into<String>) -> Self {
        Self::Value(value.into())
    }

    /// Text form of the category; [`MISSING_LABEL`] for nulls.
    pub fn label(&self) -> &str {
        match self {
            Self::Missing => MISSING_LABEL,
            Self::Value(value) => value,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<Option<String>> for Category {
    fn from(value: Option<String>) -> Self {
        value.map_or(Self::Missing, Self::Value)
    }
}

/// Distinct categories of a column, in the order they first appear.
///
/// Besides the categories themselves this keeps the number of rows holding
/// each one and, per row, the position of its category. Both are filled in a
/// single top-to-bottom pass by [`DistinctValues::from_rows`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistinctValues {
    values: Vec<Category>,
    counts: Vec<usize>,
    #[serde(skip)]
    codes: Vec<usize>,
}

impl DistinctValues {
    /// Enumerate the distinct categories of `rows` in first-occurrence order.
    pub fn from_rows<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = Category>,
    {
        let mut positions: HashMap<Category, usize> = HashMap::new();
        let mut distinct = Self::default();
        for category in rows {
            let code = match positions.get(&category) {
                Some(&code) => code,
                None => {
                    let code = distinct.values.len();
                    positions.insert(category.clone(), code);
                    distinct.values.push(category);
                    distinct.counts.push(0);
                    code
                }
            };
            distinct.counts[code] += 1;
            distinct.codes.push(code);
        }
        distinct
    }

    /// Number of distinct categories (the column's arity).
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of rows the set was built from.
    pub fn row_count(&self) -> usize {
        self.codes.len()
    }

    pub fn values(&self) -> &[Category] {
        &self.values
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Category> {
        self.values.iter()
    }

    /// The first category encountered, if any.
    pub fn first(&self) -> Option<&Category> {
        self.values.first()
    }

    /// Number of rows holding the category at `position`.
    pub fn count(&self, position: usize) -> usize {
        self.counts.get(position).copied().unwrap_or(0)
    }

    /// Per-row category positions, aligned with the source rows.
    ///
    /// Empty when the set was deserialized rather than built from rows.
    pub fn codes(&self) -> &[usize] {
        &self.codes
    }

    /// 0/1 indicator for the category at `position`, one entry per source row.
    pub fn indicator(&self, position: usize) -> Vec<i64> {
        self.codes
            .iter()
            .map(|&code| i64::from(code == position))
            .collect()
    }
}

impl<'a> IntoIterator for &'a DistinctValues {
    type Item = &'a Category;
    type IntoIter = std::slice::Iter<'a, Category>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(values: &[Option<&str>]) -> Vec<Category> {
        values
            .iter()
            .map(|value| Category::from(value.map(str::to_string)))
            .collect()
    }

    #[test]
    fn enumerates_in_first_occurrence_order() {
        let distinct = DistinctValues::from_rows(rows(&[
            Some("red"),
            Some("green"),
            Some("blue"),
            Some("red"),
        ]));
        let labels: Vec<&str> = distinct.iter().map(Category::label).collect();
        assert_eq!(labels, vec!["red", "green", "blue"]);
        assert_eq!(distinct.codes(), &[0, 1, 2, 0]);
        assert_eq!(distinct.count(0), 2);
        assert_eq!(distinct.count(1), 1);
        assert_eq!(distinct.count(7), 0);
    }

    #[test]
    fn missing_values_form_one_category() {
        let distinct = DistinctValues::from_rows(rows(&[None, Some("a"), None]));
        assert_eq!(distinct.len(), 2);
        assert_eq!(distinct.first(), Some(&Category::Missing));
        assert_eq!(distinct.count(0), 2);
    }

    #[test]
    fn indicator_marks_matching_rows() {
        let distinct = DistinctValues::from_rows(rows(&[
            Some("cat"),
            Some("dog"),
            Some("cat"),
            Some("dog"),
        ]));
        assert_eq!(distinct.indicator(0), vec![1, 0, 1, 0]);
        assert_eq!(distinct.indicator(1), vec![0, 1, 0, 1]);
    }

    #[test]
    fn empty_input_has_no_categories() {
        let distinct = DistinctValues::from_rows(Vec::new());
        assert!(distinct.is_empty());
        assert_eq!(distinct.row_count(), 0);
        assert!(distinct.first().is_none());
    }

    #[test]
    fn missing_label_is_null() {
        assert_eq!(Category::Missing.to_string(), "null");
        assert_eq!(Category::value("x").to_string(), "x");
    }
}
