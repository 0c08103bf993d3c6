use std::fmt;

use serde::{Deserialize, Serialize};

use crate::category::Category;

/// Which encode operation produced a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EncodingMode {
    /// Two categories, one indicator column.
    Binary,
    /// Three or more categories, one indicator column each.
    OneHot,
}

impl EncodingMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Binary => "binary",
            Self::OneHot => "one-hot",
        }
    }
}

impl fmt::Display for EncodingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One output indicator column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicatorSummary {
    /// Output column name.
    pub name: String,
    /// Category the indicator is 1 for.
    pub category: Category,
    /// Rows set to 1.
    pub count: usize,
}

/// Report of a single encode call, suitable for printing or JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodingSummary {
    pub column: String,
    pub mode: EncodingMode,
    pub row_count: usize,
    pub indicators: Vec<IndicatorSummary>,
}

impl EncodingSummary {
    /// Rows not covered by any indicator (the negative rows of a binary encode).
    pub fn uncovered_rows(&self) -> usize {
        let covered: usize = self.indicators.iter().map(|indicator| indicator.count).sum();
        self.row_count.saturating_sub(covered)
    }
}
