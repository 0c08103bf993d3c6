//! Encoded frame type returned by encode operations.

use onehot_model::{Category, DistinctValues, EncodingMode, EncodingSummary, IndicatorSummary};
use polars::prelude::DataFrame;

/// A widened table together with what was encoded to produce it.
///
/// `data` holds the source columns minus the encoded one, in their original
/// order, followed by the indicator columns named in `indicators`.
#[derive(Debug, Clone)]
pub struct EncodedFrame {
    /// The encoded table.
    pub data: DataFrame,
    /// Name of the column that was replaced.
    pub source_column: String,
    /// Operation that produced the table.
    pub mode: EncodingMode,
    /// Distinct values of the source column, first-occurrence order.
    pub categories: DistinctValues,
    /// Indicator column names in output order.
    pub indicators: Vec<String>,
}

impl EncodedFrame {
    /// Returns the number of records in the frame.
    pub fn record_count(&self) -> usize {
        self.data.height()
    }

    /// The category whose rows are marked 1 by a binary indicator.
    pub fn positive_category(&self) -> Option<&Category> {
        match self.mode {
            EncodingMode::Binary => self.categories.first(),
            EncodingMode::OneHot => None,
        }
    }

    /// Build a printable report of this encode.
    ///
    /// Indicator `i` covers category `i`: binary encodes only produce an
    /// indicator for the first category.
    pub fn summary(&self) -> EncodingSummary {
        let indicators = self
            .indicators
            .iter()
            .zip(self.categories.iter())
            .enumerate()
            .map(|(position, (name, category))| IndicatorSummary {
                name: name.clone(),
                category: category.clone(),
                count: self.categories.count(position),
            })
            .collect();
        EncodingSummary {
            column: self.source_column.clone(),
            mode: self.mode,
            row_count: self.record_count(),
            indicators,
        }
    }
}
