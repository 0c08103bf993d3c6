//! Distinct value enumeration for a DataFrame column.

use onehot_model::DistinctValues;
use polars::prelude::DataFrame;
use tracing::debug;

use crate::error::{EncodeError, Result};
use crate::values::category_of;

/// Enumerate the distinct values of `column` in first-occurrence order.
///
/// The returned set also records, per row, which category the row holds, so
/// callers can build indicator columns without rescanning the table.
///
/// # Errors
///
/// Returns [`EncodeError::ColumnNotFound`] when the column is not in `df`.
pub fn distinct_values(df: &DataFrame, column: &str) -> Result<DistinctValues> {
    let series = df
        .column(column)
        .map_err(|_| EncodeError::ColumnNotFound {
            column: column.to_string(),
        })?;
    let mut rows = Vec::with_capacity(series.len());
    for idx in 0..series.len() {
        rows.push(category_of(series.get(idx)?));
    }
    let distinct = DistinctValues::from_rows(rows);
    debug!(
        column,
        rows = distinct.row_count(),
        distinct = distinct.len(),
        "enumerated distinct values"
    );
    Ok(distinct)
}
