//! The one-hot encoder.

use onehot_model::{DistinctValues, EncodingMode};
use polars::prelude::{Column, DataFrame, NamedFrom, Series};
use tracing::{debug, info_span};

use crate::distinct::distinct_values;
use crate::error::{EncodeError, Result};
use crate::frame::EncodedFrame;
use crate::naming::{CategoryNamer, binary_indicator_name, ensure_free, literal_name};

/// Encodes one categorical column of a borrowed table at a time.
///
/// The table is never modified; each call builds a new one. The encoder keeps
/// the distinct values seen by the latest `binary_encode` and the latest
/// `one_hot_encode` call for inspection. These slots are written by every
/// call, which is why the encode methods take `&mut self`: use one encoder per
/// thread when encoding concurrently.
#[derive(Debug, Clone)]
pub struct Encoder<'a> {
    data: &'a DataFrame,
    namer: CategoryNamer,
    last_binary: Option<DistinctValues>,
    last_one_hot: Option<DistinctValues>,
}

impl<'a> Encoder<'a> {
    /// Create an encoder over `data`. No validation happens here.
    pub fn new(data: &'a DataFrame) -> Self {
        Self {
            data,
            namer: literal_name,
            last_binary: None,
            last_one_hot: None,
        }
    }

    /// Use `namer` to name one-hot indicator columns.
    #[must_use]
    pub fn with_namer(mut self, namer: CategoryNamer) -> Self {
        self.namer = namer;
        self
    }

    /// The table being encoded.
    pub fn data(&self) -> &'a DataFrame {
        self.data
    }

    /// Distinct values from the most recent `binary_encode` call.
    pub fn last_binary_categories(&self) -> Option<&DistinctValues> {
        self.last_binary.as_ref()
    }

    /// Distinct values from the most recent `one_hot_encode` call.
    pub fn last_one_hot_categories(&self) -> Option<&DistinctValues> {
        self.last_one_hot.as_ref()
    }

    /// Replace a two-valued `column` with a single `one_hot_<column>` indicator.
    ///
    /// The first value in first-occurrence order is the positive one: the
    /// indicator is 1 on its rows and 0 everywhere else.
    ///
    /// # Errors
    ///
    /// - [`EncodeError::ColumnNotFound`] if `column` is not in the table
    /// - [`EncodeError::WrongArityBinary`] unless there are exactly 2 distinct values
    /// - [`EncodeError::NamingCollision`] if `one_hot_<column>` is already taken
    pub fn binary_encode(&mut self, column: &str) -> Result<EncodedFrame> {
        let span = info_span!("encode", column, mode = "binary");
        let _guard = span.enter();

        let categories = distinct_values(self.data, column)?;
        self.last_binary = Some(categories.clone());
        if categories.len() != 2 {
            return Err(EncodeError::WrongArityBinary {
                column: column.to_string(),
                found: categories.len(),
            });
        }

        let name = binary_indicator_name(column);
        let indicator: Column = Series::new(name.as_str().into(), categories.indicator(0)).into();
        let indicators = vec![name];
        let data = self.widen(column, &indicators, &[indicator])?;
        debug!(rows = data.height(), "binary encoded");

        Ok(EncodedFrame {
            data,
            source_column: column.to_string(),
            mode: EncodingMode::Binary,
            categories,
            indicators,
        })
    }

    /// Replace `column` with one indicator column per distinct value.
    ///
    /// Indicators follow first-occurrence order and are named by the
    /// encoder's namer, so every row has exactly one indicator set.
    ///
    /// # Errors
    ///
    /// - [`EncodeError::ColumnNotFound`] if `column` is not in the table
    /// - [`EncodeError::WrongArityOneHot`] when there are 2 or fewer distinct values
    /// - [`EncodeError::NamingCollision`] if an indicator name is taken or repeated
    pub fn one_hot_encode(&mut self, column: &str) -> Result<EncodedFrame> {
        let span = info_span!("encode", column, mode = "one-hot");
        let _guard = span.enter();

        let categories = distinct_values(self.data, column)?;
        self.last_one_hot = Some(categories.clone());
        if categories.len() <= 2 {
            return Err(EncodeError::WrongArityOneHot {
                column: column.to_string(),
                found: categories.len(),
            });
        }

        let indicators: Vec<String> = categories.iter().map(self.namer).collect();
        let columns: Vec<Column> = indicators
            .iter()
            .enumerate()
            .map(|(position, name)| {
                Series::new(name.as_str().into(), categories.indicator(position)).into()
            })
            .collect();
        let data = self.widen(column, &indicators, &columns)?;
        debug!(
            rows = data.height(),
            indicators = indicators.len(),
            "one-hot encoded"
        );

        Ok(EncodedFrame {
            data,
            source_column: column.to_string(),
            mode: EncodingMode::OneHot,
            categories,
            indicators,
        })
    }

    /// Drop `column` and append `columns` after the retained ones.
    fn widen(&self, column: &str, names: &[String], columns: &[Column]) -> Result<DataFrame> {
        let retained = self.data.drop(column)?;
        ensure_free(&retained, names)?;
        Ok(retained.hstack(columns)?)
    }
}
