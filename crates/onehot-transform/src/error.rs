//! Error types for encode operations.

use onehot_model::ValidationKind;
use thiserror::Error;

/// Errors returned by [`Encoder`](crate::Encoder) operations.
///
/// Every variant except [`EncodeError::Table`] is a validation failure on the
/// input and carries a [`ValidationKind`].
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Column not found in the held table.
    #[error("column '{column}' not found in table")]
    ColumnNotFound { column: String },

    /// Binary encoding needs exactly two distinct values.
    #[error(
        "column '{column}' has {found} distinct values; binary encoding requires exactly 2"
    )]
    WrongArityBinary { column: String, found: usize },

    /// One-hot encoding needs at least three distinct values.
    #[error(
        "column '{column}' has {found} distinct values; one-hot encoding requires at least 3, \
         use binary encoding for a two-valued column"
    )]
    WrongArityOneHot { column: String, found: usize },

    /// An indicator column name is already used.
    #[error("indicator column '{name}' collides with an existing column name")]
    NamingCollision { name: String },

    /// Failed DataFrame operation.
    #[error("table operation failed: {message}")]
    Table { message: String },
}

impl EncodeError {
    /// Validation kind of the error, `None` for table failures.
    pub fn kind(&self) -> Option<ValidationKind> {
        match self {
            Self::ColumnNotFound { .. } => Some(ValidationKind::ColumnNotFound),
            Self::WrongArityBinary { .. } => Some(ValidationKind::WrongArityBinary),
            Self::WrongArityOneHot { .. } => Some(ValidationKind::WrongArityOneHot),
            Self::NamingCollision { .. } => Some(ValidationKind::NamingCollision),
            Self::Table { .. } => None,
        }
    }
}

impl From<polars::prelude::PolarsError> for EncodeError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::Table {
            message: err.to_string(),
        }
    }
}

/// Result type for encode operations.
pub type Result<T> = std::result::Result<T, EncodeError>;
