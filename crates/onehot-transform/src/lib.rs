//! One-hot encoding of a single categorical column of a Polars DataFrame.
//!
//! This crate provides:
//!
//! - **encoder**: the [`Encoder`] with `binary_encode` and `one_hot_encode`
//! - **distinct**: first-occurrence distinct value enumeration for a column
//! - **naming**: category-to-column-name functions and collision checks
//! - **values**: rendering of Polars cell values into [`Category`] keys
//!
//! # Example
//!
//! ```
//! use polars::prelude::{DataFrame, NamedFrom, Series};
//! use onehot_transform::Encoder;
//!
//! let df = DataFrame::new(vec![
//!     Series::new("col".into(), vec!["cat", "dog", "cat", "dog"]).into(),
//! ])
//! .unwrap();
//!
//! let mut encoder = Encoder::new(&df);
//! let encoded = encoder.binary_encode("col").unwrap();
//! let indicator = encoded.data.column("one_hot_col").unwrap().i64().unwrap();
//! assert_eq!(indicator.get(0), Some(1));
//! assert_eq!(indicator.get(1), Some(0));
//! ```

mod distinct;
mod encoder;
mod error;
mod frame;
mod naming;
mod values;

pub use onehot_model::{Category, DistinctValues, EncodingMode, EncodingSummary, ValidationKind};

pub use distinct::distinct_values;
pub use encoder::Encoder;
pub use error::{EncodeError, Result};
pub use frame::EncodedFrame;
pub use naming::{BINARY_PREFIX, CategoryNamer, binary_indicator_name, literal_name};
pub use values::category_of;
