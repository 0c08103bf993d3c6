//! Plain data types shared by the one-hot encoding crates.
//!
//! Nothing in here knows about Polars: cell values arrive already rendered as
//! [`Category`] keys, and the encoded table itself lives in `onehot-transform`.

pub mod category;
pub mod kind;
pub mod summary;

pub use category::{Category, DistinctValues};
pub use kind::ValidationKind;
pub use summary::{EncodingMode, EncodingSummary, IndicatorSummary};
