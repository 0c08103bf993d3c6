//! CSV ingestion for the one-hot encoder.
//!
//! Reads CSV files into Polars DataFrames and writes encoded frames back out.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use onehot_ingest::{read_csv_table, write_csv_table};
//!
//! let mut df = read_csv_table(Path::new("pets.csv"))?;
//! write_csv_table(&mut df, Path::new("pets_encoded.csv"))?;
//! ```

mod csv;
mod error;

pub use csv::{read_csv_table, write_csv_string, write_csv_table};
pub use error::{IngestError, Result};
