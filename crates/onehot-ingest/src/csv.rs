//! CSV reading and writing through Polars.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use polars::prelude::{CsvReadOptions, CsvWriter, DataFrame, SerReader, SerWriter};
use tracing::debug;

use crate::error::{IngestError, Result};

/// Rows used for schema inference.
const INFER_SCHEMA_ROWS: usize = 100;

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })
}

/// Returns true if the file has a non-blank first line.
fn has_header(path: &Path) -> Result<bool> {
    let reader = BufReader::new(open(path)?);
    let Some(first) = reader.lines().next() else {
        return Ok(false);
    };
    let line = first.map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let cleaned = line.strip_prefix('\u{feff}').unwrap_or(&line);
    Ok(!cleaned.trim().is_empty())
}

/// Reads a CSV file with a single header row into a DataFrame.
///
/// Column types are inferred from the first 100 rows; empty cells become nulls.
pub fn read_csv_table(path: &Path) -> Result<DataFrame> {
    if !has_header(path)? {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(INFER_SCHEMA_ROWS))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "read csv table"
    );
    Ok(df)
}

/// Writes a DataFrame to `path` as comma-separated CSV with a header row.
pub fn write_csv_table(df: &mut DataFrame, path: &Path) -> Result<()> {
    let mut file = File::create(path).map_err(|e| IngestError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(df)
        .map_err(|e| IngestError::CsvWrite {
            message: e.to_string(),
        })?;
    debug!(path = %path.display(), rows = df.height(), "wrote csv table");
    Ok(())
}

/// Renders a DataFrame as CSV text, in the same format as [`write_csv_table`].
pub fn write_csv_string(df: &mut DataFrame) -> Result<String> {
    let mut buffer: Vec<u8> = Vec::new();
    CsvWriter::new(&mut buffer)
        .include_header(true)
        .finish(df)
        .map_err(|e| IngestError::CsvWrite {
            message: e.to_string(),
        })?;
    String::from_utf8(buffer).map_err(|e| IngestError::CsvWrite {
        message: e.to_string(),
    })
}
