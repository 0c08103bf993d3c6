//! File-level encode and inspect stages used by the CLI commands.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use onehot_ingest::{read_csv_table, write_csv_table};
use onehot_model::{DistinctValues, EncodingMode, EncodingSummary};
use onehot_transform::{Encoder, distinct_values};
use tracing::{info, info_span, trace};

use crate::logging::redact_value;

/// One encode run: read `input`, encode `column`, write `output`.
#[derive(Debug, Clone)]
pub struct EncodeRequest {
    pub input: PathBuf,
    pub output: PathBuf,
    pub column: String,
    pub mode: EncodingMode,
}

/// Read, encode and write one CSV file, returning the encoding summary.
pub fn encode_file(request: &EncodeRequest) -> Result<EncodingSummary> {
    let span = info_span!(
        "encode_file",
        input = %request.input.display(),
        column = %request.column,
        mode = %request.mode
    );
    let _guard = span.enter();
    let start = Instant::now();

    let source = read_csv_table(&request.input)
        .with_context(|| format!("read input: {}", request.input.display()))?;
    info!(
        rows = source.height(),
        columns = source.width(),
        "loaded input"
    );

    let mut encoder = Encoder::new(&source);
    let mut encoded = match request.mode {
        EncodingMode::Binary => encoder.binary_encode(&request.column),
        EncodingMode::OneHot => encoder.one_hot_encode(&request.column),
    }
    .with_context(|| format!("{} encode column '{}'", request.mode, request.column))?;
    for category in &encoded.categories {
        trace!(category = redact_value(category.label()), "category");
    }

    write_csv_table(&mut encoded.data, &request.output)
        .with_context(|| format!("write output: {}", request.output.display()))?;
    info!(
        rows = encoded.record_count(),
        columns = encoded.data.width(),
        indicators = encoded.indicators.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "wrote encoded table"
    );
    Ok(encoded.summary())
}

/// Distinct values of `column` in `input`, first-occurrence order.
pub fn inspect_file(input: &Path, column: &str) -> Result<DistinctValues> {
    let span = info_span!("inspect_file", input = %input.display(), column);
    let _guard = span.enter();

    let source =
        read_csv_table(input).with_context(|| format!("read input: {}", input.display()))?;
    let distinct = distinct_values(&source, column)
        .with_context(|| format!("inspect column '{column}'"))?;
    info!(distinct = distinct.len(), "inspected column");
    Ok(distinct)
}

/// The encode operation that accepts a column with `arity` distinct values.
pub fn applicable_mode(arity: usize) -> Option<EncodingMode> {
    match arity {
        2 => Some(EncodingMode::Binary),
        n if n > 2 => Some(EncodingMode::OneHot),
        _ => None,
    }
}
