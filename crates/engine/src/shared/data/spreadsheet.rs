//! Batch decoding of tabular export files.
//!
//! Reading is the single suspension point in the pipeline: the whole file is
//! materialized before decoding, and rows are only ever delivered as a
//! complete batch. There is no streaming delivery, no cancellation of an
//! in-flight decode and no timeout — a bad file either fails to decode or
//! completes.

use contracts::shared::{CellValue, RawRow, RowBatch};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("failed to read file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to decode spreadsheet: {0}")]
    Csv(#[from] csv::Error),
    #[error("no data found in file")]
    Empty,
}

/// Reads `path` fully, then decodes the bytes as CSV into a `RowBatch`.
pub async fn read_batch(path: &Path) -> Result<RowBatch, DecodeError> {
    let bytes = tokio::fs::read(path).await?;
    decode_csv(&bytes)
}

/// Decodes CSV bytes: first row becomes the header list (original casing
/// and order preserved), every other row a header -> cell map. Empty cells
/// decode as `CellValue::Empty`; everything else stays text — typing
/// happens later, at record resolution.
///
/// A zero-row batch is not an error here; emptiness policy belongs to the
/// caller (primary datasets aggregate to nothing, baseline datasets reject).
pub fn decode_csv(bytes: &[u8]) -> Result<RowBatch, DecodeError> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(bytes);

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let mut row = RawRow::new();
        for (idx, header) in headers.iter().enumerate() {
            let cell = match record.get(idx) {
                None | Some("") => CellValue::Empty,
                Some(value) => CellValue::Text(value.to_string()),
            };
            row.insert(header.clone(), cell);
        }
        rows.push(row);
    }

    Ok(RowBatch { headers, rows })
}
