use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single decoded spreadsheet cell.
///
/// Spreadsheet decoders deliver either text, an already-typed number, or
/// nothing. Typing into a `TransactionRecord` happens later, at column
/// resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    /// Text value
    Text(String),
    /// Numeric value
    Number(f64),
    /// Empty cell
    Empty,
}

impl CellValue {
    /// Cell content as text. Numbers are rendered, empty cells become "".
    pub fn text(&self) -> String {
        match self {
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => n.to_string(),
            CellValue::Empty => String::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Text(s) => s.is_empty(),
            CellValue::Number(_) => false,
            CellValue::Empty => true,
        }
    }
}

/// One decoded row: original header string -> cell value.
pub type RawRow = HashMap<String, CellValue>;

/// A fully materialized batch of decoded rows.
///
/// `headers` come from the first row of the file and keep their original
/// casing and order; `rows` keep file order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RowBatch {
    pub headers: Vec<String>,
    pub rows: Vec<RawRow>,
}

impl RowBatch {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
