use serde::{Deserialize, Serialize};

/// Result of a summary export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportResponse {
    /// Where the file was written
    pub path: String,

    /// Data rows written (header excluded)
    pub row_count: usize,
}
