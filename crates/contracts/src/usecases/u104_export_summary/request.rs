use serde::{Deserialize, Serialize};

/// Request to export the current promotion summary table
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExportRequest {
    /// Explicit output file; when absent the configured export directory
    /// and a dated file name are used.
    pub output_path: Option<String>,
}
