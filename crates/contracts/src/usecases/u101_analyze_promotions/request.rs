use serde::{Deserialize, Serialize};

/// Request to analyze a primary (promotion-period) transaction export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    /// Path of the selected export file
    pub file_path: String,
}
