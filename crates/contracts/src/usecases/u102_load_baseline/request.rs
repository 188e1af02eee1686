use serde::{Deserialize, Serialize};

/// Request to load a baseline (non-promotion period) export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadBaselineRequest {
    /// Path of the selected baseline file
    pub file_path: String,
}
