use serde::{Deserialize, Serialize};

/// User-chosen baseline window for the uplift calculation.
///
/// Both bounds are required and arrive as text from the date inputs; the
/// engine validates them before any computation starts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtraSalesRequest {
    pub start_date: String,
    pub end_date: String,
}
