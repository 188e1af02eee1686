use crate::domain::DatasetTotals;
use serde::{Deserialize, Serialize};

/// Summary-card payload produced after a successful aggregation pass
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    /// ID of the analysis session that replaced the previous one
    pub session_id: String,

    pub totals: DatasetTotals,
}
