use crate::domain::{BaselineExtraSales, ExtraSalesTotals};
use serde::{Deserialize, Serialize};

/// Uplift table plus aggregate totals
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtraSalesResponse {
    pub totals: ExtraSalesTotals,

    /// One row per promotion, sorted by extra sales descending
    pub by_promotion: Vec<BaselineExtraSales>,
}
