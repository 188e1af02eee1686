use crate::shared::DateWindow;
use serde::{Deserialize, Serialize};

/// Result of loading a baseline export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadBaselineResponse {
    pub record_count: usize,

    /// Resolved transaction-date column, when one was found
    pub date_column: Option<String>,

    /// Auto-suggested window: [min, max] parseable transaction date.
    /// User-editable before the uplift calculation.
    pub suggested_window: Option<DateWindow>,

    /// Inclusive day count of the suggested window
    pub suggested_days: Option<i64>,

    /// Set when no date column resolved: the headers actually present, so
    /// the user can see what the file contains instead of getting an abort.
    pub available_headers: Option<Vec<String>>,
}
