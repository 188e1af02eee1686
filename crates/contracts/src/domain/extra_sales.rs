use serde::{Deserialize, Serialize};

/// Uplift estimate for one promotion against the scaled baseline.
///
/// Ephemeral: recomputed in full whenever the baseline window or dataset
/// changes. Negative extras are valid output — the promotion underperformed
/// the baseline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BaselineExtraSales {
    pub promotion_id: String,
    pub description: String,

    /// Observed during the promotion period.
    pub qty_sold: f64,
    pub revenue: f64,
    pub discount: f64,

    /// Baseline figures projected onto the promotion's observed duration.
    pub baseline_qty: f64,
    pub baseline_revenue: f64,

    pub extra_qty: f64,
    pub extra_sales: f64,
    /// extra sales / scaled baseline * 100; 0 when the scaled baseline is 0.
    pub uplift_percent: f64,
    /// extra revenue / discount spent * 100; 0 when the discount is 0.
    pub roi_percent: f64,
}

/// Aggregate uplift across every promotion in the session, computed against
/// the global promotion-SKU set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtraSalesTotals {
    pub promo_revenue: f64,
    /// Matching-SKU baseline revenue inside the window, before scaling.
    pub baseline_revenue: f64,
    pub daily_baseline: f64,
    pub scaled_baseline: f64,
    pub extra_sales: f64,
    pub uplift_percent: f64,
    pub baseline_days: i64,
    pub promo_days: i64,
}
