use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Per-promotion aggregate over one primary dataset.
///
/// Running fields accumulate during the aggregation pass; derived fields are
/// computed once at finalization and are read-only afterwards. The whole set
/// is discarded and rebuilt when a new file is processed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PromotionSummary {
    pub promotion_id: String,
    /// Empty string (never null) when the source column is absent.
    pub description: String,

    /// Distinct non-blank member codes seen under this promotion.
    #[serde(skip)]
    pub existing_members: HashSet<String>,
    /// Blank-member-code rows. Each one counts as a distinct new member —
    /// there is no identifier to deduplicate on, so this is a plain counter.
    #[serde(skip)]
    pub new_member_events: usize,

    pub qty_sold: f64,
    pub revenue: f64,
    pub discount: f64,
    pub original_price: f64,

    // Derived at finalization
    pub new_member_count: usize,
    pub existing_member_count: usize,
    pub total_customers: usize,
    /// discount / original price * 100; 0 when original price is 0.
    /// Negative original prices pass through unvalidated.
    pub discount_percent: f64,
}

impl PromotionSummary {
    pub fn new(promotion_id: String, description: String) -> Self {
        Self {
            promotion_id,
            description,
            ..Default::default()
        }
    }

    /// Computes the derived fields from the accumulated state.
    pub fn finalize(&mut self) {
        self.new_member_count = self.new_member_events;
        self.existing_member_count = self.existing_members.len();
        self.total_customers = self.new_member_count + self.existing_member_count;
        self.discount_percent = if self.original_price > 0.0 {
            self.discount / self.original_price * 100.0
        } else {
            0.0
        };
    }
}

/// Per-(promotion, store) aggregate. Same lifecycle as `PromotionSummary`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreSummary {
    pub promotion_id: String,
    /// `"Unknown"` sentinel when the source column is absent or blank.
    pub store_code: String,
    /// Transaction row count.
    pub usage: usize,
    pub revenue: f64,
    pub qty_sold: f64,
}

/// Store performance aggregated across promotions (or filtered to one),
/// as consumed by the store chart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorePerformance {
    pub store_code: String,
    pub usage: usize,
    pub revenue: f64,
    pub qty_sold: f64,
}

/// Dataset-level totals for the summary cards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatasetTotals {
    pub promotion_count: usize,
    pub transaction_count: usize,
    pub total_revenue: f64,
    pub total_discount: f64,
}

/// New-vs-existing member split for the member chart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemberSplit {
    pub new_members: usize,
    pub existing_members: usize,
    pub total: usize,
}

impl MemberSplit {
    pub fn new_percent(&self) -> f64 {
        if self.total > 0 {
            self.new_members as f64 / self.total as f64 * 100.0
        } else {
            0.0
        }
    }

    pub fn existing_percent(&self) -> f64 {
        if self.total > 0 {
            self.existing_members as f64 / self.total as f64 * 100.0
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finalize_customer_identity() {
        let mut promo = PromotionSummary::new("P1".into(), "Test".into());
        promo.new_member_events = 3;
        promo.existing_members.insert("M1".into());
        promo.existing_members.insert("M2".into());
        promo.finalize();

        assert_eq!(promo.new_member_count, 3);
        assert_eq!(promo.existing_member_count, 2);
        assert_eq!(promo.total_customers, 5);
    }

    #[test]
    fn test_discount_percent_zero_original_price() {
        let mut promo = PromotionSummary::new("P1".into(), String::new());
        promo.discount = 10.0;
        promo.original_price = 0.0;
        promo.finalize();
        assert_eq!(promo.discount_percent, 0.0);
    }

    #[test]
    fn test_discount_percent() {
        let mut promo = PromotionSummary::new("P1".into(), String::new());
        promo.discount = 25.0;
        promo.original_price = 100.0;
        promo.finalize();
        assert_eq!(promo.discount_percent, 25.0);
    }

    #[test]
    fn test_member_split_percent() {
        let split = MemberSplit {
            new_members: 1,
            existing_members: 3,
            total: 4,
        };
        assert_eq!(split.new_percent(), 25.0);
        assert_eq!(split.existing_percent(), 75.0);

        let empty = MemberSplit::default();
        assert_eq!(empty.new_percent(), 0.0);
    }
}
