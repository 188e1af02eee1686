//! The analysis session: everything one aggregation pass produced.
//!
//! The session is owned by the caller and passed explicitly into the uplift
//! calculation, presentation queries and export — there is no module-level
//! accumulator. Processing a new file builds a fresh session that replaces
//! the previous one wholesale.

use contracts::domain::{
    DatasetTotals, MemberSplit, PromotionSummary, StorePerformance, StoreSummary,
};
use std::collections::{HashMap, HashSet};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct AnalysisSession {
    pub session_id: Uuid,

    /// Finalized summaries, sorted by revenue descending.
    pub promotions: Vec<PromotionSummary>,

    /// One entry per (promotion, store) pair, encounter order.
    pub stores: Vec<StoreSummary>,

    /// Promotion ID -> SKUs observed under it. Each subset is covered by
    /// `promotion_skus`.
    pub sku_index: HashMap<String, HashSet<String>>,

    /// Union of every promotion's SKU set; filters baseline rows for the
    /// aggregate uplift total.
    pub promotion_skus: HashSet<String>,

    /// Inclusive day span of parseable transaction dates in the dataset;
    /// 1 when no dates parsed.
    pub promo_days: i64,

    /// All rows in the input batch, including rows skipped for having no
    /// promotion ID.
    pub transaction_count: usize,
}

impl AnalysisSession {
    pub fn empty() -> Self {
        Self {
            session_id: Uuid::new_v4(),
            promotions: Vec::new(),
            stores: Vec::new(),
            sku_index: HashMap::new(),
            promotion_skus: HashSet::new(),
            promo_days: 1,
            transaction_count: 0,
        }
    }

    /// SKUs of one promotion; promotions absent from the primary dataset
    /// have no entry, which the uplift calculator treats as an empty set.
    pub fn skus_for(&self, promotion_id: &str) -> Option<&HashSet<String>> {
        self.sku_index.get(promotion_id)
    }

    /// Summary-card totals for the whole dataset.
    pub fn totals(&self) -> DatasetTotals {
        DatasetTotals {
            promotion_count: self.promotions.len(),
            transaction_count: self.transaction_count,
            total_revenue: self.promotions.iter().map(|p| p.revenue).sum(),
            total_discount: self.promotions.iter().map(|p| p.discount).sum(),
        }
    }

    /// New-vs-existing member split, across all promotions or one.
    /// An unknown promotion ID yields a zero split.
    pub fn member_split(&self, promotion_id: Option<&str>) -> MemberSplit {
        let (new_members, existing_members) = match promotion_id {
            None => self.promotions.iter().fold((0, 0), |(n, e), p| {
                (n + p.new_member_count, e + p.existing_member_count)
            }),
            Some(id) => self
                .promotions
                .iter()
                .find(|p| p.promotion_id == id)
                .map(|p| (p.new_member_count, p.existing_member_count))
                .unwrap_or((0, 0)),
        };
        MemberSplit {
            new_members,
            existing_members,
            total: new_members + existing_members,
        }
    }

    /// Store performance for the store chart: aggregated across promotions
    /// by store code, or filtered to one promotion. Sorted by revenue
    /// descending, cut to the top `top` stores.
    pub fn store_performance(
        &self,
        promotion_id: Option<&str>,
        top: usize,
    ) -> Vec<StorePerformance> {
        let mut perf: Vec<StorePerformance> = Vec::new();

        match promotion_id {
            None => {
                let mut index: HashMap<String, usize> = HashMap::new();
                for store in &self.stores {
                    let pos = *index.entry(store.store_code.clone()).or_insert_with(|| {
                        perf.push(StorePerformance {
                            store_code: store.store_code.clone(),
                            ..Default::default()
                        });
                        perf.len() - 1
                    });
                    perf[pos].usage += store.usage;
                    perf[pos].revenue += store.revenue;
                    perf[pos].qty_sold += store.qty_sold;
                }
            }
            Some(id) => {
                for store in self.stores.iter().filter(|s| s.promotion_id == id) {
                    perf.push(StorePerformance {
                        store_code: store.store_code.clone(),
                        usage: store.usage,
                        revenue: store.revenue,
                        qty_sold: store.qty_sold,
                    });
                }
            }
        }

        perf.sort_by(|a, b| {
            b.revenue
                .partial_cmp(&a.revenue)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        perf.truncate(top);
        perf
    }

    /// Case-insensitive substring filter on promotion ID and description,
    /// for the search box above the detail table.
    pub fn search(&self, term: &str) -> Vec<&PromotionSummary> {
        let term = term.to_lowercase();
        self.promotions
            .iter()
            .filter(|p| {
                p.promotion_id.to_lowercase().contains(&term)
                    || p.description.to_lowercase().contains(&term)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_with_stores() -> AnalysisSession {
        let mut session = AnalysisSession::empty();
        session.stores = vec![
            StoreSummary {
                promotion_id: "P1".into(),
                store_code: "S01".into(),
                usage: 2,
                revenue: 100.0,
                qty_sold: 5.0,
            },
            StoreSummary {
                promotion_id: "P2".into(),
                store_code: "S01".into(),
                usage: 1,
                revenue: 40.0,
                qty_sold: 1.0,
            },
            StoreSummary {
                promotion_id: "P1".into(),
                store_code: "S02".into(),
                usage: 3,
                revenue: 300.0,
                qty_sold: 9.0,
            },
        ];
        session
    }

    #[test]
    fn test_store_performance_aggregates_across_promotions() {
        let session = session_with_stores();
        let perf = session.store_performance(None, 10);

        assert_eq!(perf.len(), 2);
        // S02 first: higher revenue
        assert_eq!(perf[0].store_code, "S02");
        assert_eq!(perf[0].revenue, 300.0);
        assert_eq!(perf[1].store_code, "S01");
        assert_eq!(perf[1].usage, 3);
        assert_eq!(perf[1].revenue, 140.0);
    }

    #[test]
    fn test_store_performance_filtered_and_capped() {
        let session = session_with_stores();
        let perf = session.store_performance(Some("P1"), 1);

        assert_eq!(perf.len(), 1);
        assert_eq!(perf[0].store_code, "S02");
    }

    #[test]
    fn test_member_split_unknown_promotion() {
        let session = session_with_stores();
        let split = session.member_split(Some("NOPE"));
        assert_eq!(split.total, 0);
    }

    #[test]
    fn test_search_matches_id_and_description() {
        let mut session = AnalysisSession::empty();
        let mut p1 = PromotionSummary::new("P1".into(), "Spring cat food".into());
        p1.finalize();
        let mut p2 = PromotionSummary::new("P2".into(), "Dog treats".into());
        p2.finalize();
        session.promotions = vec![p1, p2];

        assert_eq!(session.search("p2").len(), 1);
        assert_eq!(session.search("CAT").len(), 1);
        assert_eq!(session.search("zzz").len(), 0);
        assert_eq!(session.search("").len(), 2);
    }
}
