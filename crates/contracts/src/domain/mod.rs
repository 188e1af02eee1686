//! Domain types produced by the engine and consumed by presentation/export.

pub mod extra_sales;
pub mod record;
pub mod summary;

pub use extra_sales::{BaselineExtraSales, ExtraSalesTotals};
pub use record::TransactionRecord;
pub use summary::{DatasetTotals, MemberSplit, PromotionSummary, StorePerformance, StoreSummary};
