use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One normalized transaction row.
///
/// Built from a raw row and the resolved column map, sourced verbatim from
/// the input; never mutated after resolution. Fields whose column is missing
/// in the input default to empty text / zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub promotion_id: String,
    pub promotion_desc: String,
    pub store_code: String,
    /// Member/VIP code. Blank means an unregistered ("new member") sale.
    pub member_code: String,
    /// SKU / PLU style identifier.
    pub sku: String,
    pub qty_sold: f64,
    pub amt_sold: f64,
    pub discount: f64,
    pub original_price: f64,
    pub tx_date: Option<NaiveDate>,
}
