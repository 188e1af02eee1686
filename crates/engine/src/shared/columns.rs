//! Column resolution for flexible export formats.
//!
//! Different POS exports name the same column differently ("Tx Date",
//! "XF_TXDATE", "Transaction Date"...). Each canonical field carries a fixed
//! alias list; matching is exact after lowercasing and trimming, never fuzzy
//! or substring. Resolution runs once per batch and the resulting map is
//! reused for every row.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Canonical semantic fields recognized in transaction exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    TxDate,
    PromotionId,
    PromotionDesc,
    StoreCode,
    MemberCode,
    DocNo,
    Sku,
    ItemDesc,
    Brand,
    AnimalType,
    ProductGroup,
    ProductClass,
    ProductCategory,
    ProductSubCategory,
    QtySold,
    AmtSold,
    Discount,
    SellPrice,
    OrgPrice,
}

/// All fields, for exhaustive resolution checks.
pub const ALL_FIELDS: &[Field] = &[
    Field::TxDate,
    Field::PromotionId,
    Field::PromotionDesc,
    Field::StoreCode,
    Field::MemberCode,
    Field::DocNo,
    Field::Sku,
    Field::ItemDesc,
    Field::Brand,
    Field::AnimalType,
    Field::ProductGroup,
    Field::ProductClass,
    Field::ProductCategory,
    Field::ProductSubCategory,
    Field::QtySold,
    Field::AmtSold,
    Field::Discount,
    Field::SellPrice,
    Field::OrgPrice,
];

static COLUMN_ALIASES: Lazy<HashMap<Field, &'static [&'static str]>> = Lazy::new(|| {
    let mut map: HashMap<Field, &'static [&'static str]> = HashMap::new();
    map.insert(
        Field::TxDate,
        &["tx date", "transaction date", "date", "txdate", "xf_txdate"],
    );
    map.insert(
        Field::PromotionId,
        &["promotion id", "promotionid", "promo id", "promoid"],
    );
    map.insert(
        Field::PromotionDesc,
        &[
            "promotion desci",
            "promotion description",
            "promo desc",
            "description",
        ],
    );
    map.insert(
        Field::StoreCode,
        &["store code", "storecode", "store", "xf_storecode"],
    );
    map.insert(
        Field::MemberCode,
        &[
            "vip code",
            "vipcode",
            "customer id",
            "customerid",
            "xf_vipcode",
        ],
    );
    map.insert(Field::DocNo, &["doc no", "docno", "document no", "xf_docno"]);
    map.insert(
        Field::Sku,
        &["plu style", "style", "sku", "product code", "xf_plu"],
    );
    map.insert(
        Field::ItemDesc,
        &["item description", "item desc", "product name", "xf_desci"],
    );
    map.insert(Field::Brand, &["brand", "brandlevel"]);
    map.insert(Field::AnimalType, &["animal type", "animaltype", "pet type"]);
    map.insert(
        Field::ProductGroup,
        &["product group", "productgroup", "xf_group0"],
    );
    map.insert(
        Field::ProductClass,
        &["product class", "productclass", "xf_group1"],
    );
    map.insert(
        Field::ProductCategory,
        &["product category", "category", "xf_group2"],
    );
    map.insert(
        Field::ProductSubCategory,
        &["product sub-category", "subcategory", "sub category"],
    );
    map.insert(Field::QtySold, &["qty sold", "quantity", "qty", "xf_qtysold"]);
    map.insert(
        Field::AmtSold,
        &["amt sold", "amount", "revenue", "sales", "xf_amtsold"],
    );
    map.insert(
        Field::Discount,
        &["prom less", "discount", "promotion discount"],
    );
    map.insert(
        Field::SellPrice,
        &["ttl sell price", "sell price", "selling price"],
    );
    map.insert(
        Field::OrgPrice,
        &["ttl org price", "original price", "org price"],
    );
    map
});

/// Returns the first header (original casing preserved) whose lowercased,
/// trimmed text exactly matches an alias of `field`, in alias-list order.
pub fn resolve<'a>(headers: &'a [String], field: Field) -> Option<&'a str> {
    let aliases: &[&str] = COLUMN_ALIASES.get(&field).copied().unwrap_or(&[]);
    let lowered: Vec<String> = headers.iter().map(|h| h.trim().to_lowercase()).collect();
    for alias in aliases {
        if let Some(idx) = lowered.iter().position(|h| h == alias) {
            return Some(headers[idx].as_str());
        }
    }
    None
}

/// Header names resolved for the fields the aggregation pass reads.
/// `None` is not fatal — dependent values default to empty/zero per row.
#[derive(Debug, Clone, Default)]
pub struct ColumnMap {
    pub tx_date: Option<String>,
    pub promotion_id: Option<String>,
    pub promotion_desc: Option<String>,
    pub store_code: Option<String>,
    pub member_code: Option<String>,
    pub sku: Option<String>,
    pub qty_sold: Option<String>,
    pub amt_sold: Option<String>,
    pub discount: Option<String>,
    pub original_price: Option<String>,
}

impl ColumnMap {
    pub fn resolve(headers: &[String]) -> Self {
        let find = |field| resolve(headers, field).map(str::to_string);
        Self {
            tx_date: find(Field::TxDate),
            promotion_id: find(Field::PromotionId),
            promotion_desc: find(Field::PromotionDesc),
            store_code: find(Field::StoreCode),
            member_code: find(Field::MemberCode),
            sku: find(Field::Sku),
            qty_sold: find(Field::QtySold),
            amt_sold: find(Field::AmtSold),
            discount: find(Field::Discount),
            original_price: find(Field::OrgPrice),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_resolve_preserves_casing() {
        let h = headers(&["Promotion ID", "Amt Sold"]);
        assert_eq!(resolve(&h, Field::PromotionId), Some("Promotion ID"));
        assert_eq!(resolve(&h, Field::AmtSold), Some("Amt Sold"));
    }

    #[test]
    fn test_resolve_mixed_case_no_space() {
        // "VIPCode" must hit the member-code field via the "vipcode" alias.
        let h = headers(&["VIPCode"]);
        assert_eq!(resolve(&h, Field::MemberCode), Some("VIPCode"));
    }

    #[test]
    fn test_resolve_trims_header() {
        let h = headers(&["  Tx Date  "]);
        assert_eq!(resolve(&h, Field::TxDate), Some("  Tx Date  "));
    }

    #[test]
    fn test_unknown_header_matches_nothing() {
        let h = headers(&["Random Column"]);
        for field in ALL_FIELDS {
            assert_eq!(resolve(&h, *field), None, "{:?} matched", field);
        }
    }

    #[test]
    fn test_no_substring_matching() {
        // "tx date extended" is not an alias even though it contains one.
        let h = headers(&["Tx Date Extended"]);
        assert_eq!(resolve(&h, Field::TxDate), None);
    }

    #[test]
    fn test_alias_order_wins() {
        // "Tx Date" comes before "Date" in the alias list, regardless of
        // header position.
        let h = headers(&["Date", "Tx Date"]);
        assert_eq!(resolve(&h, Field::TxDate), Some("Tx Date"));
    }

    #[test]
    fn test_column_map_partial_resolution() {
        let h = headers(&["Promotion ID", "Qty Sold"]);
        let cols = ColumnMap::resolve(&h);
        assert_eq!(cols.promotion_id.as_deref(), Some("Promotion ID"));
        assert_eq!(cols.qty_sold.as_deref(), Some("Qty Sold"));
        assert!(cols.tx_date.is_none());
        assert!(cols.member_code.is_none());
    }
}
