//! Raw row -> `TransactionRecord` resolution.

use crate::shared::columns::ColumnMap;
use crate::shared::dates;
use contracts::domain::TransactionRecord;
use contracts::shared::{CellValue, RawRow};

/// Builds a typed record from a decoded row using the batch's resolved
/// column map. Missing columns (or cells) resolve to empty text / zero,
/// so a schema-resolution miss degrades the data instead of aborting.
pub fn resolve_record(row: &RawRow, cols: &ColumnMap) -> TransactionRecord {
    let tx_date_text = text_of(row, &cols.tx_date);
    TransactionRecord {
        promotion_id: text_of(row, &cols.promotion_id),
        promotion_desc: text_of(row, &cols.promotion_desc),
        store_code: text_of(row, &cols.store_code),
        member_code: text_of(row, &cols.member_code),
        sku: text_of(row, &cols.sku),
        qty_sold: number_of(row, &cols.qty_sold),
        amt_sold: number_of(row, &cols.amt_sold),
        discount: number_of(row, &cols.discount),
        original_price: number_of(row, &cols.original_price),
        tx_date: dates::parse_flexible(&tx_date_text),
    }
}

fn text_of(row: &RawRow, header: &Option<String>) -> String {
    header
        .as_ref()
        .and_then(|h| row.get(h))
        .map(CellValue::text)
        .unwrap_or_default()
}

fn number_of(row: &RawRow, header: &Option<String>) -> f64 {
    match header.as_ref().and_then(|h| row.get(h)) {
        Some(CellValue::Number(n)) => *n,
        Some(cell) => parse_amount(&cell.text()),
        None => 0.0,
    }
}

/// Parses a numeric cell. Some exports use a decimal comma; normalize it
/// before parsing. Unparseable values count as zero.
pub fn parse_amount(s: &str) -> f64 {
    s.trim().replace(',', ".").parse::<f64>().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn row(cells: &[(&str, &str)]) -> RawRow {
        cells
            .iter()
            .map(|(h, v)| {
                let cell = if v.is_empty() {
                    CellValue::Empty
                } else {
                    CellValue::Text(v.to_string())
                };
                (h.to_string(), cell)
            })
            .collect()
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("5309,00"), 5309.0);
        assert_eq!(parse_amount("3563.00"), 3563.0);
        assert_eq!(parse_amount(" 12.5 "), 12.5);
        assert_eq!(parse_amount("n/a"), 0.0);
        assert_eq!(parse_amount(""), 0.0);
    }

    #[test]
    fn test_resolve_full_row() {
        let headers: Vec<String> = [
            "Promotion ID",
            "Description",
            "Store Code",
            "VIP Code",
            "PLU Style",
            "Qty Sold",
            "Amt Sold",
            "Prom Less",
            "Ttl Org Price",
            "Tx Date",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();
        let cols = ColumnMap::resolve(&headers);

        let r = row(&[
            ("Promotion ID", "P1"),
            ("Description", "Spring sale"),
            ("Store Code", "S01"),
            ("VIP Code", "M1"),
            ("PLU Style", "SKU-9"),
            ("Qty Sold", "3"),
            ("Amt Sold", "30"),
            ("Prom Less", "5"),
            ("Ttl Org Price", "35"),
            ("Tx Date", "2024-03-15"),
        ]);
        let record = resolve_record(&r, &cols);

        assert_eq!(record.promotion_id, "P1");
        assert_eq!(record.promotion_desc, "Spring sale");
        assert_eq!(record.member_code, "M1");
        assert_eq!(record.sku, "SKU-9");
        assert_eq!(record.qty_sold, 3.0);
        assert_eq!(record.amt_sold, 30.0);
        assert_eq!(record.discount, 5.0);
        assert_eq!(record.original_price, 35.0);
        assert_eq!(
            record.tx_date,
            NaiveDate::from_ymd_opt(2024, 3, 15)
        );
    }

    #[test]
    fn test_missing_columns_default() {
        let headers = vec!["Promotion ID".to_string()];
        let cols = ColumnMap::resolve(&headers);
        let record = resolve_record(&row(&[("Promotion ID", "P1")]), &cols);

        assert_eq!(record.promotion_id, "P1");
        assert_eq!(record.promotion_desc, "");
        assert_eq!(record.member_code, "");
        assert_eq!(record.qty_sold, 0.0);
        assert_eq!(record.amt_sold, 0.0);
        assert!(record.tx_date.is_none());
    }
}
