//! Executor for the promotion-review export: the finalized summary list as
//! a flat nine-column table, written through the CSV writer.

use crate::domain::AnalysisSession;
use crate::shared::config::{self, Config};
use contracts::domain::PromotionSummary;
use contracts::usecases::common::{UseCaseError, UseCaseResult};
use contracts::usecases::u104_export_summary::{ExportRequest, ExportResponse};
use std::path::PathBuf;

/// Column order is part of the export contract; downstream review sheets
/// key on these names.
const EXPORT_HEADERS: [&str; 9] = [
    "Promotion ID",
    "Description",
    "New Members",
    "Existing Members",
    "Total Customers",
    "Qty Sold",
    "Revenue",
    "Discount",
    "Discount %",
];

pub fn run(
    session: &AnalysisSession,
    request: &ExportRequest,
    config: &Config,
) -> UseCaseResult<ExportResponse> {
    let path = output_path(request, config);

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| UseCaseError::internal(format!("Cannot create export dir: {}", e)))?;
    }

    let mut writer = csv::Writer::from_path(&path)
        .map_err(|e| UseCaseError::internal(format!("Cannot open export file: {}", e)))?;

    writer
        .write_record(EXPORT_HEADERS)
        .and_then(|_| {
            for promo in &session.promotions {
                writer.write_record(export_row(promo))?;
            }
            writer.flush().map_err(csv::Error::from)
        })
        .map_err(|e| UseCaseError::internal(format!("Export failed: {}", e)))?;

    tracing::info!(
        "Exported {} promotions to {}",
        session.promotions.len(),
        path.display()
    );

    Ok(ExportResponse {
        path: path.display().to_string(),
        row_count: session.promotions.len(),
    })
}

fn output_path(request: &ExportRequest, config: &Config) -> PathBuf {
    match &request.output_path {
        Some(explicit) => PathBuf::from(explicit),
        None => {
            let file_name = format!(
                "promotion_review_{}.csv",
                chrono::Local::now().format("%Y-%m-%d")
            );
            config::get_export_dir(config).join(file_name)
        }
    }
}

/// One data row. Counts and amounts stay raw numbers; only the discount
/// percent is pre-formatted, to two decimal places, as text.
fn export_row(promo: &PromotionSummary) -> Vec<String> {
    vec![
        promo.promotion_id.clone(),
        promo.description.clone(),
        promo.new_member_count.to_string(),
        promo.existing_member_count.to_string(),
        promo.total_customers.to_string(),
        promo.qty_sold.to_string(),
        promo.revenue.to_string(),
        promo.discount.to_string(),
        format!("{:.2}", promo.discount_percent),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn promo() -> PromotionSummary {
        let mut promo = PromotionSummary::new("P1".into(), "Spring sale".into());
        promo.new_member_events = 1;
        promo.existing_members.insert("M1".into());
        promo.qty_sold = 8.0;
        promo.revenue = 80.0;
        promo.discount = 10.0;
        promo.original_price = 90.0;
        promo.finalize();
        promo
    }

    #[test]
    fn test_export_row_order_and_formatting() {
        let row = export_row(&promo());
        assert_eq!(
            row,
            vec![
                "P1",
                "Spring sale",
                "1",
                "1",
                "2",
                "8",
                "80",
                "10",
                "11.11",
            ]
        );
    }

    #[test]
    fn test_header_contract() {
        assert_eq!(EXPORT_HEADERS[0], "Promotion ID");
        assert_eq!(EXPORT_HEADERS[8], "Discount %");
        assert_eq!(EXPORT_HEADERS.len(), 9);
    }
}
