//! Executor for the promotion-analysis UseCase: one synchronous pass over a
//! decoded batch producing the finalized `AnalysisSession`.

use crate::domain::{resolve_record, AnalysisSession};
use crate::shared::columns::ColumnMap;
use crate::shared::data::spreadsheet;
use contracts::domain::{PromotionSummary, StoreSummary};
use contracts::shared::RowBatch;
use contracts::usecases::common::{UseCaseError, UseCaseResult};
use contracts::usecases::u101_analyze_promotions::AnalyzeRequest;
use std::collections::HashMap;
use std::path::Path;

/// Decodes the selected file and aggregates it. Decode failures are caught
/// here and converted to a status error; they never reach aggregation.
pub async fn run(request: &AnalyzeRequest) -> UseCaseResult<AnalysisSession> {
    let batch = spreadsheet::read_batch(Path::new(&request.file_path))
        .await
        .map_err(|e| {
            tracing::error!("Error processing file {}: {}", request.file_path, e);
            UseCaseError::decode("Error processing file. Please check the format.")
                .with_details(e.to_string())
        })?;

    let session = aggregate(&batch);
    tracing::info!(
        "Analysis complete: {} promotions, {} stores, {} rows",
        session.promotions.len(),
        session.stores.len(),
        session.transaction_count
    );
    Ok(session)
}

/// Single-pass aggregation.
///
/// Rows without a promotion ID are skipped entirely. An empty batch yields
/// an empty session — no promotions found is not an error for the primary
/// dataset. The returned session replaces any previously held one.
pub fn aggregate(batch: &RowBatch) -> AnalysisSession {
    let cols = ColumnMap::resolve(&batch.headers);

    let mut session = AnalysisSession::empty();
    session.transaction_count = batch.rows.len();

    let mut promo_index: HashMap<String, usize> = HashMap::new();
    let mut store_index: HashMap<(String, String), usize> = HashMap::new();
    let mut min_date = None;
    let mut max_date = None;

    for row in &batch.rows {
        let record = resolve_record(row, &cols);

        // The promotion period spans all parseable dates in the dataset,
        // including rows that carry no promotion ID.
        if let Some(date) = record.tx_date {
            min_date = Some(min_date.map_or(date, |d: chrono::NaiveDate| d.min(date)));
            max_date = Some(max_date.map_or(date, |d: chrono::NaiveDate| d.max(date)));
        }

        if record.promotion_id.is_empty() {
            continue;
        }

        if !record.sku.is_empty() {
            session.promotion_skus.insert(record.sku.clone());
            session
                .sku_index
                .entry(record.promotion_id.clone())
                .or_default()
                .insert(record.sku.clone());
        }

        let promo_pos = *promo_index
            .entry(record.promotion_id.clone())
            .or_insert_with(|| {
                session.promotions.push(PromotionSummary::new(
                    record.promotion_id.clone(),
                    record.promotion_desc.clone(),
                ));
                session.promotions.len() - 1
            });
        let promo = &mut session.promotions[promo_pos];

        // Blank member code = unregistered customer; each such row is a
        // distinct new-member event. Non-blank codes deduplicate.
        if record.member_code.trim().is_empty() {
            promo.new_member_events += 1;
        } else {
            promo.existing_members.insert(record.member_code.clone());
        }

        promo.qty_sold += record.qty_sold;
        promo.revenue += record.amt_sold;
        promo.discount += record.discount;
        promo.original_price += record.original_price;

        let store_code = if record.store_code.is_empty() {
            "Unknown".to_string()
        } else {
            record.store_code.clone()
        };
        let store_key = (record.promotion_id.clone(), store_code.clone());
        let store_pos = *store_index.entry(store_key).or_insert_with(|| {
            session.stores.push(StoreSummary {
                promotion_id: record.promotion_id.clone(),
                store_code,
                ..Default::default()
            });
            session.stores.len() - 1
        });
        let store = &mut session.stores[store_pos];
        store.usage += 1;
        store.revenue += record.amt_sold;
        store.qty_sold += record.qty_sold;
    }

    // Finalization: derived fields, then revenue-descending order. The sort
    // is stable, so ties keep their encounter order.
    for promo in &mut session.promotions {
        promo.finalize();
    }
    session.promotions.sort_by(|a, b| {
        b.revenue
            .partial_cmp(&a.revenue)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    if let (Some(min), Some(max)) = (min_date, max_date) {
        session.promo_days = (max - min).num_days() + 1;
    }

    session
}
