//! Executor for the baseline uplift calculation.
//!
//! Pure read of the analysis session plus the baseline batch: nothing here
//! mutates the summaries or the SKU index, so the calculation can be re-run
//! with a different window without re-uploading anything.

use crate::domain::AnalysisSession;
use crate::shared::columns::ColumnMap;
use crate::shared::dates;
use chrono::NaiveDate;
use contracts::domain::{BaselineExtraSales, ExtraSalesTotals};
use contracts::shared::{DateWindow, RowBatch};
use contracts::usecases::common::{UseCaseError, UseCaseResult};
use contracts::usecases::u103_calculate_extra_sales::{ExtraSalesRequest, ExtraSalesResponse};
use std::collections::HashSet;

/// Baseline row reduced to the fields the calculation reads. Resolved once
/// so the per-promotion passes don't re-parse dates.
struct BaselineRow {
    date: Option<NaiveDate>,
    sku: String,
    amt_sold: f64,
    qty_sold: f64,
}

pub fn run(
    session: &AnalysisSession,
    baseline: &RowBatch,
    request: &ExtraSalesRequest,
) -> UseCaseResult<ExtraSalesResponse> {
    if baseline.is_empty() {
        return Err(UseCaseError::validation(
            "Please upload and process baseline data first",
        ));
    }

    let window = parse_window(request)?;
    let baseline_days = window.days();
    let promo_days = session.promo_days;

    let cols = ColumnMap::resolve(&baseline.headers);
    let rows: Vec<BaselineRow> = baseline
        .rows
        .iter()
        .map(|row| {
            let record = crate::domain::resolve_record(row, &cols);
            BaselineRow {
                date: record.tx_date,
                sku: record.sku,
                amt_sold: record.amt_sold,
                qty_sold: record.qty_sold,
            }
        })
        .collect();

    // Aggregate total against the global promotion-SKU set.
    let (baseline_revenue, _) = window_sums(&rows, &window, &session.promotion_skus);
    let daily_baseline = safe_div(baseline_revenue, baseline_days as f64);
    let scaled_baseline = daily_baseline * promo_days as f64;
    let promo_revenue: f64 = session.promotions.iter().map(|p| p.revenue).sum();
    let extra_sales = promo_revenue - scaled_baseline;
    let uplift_percent = safe_ratio(extra_sales, scaled_baseline);

    tracing::info!(
        "Extra sales: baseline {} days, promotion {} days, daily baseline {:.2}",
        baseline_days,
        promo_days,
        daily_baseline
    );

    // Per promotion, against that promotion's own SKU subset.
    let empty_skus = HashSet::new();
    let mut by_promotion: Vec<BaselineExtraSales> = session
        .promotions
        .iter()
        .map(|promo| {
            let skus = session.skus_for(&promo.promotion_id).unwrap_or(&empty_skus);
            let (revenue, qty) = window_sums(&rows, &window, skus);

            let scaled_revenue = safe_div(revenue, baseline_days as f64) * promo_days as f64;
            let scaled_qty = safe_div(qty, baseline_days as f64) * promo_days as f64;
            let extra_sales = promo.revenue - scaled_revenue;
            let extra_qty = promo.qty_sold - scaled_qty;

            BaselineExtraSales {
                promotion_id: promo.promotion_id.clone(),
                description: promo.description.clone(),
                qty_sold: promo.qty_sold,
                revenue: promo.revenue,
                discount: promo.discount,
                baseline_qty: scaled_qty,
                baseline_revenue: scaled_revenue,
                extra_qty,
                extra_sales,
                uplift_percent: safe_ratio(extra_sales, scaled_revenue),
                roi_percent: safe_ratio(extra_sales, promo.discount),
            }
        })
        .collect();

    // Stable sort: ties keep promotion (revenue) order.
    by_promotion.sort_by(|a, b| {
        b.extra_sales
            .partial_cmp(&a.extra_sales)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    Ok(ExtraSalesResponse {
        totals: ExtraSalesTotals {
            promo_revenue,
            baseline_revenue,
            daily_baseline,
            scaled_baseline,
            extra_sales,
            uplift_percent,
            baseline_days,
            promo_days,
        },
        by_promotion,
    })
}

/// Both bounds must parse and the window must not be inverted; otherwise
/// the whole calculation is refused — no partial computation.
fn parse_window(request: &ExtraSalesRequest) -> UseCaseResult<DateWindow> {
    let start = dates::parse_flexible(&request.start_date);
    let end = dates::parse_flexible(&request.end_date);
    match (start, end) {
        (Some(start), Some(end)) if start <= end => Ok(DateWindow::new(start, end)),
        _ => Err(UseCaseError::validation(
            "Please select valid baseline start and end dates",
        )),
    }
}

/// Revenue and quantity of baseline rows whose date is inside the window
/// and whose SKU belongs to `skus`. An empty SKU set matches nothing.
fn window_sums(rows: &[BaselineRow], window: &DateWindow, skus: &HashSet<String>) -> (f64, f64) {
    let mut revenue = 0.0;
    let mut qty = 0.0;
    for row in rows {
        let in_window = row.date.map(|d| window.contains(d)).unwrap_or(false);
        if in_window && skus.contains(&row.sku) {
            revenue += row.amt_sold;
            qty += row.qty_sold;
        }
    }
    (revenue, qty)
}

fn safe_div(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}

/// numerator / denominator * 100, 0 when the denominator is 0 — uplift and
/// ROI never come out as NaN or infinity.
fn safe_ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator * 100.0
    } else {
        0.0
    }
}
