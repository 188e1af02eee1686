//! Executor for baseline loading: decode the non-promotion export and
//! suggest a date window from its data.

use crate::shared::columns::{self, Field};
use crate::shared::data::spreadsheet::{self, DecodeError};
use crate::shared::dates;
use contracts::shared::{DateWindow, RowBatch};
use contracts::usecases::common::{UseCaseError, UseCaseResult};
use contracts::usecases::u102_load_baseline::{LoadBaselineRequest, LoadBaselineResponse};
use std::path::Path;

/// Decodes the baseline file. Unlike the primary dataset, a baseline with
/// zero rows is an explicit error — there is nothing to scale against.
/// Returns the batch (held for the uplift calculation) and the load result.
pub async fn run(
    request: &LoadBaselineRequest,
) -> UseCaseResult<(RowBatch, LoadBaselineResponse)> {
    let batch = spreadsheet::read_batch(Path::new(&request.file_path))
        .await
        .map_err(|e| {
            tracing::error!("Error processing baseline file {}: {}", request.file_path, e);
            UseCaseError::decode("Error processing baseline file")
                .with_details(e.to_string())
        })?;
    load_from_batch(batch)
}

/// Validation and window suggestion over an already-decoded batch.
pub fn load_from_batch(batch: RowBatch) -> UseCaseResult<(RowBatch, LoadBaselineResponse)> {
    if batch.is_empty() {
        return Err(UseCaseError::decode(DecodeError::Empty.to_string()));
    }

    tracing::info!("Baseline data loaded: {} records", batch.len());
    if let Some(first) = batch.rows.first() {
        if let Ok(sample) = serde_json::to_string(first) {
            tracing::debug!("Sample record: {}", sample);
        }
    }

    let date_column = columns::resolve(&batch.headers, Field::TxDate).map(str::to_string);

    let response = match &date_column {
        Some(col) => {
            let mut min = None;
            let mut max = None;
            for row in &batch.rows {
                let text = row.get(col).map(|c| c.text()).unwrap_or_default();
                if let Some(date) = dates::parse_flexible(&text) {
                    min = Some(min.map_or(date, |d: chrono::NaiveDate| d.min(date)));
                    max = Some(max.map_or(date, |d: chrono::NaiveDate| d.max(date)));
                }
            }

            let suggested_window = match (min, max) {
                (Some(start), Some(end)) => Some(DateWindow::new(start, end)),
                _ => None,
            };
            let suggested_days = suggested_window.map(|w| w.days());
            if let (Some(w), Some(days)) = (suggested_window, suggested_days) {
                tracing::info!(
                    "Baseline period: {} days ({} - {})",
                    days,
                    dates::format_iso(w.start),
                    dates::format_iso(w.end)
                );
            }

            LoadBaselineResponse {
                record_count: batch.len(),
                date_column: date_column.clone(),
                suggested_window,
                suggested_days,
                available_headers: None,
            }
        }
        None => {
            // Not fatal: surface what the file actually contains so the
            // user can pick dates manually.
            tracing::warn!(
                "Date column not found. Available columns: {}",
                batch.headers.join(", ")
            );
            LoadBaselineResponse {
                record_count: batch.len(),
                date_column: None,
                suggested_window: None,
                suggested_days: None,
                available_headers: Some(batch.headers.clone()),
            }
        }
    };

    Ok((batch, response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::decode_csv;
    use chrono::NaiveDate;

    fn load(data: &str) -> UseCaseResult<(RowBatch, LoadBaselineResponse)> {
        load_from_batch(decode_csv(data.as_bytes()).unwrap())
    }

    #[test]
    fn test_empty_baseline_rejected() {
        let err = load("Tx Date,Amt Sold\n").unwrap_err();
        assert_eq!(err.code, "DECODE_ERROR");
    }

    #[test]
    fn test_window_suggested_from_data() {
        let data = "\
Tx Date,PLU Style,Amt Sold
2024-02-10,A,10
2024-02-01,A,10
junk,A,10
2024-02-05,B,10
";
        let (_, response) = load(data).unwrap();

        assert_eq!(response.record_count, 4);
        assert_eq!(response.date_column.as_deref(), Some("Tx Date"));
        let window = response.suggested_window.unwrap();
        assert_eq!(window.start, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        assert_eq!(window.end, NaiveDate::from_ymd_opt(2024, 2, 10).unwrap());
        assert_eq!(response.suggested_days, Some(10));
    }

    #[test]
    fn test_missing_date_column_lists_headers() {
        let data = "Random Column,Amt Sold\nx,10\n";
        let (_, response) = load(data).unwrap();

        assert!(response.date_column.is_none());
        assert!(response.suggested_window.is_none());
        assert_eq!(
            response.available_headers,
            Some(vec!["Random Column".to_string(), "Amt Sold".to_string()])
        );
    }

    #[test]
    fn test_no_parseable_dates() {
        let data = "Tx Date,Amt Sold\nnope,10\n";
        let (_, response) = load(data).unwrap();

        assert_eq!(response.date_column.as_deref(), Some("Tx Date"));
        assert!(response.suggested_window.is_none());
        assert!(response.available_headers.is_none());
    }
}
