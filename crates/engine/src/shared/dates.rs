//! Flexible transaction-date parsing.
//!
//! Exports arrive with anything from ISO dates to "12/25/2023 10:30:00".
//! Parsing is a fixed fallback chain; the first success wins.

use chrono::{Datelike, NaiveDate};

/// Parses below or at this year are treated as epoch-fallback garbage.
const MIN_YEAR: i32 = 1900;

/// Parses an arbitrary date string, or `None` when nothing fits.
///
/// Order:
/// 1. ISO / RFC 3339 style parsing, accepted only when the year is after
///    1900 (rejects epoch-fallback parses).
/// 2. Token split on whitespace/slash/dash/colon, first three tokens read
///    as month/day/year.
/// 3. Same tokens read as day/month/year.
///
/// Month-first is deliberately tried before day-first for ambiguous inputs
/// like "01/02/2024"; this matches the historical behavior of the review
/// tool, so day-first locales can misparse silently. Keep the order.
pub fn parse_flexible(input: &str) -> Option<NaiveDate> {
    let s = input.trim();
    if s.is_empty() {
        return None;
    }

    if let Some(date) = parse_standard(s) {
        if date.year() > MIN_YEAR {
            return Some(date);
        }
    }

    let tokens: Vec<&str> = s
        .split(|c: char| c.is_whitespace() || c == '/' || c == '-' || c == ':')
        .collect();
    if tokens.len() >= 3 {
        // MM/DD/YYYY
        if let Some(date) = from_tokens(tokens[2], tokens[0], tokens[1]) {
            return Some(date);
        }
        // DD/MM/YYYY
        if let Some(date) = from_tokens(tokens[2], tokens[1], tokens[0]) {
            return Some(date);
        }
    }

    None
}

/// ISO-family formats, with or without a time part.
fn parse_standard(s: &str) -> Option<NaiveDate> {
    const FORMATS: &[&str] = &[
        "%Y-%m-%d",
        "%Y/%m/%d",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M:%S",
    ];
    for fmt in FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
            return Some(date);
        }
    }
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    None
}

fn from_tokens(year: &str, month: &str, day: &str) -> Option<NaiveDate> {
    let year: i32 = year.trim().parse().ok()?;
    let month: u32 = month.trim().parse().ok()?;
    let day: u32 = day.trim().parse().ok()?;
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) || year <= MIN_YEAR {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Canonical "YYYY-MM-DD" rendering; round-trips through `parse_flexible`.
pub fn format_iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_iso_round_trip() {
        let parsed = parse_flexible("2024-03-15").unwrap();
        assert_eq!(format_iso(parsed), "2024-03-15");
    }

    #[test]
    fn test_iso_with_time() {
        assert_eq!(parse_flexible("2024-03-15 14:02:26"), Some(d(2024, 3, 15)));
        assert_eq!(
            parse_flexible("2024-03-15T14:02:26.123Z"),
            Some(d(2024, 3, 15))
        );
    }

    #[test]
    fn test_month_first_wins_ambiguous() {
        // Both readings are valid; month/day/year is tried first.
        assert_eq!(parse_flexible("01/02/2024"), Some(d(2024, 1, 2)));
    }

    #[test]
    fn test_day_first_fallback() {
        // 25 is not a valid month, so the day-first reading applies.
        assert_eq!(parse_flexible("25/12/2023"), Some(d(2023, 12, 25)));
    }

    #[test]
    fn test_time_suffix_tokens_ignored() {
        assert_eq!(
            parse_flexible("12/25/2023 10:30:00"),
            Some(d(2023, 12, 25))
        );
    }

    #[test]
    fn test_dash_separated_mdy() {
        assert_eq!(parse_flexible("3-15-2024"), Some(d(2024, 3, 15)));
    }

    #[test]
    fn test_rejects_old_years() {
        assert_eq!(parse_flexible("1899-12-31"), None);
        assert_eq!(parse_flexible("01/02/1900"), None);
    }

    #[test]
    fn test_empty_and_garbage() {
        assert_eq!(parse_flexible(""), None);
        assert_eq!(parse_flexible("   "), None);
        assert_eq!(parse_flexible("not a date"), None);
        assert_eq!(parse_flexible("13/13/2024"), None);
    }

    #[test]
    fn test_invalid_calendar_day_falls_through() {
        // Feb 31 is rejected by the month-first reading; the day-first
        // reading (month 31) fails the range check. No date.
        assert_eq!(parse_flexible("02/31/2024"), None);
    }
}
