//! Display formatting for the summary tables and cards.

/// Formats a count with thousands separators (commas)
///
/// # Examples
/// ```
/// use engine::shared::format::format_number;
/// assert_eq!(format_number(1234567), "1,234,567");
/// assert_eq!(format_number(42), "42");
/// assert_eq!(format_number(0), "0");
/// ```
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// Formats a monetary amount: dollar sign, thousands separators, two
/// decimal places. Negative amounts keep the sign after the dollar sign,
/// e.g. `$-1,250.00`.
pub fn format_amount(v: f64) -> String {
    let negative = v < 0.0;
    let abs = if v.is_finite() { v.abs() } else { 0.0 };
    let whole = abs.trunc() as u64;
    let cents = ((abs - abs.trunc()) * 100.0).round() as u64;
    // 0.999 rounds up into the next whole unit
    let (whole, cents) = if cents >= 100 {
        (whole + 1, 0)
    } else {
        (whole, cents)
    };
    let sign = if negative { "-" } else { "" };
    format!("${}{}.{:02}", sign, format_number(whole as usize), cents)
}

/// One-decimal percent, as shown in the uplift and discount columns.
pub fn format_percent(v: f64) -> String {
    format!("{:.1}%", v)
}

/// Quantity rendering: whole numbers without a fraction, otherwise rounded
/// to the nearest unit (baseline-scaled quantities are fractional).
pub fn format_qty(v: f64) -> String {
    format_number(v.round().max(0.0) as usize)
}

/// Signed quantity for the extra-qty column; negatives keep their sign.
pub fn format_signed_qty(v: f64) -> String {
    if v < 0.0 {
        format!("-{}", format_number(v.abs().round() as usize))
    } else {
        format_number(v.round() as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(42), "42");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(1234567), "1,234,567");
        assert_eq!(format_number(1234567890), "1,234,567,890");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(0.0), "$0.00");
        assert_eq!(format_amount(1234.5), "$1,234.50");
        assert_eq!(format_amount(-200.0), "$-200.00");
        assert_eq!(format_amount(999.999), "$1,000.00");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(40.0), "40.0%");
        assert_eq!(format_percent(12.345), "12.3%");
        assert_eq!(format_percent(-5.0), "-5.0%");
    }

    #[test]
    fn test_format_signed_qty() {
        assert_eq!(format_signed_qty(1500.2), "1,500");
        assert_eq!(format_signed_qty(-42.7), "-43");
    }
}
