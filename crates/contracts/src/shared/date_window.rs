use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An inclusive calendar-date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Inclusive day count: end - start in whole days + 1.
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_days_inclusive() {
        let w = DateWindow::new(d(2024, 1, 1), d(2024, 1, 10));
        assert_eq!(w.days(), 10);

        let single = DateWindow::new(d(2024, 1, 1), d(2024, 1, 1));
        assert_eq!(single.days(), 1);
    }

    #[test]
    fn test_contains_bounds() {
        let w = DateWindow::new(d(2024, 1, 5), d(2024, 1, 7));
        assert!(w.contains(d(2024, 1, 5)));
        assert!(w.contains(d(2024, 1, 7)));
        assert!(!w.contains(d(2024, 1, 4)));
        assert!(!w.contains(d(2024, 1, 8)));
    }
}
