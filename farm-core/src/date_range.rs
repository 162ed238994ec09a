//! Inclusive date iteration used to lay out calendar grids.

use chrono::{NaiveDate, TimeDelta};

/// Yields each date from `start` through `end` inclusive.
///
/// Iteration ends early instead of overflowing when it reaches
/// [`NaiveDate::MAX`].
#[derive(Clone, Eq, PartialEq, Copy, Debug)]
pub struct DateRange {
    cursor: Option<NaiveDate>,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            cursor: Some(start),
            end,
        }
    }

    /// Range covering `days` consecutive dates beginning at `start`, or `None`
    /// when the last date falls outside chrono's supported range.
    pub fn starting_at(start: NaiveDate, days: u32) -> Option<Self> {
        let end = start.checked_add_signed(TimeDelta::days(i64::from(days) - 1))?;
        Some(Self::new(start, end))
    }
}

impl Iterator for DateRange {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        let current = self.cursor.filter(|date| *date <= self.end)?;
        self.cursor = current.succ_opt();
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::DateRange;
    use chrono::NaiveDate;

    #[test]
    fn test_date_range_iteration() {
        let start = NaiveDate::from_ymd_opt(2022, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2022, 1, 5).unwrap();
        let dates: Vec<NaiveDate> = DateRange::new(start, end).collect();
        assert_eq!(dates.len(), 5);
        assert_eq!(dates[0], start);
        assert_eq!(dates[4], end);
    }

    #[test]
    fn test_starting_at_crosses_month() {
        let start = NaiveDate::from_ymd_opt(2024, 12, 29).unwrap();
        let dates: Vec<NaiveDate> = DateRange::starting_at(start, 42).unwrap().collect();
        assert_eq!(dates.len(), 42);
        assert_eq!(dates[3], NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        assert_eq!(dates[41], NaiveDate::from_ymd_opt(2025, 2, 8).unwrap());
    }

    #[test]
    fn test_date_range_empty() {
        let start = NaiveDate::from_ymd_opt(2022, 3, 15).unwrap();
        let end = NaiveDate::from_ymd_opt(2022, 3, 14).unwrap();
        assert_eq!(DateRange::new(start, end).count(), 0);
        assert_eq!(DateRange::starting_at(start, 0).unwrap().count(), 0);
    }

    #[test]
    fn test_range_ending_at_max_date_stops() {
        let last = NaiveDate::MAX;
        let start = last.pred_opt().unwrap();
        let dates: Vec<NaiveDate> = DateRange::new(start, last).collect();
        assert_eq!(dates, vec![start, last]);
    }

    #[test]
    fn test_starting_at_past_max_date_is_none() {
        assert!(DateRange::starting_at(NaiveDate::MAX, 2).is_none());
        assert!(DateRange::starting_at(NaiveDate::MAX, 1).is_some());
    }
}
