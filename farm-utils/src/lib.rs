//! Shared utility functions for smart farming crates.

/// Date utility functions
pub mod dates {
    use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};

    /// Full month names, indexed by 0-based month.
    pub const MONTH_NAMES: [&str; 12] = [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ];

    /// Short month names, indexed by 0-based month.
    pub const MONTH_ABBREVIATIONS: [&str; 12] = [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ];

    /// Weekday column headers starting on Sunday (weekday 0).
    pub const DAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_date(date: &NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }

    /// Parse a date string in "YYYY-MM-DD" format
    pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
        Ok(NaiveDate::parse_from_str(s, "%Y-%m-%d")?)
    }

    /// Format a date the way account tables show it, e.g. "September 10, 2025".
    pub fn format_long_date(date: &NaiveDate) -> String {
        date.format("%B %-d, %Y").to_string()
    }

    /// Name of a 0-based month, or "" when out of range.
    pub fn month_name(month0: u32) -> &'static str {
        MONTH_NAMES.get(month0 as usize).copied().unwrap_or("")
    }

    /// Normalize a month index that stepped one past either end of the year.
    ///
    /// -1 becomes December of the previous year and 12 becomes January of the next.
    pub fn wrap_month(month0: i32, year: i32) -> (u32, i32) {
        let wrapped_year = year + month0.div_euclid(12);
        (month0.rem_euclid(12) as u32, wrapped_year)
    }

    /// ISO-8601 timestamp with millisecond precision and a `Z` suffix.
    pub fn iso_timestamp(now: DateTime<Utc>) -> String {
        now.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// Format elapsed seconds as "m:ss".
    pub fn format_elapsed(seconds: u32) -> String {
        format!("{}:{:02}", seconds / 60, seconds % 60)
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use chrono::{NaiveDate, TimeZone};

        #[test]
        fn test_wrap_month() {
            assert_eq!(wrap_month(-1, 2025), (11, 2024));
            assert_eq!(wrap_month(12, 2025), (0, 2026));
            assert_eq!(wrap_month(5, 2025), (5, 2025));
        }

        #[test]
        fn test_format_and_parse() {
            let date = NaiveDate::from_ymd_opt(2025, 9, 10).unwrap();
            assert_eq!(format_date(&date), "2025-09-10");
            assert_eq!(parse_date("2025-09-10").unwrap(), date);
            assert_eq!(format_long_date(&date), "September 10, 2025");
        }

        #[test]
        fn test_iso_timestamp() {
            let now = Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();
            assert_eq!(iso_timestamp(now), "2025-01-02T03:04:05.000Z");
        }

        #[test]
        fn test_format_elapsed() {
            assert_eq!(format_elapsed(0), "0:00");
            assert_eq!(format_elapsed(65), "1:05");
            assert_eq!(format_elapsed(600), "10:00");
        }
    }
}
