/// Error types for the farm core library
use thiserror::Error;

/// Main error type for domain operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FarmError {
    /// Weekday outside 0 (Sunday) through 6 (Saturday)
    #[error("Invalid weekday: {0} (expected 0-6)")]
    InvalidWeekday(u8),

    /// Same weekday listed twice in a schedule
    #[error("Duplicate weekday: {0}")]
    DuplicateWeekday(u8),

    /// Month index outside 0-11
    #[error("Invalid month index: {0} (expected 0-11)")]
    InvalidMonth(u32),

    /// Year whose calendar grid falls outside the supported date range
    #[error("Year out of range: {0}")]
    YearOutOfRange(i32),

    /// Time of day that does not parse as HH:MM
    #[error("Invalid time of day: {0}")]
    InvalidTime(String),

    /// Schedule title left blank
    #[error("Schedule title must not be empty")]
    EmptyTitle,

    /// Irrigation duration of zero minutes
    #[error("Invalid duration: {0} minutes")]
    InvalidDuration(u32),

    /// No area with this id
    #[error("Area not found: {0}")]
    UnknownArea(String),

    /// No schedule with this id
    #[error("Schedule not found: {0}")]
    UnknownSchedule(String),

    /// Unrecognized enum label in stored data
    #[error("Unrecognized value for {field}: {value}")]
    UnknownLabel { field: &'static str, value: String },
}

/// Type alias for Results using FarmError
pub type Result<T> = std::result::Result<T, FarmError>;
