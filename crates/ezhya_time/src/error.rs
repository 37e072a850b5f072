//! Error types for calendar and Julian Date conversions.

use thiserror::Error;

/// Errors from calendar validation, parsing, or Julian Date conversion.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Year/month/day do not name a real proleptic-Gregorian day.
    #[error("invalid calendar date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
    /// Hour/minute/second outside their civil ranges.
    #[error("invalid time of day {hour:02}:{minute:02}:{second:02}")]
    InvalidTime { hour: u32, minute: u32, second: u32 },
    /// Julian Date is negative or not finite, or the year precedes JD 0.
    #[error("Julian Date {0} is outside the supported range")]
    OutOfRange(f64),
    /// Text did not match the expected date layout.
    #[error("date parse error: {0}")]
    Parse(String),
}

impl From<chrono::ParseError> for TimeError {
    fn from(e: chrono::ParseError) -> Self {
        Self::Parse(e.to_string())
    }
}
