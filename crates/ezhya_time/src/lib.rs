//! Julian Date ↔ civil calendar conversions.
//!
//! This crate provides:
//! - `from_gregorian` / `to_gregorian`, a faithful inverse pair
//! - validated `CalendarDate` and `CalendarDateTime` values
//! - `DD-MM-YYYY` parsing for user-entered dates

pub mod calendar;
pub mod error;
pub mod julian;

pub use calendar::{CalendarDate, CalendarDateTime};
pub use error::TimeError;
pub use julian::{
    J2000_JD, SECONDS_PER_DAY, calendar_to_jd, from_gregorian, from_gregorian_time,
    jd_to_calendar, to_gregorian,
};
