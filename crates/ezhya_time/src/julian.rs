//! Julian Date ↔ proleptic Gregorian calendar conversions.
//!
//! Algorithms from Meeus, "Astronomical Algorithms", Ch. 7, applied with the
//! Gregorian correction on every date (no switch to the Julian calendar
//! before 1582).

use crate::calendar::{CalendarDate, CalendarDateTime};
use crate::error::TimeError;

/// Julian Date of J2000.0 (2000-01-01 12:00).
pub const J2000_JD: f64 = 2_451_545.0;

/// Seconds in one civil day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

const MICROS_PER_DAY: u64 = 86_400_000_000;

/// Julian Date for a calendar date whose day carries the time of day as a
/// fraction (`15.5` is noon on the 15th).
///
/// No validation is performed; see [`from_gregorian`] for the checked form.
pub fn calendar_to_jd(year: i32, month: u32, day: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year as f64 - 1.0, month as f64 + 12.0)
    } else {
        (year as f64, month as f64)
    };
    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day + b - 1524.5
}

/// Calendar `(year, month, day_fraction)` for a Julian Date.
///
/// Inverse of [`calendar_to_jd`]. Valid for `jd >= 0`.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let shifted = jd + 0.5;
    let z = shifted.floor();
    let f = shifted - z;

    let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
    let a = z + 1.0 + alpha - (alpha / 4.0).floor();
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day = b - d - (30.6001 * e).floor() + f;
    let month = (if e < 14.0 { e - 1.0 } else { e - 13.0 }) as u32;
    let year = (if month > 2 { c - 4716.0 } else { c - 4715.0 }) as i32;
    (year, month, day)
}

/// Julian Date at 00:00 of a civil date.
pub fn from_gregorian(year: i32, month: u32, day: u32) -> Result<f64, TimeError> {
    from_gregorian_time(year, month, day, 0, 0, 0)
}

/// Julian Date of a civil date and time of day.
pub fn from_gregorian_time(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
) -> Result<f64, TimeError> {
    let date = CalendarDate::new(year, month, day)?;
    let dt = CalendarDateTime::new(date, hour, minute, second, 0)?;
    dt.to_jd()
}

/// Civil date and time of a Julian Date.
///
/// The fractional day is rounded to the nearest microsecond before it is
/// split into hours, minutes and seconds; a value that rounds up to 24:00
/// carries into the following day.
pub fn to_gregorian(jd: f64) -> Result<CalendarDateTime, TimeError> {
    if !jd.is_finite() || jd < 0.0 {
        return Err(TimeError::OutOfRange(jd));
    }

    let shifted = jd + 0.5;
    let mut day_number = shifted.floor();
    let mut micros = ((shifted - day_number) * MICROS_PER_DAY as f64).round() as u64;
    if micros >= MICROS_PER_DAY {
        day_number += 1.0;
        micros -= MICROS_PER_DAY;
    }

    // Midnight of `day_number` has no fractional day left over.
    let (year, month, day_frac) = jd_to_calendar(day_number - 0.5);
    let date = CalendarDate::new(year, month, day_frac.round() as u32)?;

    let second_of_day = (micros / 1_000_000) as u32;
    let microsecond = (micros % 1_000_000) as u32;
    CalendarDateTime::new(
        date,
        second_of_day / 3600,
        (second_of_day % 3600) / 60,
        second_of_day % 60,
        microsecond,
    )
}
