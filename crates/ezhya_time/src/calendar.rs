//! Civil calendar dates and date-times.
//!
//! `CalendarDate` only exists in validated form: every constructor checks
//! the day against the proleptic Gregorian calendar.

use std::fmt::{Display, Formatter};

use chrono::{Datelike, NaiveDate};

use crate::error::TimeError;
use crate::julian::{SECONDS_PER_DAY, calendar_to_jd};

const DMY_FORMAT: &str = "%d-%m-%Y";

/// `<1-2 digits>-<1-2 digits>-<4 digits>`, ASCII only.
fn is_dmy_shape(text: &str) -> bool {
    let fields: Vec<&str> = text.split('-').collect();
    let digits = |s: &str, min: usize, max: usize| {
        (min..=max).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_digit())
    };
    matches!(
        fields.as_slice(),
        [day, month, year] if digits(day, 1, 2) && digits(month, 1, 2) && digits(year, 4, 4)
    )
}

/// A civil proleptic-Gregorian date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarDate {
    year: i32,
    month: u32,
    day: u32,
}

impl CalendarDate {
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, TimeError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self::from)
            .ok_or(TimeError::InvalidDate { year, month, day })
    }

    /// Parse `DD-MM-YYYY` text, ignoring surrounding whitespace.
    ///
    /// The year must be exactly four digits; signs and inner whitespace are
    /// rejected before the calendar check.
    pub fn parse_dmy(text: &str) -> Result<Self, TimeError> {
        let text = text.trim();
        if !is_dmy_shape(text) {
            return Err(TimeError::Parse(format!("expected DD-MM-YYYY, got {text:?}")));
        }
        let date = NaiveDate::parse_from_str(text, DMY_FORMAT)?;
        Ok(Self::from(date))
    }

    /// Today's date on the local wall clock.
    pub fn today_local() -> Self {
        Self::from(chrono::Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// Julian Date at 00:00 of this date.
    pub fn to_jd(&self) -> Result<f64, TimeError> {
        let jd = calendar_to_jd(self.year, self.month, self.day as f64);
        if jd < 0.0 {
            return Err(TimeError::OutOfRange(jd));
        }
        Ok(jd)
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }
}

impl Display for CalendarDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}-{:02}-{:04}", self.day, self.month, self.year)
    }
}

/// A civil date with time of day to microsecond resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarDateTime {
    date: CalendarDate,
    hour: u32,
    minute: u32,
    second: u32,
    microsecond: u32,
}

impl CalendarDateTime {
    pub fn new(
        date: CalendarDate,
        hour: u32,
        minute: u32,
        second: u32,
        microsecond: u32,
    ) -> Result<Self, TimeError> {
        if hour > 23 || minute > 59 || second > 59 || microsecond > 999_999 {
            return Err(TimeError::InvalidTime {
                hour,
                minute,
                second,
            });
        }
        Ok(Self {
            date,
            hour,
            minute,
            second,
            microsecond,
        })
    }

    pub fn date(&self) -> CalendarDate {
        self.date
    }

    pub fn year(&self) -> i32 {
        self.date.year
    }

    pub fn month(&self) -> u32 {
        self.date.month
    }

    pub fn day(&self) -> u32 {
        self.date.day
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    pub fn second(&self) -> u32 {
        self.second
    }

    /// Julian Date of this instant.
    pub fn to_jd(&self) -> Result<f64, TimeError> {
        let seconds = self.hour as f64 * 3600.0
            + self.minute as f64 * 60.0
            + self.second as f64
            + self.microsecond as f64 / 1e6;
        let day_frac = self.date.day as f64 + seconds / SECONDS_PER_DAY;
        let jd = calendar_to_jd(self.date.year, self.date.month, day_frac);
        if jd < 0.0 {
            return Err(TimeError::OutOfRange(jd));
        }
        Ok(jd)
    }
}

/// `DD-MM-YYYY HH:MM:SS`; microseconds are truncated.
impl Display for CalendarDateTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {:02}:{:02}:{:02}",
            self.date, self.hour, self.minute, self.second
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_dmy_accepts_padded_date() {
        let d = CalendarDate::parse_dmy("01-01-2024").unwrap();
        assert_eq!((d.year(), d.month(), d.day()), (2024, 1, 1));
    }

    #[test]
    fn parse_dmy_strips_newline() {
        let d = CalendarDate::parse_dmy("15-06-2024\n").unwrap();
        assert_eq!((d.year(), d.month(), d.day()), (2024, 6, 15));
    }

    #[test]
    fn parse_dmy_rejects_iso_layout() {
        assert!(matches!(
            CalendarDate::parse_dmy("2024-01-01"),
            Err(TimeError::Parse(_))
        ));
    }

    #[test]
    fn parse_dmy_rejects_slashes_and_impossible_days() {
        assert!(CalendarDate::parse_dmy("31/02/2024").is_err());
        assert!(CalendarDate::parse_dmy("31-02-2024").is_err());
        assert!(CalendarDate::parse_dmy("").is_err());
    }

    #[test]
    fn parse_dmy_requires_four_digit_year() {
        for text in ["01-06-24", "01-01-+2024", "01-01- 2024", "01-01-20245", "1 -01-2024"] {
            assert!(
                matches!(CalendarDate::parse_dmy(text), Err(TimeError::Parse(_))),
                "accepted {text:?}"
            );
        }
    }

    #[test]
    fn parse_dmy_accepts_unpadded_day_and_month() {
        let d = CalendarDate::parse_dmy("1-6-2024").unwrap();
        assert_eq!((d.year(), d.month(), d.day()), (2024, 6, 1));
    }

    #[test]
    fn new_validates_day() {
        assert!(CalendarDate::new(2024, 2, 29).is_ok());
        assert_eq!(
            CalendarDate::new(2023, 2, 29),
            Err(TimeError::InvalidDate {
                year: 2023,
                month: 2,
                day: 29
            })
        );
        assert!(CalendarDate::new(2024, 13, 1).is_err());
    }

    #[test]
    fn new_validates_time_of_day() {
        let d = CalendarDate::new(2024, 1, 1).unwrap();
        assert!(CalendarDateTime::new(d, 24, 0, 0, 0).is_err());
        assert!(CalendarDateTime::new(d, 23, 60, 0, 0).is_err());
        assert!(CalendarDateTime::new(d, 23, 59, 59, 999_999).is_ok());
    }

    #[test]
    fn display_day_first() {
        let d = CalendarDate::new(2024, 3, 7).unwrap();
        assert_eq!(d.to_string(), "07-03-2024");
        let dt = CalendarDateTime::new(d, 4, 5, 6, 700_000).unwrap();
        assert_eq!(dt.to_string(), "07-03-2024 04:05:06");
        assert_eq!(dt.microsecond, 700_000);
    }

    #[test]
    fn date_time_jd_includes_time_of_day() {
        let d = CalendarDate::new(2000, 1, 1).unwrap();
        let noon = CalendarDateTime::new(d, 12, 0, 0, 0).unwrap();
        assert_eq!(noon.to_jd().unwrap(), crate::J2000_JD);
        assert_eq!(d.to_jd().unwrap(), crate::J2000_JD - 0.5);
    }
}
