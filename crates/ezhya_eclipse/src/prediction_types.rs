//! Types for upcoming-eclipse prediction.

use ezhya_time::{CalendarDate, CalendarDateTime};

/// How generated occurrences are compared with the observation date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DateFilter {
    /// Year, month and day are each compared independently
    /// (`year >= y && month >= m && day >= d`). A December eclipse on the
    /// 3rd is dropped for an observation date of 05-01-2024.
    #[default]
    Componentwise,
    /// Calendar date is on or after the observation date.
    OnOrAfter,
}

impl DateFilter {
    pub fn accepts(self, occurrence: &CalendarDateTime, observation: &CalendarDate) -> bool {
        match self {
            Self::Componentwise => {
                occurrence.year() >= observation.year()
                    && occurrence.month() >= observation.month()
                    && occurrence.day() >= observation.day()
            }
            Self::OnOrAfter => {
                (occurrence.year(), occurrence.month(), occurrence.day())
                    >= (observation.year(), observation.month(), observation.day())
            }
        }
    }
}

/// Ordering applied before the result list is truncated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SelectionOrder {
    /// Stable sort on day-of-month alone; ties keep generation order.
    #[default]
    DayOfMonth,
    /// Generation order, i.e. earliest first.
    Chronological,
}

/// Configuration for [`predict_eclipses`](crate::predict_eclipses).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PredictionConfig {
    /// Number of cycles generated after the anchor (default 500).
    pub max_cycles: u32,
    /// Number of occurrences returned (default 10).
    pub max_results: usize,
    /// Observation-date filter (default componentwise).
    pub filter: DateFilter,
    /// Selection order (default day-of-month).
    pub order: SelectionOrder,
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self {
            max_cycles: 500,
            max_results: 10,
            filter: DateFilter::default(),
            order: SelectionOrder::default(),
        }
    }
}

impl PredictionConfig {
    /// Chronological filter and ordering.
    pub fn chronological() -> Self {
        Self {
            filter: DateFilter::OnOrAfter,
            order: SelectionOrder::Chronological,
            ..Self::default()
        }
    }
}

/// A predicted eclipse.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EclipseOccurrence {
    /// Cycle index counted from the ephemeris epoch.
    pub cycle: i64,
    /// Occurrence time as a Julian Date.
    pub jd: f64,
    /// Occurrence as a civil date-time.
    pub datetime: CalendarDateTime,
}
