//! Upcoming eclipses for an observation date.
//!
//! Algorithm:
//!   1. Anchor on the first eclipse strictly after "now"
//!   2. Generate `max_cycles` further occurrences, anchor + P * k for k >= 1
//!   3. Keep those accepted by the configured [`DateFilter`]
//!   4. Order by the configured [`SelectionOrder`], keep `max_results`

use ezhya_time::{CalendarDate, to_gregorian};
use tracing::{debug, info};

use crate::ephemeris::Ephemeris;
use crate::error::EclipseError;
use crate::prediction_types::{DateFilter, EclipseOccurrence, PredictionConfig, SelectionOrder};

/// The `count` occurrences following the first eclipse after `now_jd`.
///
/// The anchor itself is not included: the first entry is anchor + P.
pub fn generate_occurrences(
    ephemeris: &Ephemeris,
    now_jd: f64,
    count: u32,
) -> Result<Vec<EclipseOccurrence>, EclipseError> {
    let anchor_cycle = ephemeris.next_cycle(now_jd)?;
    let anchor_jd = ephemeris.occurrence_jd(anchor_cycle);

    (1..=count)
        .map(|k| -> Result<EclipseOccurrence, EclipseError> {
            let jd = anchor_jd + ephemeris.period_days * k as f64;
            Ok(EclipseOccurrence {
                cycle: anchor_cycle + i64::from(k),
                jd,
                datetime: to_gregorian(jd)?,
            })
        })
        .collect()
}

/// Filter and order `occurrences`, keeping at most `max_results`.
pub fn select_occurrences(
    mut occurrences: Vec<EclipseOccurrence>,
    observation: &CalendarDate,
    filter: DateFilter,
    order: SelectionOrder,
    max_results: usize,
) -> Vec<EclipseOccurrence> {
    occurrences.retain(|occ| filter.accepts(&occ.datetime, observation));
    let accepted = occurrences.len();
    match order {
        SelectionOrder::DayOfMonth => occurrences.sort_by_key(|occ| occ.datetime.day()),
        SelectionOrder::Chronological => {}
    }
    occurrences.truncate(max_results);
    debug!(accepted, selected = occurrences.len(), "eclipse selection");
    occurrences
}

/// Upcoming eclipses for `observation`, seen from `now_jd`.
///
/// An empty result is not an error.
pub fn predict_eclipses(
    ephemeris: &Ephemeris,
    now_jd: f64,
    observation: &CalendarDate,
    config: &PredictionConfig,
) -> Result<Vec<EclipseOccurrence>, EclipseError> {
    let generated = generate_occurrences(ephemeris, now_jd, config.max_cycles)?;
    let selected = select_occurrences(
        generated,
        observation,
        config.filter,
        config.order,
        config.max_results,
    );
    if selected.is_empty() {
        info!(
            %observation,
            cycles = config.max_cycles,
            "no eclipse matched the observation date"
        );
    }
    Ok(selected)
}
