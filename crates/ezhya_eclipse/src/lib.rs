//! Eclipse timing from a linear ephemeris.
//!
//! Finds the next eclipse after a given instant, generates a bounded run of
//! later occurrences and selects the ones reported for an observation date.

pub mod ephemeris;
pub mod error;
pub mod prediction;
pub mod prediction_types;

pub use ephemeris::{
    EZ_HYA_EPHEMERIS, EZ_HYA_EPOCH_JD, EZ_HYA_PERIOD_DAYS, Ephemeris, calc_next_eclipse,
};
pub use error::EclipseError;
pub use prediction::{generate_occurrences, predict_eclipses, select_occurrences};
pub use prediction_types::{DateFilter, EclipseOccurrence, PredictionConfig, SelectionOrder};
