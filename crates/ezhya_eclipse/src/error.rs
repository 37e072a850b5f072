//! Error types for eclipse prediction.

use ezhya_time::TimeError;
use thiserror::Error;

/// Errors from ephemeris evaluation or occurrence conversion.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum EclipseError {
    /// Period must be finite and strictly positive (days).
    #[error("invalid ephemeris period: {0} days")]
    InvalidPeriod(f64),
    /// Reference epoch or observation instant is not a finite Julian Date.
    #[error("invalid Julian Date: {0}")]
    InvalidEpoch(f64),
    /// Calendar conversion of an occurrence failed.
    #[error(transparent)]
    Time(#[from] TimeError),
}
