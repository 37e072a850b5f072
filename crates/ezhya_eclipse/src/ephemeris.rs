//! Linear eclipse ephemeris `T(E) = M0 + P * E`.

use tracing::debug;

use crate::error::EclipseError;

/// EZ Hya orbital period in days.
pub const EZ_HYA_PERIOD_DAYS: f64 = 0.44974999;

/// EZ Hya reference primary minimum, JD.
pub const EZ_HYA_EPOCH_JD: f64 = 2_446_449.7811;

/// Ephemeris used by the eclipse predictor.
pub const EZ_HYA_EPHEMERIS: Ephemeris = Ephemeris {
    period_days: EZ_HYA_PERIOD_DAYS,
    epoch_jd: EZ_HYA_EPOCH_JD,
};

/// A strictly periodic event: period and reference epoch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ephemeris {
    /// Period in days.
    pub period_days: f64,
    /// Epoch of cycle 0 as a Julian Date.
    pub epoch_jd: f64,
}

impl Ephemeris {
    fn validate(&self) -> Result<(), EclipseError> {
        if !self.period_days.is_finite() || self.period_days <= 0.0 {
            return Err(EclipseError::InvalidPeriod(self.period_days));
        }
        if !self.epoch_jd.is_finite() {
            return Err(EclipseError::InvalidEpoch(self.epoch_jd));
        }
        Ok(())
    }

    /// Julian Date of a given cycle.
    pub fn occurrence_jd(&self, cycle: i64) -> f64 {
        self.epoch_jd + self.period_days * cycle as f64
    }

    /// Index of the first cycle strictly after `jd`:
    /// `floor((jd - M0) / P) + 1`.
    pub fn next_cycle(&self, jd: f64) -> Result<i64, EclipseError> {
        self.validate()?;
        if !jd.is_finite() {
            return Err(EclipseError::InvalidEpoch(jd));
        }
        let elapsed = (jd - self.epoch_jd) / self.period_days;
        Ok(elapsed.floor() as i64 + 1)
    }
}

/// Julian Date of the first eclipse strictly after `now_jd`.
pub fn calc_next_eclipse(ephemeris: &Ephemeris, now_jd: f64) -> Result<f64, EclipseError> {
    let cycle = ephemeris.next_cycle(now_jd)?;
    let jd = ephemeris.occurrence_jd(cycle);
    debug!(cycle, jd, now_jd, "next eclipse anchor");
    Ok(jd)
}
