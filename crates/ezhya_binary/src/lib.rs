//! Orbital and brightness parameters of the EZ Hya eclipsing binary.
//!
//! The free functions evaluate the fixed [`EZ_HYA`] configuration; the
//! [`BinarySystem`] methods accept any system.

pub mod constants;
pub mod system;

pub use system::{
    BinarySystem, Brightness, EZ_HYA, OrbitalParameters, OrbitalSpeeds, StarParameters,
    blackbody_luminosity, kepler_period, orbital_speeds, phase_brightness, tangential_speed_km_s,
};

/// Semi-major axis, masses, mass ratio and period of EZ Hya.
pub fn calculate_orbital_parameters() -> OrbitalParameters {
    EZ_HYA.orbital_parameters()
}

/// Tangential speeds (km/s) of stars with radii `r1_m`, `r2_m` over `period_s`.
pub fn calculate_orbital_speeds(period_s: f64, r1_m: f64, r2_m: f64) -> OrbitalSpeeds {
    orbital_speeds(period_s, r1_m, r2_m)
}

/// Out-of-eclipse, primary-eclipse and secondary-eclipse brightness at the
/// EZ Hya temperatures.
pub fn calculate_brightness(r1_m: f64, r2_m: f64) -> Brightness {
    phase_brightness(
        r1_m,
        EZ_HYA.primary.temperature_k,
        r2_m,
        EZ_HYA.secondary.temperature_k,
    )
}
