//! Physical constants and EZ Hya star multipliers (SI units).

/// Newtonian gravitational constant in m³ / (kg s²).
pub const G: f64 = 6.6743e-11;

/// Stefan–Boltzmann constant in W / (m² K⁴).
pub const STEFAN_BOLTZMANN: f64 = 5.67e-8;

/// Solar radius in m.
pub const R_SUN: f64 = 696_340e3;

/// Solar mass in kg.
pub const M_SUN: f64 = 1.989e30;

/// Semi-major axis in solar radii.
pub const SEMI_MAJOR_AXIS_SOLAR: f64 = 2.98;

/// Primary mass in solar masses.
pub const PRIMARY_MASS_SOLAR: f64 = 1.37;

/// Secondary mass in solar masses.
pub const SECONDARY_MASS_SOLAR: f64 = 0.35;

/// Primary radius in solar radii.
pub const PRIMARY_RADIUS_SOLAR: f64 = 1.54;

/// Secondary radius in solar radii.
pub const SECONDARY_RADIUS_SOLAR: f64 = 0.85;

/// Primary effective temperature in K.
pub const PRIMARY_TEMPERATURE_K: f64 = 5721.0;

/// Secondary effective temperature in K.
pub const SECONDARY_TEMPERATURE_K: f64 = 6100.0;
