//! Binary star records and the quantities derived from them.
//!
//! Orbits are treated as circular; luminosities are blackbody values from
//! the Stefan–Boltzmann law, `L = 4πR²σT⁴`.

use std::f64::consts::PI;

use crate::constants::{
    G, M_SUN, PRIMARY_MASS_SOLAR, PRIMARY_RADIUS_SOLAR, PRIMARY_TEMPERATURE_K, R_SUN,
    SECONDARY_MASS_SOLAR, SECONDARY_RADIUS_SOLAR, SECONDARY_TEMPERATURE_K, SEMI_MAJOR_AXIS_SOLAR,
    STEFAN_BOLTZMANN,
};

/// The EZ Hya configuration.
pub const EZ_HYA: BinarySystem = BinarySystem {
    primary: StarParameters {
        radius_solar: PRIMARY_RADIUS_SOLAR,
        mass_solar: PRIMARY_MASS_SOLAR,
        temperature_k: PRIMARY_TEMPERATURE_K,
    },
    secondary: StarParameters {
        radius_solar: SECONDARY_RADIUS_SOLAR,
        mass_solar: SECONDARY_MASS_SOLAR,
        temperature_k: SECONDARY_TEMPERATURE_K,
    },
    semi_major_axis_solar: SEMI_MAJOR_AXIS_SOLAR,
};

/// One component star.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarParameters {
    /// Radius in solar radii.
    pub radius_solar: f64,
    /// Mass in solar masses.
    pub mass_solar: f64,
    /// Effective temperature in K.
    pub temperature_k: f64,
}

impl StarParameters {
    pub fn radius_m(&self) -> f64 {
        self.radius_solar * R_SUN
    }

    pub fn mass_kg(&self) -> f64 {
        self.mass_solar * M_SUN
    }
}

/// A two-star system on a circular orbit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinarySystem {
    pub primary: StarParameters,
    pub secondary: StarParameters,
    /// Semi-major axis in solar radii.
    pub semi_major_axis_solar: f64,
}

/// Orbital quantities from Kepler's third law.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalParameters {
    pub semi_major_axis_m: f64,
    pub primary_mass_kg: f64,
    pub secondary_mass_kg: f64,
    pub total_mass_kg: f64,
    /// q = M2 / M1.
    pub mass_ratio: f64,
    pub period_s: f64,
}

/// Tangential speeds in km/s.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalSpeeds {
    pub primary_km_s: f64,
    pub secondary_km_s: f64,
}

/// Luminosities in W at three orbital phases.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Brightness {
    /// Both stars fully visible.
    pub total: f64,
    /// Secondary's disk in front of the primary.
    pub primary_eclipse: f64,
    /// Secondary hidden behind the primary.
    pub secondary_eclipse: f64,
}

/// `4πR²σT⁴` for a radius in m and temperature in K.
pub fn blackbody_luminosity(radius_m: f64, temperature_k: f64) -> f64 {
    4.0 * PI * radius_m.powi(2) * STEFAN_BOLTZMANN * temperature_k.powi(4)
}

/// `P = 2π sqrt(a³ / (G M))` in s.
pub fn kepler_period(semi_major_axis_m: f64, total_mass_kg: f64) -> f64 {
    ((2.0 * PI).powi(2) * semi_major_axis_m.powi(3) / (G * total_mass_kg)).sqrt()
}

/// `2πR / P` converted to km/s.
pub fn tangential_speed_km_s(radius_m: f64, period_s: f64) -> f64 {
    (2.0 * PI * radius_m / period_s) / 1000.0
}

impl BinarySystem {
    pub fn orbital_parameters(&self) -> OrbitalParameters {
        let a = self.semi_major_axis_solar * R_SUN;
        let m1 = self.primary.mass_kg();
        let m2 = self.secondary.mass_kg();
        let m = m1 + m2;
        OrbitalParameters {
            semi_major_axis_m: a,
            primary_mass_kg: m1,
            secondary_mass_kg: m2,
            total_mass_kg: m,
            mass_ratio: m2 / m1,
            period_s: kepler_period(a, m),
        }
    }

    /// Speeds of both stars over one period, from their own radii.
    pub fn orbital_speeds(&self, period_s: f64) -> OrbitalSpeeds {
        orbital_speeds(period_s, self.primary.radius_m(), self.secondary.radius_m())
    }

    /// Brightness at the three phases, from the stars' radii and
    /// temperatures.
    pub fn brightness(&self) -> Brightness {
        phase_brightness(
            self.primary.radius_m(),
            self.primary.temperature_k,
            self.secondary.radius_m(),
            self.secondary.temperature_k,
        )
    }
}

/// Speeds of stars with radii `r1_m`, `r2_m` over one period.
pub fn orbital_speeds(period_s: f64, r1_m: f64, r2_m: f64) -> OrbitalSpeeds {
    OrbitalSpeeds {
        primary_km_s: tangential_speed_km_s(r1_m, period_s),
        secondary_km_s: tangential_speed_km_s(r2_m, period_s),
    }
}

/// Brightness of a primary (`r1_m`, `t1_k`) and secondary (`r2_m`, `t2_k`).
///
/// During primary eclipse the area `π R2²` of the primary is covered and
/// replaced by the secondary's own emission.
pub fn phase_brightness(r1_m: f64, t1_k: f64, r2_m: f64, t2_k: f64) -> Brightness {
    let l1 = blackbody_luminosity(r1_m, t1_k);
    let l2 = blackbody_luminosity(r2_m, t2_k);
    let primary_visible =
        4.0 * PI * (r1_m.powi(2) - r2_m.powi(2)) * STEFAN_BOLTZMANN * t1_k.powi(4);
    Brightness {
        total: l1 + l2,
        primary_eclipse: primary_visible + l2,
        secondary_eclipse: l1,
    }
}
