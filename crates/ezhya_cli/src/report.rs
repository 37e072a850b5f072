//! Result formatting for both tools.

use std::io::{self, Write};

use ezhya_binary::{Brightness, OrbitalParameters, OrbitalSpeeds};
use ezhya_eclipse::EclipseOccurrence;
use ezhya_time::SECONDS_PER_DAY;

/// Scientific notation with a signed, two-digit exponent (`2.72e+30`).
pub fn sci(value: f64, precision: usize) -> String {
    let raw = format!("{value:.precision$e}");
    match raw.split_once('e') {
        Some((mantissa, exp)) => match exp.parse::<i32>() {
            Ok(exp) => {
                let sign = if exp < 0 { '-' } else { '+' };
                format!("{mantissa}e{sign}{:02}", exp.abs())
            }
            Err(_) => raw,
        },
        // inf / NaN
        None => raw,
    }
}

/// `Next eclipse: DD-MM-YYYY HH:MM:SS` for each occurrence.
pub fn write_eclipses<W: Write>(out: &mut W, eclipses: &[EclipseOccurrence]) -> io::Result<()> {
    for eclipse in eclipses {
        writeln!(out, "Next eclipse: {}", eclipse.datetime)?;
    }
    Ok(())
}

/// The eleven-line binary parameter report.
pub fn write_binary_report<W: Write>(
    out: &mut W,
    orbit: &OrbitalParameters,
    speeds: &OrbitalSpeeds,
    brightness: &Brightness,
) -> io::Result<()> {
    writeln!(out, "Semi-major axis: {:.2} km", orbit.semi_major_axis_m / 1000.0)?;
    writeln!(out, "Mass of the first star: {} kg", sci(orbit.primary_mass_kg, 2))?;
    writeln!(out, "Mass of the second star: {} kg", sci(orbit.secondary_mass_kg, 2))?;
    writeln!(out, "Total mass of the system: {} kg", sci(orbit.total_mass_kg, 2))?;
    writeln!(out, "Mass ratio: {:.2}", orbit.mass_ratio)?;
    writeln!(out, "Orbital period: {:.2} days", orbit.period_s / SECONDS_PER_DAY)?;
    writeln!(out, "Orbital speed of the first star: {:.2} km/s", speeds.primary_km_s)?;
    writeln!(out, "Orbital speed of the second star: {:.2} km/s", speeds.secondary_km_s)?;
    writeln!(out, "Total brightness outside eclipse: {} L", sci(brightness.total, 2))?;
    writeln!(
        out,
        "Brightness during primary eclipse: {} L",
        sci(brightness.primary_eclipse, 2)
    )?;
    writeln!(
        out,
        "Brightness during secondary eclipse: {} L",
        sci(brightness.secondary_eclipse, 2)
    )?;
    Ok(())
}
