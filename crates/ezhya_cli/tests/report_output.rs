//! End-to-end output of the report writers with the fixed EZ Hya inputs.

use ezhya_binary::{
    EZ_HYA, calculate_brightness, calculate_orbital_parameters, calculate_orbital_speeds,
};
use ezhya_cli::{write_binary_report, write_eclipses};
use ezhya_eclipse::{EZ_HYA_EPHEMERIS, PredictionConfig, predict_eclipses};
use ezhya_time::{CalendarDate, from_gregorian};

#[test]
fn binary_report_lines() {
    let r1 = EZ_HYA.primary.radius_m();
    let r2 = EZ_HYA.secondary.radius_m();
    let orbit = calculate_orbital_parameters();
    let speeds = calculate_orbital_speeds(orbit.period_s, r1, r2);
    let brightness = calculate_brightness(r1, r2);

    let mut out = Vec::new();
    write_binary_report(&mut out, &orbit, &speeds, &brightness).unwrap();
    let text = String::from_utf8(out).unwrap();

    let expected = "\
Semi-major axis: 2075093.20 km
Mass of the first star: 2.72e+30 kg
Mass of the second star: 6.96e+29 kg
Total mass of the system: 3.42e+30 kg
Mass ratio: 0.26
Orbital period: 0.45 days
Orbital speed of the first star: 171.42 km/s
Orbital speed of the second star: 94.62 km/s
Total brightness outside eclipse: 1.22e+27 L
Brightness during primary eclipse: 9.56e+26 L
Brightness during secondary eclipse: 8.78e+26 L
";
    assert_eq!(text, expected);
}

#[test]
fn eclipse_lines_for_june_2024() {
    let now = from_gregorian(2024, 5, 1).unwrap();
    let obs = CalendarDate::parse_dmy("01-06-2024").unwrap();
    let eclipses =
        predict_eclipses(&EZ_HYA_EPHEMERIS, now, &obs, &PredictionConfig::default()).unwrap();

    let mut out = Vec::new();
    write_eclipses(&mut out, &eclipses).unwrap();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 10);
    assert_eq!(lines[0], "Next eclipse: 01-06-2024 03:23:48");
    assert!(lines[1].starts_with("Next eclipse: 01-06-2024 14:11:"));
    assert!(lines[9].starts_with("Next eclipse: 01-10-2024 11:21:"));
    assert!(lines.iter().all(|l| l.starts_with("Next eclipse: 01-")));
}

#[test]
fn empty_selection_prints_nothing() {
    let mut out = Vec::new();
    write_eclipses(&mut out, &[]).unwrap();
    assert!(out.is_empty());
}
