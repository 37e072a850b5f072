//! Golden values for the fixed EZ Hya configuration.

use ezhya_binary::{
    EZ_HYA, calculate_brightness, calculate_orbital_parameters, calculate_orbital_speeds,
};

fn radii_m() -> (f64, f64) {
    (EZ_HYA.primary.radius_m(), EZ_HYA.secondary.radius_m())
}

fn rel_close(got: f64, expected: f64, tol: f64) -> bool {
    ((got - expected) / expected).abs() < tol
}

#[test]
fn orbital_parameters() {
    let p = calculate_orbital_parameters();
    assert!(rel_close(p.semi_major_axis_m, 2.98 * 696_340_000.0, 1e-12));
    assert!(rel_close(p.primary_mass_kg, 1.37 * 1.989e30, 1e-12));
    assert!(rel_close(p.secondary_mass_kg, 0.35 * 1.989e30, 1e-12));
    assert!(rel_close(p.total_mass_kg, 1.72 * 1.989e30, 1e-12));
    assert!(rel_close(p.mass_ratio, 0.255_474_452_554_744_5, 1e-12));
}

/// Kepler's third law with these constants: P ≈ 39305 s ≈ 0.455 d, close to
/// the 0.44975 d photometric period.
#[test]
fn orbital_period() {
    let p = calculate_orbital_parameters();
    assert!(
        rel_close(p.period_s, 39_305.362, 1e-6),
        "got {}",
        p.period_s
    );
    assert_eq!(format!("{:.2}", p.period_s / 86_400.0), "0.45");
}

#[test]
fn orbital_speeds() {
    let (r1, r2) = radii_m();
    let p = calculate_orbital_parameters();
    let v = calculate_orbital_speeds(p.period_s, r1, r2);
    assert!(
        rel_close(v.primary_km_s, 171.423_410, 1e-6),
        "got {}",
        v.primary_km_s
    );
    assert!(
        rel_close(v.secondary_km_s, 94.616_817, 1e-6),
        "got {}",
        v.secondary_km_s
    );
}

#[test]
fn brightness_values() {
    let (r1, r2) = radii_m();
    let b = calculate_brightness(r1, r2);
    assert!(
        rel_close(b.total, 1.223_353_054_5e27, 1e-9),
        "got {:e}",
        b.total
    );
    assert!(rel_close(b.primary_eclipse, 9.559_531_476e26, 1e-9));
    assert!(rel_close(b.secondary_eclipse, 8.777_378_812_6e26, 1e-9));
}

#[test]
fn secondary_eclipse_is_dimmest() {
    let (r1, r2) = radii_m();
    let b = calculate_brightness(r1, r2);
    assert!(b.secondary_eclipse < b.primary_eclipse);
    assert!(b.primary_eclipse < b.total);
}

#[test]
fn repeated_calls_are_bit_identical() {
    let (r1, r2) = radii_m();
    let a = calculate_orbital_parameters();
    let b = calculate_orbital_parameters();
    assert_eq!(a.period_s.to_bits(), b.period_s.to_bits());
    assert_eq!(a, b);
    assert_eq!(
        calculate_orbital_speeds(a.period_s, r1, r2),
        calculate_orbital_speeds(b.period_s, r1, r2)
    );
    assert_eq!(calculate_brightness(r1, r2), calculate_brightness(r1, r2));
    assert_eq!(calculate_orbital_parameters(), EZ_HYA.orbital_parameters());
}

#[test]
fn system_methods_match_free_functions() {
    let (r1, r2) = radii_m();
    let period = EZ_HYA.orbital_parameters().period_s;
    assert_eq!(
        EZ_HYA.orbital_speeds(period),
        calculate_orbital_speeds(period, r1, r2)
    );
    assert_eq!(EZ_HYA.brightness(), calculate_brightness(r1, r2));
}
