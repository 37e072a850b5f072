//! Prints the orbital and brightness parameters of EZ Hya.

use std::io::{self, Write};

use clap::Parser;
use ezhya_binary::{
    EZ_HYA, calculate_brightness, calculate_orbital_parameters, calculate_orbital_speeds,
};
use ezhya_cli::{init_logging, write_binary_report};
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "binary-params",
    version,
    about = "Orbital and brightness parameters of the EZ Hya binary"
)]
struct Cli {}

fn main() -> anyhow::Result<()> {
    let _cli = Cli::parse();
    init_logging();

    let r1 = EZ_HYA.primary.radius_m();
    let r2 = EZ_HYA.secondary.radius_m();

    let orbit = calculate_orbital_parameters();
    let speeds = calculate_orbital_speeds(orbit.period_s, r1, r2);
    let brightness = calculate_brightness(r1, r2);
    debug!(period_s = orbit.period_s, "computed EZ Hya parameters");

    let mut out = io::stdout().lock();
    write_binary_report(&mut out, &orbit, &speeds, &brightness)?;
    out.flush()?;
    Ok(())
}
