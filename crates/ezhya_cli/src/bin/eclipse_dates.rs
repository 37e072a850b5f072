//! Prints upcoming EZ Hya eclipses for an observation date read from stdin.

use std::io::{self, Write};

use anyhow::Context;
use clap::Parser;
use ezhya_cli::{init_logging, read_observation_date, write_eclipses};
use ezhya_eclipse::{EZ_HYA_EPHEMERIS, PredictionConfig, predict_eclipses};
use ezhya_time::CalendarDate;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "eclipse-dates",
    version,
    about = "Upcoming EZ Hya eclipses for an observation date"
)]
struct Cli {}

fn main() -> anyhow::Result<()> {
    let _cli = Cli::parse();
    init_logging();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let observation = read_observation_date(&mut stdin.lock(), &mut stdout.lock())?;

    let today = CalendarDate::today_local();
    let now_jd = today.to_jd().context("converting today's date")?;
    debug!(%observation, %today, now_jd, "predicting eclipses");

    let eclipses = predict_eclipses(
        &EZ_HYA_EPHEMERIS,
        now_jd,
        &observation,
        &PredictionConfig::default(),
    )?;

    let mut out = stdout.lock();
    write_eclipses(&mut out, &eclipses)?;
    out.flush()?;
    Ok(())
}
