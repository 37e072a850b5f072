//! Diagnostic logging for the command-line tools.

use std::env;

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Install a stderr subscriber. The level comes from `RUST_LOG`
/// (`error`, `warn`, `info`, `debug`, `trace`) and defaults to `warn`, so
/// stdout carries results only.
pub fn init_logging() {
    let level = env::var("RUST_LOG")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(Level::WARN);
    FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}
