use std::convert::Infallible;
use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use isoclock::cli::Cli;
use isoclock::sleeper::RealSleeper;
use isoclock::telemetry::{init_tracing, DEFAULT_FILTER};
use isoclock::{SystemClock, Ticker};

fn main() -> ExitCode {
    let _cli = Cli::parse();
    init_tracing(DEFAULT_FILTER);

    match run() {
        Ok(never) => match never {},
        Err(err) => {
            eprintln!("isoclock: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<Infallible> {
    let stdout = io::stdout();
    let mut ticker = Ticker::new(SystemClock, Local, RealSleeper, stdout.lock());

    tracing::debug!(pid = std::process::id(), "clock started");
    ticker.run().context("clock stopped")
}
