use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use zwoforge_core::cli::{print_report, run, Args};
use zwoforge_core::{HttpPageSource, Metrics};

fn main() -> anyhow::Result<ExitCode> {
    // RUST_LOG=debug for stegvis logg; fanger også `log`-poster fra biblioteket
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let metrics = Metrics::new().context("failed to set up metrics")?;
    let report = run(&args, &HttpPageSource::new(), &metrics)
        .with_context(|| format!("failed to compile workouts from {}", args.target))?;

    print_report(&report);
    if report.page.is_complete() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(2))
    }
}
