use std::path::PathBuf;

use clap::Parser;

use crate::config::{load_config, CompileConfig};
use crate::error::CompileError;
use crate::fetch::{load_page, PageSource};
use crate::grammar::IntervalOffHours;
use crate::metrics::Metrics;
use crate::page::extract_page;
use crate::pipeline::{compile_page, CompiledPage};
use crate::storage::write_workouts;
use crate::zwo::Numbering;

/// Last ned økter fra en side og lagre dem som .zwo-filer.
#[derive(Debug, Parser)]
#[command(name = "zwoforge", version, about = "Download workouts and save them as .zwo files")]
pub struct Args {
    /// File or URL of the workout page
    pub target: String,

    /// Output directory
    #[arg(short, long, env = "ZWOFORGE_OUT", default_value = "zwo")]
    pub out: PathBuf,

    /// JSON config file (missing file = defaults)
    #[arg(short, long, env = "ZWOFORGE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Source-line gap that starts a new workout
    #[arg(long)]
    pub gap: Option<u32>,

    /// File name numbering: none, ordinal or training
    #[arg(long, value_enum)]
    pub numbering: Option<Numbering>,

    /// Use the off-hours capture for interval rest durations
    #[arg(long)]
    pub corrected_off_hours: bool,

    /// Compile workouts in parallel
    #[arg(long)]
    pub parallel: bool,
}

impl Args {
    /// Konfig fra fil, med flagg fra kommandolinjen lagt oppå.
    pub fn resolve_config(&self) -> Result<CompileConfig, CompileError> {
        let mut cfg = match &self.config {
            Some(path) => load_config(path)?,
            None => CompileConfig::default(),
        };
        if let Some(gap) = self.gap {
            cfg.gap_threshold = gap;
        }
        if let Some(numbering) = self.numbering {
            cfg.numbering = numbering;
        }
        if self.corrected_off_hours {
            cfg.interval_off_hours = IntervalOffHours::Corrected;
        }
        if self.parallel {
            cfg.parallel = true;
        }
        Ok(cfg)
    }
}

#[derive(Debug)]
pub struct RunReport {
    pub page: CompiledPage,
    pub written: Vec<PathBuf>,
}

/// Hent → trekk ut → kompiler → skriv.
pub fn run(args: &Args, source: &dyn PageSource, metrics: &Metrics) -> Result<RunReport, CompileError> {
    let cfg = args.resolve_config()?;
    let html = load_page(&args.target, source)?;
    let scraped = extract_page(&html);
    let page = compile_page(&scraped.steps, &scraped.titles, &cfg, Some(metrics))?;
    let written = write_workouts(&page, &args.out)?;
    Ok(RunReport { page, written })
}

/// Statuslinjer for terminalen.
pub fn print_report(report: &RunReport) {
    for path in &report.written {
        println!("file {} done", path.display());
    }
    for failure in &report.page.failures {
        println!(
            "workout {} skipped: couldn't parse {:?} ({})",
            failure.index, failure.error.raw_text, failure.error.reason
        );
    }
    println!(
        "{} zwo files written, {} skipped",
        report.written.len(),
        report.page.failures.len()
    );
}
