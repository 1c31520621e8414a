// core/src/pipeline.rs
use std::collections::HashSet;
use std::ops::Range;

use log::{info, warn};
use rayon::prelude::*;
use serde::Serialize;

use crate::assemble::assemble_with;
use crate::config::CompileConfig;
use crate::error::{CompileError, ParseError};
use crate::metrics::Metrics;
use crate::models::{RawStep, WorkoutDocument};
use crate::segment::segment;
use crate::zwo::{numbered_file_name, serialize};

/// Én ferdig økt, klar for lagring.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompiledWorkout {
    pub index: usize,
    pub title: String,
    pub file_name: String,
    pub document: WorkoutDocument,
    pub xml: String,
}

/// Gruppe som ble droppet fordi et steg ikke kunne tolkes.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupFailure {
    pub index: usize,
    pub steps: Range<usize>,
    pub error: ParseError,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompiledPage {
    pub workouts: Vec<CompiledWorkout>,
    pub failures: Vec<GroupFailure>,
}

impl CompiledPage {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

fn compile_group(
    index: usize,
    range: Range<usize>,
    raw_steps: &[RawStep],
    title: &str,
    config: &CompileConfig,
) -> Result<CompiledWorkout, GroupFailure> {
    let meta = config.meta();
    let document = assemble_with(&raw_steps[range.clone()], title, &meta, &config.classify_options())
        .map_err(|error| GroupFailure { index, steps: range.clone(), error })?;
    let xml = serialize(&document);

    Ok(CompiledWorkout {
        index,
        title: title.to_string(),
        file_name: numbered_file_name(title, index, config.numbering),
        document,
        xml,
    })
}

/// Like titler gir like filnavn. Senere duplikater får " (2)", " (3)" osv.
/// Sammenligningen ignorerer store/små bokstaver (NTFS, APFS).
fn dedupe_file_names(workouts: &mut [CompiledWorkout]) {
    let mut taken = HashSet::new();
    for workout in workouts {
        let stem = workout.file_name.strip_suffix(".zwo").unwrap_or(&workout.file_name).to_string();
        let mut candidate = workout.file_name.clone();
        let mut n = 2;
        while !taken.insert(candidate.to_lowercase()) {
            candidate = format!("{stem} ({n}).zwo");
            n += 1;
        }
        if candidate != workout.file_name {
            warn!("workout {} file name {:?} taken, using {:?}", workout.index, workout.file_name, candidate);
            workout.file_name = candidate;
        }
    }
}

/// Segmenter → klassifiser → sett sammen → render, én gang per økt.
///
/// `titles[i]` hører til gruppe i. For få titler er et kontraktbrudd og
/// avvises før noe arbeid gjøres. En ParseError stopper bare gruppen den
/// oppstod i; de andre kompileres som normalt. En tom stegliste gir ingen økter.
pub fn compile_page(
    raw_steps: &[RawStep],
    titles: &[String],
    config: &CompileConfig,
    metrics: Option<&Metrics>,
) -> Result<CompiledPage, CompileError> {
    if raw_steps.is_empty() {
        info!("no steps on page, nothing to compile");
        return Ok(CompiledPage::default());
    }

    let groups = segment(raw_steps, config.gap_threshold);
    if titles.len() < groups.len() {
        return Err(CompileError::TitleMismatch { groups: groups.len(), titles: titles.len() });
    }
    info!(
        "segmented {} steps into {} workouts (gap_threshold={})",
        raw_steps.len(),
        groups.len(),
        config.gap_threshold
    );

    let jobs: Vec<(usize, Range<usize>)> = groups.into_iter().enumerate().collect();
    let run = |(index, range): &(usize, Range<usize>)| {
        compile_group(*index, range.clone(), raw_steps, &titles[*index], config)
    };
    // par_iter().map().collect() bevarer rekkefølgen
    let results: Vec<Result<CompiledWorkout, GroupFailure>> = if config.parallel {
        jobs.par_iter().map(run).collect()
    } else {
        jobs.iter().map(run).collect()
    };

    let mut page = CompiledPage::default();
    for result in results {
        match result {
            Ok(workout) => {
                if let Some(m) = metrics {
                    m.record_document(&workout.document.steps);
                }
                info!(
                    "compiled workout {} {:?} ({} steps, {} s)",
                    workout.index,
                    workout.title,
                    workout.document.steps.len(),
                    workout.document.total_duration_s()
                );
                page.workouts.push(workout);
            }
            Err(failure) => {
                if let Some(m) = metrics {
                    m.record_failure();
                }
                warn!("skipping workout {}: {}", failure.index, failure.error);
                page.failures.push(failure);
            }
        }
    }
    dedupe_file_names(&mut page.workouts);
    Ok(page)
}
