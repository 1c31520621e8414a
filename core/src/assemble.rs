use crate::error::ParseError;
use crate::grammar::{classify_with, ClassifyOptions};
use crate::models::{RawStep, StepPosition, WorkoutDocument, WorkoutMeta};

/// Klassifiser alle steg i gruppen og pakk dem inn med metadata.
/// Stopper på første ParseError; et delvis dokument lages aldri.
pub fn assemble(group: &[RawStep], title: &str, meta: &WorkoutMeta) -> Result<WorkoutDocument, ParseError> {
    assemble_with(group, title, meta, &ClassifyOptions::default())
}

pub fn assemble_with(
    group: &[RawStep],
    title: &str,
    meta: &WorkoutMeta,
    options: &ClassifyOptions,
) -> Result<WorkoutDocument, ParseError> {
    let n = group.len();
    let steps = group
        .iter()
        .enumerate()
        .map(|(i, raw)| classify_with(&raw.text, StepPosition::for_index(i, n), options))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(WorkoutDocument {
        author: meta.author.clone(),
        name: title.to_string(),
        description: meta.description.clone(),
        sport_type: meta.sport_type.clone(),
        tags: Vec::new(),
        steps,
    })
}
