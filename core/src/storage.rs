use std::collections::HashSet;
use std::path::{Path, PathBuf};

use log::info;

use crate::error::CompileError;
use crate::pipeline::CompiledPage;

/// Skriver hver kompilerte økt til `dir/<file_name>`.
/// Mappen opprettes hvis den ikke finnes. Returnerer stiene som ble skrevet.
/// To økter med samme filnavn avvises før noe skrives.
pub fn write_workouts(page: &CompiledPage, dir: impl AsRef<Path>) -> Result<Vec<PathBuf>, CompileError> {
    let dir = dir.as_ref();
    let mut seen = HashSet::new();
    for workout in &page.workouts {
        if !seen.insert(workout.file_name.to_lowercase()) {
            return Err(CompileError::DuplicateFileName { file_name: workout.file_name.clone() });
        }
    }

    if !dir.is_dir() {
        std::fs::create_dir_all(dir).map_err(|e| CompileError::io(dir, e))?;
        info!("created output directory {}", dir.display());
    }

    let mut written = Vec::with_capacity(page.workouts.len());
    for workout in &page.workouts {
        let path = dir.join(&workout.file_name);
        std::fs::write(&path, &workout.xml).map_err(|e| CompileError::io(&path, e))?;
        info!("wrote {}", path.display());
        written.push(path);
    }
    Ok(written)
}
