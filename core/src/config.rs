use std::path::Path;

use log::{info, warn};
use serde::{Deserialize, Serialize};
use serde_path_to_error as spte;

use crate::error::CompileError;
use crate::grammar::{ClassifyOptions, IntervalOffHours};
use crate::models::WorkoutMeta;
use crate::segment::DEFAULT_GAP_THRESHOLD;
use crate::zwo::Numbering;

/// Alt pipelinen trenger, sendt eksplisitt inn (ingen global tilstand).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompileConfig {
    pub gap_threshold: u32,
    pub author: String,
    pub sport_type: String,
    pub description: String,
    pub interval_off_hours: IntervalOffHours,
    pub numbering: Numbering,
    /// Kompiler grupper parallelt (rayon). Resultatrekkefølgen er den samme.
    pub parallel: bool,
}

impl Default for CompileConfig {
    fn default() -> Self {
        let meta = WorkoutMeta::default();
        Self {
            gap_threshold: DEFAULT_GAP_THRESHOLD,
            author: meta.author,
            sport_type: meta.sport_type,
            description: meta.description,
            interval_off_hours: IntervalOffHours::default(),
            numbering: Numbering::default(),
            parallel: false,
        }
    }
}

impl CompileConfig {
    pub fn meta(&self) -> WorkoutMeta {
        WorkoutMeta {
            author: self.author.clone(),
            description: self.description.clone(),
            sport_type: self.sport_type.clone(),
        }
    }

    pub fn classify_options(&self) -> ClassifyOptions {
        ClassifyOptions { off_hours: self.interval_off_hours }
    }
}

/// Parse konfig fra JSON; feil peker på stien i dokumentet.
pub fn parse_config(json_str: &str) -> Result<CompileConfig, CompileError> {
    let mut de = serde_json::Deserializer::from_str(json_str);
    spte::deserialize(&mut de).map_err(|e| CompileError::Config {
        path: e.path().to_string(),
        message: e.inner().to_string(),
    })
}

/// Leser konfig fra disk (JSON).
/// Hvis filen ikke finnes, returneres standardkonfig.
pub fn load_config(path: impl AsRef<Path>) -> Result<CompileConfig, CompileError> {
    let path = path.as_ref();
    if path.exists() {
        let contents = std::fs::read_to_string(path).map_err(|e| CompileError::io(path, e))?;
        let cfg = parse_config(&contents)?;
        info!("config loaded from {} (gap_threshold={})", path.display(), cfg.gap_threshold);
        Ok(cfg)
    } else {
        warn!("no config at {}, using defaults", path.display());
        Ok(CompileConfig::default())
    }
}

/// Lagrer konfig til disk som JSON (pretty-print).
pub fn save_config(cfg: &CompileConfig, path: impl AsRef<Path>) -> Result<(), CompileError> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(cfg).map_err(|e| CompileError::Config {
        path: ".".to_string(),
        message: e.to_string(),
    })?;
    std::fs::write(path, json).map_err(|e| CompileError::io(path, e))?;
    info!("config saved to {}", path.display());
    Ok(())
}
