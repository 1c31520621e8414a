use std::path::PathBuf;

use thiserror::Error;

/// Ingen grammatikk matchet steget.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("couldn't parse step {raw_text:?}: {reason}")]
pub struct ParseError {
    pub raw_text: String,
    pub reason: String,
}

impl ParseError {
    pub fn no_grammar(raw_text: &str) -> Self {
        Self {
            raw_text: raw_text.to_string(),
            reason: "no step grammar matched".to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum CompileError {
    #[error("segmentation produced {groups} workouts but only {titles} titles were supplied")]
    TitleMismatch { groups: usize, titles: usize },

    #[error("config parse error at {path}: {message}")]
    Config { path: String, message: String },

    #[error("failed to fetch {target}: {message}")]
    Fetch { target: String, message: String },

    #[error("two workouts would be written to {file_name:?}")]
    DuplicateFileName { file_name: String },

    #[error("i/o error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CompileError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CompileError::Io { path: path.into(), source }
    }
}
