//! Error types for a gather run
//!
//! `GatherError` aborts the whole run. `FileReadWarning` is scoped to a
//! single candidate file, which is skipped.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors that abort a gather run
#[derive(Error, Debug)]
pub enum GatherError {
    #[error("Invalid repository '{}': {reason}", path.display())]
    InvalidRepository { path: PathBuf, reason: String },

    #[error("Failed to write output file '{}': {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid glob pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Failed to load configuration: {0}")]
    Config(#[from] Box<figment::Error>),
}

impl GatherError {
    pub(crate) fn invalid_repository(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::InvalidRepository { path: path.into(), reason: reason.into() }
    }
}

/// Why a single candidate file was left out of the output
#[derive(Error, Debug)]
pub enum FileReadWarning {
    #[error("could not read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{path}' looks like a binary file")]
    Binary { path: String },

    #[error("'{path}' could not be decoded as text (best guess: {encoding})")]
    Undecodable { path: String, encoding: &'static str },
}

impl FileReadWarning {
    /// Relative path of the skipped file.
    pub fn path(&self) -> &str {
        match self {
            Self::Io { path, .. } | Self::Binary { path } | Self::Undecodable { path, .. } => path,
        }
    }
}
