//! Candidate enumeration and file selection
//!
//! Enumeration yields `/`-separated paths relative to the repository root.
//! Selection runs the visibility stage and then the pattern stage; a path
//! must pass both.

use crate::config::Config;
use crate::domain::{EnumerationMode, GatherStats, Visibility};
use crate::error::GatherError;
use std::collections::BTreeSet;
use std::path::Path;
use tracing::trace;

pub mod git;
pub mod pattern;
pub mod visibility;
pub mod walk;

pub use pattern::{GlobPattern, Pattern, PatternFilter};
pub use visibility::is_dotfile;

/// List candidate paths under `root`.
pub fn enumerate_candidates(
    root: &Path,
    mode: EnumerationMode,
) -> Result<Vec<String>, GatherError> {
    if !root.is_dir() {
        return Err(GatherError::invalid_repository(root, "not an existing directory"));
    }
    match mode {
        EnumerationMode::Git => git::tracked_files(root),
        EnumerationMode::Filesystem => walk::walk_files(root),
    }
}

/// Visibility and pattern stages applied to a candidate list
#[derive(Debug)]
pub struct Selection {
    visibility: Visibility,
    patterns: PatternFilter,
}

impl Selection {
    pub fn new(visibility: Visibility, patterns: PatternFilter) -> Self {
        Self { visibility, patterns }
    }

    pub fn from_config(config: &Config) -> Result<Self, GatherError> {
        Ok(Self::new(
            Visibility::from_flags(config.all, config.no_dotfiles),
            PatternFilter::from_globs(&config.include, &config.exclude)?,
        ))
    }

    /// Surviving paths, deduplicated and in lexicographic order.
    pub fn select<I>(&self, candidates: I, stats: &mut GatherStats) -> Vec<String>
    where
        I: IntoIterator<Item = String>,
    {
        let check_patterns = !self.patterns.is_noop();
        let mut selected = BTreeSet::new();
        for path in candidates {
            stats.candidates += 1;
            if !visibility::is_visible(&path, self.visibility) {
                trace!("Hidden: {path}");
                stats.hidden_skipped += 1;
                continue;
            }
            if check_patterns && !self.patterns.admits(&path) {
                trace!("Filtered by pattern: {path}");
                stats.pattern_skipped += 1;
                continue;
            }
            selected.insert(path);
        }
        selected.into_iter().collect()
    }
}
