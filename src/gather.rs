//! The gather pipeline: enumerate, select, read, render, write

use crate::config::Config;
use crate::domain::{EnumerationMode, FileContent, GatherStats, SelectedFile};
use crate::error::{FileReadWarning, GatherError};
use crate::render::render_document;
use crate::scan::{enumerate_candidates, Selection};
use crate::utils::{normalize_path, read_text_file, resolve_output_path};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Result of a successful run
#[derive(Debug, Default)]
pub struct GatherOutcome {
    pub stats: GatherStats,

    /// Files left out because they could not be read or decoded
    pub skipped: Vec<FileReadWarning>,
}

/// Gather the files of `repo_path` into `output_file`.
///
/// Enumeration, pattern and write failures abort the run. A file that cannot
/// be read or decoded is skipped and reported in [`GatherOutcome::skipped`].
pub fn gather(
    repo_path: &Path,
    output_file: &Path,
    config: &Config,
) -> Result<GatherOutcome, GatherError> {
    let selection = Selection::from_config(config)?;
    let mode = EnumerationMode::from_no_git(config.no_git);

    let mut candidates = enumerate_candidates(repo_path, mode)?;
    if let Some(own_path) = output_relative_path(repo_path, output_file) {
        candidates.retain(|candidate| *candidate != own_path);
    }

    let mut outcome = GatherOutcome::default();
    let selected = selection.select(candidates, &mut outcome.stats);
    debug!(
        "Selected {} of {} candidates ({} hidden, {} filtered by pattern)",
        selected.len(),
        outcome.stats.candidates,
        outcome.stats.hidden_skipped,
        outcome.stats.pattern_skipped
    );

    let mut files = Vec::with_capacity(selected.len());
    for relative_path in selected {
        let file = SelectedFile::new(repo_path, relative_path);
        debug!("Processing file: {}", file.relative_path);
        match read_text_file(&file) {
            Ok(text) => files.push(FileContent { relative_path: file.relative_path, text }),
            Err(warning) => {
                warn!("Skipping {warning}");
                outcome.skipped.push(warning);
            }
        }
    }
    outcome.stats.files_written = files.len();
    outcome.stats.files_unreadable = outcome.skipped.len();

    let document = render_document(&files, config.tree);
    fs::write(output_file, &document)
        .map_err(|source| GatherError::OutputWrite { path: output_file.to_path_buf(), source })?;
    outcome.stats.bytes_written = document.len() as u64;

    info!(
        "Wrote {} files ({} bytes) to {}; skipped {} unreadable",
        outcome.stats.files_written,
        outcome.stats.bytes_written,
        output_file.display(),
        outcome.stats.files_unreadable
    );

    Ok(outcome)
}

/// Relative path of `output_file` when it lives inside `repo_path`.
fn output_relative_path(repo_path: &Path, output_file: &Path) -> Option<String> {
    let root = repo_path.canonicalize().ok()?;
    let output = resolve_output_path(output_file)?;
    output.strip_prefix(&root).ok().map(normalize_path)
}
