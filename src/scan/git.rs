//! Tracked-file listing from the git index

use crate::error::GatherError;
use crate::utils::normalize_path;
use git2::Repository;
use std::collections::BTreeSet;
use std::path::Path;
use tracing::{debug, warn};

/// Index mode of a submodule entry
const GITLINK_MODE: u32 = 0o160000;

/// Files tracked in the index below `root`, relative to `root`.
///
/// `root` may be the work tree itself or any directory inside it, matching
/// `git -C <root> ls-files`.
pub fn tracked_files(root: &Path) -> Result<Vec<String>, GatherError> {
    let repo = Repository::discover(root)
        .map_err(|e| GatherError::invalid_repository(root, e.message().to_string()))?;
    let workdir = repo
        .workdir()
        .ok_or_else(|| GatherError::invalid_repository(root, "bare repository has no work tree"))?;

    let workdir = workdir
        .canonicalize()
        .map_err(|e| GatherError::invalid_repository(root, e.to_string()))?;
    let root_canonical =
        root.canonicalize().map_err(|e| GatherError::invalid_repository(root, e.to_string()))?;
    let prefix = root_canonical
        .strip_prefix(&workdir)
        .map(normalize_path)
        .map_err(|_| GatherError::invalid_repository(root, "path is outside the work tree"))?;
    debug!("Listing tracked files of {} (prefix '{}')", workdir.display(), prefix);

    let index = repo
        .index()
        .map_err(|e| GatherError::invalid_repository(root, e.message().to_string()))?;

    let mut files = BTreeSet::new();
    for entry in index.iter() {
        if entry.mode == GITLINK_MODE {
            debug!("Skipping submodule entry {}", String::from_utf8_lossy(&entry.path));
            continue;
        }
        let Ok(path) = std::str::from_utf8(&entry.path) else {
            warn!(
                "Skipping tracked path that is not valid UTF-8: {}",
                String::from_utf8_lossy(&entry.path)
            );
            continue;
        };
        if let Some(relative) = strip_dir_prefix(path, &prefix) {
            files.insert(relative.to_string());
        }
    }

    Ok(files.into_iter().collect())
}

fn strip_dir_prefix<'a>(path: &'a str, prefix: &str) -> Option<&'a str> {
    if prefix.is_empty() {
        return Some(path);
    }
    path.strip_prefix(prefix)?.strip_prefix('/')
}
