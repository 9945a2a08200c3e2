//! Filesystem enumeration for `--no-git`

use crate::error::GatherError;
use crate::utils::normalize_path;
use std::fs;
use std::path::Path;
use tracing::warn;
use walkdir::{DirEntry, WalkDir};

/// Name of the git metadata entry skipped during the walk
const GIT_DIR_NAME: &str = ".git";

/// Every regular file below `root`, relative to `root`.
///
/// Symlinks are listed when they resolve to a regular file; they are never
/// descended into.
pub fn walk_files(root: &Path) -> Result<Vec<String>, GatherError> {
    let mut files = Vec::new();

    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !is_git_metadata(entry));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.depth() == 0 => {
                return Err(GatherError::invalid_repository(root, err.to_string()));
            }
            Err(err) => {
                warn!("Skipping unreadable entry: {err}");
                continue;
            }
        };

        if !is_regular_file(&entry) {
            continue;
        }
        if let Ok(relative) = entry.path().strip_prefix(root) {
            files.push(normalize_path(relative));
        }
    }

    Ok(files)
}

fn is_git_metadata(entry: &DirEntry) -> bool {
    entry.depth() > 0 && entry.file_name() == GIT_DIR_NAME
}

fn is_regular_file(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    if file_type.is_file() {
        return true;
    }
    file_type.is_symlink() && fs::metadata(entry.path()).map(|m| m.is_file()).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::walk_files;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn walks_nested_files_and_skips_git_dir() {
        let dir = TempDir::new().expect("temp dir");
        let root = dir.path();
        fs::create_dir_all(root.join(".git/objects")).expect("mkdir .git");
        fs::write(root.join(".git/HEAD"), "ref: refs/heads/main\n").expect("write HEAD");
        fs::create_dir_all(root.join("dir2/subdir2")).expect("mkdir");
        fs::write(root.join("dir2/subdir2/file4.md"), "File 4 contents").expect("write");
        fs::write(root.join("file with spaces.txt"), "spaces").expect("write");
        fs::write(root.join(".env"), "SECRET=1").expect("write");

        let mut files = walk_files(root).expect("walk");
        files.sort();
        assert_eq!(files, vec![".env", "dir2/subdir2/file4.md", "file with spaces.txt"]);
    }

    #[test]
    fn empty_directory_yields_nothing() {
        let dir = TempDir::new().expect("temp dir");
        assert!(walk_files(dir.path()).expect("walk").is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn symlinks_to_files_are_listed() {
        let dir = TempDir::new().expect("temp dir");
        let root = dir.path();
        fs::write(root.join("file1.txt"), "File 1 contents").expect("write");
        std::os::unix::fs::symlink("file1.txt", root.join("symlink.txt")).expect("symlink");
        std::os::unix::fs::symlink("missing.txt", root.join("dangling.txt")).expect("symlink");

        let mut files = walk_files(root).expect("walk");
        files.sort();
        assert_eq!(files, vec!["file1.txt", "symlink.txt"]);
    }
}
