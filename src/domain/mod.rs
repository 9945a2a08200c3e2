//! Core domain types shared by the scan, render and gather stages

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// How candidate files are enumerated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EnumerationMode {
    /// Files tracked in the git index
    #[default]
    Git,
    /// Every regular file under the root, git metadata excluded
    Filesystem,
}

impl EnumerationMode {
    pub fn from_no_git(no_git: bool) -> Self {
        if no_git {
            Self::Filesystem
        } else {
            Self::Git
        }
    }
}

/// Whether dotfiles survive the visibility stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Visibility {
    #[default]
    HideDotfiles,
    ShowAll,
}

impl Visibility {
    /// Resolve the `--all` / `--no-dotfiles` pair. `--all` always wins.
    pub fn from_flags(all: bool, no_dotfiles: bool) -> Self {
        match (all, no_dotfiles) {
            (true, _) => Self::ShowAll,
            (false, _) => Self::HideDotfiles,
        }
    }
}

/// A file that survived selection and is about to be rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    /// Absolute (or root-joined) path used for reading
    pub path: PathBuf,

    /// `/`-separated path relative to the repository root
    pub relative_path: String,
}

impl SelectedFile {
    pub fn new(root: &Path, relative_path: impl Into<String>) -> Self {
        let relative_path = relative_path.into();
        Self { path: root.join(&relative_path), relative_path }
    }
}

/// A file that was read and decoded successfully
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileContent {
    pub relative_path: String,
    pub text: String,
}

/// Counters for a single gather run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GatherStats {
    /// Paths produced by enumeration
    pub candidates: usize,

    /// Paths removed by the visibility stage
    pub hidden_skipped: usize,

    /// Paths removed by include/exclude patterns
    pub pattern_skipped: usize,

    /// Files whose content reached the output
    pub files_written: usize,

    /// Files skipped because they could not be read or decoded
    pub files_unreadable: usize,

    /// Size of the rendered document in bytes
    pub bytes_written: u64,
}

#[cfg(test)]
mod tests {
    use super::{EnumerationMode, SelectedFile, Visibility};
    use std::path::Path;

    #[test]
    fn all_flag_overrides_no_dotfiles() {
        assert_eq!(Visibility::from_flags(true, true), Visibility::ShowAll);
        assert_eq!(Visibility::from_flags(true, false), Visibility::ShowAll);
        assert_eq!(Visibility::from_flags(false, true), Visibility::HideDotfiles);
        assert_eq!(Visibility::from_flags(false, false), Visibility::HideDotfiles);
    }

    #[test]
    fn no_git_selects_filesystem_walk() {
        assert_eq!(EnumerationMode::from_no_git(true), EnumerationMode::Filesystem);
        assert_eq!(EnumerationMode::from_no_git(false), EnumerationMode::Git);
    }

    #[test]
    fn selected_file_joins_root() {
        let file = SelectedFile::new(Path::new("/repo"), "src/lib.rs");
        assert_eq!(file.path, Path::new("/repo/src/lib.rs"));
        assert_eq!(file.relative_path, "src/lib.rs");
    }
}
