//! Path helpers

use std::path::{Component, Path, PathBuf};

/// Render a relative path with `/` separators, dropping `.` components.
pub fn normalize_path(path: &Path) -> String {
    path.components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            Component::ParentDir => Some("..".to_string()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Canonical location of a file that may not exist yet.
///
/// The parent directory is canonicalized and the file name re-attached.
/// Returns `None` when the parent cannot be resolved.
pub fn resolve_output_path(path: &Path) -> Option<PathBuf> {
    if let Ok(canonical) = path.canonicalize() {
        return Some(canonical);
    }
    let file_name = path.file_name()?;
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    parent.canonicalize().ok().map(|dir| dir.join(file_name))
}
