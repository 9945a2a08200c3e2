//! Dotfile visibility

use crate::domain::Visibility;

/// True when any `/`-separated component starts with `.`.
pub fn is_dotfile(relative_path: &str) -> bool {
    relative_path.split('/').any(|segment| segment.starts_with('.'))
}

pub fn is_visible(relative_path: &str, visibility: Visibility) -> bool {
    match visibility {
        Visibility::ShowAll => true,
        Visibility::HideDotfiles => !is_dotfile(relative_path),
    }
}

#[cfg(test)]
mod tests {
    use super::{is_dotfile, is_visible};
    use crate::domain::Visibility;

    #[test]
    fn any_hidden_segment_makes_a_dotfile() {
        assert!(is_dotfile(".env"));
        assert!(is_dotfile(".github/workflows/ci.yml"));
        assert!(is_dotfile("config/.secrets/key"));
        assert!(!is_dotfile("src/main.rs"));
        assert!(!is_dotfile("docs/v1.2/notes.md"));
    }

    #[test]
    fn show_all_keeps_dotfiles() {
        assert!(is_visible(".env", Visibility::ShowAll));
        assert!(!is_visible(".env", Visibility::HideDotfiles));
        assert!(is_visible("a.py", Visibility::HideDotfiles));
    }
}
