//! Include/exclude pattern matching
//!
//! A pattern is tested against the full relative path and the file name, so
//! `*.py` selects Python files at any depth. A pattern without wildcards is
//! also tested against every ancestor directory, so `docs` excludes
//! `docs/guide.md` while `*.py` does not select `x.py/readme.md`. `*` crosses
//! `/` as in shell `fnmatch`. Patterns are taken verbatim apart from trailing
//! slashes.

use crate::error::GatherError;
use globset::{GlobBuilder, GlobMatcher};
use std::fmt;

/// Anything that can decide whether a relative path matches
pub trait Pattern: fmt::Debug {
    fn matches(&self, path: &str) -> bool;
}

/// A compiled shell-style glob
#[derive(Debug, Clone)]
pub struct GlobPattern {
    matcher: GlobMatcher,
    literal: bool,
}

impl GlobPattern {
    pub fn new(pattern: &str) -> Result<Self, GatherError> {
        let normalized = match pattern.trim_end_matches('/') {
            "" => pattern,
            stripped => stripped,
        };
        let glob = GlobBuilder::new(normalized)
            .literal_separator(false)
            .backslash_escape(true)
            .build()
            .map_err(|source| GatherError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })?;
        let literal = !normalized.contains(['*', '?', '[', '{']);
        Ok(Self { matcher: glob.compile_matcher(), literal })
    }
}

impl Pattern for GlobPattern {
    fn matches(&self, path: &str) -> bool {
        let file_name = path.rsplit('/').next().unwrap_or(path);
        if self.matcher.is_match(path) || self.matcher.is_match(file_name) {
            return true;
        }
        self.literal && ancestors(path).any(|dir| self.matcher.is_match(dir))
    }
}

/// Each ancestor directory of `path` (`a`, `a/b`, ...).
fn ancestors(path: &str) -> impl Iterator<Item = &str> {
    path.match_indices('/').map(move |(idx, _)| &path[..idx])
}

/// Include patterns narrow, exclude patterns then remove.
#[derive(Debug, Default)]
pub struct PatternFilter {
    include: Vec<Box<dyn Pattern>>,
    exclude: Vec<Box<dyn Pattern>>,
}

impl PatternFilter {
    pub fn new(include: Vec<Box<dyn Pattern>>, exclude: Vec<Box<dyn Pattern>>) -> Self {
        Self { include, exclude }
    }

    pub fn from_globs(include: &[String], exclude: &[String]) -> Result<Self, GatherError> {
        Ok(Self::new(compile_globs(include)?, compile_globs(exclude)?))
    }

    pub fn is_noop(&self) -> bool {
        self.include.is_empty() && self.exclude.is_empty()
    }

    pub fn admits(&self, path: &str) -> bool {
        let included =
            self.include.is_empty() || self.include.iter().any(|pattern| pattern.matches(path));
        included && !self.exclude.iter().any(|pattern| pattern.matches(path))
    }
}

fn compile_globs(patterns: &[String]) -> Result<Vec<Box<dyn Pattern>>, GatherError> {
    patterns
        .iter()
        .map(|pattern| GlobPattern::new(pattern).map(|glob| Box::new(glob) as Box<dyn Pattern>))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{GlobPattern, Pattern, PatternFilter};
    use crate::error::GatherError;

    fn glob(pattern: &str) -> GlobPattern {
        GlobPattern::new(pattern).expect("valid glob")
    }

    fn filter(include: &[&str], exclude: &[&str]) -> PatternFilter {
        let include: Vec<String> = include.iter().map(|s| s.to_string()).collect();
        let exclude: Vec<String> = exclude.iter().map(|s| s.to_string()).collect();
        PatternFilter::from_globs(&include, &exclude).expect("valid globs")
    }

    #[test]
    fn matches_full_path_or_file_name() {
        assert!(glob("*.py").matches("a.py"));
        assert!(glob("*.py").matches("sub/deep/b.py"));
        assert!(glob("sub/*").matches("sub/b.py"));
        assert!(glob("b.py").matches("sub/b.py"));
        assert!(!glob("*.md").matches("sub/b.py"));
    }

    #[test]
    fn directory_patterns_cover_contents() {
        assert!(glob("dir4").matches("dir4/file9.md"));
        assert!(glob("dir4/subdir").matches("dir4/subdir/notes.txt"));
        assert!(glob("dir4/").matches("dir4/file9.md"));
        assert!(glob(".git").matches(".git/config"));
        assert!(!glob("dir4").matches("dir40/file.md"));
    }

    #[test]
    fn wildcards_do_not_match_directory_names() {
        assert!(!glob("*.py").matches("x.py/readme.md"));
        assert!(glob("*.py").matches("x.py/main.py"));
        assert!(glob("x.py").matches("x.py/readme.md"));
    }

    #[test]
    fn surrounding_whitespace_is_significant() {
        assert!(glob(" a.py").matches(" a.py"));
        assert!(glob(" a.py").matches("sub/ a.py"));
        assert!(!glob(" a.py").matches("a.py"));
        assert!(!glob("a.py").matches(" a.py"));
    }

    #[test]
    fn empty_filter_is_noop() {
        let noop = filter(&[], &[]);
        assert!(noop.is_noop());
        assert!(noop.admits("anything/at/all.bin"));
    }

    #[test]
    fn include_requires_one_match() {
        let f = filter(&["*.txt", "file4.rtf"], &[]);
        assert!(f.admits("file3.txt"));
        assert!(f.admits("file4.rtf"));
        assert!(!f.admits("file5.rtf"));
        assert!(!f.admits("file2.md"));
    }

    #[test]
    fn exclude_overrides_include() {
        let f = filter(&["*.txt", "file4.rtf"], &["file1.txt", "*.rtf"]);
        assert!(f.admits("file3.txt"));
        assert!(!f.admits("file1.txt"));
        assert!(!f.admits("file4.rtf"));
    }

    #[test]
    fn include_by_directory_then_exclude_by_extension() {
        let f = filter(&["file13.txt", "dir6"], &["*.txt", "dir1"]);
        assert!(!f.admits("dir5/file13.txt"));
        assert!(!f.admits("dir6/file14.txt"));
        assert!(!f.admits("dir1/file12.md"));
        assert!(!f.admits("file4.md"));
    }

    #[test]
    fn invalid_glob_is_reported() {
        let err = GlobPattern::new("src/[unclosed").err().expect("invalid glob");
        assert!(matches!(
            err,
            GatherError::InvalidPattern { ref pattern, .. } if pattern == "src/[unclosed"
        ));
    }

    #[test]
    fn custom_patterns_plug_in() {
        #[derive(Debug)]
        struct Prefix(&'static str);

        impl Pattern for Prefix {
            fn matches(&self, path: &str) -> bool {
                path.starts_with(self.0)
            }
        }

        let include: Vec<Box<dyn Pattern>> = vec![Box::new(Prefix("src/"))];
        let exclude: Vec<Box<dyn Pattern>> = vec![Box::new(Prefix("src/gen"))];
        let f = PatternFilter::new(include, exclude);
        assert!(f.admits("src/lib.rs"));
        assert!(!f.admits("src/generated.rs"));
        assert!(!f.admits("README.md"));
    }
}
