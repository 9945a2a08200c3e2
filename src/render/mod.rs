//! Output document rendering
//!
//! Each file becomes a block:
//!
//! ````text
//! File: src/lib.rs
//! ```
//! <contents>
//! ```
//!
//! ````
//!
//! An optional directory tree block precedes the file blocks.

use crate::domain::FileContent;

pub mod tree;

pub use tree::render_tree;

/// Prefix of the header line preceding each file
pub const FILE_HEADER_PREFIX: &str = "File: ";

const MIN_FENCE_LEN: usize = 3;

/// Render the whole document for already-sorted files.
pub fn render_document(files: &[FileContent], include_tree: bool) -> String {
    let mut output = String::new();

    if include_tree {
        let paths: Vec<&str> = files.iter().map(|f| f.relative_path.as_str()).collect();
        output.push_str("```\n");
        output.push_str(&render_tree(&paths));
        output.push_str("```\n\n");
    }

    for file in files {
        push_file_block(&mut output, file);
    }

    output
}

/// Append one `File:` block, terminated by a blank line.
pub fn push_file_block(output: &mut String, file: &FileContent) {
    let fence = fence_for(&file.text);

    output.push_str(FILE_HEADER_PREFIX);
    output.push_str(&file.relative_path);
    output.push('\n');
    output.push_str(&fence);
    output.push('\n');
    output.push_str(&file.text);
    if !file.text.is_empty() && !file.text.ends_with('\n') {
        output.push('\n');
    }
    output.push_str(&fence);
    output.push_str("\n\n");
}

/// A backtick fence longer than any backtick run inside `text`.
fn fence_for(text: &str) -> String {
    let longest_run = text
        .split(|c: char| c != '`')
        .map(str::len)
        .max()
        .unwrap_or(0);
    "`".repeat((longest_run + 1).max(MIN_FENCE_LEN))
}

#[cfg(test)]
mod tests {
    use super::{fence_for, render_document};
    use crate::domain::FileContent;

    fn file(path: &str, text: &str) -> FileContent {
        FileContent { relative_path: path.to_string(), text: text.to_string() }
    }

    #[test]
    fn renders_header_contents_and_separator() {
        let files = [file("a.py", "print('a')\n"), file("sub/b.py", "x = 1")];
        assert_eq!(
            render_document(&files, false),
            "File: a.py\n```\nprint('a')\n```\n\nFile: sub/b.py\n```\nx = 1\n```\n\n"
        );
    }

    #[test]
    fn empty_file_gets_empty_block() {
        assert_eq!(render_document(&[file("empty.txt", "")], false), "File: empty.txt\n```\n```\n\n");
    }

    #[test]
    fn fence_outgrows_embedded_backticks() {
        assert_eq!(fence_for("no ticks"), "```");
        assert_eq!(fence_for("inline `code`"), "```");
        assert_eq!(fence_for("```rust\nfn main() {}\n```\n"), "````");
        assert_eq!(fence_for("`````"), "``````");
    }

    #[test]
    fn tree_block_comes_first() {
        let doc = render_document(&[file("a.py", "1\n")], true);
        assert!(doc.starts_with("```\n.\n└── a.py\n```\n\nFile: a.py\n"));
    }

    #[test]
    fn no_files_without_tree_is_empty() {
        assert_eq!(render_document(&[], false), "");
        assert_eq!(render_document(&[], true), "```\n.\n```\n\n");
    }
}
