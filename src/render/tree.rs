//! `tree`-style listing of the gathered files

use std::collections::BTreeMap;

#[derive(Default)]
struct TreeNode {
    children: BTreeMap<String, TreeNode>,
}

impl TreeNode {
    fn insert(&mut self, relative_path: &str) {
        let mut node = self;
        for segment in relative_path.split('/').filter(|s| !s.is_empty()) {
            node = node.children.entry(segment.to_string()).or_default();
        }
    }
}

/// Render `paths` as a tree rooted at `.`, one entry per line.
///
/// Entries are sorted by name; the output always ends with a newline.
pub fn render_tree<S: AsRef<str>>(paths: &[S]) -> String {
    let mut root = TreeNode::default();
    for path in paths {
        root.insert(path.as_ref());
    }

    let mut output = String::from(".\n");
    render_children(&root, "", &mut output);
    output
}

fn render_children(node: &TreeNode, prefix: &str, output: &mut String) {
    let count = node.children.len();
    for (idx, (name, child)) in node.children.iter().enumerate() {
        let last = idx + 1 == count;
        output.push_str(prefix);
        output.push_str(if last { "└── " } else { "├── " });
        output.push_str(name);
        output.push('\n');

        if !child.children.is_empty() {
            let child_prefix = format!("{prefix}{}", if last { "    " } else { "│   " });
            render_children(child, &child_prefix, output);
        }
    }
}
