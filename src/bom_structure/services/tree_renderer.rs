use crate::bom_structure::domain::{BomTree, NodeId};
use std::fmt::Write;

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const VERTICAL: &str = "│   ";
const SPACE: &str = "    ";

/// Draws a [`BomTree`] as text, one node per line with box-drawing guides.
///
/// ```text
///  -- Part Number -- 1
/// └── 1 -- P100 -- 2
///     └── 1.1 -- P200 -- 4
/// ```
pub struct TreeRenderer;

impl TreeRenderer {
    pub fn render(tree: &BomTree) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", tree.root());
        let mut guides = String::new();
        Self::render_children(tree, NodeId::ROOT, &mut guides, &mut out);
        out
    }

    fn render_children(tree: &BomTree, parent: NodeId, guides: &mut String, out: &mut String) {
        let children = tree[parent].children();
        for (i, &child) in children.iter().enumerate() {
            let last = i + 1 == children.len();
            let branch = if last { LAST_BRANCH } else { BRANCH };
            let _ = writeln!(out, "{}{}{}", guides, branch, tree[child]);

            let mark = guides.len();
            guides.push_str(if last { SPACE } else { VERTICAL });
            Self::render_children(tree, child, guides, out);
            guides.truncate(mark);
        }
    }
}
