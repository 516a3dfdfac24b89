/*
Rendering of hierarchies for the terminal.

`TreeNodeConvert` turns an arena into a `termtree::Tree`, `indented` produces the
dash-indented listing used for view results.
 */
use termtree::Tree;
use tracing::instrument;

use crate::domain::arena::{NodeIndex, TreeArena};

pub trait TreeNodeConvert {
    fn to_tree_string(&self) -> Tree<String>;
}

impl TreeNodeConvert for TreeArena {
    #[instrument(level = "debug", skip(self))]
    fn to_tree_string(&self) -> Tree<String> {
        fn build_tree(arena: &TreeArena, node_idx: NodeIndex) -> Tree<String> {
            let label = arena.describe(node_idx).unwrap_or_default();
            let leaves: Vec<_> = arena
                .get_node(node_idx)
                .map(|node| {
                    node.children
                        .iter()
                        .map(|&child_idx| build_tree(arena, child_idx))
                        .collect()
                })
                .unwrap_or_default();
            Tree::new(label).with_leaves(leaves)
        }

        match self.root() {
            Some(root_idx) => build_tree(self, root_idx),
            None => Tree::new("Empty tree".to_string()),
        }
    }
}

/// One listing line: `indent` repeated twice per level, then the node description.
pub fn indented(arena: &TreeArena, idx: NodeIndex, indent: &str) -> String {
    let prefix = indent.repeat(arena.depth(idx) * 2);
    format!("{}{}", prefix, arena.describe(idx).unwrap_or_default())
}
