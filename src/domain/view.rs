//! Views over a [`TreeArena`]: each variant decides which nodes it exposes,
//! independent of how the nodes are stored.

use std::collections::BTreeSet;
use std::fmt;
use std::slice;
use std::str::FromStr;

use tracing::instrument;

use crate::domain::arena::{
    Ancestors, EnterpriseNode, NodeCategory, NodeIndex, PreOrder, TreeArena, TreeNode,
};
use crate::domain::error::DomainError;

/// Query descriptor shared by all views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeViewOptions {
    pub categories: BTreeSet<NodeCategory>,
    /// Maximum absolute depth, `usize::MAX` for no limit
    pub max_depth: usize,
    pub include_hidden: bool,
    pub include_inactive: bool,
    /// Case-insensitive substring filter on the node name
    pub search: Option<String>,
}

impl Default for TreeViewOptions {
    fn default() -> Self {
        Self {
            categories: BTreeSet::from([
                NodeCategory::Department,
                NodeCategory::Team,
                NodeCategory::Project,
            ]),
            max_depth: usize::MAX,
            include_hidden: false,
            include_inactive: false,
            search: None,
        }
    }
}

impl TreeViewOptions {
    /// Options permitting exactly `categories`, everything else as in the default.
    pub fn with_categories(categories: impl IntoIterator<Item = NodeCategory>) -> Self {
        Self {
            categories: categories.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn include_hidden(mut self, include: bool) -> Self {
        self.include_hidden = include;
        self
    }

    pub fn include_inactive(mut self, include: bool) -> Self {
        self.include_inactive = include;
        self
    }

    /// Category, search term and visibility checks. Depth is left to the view.
    pub fn matches(&self, node: &EnterpriseNode) -> bool {
        if !self.categories.contains(&node.category) {
            return false;
        }
        if node.is_hidden && !self.include_hidden {
            return false;
        }
        if !node.is_active && !self.include_inactive {
            return false;
        }
        match self.search.as_deref() {
            Some(term) if !term.is_empty() => {
                node.name.to_lowercase().contains(&term.to_lowercase())
            }
            _ => true,
        }
    }
}

/// The selectable views over a hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TreeView {
    /// The start node and its ancestors, never the hierarchy root
    Ancestor,
    /// Pre-order subtree, bounded by `max_depth`
    Descendants,
    /// Same selection as `Descendants`
    Filtered,
    /// Children of the start node's parent, start node included
    Sibling,
}

impl TreeView {
    pub const ALL: [TreeView; 4] = [
        TreeView::Ancestor,
        TreeView::Descendants,
        TreeView::Filtered,
        TreeView::Sibling,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TreeView::Ancestor => "ancestor",
            TreeView::Descendants => "descendants",
            TreeView::Filtered => "filtered",
            TreeView::Sibling => "sibling",
        }
    }

    /// Lazily select the nodes this view exposes from `root`.
    ///
    /// An unknown `root` or a query nothing matches yields an empty sequence.
    #[instrument(level = "debug", skip(self, arena, options), fields(view = self.name()))]
    pub fn nodes<'a>(
        self,
        arena: &'a TreeArena,
        root: NodeIndex,
        options: &'a TreeViewOptions,
    ) -> ViewNodes<'a> {
        let candidates = match self {
            TreeView::Ancestor => Candidates::Up(arena.traverse_up(root)),
            TreeView::Descendants | TreeView::Filtered => {
                Candidates::Down(arena.traverse_down(root))
            }
            TreeView::Sibling => match arena.get_node(root) {
                None => Candidates::Lone(None),
                Some(node) => match node.parent.and_then(|p| arena.get_node(p)) {
                    Some(parent) => Candidates::Siblings(parent.children.iter()),
                    None => Candidates::Lone(Some((root, node))),
                },
            },
        };
        ViewNodes {
            view: self,
            arena,
            options,
            candidates,
        }
    }
}

impl fmt::Display for TreeView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TreeView {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        let key = match lowered.as_str() {
            "ancestors" => "ancestor",
            "siblings" => "sibling",
            other => other,
        };
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.name() == key)
            .ok_or_else(|| DomainError::UnknownView(s.trim().to_string()))
    }
}

#[derive(Debug, Clone)]
enum Candidates<'a> {
    Up(Ancestors<'a>),
    Down(PreOrder<'a>),
    Siblings(slice::Iter<'a, NodeIndex>),
    /// A parentless start node is returned as is, without filtering
    Lone(Option<(NodeIndex, &'a TreeNode)>),
}

/// Lazy result of [`TreeView::nodes`]. Cloning restarts from the current position.
#[derive(Debug, Clone)]
pub struct ViewNodes<'a> {
    view: TreeView,
    arena: &'a TreeArena,
    options: &'a TreeViewOptions,
    candidates: Candidates<'a>,
}

impl<'a> ViewNodes<'a> {
    fn accepts(&self, idx: NodeIndex, node: &TreeNode) -> bool {
        let depth_ok = match self.view {
            TreeView::Ancestor => self.arena.depth(idx) > 0,
            TreeView::Descendants | TreeView::Filtered => {
                self.arena.depth(idx) <= self.options.max_depth
            }
            TreeView::Sibling => true,
        };
        depth_ok && self.options.matches(&node.data)
    }
}

impl<'a> Iterator for ViewNodes<'a> {
    type Item = (NodeIndex, &'a TreeNode);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (idx, node) = match &mut self.candidates {
                Candidates::Lone(slot) => return slot.take(),
                Candidates::Up(it) => it.next()?,
                Candidates::Down(it) => it.next()?,
                Candidates::Siblings(it) => {
                    let idx = *it.next()?;
                    match self.arena.get_node(idx) {
                        Some(node) => (idx, node),
                        None => continue,
                    }
                }
            };
            if self.accepts(idx, node) {
                return Some((idx, node));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = TreeViewOptions::default();
        assert_eq!(options.categories.len(), 3);
        assert!(!options.categories.contains(&NodeCategory::Role));
        assert_eq!(options.max_depth, usize::MAX);
        assert!(!options.include_hidden);
        assert!(!options.include_inactive);
        assert!(options.search.is_none());
    }

    #[test]
    fn test_matches_search_ignores_case() {
        let options = TreeViewOptions::default().search("TEAM");
        assert!(options.matches(&EnterpriseNode::new(1, "Backend Team", NodeCategory::Team)));
        assert!(!options.matches(&EnterpriseNode::new(2, "API Project", NodeCategory::Project)));
    }

    #[test]
    fn test_matches_empty_search_is_no_filter() {
        let options = TreeViewOptions::default().search("");
        assert!(options.matches(&EnterpriseNode::new(1, "API Project", NodeCategory::Project)));
    }

    #[test]
    fn test_matches_visibility_flags() {
        let hidden = EnterpriseNode::new(1, "Skunkworks", NodeCategory::Project).hidden(true);
        let inactive = EnterpriseNode::new(2, "Legacy", NodeCategory::Team).active(false);

        let strict = TreeViewOptions::default();
        assert!(!strict.matches(&hidden));
        assert!(!strict.matches(&inactive));

        let lenient = TreeViewOptions::default()
            .include_hidden(true)
            .include_inactive(true);
        assert!(lenient.matches(&hidden));
        assert!(lenient.matches(&inactive));
    }

    #[test]
    fn test_view_from_str() {
        assert_eq!("Ancestor".parse::<TreeView>(), Ok(TreeView::Ancestor));
        assert_eq!("ancestors".parse::<TreeView>(), Ok(TreeView::Ancestor));
        assert_eq!("descendants".parse::<TreeView>(), Ok(TreeView::Descendants));
        assert_eq!("siblings".parse::<TreeView>(), Ok(TreeView::Sibling));
        assert!("cousins".parse::<TreeView>().is_err());
    }
}
