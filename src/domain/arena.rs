use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use generational_arena::{Arena, Index};
use serde::Deserialize;
use tracing::instrument;

use crate::domain::error::{DomainError, DomainResult};

/// Handle of a node inside a [`TreeArena`].
///
/// Children store only this index back to their parent, the arena owns every node.
pub type NodeIndex = Index;

/// Fixed classification of an organisation node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "String")]
pub enum NodeCategory {
    Department,
    Team,
    Project,
    Role,
    Employee,
}

impl NodeCategory {
    pub const ALL: [NodeCategory; 5] = [
        NodeCategory::Department,
        NodeCategory::Team,
        NodeCategory::Project,
        NodeCategory::Role,
        NodeCategory::Employee,
    ];

    pub fn name(self) -> &'static str {
        match self {
            NodeCategory::Department => "Department",
            NodeCategory::Team => "Team",
            NodeCategory::Project => "Project",
            NodeCategory::Role => "Role",
            NodeCategory::Employee => "Employee",
        }
    }
}

impl fmt::Display for NodeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NodeCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DomainError::UnknownCategory(wanted.to_string()))
    }
}

impl TryFrom<String> for NodeCategory {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Payload of a tree node: an organisational unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnterpriseNode {
    pub id: u32,
    pub name: String,
    pub category: NodeCategory,
    /// Short organisational code, e.g. "ENG"
    pub code: String,
    pub is_active: bool,
    pub is_hidden: bool,
    pub description: String,
    pub metadata: BTreeMap<String, String>,
}

impl EnterpriseNode {
    pub fn new(id: u32, name: impl Into<String>, category: NodeCategory) -> Self {
        Self {
            id,
            name: name.into(),
            category,
            code: String::new(),
            is_active: true,
            is_hidden: false,
            description: String::new(),
            metadata: BTreeMap::new(),
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    pub fn hidden(mut self, is_hidden: bool) -> Self {
        self.is_hidden = is_hidden;
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }
}

/// Tree node in the arena-based hierarchy structure.
#[derive(Debug)]
pub struct TreeNode {
    pub data: EnterpriseNode,
    /// Index of parent node in the arena, None for the root
    pub parent: Option<NodeIndex>,
    /// Indices of child nodes in the arena, in insertion order
    pub children: Vec<NodeIndex>,
}

/// Arena-based organisation hierarchy.
///
/// Nodes are only ever attached below an existing node, so the structure is
/// acyclic by construction and parent/child links always agree.
#[derive(Debug)]
pub struct TreeArena {
    arena: Arena<TreeNode>,
    root: Option<NodeIndex>,
}

impl Default for TreeArena {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeArena {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    /// Insert a node below `parent`, or as the root when `parent` is None.
    ///
    /// Fails if the parent index is stale or a second root is inserted.
    #[instrument(level = "trace", skip(self, data), fields(id = data.id, name = %data.name))]
    pub fn insert_node(
        &mut self,
        data: EnterpriseNode,
        parent: Option<NodeIndex>,
    ) -> DomainResult<NodeIndex> {
        match parent {
            Some(parent_idx) => {
                if !self.arena.contains(parent_idx) {
                    return Err(DomainError::NodeNotFound(format!(
                        "parent of node {}",
                        data.id
                    )));
                }
                let node_idx = self.arena.insert(TreeNode {
                    data,
                    parent: Some(parent_idx),
                    children: Vec::new(),
                });
                if let Some(parent) = self.arena.get_mut(parent_idx) {
                    parent.children.push(node_idx);
                }
                Ok(node_idx)
            }
            None => {
                if let Some(existing) = self.root.and_then(|r| self.arena.get(r)) {
                    return Err(DomainError::MultipleRoots(vec![existing.data.id, data.id]));
                }
                let node_idx = self.arena.insert(TreeNode {
                    data,
                    parent: None,
                    children: Vec::new(),
                });
                self.root = Some(node_idx);
                Ok(node_idx)
            }
        }
    }

    pub fn get_node(&self, idx: NodeIndex) -> Option<&TreeNode> {
        self.arena.get(idx)
    }

    pub fn root(&self) -> Option<NodeIndex> {
        self.root
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    pub fn parent(&self, idx: NodeIndex) -> Option<NodeIndex> {
        self.get_node(idx).and_then(|n| n.parent)
    }

    /// Distance from the hierarchy root (root = 0).
    pub fn depth(&self, idx: NodeIndex) -> usize {
        self.traverse_up(idx).count().saturating_sub(1)
    }

    /// Self first, then ancestors nearest to farthest, ending at the root.
    pub fn traverse_up(&self, idx: NodeIndex) -> Ancestors<'_> {
        Ancestors {
            arena: self,
            next: Some(idx),
        }
    }

    /// Pre-order walk of the subtree rooted at `idx`.
    pub fn traverse_down(&self, idx: NodeIndex) -> PreOrder<'_> {
        PreOrder {
            arena: self,
            stack: vec![idx],
        }
    }

    /// Pre-order walk of the whole hierarchy.
    pub fn iter(&self) -> PreOrder<'_> {
        PreOrder {
            arena: self,
            stack: self.root.into_iter().collect(),
        }
    }

    #[instrument(level = "trace", skip(self))]
    pub fn find_by_id(&self, id: u32) -> Option<NodeIndex> {
        self.iter()
            .find(|(_, node)| node.data.id == id)
            .map(|(idx, _)| idx)
    }

    /// First node in pre-order whose name equals `name`, ignoring case.
    #[instrument(level = "trace", skip(self))]
    pub fn find_by_name(&self, name: &str) -> Option<NodeIndex> {
        let wanted = name.to_lowercase();
        self.iter()
            .find(|(_, node)| node.data.name.to_lowercase() == wanted)
            .map(|(idx, _)| idx)
    }

    /// `"{Category}: {Name} (Code: {code}, Level: {depth})"`
    pub fn describe(&self, idx: NodeIndex) -> Option<String> {
        let node = self.get_node(idx)?;
        Some(format!(
            "{}: {} (Code: {}, Level: {})",
            node.data.category,
            node.data.name,
            node.data.code,
            self.depth(idx)
        ))
    }
}

/// Upward walk produced by [`TreeArena::traverse_up`].
#[derive(Debug, Clone)]
pub struct Ancestors<'a> {
    arena: &'a TreeArena,
    next: Option<NodeIndex>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = (NodeIndex, &'a TreeNode);

    fn next(&mut self) -> Option<Self::Item> {
        let current_idx = self.next?;
        let node = self.arena.get_node(current_idx)?;
        self.next = node.parent;
        Some((current_idx, node))
    }
}

/// Pre-order walk produced by [`TreeArena::traverse_down`] and [`TreeArena::iter`].
#[derive(Debug, Clone)]
pub struct PreOrder<'a> {
    arena: &'a TreeArena,
    stack: Vec<NodeIndex>,
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = (NodeIndex, &'a TreeNode);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current_idx) = self.stack.pop() {
            if let Some(node) = self.arena.get_node(current_idx) {
                // Push children in reverse order for left-to-right traversal
                self.stack.extend(node.children.iter().rev());
                return Some((current_idx, node));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    //      root
    //      /  \
    // child1 child2
    //    |
    // grandchild1
    fn small_tree() -> (TreeArena, [NodeIndex; 4]) {
        let mut tree = TreeArena::new();
        let root = tree
            .insert_node(EnterpriseNode::new(1, "root", NodeCategory::Department), None)
            .unwrap();
        let child1 = tree
            .insert_node(EnterpriseNode::new(2, "child1", NodeCategory::Team), Some(root))
            .unwrap();
        let child2 = tree
            .insert_node(EnterpriseNode::new(3, "child2", NodeCategory::Team), Some(root))
            .unwrap();
        let grandchild1 = tree
            .insert_node(
                EnterpriseNode::new(4, "grandchild1", NodeCategory::Project),
                Some(child1),
            )
            .unwrap();
        (tree, [root, child1, child2, grandchild1])
    }

    #[test]
    fn test_insert_links_parent_and_child() {
        let (tree, [root, child1, child2, grandchild1]) = small_tree();

        assert_eq!(tree.root(), Some(root));
        assert_eq!(tree.get_node(root).unwrap().children, vec![child1, child2]);
        assert_eq!(tree.parent(grandchild1), Some(child1));
        assert_eq!(tree.len(), 4);
    }

    #[test]
    fn test_second_root_is_rejected() {
        let (mut tree, _) = small_tree();
        let result = tree.insert_node(EnterpriseNode::new(9, "other", NodeCategory::Team), None);
        assert_eq!(result, Err(DomainError::MultipleRoots(vec![1, 9])));
    }

    #[test]
    fn test_depth() {
        let (tree, [root, child1, child2, grandchild1]) = small_tree();
        assert_eq!(tree.depth(root), 0);
        assert_eq!(tree.depth(child1), 1);
        assert_eq!(tree.depth(child2), 1);
        assert_eq!(tree.depth(grandchild1), 2);
    }

    #[test]
    fn test_traversal_is_restartable() {
        let (tree, [_, _, _, grandchild1]) = small_tree();
        let up = tree.traverse_up(grandchild1);
        let first: Vec<_> = up.clone().map(|(i, _)| i).collect();
        let second: Vec<_> = up.map(|(i, _)| i).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_find() {
        let (tree, [_, child1, _, _]) = small_tree();
        assert_eq!(tree.find_by_name("CHILD1"), Some(child1));
        assert_eq!(tree.find_by_id(2), Some(child1));
        assert_eq!(tree.find_by_id(42), None);
    }

    #[test]
    fn test_describe() {
        let mut tree = TreeArena::new();
        let idx = tree
            .insert_node(
                EnterpriseNode::new(1, "Engineering", NodeCategory::Department).with_code("ENG"),
                None,
            )
            .unwrap();
        assert_eq!(
            tree.describe(idx).unwrap(),
            "Department: Engineering (Code: ENG, Level: 0)"
        );
    }
}
