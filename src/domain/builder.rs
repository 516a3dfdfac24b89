//! Hierarchy builder: turns a flat list of node declarations into a [`TreeArena`].

use std::collections::{BTreeMap, HashMap, HashSet};

use serde::Deserialize;
use tracing::debug;

use crate::domain::arena::{EnterpriseNode, NodeCategory, NodeIndex, TreeArena};
use crate::domain::error::{DomainError, DomainResult};

fn default_true() -> bool {
    true
}

/// One node declaration, as found in a `[[node]]` table of a hierarchy file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NodeSpec {
    pub id: u32,
    pub name: String,
    pub category: NodeCategory,
    #[serde(default)]
    pub parent: Option<u32>,
    #[serde(default)]
    pub code: String,
    #[serde(default = "default_true")]
    pub active: bool,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,
}

impl NodeSpec {
    pub fn new(id: u32, name: impl Into<String>, category: NodeCategory, parent: Option<u32>) -> Self {
        Self {
            id,
            name: name.into(),
            category,
            parent,
            code: String::new(),
            active: true,
            hidden: false,
            description: String::new(),
            metadata: BTreeMap::new(),
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    fn to_node(&self) -> EnterpriseNode {
        EnterpriseNode {
            id: self.id,
            name: self.name.clone(),
            category: self.category,
            code: self.code.clone(),
            is_active: self.active,
            is_hidden: self.hidden,
            description: self.description.clone(),
            metadata: self.metadata.clone(),
        }
    }
}

/// Top-level layout of a hierarchy file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HierarchySpec {
    #[serde(rename = "node", default)]
    pub nodes: Vec<NodeSpec>,
}

/// Constructs a single-rooted hierarchy from node declarations.
///
/// Children keep the order in which they were declared.
#[derive(Debug, Default)]
pub struct HierarchyBuilder {
    specs: Vec<NodeSpec>,
}

impl From<HierarchySpec> for HierarchyBuilder {
    fn from(spec: HierarchySpec) -> Self {
        Self { specs: spec.nodes }
    }
}

impl HierarchyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node(mut self, spec: NodeSpec) -> Self {
        self.specs.push(spec);
        self
    }

    pub fn build(&self) -> DomainResult<TreeArena> {
        if self.specs.is_empty() {
            return Err(DomainError::EmptyHierarchy);
        }

        let mut seen = HashSet::new();
        for spec in &self.specs {
            if !seen.insert(spec.id) {
                return Err(DomainError::DuplicateNode(spec.id));
            }
        }

        // Relationship cache: parent id -> child positions, in declaration order
        let mut children: HashMap<u32, Vec<usize>> = HashMap::new();
        let mut roots = Vec::new();
        for (pos, spec) in self.specs.iter().enumerate() {
            match spec.parent {
                Some(parent) if !seen.contains(&parent) => {
                    return Err(DomainError::UnknownParent {
                        node: spec.id,
                        parent,
                    });
                }
                Some(parent) => children.entry(parent).or_default().push(pos),
                None => roots.push(pos),
            }
        }

        let root_pos = match roots.as_slice() {
            [single] => *single,
            [] => {
                // Every node has a parent, so the parent links must loop
                let mut ids: Vec<u32> = self.specs.iter().map(|s| s.id).collect();
                ids.sort_unstable();
                return Err(DomainError::CycleDetected(ids));
            }
            many => {
                return Err(DomainError::MultipleRoots(
                    many.iter().map(|&p| self.specs[p].id).collect(),
                ))
            }
        };

        let mut tree = TreeArena::new();
        let mut stack: Vec<(usize, Option<NodeIndex>)> = vec![(root_pos, None)];
        let mut placed = HashSet::new();

        while let Some((pos, parent_idx)) = stack.pop() {
            let spec = &self.specs[pos];
            placed.insert(spec.id);
            let current_idx = tree.insert_node(spec.to_node(), parent_idx)?;

            if let Some(kids) = children.get(&spec.id) {
                // Reverse so the first declared child is attached first
                for &kid in kids.iter().rev() {
                    stack.push((kid, Some(current_idx)));
                }
            }
        }

        if placed.len() != self.specs.len() {
            let mut unreachable: Vec<u32> = self
                .specs
                .iter()
                .map(|s| s.id)
                .filter(|id| !placed.contains(id))
                .collect();
            unreachable.sort_unstable();
            return Err(DomainError::CycleDetected(unreachable));
        }

        debug!("built hierarchy with {} nodes", tree.len());
        Ok(tree)
    }
}

/// The enterprise hierarchy the Bridge demonstration runs against:
///
/// ```text
/// Enterprise Corp (CORP)
/// └── Engineering (ENG)
///     └── Backend Team (BE)
///         └── API Project (API)
/// ```
pub fn sample_enterprise() -> DomainResult<TreeArena> {
    HierarchyBuilder::new()
        .node(NodeSpec::new(1, "Enterprise Corp", NodeCategory::Department, None).with_code("CORP"))
        .node(NodeSpec::new(2, "Engineering", NodeCategory::Department, Some(1)).with_code("ENG"))
        .node(NodeSpec::new(3, "Backend Team", NodeCategory::Team, Some(2)).with_code("BE"))
        .node(NodeSpec::new(4, "API Project", NodeCategory::Project, Some(3)).with_code("API"))
        .build()
}
