//! Hierarchy service
//!
//! Loads the organisation tree (built-in sample or TOML file) and runs view
//! queries against it.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult};
use crate::config::Settings;
use crate::domain::{
    indented, sample_enterprise, DomainError, HierarchyBuilder, HierarchySpec, NodeIndex,
    TreeArena, TreeNodeConvert, TreeView, TreeViewOptions,
};
use crate::infrastructure::traits::FileSystem;

/// Service for loading hierarchies and querying them through views.
pub struct HierarchyService {
    fs: Arc<dyn FileSystem>,
    settings: Arc<Settings>,
}

impl HierarchyService {
    pub fn new(fs: Arc<dyn FileSystem>, settings: Arc<Settings>) -> Self {
        Self { fs, settings }
    }

    /// Load the hierarchy from `file`, falling back to the configured file and
    /// then to the built-in sample.
    #[instrument(level = "debug", skip(self))]
    pub fn load(&self, file: Option<&Path>) -> ApplicationResult<TreeArena> {
        let Some(path) = file.or(self.settings.hierarchy_file.as_deref()) else {
            debug!("load: using built-in sample hierarchy");
            return Ok(sample_enterprise()?);
        };

        let content =
            self.fs
                .read_to_string(path)
                .map_err(|e| ApplicationError::HierarchyRead {
                    path: path.display().to_string(),
                    source: e,
                })?;
        let spec: HierarchySpec =
            toml::from_str(&content).map_err(|e| ApplicationError::InvalidHierarchy {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
        debug!("load: {} nodes declared in {}", spec.nodes.len(), path.display());

        Ok(HierarchyBuilder::from(spec).build()?)
    }

    /// Resolve a node by numeric id or by case-insensitive name.
    pub fn resolve(&self, tree: &TreeArena, selector: &str) -> ApplicationResult<NodeIndex> {
        let by_id = selector
            .trim()
            .parse::<u32>()
            .ok()
            .and_then(|id| tree.find_by_id(id));
        by_id
            .or_else(|| tree.find_by_name(selector.trim()))
            .ok_or_else(|| DomainError::NodeNotFound(selector.to_string()).into())
    }

    /// Run `view` from the node named by `from`, returning the indented listing.
    #[instrument(level = "debug", skip(self, tree, options))]
    pub fn query(
        &self,
        tree: &TreeArena,
        view: TreeView,
        from: &str,
        options: &TreeViewOptions,
    ) -> ApplicationResult<Vec<String>> {
        let root = self.resolve(tree, from)?;
        let lines: Vec<String> = view
            .nodes(tree, root, options)
            .map(|(idx, _)| indented(tree, idx, &self.settings.indent))
            .collect();
        debug!("query: {} view from {} matched {} nodes", view, from, lines.len());
        Ok(lines)
    }

    /// Render the whole hierarchy as a tree diagram.
    pub fn render_tree(&self, tree: &TreeArena) -> String {
        tree.to_tree_string().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NodeCategory;
    use crate::infrastructure::traits::MemoryFileSystem;

    const ORG: &str = r#"
[[node]]
id = 10
name = "Acme"
category = "Department"

[[node]]
id = 11
name = "Research"
category = "Team"
parent = 10
code = "RES"
"#;

    fn service(fs: MemoryFileSystem) -> HierarchyService {
        HierarchyService::new(Arc::new(fs), Arc::new(Settings::default()))
    }

    #[test]
    fn test_load_without_file_uses_sample() {
        let tree = service(MemoryFileSystem::new()).load(None).unwrap();
        assert_eq!(tree.len(), 4);
    }

    #[test]
    fn test_load_from_file() {
        let svc = service(MemoryFileSystem::new().with_file("/org.toml", ORG));
        let tree = svc.load(Some(Path::new("/org.toml"))).unwrap();

        let research = svc.resolve(&tree, "11").unwrap();
        assert_eq!(tree.get_node(research).unwrap().data.category, NodeCategory::Team);
        assert_eq!(svc.resolve(&tree, "acme").unwrap(), tree.root().unwrap());
    }

    #[test]
    fn test_load_missing_file() {
        let result = service(MemoryFileSystem::new()).load(Some(Path::new("/none.toml")));
        assert!(matches!(result, Err(ApplicationError::HierarchyRead { .. })));
    }

    #[test]
    fn test_load_invalid_toml() {
        let svc = service(MemoryFileSystem::new().with_file("/bad.toml", "[[node]]\nid = \"x\""));
        let result = svc.load(Some(Path::new("/bad.toml")));
        assert!(matches!(result, Err(ApplicationError::InvalidHierarchy { .. })));
    }

    #[test]
    fn test_query_unknown_start_node() {
        let svc = service(MemoryFileSystem::new());
        let tree = svc.load(None).unwrap();
        let result = svc.query(&tree, TreeView::Descendants, "Nowhere", &TreeViewOptions::default());
        assert!(matches!(
            result,
            Err(ApplicationError::Domain(DomainError::NodeNotFound(_)))
        ));
    }
}
