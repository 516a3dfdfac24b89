use std::io::Write;

use tracing::debug;

use crate::application::runner::{emit, separator, PatternRunner};
use crate::application::ApplicationResult;
use crate::domain::{
    indented, sample_enterprise, DomainError, NodeCategory, NodeIndex, PatternType, TreeArena,
    TreeView, TreeViewOptions,
};

/// Runs every view over the sample enterprise hierarchy.
pub struct BridgeRunner {
    indent: String,
}

impl BridgeRunner {
    pub fn new(indent: impl Into<String>) -> Self {
        Self {
            indent: indent.into(),
        }
    }

    /// Print the view result; `None` options fall back to the defaults.
    fn demonstrate(
        &self,
        tree: &TreeArena,
        view: TreeView,
        root: NodeIndex,
        options: Option<&TreeViewOptions>,
        out: &mut dyn Write,
    ) -> ApplicationResult<()> {
        let default_options = TreeViewOptions::default();
        let options = options.unwrap_or(&default_options);
        let mut count = 0;
        for (idx, _) in view.nodes(tree, root, options) {
            emit(out, indented(tree, idx, &self.indent))?;
            count += 1;
        }
        debug!("{} view returned {} nodes", view, count);
        Ok(())
    }
}

fn lookup(tree: &TreeArena, name: &str) -> ApplicationResult<NodeIndex> {
    tree.find_by_name(name)
        .ok_or_else(|| DomainError::NodeNotFound(name.to_string()).into())
}

impl PatternRunner for BridgeRunner {
    fn pattern(&self) -> PatternType {
        PatternType::Bridge
    }

    fn run_pattern(&self, out: &mut dyn Write) -> ApplicationResult<()> {
        let tree = sample_enterprise()?;
        let corp = lookup(&tree, "Enterprise Corp")?;
        let engineering = lookup(&tree, "Engineering")?;
        let backend = lookup(&tree, "Backend Team")?;
        let api_project = lookup(&tree, "API Project")?;

        emit(out, "Ancestor View from API Project:")?;
        self.demonstrate(&tree, TreeView::Ancestor, api_project, None, out)?;
        separator(out)?;

        emit(out, "Descendants View from Engineering:")?;
        self.demonstrate(&tree, TreeView::Descendants, engineering, None, out)?;
        separator(out)?;

        emit(out, "Filtered View (Departments and Teams only):")?;
        let options =
            TreeViewOptions::with_categories([NodeCategory::Department, NodeCategory::Team])
                .max_depth(2);
        self.demonstrate(&tree, TreeView::Filtered, corp, Some(&options), out)?;
        separator(out)?;

        emit(out, "Sibling View from Backend Team:")?;
        self.demonstrate(&tree, TreeView::Sibling, backend, None, out)?;
        separator(out)?;

        emit(out, "Search Results for 'Team' across different views:")?;
        let search = TreeViewOptions::default().search("Team");
        emit(out, "\nFiltered View Search:")?;
        self.demonstrate(&tree, TreeView::Filtered, corp, Some(&search), out)?;
        emit(out, "\nDescendants View Search from Engineering:")?;
        self.demonstrate(&tree, TreeView::Descendants, engineering, Some(&search), out)?;
        emit(out, "\nAncestor View Search from API Project:")?;
        self.demonstrate(&tree, TreeView::Ancestor, api_project, Some(&search), out)?;
        emit(out, "\nSibling View Search from Backend Team:")?;
        self.demonstrate(&tree, TreeView::Sibling, backend, Some(&search), out)?;

        separator(out)?;
        emit(out, "Case-insensitive Search Results for 'api' across different views:")?;
        let case_insensitive = TreeViewOptions::default().search("api");
        emit(out, "\nFiltered View Search:")?;
        self.demonstrate(&tree, TreeView::Filtered, corp, Some(&case_insensitive), out)
    }
}
