//! Tests for loading hierarchies from TOML files through the service container

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use gof_demo::application::ApplicationError;
use gof_demo::config::Settings;
use gof_demo::domain::{DomainError, NodeCategory, TreeView, TreeViewOptions};
use gof_demo::infrastructure::ServiceContainer;

const ORG: &str = r#"
[[node]]
id = 1
name = "Globex"
category = "department"
code = "GLX"

[[node]]
id = 2
name = "Operations"
category = "Department"
parent = 1
code = "OPS"

[[node]]
id = 3
name = "Logistics Team"
category = "team"
parent = 2
code = "LOG"
description = "Moves things"

[[node]]
id = 4
name = "Fleet Team"
category = "team"
parent = 2
code = "FLT"
hidden = true

[[node]]
id = 5
name = "Dispatch"
category = "role"
parent = 3
"#;

fn write_hierarchy(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("org.toml");
    fs::write(&path, content).expect("write hierarchy file");
    path
}

#[test]
fn given_hierarchy_file_when_loading_then_builds_tree() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = write_hierarchy(&temp, ORG);
    let container = ServiceContainer::new(Settings::default());

    // Act
    let tree = container.hierarchy.load(Some(&path)).unwrap();

    // Assert
    assert_eq!(tree.len(), 5);
    let logistics = container.hierarchy.resolve(&tree, "Logistics Team").unwrap();
    let node = &tree.get_node(logistics).unwrap().data;
    assert_eq!(node.category, NodeCategory::Team);
    assert_eq!(node.description, "Moves things");
    assert_eq!(tree.depth(logistics), 2);
}

#[test]
fn given_configured_hierarchy_file_when_loading_without_argument_then_uses_it() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = write_hierarchy(&temp, ORG);
    let settings = Settings {
        hierarchy_file: Some(path),
        ..Settings::default()
    };
    let container = ServiceContainer::new(settings);

    // Act
    let tree = container.hierarchy.load(None).unwrap();

    // Assert
    assert!(container.hierarchy.resolve(&tree, "globex").is_ok());
}

#[test]
fn given_hidden_node_when_querying_then_excluded_by_default() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = write_hierarchy(&temp, ORG);
    let container = ServiceContainer::new(Settings::default());
    let tree = container.hierarchy.load(Some(&path)).unwrap();

    // Act
    let default = container
        .hierarchy
        .query(&tree, TreeView::Sibling, "3", &TreeViewOptions::default())
        .unwrap();
    let with_hidden = container
        .hierarchy
        .query(
            &tree,
            TreeView::Sibling,
            "3",
            &TreeViewOptions::default().include_hidden(true),
        )
        .unwrap();

    // Assert
    assert_eq!(default, vec!["----Team: Logistics Team (Code: LOG, Level: 2)"]);
    assert_eq!(with_hidden.len(), 2);
}

#[test]
fn given_custom_indent_when_querying_then_listing_uses_it() {
    let settings = Settings {
        indent: "  ".into(),
        ..Settings::default()
    };
    let container = ServiceContainer::new(settings);
    let tree = container.hierarchy.load(None).unwrap();

    let lines = container
        .hierarchy
        .query(&tree, TreeView::Ancestor, "Backend Team", &TreeViewOptions::default())
        .unwrap();

    assert_eq!(
        lines,
        vec![
            "        Team: Backend Team (Code: BE, Level: 2)",
            "    Department: Engineering (Code: ENG, Level: 1)",
        ]
    );
}

#[test]
fn given_missing_file_when_loading_then_read_error() {
    let temp = TempDir::new().unwrap();
    let container = ServiceContainer::new(Settings::default());

    let result = container.hierarchy.load(Some(&temp.path().join("absent.toml")));

    assert!(matches!(result, Err(ApplicationError::HierarchyRead { .. })));
}

#[test]
fn given_unknown_category_when_loading_then_invalid_hierarchy() {
    let temp = TempDir::new().unwrap();
    let path = write_hierarchy(
        &temp,
        "[[node]]\nid = 1\nname = \"Globex\"\ncategory = \"division\"\n",
    );
    let container = ServiceContainer::new(Settings::default());

    let result = container.hierarchy.load(Some(&path));

    assert!(matches!(result, Err(ApplicationError::InvalidHierarchy { .. })));
}

#[test]
fn given_two_roots_when_loading_then_domain_error() {
    let temp = TempDir::new().unwrap();
    let path = write_hierarchy(
        &temp,
        "[[node]]\nid = 1\nname = \"A\"\ncategory = \"team\"\n\n[[node]]\nid = 2\nname = \"B\"\ncategory = \"team\"\n",
    );
    let container = ServiceContainer::new(Settings::default());

    let result = container.hierarchy.load(Some(&path));

    assert!(matches!(
        result,
        Err(ApplicationError::Domain(DomainError::MultipleRoots(_)))
    ));
}
