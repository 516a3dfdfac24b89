//! Integration tests for the tree views.

use rstest::{fixture, rstest};

use gof_demo::domain::{
    HierarchyBuilder, NodeCategory, NodeSpec, TreeArena, TreeView, TreeViewOptions,
};
use gof_demo::util::testing;

/// Enterprise Corp
/// └── Engineering
///     ├── Backend Team
///     │   └── API Project
///     └── Frontend Team
///         └── Web Project
#[fixture]
fn org() -> TreeArena {
    testing::init_test_setup();
    HierarchyBuilder::new()
        .node(NodeSpec::new(1, "Enterprise Corp", NodeCategory::Department, None).with_code("CORP"))
        .node(NodeSpec::new(2, "Engineering", NodeCategory::Department, Some(1)).with_code("ENG"))
        .node(NodeSpec::new(3, "Backend Team", NodeCategory::Team, Some(2)).with_code("BE"))
        .node(NodeSpec::new(4, "Frontend Team", NodeCategory::Team, Some(2)).with_code("FE"))
        .node(NodeSpec::new(5, "API Project", NodeCategory::Project, Some(3)).with_code("API"))
        .node(NodeSpec::new(6, "Web Project", NodeCategory::Project, Some(4)).with_code("WEB"))
        .build()
        .expect("valid hierarchy")
}

fn names(tree: &TreeArena, view: TreeView, from: &str, options: &TreeViewOptions) -> Vec<String> {
    let root = tree.find_by_name(from).expect("start node");
    view.nodes(tree, root, options)
        .map(|(_, node)| node.data.name.clone())
        .collect()
}

#[test]
fn given_engineering_subtree_when_descendants_then_pre_order() {
    // Arrange
    let tree = HierarchyBuilder::new()
        .node(NodeSpec::new(1, "Engineering", NodeCategory::Department, None))
        .node(NodeSpec::new(2, "Backend Team", NodeCategory::Team, Some(1)))
        .node(NodeSpec::new(3, "Frontend Team", NodeCategory::Team, Some(1)))
        .node(NodeSpec::new(4, "API Project", NodeCategory::Project, Some(2)))
        .build()
        .unwrap();

    // Act
    let result = names(&tree, TreeView::Descendants, "Engineering", &TreeViewOptions::default());

    // Assert
    assert_eq!(
        result,
        vec!["Engineering", "Backend Team", "API Project", "Frontend Team"]
    );
}

#[rstest]
#[case("Enterprise Corp", vec!["Enterprise Corp", "Engineering", "Backend Team", "API Project", "Frontend Team", "Web Project"])]
#[case("Frontend Team", vec!["Frontend Team", "Web Project"])]
#[case("API Project", vec!["API Project"])]
fn given_start_node_when_descendants_and_filtered_then_same_selection(
    org: TreeArena,
    #[case] from: &str,
    #[case] expected: Vec<&str>,
) {
    let options = TreeViewOptions::default();

    let descendants = names(&org, TreeView::Descendants, from, &options);
    let filtered = names(&org, TreeView::Filtered, from, &options);

    assert_eq!(descendants, expected);
    assert_eq!(filtered, descendants);
}

#[rstest]
#[case("API Project", vec!["API Project", "Backend Team", "Engineering"])]
#[case("Engineering", vec!["Engineering"])]
#[case("Enterprise Corp", vec![])]
fn given_start_node_when_ancestor_then_walks_up_without_hierarchy_root(
    org: TreeArena,
    #[case] from: &str,
    #[case] expected: Vec<&str>,
) {
    let result = names(&org, TreeView::Ancestor, from, &TreeViewOptions::default());
    assert_eq!(result, expected);
}

#[rstest]
fn given_team_when_sibling_then_returns_parents_children_including_self(org: TreeArena) {
    let result = names(&org, TreeView::Sibling, "Backend Team", &TreeViewOptions::default());
    assert_eq!(result, vec!["Backend Team", "Frontend Team"]);
}

#[rstest]
fn given_only_child_when_sibling_then_returns_itself(org: TreeArena) {
    let result = names(&org, TreeView::Sibling, "API Project", &TreeViewOptions::default());
    assert_eq!(result, vec!["API Project"]);
}

#[rstest]
fn given_hierarchy_root_when_sibling_then_returns_root_unfiltered(org: TreeArena) {
    // Arrange: the root is excluded by category, yet comes back as its own sibling
    let options = TreeViewOptions::with_categories([NodeCategory::Project]);

    // Act
    let result = names(&org, TreeView::Sibling, "Enterprise Corp", &options);

    // Assert
    assert_eq!(result, vec!["Enterprise Corp"]);
}

#[rstest]
#[case(TreeView::Filtered, "Enterprise Corp", vec!["Backend Team", "Frontend Team"])]
#[case(TreeView::Descendants, "Engineering", vec!["Backend Team", "Frontend Team"])]
#[case(TreeView::Ancestor, "API Project", vec!["Backend Team"])]
#[case(TreeView::Sibling, "Backend Team", vec!["Backend Team", "Frontend Team"])]
fn given_search_term_when_querying_then_matches_names_ignoring_case(
    org: TreeArena,
    #[case] view: TreeView,
    #[case] from: &str,
    #[case] expected: Vec<&str>,
) {
    let options = TreeViewOptions::default().search("tEaM");
    assert_eq!(names(&org, view, from, &options), expected);
}

#[rstest]
fn given_max_depth_when_filtered_then_bounded_by_absolute_level(org: TreeArena) {
    let options = TreeViewOptions::default().max_depth(1);
    let result = names(&org, TreeView::Filtered, "Enterprise Corp", &options);
    assert_eq!(result, vec!["Enterprise Corp", "Engineering"]);
}

#[rstest]
fn given_departments_and_teams_when_filtered_then_projects_are_skipped(org: TreeArena) {
    let options =
        TreeViewOptions::with_categories([NodeCategory::Department, NodeCategory::Team]).max_depth(2);

    let result = names(&org, TreeView::Filtered, "Enterprise Corp", &options);

    assert_eq!(
        result,
        vec!["Enterprise Corp", "Engineering", "Backend Team", "Frontend Team"]
    );
}

#[test]
fn given_hidden_and_inactive_nodes_when_querying_then_excluded_unless_requested() {
    // Arrange
    let mut hidden = NodeSpec::new(3, "Skunkworks Team", NodeCategory::Team, Some(1));
    hidden.hidden = true;
    let mut retired = NodeSpec::new(4, "Legacy Team", NodeCategory::Team, Some(1));
    retired.active = false;
    let tree = HierarchyBuilder::new()
        .node(NodeSpec::new(1, "Engineering", NodeCategory::Department, None))
        .node(NodeSpec::new(2, "Backend Team", NodeCategory::Team, Some(1)))
        .node(hidden)
        .node(retired)
        .build()
        .unwrap();

    // Act
    let default = names(&tree, TreeView::Descendants, "Engineering", &TreeViewOptions::default());
    let everything = names(
        &tree,
        TreeView::Descendants,
        "Engineering",
        &TreeViewOptions::default()
            .include_hidden(true)
            .include_inactive(true),
    );

    // Assert
    assert_eq!(default, vec!["Engineering", "Backend Team"]);
    assert_eq!(
        everything,
        vec!["Engineering", "Backend Team", "Skunkworks Team", "Legacy Team"]
    );
}

#[rstest]
fn given_no_match_when_querying_then_sequence_is_empty(org: TreeArena) {
    let options = TreeViewOptions::default().search("payroll");
    for view in TreeView::ALL {
        assert!(names(&org, view, "Backend Team", &options).is_empty(), "{view}");
    }
}

#[rstest]
fn given_every_view_when_iterating_then_results_are_subset_of_hierarchy(org: TreeArena) {
    let options = TreeViewOptions::default();
    let start = org.find_by_name("Backend Team").unwrap();
    for view in TreeView::ALL {
        for (idx, node) in view.nodes(&org, start, &options) {
            assert!(org.get_node(idx).is_some());
            assert!(options.categories.contains(&node.data.category));
        }
    }
}

#[rstest]
fn given_view_sequence_when_cloned_then_iterates_independently(org: TreeArena) {
    let options = TreeViewOptions::default();
    let root = org.root().unwrap();
    let mut first = TreeView::Descendants.nodes(&org, root, &options);
    first.next();

    let rest: Vec<_> = first.clone().map(|(_, n)| n.data.id).collect();
    let again: Vec<_> = first.map(|(_, n)| n.data.id).collect();

    assert_eq!(rest, vec![2, 3, 5, 4, 6]);
    assert_eq!(again, rest);
}
