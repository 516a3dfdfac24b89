//! Domain layer: pattern catalogue, the organisation tree with its views, and
//! the small object models each demonstration works on.
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod arena;
pub mod builder;
pub mod document;
pub mod error;
pub mod pattern;
pub mod payment;
pub mod plans;
pub mod prototype;
pub mod tree_display;
pub mod ui;
pub mod view;

pub use arena::{EnterpriseNode, NodeCategory, NodeIndex, TreeArena, TreeNode};
pub use builder::{sample_enterprise, HierarchyBuilder, HierarchySpec, NodeSpec};
pub use error::{DomainError, DomainResult};
pub use pattern::{PatternCategory, PatternType};
pub use tree_display::{indented, TreeNodeConvert};
pub use view::{TreeView, TreeViewOptions, ViewNodes};
