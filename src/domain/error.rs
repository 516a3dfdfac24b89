//! Domain-level errors (no external dependencies)

use thiserror::Error;

use crate::domain::pattern::PatternType;

/// Domain errors represent invalid lookups and malformed hierarchies.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("unknown design pattern: {0}")]
    UnknownPattern(String),

    #[error("no demonstration available for pattern #{}: {}", .0.number(), .0)]
    UnsupportedPattern(PatternType),

    #[error("unknown node category: {0}")]
    UnknownCategory(String),

    #[error("unknown tree view: {0}")]
    UnknownView(String),

    #[error("node not found: {0}")]
    NodeNotFound(String),

    #[error("duplicate node id: {0}")]
    DuplicateNode(u32),

    #[error("node {node} references unknown parent {parent}")]
    UnknownParent { node: u32, parent: u32 },

    #[error("hierarchy has more than one root: {0:?}")]
    MultipleRoots(Vec<u32>),

    #[error("hierarchy is empty")]
    EmptyHierarchy,

    #[error("cycle detected in hierarchy, unreachable nodes: {0:?}")]
    CycleDetected(Vec<u32>),

    #[error("template key must not be empty")]
    EmptyTemplateKey,

    #[error("template with key '{0}' not found")]
    TemplateNotFound(String),
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
