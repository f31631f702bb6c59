use thiserror::Error;

/// Failures reported by [`TreeModel`](super::TreeModel) operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// The tree must always keep at least one node
    #[error("can't delete last node in tree")]
    LastNodeDeletion,
    /// The handle refers to a node that has since been deleted
    #[error("node is no longer part of the tree")]
    StaleNode,
    /// A preset needs at least a root value
    #[error("preset sequence is empty")]
    EmptyPreset,
    /// A structural invariant does not hold
    #[error("tree invariant violated: {0}")]
    Corrupt(String),
}
