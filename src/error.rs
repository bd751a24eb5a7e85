//! Errors raised by the live document and the patch interpreter.

/// Errors from host operations and patch application.
///
/// Every variant is a contract violation by the caller: a handle that does
/// not belong to the document, an element-only operation on a text node, or a
/// live tree that no longer matches the virtual tree a patch was computed from.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    /// The handle does not refer to a node in the document (never inserted,
    /// or freed by an earlier remove/replace).
    #[error("stale node handle: {node}")]
    StaleNode { node: String },

    /// An element-only operation was attempted on a text node.
    #[error("node {node} is not an element")]
    NotAnElement { node: String },

    /// Replace/remove/mount needs a parent, but the node has none.
    #[error("node {node} has no parent")]
    Detached { node: String },

    /// The insertion would make a node its own ancestor.
    #[error("inserting node {node} would create a cycle")]
    Hierarchy { node: String },

    /// A `Mutate` patch met a live element of a different tag.
    #[error("live tree out of sync: expected <{expected}>, found <{found}>")]
    TagMismatch { expected: String, found: String },

    /// A children patch met a parent with a different number of live children.
    #[error("live tree out of sync: expected {expected} children, found {found}")]
    ChildCountMismatch { expected: usize, found: usize },
}

impl DomError {
    pub(crate) fn stale(node: impl std::fmt::Debug) -> Self {
        Self::StaleNode {
            node: format!("{node:?}"),
        }
    }

    pub(crate) fn not_an_element(node: impl std::fmt::Debug) -> Self {
        Self::NotAnElement {
            node: format!("{node:?}"),
        }
    }

    pub(crate) fn detached(node: impl std::fmt::Debug) -> Self {
        Self::Detached {
            node: format!("{node:?}"),
        }
    }

    /// Whether this error signals a live/virtual tree desynchronization.
    pub fn is_desync(&self) -> bool {
        matches!(
            self,
            Self::TagMismatch { .. } | Self::ChildCountMismatch { .. }
        )
    }
}
