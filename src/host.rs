//! The display-engine boundary used by the renderer and the patch interpreter.

use std::fmt;

use crate::error::DomError;

/// Capabilities the reconciler needs from a live display tree.
///
/// [`Document`](crate::dom::Document) is the in-crate implementation. Other
/// engines (a browser DOM binding, a terminal widget tree) implement this
/// trait to be rendered and patched by the same code.
///
/// Node handles are `Copy` keys; the host owns the nodes themselves.
pub trait Host {
    /// Handle to a live node.
    type Node: Copy + Eq + fmt::Debug;

    /// Create a detached element node.
    fn create_element(&mut self, tag: &str) -> Self::Node;

    /// Create a detached text node holding `value` verbatim.
    fn create_text(&mut self, value: &str) -> Self::Node;

    /// Set (or overwrite) an attribute on an element.
    fn set_attribute(&mut self, node: Self::Node, name: &str, value: &str) -> Result<(), DomError>;

    /// Remove an attribute from an element. Removing a missing attribute is a no-op.
    fn remove_attribute(&mut self, node: Self::Node, name: &str) -> Result<(), DomError>;

    /// Append `child` as the last child of `parent`, detaching it first if needed.
    fn append_child(&mut self, parent: Self::Node, child: Self::Node) -> Result<(), DomError>;

    /// Parent of `node`, `None` when it is detached.
    fn parent_node(&self, node: Self::Node) -> Result<Option<Self::Node>, DomError>;

    /// Snapshot of `parent`'s current children, in order.
    fn child_nodes(&self, parent: Self::Node) -> Result<Vec<Self::Node>, DomError>;

    /// Put `new` at `old`'s position in `old`'s parent and discard `old`.
    fn replace_with(&mut self, old: Self::Node, new: Self::Node) -> Result<(), DomError>;

    /// Detach `node` from its parent and discard it.
    fn remove(&mut self, node: Self::Node) -> Result<(), DomError>;

    /// Tag of an element node, `None` for text nodes.
    fn tag_name(&self, node: Self::Node) -> Result<Option<&str>, DomError>;
}
