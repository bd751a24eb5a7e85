//! The live document: slotmap arena plus the `Host` implementation.

use std::collections::VecDeque;

use slotmap::{SecondaryMap, SlotMap};

use super::node::{NodeData, NodeId};
use crate::error::DomError;
use crate::host::Host;

/// Empty slice constant for returning when a node has no children.
const EMPTY_CHILDREN: &[NodeId] = &[];

/// The live display tree, backed by a slotmap arena.
///
/// All nodes live in a single `SlotMap`. Parent/child relationships are stored
/// in secondary maps so that node removal is O(subtree size) and lookup is O(1).
/// A `body` element is created with the document and can never be removed.
///
/// Removing or replacing a node frees its whole subtree. Handles to freed
/// nodes are rejected with [`DomError::StaleNode`] instead of aliasing a
/// newer node.
#[derive(Debug)]
pub struct Document {
    pub(crate) nodes: SlotMap<NodeId, NodeData>,
    children: SecondaryMap<NodeId, Vec<NodeId>>,
    parent: SecondaryMap<NodeId, NodeId>,
    body: NodeId,
}

impl Document {
    /// Create a document holding only an empty `body` element.
    pub fn new() -> Self {
        let mut nodes = SlotMap::with_key();
        let body = nodes.insert(NodeData::element("body"));
        let mut children = SecondaryMap::new();
        children.insert(body, Vec::new());
        Self {
            nodes,
            children,
            parent: SecondaryMap::new(),
            body,
        }
    }

    /// The document's `body` element.
    pub fn body(&self) -> NodeId {
        self.body
    }

    /// Insert a detached node.
    pub fn insert(&mut self, data: NodeData) -> NodeId {
        let id = self.nodes.insert(data);
        self.children.insert(id, Vec::new());
        id
    }

    /// Insert a node as the last child of `parent`.
    pub fn insert_child(&mut self, parent: NodeId, data: NodeData) -> Result<NodeId, DomError> {
        self.expect_element(parent)?;
        let id = self.insert(data);
        self.attach(parent, id);
        Ok(id)
    }

    /// Get the parent of a node, if it has one.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.parent.get(id).copied()
    }

    /// Get the children of a node. Returns an empty slice if the node has no children
    /// or does not exist.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.children
            .get(id)
            .map(Vec::as_slice)
            .unwrap_or(EMPTY_CHILDREN)
    }

    /// Walk from `id` up to the root, collecting ancestor node ids.
    ///
    /// The returned vec does **not** include `id` itself; it starts with the
    /// immediate parent.
    pub fn ancestors(&self, id: NodeId) -> Vec<NodeId> {
        let mut result = Vec::new();
        let mut current = id;
        while let Some(p) = self.parent.get(current).copied() {
            result.push(p);
            current = p;
        }
        result
    }

    /// Immutable access to a node's data.
    pub fn get(&self, id: NodeId) -> Option<&NodeData> {
        self.nodes.get(id)
    }

    /// Number of live nodes, `body` and detached nodes included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the document holds nothing but `body`.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// Whether the document contains a node with the given id.
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Concatenated text of every text node under `id`, in document order.
    pub fn text_content(&self, id: NodeId) -> String {
        self.walk_depth_first(id)
            .into_iter()
            .filter_map(|node| self.nodes.get(node).and_then(NodeData::as_text))
            .collect()
    }

    /// Pre-order depth-first traversal starting from `start`.
    pub fn walk_depth_first(&self, start: NodeId) -> Vec<NodeId> {
        let mut result = Vec::new();
        let mut stack = vec![start];
        while let Some(current) = stack.pop() {
            if !self.nodes.contains_key(current) {
                continue;
            }
            result.push(current);
            // Push children in reverse so the first child is visited first.
            for &child in self.children(current).iter().rev() {
                stack.push(child);
            }
        }
        result
    }

    fn expect_node(&self, id: NodeId) -> Result<&NodeData, DomError> {
        self.nodes.get(id).ok_or_else(|| DomError::stale(id))
    }

    fn expect_element(&self, id: NodeId) -> Result<(), DomError> {
        if self.expect_node(id)?.is_element() {
            Ok(())
        } else {
            Err(DomError::not_an_element(id))
        }
    }

    fn expect_parent(&self, id: NodeId) -> Result<NodeId, DomError> {
        self.expect_node(id)?;
        self.parent(id).ok_or_else(|| DomError::detached(id))
    }

    /// Reject moving `node` under `target` when `node` is `target` or one of its ancestors.
    fn check_hierarchy(&self, node: NodeId, target: NodeId) -> Result<(), DomError> {
        if node == target || self.ancestors(target).contains(&node) {
            return Err(DomError::Hierarchy {
                node: format!("{node:?}"),
            });
        }
        Ok(())
    }

    /// Push `child` onto `parent`'s children. `child` must be detached.
    fn attach(&mut self, parent: NodeId, child: NodeId) {
        self.parent.insert(child, parent);
        if let Some(siblings) = self.children.get_mut(parent) {
            siblings.push(child);
        }
    }

    /// Unlink `id` from its parent's children list, keeping its subtree.
    fn detach(&mut self, id: NodeId) {
        if let Some(parent_id) = self.parent.remove(id) {
            if let Some(siblings) = self.children.get_mut(parent_id) {
                siblings.retain(|&child| child != id);
            }
        }
    }

    /// Free a detached node and all its descendants.
    fn free_subtree(&mut self, id: NodeId) {
        let mut to_remove = VecDeque::new();
        to_remove.push_back(id);
        while let Some(current) = to_remove.pop_front() {
            if let Some(kids) = self.children.remove(current) {
                to_remove.extend(kids);
            }
            self.parent.remove(current);
            self.nodes.remove(current);
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Host for Document {
    type Node = NodeId;

    fn create_element(&mut self, tag: &str) -> NodeId {
        self.insert(NodeData::element(tag))
    }

    fn create_text(&mut self, value: &str) -> NodeId {
        self.insert(NodeData::text(value))
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) -> Result<(), DomError> {
        match self.nodes.get_mut(node) {
            Some(NodeData::Element { attributes, .. }) => {
                attributes.insert(name, value);
                Ok(())
            }
            Some(NodeData::Text(_)) => Err(DomError::not_an_element(node)),
            None => Err(DomError::stale(node)),
        }
    }

    fn remove_attribute(&mut self, node: NodeId, name: &str) -> Result<(), DomError> {
        match self.nodes.get_mut(node) {
            Some(NodeData::Element { attributes, .. }) => {
                attributes.remove(name);
                Ok(())
            }
            Some(NodeData::Text(_)) => Err(DomError::not_an_element(node)),
            None => Err(DomError::stale(node)),
        }
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        self.expect_element(parent)?;
        self.expect_node(child)?;
        self.check_hierarchy(child, parent)?;
        self.detach(child);
        self.attach(parent, child);
        Ok(())
    }

    fn parent_node(&self, node: NodeId) -> Result<Option<NodeId>, DomError> {
        self.expect_node(node)?;
        Ok(self.parent(node))
    }

    fn child_nodes(&self, parent: NodeId) -> Result<Vec<NodeId>, DomError> {
        self.expect_node(parent)?;
        Ok(self.children(parent).to_vec())
    }

    fn replace_with(&mut self, old: NodeId, new: NodeId) -> Result<(), DomError> {
        let parent = self.expect_parent(old)?;
        self.expect_node(new)?;
        if old == new {
            return Ok(());
        }
        self.check_hierarchy(new, parent)?;
        self.detach(new);

        let slot = self
            .children
            .get_mut(parent)
            .and_then(|siblings| siblings.iter_mut().find(|child| **child == old));
        match slot {
            Some(slot) => *slot = new,
            None => return Err(DomError::detached(old)),
        }
        self.parent.insert(new, parent);
        self.parent.remove(old);
        self.free_subtree(old);
        Ok(())
    }

    fn remove(&mut self, node: NodeId) -> Result<(), DomError> {
        self.expect_parent(node)?;
        self.detach(node);
        self.free_subtree(node);
        Ok(())
    }

    fn tag_name(&self, node: NodeId) -> Result<Option<&str>, DomError> {
        Ok(self.expect_node(node)?.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Build a small test tree:
    /// ```text
    ///       body
    ///      /    \
    ///    a        b
    ///   / \
    ///  c   d("text")
    /// ```
    fn build_tree() -> (Document, NodeId, NodeId, NodeId, NodeId) {
        let mut doc = Document::new();
        let body = doc.body();
        let a = doc.insert_child(body, NodeData::element("div").with_attr("id", "a")).unwrap();
        let b = doc.insert_child(body, NodeData::element("p").with_attr("id", "b")).unwrap();
        let c = doc.insert_child(a, NodeData::element("span")).unwrap();
        let d = doc.insert_child(a, NodeData::text("text")).unwrap();
        (doc, a, b, c, d)
    }

    #[test]
    fn new_has_body() {
        let doc = Document::new();
        assert_eq!(doc.get(doc.body()).and_then(NodeData::tag), Some("body"));
        assert!(doc.is_empty());
        assert_eq!(doc.len(), 1);
    }

    #[test]
    fn insert_child_parent_relationship() {
        let (doc, a, _b, c, _d) = build_tree();
        assert_eq!(doc.parent(a), Some(doc.body()));
        assert_eq!(doc.parent(c), Some(a));
        assert_eq!(doc.parent(doc.body()), None);
    }

    #[test]
    fn insert_child_under_text_fails() {
        let (mut doc, _a, _b, _c, d) = build_tree();
        let err = doc.insert_child(d, NodeData::text("x")).unwrap_err();
        assert!(matches!(err, DomError::NotAnElement { .. }));
    }

    #[test]
    fn children_list() {
        let (doc, a, b, c, d) = build_tree();
        assert_eq!(doc.children(doc.body()), &[a, b]);
        assert_eq!(doc.children(a), &[c, d]);
        assert!(doc.children(c).is_empty());
    }

    #[test]
    fn ancestors() {
        let (doc, a, _b, c, _d) = build_tree();
        assert_eq!(doc.ancestors(c), vec![a, doc.body()]);
        assert!(doc.ancestors(doc.body()).is_empty());
    }

    #[test]
    fn text_content_concatenates() {
        let (mut doc, a, b, _c, _d) = build_tree();
        doc.insert_child(b, NodeData::text("more")).unwrap();
        assert_eq!(doc.text_content(a), "text");
        assert_eq!(doc.text_content(doc.body()), "textmore");
    }

    #[test]
    fn walk_depth_first() {
        let (doc, a, b, c, d) = build_tree();
        assert_eq!(doc.walk_depth_first(doc.body()), vec![doc.body(), a, c, d, b]);
        assert_eq!(doc.walk_depth_first(a), vec![a, c, d]);
    }

    #[test]
    fn set_and_remove_attribute() {
        let (mut doc, a, ..) = build_tree();
        doc.set_attribute(a, "class", "x").unwrap();
        assert_eq!(doc.get(a).unwrap().attr("class"), Some("x"));
        doc.remove_attribute(a, "class").unwrap();
        assert!(doc.get(a).unwrap().attr("class").is_none());
        // Removing a missing attribute is fine.
        doc.remove_attribute(a, "class").unwrap();
    }

    #[test]
    fn attribute_on_text_fails() {
        let (mut doc, _a, _b, _c, d) = build_tree();
        assert!(matches!(
            doc.set_attribute(d, "id", "x"),
            Err(DomError::NotAnElement { .. })
        ));
        assert!(matches!(
            doc.remove_attribute(d, "id"),
            Err(DomError::NotAnElement { .. })
        ));
    }

    #[test]
    fn append_child_moves_node() {
        let (mut doc, a, b, c, d) = build_tree();
        doc.append_child(b, c).unwrap();
        assert_eq!(doc.children(a), &[d]);
        assert_eq!(doc.children(b), &[c]);
        assert_eq!(doc.parent(c), Some(b));
    }

    #[test]
    fn append_child_rejects_cycle() {
        let (mut doc, a, _b, c, _d) = build_tree();
        assert!(matches!(doc.append_child(c, a), Err(DomError::Hierarchy { .. })));
        assert!(matches!(doc.append_child(a, a), Err(DomError::Hierarchy { .. })));
    }

    #[test]
    fn child_nodes_snapshot() {
        let (doc, a, _b, c, d) = build_tree();
        assert_eq!(doc.child_nodes(a).unwrap(), vec![c, d]);
        assert_eq!(doc.child_nodes(d).unwrap(), Vec::<NodeId>::new());
    }

    #[test]
    fn replace_with_keeps_position_and_frees_old() {
        let (mut doc, a, b, c, d) = build_tree();
        let len_before = doc.len();
        let new = doc.create_element("section");
        doc.replace_with(a, new).unwrap();
        assert_eq!(doc.children(doc.body()), &[new, b]);
        assert_eq!(doc.parent(new), Some(doc.body()));
        assert!(!doc.contains(a));
        assert!(!doc.contains(c));
        assert!(!doc.contains(d));
        // +1 section, -3 (a, c, d)
        assert_eq!(doc.len(), len_before - 2);
    }

    #[test]
    fn replace_with_sibling_moves_it() {
        let (mut doc, a, b, ..) = build_tree();
        doc.replace_with(a, b).unwrap();
        assert_eq!(doc.children(doc.body()), &[b]);
        assert!(!doc.contains(a));
    }

    #[test]
    fn replace_detached_fails() {
        let mut doc = Document::new();
        let lone = doc.create_element("div");
        let other = doc.create_text("x");
        assert!(matches!(doc.replace_with(lone, other), Err(DomError::Detached { .. })));
        assert!(matches!(
            doc.replace_with(doc.body(), other),
            Err(DomError::Detached { .. })
        ));
    }

    #[test]
    fn remove_subtree() {
        let (mut doc, a, b, c, d) = build_tree();
        doc.remove(a).unwrap();
        assert!(!doc.contains(a));
        assert!(!doc.contains(c));
        assert!(!doc.contains(d));
        assert_eq!(doc.children(doc.body()), &[b]);
        assert_eq!(doc.len(), 2);
    }

    #[test]
    fn remove_body_fails() {
        let mut doc = Document::new();
        let body = doc.body();
        assert!(matches!(doc.remove(body), Err(DomError::Detached { .. })));
    }

    #[test]
    fn stale_handles_rejected() {
        let (mut doc, a, _b, c, _d) = build_tree();
        doc.remove(a).unwrap();
        assert!(matches!(doc.remove(c), Err(DomError::StaleNode { .. })));
        assert!(matches!(doc.tag_name(a), Err(DomError::StaleNode { .. })));
        assert!(matches!(doc.child_nodes(a), Err(DomError::StaleNode { .. })));
        assert!(matches!(
            doc.set_attribute(a, "id", "x"),
            Err(DomError::StaleNode { .. })
        ));
    }

    #[test]
    fn parent_node() {
        let (mut doc, a, _b, c, _d) = build_tree();
        assert_eq!(doc.parent_node(c).unwrap(), Some(a));
        assert_eq!(doc.parent_node(doc.body()).unwrap(), None);
        doc.remove(a).unwrap();
        assert!(matches!(doc.parent_node(c), Err(DomError::StaleNode { .. })));
    }

    #[test]
    fn tag_name() {
        let (doc, a, _b, _c, d) = build_tree();
        assert_eq!(doc.tag_name(a).unwrap(), Some("div"));
        assert_eq!(doc.tag_name(d).unwrap(), None);
    }

    #[test]
    fn default_impl() {
        let doc = Document::default();
        assert!(doc.is_empty());
    }
}
