//! Document queries: by id attribute, by tag name, by predicate.

use super::node::{NodeData, NodeId};
use super::tree::Document;

impl Document {
    /// Find the first node in document order whose `id` attribute matches.
    ///
    /// Only nodes reachable from `body` are searched; detached nodes are skipped.
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.walk_depth_first(self.body())
            .into_iter()
            .find(|&node| self.get(node).and_then(|data| data.attr("id")) == Some(id))
    }

    /// Find all elements with the given tag, in document order.
    pub fn get_elements_by_tag_name(&self, tag: &str) -> Vec<NodeId> {
        self.query_all(|data| data.tag() == Some(tag))
    }

    /// Find all attached nodes matching an arbitrary predicate, in document order.
    pub fn query_all(&self, predicate: impl Fn(&NodeData) -> bool) -> Vec<NodeId> {
        self.walk_depth_first(self.body())
            .into_iter()
            .filter(|&node| self.get(node).is_some_and(&predicate))
            .collect()
    }
}
