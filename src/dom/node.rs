//! Node types: NodeId, NodeData.

use slotmap::new_key_type;

use crate::vnode::Attributes;

new_key_type! {
    /// Handle to a live node. Copy, lightweight (u64), generation-checked.
    pub struct NodeId;
}

/// Data associated with a single live node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeData {
    /// An element with its tag and current attributes.
    Element {
        tag: String,
        attributes: Attributes,
    },
    /// A text node.
    Text(String),
}

impl NodeData {
    /// Create element data with no attributes.
    pub fn element(tag: impl Into<String>) -> Self {
        Self::Element {
            tag: tag.into(),
            attributes: Attributes::new(),
        }
    }

    /// Create text data.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Set an attribute (builder). No-op on text data.
    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        if let Self::Element { attributes, .. } = &mut self {
            attributes.insert(name, value);
        }
        self
    }

    /// Tag name for elements, `None` for text.
    pub fn tag(&self) -> Option<&str> {
        match self {
            Self::Element { tag, .. } => Some(tag.as_str()),
            Self::Text(_) => None,
        }
    }

    /// Attribute map for elements, `None` for text.
    pub fn attributes(&self) -> Option<&Attributes> {
        match self {
            Self::Element { attributes, .. } => Some(attributes),
            Self::Text(_) => None,
        }
    }

    /// Look up a single attribute. Always `None` for text.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes().and_then(|attrs| attrs.get(name))
    }

    /// Text value for text nodes, `None` for elements.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Element { .. } => None,
            Self::Text(value) => Some(value.as_str()),
        }
    }

    pub fn is_element(&self) -> bool {
        matches!(self, Self::Element { .. })
    }
}
