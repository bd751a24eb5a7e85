//! Virtual nodes: `Element` and the `VNode` child variant.

use std::fmt;

use super::attributes::Attributes;

/// One node of a virtual tree: an element or a raw text leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VNode {
    /// An element with a tag, attributes and children.
    Element(Element),
    /// A text leaf. Never wrapped in an element.
    Text(String),
}

impl VNode {
    /// Create a text leaf from any displayable value.
    pub fn text(value: impl fmt::Display) -> Self {
        Self::Text(value.to_string())
    }

    /// The element, if this is an element node.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(el) => Some(el),
            Self::Text(_) => None,
        }
    }

    /// The text value, if this is a text leaf.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Element(_) => None,
            Self::Text(text) => Some(text.as_str()),
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }
}

impl From<Element> for VNode {
    fn from(el: Element) -> Self {
        Self::Element(el)
    }
}

impl From<&str> for VNode {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for VNode {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// An element node of a virtual tree.
///
/// Immutable once built: the fields are private and there are no setters.
/// The `with_*` builders consume `self`, so they only shape a node that is
/// still being constructed. A new UI state is a new tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attributes: Attributes,
    children: Vec<VNode>,
}

impl Element {
    /// Create an element with no attributes and no children.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Attributes::new(),
            children: Vec::new(),
        }
    }

    /// Set an attribute (builder). The value is stringified with `Display`.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl fmt::Display) -> Self {
        self.attributes.insert(name, value);
        self
    }

    /// Replace the whole attribute map (builder).
    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// Append one child (builder).
    pub fn with_child(mut self, child: impl Into<VNode>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append several children in order (builder).
    pub fn with_children<C: Into<VNode>>(mut self, children: impl IntoIterator<Item = C>) -> Self {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn children(&self) -> &[VNode] {
        &self.children
    }
}

/// Build an element from a tag, attribute pairs and children.
///
/// Either collection may be empty. Tag names and attribute values are not
/// validated; whatever the host accepts is accepted.
///
/// ```
/// use gilt_vdom::vnode::{create_element, VNode};
///
/// let el = create_element(
///     "h1",
///     [("id", "title")],
///     [VNode::from("Hello World - "), VNode::text(3)],
/// );
/// assert_eq!(el.children().len(), 2);
/// ```
pub fn create_element<K, V, C>(
    tag: impl Into<String>,
    attributes: impl IntoIterator<Item = (K, V)>,
    children: impl IntoIterator<Item = C>,
) -> Element
where
    K: Into<String>,
    V: fmt::Display,
    C: Into<VNode>,
{
    Element::new(tag)
        .with_attributes(attributes.into_iter().collect())
        .with_children(children)
}
