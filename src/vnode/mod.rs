//! Virtual tree: immutable element/text nodes and their attribute maps.

pub mod attributes;
pub mod element;

pub use attributes::Attributes;
pub use element::{create_element, Element, VNode};
