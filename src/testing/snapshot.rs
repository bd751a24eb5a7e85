//! Snapshot rendering helpers.
//!
//! Serialize a live [`Document`] subtree as HTML text, suitable for
//! snapshot testing and assertions.

use std::fmt::Write;

use crate::dom::{Document, NodeData, NodeId};

/// Elements serialized without a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Serialize the subtree rooted at `node` as HTML.
///
/// Attributes appear in their stored order. Text is escaped for `&`, `<` and
/// `>`; attribute values additionally for `"`. Void elements (`img`, `input`,
/// ...) have no closing tag. A stale handle serializes as an empty string.
///
/// ```
/// use gilt_vdom::dom::Document;
/// use gilt_vdom::render::render;
/// use gilt_vdom::testing::to_html;
/// use gilt_vdom::vnode::{Element, VNode};
///
/// let mut doc = Document::new();
/// let node = render(&mut doc, &VNode::from(Element::new("p").with_child("a < b"))).unwrap();
/// assert_eq!(to_html(&doc, node), "<p>a &lt; b</p>");
/// ```
pub fn to_html(doc: &Document, node: NodeId) -> String {
    let mut out = String::new();
    write_node(doc, node, &mut out);
    out
}

/// Serialize the children of `body`, i.e. everything mounted in the document.
pub fn document_to_html(doc: &Document) -> String {
    let mut out = String::new();
    for &child in doc.children(doc.body()) {
        write_node(doc, child, &mut out);
    }
    out
}

fn write_node(doc: &Document, node: NodeId, out: &mut String) {
    match doc.get(node) {
        None => {}
        Some(NodeData::Text(value)) => escape_into(value, false, out),
        Some(NodeData::Element { tag, attributes }) => {
            out.push('<');
            out.push_str(tag);
            for (name, value) in attributes.iter() {
                // Writing into a String cannot fail.
                let _ = write!(out, " {name}=\"");
                escape_into(value, true, out);
                out.push('"');
            }
            out.push('>');
            if VOID_ELEMENTS.contains(&tag.as_str()) && doc.children(node).is_empty() {
                return;
            }
            for &child in doc.children(node) {
                write_node(doc, child, out);
            }
            let _ = write!(out, "</{tag}>");
        }
    }
}

fn escape_into(value: &str, attribute: bool, out: &mut String) {
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if attribute => out.push_str("&quot;"),
            other => out.push(other),
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
