//! Materialize virtual trees into a host and mount them.

use tracing::trace;

use crate::error::DomError;
use crate::host::Host;
use crate::vnode::VNode;

/// Build a brand-new live tree for `vnode`.
///
/// Text leaves become text nodes holding the exact value. Elements get one
/// `set_attribute` call per attribute in insertion order, then each child is
/// rendered and appended in order. Nothing existing in the host is reused.
/// The returned node is detached; [`mount`] it or append it somewhere.
pub fn render<H: Host>(host: &mut H, vnode: &VNode) -> Result<H::Node, DomError> {
    match vnode {
        VNode::Text(value) => {
            let node = host.create_text(value);
            trace!(?node, len = value.len(), "rendered text");
            Ok(node)
        }
        VNode::Element(el) => {
            let node = host.create_element(el.tag());
            for (name, value) in el.attributes().iter() {
                host.set_attribute(node, name, value)?;
            }
            for child in el.children() {
                let child_node = render(host, child)?;
                host.append_child(node, child_node)?;
            }
            trace!(?node, tag = el.tag(), children = el.children().len(), "rendered element");
            Ok(node)
        }
    }
}

/// Install `node` in place of `target` and return `node`.
///
/// Meant to be called once, to swap a placeholder for the first render.
/// `target` is discarded; later updates go through patches.
pub fn mount<H: Host>(host: &mut H, node: H::Node, target: H::Node) -> Result<H::Node, DomError> {
    host.replace_with(target, node)?;
    trace!(?node, ?target, "mounted");
    Ok(node)
}

/// Fail unless `target` exists and has a parent to be replaced in.
///
/// Run before rendering a replacement, so a bad target does not leave a
/// freshly rendered subtree orphaned in the host.
pub(crate) fn expect_attached<H: Host>(host: &H, target: H::Node) -> Result<(), DomError> {
    match host.parent_node(target)? {
        Some(_) => Ok(()),
        None => Err(DomError::detached(target)),
    }
}
