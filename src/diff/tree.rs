//! Top-level tree diffing.

use super::attributes::diff_attributes;
use super::children::diff_children;
use super::patch::Patch;
use crate::vnode::VNode;

/// Compare two virtual trees and return the patch that turns a live tree
/// rendered from `old` into one matching `new`.
pub fn diff(old: &VNode, new: &VNode) -> Patch {
    diff_child(old, Some(new))
}

/// Compare one old child with its positional counterpart, which may be absent.
///
/// Decision order:
/// 1. `new` absent: [`Patch::Remove`].
/// 2. Either side text: [`Patch::NoOp`] if both are equal text, otherwise
///    [`Patch::Replace`].
/// 3. Different tags: [`Patch::Replace`] with the whole new subtree.
/// 4. Same tag: [`Patch::Mutate`] with attribute then children patches.
pub fn diff_child(old: &VNode, new: Option<&VNode>) -> Patch {
    let Some(new) = new else {
        return Patch::Remove;
    };

    match (old, new) {
        (VNode::Text(a), VNode::Text(b)) if a == b => Patch::NoOp,
        (VNode::Text(_), _) | (_, VNode::Text(_)) => Patch::Replace(new.clone()),
        (VNode::Element(a), VNode::Element(b)) if a.tag() != b.tag() => Patch::Replace(new.clone()),
        (VNode::Element(a), VNode::Element(b)) => Patch::Mutate {
            tag: b.tag().to_owned(),
            attributes: diff_attributes(a.attributes(), b.attributes()),
            children: diff_children(a.children(), b.children()),
        },
    }
}
