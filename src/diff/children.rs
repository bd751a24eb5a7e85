//! Positional (non-keyed) children diffing.

use super::patch::ChildrenPatch;
use super::tree::diff_child;
use crate::vnode::VNode;

/// Compare two child lists by index.
///
/// Every old child gets a slot patch against the new child at the same index,
/// or a `Remove` when the new list is shorter. New children past the old
/// length become appends. Children are never matched across positions, so a
/// reorder or a non-tail insertion shows up as per-slot replacements.
pub fn diff_children(old: &[VNode], new: &[VNode]) -> ChildrenPatch {
    let slots = old
        .iter()
        .enumerate()
        .map(|(i, old_child)| diff_child(old_child, new.get(i)))
        .collect();
    let appends = new.get(old.len()..).unwrap_or_default().to_vec();
    ChildrenPatch { slots, appends }
}
