//! Attribute diffing.

use super::patch::{AttributeOp, AttributePatch};
use crate::vnode::Attributes;

/// Compare two attribute maps.
///
/// Emits a `Set` for every attribute of `new` in its insertion order, whether
/// or not the value changed, then a `Remove` for every attribute of `old`
/// that `new` lacks, in `old`'s order. Applying the result twice is the same
/// as applying it once.
pub fn diff_attributes(old: &Attributes, new: &Attributes) -> AttributePatch {
    let sets = new.iter().map(|(name, value)| AttributeOp::Set {
        name: name.to_owned(),
        value: value.to_owned(),
    });
    let removes = old
        .names()
        .filter(|name| !new.contains(name))
        .map(|name| AttributeOp::Remove {
            name: name.to_owned(),
        });
    AttributePatch {
        ops: sets.chain(removes).collect(),
    }
}
