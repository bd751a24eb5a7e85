//! Reconciliation: compare two virtual trees and patch the live tree.
//!
//! [`diff`] returns a [`Patch`], a plain value with four shapes (no-op,
//! remove, replace, mutate in place). [`Patch::apply`] interprets it against
//! a [`Host`](crate::host::Host) and reports the canonical live node in a
//! [`Patched`].

pub mod attributes;
pub mod children;
pub mod patch;
pub mod tree;

pub use attributes::diff_attributes;
pub use children::diff_children;
pub use patch::{AttributeOp, AttributePatch, ChildrenPatch, Patch, PatchConfig, Patched};
pub use tree::{diff, diff_child};
