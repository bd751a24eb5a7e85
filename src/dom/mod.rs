//! Live document: slotmap-backed node arena implementing [`Host`](crate::host::Host).

pub mod node;
pub mod tree;
pub mod query;

pub use node::{NodeId, NodeData};
pub use tree::Document;
