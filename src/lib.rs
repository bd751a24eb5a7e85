//! # gilt-vdom
//!
//! A minimal virtual tree renderer and reconciler.
//!
//! Build an immutable virtual tree, [`render`](render::render) it into a live
//! tree once and [`mount`](render::mount) it over a placeholder. On every
//! update build a new tree, [`diff`](diff::diff) it against the previous one
//! and apply the resulting [`Patch`](diff::Patch) to the live root. The patch
//! reports the canonical live node afterwards; keep it for the next cycle, or
//! let a [`Root`](root::Root) do the bookkeeping.
//!
//! ## Core Systems
//!
//! - **[`vnode`]** — Immutable virtual tree: `Element`, `VNode`, ordered `Attributes`
//! - **[`host`]** — The `Host` trait: what the reconciler needs from a display engine
//! - **[`dom`]** — Slotmap-backed live `Document` implementing `Host`
//! - **[`render`]** — Materialize and mount virtual trees
//! - **[`diff`]** — Attribute, children and tree diffing; patch values and their interpreter
//! - **[`root`]** — Mounted root that threads replacements across updates
//! - **[`testing`]** — Headless `Pilot` and HTML snapshot helpers
//! - **[`error`]** — `DomError`
//!
//! ## Logging
//!
//! Rendering and patching emit [`tracing`] events (`trace` per rendered node,
//! `debug` per replace/remove and root update, `warn` on desync). No
//! subscriber is installed by the crate.

// Foundation
pub mod error;
pub mod vnode;

// Live tree
pub mod dom;
pub mod host;

// Reconciliation
pub mod diff;
pub mod render;
pub mod root;

// Testing
pub mod testing;

pub use diff::{diff, Patch, Patched};
pub use error::DomError;
pub use render::{mount, render};
pub use vnode::{create_element, Element, VNode};

// Proc macros (feature-gated)
#[cfg(feature = "macros")]
pub use gilt_vdom_macros::view;
