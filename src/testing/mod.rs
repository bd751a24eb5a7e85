//! Headless testing helpers: Pilot, snapshot helpers.
//!
//! Use the [`Pilot`] to drive mount/update cycles against an in-memory
//! [`Document`](crate::dom::Document). Use [`to_html`] and related helpers to
//! capture the live tree as HTML text for snapshot-style assertions.

pub mod pilot;
pub mod snapshot;

pub use pilot::Pilot;
pub use snapshot::{document_to_html, to_html};
