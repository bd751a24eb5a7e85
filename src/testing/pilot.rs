//! Pilot: headless driver for mount/update cycles against a [`Document`].
//!
//! A pilot owns a fresh document with a `<div id="app">` placeholder, mounts
//! the first tree there, and reconciles every later tree through a [`Root`].

use crate::diff::Patched;
use crate::dom::{Document, NodeData, NodeId};
use crate::error::DomError;
use crate::root::{Root, RootConfig};
use crate::vnode::VNode;

use super::snapshot::{document_to_html, to_html};

/// Id of the placeholder element the first tree is mounted over.
pub const PLACEHOLDER_ID: &str = "app";

/// Headless reconciliation driver for tests.
#[derive(Debug)]
pub struct Pilot {
    doc: Document,
    root: Root<NodeId>,
}

impl Pilot {
    /// Mount `vnode` over a placeholder in a new document.
    pub fn new(vnode: impl Into<VNode>) -> Result<Self, DomError> {
        Self::with_config(vnode, RootConfig::default())
    }

    /// Mount `vnode` with a custom root configuration.
    pub fn with_config(vnode: impl Into<VNode>, config: RootConfig) -> Result<Self, DomError> {
        let mut doc = Document::new();
        let body = doc.body();
        let placeholder =
            doc.insert_child(body, NodeData::element("div").with_attr("id", PLACEHOLDER_ID))?;
        let root = Root::mount(&mut doc, vnode.into(), placeholder, config)?;
        Ok(Self { doc, root })
    }

    /// Reconcile the document with a new tree.
    pub fn update(&mut self, vnode: impl Into<VNode>) -> Result<Patched<NodeId>, DomError> {
        self.root.update(&mut self.doc, vnode.into())
    }

    /// The live node currently holding the tree.
    pub fn node(&self) -> NodeId {
        self.root.node()
    }

    /// HTML of the mounted tree.
    pub fn html(&self) -> String {
        to_html(&self.doc, self.root.node())
    }

    /// HTML of everything under `body`.
    pub fn document_html(&self) -> String {
        document_to_html(&self.doc)
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    /// Mutable document access, for tests that tamper with the live tree.
    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.doc
    }

    pub fn root(&self) -> &Root<NodeId> {
        &self.root
    }
}
