//! Root: a mounted virtual tree plus the live node it currently maps to.
//!
//! [`Root`] runs the render/mount/diff/patch cycle and threads replacement
//! nodes forward, so callers cannot patch a node an earlier cycle discarded.

use tracing::debug;

use crate::diff::{diff, PatchConfig, Patched};
use crate::error::DomError;
use crate::host::Host;
use crate::render::{expect_attached, mount, render};
use crate::vnode::VNode;

// ---------------------------------------------------------------------------
// RootConfig
// ---------------------------------------------------------------------------

/// Configuration for a mounted root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RootConfig {
    /// Options used for every patch this root applies.
    pub patch: PatchConfig,
}

impl RootConfig {
    /// Create a new default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the patch options (builder).
    pub fn with_patch(mut self, patch: PatchConfig) -> Self {
        self.patch = patch;
        self
    }
}

// ---------------------------------------------------------------------------
// Root
// ---------------------------------------------------------------------------

/// A virtual tree mounted into a host.
#[derive(Debug)]
pub struct Root<N> {
    vnode: VNode,
    node: N,
    config: RootConfig,
    updates: u64,
}

impl<N: Copy + Eq + std::fmt::Debug> Root<N> {
    /// Render `vnode` and mount it in place of `target`.
    ///
    /// `target` must be attached; it is checked before anything is rendered.
    pub fn mount<H>(host: &mut H, vnode: VNode, target: N, config: RootConfig) -> Result<Self, DomError>
    where
        H: Host<Node = N>,
    {
        expect_attached(host, target)?;
        let live = render(host, &vnode)?;
        let node = mount(host, live, target)?;
        debug!(?node, "root mounted");
        Ok(Self {
            vnode,
            node,
            config,
            updates: 0,
        })
    }

    /// Reconcile the live tree with `vnode`.
    ///
    /// On success `vnode` becomes the stored tree and the canonical live node
    /// is kept for the next update. On error nothing is stored and the live
    /// tree may be partially patched, so later updates diff against a tree
    /// that no longer matches it and keep failing. Call [`Root::remount`] to
    /// recover.
    pub fn update<H>(&mut self, host: &mut H, vnode: VNode) -> Result<Patched<N>, DomError>
    where
        H: Host<Node = N>,
    {
        let patch = diff(&self.vnode, &vnode);
        if patch.is_noop() {
            debug!(node = ?self.node, "root update is a no-op");
        }
        let patched = patch.apply_with(host, self.node, &self.config.patch)?;
        // A top-level diff always has a new tree, so it never removes the root.
        if let Some(node) = patched.node() {
            self.node = node;
        }
        self.vnode = vnode;
        self.updates += 1;
        debug!(node = ?self.node, updates = self.updates, ?patched, "root updated");
        Ok(patched)
    }

    /// Discard the live tree and render `vnode` from scratch in its place.
    ///
    /// Recovers a root whose live tree drifted from the stored virtual tree,
    /// for example after an update failed halfway through a patch.
    pub fn remount<H>(&mut self, host: &mut H, vnode: VNode) -> Result<N, DomError>
    where
        H: Host<Node = N>,
    {
        expect_attached(host, self.node)?;
        let live = render(host, &vnode)?;
        host.replace_with(self.node, live)?;
        debug!(old = ?self.node, node = ?live, "root remounted");
        self.node = live;
        self.vnode = vnode;
        Ok(live)
    }

    /// The live node currently holding the rendered tree.
    pub fn node(&self) -> N {
        self.node
    }

    /// The virtual tree the live node was last reconciled with.
    pub fn vnode(&self) -> &VNode {
        &self.vnode
    }

    /// Number of successful updates since mount.
    pub fn updates(&self) -> u64 {
        self.updates
    }

    pub fn config(&self) -> &RootConfig {
        &self.config
    }
}
