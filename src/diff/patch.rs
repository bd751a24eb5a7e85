//! Patch values and the interpreter that applies them to a host.

use tracing::{debug, warn};

use crate::error::DomError;
use crate::host::Host;
use crate::render::{expect_attached, render};
use crate::vnode::VNode;

// ---------------------------------------------------------------------------
// PatchConfig
// ---------------------------------------------------------------------------

/// Options for applying patches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchConfig {
    /// Check that the live tree still matches the old virtual tree: element
    /// tags for `Mutate` patches and child counts for children patches.
    ///
    /// When off, tags are not compared and slot patches are zipped with the
    /// live children, silently skipping whichever side is longer.
    pub verify: bool,
}

impl Default for PatchConfig {
    fn default() -> Self {
        Self { verify: true }
    }
}

impl PatchConfig {
    /// Create a new default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable desync checks (builder).
    pub fn with_verify(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }
}

// ---------------------------------------------------------------------------
// Patch
// ---------------------------------------------------------------------------

/// A single attribute mutation on one element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeOp {
    Set { name: String, value: String },
    Remove { name: String },
}

/// Ordered attribute mutations for one element: all sets, then all removes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributePatch {
    pub ops: Vec<AttributeOp>,
}

/// Positional child mutations for one parent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChildrenPatch {
    /// One patch per old child, paired with the parent's live children by position.
    pub slots: Vec<Patch>,
    /// New children past the old length, rendered and appended in order.
    pub appends: Vec<VNode>,
}

/// A deferred mutation of one live node, computed by [`diff`](super::diff).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch {
    /// Nothing to do.
    NoOp,
    /// Detach the node from its parent and discard it.
    Remove,
    /// Render this subtree and swap it in for the node.
    Replace(VNode),
    /// Same element: patch attributes, then children, in place.
    Mutate {
        tag: String,
        attributes: AttributePatch,
        children: ChildrenPatch,
    },
}

/// What applying a patch did to the node it was given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Patched<N> {
    /// Untouched or mutated in place; the node stays canonical.
    Same(N),
    /// The node was discarded; this one is canonical from now on.
    Replaced(N),
    /// The node was removed and nothing replaces it.
    Removed,
}

impl<N: Copy> Patched<N> {
    /// The canonical live node after the patch, `None` if it was removed.
    pub fn node(&self) -> Option<N> {
        match *self {
            Self::Same(node) | Self::Replaced(node) => Some(node),
            Self::Removed => None,
        }
    }
}

impl Patch {
    /// Whether applying this patch can never change the live tree.
    pub fn is_noop(&self) -> bool {
        match self {
            Self::NoOp => true,
            Self::Remove | Self::Replace(_) => false,
            // Attribute sets are unconditional, so only an empty op list is inert.
            Self::Mutate {
                attributes,
                children,
                ..
            } => {
                attributes.ops.is_empty()
                    && children.appends.is_empty()
                    && children.slots.iter().all(Patch::is_noop)
            }
        }
    }

    /// Apply to `node` with the default [`PatchConfig`].
    pub fn apply<H: Host>(&self, host: &mut H, node: H::Node) -> Result<Patched<H::Node>, DomError> {
        self.apply_with(host, node, &PatchConfig::default())
    }

    /// Apply to `node`, returning what became of it.
    ///
    /// The caller must keep [`Patched::node`] as the live counterpart of the
    /// new virtual tree; the old handle is stale after a replace or remove.
    pub fn apply_with<H: Host>(
        &self,
        host: &mut H,
        node: H::Node,
        config: &PatchConfig,
    ) -> Result<Patched<H::Node>, DomError> {
        match self {
            Self::NoOp => {
                host.tag_name(node)?;
                Ok(Patched::Same(node))
            }
            Self::Remove => {
                host.remove(node)?;
                debug!(?node, "removed node");
                Ok(Patched::Removed)
            }
            Self::Replace(vnode) => {
                // Reject a stale or detached target before allocating the replacement.
                expect_attached(host, node)?;
                let new = render(host, vnode)?;
                host.replace_with(node, new)?;
                debug!(old = ?node, ?new, "replaced node");
                Ok(Patched::Replaced(new))
            }
            Self::Mutate {
                tag,
                attributes,
                children,
            } => {
                check_element(host, node, tag, config)?;
                attributes.apply(host, node)?;
                children.apply(host, node, config)?;
                Ok(Patched::Same(node))
            }
        }
    }
}

impl AttributePatch {
    /// Run every op on `node` in order.
    pub fn apply<H: Host>(&self, host: &mut H, node: H::Node) -> Result<(), DomError> {
        for op in &self.ops {
            match op {
                AttributeOp::Set { name, value } => host.set_attribute(node, name, value)?,
                AttributeOp::Remove { name } => host.remove_attribute(node, name)?,
            }
        }
        Ok(())
    }
}

impl ChildrenPatch {
    /// Apply slot patches to `parent`'s current children, then append new ones.
    ///
    /// The live children are snapshotted before any slot runs, so a removal
    /// or replacement does not shift the pairing of later slots.
    pub fn apply<H: Host>(
        &self,
        host: &mut H,
        parent: H::Node,
        config: &PatchConfig,
    ) -> Result<(), DomError> {
        let live = host.child_nodes(parent)?;
        if config.verify && live.len() != self.slots.len() {
            let err = DomError::ChildCountMismatch {
                expected: self.slots.len(),
                found: live.len(),
            };
            warn!(?parent, %err, "children patch rejected");
            return Err(err);
        }

        if !self.appends.is_empty() && host.tag_name(parent)?.is_none() {
            return Err(DomError::not_an_element(parent));
        }

        for (patch, child) in self.slots.iter().zip(live) {
            patch.apply_with(host, child, config)?;
        }
        for vnode in &self.appends {
            let child = render(host, vnode)?;
            host.append_child(parent, child)?;
        }
        Ok(())
    }
}

fn check_element<H: Host>(
    host: &H,
    node: H::Node,
    expected: &str,
    config: &PatchConfig,
) -> Result<(), DomError> {
    match host.tag_name(node)? {
        None => Err(DomError::not_an_element(node)),
        Some(found) if config.verify && found != expected => {
            let err = DomError::TagMismatch {
                expected: expected.to_owned(),
                found: found.to_owned(),
            };
            warn!(?node, %err, "mutate patch rejected");
            Err(err)
        }
        Some(_) => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{Document, NodeData};
    use crate::vnode::Element;

    fn set(name: &str, value: &str) -> AttributeOp {
        AttributeOp::Set {
            name: name.into(),
            value: value.into(),
        }
    }

    #[test]
    fn noop_returns_same_node() {
        let mut doc = Document::new();
        let node = doc.insert_child(doc.body(), NodeData::text("a")).unwrap();
        assert_eq!(Patch::NoOp.apply(&mut doc, node).unwrap(), Patched::Same(node));
    }

    #[test]
    fn noop_on_stale_node_fails() {
        let mut doc = Document::new();
        let node = doc.insert_child(doc.body(), NodeData::text("a")).unwrap();
        doc.remove(node).unwrap();
        assert!(matches!(
            Patch::NoOp.apply(&mut doc, node),
            Err(DomError::StaleNode { .. })
        ));
    }

    #[test]
    fn replace_renders_and_swaps() {
        let mut doc = Document::new();
        let old = doc.insert_child(doc.body(), NodeData::text("a")).unwrap();
        let patched = Patch::Replace(VNode::from("b")).apply(&mut doc, old).unwrap();
        let Patched::Replaced(new) = patched else {
            panic!("expected a replacement, got {patched:?}");
        };
        assert_ne!(new, old);
        assert!(!doc.contains(old));
        assert_eq!(doc.children(doc.body()), &[new]);
        assert_eq!(doc.get(new), Some(&NodeData::text("b")));
    }

    #[test]
    fn replace_on_detached_node_allocates_nothing() {
        let mut doc = Document::new();
        let lone = doc.create_text("a");
        let before = doc.len();
        assert!(matches!(
            Patch::Replace(VNode::from("b")).apply(&mut doc, lone),
            Err(DomError::Detached { .. })
        ));
        assert_eq!(doc.len(), before);

        let div = doc.create_element("div");
        let list = Element::new("ul").with_children(
            ["x", "y", "z"].map(|item| Element::new("li").with_child(item)),
        );
        let before = doc.len();
        let patch = crate::diff::diff(&Element::new("div").into(), &list.into());
        assert!(matches!(
            patch.apply(&mut doc, div),
            Err(DomError::Detached { .. })
        ));
        assert_eq!(doc.len(), before);
    }

    #[test]
    fn appends_under_text_parent_allocate_nothing() {
        let mut doc = Document::new();
        let text = doc.insert_child(doc.body(), NodeData::text("t")).unwrap();
        let before = doc.len();
        let patch = ChildrenPatch {
            slots: Vec::new(),
            appends: vec![VNode::from(Element::new("p").with_child("x"))],
        };
        assert!(matches!(
            patch.apply(&mut doc, text, &PatchConfig::default()),
            Err(DomError::NotAnElement { .. })
        ));
        assert_eq!(doc.len(), before);
    }

    #[test]
    fn remove_yields_no_node() {
        let mut doc = Document::new();
        let node = doc.insert_child(doc.body(), NodeData::element("p")).unwrap();
        let patched = Patch::Remove.apply(&mut doc, node).unwrap();
        assert_eq!(patched, Patched::Removed);
        assert_eq!(patched.node(), None);
        assert!(doc.children(doc.body()).is_empty());
    }

    #[test]
    fn mutate_applies_sets_then_removes() {
        let mut doc = Document::new();
        let node = doc
            .insert_child(doc.body(), NodeData::element("div").with_attr("class", "x"))
            .unwrap();
        let patch = Patch::Mutate {
            tag: "div".into(),
            attributes: AttributePatch {
                ops: vec![
                    set("id", "a"),
                    AttributeOp::Remove {
                        name: "class".into(),
                    },
                ],
            },
            children: ChildrenPatch::default(),
        };
        assert_eq!(patch.apply(&mut doc, node).unwrap(), Patched::Same(node));
        let attrs = doc.get(node).unwrap().attributes().unwrap();
        assert_eq!(attrs.iter().collect::<Vec<_>>(), vec![("id", "a")]);
    }

    #[test]
    fn mutate_on_wrong_tag_is_desync() {
        let mut doc = Document::new();
        let node = doc.insert_child(doc.body(), NodeData::element("span")).unwrap();
        let patch = Patch::Mutate {
            tag: "div".into(),
            attributes: AttributePatch::default(),
            children: ChildrenPatch::default(),
        };
        let err = patch.apply(&mut doc, node).unwrap_err();
        assert!(err.is_desync());

        // Lenient mode skips the tag comparison.
        let lenient = PatchConfig::new().with_verify(false);
        assert_eq!(
            patch.apply_with(&mut doc, node, &lenient).unwrap(),
            Patched::Same(node)
        );
    }

    #[test]
    fn mutate_on_text_fails() {
        let mut doc = Document::new();
        let node = doc.insert_child(doc.body(), NodeData::text("t")).unwrap();
        let patch = Patch::Mutate {
            tag: "div".into(),
            attributes: AttributePatch::default(),
            children: ChildrenPatch::default(),
        };
        assert!(matches!(
            patch.apply_with(&mut doc, node, &PatchConfig::new().with_verify(false)),
            Err(DomError::NotAnElement { .. })
        ));
    }

    #[test]
    fn children_patch_count_mismatch() {
        let mut doc = Document::new();
        let parent = doc.insert_child(doc.body(), NodeData::element("ul")).unwrap();
        doc.insert_child(parent, NodeData::text("only")).unwrap();
        let patch = ChildrenPatch {
            slots: vec![Patch::NoOp, Patch::NoOp],
            appends: Vec::new(),
        };
        let err = patch.apply(&mut doc, parent, &PatchConfig::default()).unwrap_err();
        assert_eq!(
            err,
            DomError::ChildCountMismatch {
                expected: 2,
                found: 1
            }
        );
        let lenient = PatchConfig::new().with_verify(false);
        patch.apply(&mut doc, parent, &lenient).unwrap();
        assert_eq!(doc.children(parent).len(), 1);
    }

    #[test]
    fn children_patch_snapshot_survives_removals() {
        let mut doc = Document::new();
        let parent = doc.insert_child(doc.body(), NodeData::element("ul")).unwrap();
        let a = doc.insert_child(parent, NodeData::text("a")).unwrap();
        let _b = doc.insert_child(parent, NodeData::text("b")).unwrap();
        let _c = doc.insert_child(parent, NodeData::text("c")).unwrap();
        let patch = ChildrenPatch {
            slots: vec![Patch::NoOp, Patch::Remove, Patch::Remove],
            appends: vec![VNode::from("d")],
        };
        patch.apply(&mut doc, parent, &PatchConfig::default()).unwrap();
        let kids = doc.children(parent).to_vec();
        assert_eq!(kids.len(), 2);
        assert_eq!(kids[0], a);
        assert_eq!(doc.text_content(parent), "ad");
    }

    #[test]
    fn is_noop_classification() {
        assert!(Patch::NoOp.is_noop());
        assert!(!Patch::Remove.is_noop());
        assert!(!Patch::Replace(VNode::from(Element::new("a"))).is_noop());
        let inert = Patch::Mutate {
            tag: "div".into(),
            attributes: AttributePatch::default(),
            children: ChildrenPatch {
                slots: vec![Patch::NoOp],
                appends: Vec::new(),
            },
        };
        assert!(inert.is_noop());
        let with_set = Patch::Mutate {
            tag: "div".into(),
            attributes: AttributePatch {
                ops: vec![set("id", "a")],
            },
            children: ChildrenPatch::default(),
        };
        assert!(!with_set.is_noop());
    }
}
