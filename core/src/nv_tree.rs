use crate::layer::Layer;
use crate::transaction::{Patch, ScrollState, Transaction};
use crate::view::ViewId;
use std::collections::HashMap;
use thiserror::Error;

/// Errors that may occur when running a patch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PatchError {
    #[error("no such view: {0:?}")]
    NoSuchView(ViewId),
    #[error("view {0:?} cannot be its own superview")]
    SelfParent(ViewId),
}

#[derive(Debug, Clone)]
struct NVTNode {
    layer: Layer,
    superview: Option<ViewId>,
    subviews: Vec<ViewId>,
    scroll: Option<ScrollState>,
    /// Duration of the transaction that last touched this node.
    last_duration: f64,
}

/// The native-view tree: the view hierarchy as the renderer sees it.
///
/// Transactions are applied atomically; a transaction containing an invalid patch leaves the
/// tree untouched.
#[derive(Debug, Clone, Default)]
pub struct NVTree {
    nodes: HashMap<ViewId, NVTNode>,
}

impl NVTree {
    pub fn new() -> NVTree {
        NVTree {
            nodes: HashMap::new(),
        }
    }

    /// Applies all patches of a transaction, or none of them.
    pub fn apply(&mut self, transaction: &Transaction) -> Result<(), PatchError> {
        let mut staged = self.nodes.clone();
        for patch in transaction.patches() {
            Self::patch(&mut staged, patch, transaction.duration())?;
        }
        self.nodes = staged;
        Ok(())
    }

    fn patch(
        nodes: &mut HashMap<ViewId, NVTNode>,
        patch: &Patch,
        duration: f64,
    ) -> Result<(), PatchError> {
        match patch {
            Patch::Update(id, layer) => {
                Self::update_view(nodes, *id, *layer, duration);
                Ok(())
            }
            Patch::Subview(id, subview) => Self::add_subview(nodes, *id, *subview, duration),
            Patch::Remove(id) => Self::remove_view(nodes, *id),
            Patch::Scroll(id, scroll) => match nodes.get_mut(id) {
                Some(node) => {
                    node.scroll = Some(*scroll);
                    node.last_duration = duration;
                    Ok(())
                }
                None => Err(PatchError::NoSuchView(*id)),
            },
        }
    }

    /// Updates or adds a view.
    fn update_view(nodes: &mut HashMap<ViewId, NVTNode>, id: ViewId, layer: Layer, duration: f64) {
        if let Some(node) = nodes.get_mut(&id) {
            node.layer = layer;
            node.last_duration = duration;
        } else {
            nodes.insert(
                id,
                NVTNode {
                    layer,
                    superview: None,
                    subviews: Vec::new(),
                    scroll: None,
                    last_duration: duration,
                },
            );
        }
    }

    fn add_subview(
        nodes: &mut HashMap<ViewId, NVTNode>,
        id: ViewId,
        subview: ViewId,
        duration: f64,
    ) -> Result<(), PatchError> {
        if id == subview {
            return Err(PatchError::SelfParent(id));
        }
        if !nodes.contains_key(&id) {
            return Err(PatchError::NoSuchView(id));
        }

        let old_superview = match nodes.get_mut(&subview) {
            Some(node) => {
                node.last_duration = duration;
                node.superview.replace(id)
            }
            None => return Err(PatchError::NoSuchView(subview)),
        };
        if let Some(old) = old_superview.and_then(|old| nodes.get_mut(&old)) {
            old.subviews.retain(|i| *i != subview);
        }

        if let Some(node) = nodes.get_mut(&id) {
            node.subviews.push(subview);
        }
        Ok(())
    }

    /// Removes a view and its descendants, detaching it from its superview.
    fn remove_view(nodes: &mut HashMap<ViewId, NVTNode>, id: ViewId) -> Result<(), PatchError> {
        let node = nodes.remove(&id).ok_or(PatchError::NoSuchView(id))?;
        if let Some(superview) = node.superview.and_then(|s| nodes.get_mut(&s)) {
            superview.subviews.retain(|i| *i != id);
        }

        let mut stack = node.subviews;
        while let Some(id) = stack.pop() {
            if let Some(node) = nodes.remove(&id) {
                stack.extend(node.subviews);
            }
        }
        Ok(())
    }

    pub fn contains(&self, id: ViewId) -> bool {
        self.nodes.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn layer(&self, id: ViewId) -> Option<&Layer> {
        self.nodes.get(&id).map(|node| &node.layer)
    }

    pub fn superview(&self, id: ViewId) -> Option<ViewId> {
        self.nodes.get(&id).and_then(|node| node.superview)
    }

    /// Subviews in order; empty for unknown views.
    pub fn subviews(&self, id: ViewId) -> &[ViewId] {
        self.nodes
            .get(&id)
            .map(|node| node.subviews.as_slice())
            .unwrap_or(&[])
    }

    pub fn scroll(&self, id: ViewId) -> Option<&ScrollState> {
        self.nodes.get(&id).and_then(|node| node.scroll.as_ref())
    }

    pub fn last_duration(&self, id: ViewId) -> Option<f64> {
        self.nodes.get(&id).map(|node| node.last_duration)
    }
}
