use crate::layer::Layer;
use crate::view::ViewId;
use cgmath::{Vector2, Zero};

/// Scroll state of a scrolling native view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollState {
    /// Position of the viewport within the content.
    pub content_offset: Vector2<f64>,

    /// Total size of the scrollable content.
    pub content_size: Vector2<f64>,

    /// Whether the viewport may overscroll and bounce back.
    pub bounces: bool,
}

impl Default for ScrollState {
    fn default() -> Self {
        ScrollState {
            content_offset: Vector2::zero(),
            content_size: Vector2::zero(),
            bounces: true,
        }
    }
}

/// Patches for native views.
#[derive(Debug, Clone, PartialEq)]
pub enum Patch {
    /// Updates or creates a view.
    Update(ViewId, Layer),

    /// Set up a parent-child relationship.
    ///
    /// The child is detached from its current superview (if any) and appended to the end of the
    /// parent’s subviews.
    Subview(ViewId, ViewId),

    /// Removes a view and all of its descendants, detaching it from its superview.
    Remove(ViewId),

    /// Sets the scroll state of a view.
    Scroll(ViewId, ScrollState),
}

impl Patch {
    /// The view this patch targets.
    pub fn view(&self) -> ViewId {
        match self {
            Patch::Update(id, _) | Patch::Remove(id) | Patch::Scroll(id, _) => *id,
            Patch::Subview(_, child) => *child,
        }
    }
}

/// A batch of patches that become visible together.
///
/// With a nonzero duration, the renderer animates every property change in the batch together
/// over that many seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    duration: f64,
    patches: Vec<Patch>,
}

impl Transaction {
    /// A transaction that applies without animation.
    pub fn instant() -> Transaction {
        Transaction::animated(0.)
    }

    /// A transaction that animates over `duration` seconds.
    pub fn animated(duration: f64) -> Transaction {
        Transaction {
            duration: duration.max(0.),
            patches: Vec::new(),
        }
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn patches(&self) -> &[Patch] {
        &self.patches
    }

    pub fn len(&self) -> usize {
        self.patches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patches.is_empty()
    }

    pub fn push(&mut self, patch: Patch) {
        self.patches.push(patch);
    }

    pub fn update(&mut self, view: ViewId, layer: Layer) -> &mut Self {
        self.patches.push(Patch::Update(view, layer));
        self
    }

    pub fn subview(&mut self, view: ViewId, subview: ViewId) -> &mut Self {
        self.patches.push(Patch::Subview(view, subview));
        self
    }

    pub fn remove(&mut self, view: ViewId) -> &mut Self {
        self.patches.push(Patch::Remove(view));
        self
    }

    pub fn scroll(&mut self, view: ViewId, scroll: ScrollState) -> &mut Self {
        self.patches.push(Patch::Scroll(view, scroll));
        self
    }
}
