//! Headless native-view model for birb widgets.
//!
//! # Conceptual overview
//! Widgets don’t draw anything themselves. They own plain data (items with an intrinsic size
//! measured by the host, and the layers that represent them on screen) and describe every visual
//! change as a [`Transaction`]: a batch of [`Patch`]es that the renderer applies together.
//!
//! ## Layers
//! A [`Layer`] is a complete snapshot of a native view’s visual properties: its frame in the
//! superview, colors, corner radius, and a 3D transform applied around the frame center. Layers
//! can be hit-tested as they are currently rendered, transform included.
//!
//! ## Transactions
//! All patches in a transaction become visible at once. A transaction with a nonzero duration
//! animates all of its property changes together; an instant transaction (duration zero) snaps.
//! There is no other ordering guarantee between widgets.
//!
//! ## NVTree
//! The [`NVTree`] is the native-view hierarchy the renderer sees. It applies transactions
//! atomically: if any patch in a transaction is invalid, none of it is applied.
//!
//! ## Coordinate System
//! The origin is at the top left corner of the superview. The y-axis is oriented such that
//! positive y points down. The z-axis points outwards from the screen.

pub mod color;
pub mod events;
mod layer;
mod nv_tree;
mod rect;
mod transaction;
mod view;

pub use color::Color;
pub use events::{Handler, PointerDevice, Touch, TouchPhase};
pub use layer::Layer;
pub use nv_tree::{NVTree, PatchError};
pub use rect::{EdgeInsets, Rect};
pub use transaction::{Patch, ScrollState, Transaction};
pub use view::{GridPlacement, Item, Span, ViewId};

pub use cgmath;
