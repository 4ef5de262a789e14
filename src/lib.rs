//! Material widgets for birb.
//!
//! - [`ChipBar`]: a horizontal bar of selectable chips, flanked by optional left and right views,
//!   that either shares its width evenly between the chips or scrolls them.
//! - [`PulseOverlay`]: a touch-driven pulse highlight for any layer.
//!
//! Widgets talk to the renderer exclusively through [`Transaction`]s handed to a
//! [`Compositor`]. A [`Host`] owns the receiving end and applies them to its native-view tree.
//!
//! All widget methods are meant to be called from the UI thread, in response to layout, touch,
//! and frame events delivered by the host framework.

pub mod chip_bar;
pub mod config;
mod error;
pub mod grid;
mod host;
pub mod pulse;

pub use chip_bar::{ChipBar, ChipBarStyle, ChipItem, ScrollMode, SelectionEvent};
pub use config::{ChipBarConfig, Config, InterimSpace, PulseConfig};
pub use error::{Error, Result};
pub use grid::ContentAlignment;
pub use host::{Compositor, Host};
pub use pulse::PulseOverlay;

pub use birb_material_core::{EdgeInsets, Item, Layer, Rect, Touch, TouchPhase, Transaction, ViewId};
