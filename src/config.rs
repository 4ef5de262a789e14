//! Widget configuration.
//!
//! Everything a widget would otherwise look up in a global theme is listed here and handed to
//! the widget when it’s created. Configs can be written in RON; missing fields take their
//! defaults:
//!
//! ```text
//! (
//!     chip_bar: (style: Scrollable, interim_space: Custom(8.0)),
//!     pulse: (duration: 0.2),
//! )
//! ```

use crate::chip_bar::ChipBarStyle;
use crate::error::Result;
use crate::grid::ContentAlignment;
use birb_material_core::{Color, EdgeInsets};
use serde::{Deserialize, Serialize};

/// Spacing presets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InterimSpace {
    None,
    Space1,
    Space2,
    Space3,
    Space4,
    Space5,
    Space6,
    Space7,
    Space8,
    Space9,
    Custom(f64),
}

impl InterimSpace {
    /// Spacing in points.
    pub fn value(self) -> f64 {
        match self {
            InterimSpace::None => 0.,
            InterimSpace::Space1 => 1.,
            InterimSpace::Space2 => 2.,
            InterimSpace::Space3 => 4.,
            InterimSpace::Space4 => 8.,
            InterimSpace::Space5 => 16.,
            InterimSpace::Space6 => 24.,
            InterimSpace::Space7 => 32.,
            InterimSpace::Space8 => 40.,
            InterimSpace::Space9 => 48.,
            InterimSpace::Custom(value) => value.max(0.),
        }
    }
}

impl Default for InterimSpace {
    fn default() -> Self {
        InterimSpace::Space6
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub chip_bar: ChipBarConfig,
    pub pulse: PulseConfig,
}

impl Config {
    /// Parses a config from RON.
    pub fn from_ron(source: &str) -> Result<Config> {
        Ok(ron::from_str(source)?)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChipBarConfig {
    pub style: ChipBarStyle,
    pub alignment: ContentAlignment,
    pub interim_space: InterimSpace,
    pub content_edge_insets: EdgeInsets,
    /// Width of one grid column in points.
    pub grid_factor: f64,
    pub scroll_bounce: bool,
    /// Seconds from selection to `did_select`.
    pub animation_duration: f64,
    pub background: Color,
    pub divider_color: Color,
    pub divider_thickness: f64,
    pub content_z_position: f64,
}

impl Default for ChipBarConfig {
    fn default() -> Self {
        Self {
            style: ChipBarStyle::Auto,
            alignment: ContentAlignment::Full,
            interim_space: InterimSpace::Space6,
            content_edge_insets: EdgeInsets::zero(),
            grid_factor: 24.,
            scroll_bounce: true,
            animation_duration: 0.3,
            background: Color::WHITE,
            divider_color: Color::grey_lighten3(),
            divider_thickness: 1.,
            content_z_position: 6000.,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PulseConfig {
    /// Seconds for the expand and collapse animations.
    pub duration: f64,
    /// Scale of the pulse shape when fully expanded.
    pub pulse_scale: f64,
    /// Scale of the host layer while pressed.
    pub visual_scale: f64,
    pub pulse_color: Color,
    pub background: Color,
    pub corner_radius: f64,
    pub clip_contents: bool,
    pub interaction_enabled: bool,
}

impl Default for PulseConfig {
    fn default() -> Self {
        Self {
            duration: 0.3,
            pulse_scale: 3.,
            visual_scale: 1.1,
            pulse_color: Color::WHITE.with_alpha(0.5),
            background: Color::WHITE,
            corner_radius: 0.,
            clip_contents: true,
            interaction_enabled: true,
        }
    }
}
