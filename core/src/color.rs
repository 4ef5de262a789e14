use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    pub const CLEAR: Color = Color::rgba(0., 0., 0., 0.);
    pub const BLACK: Color = Color::rgba(0., 0., 0., 1.);
    pub const WHITE: Color = Color::rgba(1., 1., 1., 1.);

    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Color {
        Color { r, g, b, a }
    }

    /// Material grey, lighten 3 (#EEEEEE).
    pub fn grey_lighten3() -> Color {
        Color::rgba(238. / 255., 238. / 255., 238. / 255., 1.)
    }

    /// Returns the same color with a different alpha component.
    pub fn with_alpha(self, a: f64) -> Color {
        Color { a, ..self }
    }
}
