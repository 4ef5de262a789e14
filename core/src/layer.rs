use crate::color::Color;
use crate::rect::Rect;
use cgmath::{Matrix4, Point2, SquareMatrix, Vector4};

/// Visual properties of a native view.
///
/// This is what gets sent to the native-view tree in a [`Patch::Update`](crate::Patch); it is
/// always a complete snapshot, never a delta.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layer {
    /// Layer frame in the superview’s coordinate system.
    pub frame: Rect,

    /// Background color, with which the layer bounds will be filled--respecting the corner radius.
    pub background: Color,

    /// Corner radius.
    pub corner_radius: f64,

    /// Border (width, color).
    pub border: Option<(f64, Color)>,

    /// Whether contents will be clipped to the layer’s bounds.
    pub clip_contents: bool,

    /// Stacking order among siblings; larger values are drawn on top.
    pub z_position: f64,

    /// Layer affine transform, applied around the frame center.
    pub transform: Matrix4<f64>,

    /// Layer opacity.
    pub opacity: f64,

    /// Hidden layers are neither drawn nor hit-tested.
    pub hidden: bool,
}

impl Default for Layer {
    fn default() -> Self {
        Layer {
            frame: Rect::zero(),
            background: Color::CLEAR,
            corner_radius: 0.,
            border: None,
            clip_contents: false,
            z_position: 0.,
            transform: Matrix4::identity(),
            opacity: 1.,
            hidden: false,
        }
    }
}

impl Layer {
    /// Creates a layer with the given frame and default properties otherwise.
    pub fn with_frame(frame: Rect) -> Layer {
        Layer {
            frame,
            ..Layer::default()
        }
    }

    /// Returns true if the transform is the identity.
    pub fn is_identity(&self) -> bool {
        self.transform == Matrix4::identity()
    }

    /// Returns the horizontal scale factor of the transform.
    pub fn scale(&self) -> f64 {
        self.transform.x.x
    }

    /// Sets a uniform scale transform.
    pub fn set_scale(&mut self, factor: f64) {
        self.transform = Matrix4::from_scale(factor);
    }

    /// Tests whether a point (in the superview’s coordinate system) hits the layer as it is
    /// currently rendered, i.e. with its transform applied.
    pub fn hit_test(&self, point: Point2<f64>) -> bool {
        if self.hidden {
            return false;
        }

        let inverse = match self.transform.invert() {
            Some(inverse) => inverse,
            None => return false,
        };

        let center = self.frame.center();
        let local = inverse * Vector4::new(point.x - center.x, point.y - center.y, 0., 1.);
        let (x, y) = if local.w != 0. && local.w != 1. {
            (local.x / local.w, local.y / local.w)
        } else {
            (local.x, local.y)
        };

        let half = self.frame.size / 2.;
        x.abs() <= half.x && y.abs() <= half.y
    }
}
