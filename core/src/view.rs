use crate::layer::Layer;
use crate::rect::{EdgeInsets, Rect};
use cgmath::Vector2;
use core::fmt;
use uuid::Uuid;

/// A unique identifier for a view.
///
/// (this is just a UUID)
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ViewId(u32, u16, u16, [u8; 8]);

impl ViewId {
    pub fn new() -> ViewId {
        let uuid = Uuid::new_v4();
        let (a, b, c, d) = uuid.as_fields();
        ViewId(a, b, c, *d)
    }
}

impl Default for ViewId {
    fn default() -> Self {
        ViewId::new()
    }
}

impl fmt::Debug for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let uuid = Uuid::from_fields(self.0, self.1, self.2, &self.3);
        write!(f, "ViewId({})", &uuid.simple().to_string()[..8])
    }
}

/// How many grid columns a box occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Span {
    /// Shares the columns left over by explicitly sized siblings evenly.
    Auto,
    /// A fixed number of columns. Zero collapses the box.
    Columns(usize),
}

impl Default for Span {
    fn default() -> Self {
        Span::Auto
    }
}

/// Grid layout metadata of a box: its span and the number of empty columns before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GridPlacement {
    pub span: Span,
    pub offset: usize,
}

impl GridPlacement {
    pub fn columns(columns: usize) -> GridPlacement {
        GridPlacement {
            span: Span::Columns(columns),
            offset: 0,
        }
    }

    pub fn auto() -> GridPlacement {
        GridPlacement::default()
    }
}

/// A rectangular element handed to a widget by the host.
///
/// The host measures content (text, icons) and reports it as `intrinsic_size`; everything else
/// is owned by whichever widget currently lays the item out.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    id: ViewId,

    /// Visual state; `layer.frame` is the item’s position in its container.
    pub layer: Layer,

    /// Natural content size, excluding content insets.
    pub intrinsic_size: Vector2<f64>,

    /// Padding around the content.
    pub content_insets: EdgeInsets,

    /// Grid metadata assigned by the last layout pass.
    pub grid: GridPlacement,
}

impl Item {
    /// Creates a new item with a fresh id.
    pub fn new(intrinsic_size: Vector2<f64>) -> Item {
        Item {
            id: ViewId::new(),
            layer: Layer::default(),
            intrinsic_size,
            content_insets: EdgeInsets::zero(),
            grid: GridPlacement::default(),
        }
    }

    pub fn id(&self) -> ViewId {
        self.id
    }

    pub fn frame(&self) -> Rect {
        self.layer.frame
    }

    pub fn set_frame(&mut self, frame: Rect) {
        self.layer.frame = frame;
    }

    /// The size the item would like to have within `fit`.
    ///
    /// Widths are never constrained; the height follows `fit` when it is finite.
    pub fn size_that_fits(&self, fit: Vector2<f64>) -> Vector2<f64> {
        let width = self.intrinsic_size.x + self.content_insets.horizontal();
        let height = if fit.y.is_finite() {
            fit.y
        } else {
            self.intrinsic_size.y + self.content_insets.vertical()
        };
        Vector2::new(width.max(0.), height.max(0.))
    }

    /// Resizes the frame to the intrinsic size plus insets, keeping the origin.
    pub fn size_to_fit(&mut self) {
        let size = self.size_that_fits(Vector2::new(f64::INFINITY, f64::INFINITY));
        self.layer.frame.size = size;
    }

    pub fn reset_content_insets(&mut self) {
        self.content_insets = EdgeInsets::zero();
    }

    /// Clears layout state so the item can be laid out from scratch.
    pub fn reset_layout(&mut self) {
        self.grid = GridPlacement::auto();
        self.layer.frame = Rect::zero();
        self.reset_content_insets();
    }
}
