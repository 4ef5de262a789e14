//! Column grid layout.
//!
//! Widths are expressed in abstract columns rather than points: a container is divided into a
//! number of equally wide columns, and every box in it occupies a whole number of them.
//! Consecutive boxes are separated by the grid’s interim space.

use birb_material_core::{EdgeInsets, GridPlacement, Rect, Span};
use serde::{Deserialize, Serialize};

/// Columns added to every measured span so items don’t touch their neighbors.
pub const PADDING_COLUMNS: usize = 2;

/// How the center region is placed between the left and right groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentAlignment {
    /// The center region takes up everything between the two groups.
    Full,
    /// The center region is centered in the container, balancing the wider group on both sides.
    Center,
}

impl Default for ContentAlignment {
    fn default() -> Self {
        ContentAlignment::Full
    }
}

/// Converts a width in points to a column span.
///
/// `ceil(width / unit) + PADDING_COLUMNS`; zero if the unit is not positive.
pub fn span_for_width(width: f64, unit: f64) -> usize {
    if !(unit > 0.) {
        return 0;
    }
    // float-to-int casts saturate, so unbounded widths end up at usize::MAX
    let columns = (width.max(0.) / unit).ceil() as usize;
    columns.saturating_add(PADDING_COLUMNS)
}

/// Number of columns that fit in `width`, rounding up. Zero for non-positive widths.
pub fn available_columns(width: f64, unit: f64) -> usize {
    if !(width > 0.) || !(unit > 0.) {
        return 0;
    }
    (width / unit).ceil() as usize
}

/// Column allocation of the center region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CenterSpan {
    /// Columns occupied by the center region.
    pub columns: usize,
    /// Empty columns before the center region.
    pub offset: usize,
    /// Empty columns before the first box of the right group.
    pub trailing_offset: usize,
}

/// Allocates the center region’s columns given the columns consumed on either side.
///
/// With [`ContentAlignment::Center`], the wider side is mirrored onto the narrower one and the
/// difference becomes an offset on the narrower side. When the sides consume more columns than
/// are available, the center collapses to zero columns.
pub fn center_span(total: usize, left: usize, right: usize, alignment: ContentAlignment) -> CenterSpan {
    let (needed, offset, trailing_offset) = match alignment {
        ContentAlignment::Full => (left.saturating_add(right), 0, 0),
        ContentAlignment::Center if left < right => (right.saturating_mul(2), right - left, 0),
        ContentAlignment::Center => (left.saturating_mul(2), 0, left - right),
    };

    if needed > total {
        tracing::warn!(
            total,
            left,
            right,
            "side groups need more columns than available; center collapsed"
        );
    }

    CenterSpan {
        columns: total.saturating_sub(needed),
        offset,
        trailing_offset,
    }
}

/// A horizontal grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    /// Number of columns the container is divided into.
    pub columns: usize,
    /// Space between adjacent boxes.
    pub interim_space: f64,
    /// Insets of the grid within the container bounds.
    pub insets: EdgeInsets,
}

impl Grid {
    pub fn new(columns: usize) -> Grid {
        Grid {
            columns,
            interim_space: 0.,
            insets: EdgeInsets::zero(),
        }
    }

    pub fn with_interim_space(mut self, interim_space: f64) -> Grid {
        self.interim_space = interim_space;
        self
    }

    pub fn with_insets(mut self, insets: EdgeInsets) -> Grid {
        self.insets = insets;
        self
    }

    /// Width of one column within `bounds`, including its share of the interim space.
    pub fn column_width(&self, bounds: Rect) -> f64 {
        if self.columns == 0 {
            return 0.;
        }
        let inner = bounds.inset(self.insets);
        ((inner.width() + self.interim_space) / self.columns as f64).max(0.)
    }

    /// Resolves spans, with [`Span::Auto`] boxes sharing the unclaimed columns evenly.
    pub fn resolve_spans(&self, placements: &[GridPlacement]) -> Vec<usize> {
        let mut claimed: usize = 0;
        let mut autos = 0;
        for placement in placements {
            claimed = claimed.saturating_add(placement.offset);
            match placement.span {
                Span::Columns(columns) => claimed = claimed.saturating_add(columns),
                Span::Auto => autos += 1,
            }
        }

        let auto_span = if autos > 0 {
            self.columns.saturating_sub(claimed) / autos
        } else {
            0
        };

        placements
            .iter()
            .map(|placement| match placement.span {
                Span::Columns(columns) => columns,
                Span::Auto => auto_span,
            })
            .collect()
    }

    /// Computes frames for boxes laid out left to right, in order.
    ///
    /// Boxes extending past the last column are not clipped.
    pub fn layout(&self, bounds: Rect, placements: &[GridPlacement]) -> Vec<Rect> {
        let inner = bounds.inset(self.insets);
        let column_width = self.column_width(bounds);
        let spans = self.resolve_spans(placements);

        let mut column: usize = 0;
        placements
            .iter()
            .zip(spans)
            .map(|(placement, span)| {
                column = column.saturating_add(placement.offset);
                let x = inner.min_x() + column as f64 * column_width;
                let width = if span == 0 {
                    0.
                } else {
                    (span as f64 * column_width - self.interim_space).max(0.)
                };
                column = column.saturating_add(span);
                Rect::from_xywh(x, inner.min_y(), width, inner.height())
            })
            .collect()
    }
}
