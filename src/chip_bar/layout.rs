//! Layout planning for the chip bar.
//!
//! [`plan`] is a pure function of the bar’s items and configuration. It returns the complete
//! geometry for one layout pass; nothing is carried over from earlier passes.

use super::{ChipBarStyle, ChipItem};
use crate::config::ChipBarConfig;
use crate::grid::{self, ContentAlignment, Grid};
use birb_material_core::{GridPlacement, Item, Rect, Span, ViewId};
use cgmath::{Vector2, Zero};

/// How the chips are presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollMode {
    /// Chips share the content region evenly and nothing scrolls.
    Fixed,
    /// Chips keep their natural width inside a horizontally scrolling viewport.
    Scrollable,
}

/// Decides between fixed and scrollable presentation.
///
/// `Auto` scrolls only when the chips are strictly wider than the container.
pub fn resolve_mode(style: ChipBarStyle, total_chip_width: f64, container_width: f64) -> ScrollMode {
    match style {
        ChipBarStyle::Scrollable => ScrollMode::Scrollable,
        ChipBarStyle::NonScrollable => ScrollMode::Fixed,
        ChipBarStyle::Auto if total_chip_width > container_width => ScrollMode::Scrollable,
        ChipBarStyle::Auto => ScrollMode::Fixed,
    }
}

/// Sum of every chip’s natural width plus one interim space per chip.
pub fn total_chip_width(chips: &[ChipItem], height: f64, interim_space: f64) -> f64 {
    chips
        .iter()
        .map(|chip| natural_width(chip.item(), height) + interim_space)
        .sum()
}

fn natural_width(item: &Item, height: f64) -> f64 {
    item.size_that_fits(Vector2::new(f64::INFINITY, height)).x
}

/// Where a box goes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub id: ViewId,
    pub grid: GridPlacement,
    /// Frame in the container’s coordinate system.
    pub frame: Rect,
}

/// The geometry of one layout pass.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutPlan {
    pub mode: ScrollMode,
    /// Columns of the bar’s grid.
    pub columns: usize,
    /// Left views, in bar coordinates.
    pub left: Vec<Placement>,
    /// The content view, in bar coordinates. The viewport fills it.
    pub content: Placement,
    /// Right views, in bar coordinates.
    pub right: Vec<Placement>,
    /// Chips, in the viewport’s content coordinates.
    pub chips: Vec<Placement>,
    /// Size of the scrollable content.
    pub content_size: Vector2<f64>,
    /// Divider, in bar coordinates.
    pub divider: Rect,
}

impl LayoutPlan {
    /// Size of the visible scroll viewport.
    pub fn viewport_size(&self) -> Vector2<f64> {
        self.content.frame.size
    }
}

/// Everything a layout pass depends on.
#[derive(Debug, Clone, Copy)]
pub struct LayoutInput<'a> {
    /// Bar bounds in its own coordinate system.
    pub bounds: Rect,
    pub config: &'a ChipBarConfig,
    pub content_view: ViewId,
    pub left_views: &'a [Item],
    pub right_views: &'a [Item],
    pub chip_items: &'a [ChipItem],
}

/// Computes the layout plan.
pub fn plan(input: &LayoutInput) -> LayoutPlan {
    let config = input.config;
    let bounds = input.bounds;
    let insets = config.content_edge_insets;
    let interim_space = config.interim_space.value();
    let unit = config.grid_factor;

    // side views are measured without their content padding
    let side_span = |item: &Item| grid::span_for_width(item.intrinsic_size.x.max(0.), unit);
    let left_spans: Vec<usize> = input.left_views.iter().map(side_span).collect();
    let right_spans: Vec<usize> = input.right_views.iter().map(side_span).collect();
    let lc = left_spans.iter().fold(0, |sum: usize, &span| sum.saturating_add(span));
    let rc = right_spans.iter().fold(0, |sum: usize, &span| sum.saturating_add(span));

    let balance = match config.alignment {
        ContentAlignment::Center => {
            input.left_views.len().max(input.right_views.len()) as f64 * interim_space
        }
        ContentAlignment::Full => 0.,
    };
    let available = bounds.width() - 2. * balance - insets.horizontal();
    let columns = grid::available_columns(available, unit);
    let center = grid::center_span(columns, lc, rc, config.alignment);

    let mut placements: Vec<GridPlacement> = Vec::new();
    placements.extend(left_spans.iter().map(|&span| GridPlacement::columns(span)));
    placements.push(GridPlacement {
        span: Span::Columns(center.columns),
        offset: center.offset,
    });
    placements.extend(right_spans.iter().enumerate().map(|(i, &span)| GridPlacement {
        span: Span::Columns(span),
        offset: if i == 0 { center.trailing_offset } else { 0 },
    }));

    let frames = Grid::new(columns)
        .with_interim_space(interim_space)
        .with_insets(insets)
        .layout(bounds, &placements);

    let n_left = input.left_views.len();
    let placed = |item: &Item, i: usize| Placement {
        id: item.id(),
        grid: placements[i],
        frame: frames[i],
    };
    let left: Vec<Placement> = input
        .left_views
        .iter()
        .enumerate()
        .map(|(i, item)| placed(item, i))
        .collect();
    let content = Placement {
        id: input.content_view,
        grid: placements[n_left],
        frame: frames[n_left],
    };
    let right: Vec<Placement> = input
        .right_views
        .iter()
        .enumerate()
        .map(|(i, item)| placed(item, n_left + 1 + i))
        .collect();

    let viewport = content.frame.size;
    let chip_width = total_chip_width(input.chip_items, viewport.y, interim_space);
    let mode = resolve_mode(config.style, chip_width, bounds.width());

    let (chips, content_size) = match mode {
        _ if input.chip_items.is_empty() => (Vec::new(), Vector2::zero()),
        ScrollMode::Scrollable => {
            let mut x = 0.;
            let chips = input
                .chip_items
                .iter()
                .map(|chip| {
                    let width = natural_width(chip.item(), viewport.y);
                    let placement = Placement {
                        id: chip.id(),
                        grid: chip.item().grid,
                        frame: Rect::from_xywh(x, 0., width, viewport.y),
                    };
                    x += width + interim_space;
                    placement
                })
                .collect();
            (chips, Vector2::new(chip_width, viewport.y))
        }
        ScrollMode::Fixed => {
            let chip_placements = vec![GridPlacement::auto(); input.chip_items.len()];
            let frames = Grid::new(input.chip_items.len()).layout(
                Rect::new((0., 0.).into(), viewport),
                &chip_placements,
            );
            let chips = input
                .chip_items
                .iter()
                .zip(frames)
                .map(|(chip, frame)| Placement {
                    id: chip.id(),
                    grid: GridPlacement::auto(),
                    frame,
                })
                .collect();
            (chips, viewport)
        }
    };

    let thickness = config.divider_thickness.max(0.);
    let divider = Rect::from_xywh(0., bounds.height() - thickness, bounds.width(), thickness);

    tracing::trace!(
        ?mode,
        columns,
        left = lc,
        right = rc,
        center = center.columns,
        chip_width,
        "planned chip bar layout"
    );

    LayoutPlan {
        mode,
        columns,
        left,
        content,
        right,
        chips,
        content_size,
        divider,
    }
}
