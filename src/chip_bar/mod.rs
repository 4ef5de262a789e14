//! A horizontal bar of selectable chips.
//!
//! The bar is split into three groups: left views, a content view holding the chips, and right
//! views. Side views are sized to their content and allocated grid columns; the content view gets
//! whatever columns remain. When the chips don’t fit (or the style says so) they scroll
//! horizontally inside the content view, otherwise they share it evenly.
//!
//! Every setter lays the bar out again explicitly. A layout pass computes a fresh
//! [`LayoutPlan`] and commits it as one transaction, so the renderer never sees half a layout.

mod layout;
mod selection;

pub use layout::{plan, resolve_mode, total_chip_width, LayoutInput, LayoutPlan, Placement, ScrollMode};
pub use selection::{scroll_correction, Completion, SelectionEvent};

use crate::config::{ChipBarConfig, InterimSpace};
use crate::error::Result;
use crate::grid::ContentAlignment;
use crate::host::Compositor;
use birb_material_core::{
    EdgeInsets, Handler, Item, Layer, Rect, ScrollState, Transaction, ViewId,
};
use cgmath::{Point2, Vector2, Zero};
use selection::SelectionAnimation;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Selects how the chips are presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChipBarStyle {
    /// Scrolls only if the chips are wider than the bar.
    Auto,
    NonScrollable,
    Scrollable,
}

impl Default for ChipBarStyle {
    fn default() -> Self {
        ChipBarStyle::Auto
    }
}

/// A selectable, pill-shaped button in a chip bar.
#[derive(Debug, Clone, PartialEq)]
pub struct ChipItem {
    item: Item,
    pub title: String,
}

impl ChipItem {
    /// Creates a chip whose content measures `intrinsic_size`.
    pub fn new<S: Into<String>>(title: S, intrinsic_size: Vector2<f64>) -> ChipItem {
        ChipItem {
            item: Item::new(intrinsic_size),
            title: title.into(),
        }
    }

    pub fn id(&self) -> ViewId {
        self.item.id()
    }

    /// Frame in the viewport’s content coordinates.
    pub fn frame(&self) -> Rect {
        self.item.frame()
    }

    pub fn item(&self) -> &Item {
        &self.item
    }

    pub fn item_mut(&mut self) -> &mut Item {
        &mut self.item
    }

    /// Resets visual properties before the chip is handed to a bar.
    fn prepare(&mut self) {
        self.item.reset_layout();
        self.item.layer.corner_radius = 0.;
    }
}

/// The chip bar.
#[derive(Debug)]
pub struct ChipBar {
    id: ViewId,
    content_view: ViewId,
    scroll_view: ViewId,
    divider: ViewId,
    config: ChipBarConfig,
    compositor: Compositor,

    frame: Rect,
    attached: bool,

    left_views: Vec<Item>,
    right_views: Vec<Item>,
    chip_items: Vec<ChipItem>,
    /// Items currently attached to the native-view tree.
    mounted: HashSet<ViewId>,

    selected: Option<ViewId>,
    animation: Option<SelectionAnimation>,
    will_select: Option<Handler<SelectionEvent>>,
    did_select: Option<Handler<SelectionEvent>>,

    content_offset: f64,
    content_size: Vector2<f64>,
    plan: Option<LayoutPlan>,
}

impl ChipBar {
    /// Creates a new, empty chip bar.
    ///
    /// Nothing is committed until the bar is attached and has a frame.
    pub fn new(config: ChipBarConfig, compositor: Compositor) -> ChipBar {
        ChipBar {
            id: ViewId::new(),
            content_view: ViewId::new(),
            scroll_view: ViewId::new(),
            divider: ViewId::new(),
            config,
            compositor,
            frame: Rect::zero(),
            attached: false,
            left_views: Vec::new(),
            right_views: Vec::new(),
            chip_items: Vec::new(),
            mounted: HashSet::new(),
            selected: None,
            animation: None,
            will_select: None,
            did_select: None,
            content_offset: 0.,
            content_size: Vector2::zero(),
            plan: None,
        }
    }

    pub fn id(&self) -> ViewId {
        self.id
    }

    /// The view holding the chips and the scroll viewport.
    pub fn content_view(&self) -> ViewId {
        self.content_view
    }

    /// The horizontally scrolling viewport the chips live in.
    pub fn scroll_view(&self) -> ViewId {
        self.scroll_view
    }

    pub fn divider(&self) -> ViewId {
        self.divider
    }

    pub fn config(&self) -> &ChipBarConfig {
        &self.config
    }

    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn style(&self) -> ChipBarStyle {
        self.config.style
    }

    pub fn alignment(&self) -> ContentAlignment {
        self.config.alignment
    }

    pub fn is_scroll_bounce_enabled(&self) -> bool {
        self.config.scroll_bounce
    }

    pub fn left_views(&self) -> &[Item] {
        &self.left_views
    }

    pub fn right_views(&self) -> &[Item] {
        &self.right_views
    }

    pub fn chip_items(&self) -> &[ChipItem] {
        &self.chip_items
    }

    /// The currently selected chip.
    pub fn selected(&self) -> Option<&ChipItem> {
        let id = self.selected?;
        self.chip_items.iter().find(|chip| chip.id() == id)
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected.and_then(|id| self.index_of(id))
    }

    /// True from a selection until its animation finishes.
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Presentation chosen by the last layout pass.
    pub fn mode(&self) -> Option<ScrollMode> {
        self.plan.as_ref().map(|plan| plan.mode)
    }

    /// The last layout plan.
    pub fn plan(&self) -> Option<&LayoutPlan> {
        self.plan.as_ref()
    }

    /// Horizontal scroll position of the viewport.
    pub fn content_offset(&self) -> f64 {
        self.content_offset
    }

    pub fn content_size(&self) -> Vector2<f64> {
        self.content_size
    }

    /// Frame of the content view in bar coordinates.
    pub fn content_frame(&self) -> Rect {
        self.plan
            .as_ref()
            .map_or(Rect::zero(), |plan| plan.content.frame)
    }

    /// Visible part of the content, in content coordinates.
    pub fn viewport(&self) -> Rect {
        let size = self.content_frame().size;
        Rect::new(Point2::new(self.content_offset, 0.), size)
    }

    fn index_of(&self, chip: ViewId) -> Option<usize> {
        self.chip_items.iter().position(|item| item.id() == chip)
    }

    fn scroll_state(&self) -> ScrollState {
        ScrollState {
            content_offset: Vector2::new(self.content_offset, 0.),
            content_size: self.content_size,
            bounces: self.config.scroll_bounce,
        }
    }

    /// Sets the handler notified before a user-triggered selection.
    pub fn on_will_select<F: 'static + FnMut(&SelectionEvent) + Send>(&mut self, handler: F) {
        self.will_select = Some(Handler::new(handler));
    }

    /// Sets the handler notified when a selection animation finishes.
    pub fn on_did_select<F: 'static + FnMut(&SelectionEvent) + Send>(&mut self, handler: F) {
        self.did_select = Some(Handler::new(handler));
    }

    pub fn set_frame(&mut self, frame: Rect) -> Result<()> {
        self.frame = frame;
        self.layout()
    }

    /// Marks the bar as attached to (or detached from) a rendering surface.
    ///
    /// Layout passes are skipped while detached.
    pub fn set_attached(&mut self, attached: bool) -> Result<()> {
        self.attached = attached;
        self.layout()
    }

    pub fn set_style(&mut self, style: ChipBarStyle) -> Result<()> {
        self.config.style = style;
        self.layout()
    }

    pub fn set_alignment(&mut self, alignment: ContentAlignment) -> Result<()> {
        self.config.alignment = alignment;
        self.layout()
    }

    pub fn set_interim_space(&mut self, interim_space: InterimSpace) -> Result<()> {
        self.config.interim_space = interim_space;
        self.layout()
    }

    pub fn set_content_edge_insets(&mut self, insets: EdgeInsets) -> Result<()> {
        self.config.content_edge_insets = insets;
        self.layout()
    }

    /// Enables or disables bouncing of the viewport. Doesn’t affect layout.
    pub fn set_scroll_bounce_enabled(&mut self, enabled: bool) -> Result<()> {
        self.config.scroll_bounce = enabled;
        if self.plan.is_none() {
            return Ok(());
        }
        let mut transaction = Transaction::instant();
        transaction.scroll(self.scroll_view, self.scroll_state());
        self.compositor.commit(transaction)
    }

    pub fn set_left_views(&mut self, views: Vec<Item>) -> Result<()> {
        let old = std::mem::replace(&mut self.left_views, views);
        self.detach(old.iter().map(Item::id))?;
        self.layout()
    }

    pub fn set_right_views(&mut self, views: Vec<Item>) -> Result<()> {
        let old = std::mem::replace(&mut self.right_views, views);
        self.detach(old.iter().map(Item::id))?;
        self.layout()
    }

    /// Replaces all chips.
    ///
    /// The previous chips are detached before the new ones are laid out. The selection survives
    /// only if the selected chip is part of the new set.
    pub fn set_chip_items(&mut self, mut chips: Vec<ChipItem>) -> Result<()> {
        for chip in &mut chips {
            chip.prepare();
        }
        let old = std::mem::replace(&mut self.chip_items, chips);
        self.detach(old.iter().map(ChipItem::id))?;

        if let Some(selected) = self.selected {
            if self.index_of(selected).is_none() {
                tracing::debug!("selected chip was removed; clearing selection");
                self.selected = None;
                self.animation = None;
            }
        }

        self.layout()
    }

    /// Detaches mounted items from the native-view tree.
    fn detach<I: IntoIterator<Item = ViewId>>(&mut self, ids: I) -> Result<()> {
        let mut transaction = Transaction::instant();
        for id in ids {
            if self.mounted.remove(&id) {
                transaction.remove(id);
            }
        }
        if !transaction.is_empty() {
            tracing::debug!(count = transaction.len(), "detaching items");
        }
        self.compositor.commit(transaction)
    }

    /// Returns true if a layout pass would have any effect.
    pub fn will_layout(&self) -> bool {
        self.attached && !self.frame.is_empty()
    }

    /// Lays out the bar and commits the result.
    ///
    /// Skipped entirely while the bar isn’t attached or has an empty frame.
    pub fn layout(&mut self) -> Result<()> {
        if !self.will_layout() {
            tracing::trace!(attached = self.attached, "skipping chip bar layout");
            return Ok(());
        }

        for view in self.left_views.iter_mut().chain(self.right_views.iter_mut()) {
            view.reset_content_insets();
        }

        let plan = layout::plan(&LayoutInput {
            bounds: Rect::new(Point2::new(0., 0.), self.frame.size),
            config: &self.config,
            content_view: self.content_view,
            left_views: &self.left_views,
            right_views: &self.right_views,
            chip_items: &self.chip_items,
        });

        if self.mode() != Some(plan.mode) {
            tracing::debug!(mode = ?plan.mode, chips = self.chip_items.len(), "chip bar mode");
        }

        apply_placements(&mut self.left_views, &plan.left);
        apply_placements(&mut self.right_views, &plan.right);
        for (chip, placement) in self.chip_items.iter_mut().zip(&plan.chips) {
            chip.item.grid = placement.grid;
            chip.item.set_frame(placement.frame);
        }

        self.content_size = plan.content_size;
        let max_offset = (plan.content_size.x - plan.viewport_size().x).max(0.);
        self.content_offset = self.content_offset.max(0.).min(max_offset);

        let transaction = self.layout_transaction(&plan);
        self.plan = Some(plan);
        self.compositor.commit(transaction)
    }

    /// Builds the transaction that makes a plan visible.
    fn layout_transaction(&mut self, plan: &LayoutPlan) -> Transaction {
        let mut transaction = Transaction::instant();

        transaction.update(
            self.id,
            Layer {
                frame: self.frame,
                background: self.config.background,
                ..Layer::default()
            },
        );
        transaction.update(
            self.content_view,
            Layer {
                frame: plan.content.frame,
                z_position: self.config.content_z_position,
                ..Layer::default()
            },
        );
        transaction.update(
            self.scroll_view,
            Layer {
                frame: Rect::new(Point2::new(0., 0.), plan.viewport_size()),
                clip_contents: true,
                ..Layer::default()
            },
        );
        transaction.update(
            self.divider,
            Layer {
                frame: plan.divider,
                background: self.config.divider_color,
                ..Layer::default()
            },
        );

        for view in &self.left_views {
            transaction.update(view.id(), view.layer);
            transaction.subview(self.id, view.id());
        }
        transaction.subview(self.id, self.content_view);
        for view in &self.right_views {
            transaction.update(view.id(), view.layer);
            transaction.subview(self.id, view.id());
        }
        transaction.subview(self.id, self.divider);
        transaction.subview(self.content_view, self.scroll_view);

        for chip in &self.chip_items {
            transaction.update(chip.id(), chip.item.layer);
            transaction.subview(self.scroll_view, chip.id());
        }
        transaction.scroll(self.scroll_view, self.scroll_state());

        let mounted = self
            .left_views
            .iter()
            .chain(&self.right_views)
            .map(Item::id)
            .chain(self.chip_items.iter().map(ChipItem::id));
        self.mounted.extend(mounted);

        transaction
    }
}

fn apply_placements(items: &mut [Item], placements: &[Placement]) {
    for (item, placement) in items.iter_mut().zip(placements) {
        item.grid = placement.grid;
        item.set_frame(placement.frame);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::Host;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    fn chips(widths: &[f64]) -> Vec<ChipItem> {
        widths
            .iter()
            .enumerate()
            .map(|(i, &w)| ChipItem::new(format!("chip {}", i), Vector2::new(w, 20.)))
            .collect()
    }

    fn bar(host: &Host, style: ChipBarStyle) -> ChipBar {
        let config = ChipBarConfig {
            style,
            interim_space: InterimSpace::Custom(8.),
            ..ChipBarConfig::default()
        };
        let mut bar = ChipBar::new(config, host.compositor());
        bar.set_frame(Rect::from_xywh(0., 0., 300., 44.)).unwrap();
        bar.set_attached(true).unwrap();
        bar
    }

    #[test]
    fn layout_is_skipped_while_detached() {
        let mut host = Host::new();
        let mut bar = ChipBar::new(ChipBarConfig::default(), host.compositor());
        bar.set_frame(Rect::from_xywh(0., 0., 300., 44.)).unwrap();
        bar.set_chip_items(chips(&[40., 40.])).unwrap();

        assert!(bar.plan().is_none());
        assert_eq!(host.poll().unwrap(), 0);
        assert!(host.tree.is_empty());
    }

    #[test]
    fn empty_frames_skip_layout() {
        let host = Host::new();
        let mut bar = ChipBar::new(ChipBarConfig::default(), host.compositor());
        bar.set_attached(true).unwrap();
        assert!(!bar.will_layout());
        assert!(bar.plan().is_none());
    }

    #[test]
    fn layout_mounts_everything_in_order() {
        let mut host = Host::new();
        let mut bar = bar(&host, ChipBarStyle::Auto);
        let left = Item::new(Vector2::new(24., 24.));
        let left_id = left.id();
        bar.set_left_views(vec![left]).unwrap();
        bar.set_chip_items(chips(&[40., 40.])).unwrap();
        host.poll().unwrap();

        let tree = &host.tree;
        assert_eq!(
            tree.subviews(bar.id()),
            &[left_id, bar.content_view(), bar.divider()]
        );
        assert_eq!(tree.subviews(bar.content_view()), &[bar.scroll_view()]);
        let chip_ids: Vec<ViewId> = bar.chip_items().iter().map(ChipItem::id).collect();
        assert_eq!(tree.subviews(bar.scroll_view()), chip_ids.as_slice());
        assert_eq!(tree.layer(bar.content_view()).unwrap().z_position, 6000.);
        assert_eq!(tree.layer(bar.divider()).unwrap().frame, Rect::from_xywh(0., 43., 300., 1.));
    }

    #[test]
    fn empty_bars_have_no_scrollable_content() {
        let mut host = Host::new();
        let bar = bar(&host, ChipBarStyle::Auto);
        host.poll().unwrap();

        assert_eq!(bar.mode(), Some(ScrollMode::Fixed));
        assert_eq!(bar.content_size(), Vector2::zero());
        let scroll = host.tree.scroll(bar.scroll_view()).unwrap();
        assert_eq!(scroll.content_size.x, 0.);
        assert_eq!(bar.content_offset(), 0.);
    }

    #[test]
    fn side_views_lose_their_padding() {
        let host = Host::new();
        let mut bar = bar(&host, ChipBarStyle::Auto);
        let mut button = Item::new(Vector2::new(24., 24.));
        button.content_insets = EdgeInsets::uniform(6.);
        bar.set_right_views(vec![button]).unwrap();
        assert_eq!(bar.right_views()[0].content_insets, EdgeInsets::zero());
    }

    #[test]
    fn chips_are_prepared() {
        let host = Host::new();
        let mut bar = bar(&host, ChipBarStyle::Scrollable);
        let mut chip = ChipItem::new("a", Vector2::new(40., 20.));
        chip.item_mut().layer.corner_radius = 12.;
        chip.item_mut().content_insets = EdgeInsets::uniform(4.);
        bar.set_chip_items(vec![chip]).unwrap();

        let chip = &bar.chip_items()[0];
        assert_eq!(chip.item().layer.corner_radius, 0.);
        assert_eq!(chip.item().content_insets, EdgeInsets::zero());
        assert_eq!(chip.frame().width(), 40.);
    }

    #[test]
    fn reassigning_chips_detaches_the_old_ones() {
        let mut host = Host::new();
        let mut bar = bar(&host, ChipBarStyle::Auto);
        let old = chips(&[40., 40., 40.]);
        let old_ids: Vec<ViewId> = old.iter().map(ChipItem::id).collect();
        bar.set_chip_items(old).unwrap();
        host.poll().unwrap();
        assert_eq!(host.tree.subviews(bar.scroll_view()).len(), 3);

        let new = chips(&[50.]);
        let new_id = new[0].id();
        bar.set_chip_items(new).unwrap();
        host.poll().unwrap();

        assert_eq!(host.tree.subviews(bar.scroll_view()), &[new_id]);
        assert!(old_ids.iter().all(|id| !host.tree.contains(*id)));
    }

    #[test]
    fn reassigning_chips_revalidates_the_selection() {
        let host = Host::new();
        let mut bar = bar(&host, ChipBarStyle::Auto);
        let items = chips(&[40., 40.]);
        let kept = items[1].clone();
        bar.set_chip_items(items).unwrap();
        bar.select(1, None).unwrap();

        bar.set_chip_items(vec![kept.clone(), ChipItem::new("new", Vector2::new(30., 20.))])
            .unwrap();
        assert_eq!(bar.selected().map(ChipItem::id), Some(kept.id()));
        assert_eq!(bar.selected_index(), Some(0));

        bar.set_chip_items(chips(&[10.])).unwrap();
        assert!(bar.selected().is_none());
        assert!(!bar.is_animating());
    }

    #[test]
    fn out_of_range_selection_is_ignored() {
        let host = Host::new();
        let mut bar = bar(&host, ChipBarStyle::Auto);
        bar.set_chip_items(chips(&[40., 40.])).unwrap();
        bar.select(5, None).unwrap();
        assert!(bar.selected().is_none());
        assert!(!bar.is_animating());

        bar.select(0, None).unwrap();
        bar.advance(Duration::from_secs(1));
        bar.select(2, None).unwrap();
        assert_eq!(bar.selected_index(), Some(0));
        assert!(!bar.is_animating());
    }

    #[test]
    fn visible_chip_selection_does_not_scroll() {
        let mut host = Host::new();
        let mut bar = bar(&host, ChipBarStyle::Scrollable);
        bar.set_chip_items(chips(&[80., 90., 70., 100., 85.])).unwrap();
        host.poll().unwrap();

        bar.select(1, None).unwrap();
        assert_eq!(bar.content_offset(), 0.);
        assert_eq!(host.poll().unwrap(), 0);
    }

    #[test]
    fn animation_completion_fires_did_select() {
        let host = Host::new();
        let mut bar = bar(&host, ChipBarStyle::Auto);
        bar.set_chip_items(chips(&[40., 40.])).unwrap();

        let did = Arc::new(AtomicUsize::new(0));
        let d = Arc::clone(&did);
        bar.on_did_select(move |event| {
            d.store(event.index + 1, Ordering::SeqCst);
        });
        let completed = Arc::new(AtomicUsize::new(0));
        let c = Arc::clone(&completed);

        bar.select(
            1,
            Some(Box::new(move |_: &SelectionEvent| {
                c.fetch_add(1, Ordering::SeqCst);
            })),
        )
        .unwrap();
        assert!(bar.is_animating());

        bar.advance(Duration::from_millis(100));
        assert!(bar.is_animating());
        assert_eq!(did.load(Ordering::SeqCst), 0);

        bar.advance(Duration::from_millis(250));
        assert!(!bar.is_animating());
        assert_eq!(did.load(Ordering::SeqCst), 2);
        assert_eq!(completed.load(Ordering::SeqCst), 1);

        bar.advance(Duration::from_secs(1));
        assert_eq!(completed.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn superseded_completions_are_dropped() {
        let host = Host::new();
        let mut bar = bar(&host, ChipBarStyle::Auto);
        bar.set_chip_items(chips(&[40., 40.])).unwrap();

        let completed = Arc::new(AtomicUsize::new(0));
        let c = Arc::clone(&completed);
        bar.select(0, Some(Box::new(move |_: &SelectionEvent| {
            c.fetch_add(1, Ordering::SeqCst);
        })))
        .unwrap();
        bar.select(1, None).unwrap();
        bar.advance(Duration::from_secs(1));

        assert_eq!(completed.load(Ordering::SeqCst), 0);
        assert_eq!(bar.selected_index(), Some(1));
    }

    #[test]
    fn programmatic_selection_skips_will_select() {
        let host = Host::new();
        let mut bar = bar(&host, ChipBarStyle::Auto);
        bar.set_chip_items(chips(&[40., 40.])).unwrap();
        let will = Arc::new(AtomicUsize::new(0));
        let w = Arc::clone(&will);
        bar.on_will_select(move |_| {
            w.fetch_add(1, Ordering::SeqCst);
        });

        bar.select(0, None).unwrap();
        let chip = bar.chip_items()[1].id();
        bar.animate_to(chip, None).unwrap();
        assert_eq!(will.load(Ordering::SeqCst), 0);
        assert_eq!(bar.selected_index(), Some(1));

        // taps are user-triggered
        let center = bar.chip_items()[0].frame().center();
        assert!(bar.tap(center).unwrap());
        assert_eq!(will.load(Ordering::SeqCst), 1);
        assert_eq!(bar.selected_index(), Some(0));
    }

    #[test]
    fn taps_notify_will_select_with_the_tapped_chip() {
        let host = Host::new();
        let mut bar = bar(&host, ChipBarStyle::Auto);
        bar.set_chip_items(chips(&[40., 40.])).unwrap();
        bar.select(1, None).unwrap();

        let seen = Arc::new(AtomicUsize::new(0));
        let s = Arc::clone(&seen);
        bar.on_will_select(move |event| {
            s.store(event.index + 10, Ordering::SeqCst);
        });
        let center = bar.chip_items()[0].frame().center();
        bar.tap(center).unwrap();
        assert_eq!(seen.load(Ordering::SeqCst), 10);
    }

    #[test]
    fn animate_to_unknown_chip_is_ignored() {
        let host = Host::new();
        let mut bar = bar(&host, ChipBarStyle::Auto);
        bar.set_chip_items(chips(&[40.])).unwrap();
        bar.animate_to(ViewId::new(), None).unwrap();
        assert!(bar.selected().is_none());
    }

    #[test]
    fn taps_outside_chips_do_nothing() {
        let host = Host::new();
        let mut bar = bar(&host, ChipBarStyle::Scrollable);
        bar.set_chip_items(chips(&[40.])).unwrap();
        assert!(!bar.tap(Point2::new(250., 10.)).unwrap());
        assert!(!bar.tap(Point2::new(10., 60.)).unwrap());
        assert!(bar.selected().is_none());
    }

    #[test]
    fn scroll_bounce_is_passed_through() {
        let mut host = Host::new();
        let mut bar = bar(&host, ChipBarStyle::Auto);
        host.poll().unwrap();
        assert!(host.tree.scroll(bar.scroll_view()).unwrap().bounces);

        bar.set_scroll_bounce_enabled(false).unwrap();
        host.poll().unwrap();
        assert!(!bar.is_scroll_bounce_enabled());
        assert!(!host.tree.scroll(bar.scroll_view()).unwrap().bounces);
    }

    #[test]
    fn switching_to_fixed_resets_the_offset() {
        let host = Host::new();
        let mut bar = bar(&host, ChipBarStyle::Scrollable);
        bar.set_chip_items(chips(&[80., 90., 70., 100., 85.])).unwrap();
        bar.select(4, None).unwrap();
        assert!(bar.content_offset() > 0.);

        bar.set_style(ChipBarStyle::NonScrollable).unwrap();
        assert_eq!(bar.mode(), Some(ScrollMode::Fixed));
        assert_eq!(bar.content_offset(), 0.);
    }
}
