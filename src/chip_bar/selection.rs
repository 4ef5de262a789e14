//! Selecting chips and scrolling them into view.

use super::ChipBar;
use crate::error::Result;
use birb_material_core::{Rect, Transaction, ViewId};
use cgmath::Point2;
use std::fmt;
use std::time::Duration;

/// Passed to selection observers and completions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionEvent {
    /// The chip bar.
    pub bar: ViewId,
    /// The selected chip.
    pub chip: ViewId,
    /// Index of the selected chip at the time of selection.
    pub index: usize,
}

/// Called once when a selection animation finishes.
pub type Completion = Box<dyn FnOnce(&SelectionEvent) + Send>;

/// A running selection animation.
pub(crate) struct SelectionAnimation {
    pub(crate) event: SelectionEvent,
    elapsed: f64,
    duration: f64,
    completion: Option<Completion>,
}

impl fmt::Debug for SelectionAnimation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("SelectionAnimation")
            .field("event", &self.event)
            .field("elapsed", &self.elapsed)
            .field("duration", &self.duration)
            .field("completion", &self.completion.is_some())
            .finish()
    }
}

/// Computes the content offset that brings `chip` into `viewport`.
///
/// Returns `None` if the chip is already fully visible. Otherwise the chip is aligned to the
/// viewport’s left edge if it starts before it, or to its right edge if not, clamped to
/// `[0, content_width - viewport width]`.
pub fn scroll_correction(chip: Rect, viewport: Rect, content_width: f64) -> Option<f64> {
    if viewport.contains_rect(chip) {
        return None;
    }

    let target = if chip.min_x() < viewport.min_x() {
        chip.min_x()
    } else {
        chip.max_x() - viewport.width()
    };
    let max_offset = (content_width - viewport.width()).max(0.);
    Some(target.max(0.).min(max_offset))
}

impl ChipBar {
    /// Selects the chip at `index`.
    ///
    /// Out-of-range indices are ignored. Programmatic selections don’t notify `will_select`.
    pub fn select(&mut self, index: usize, completion: Option<Completion>) -> Result<()> {
        if index >= self.chip_items.len() {
            tracing::trace!(index, count = self.chip_items.len(), "ignoring out-of-range selection");
            return Ok(());
        }
        self.animate(index, false, completion)
    }

    /// Animates the selection to the given chip.
    ///
    /// Chips that aren’t in the bar are ignored.
    pub fn animate_to(&mut self, chip: ViewId, completion: Option<Completion>) -> Result<()> {
        match self.index_of(chip) {
            Some(index) => self.animate(index, false, completion),
            None => Ok(()),
        }
    }

    /// Handles a tap at `location` in the bar’s coordinate system.
    ///
    /// Returns true if a chip was hit and selected.
    pub fn tap(&mut self, location: Point2<f64>) -> Result<bool> {
        let content = self.content_frame();
        if !content.contains(location) {
            return Ok(false);
        }

        let point = Point2::new(
            location.x - content.min_x() + self.content_offset,
            location.y - content.min_y(),
        );
        let hit = self
            .chip_items
            .iter()
            .position(|chip| chip.frame().contains(point));

        match hit {
            Some(index) => {
                self.animate(index, true, None)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Advances the selection animation clock.
    ///
    /// When the animation finishes, `is_animating` resets, `did_select` is notified, and the
    /// completion runs.
    pub fn advance(&mut self, dt: Duration) {
        let finished = match self.animation.as_mut() {
            Some(animation) => {
                animation.elapsed += dt.as_secs_f64();
                animation.elapsed >= animation.duration
            }
            None => false,
        };
        if !finished {
            return;
        }

        if let Some(animation) = self.animation.take() {
            tracing::debug!(index = animation.event.index, "selection animation finished");
            if let Some(handler) = &self.did_select {
                handler.call(&animation.event);
            }
            if let Some(completion) = animation.completion {
                completion(&animation.event);
            }
        }
    }

    fn animate(&mut self, index: usize, user_triggered: bool, completion: Option<Completion>) -> Result<()> {
        let event = SelectionEvent {
            bar: self.id,
            chip: self.chip_items[index].id(),
            index,
        };

        if user_triggered {
            if let Some(handler) = &self.will_select {
                handler.call(&event);
            }
        }

        if let Some(previous) = self.animation.take() {
            tracing::debug!(index = previous.event.index, "superseding selection animation");
        }
        tracing::debug!(index, user_triggered, "selecting chip");

        self.selected = Some(event.chip);
        self.animation = Some(SelectionAnimation {
            event,
            elapsed: 0.,
            duration: self.config.animation_duration.max(0.),
            completion,
        });

        let frame = self.chip_items[index].frame();
        let viewport = self.viewport();
        if let Some(offset) = scroll_correction(frame, viewport, self.content_size.x) {
            tracing::debug!(from = self.content_offset, to = offset, "scrolling chip into view");
            self.content_offset = offset;
            if self.plan.is_some() {
                let mut transaction = Transaction::animated(self.config.animation_duration);
                transaction.scroll(self.scroll_view, self.scroll_state());
                self.compositor.commit(transaction)?;
            }
        }
        Ok(())
    }
}
