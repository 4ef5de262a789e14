//! Touch pulse.
//!
//! A pulse overlay sits inside a host layer. Pressing the host pops the overlay up under the
//! finger and scales it out while the host swells slightly; lifting the finger collapses both.

use crate::config::PulseConfig;
use crate::error::Result;
use crate::host::Compositor;
use birb_material_core::{Layer, Rect, Touch, TouchPhase, Transaction, ViewId};
use cgmath::{Point2, Vector2};

/// A layer with a touch-driven pulse.
#[derive(Debug)]
pub struct PulseOverlay {
    id: ViewId,
    pulse_id: ViewId,
    config: PulseConfig,
    compositor: Compositor,
    visual: Layer,
    pulse: Layer,
}

impl PulseOverlay {
    /// Creates the host and pulse layers and commits them.
    pub fn new(frame: Rect, config: PulseConfig, compositor: Compositor) -> Result<PulseOverlay> {
        let visual = Layer {
            frame,
            background: config.background,
            corner_radius: config.corner_radius,
            clip_contents: config.clip_contents,
            ..Layer::default()
        };
        let pulse = Layer {
            background: config.pulse_color,
            hidden: true,
            ..Layer::default()
        };

        let overlay = PulseOverlay {
            id: ViewId::new(),
            pulse_id: ViewId::new(),
            config,
            compositor,
            visual,
            pulse,
        };

        let mut transaction = Transaction::instant();
        transaction
            .update(overlay.id, overlay.visual)
            .update(overlay.pulse_id, overlay.pulse)
            .subview(overlay.id, overlay.pulse_id);
        overlay.compositor.commit(transaction)?;

        Ok(overlay)
    }

    pub fn id(&self) -> ViewId {
        self.id
    }

    pub fn pulse_id(&self) -> ViewId {
        self.pulse_id
    }

    pub fn visual_layer(&self) -> &Layer {
        &self.visual
    }

    pub fn pulse_layer(&self) -> &Layer {
        &self.pulse
    }

    /// True while the pulse is visible.
    pub fn is_pulsing(&self) -> bool {
        !self.pulse.hidden
    }

    pub fn set_frame(&mut self, frame: Rect) -> Result<()> {
        self.visual.frame = frame;
        self.commit_visual()
    }

    pub fn set_corner_radius(&mut self, corner_radius: f64) -> Result<()> {
        self.visual.corner_radius = corner_radius;
        self.commit_visual()
    }

    fn commit_visual(&self) -> Result<()> {
        let mut transaction = Transaction::instant();
        transaction.update(self.id, self.visual);
        self.compositor.commit(transaction)
    }

    /// Handles a touch event in the host’s coordinate system.
    pub fn touch(&mut self, touch: &Touch) -> Result<()> {
        match touch.phase {
            TouchPhase::Began => self.touch_began(touch.location).map(|_| ()),
            TouchPhase::Ended => self.touch_ended(),
            TouchPhase::Cancelled => self.touch_cancelled(),
            TouchPhase::Moved => Ok(()),
        }
    }

    /// Starts a pulse at `location` if it hits the host as currently rendered.
    ///
    /// Returns true if the pulse started.
    pub fn touch_began(&mut self, location: Point2<f64>) -> Result<bool> {
        if !self.config.interaction_enabled {
            return Ok(false);
        }

        let origin = self.visual.frame.origin;
        let hit = Point2::new(location.x + origin.x, location.y + origin.y);
        if !self.visual.hit_test(hit) {
            return Ok(false);
        }

        let size = self.visual.frame.size;
        self.pulse.frame = Rect::new(
            Point2::new(location.x - size.x / 2., location.y - size.y / 2.),
            Vector2::new(size.x, size.y),
        );
        self.pulse.corner_radius = self.visual.corner_radius;
        self.pulse.hidden = false;

        let mut placement = Transaction::instant();
        placement.update(self.pulse_id, self.pulse);
        self.compositor.commit(placement)?;

        self.pulse.set_scale(self.config.pulse_scale);
        self.visual.set_scale(self.config.visual_scale);

        let mut expansion = Transaction::animated(self.config.duration);
        expansion
            .update(self.pulse_id, self.pulse)
            .update(self.id, self.visual);
        self.compositor.commit(expansion)?;

        tracing::trace!(x = location.x, y = location.y, "pulse started");
        Ok(true)
    }

    pub fn touch_ended(&mut self) -> Result<()> {
        self.collapse()
    }

    pub fn touch_cancelled(&mut self) -> Result<()> {
        self.collapse()
    }

    /// Hides the pulse and returns both layers to identity.
    fn collapse(&mut self) -> Result<()> {
        self.pulse.hidden = true;
        self.pulse.set_scale(1.);
        self.visual.set_scale(1.);

        let mut transaction = Transaction::animated(self.config.duration);
        transaction
            .update(self.pulse_id, self.pulse)
            .update(self.id, self.visual);
        self.compositor.commit(transaction)
    }
}
