//! Events.

use cgmath::Point2;
use core::fmt;
use parking_lot::Mutex;
use std::sync::Arc;

/// Types of pointing devices or mechanisms.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerDevice {
    /// Touch input from a finger or something of the sort; is expected to be imprecise.
    Touch = 0,

    /// Pen input.
    Pen = 1,

    /// Any indirect input mechanism.
    Cursor = 2,
}

impl PointerDevice {
    /// If true, the input mechanism is precise and can hit small targets.
    pub fn is_precise(&self) -> bool {
        match self {
            PointerDevice::Touch => false,
            PointerDevice::Pen | PointerDevice::Cursor => true,
        }
    }
}

/// Phases of a single touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    Began,
    Moved,
    Ended,
    Cancelled,
}

/// A touch event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Touch {
    /// Unique ID of the touch for the duration of one touch session.
    pub id: u64,

    /// Event location in the receiving view’s coordinate system.
    pub location: Point2<f64>,

    pub phase: TouchPhase,

    /// The device type that emitted this event.
    pub device: PointerDevice,
}

impl Touch {
    pub fn new(phase: TouchPhase, location: Point2<f64>) -> Touch {
        Touch {
            id: 0,
            location,
            phase,
            device: PointerDevice::Touch,
        }
    }

    pub fn began(location: Point2<f64>) -> Touch {
        Touch::new(TouchPhase::Began, location)
    }

    pub fn ended(location: Point2<f64>) -> Touch {
        Touch::new(TouchPhase::Ended, location)
    }

    pub fn cancelled(location: Point2<f64>) -> Touch {
        Touch::new(TouchPhase::Cancelled, location)
    }
}

/// A callback slot.
///
/// Widgets keep these as `Option<Handler<T>>`; an empty slot does nothing.
pub struct Handler<T>(Arc<Mutex<dyn FnMut(&T) + Send>>);

impl<T> Clone for Handler<T> {
    fn clone(&self) -> Self {
        Handler(Arc::clone(&self.0))
    }
}

impl<T> Handler<T> {
    pub fn new<F: 'static + FnMut(&T) + Send>(handler: F) -> Self {
        Handler(Arc::new(Mutex::new(handler)))
    }

    /// Invokes the handler.
    pub fn call(&self, event: &T) {
        let mut handler = self.0.lock();
        (&mut *handler)(event)
    }
}

impl<T> fmt::Debug for Handler<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Handler<{}>", std::any::type_name::<T>())
    }
}
