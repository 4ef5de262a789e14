//! Rectangles and edge insets.

use cgmath::{EuclideanSpace, Point2, Vector2, Zero};
use serde::{Deserialize, Serialize};
use std::ops;

/// A rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Rectangle origin.
    pub origin: Point2<f64>,

    /// Rectangle size.
    pub size: Vector2<f64>,
}

impl Rect {
    /// Creates a new rectangle.
    pub fn new(origin: Point2<f64>, size: Vector2<f64>) -> Rect {
        Rect { origin, size }
    }

    /// Creates a new rectangle from its components.
    pub fn from_xywh(x: f64, y: f64, width: f64, height: f64) -> Rect {
        Rect {
            origin: Point2::new(x, y),
            size: Vector2::new(width, height),
        }
    }

    /// Returns a zero-sized rectangle at the origin.
    pub fn zero() -> Rect {
        Rect {
            origin: Point2::new(0., 0.),
            size: Vector2::zero(),
        }
    }

    pub fn min_x(&self) -> f64 {
        self.origin.x
    }

    pub fn max_x(&self) -> f64 {
        self.origin.x + self.size.x
    }

    pub fn min_y(&self) -> f64 {
        self.origin.y
    }

    pub fn max_y(&self) -> f64 {
        self.origin.y + self.size.y
    }

    pub fn width(&self) -> f64 {
        self.size.x
    }

    pub fn height(&self) -> f64 {
        self.size.y
    }

    /// Returns true if either dimension is zero or negative.
    pub fn is_empty(&self) -> bool {
        self.size.x <= 0. || self.size.y <= 0.
    }

    /// Returns the center point.
    pub fn center(&self) -> Point2<f64> {
        self.origin + self.size / 2.
    }

    /// Returns true if the point is inside the rectangle.
    pub fn contains(&self, point: Point2<f64>) -> bool {
        point.x >= self.origin.x
            && point.y >= self.origin.y
            && point.x < self.max_x()
            && point.y < self.max_y()
    }

    /// Returns true if the given rectangle lies entirely within this one.
    ///
    /// Edges may touch.
    pub fn contains_rect(&self, rect: Rect) -> bool {
        rect.min_x() >= self.min_x()
            && rect.min_y() >= self.min_y()
            && rect.max_x() <= self.max_x()
            && rect.max_y() <= self.max_y()
    }

    /// Returns true if the two rectangles intersect.
    pub fn intersects(&self, rect: Rect) -> bool {
        self.origin.x < rect.max_x()
            && self.origin.y < rect.max_y()
            && rect.origin.x < self.max_x()
            && rect.origin.y < self.max_y()
    }

    /// Returns the intersection rectangle.
    pub fn intersect(&self, rect: Rect) -> Option<Rect> {
        if !self.intersects(rect) {
            return None;
        }

        let min_x = self.origin.x.max(rect.origin.x);
        let min_y = self.origin.y.max(rect.origin.y);
        let max_x = self.max_x().min(rect.max_x());
        let max_y = self.max_y().min(rect.max_y());

        Some(Rect::from_xywh(min_x, min_y, max_x - min_x, max_y - min_y))
    }

    /// Returns a new rectangle inset by the given edge insets.
    ///
    /// The resulting size never goes below zero.
    pub fn inset(&self, insets: EdgeInsets) -> Rect {
        Rect::from_xywh(
            self.origin.x + insets.left,
            self.origin.y + insets.top,
            (self.size.x - insets.horizontal()).max(0.),
            (self.size.y - insets.vertical()).max(0.),
        )
    }
}

impl ops::Add<Point2<f64>> for Rect {
    type Output = Rect;
    fn add(self, point: Point2<f64>) -> Rect {
        Rect {
            origin: self.origin + point.to_vec(),
            size: self.size,
        }
    }
}

/// Insets on each edge of a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeInsets {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl EdgeInsets {
    pub fn zero() -> EdgeInsets {
        EdgeInsets::default()
    }

    /// The same inset on all four edges.
    pub fn uniform(inset: f64) -> EdgeInsets {
        EdgeInsets {
            top: inset,
            left: inset,
            bottom: inset,
            right: inset,
        }
    }

    /// Sum of the left and right insets.
    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    /// Sum of the top and bottom insets.
    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_half_open() {
        let rect = Rect::from_xywh(10., 10., 20., 20.);
        assert!(rect.contains(Point2::new(10., 10.)));
        assert!(rect.contains(Point2::new(29.9, 29.9)));
        assert!(!rect.contains(Point2::new(30., 15.)));
    }

    #[test]
    fn contains_rect_allows_touching_edges() {
        let viewport = Rect::from_xywh(0., 0., 300., 44.);
        assert!(viewport.contains_rect(Rect::from_xywh(200., 0., 100., 44.)));
        assert!(!viewport.contains_rect(Rect::from_xywh(264., 0., 100., 44.)));
    }

    #[test]
    fn intersection() {
        let a = Rect::from_xywh(0., 0., 10., 10.);
        let b = Rect::from_xywh(5., 5., 10., 10.);
        assert_eq!(a.intersect(b), Some(Rect::from_xywh(5., 5., 5., 5.)));
        assert_eq!(a.intersect(Rect::from_xywh(20., 0., 1., 1.)), None);
    }

    #[test]
    fn inset_never_goes_negative() {
        let rect = Rect::from_xywh(0., 0., 10., 10.).inset(EdgeInsets::uniform(8.));
        assert_eq!(rect.origin, Point2::new(8., 8.));
        assert_eq!(rect.size, Vector2::new(0., 0.));
    }
}
