//! Axis-aligned 2D rectangles.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Rectangle given by its min corner and size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rect spanning two corners given in any order.
    pub fn from_min_max(a: Vec2, b: Vec2) -> Self {
        let min = a.min(b);
        let size = a.max(b) - min;
        Self::new(min.x, min.y, size.x, size.y)
    }

    pub fn min(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn max(&self) -> Vec2 {
        Vec2::new(self.x_max(), self.y_max())
    }

    pub fn x_max(&self) -> f32 {
        self.x + self.width
    }

    pub fn y_max(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> Vec2 {
        (self.min() + self.max()) * 0.5
    }

    /// True unless the rects are strictly separated on some axis.
    ///
    /// Shared edges and corners count as overlapping.
    pub fn overlaps(&self, other: &Rect) -> bool {
        other.x_max() >= self.x
            && other.x <= self.x_max()
            && other.y_max() >= self.y
            && other.y <= self.y_max()
    }

    /// Closed containment test.
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.x && point.x <= self.x_max() && point.y >= self.y && point.y <= self.y_max()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlapping_rects() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_contained_rect_overlaps() {
        let outer = Rect::new(0.0, 0.0, 10.0, 10.0);
        let inner = Rect::new(2.0, 2.0, 1.0, 1.0);
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn test_touching_edges_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let right = Rect::new(10.0, 0.0, 5.0, 5.0);
        let corner = Rect::new(10.0, 10.0, 5.0, 5.0);
        assert!(a.overlaps(&right));
        assert!(a.overlaps(&corner));
    }

    #[test]
    fn test_separated_on_one_axis() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        // Overlap on Y, separated on X
        assert!(!a.overlaps(&Rect::new(10.5, 2.0, 3.0, 3.0)));
        // Overlap on X, separated on Y
        assert!(!a.overlaps(&Rect::new(2.0, -5.0, 3.0, 4.0)));
    }

    #[test]
    fn test_reflexive() {
        let r = Rect::new(-3.0, 4.0, 2.0, 7.0);
        assert!(r.overlaps(&r));
    }

    #[test]
    fn test_from_min_max_any_order() {
        let r = Rect::from_min_max(Vec2::new(4.0, 1.0), Vec2::new(1.0, 3.0));
        assert_eq!(r, Rect::new(1.0, 1.0, 3.0, 2.0));
        assert_eq!(r.center(), Vec2::new(2.5, 2.0));
    }

    #[test]
    fn test_contains_point() {
        let r = Rect::new(0.0, 0.0, 2.0, 2.0);
        assert!(r.contains_point(Vec2::new(2.0, 1.0)));
        assert!(!r.contains_point(Vec2::new(2.1, 1.0)));
    }
}
