//! Axis-aligned rectangles
//!
//! The only collision shape in the game. Overlap is strict: rectangles that
//! merely share an edge do not collide.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    /// Square of side `side` centered on `center`
    pub fn centered(center: Vec2, side: f32) -> Self {
        let half = Vec2::splat(side / 2.0);
        Self {
            pos: center - half,
            size: Vec2::splat(side),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Translate by `-offset` (world space to screen space)
    pub fn offset_by(&self, offset: Vec2) -> Self {
        Self {
            pos: self.pos - offset,
            size: self.size,
        }
    }

    /// Strict overlap test
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// Point containment (left/top inclusive, right/bottom exclusive)
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.left()
            && point.x < self.right()
            && point.y >= self.top()
            && point.y < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let right = Rect::new(10.0, 0.0, 10.0, 10.0);
        let below = Rect::new(0.0, 10.0, 10.0, 10.0);
        assert!(!a.intersects(&right));
        assert!(!a.intersects(&below));
    }

    #[test]
    fn test_centered_square() {
        let r = Rect::centered(Vec2::new(50.0, 40.0), 40.0);
        assert_eq!(r.pos, Vec2::new(30.0, 20.0));
        assert_eq!(r.center(), Vec2::new(50.0, 40.0));
    }

    #[test]
    fn test_contains() {
        let r = Rect::new(10.0, 10.0, 50.0, 50.0);
        assert!(r.contains(Vec2::new(10.0, 10.0)));
        assert!(r.contains(Vec2::new(59.0, 30.0)));
        assert!(!r.contains(Vec2::new(60.0, 30.0)));
        assert!(!r.contains(Vec2::new(9.0, 30.0)));
    }

    #[test]
    fn test_offset_by() {
        let r = Rect::new(300.0, 200.0, 100.0, 100.0);
        let screen = r.offset_by(Vec2::new(250.0, 150.0));
        assert_eq!(screen.pos, Vec2::new(50.0, 50.0));
        assert_eq!(screen.size, r.size);
    }
}
