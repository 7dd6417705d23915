//! Axis-aligned rectangle geometry and overlap test
//!
//! Screen convention: origin top-left, y grows downward. A rectangle is
//! its top-left corner plus a non-negative size.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    /// Width and height
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Strict overlap; rectangles that only share an edge do not overlap
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        overlaps(self, other)
    }
}

/// Check whether two rectangles overlap
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.left() < b.right() && a.right() > b.left() && a.top() < b.bottom() && a.bottom() > b.top()
}
