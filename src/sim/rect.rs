//! Axis-aligned rectangle on the pixel grid
//!
//! Position is mutable through edge setters; size is fixed at creation so
//! collision correction can never produce a degenerate rectangle.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// An integer rectangle (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: IVec2,
    size: IVec2,
}

impl Rect {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self {
            pos: IVec2::new(x, y),
            size: IVec2::new(w.max(0), h.max(0)),
        }
    }

    #[inline]
    pub fn size(&self) -> IVec2 {
        self.size
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.size.y
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn centerx(&self) -> i32 {
        self.pos.x + self.size.x / 2
    }

    pub fn set_left(&mut self, x: i32) {
        self.pos.x = x;
    }

    pub fn set_right(&mut self, x: i32) {
        self.pos.x = x - self.size.x;
    }

    pub fn set_top(&mut self, y: i32) {
        self.pos.y = y;
    }

    pub fn set_bottom(&mut self, y: i32) {
        self.pos.y = y - self.size.y;
    }

    /// Strict overlap: shared edges don't count, empty rectangles never overlap
    pub fn overlaps(&self, other: &Rect) -> bool {
        if self.size.cmple(IVec2::ZERO).any() || other.size.cmple(IVec2::ZERO).any() {
            return false;
        }
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// Strict overlap of the horizontal extents only
    pub fn overlaps_x(&self, other: &Rect) -> bool {
        self.width() > 0
            && other.width() > 0
            && self.left() < other.right()
            && self.right() > other.left()
    }

    /// Grow (or shrink, with negative deltas) around the center
    pub fn inflated(&self, dw: i32, dh: i32) -> Self {
        Self::new(
            self.pos.x - dw / 2,
            self.pos.y - dh / 2,
            self.size.x + dw,
            self.size.y + dh,
        )
    }

    pub fn translated(&self, dx: i32, dy: i32) -> Self {
        Self {
            pos: self.pos + IVec2::new(dx, dy),
            size: self.size,
        }
    }
}
