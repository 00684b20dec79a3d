//! Axis-aligned rectangle geometry for the player and bomb
//!
//! Rects live in integer pixel space with a top-left origin. The center is
//! derived as `left + width / 2`, so resizing around the center keeps the
//! same derived center for every size.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle (top-left + size, integer pixels)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build a rect of the given size centered on `center`
    pub fn from_center(center: IVec2, width: i32, height: i32) -> Self {
        let mut rect = Self::new(0, 0, width, height);
        rect.set_center(center);
        rect
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    #[inline]
    pub fn size(&self) -> IVec2 {
        IVec2::new(self.width, self.height)
    }

    #[inline]
    pub fn center(&self) -> IVec2 {
        IVec2::new(self.x + self.width / 2, self.y + self.height / 2)
    }

    pub fn set_center(&mut self, center: IVec2) {
        self.x = center.x - self.width / 2;
        self.y = center.y - self.height / 2;
    }

    /// Translate in place
    pub fn move_by(&mut self, delta: IVec2) {
        self.x += delta.x;
        self.y += delta.y;
    }

    /// Copy translated by `delta`
    pub fn moved(&self, delta: IVec2) -> Self {
        let mut rect = *self;
        rect.move_by(delta);
        rect
    }

    /// Change the size while keeping the current center
    pub fn resize_centered(&mut self, width: i32, height: i32) {
        let center = self.center();
        self.width = width;
        self.height = height;
        self.set_center(center);
    }

    /// Closed-interval overlap test (touching edges count as overlap)
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() <= other.right()
            && other.left() <= self.right()
            && self.top() <= other.bottom()
            && other.top() <= self.bottom()
    }

    /// True if `other` lies entirely within this rect
    pub fn contains(&self, other: &Rect) -> bool {
        self.left() <= other.left()
            && other.right() <= self.right()
            && self.top() <= other.top()
            && other.bottom() <= self.bottom()
    }
}
