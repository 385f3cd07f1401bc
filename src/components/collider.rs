//! Integer rectangles and axis-aligned overlap testing.
//!
//! [`Rect`] is the single rectangle type used for actor bounds, sprite-sheet
//! source regions and draw destinations. [`overlaps`] is the stateless AABB
//! test every collision check goes through.

use raylib::prelude::Rectangle;

/// Integer axis-aligned rectangle in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Right edge (exclusive).
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    /// Bottom edge (exclusive).
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    pub fn overlaps(&self, other: &Rect) -> bool {
        overlaps(self, other)
    }
}

impl From<Rect> for Rectangle {
    fn from(r: Rect) -> Self {
        Rectangle {
            x: r.x as f32,
            y: r.y as f32,
            width: r.w as f32,
            height: r.h as f32,
        }
    }
}

/// AABB vs AABB overlap test.
///
/// Intervals are half-open, so rectangles that only share an edge do not
/// overlap. The test is commutative.
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.x < b.right() && b.x < a.right() && a.y < b.bottom() && b.y < a.bottom()
}
