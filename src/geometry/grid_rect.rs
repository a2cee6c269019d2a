//! Grid-space rectangles
//!
//! A [`GridRect`] is anchored at a cell and extends by a signed width and
//! height, so it can grow in any direction from its anchor. Bounds are always
//! reported normalized and scaled to pixels.

use crate::core::config::TILE_SIZE;
use bevy::prelude::*;
use std::fmt;

/// An axis-aligned rectangle in grid cells
///
/// `w` and `h` may be negative, in which case the rectangle extends left
/// (or up) from the anchor at `(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub struct GridRect {
    x: i32,
    y: i32,
    w: i32,
    h: i32,
}

impl GridRect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// A single cell anchored at `(x, y)`
    pub const fn cell(x: i32, y: i32) -> Self {
        Self::new(x, y, 1, 1)
    }

    /// The anchor cell
    pub fn anchor(&self) -> IVec2 {
        IVec2::new(self.x, self.y)
    }

    /// Signed width and height in cells
    pub fn size(&self) -> IVec2 {
        IVec2::new(self.w, self.h)
    }

    /// Translate the anchor. There is no clamping: the rectangle may end up
    /// anywhere, including far outside the window.
    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.x += dx;
        self.y += dy;
    }

    /// Grow or shrink by `(dw, dh)` cells.
    ///
    /// A dimension that would collapse to exactly zero receives its delta a
    /// second time, so shrinking a 1-wide rectangle by one flips it to -1
    /// instead of leaving it empty.
    pub fn resize(&mut self, dw: i32, dh: i32) {
        self.w = step_dimension(self.w, dw);
        self.h = step_dimension(self.h, dh);
    }

    /// Top-left corner in pixels, regardless of the sign of `w`/`h`
    pub fn lower_bounds(&self) -> IVec2 {
        IVec2::new(self.x.min(self.x + self.w), self.y.min(self.y + self.h)) * TILE_SIZE
    }

    /// Bottom-right corner in pixels, regardless of the sign of `w`/`h`
    pub fn upper_bounds(&self) -> IVec2 {
        IVec2::new(self.x.max(self.x + self.w), self.y.max(self.y + self.h)) * TILE_SIZE
    }

    /// Pixel extent of the normalized bounds
    pub fn pixel_size(&self) -> IVec2 {
        self.upper_bounds() - self.lower_bounds()
    }
}

fn step_dimension(current: i32, delta: i32) -> i32 {
    let next = current + delta;
    if next == 0 {
        next + delta
    } else {
        next
    }
}

impl fmt::Display for GridRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rectangle({}, {}, {}, {})", self.x, self.y, self.w, self.h)
    }
}
