//! Axis-aligned integer rectangle.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle with its top-left corner at `(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rect {
    /// Left edge.
    pub x: i64,
    /// Top edge.
    pub y: i64,
    /// Horizontal extent.
    pub width: i64,
    /// Vertical extent.
    pub height: i64,
}

impl Rect {
    pub const fn new(x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge (exclusive).
    pub fn right(&self) -> i64 {
        self.x.saturating_add(self.width)
    }

    /// Bottom edge (exclusive).
    pub fn bottom(&self) -> i64 {
        self.y.saturating_add(self.height)
    }

    pub fn area(&self) -> i64 {
        self.width.saturating_mul(self.height)
    }

    /// Whether a `width` x `height` rectangle fits inside this one.
    pub fn fits(&self, width: i64, height: i64) -> bool {
        self.width >= width && self.height >= height
    }

    /// Whether `other` lies entirely within `self` (shared edges allowed).
    pub fn contains(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Separating-axis overlap test. Rectangles that only touch along an
    /// edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        !(other.x >= self.right()
            || other.right() <= self.x
            || other.y >= self.bottom()
            || other.bottom() <= self.y)
    }
}
