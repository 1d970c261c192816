//! Rectangular item to be packed.

use super::rect::Rect;
use crate::error::{PackError, Result};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A rectangular box to be packed into a bin.
///
/// Width and height reflect the item's *current* orientation: a successful
/// rotated insertion swaps them. The position and the placed flag are
/// written together, exactly once, by
/// [`Bin::insert`](crate::container::Bin::insert).
///
/// # Examples
///
/// ```
/// use u_rectpack::geometry::Item;
///
/// let item = Item::new(50, 100, false);
/// assert!(item.can_rotate());
/// assert!(!item.is_placed());
/// assert_eq!(item.area(), 5000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Item {
    width: i64,
    height: i64,
    constrain_rotation: bool,
    x: i64,
    y: i64,
    placed: bool,
}

impl Item {
    /// Creates an unplaced item.
    ///
    /// `constrain_rotation = true` forbids the packer from swapping the
    /// item's width and height.
    pub fn new(width: i64, height: i64, constrain_rotation: bool) -> Self {
        Self {
            width,
            height,
            constrain_rotation,
            x: 0,
            y: 0,
            placed: false,
        }
    }

    /// Creates an unplaced item, rejecting non-positive dimensions.
    pub fn try_new(width: i64, height: i64, constrain_rotation: bool) -> Result<Self> {
        let item = Self::new(width, height, constrain_rotation);
        item.validate()?;
        Ok(item)
    }

    /// Checks that both sides are positive.
    ///
    /// A degenerate item would "fit" anywhere without occupying space, so
    /// bins refuse to place one.
    pub fn validate(&self) -> Result<()> {
        if self.width <= 0 || self.height <= 0 {
            return Err(PackError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    pub fn width(&self) -> i64 {
        self.width
    }

    pub fn height(&self) -> i64 {
        self.height
    }

    /// Left edge of the placement. Zero until placed.
    pub fn x(&self) -> i64 {
        self.x
    }

    /// Top edge of the placement. Zero until placed.
    pub fn y(&self) -> i64 {
        self.y
    }

    pub fn is_placed(&self) -> bool {
        self.placed
    }

    pub fn is_rotation_constrained(&self) -> bool {
        self.constrain_rotation
    }

    /// Whether the packer may swap width and height.
    pub fn can_rotate(&self) -> bool {
        !self.constrain_rotation
    }

    pub fn area(&self) -> i64 {
        self.width.saturating_mul(self.height)
    }

    /// Footprint at the current position and orientation.
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Human-readable description, e.g. `"50x45 at [0,0]"`.
    pub fn label(&self) -> String {
        format!("{}x{} at [{},{}]", self.width, self.height, self.x, self.y)
    }

    /// An unplaced copy carrying only the dimensions and rotation flag.
    pub(crate) fn blank_copy(&self) -> Self {
        Self::new(self.width, self.height, self.constrain_rotation)
    }

    pub(crate) fn place(&mut self, x: i64, y: i64, rotated: bool) {
        if rotated {
            std::mem::swap(&mut self.width, &mut self.height);
        }
        self.x = x;
        self.y = y;
        self.placed = true;
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}
