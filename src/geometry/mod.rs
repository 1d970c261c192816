//! Rectangle primitives.
//!
//! - [`Rect`]: an axis-aligned rectangle, used for free-space tracking and
//!   for the footprint of a placed item.
//! - [`Item`]: a rectangular box to be packed, optionally rotatable.
//!
//! Coordinates are integral. `y` grows downward, so the "top" edge of a
//! rectangle is its smallest `y` and the "bottom" edge is `y + height`.

mod item;
mod rect;

pub use item::Item;
pub use rect::Rect;
