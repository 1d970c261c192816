//! Per-bin free-space tracking.
//!
//! A bin's unoccupied area is kept as a list of *maximal* free rectangles.
//! Placing an item cuts every free rectangle it overlaps into up to four
//! slices (top, bottom, left, right), each spanning the full extent of the
//! rectangle it came from. The slices overlap one another, so a pruning
//! pass afterwards removes every rectangle wholly contained in another.
//!
//! ```text
//!  +-----------------------+      top    = full width, above the item
//!  |          top          |      bottom = full width, below the item
//!  |-----+---------+-------|      left   = full height, left of the item
//!  | left|  item   | right |      right  = full height, right of the item
//!  |-----+---------+-------|
//!  |         bottom        |
//!  +-----------------------+
//! ```
//!
//! This is a free-list allocator over 2D space: splitting plays the role of
//! carving an allocation out of a free block, pruning the role of keeping
//! the free list canonical.

mod set;
mod split;

pub use set::FreeSpace;
pub use split::split;
