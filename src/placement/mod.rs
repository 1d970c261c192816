//! Placement scoring and search.
//!
//! A [`Heuristic`] maps a candidate (free rectangle, item width, item
//! height) to a [`Score`]; **lower is better**, consistent with the
//! minimization convention used throughout the crate. [`Score::NO_FIT`] is
//! reserved for "does not fit".
//!
//! [`find_best_placement`] applies a heuristic to every free rectangle of a
//! bin, in both orientations when the item may rotate, and returns the
//! winning [`Placement`].
//!
//! # References
//!
//! Jukka Jylänki (2010), "A Thousand Ways to Pack the Bin - A Practical
//! Approach to Two-Dimensional Rectangle Bin Packing"

mod heuristic;
mod score;
mod search;

pub use heuristic::Heuristic;
pub use score::Score;
pub use search::{find_best_placement, Placement};
