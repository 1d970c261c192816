//! Bins: fixed-size containers that items are packed into.
//!
//! A [`Bin`] owns its free-space list and the items placed in it, and
//! exposes two entry points built on
//! [`find_best_placement`](crate::placement::find_best_placement):
//!
//! - [`Bin::insert`] commits a placement (the only mutating operation).
//! - [`Bin::score_for`] only simulates one, for ranking.

mod bin;

pub use bin::Bin;
