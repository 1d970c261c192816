//! Global best-fit packing across bins.
//!
//! [`Packer::pack`] runs the following loop over a fresh
//! [`Scoreboard`](crate::scoreboard::Scoreboard):
//!
//! 1. Filter out items that are already placed.
//! 2. Score every remaining item against every bin.
//! 3. Take the globally lowest-scoring (bin, item) pair; stop if none fits.
//! 4. Insert it, drop the item from the board and re-score only the bin
//!    that changed; stop if the configured cap is reached, else go to 3.
//!
//! Items are committed in best-fit order, not input order.

mod config;
mod runner;

pub use config::PackOptions;
pub use runner::Packer;
