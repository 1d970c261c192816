//! Two-dimensional rectangle bin packing.
//!
//! Places rectangular items into one or more rectangular bins so that no
//! two items overlap and as many items as possible are placed:
//!
//! - **Free-space tracking**: each bin keeps its unoccupied area as a list
//!   of maximal free rectangles, split around every placement and pruned
//!   of redundant entries ([`free_space`]).
//! - **Placement heuristics**: pluggable scoring rules (best area fit,
//!   best short side fit, best long side fit, bottom-left) that rank
//!   candidate positions, lower is better ([`placement`]).
//! - **Bins**: insertion and non-mutating score simulation
//!   ([`container`]).
//! - **Scoreboard**: cached scores for every (bin, item) pair with
//!   targeted re-scoring after each insertion ([`scoreboard`]).
//! - **Packer**: the global best-fit loop tying it all together
//!   ([`packer`]).
//!
//! # Example
//!
//! ```
//! use u_rectpack::container::Bin;
//! use u_rectpack::geometry::Item;
//! use u_rectpack::packer::{PackOptions, Packer};
//! use u_rectpack::placement::Heuristic;
//!
//! let mut packer = Packer::new(vec![
//!     Bin::new(100, 50),
//!     Bin::with_heuristic(50, 50, Heuristic::BestAreaFit),
//! ]);
//! let mut items = vec![
//!     Item::new(15, 10, false),
//!     Item::new(50, 45, false),
//!     Item::new(40, 40, false),
//!     Item::new(200, 200, false),
//! ];
//!
//! let packed = packer.pack(&mut items, &PackOptions::default());
//!
//! assert_eq!(packed.len(), 3);
//! assert_eq!(packer.unpacked().len(), 1);
//! ```
//!
//! Packing is heuristic: results are good, not optimal.
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for the value types.
//! - `parallel`: score scoreboard entries on rayon's thread pool.

pub mod container;
pub mod error;
pub mod free_space;
pub mod geometry;
pub mod packer;
pub mod placement;
pub mod scoreboard;

pub use error::{PackError, Result};
