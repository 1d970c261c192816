//! Cross-bin, cross-item score cache.
//!
//! The [`Scoreboard`] holds one [`ScoreboardEntry`] per (bin, item) pair
//! with the score the item would get in that bin right now. Entries refer
//! to bins and items through stable handles ([`BinId`], [`ItemId`]) rather
//! than references, so the board never aliases the data it ranks.
//!
//! After an insertion only the entries of the bin that changed are
//! re-scored; every other bin's cached scores stay valid.

mod board;
mod types;

pub use board::Scoreboard;
pub use types::{BinId, ItemId, ScoreboardEntry};
