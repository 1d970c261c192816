//! Handles and entries.

use crate::container::Bin;
use crate::geometry::Item;
use crate::placement::Score;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Index of a bin in the packer's bin list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BinId(pub usize);

/// Index of an item in the slice handed to
/// [`Packer::pack`](crate::packer::Packer::pack).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ItemId(pub usize);

impl BinId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl ItemId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for BinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "bin#{}", self.0)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item#{}", self.0)
    }
}

/// A (bin, item) pair and its cached score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreboardEntry {
    pub bin: BinId,
    pub item: ItemId,
    pub score: Score,
}

impl ScoreboardEntry {
    /// A not-yet-scored entry.
    pub fn new(bin: BinId, item: ItemId) -> Self {
        Self {
            bin,
            item,
            score: Score::NO_FIT,
        }
    }

    /// Re-scores the entry against the current state of its bin.
    ///
    /// Handles that do not resolve score as [`Score::NO_FIT`].
    pub fn calculate(&mut self, bins: &[Bin], items: &[Item]) -> Score {
        self.score = match (bins.get(self.bin.0), items.get(self.item.0)) {
            (Some(bin), Some(item)) => bin.score_for(item),
            _ => Score::NO_FIT,
        };
        self.score
    }

    pub fn fits(&self) -> bool {
        self.score.fits()
    }
}
