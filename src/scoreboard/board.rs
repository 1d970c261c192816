//! Score cache and global best-fit lookup.

use super::types::{BinId, ItemId, ScoreboardEntry};
use crate::container::Bin;
use crate::geometry::Item;
use std::collections::BTreeSet;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Cached scores of every (bin, item) candidate pairing.
///
/// The board does not own bins or items; every operation that needs to
/// score takes the bin list and item slice the handles point into.
///
/// # Examples
///
/// ```
/// use u_rectpack::container::Bin;
/// use u_rectpack::geometry::Item;
/// use u_rectpack::scoreboard::{BinId, ItemId, Scoreboard};
///
/// let bins = vec![Bin::new(100, 50), Bin::new(50, 50)];
/// let items = vec![Item::new(40, 40, false), Item::new(50, 45, false)];
/// let board = Scoreboard::new(&bins, &items, &[ItemId(0), ItemId(1)]);
///
/// let best = board.best_fit().unwrap();
/// assert_eq!((best.bin, best.item), (BinId(1), ItemId(1)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Scoreboard {
    entries: Vec<ScoreboardEntry>,
}

impl Scoreboard {
    /// Enrolls every candidate item against every bin and scores each pair.
    ///
    /// Entries are laid out bin-major, in bin order then candidate order.
    /// Candidate handles that do not resolve into `items` are skipped.
    pub fn new(bins: &[Bin], items: &[Item], candidates: &[ItemId]) -> Self {
        let mut board = Self {
            entries: Vec::with_capacity(bins.len() * candidates.len()),
        };
        for bin in 0..bins.len() {
            board.enroll(BinId(bin), items, candidates);
        }
        rescore(&mut board.entries, bins, items, None);
        board
    }

    pub fn entries(&self) -> &[ScoreboardEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The fitting entry with the lowest score; the earliest one on ties.
    ///
    /// Entries scored [`Score::NO_FIT`](crate::placement::Score::NO_FIT) are
    /// never returned.
    pub fn best_fit(&self) -> Option<ScoreboardEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.fits())
            .min_by_key(|entry| entry.score)
            .copied()
    }

    /// Drops every entry for `item`, across all bins.
    pub fn remove_item(&mut self, item: ItemId) {
        self.entries.retain(|entry| entry.item != item);
    }

    /// Re-scores the surviving entries of `bin`, leaving other bins'
    /// entries as they are.
    pub fn recalculate_bin(&mut self, bin: BinId, bins: &[Bin], items: &[Item]) {
        if bin.0 >= bins.len() {
            return;
        }
        rescore(&mut self.entries, bins, items, Some(bin));
    }

    /// Enrolls an additional bin against the items still on the board.
    pub fn add_bin(&mut self, bin: BinId, bins: &[Bin], items: &[Item]) {
        if bin.0 >= bins.len() {
            return;
        }
        let current = self.current_items();
        let start = self.entries.len();
        self.enroll(bin, items, &current);
        rescore(&mut self.entries[start..], bins, items, None);
    }

    /// Distinct items that still have at least one entry, ascending.
    pub fn current_items(&self) -> Vec<ItemId> {
        self.entries
            .iter()
            .map(|entry| entry.item)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn any_items_left(&self) -> bool {
        !self.entries.is_empty()
    }

    fn enroll(&mut self, bin: BinId, items: &[Item], candidates: &[ItemId]) {
        self.entries.extend(
            candidates
                .iter()
                .filter(|id| id.0 < items.len())
                .map(|&id| ScoreboardEntry::new(bin, id)),
        );
    }
}

/// Scores `entries`, optionally only those belonging to `only`.
///
/// Scoring is read-only on bins and items, so with the `parallel` feature
/// it fans out over rayon's pool.
fn rescore(entries: &mut [ScoreboardEntry], bins: &[Bin], items: &[Item], only: Option<BinId>) {
    #[cfg(feature = "parallel")]
    entries
        .par_iter_mut()
        .filter(|entry| only.is_none_or(|bin| entry.bin == bin))
        .for_each(|entry| {
            entry.calculate(bins, items);
        });

    #[cfg(not(feature = "parallel"))]
    for entry in entries
        .iter_mut()
        .filter(|entry| only.is_none_or(|bin| entry.bin == bin))
    {
        entry.calculate(bins, items);
    }
}
