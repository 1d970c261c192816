//! Packing loop.

use super::config::PackOptions;
use crate::container::Bin;
use crate::geometry::Item;
use crate::scoreboard::{BinId, ItemId, Scoreboard};
use std::collections::HashSet;

/// Packs items into a fixed list of bins, always committing the globally
/// best-scoring (bin, item) pair next.
///
/// # Examples
///
/// ```
/// use u_rectpack::container::Bin;
/// use u_rectpack::geometry::Item;
/// use u_rectpack::packer::{PackOptions, Packer};
/// use u_rectpack::scoreboard::ItemId;
///
/// let mut packer = Packer::new(vec![Bin::new(100, 50)]);
/// let mut items = vec![Item::new(50, 100, true), Item::new(50, 100, false)];
///
/// let packed = packer.pack(&mut items, &PackOptions::default());
///
/// assert_eq!(packed, vec![ItemId(1)]);
/// assert_eq!(packer.unpacked(), &[ItemId(0)]);
/// assert_eq!(items[1].label(), "100x50 at [0,0]");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Packer {
    bins: Vec<Bin>,
    unpacked: Vec<ItemId>,
    assignments: Vec<(ItemId, BinId)>,
}

impl Packer {
    /// Creates a packer that owns `bins`, in the given order.
    pub fn new(bins: Vec<Bin>) -> Self {
        Self {
            bins,
            unpacked: Vec::new(),
            assignments: Vec::new(),
        }
    }

    pub fn bins(&self) -> &[Bin] {
        &self.bins
    }

    pub fn bin(&self, id: BinId) -> Option<&Bin> {
        self.bins.get(id.0)
    }

    pub fn into_bins(self) -> Vec<Bin> {
        self.bins
    }

    /// Items of the last [`pack`](Packer::pack) call that were not packed,
    /// in input order.
    pub fn unpacked(&self) -> &[ItemId] {
        &self.unpacked
    }

    /// (item, bin) pairs committed by the last [`pack`](Packer::pack) call,
    /// in commit order.
    pub fn assignments(&self) -> &[(ItemId, BinId)] {
        &self.assignments
    }

    /// Packs as many of `items` as possible into this packer's bins.
    ///
    /// Items already placed (by this or any other packer) are skipped.
    /// Returns the handles of the items packed in this call, in commit
    /// order. Afterwards [`unpacked`](Packer::unpacked) lists every other
    /// item that was considered.
    ///
    /// The item slice itself is never reordered; only the placement fields
    /// of packed items change.
    pub fn pack(&mut self, items: &mut [Item], options: &PackOptions) -> Vec<ItemId> {
        self.assignments.clear();

        let candidates: Vec<ItemId> = items
            .iter()
            .enumerate()
            .filter(|(_, item)| !item.is_placed())
            .map(|(index, _)| ItemId(index))
            .collect();

        if candidates.is_empty() {
            self.unpacked.clear();
            return Vec::new();
        }

        for &id in &candidates {
            if let Err(err) = items[id.0].validate() {
                log::warn!("{id} can never be packed: {err}");
            }
        }

        let cap = options.cap();
        log::debug!(
            "packing {} items into {} bins (cap: {:?})",
            candidates.len(),
            self.bins.len(),
            cap
        );

        let mut board = Scoreboard::new(&self.bins, items, &candidates);
        let packed = self.drain(&mut board, items, cap);

        let packed_set: HashSet<ItemId> = packed.iter().copied().collect();
        self.unpacked = candidates
            .into_iter()
            .filter(|id| !packed_set.contains(id))
            .collect();

        log::debug!(
            "packed {} items, {} left unpacked",
            packed.len(),
            self.unpacked.len()
        );

        packed
    }

    /// Commits the board's best entry until nothing fits or `cap` items
    /// have been packed.
    fn drain(
        &mut self,
        board: &mut Scoreboard,
        items: &mut [Item],
        cap: Option<usize>,
    ) -> Vec<ItemId> {
        let mut packed = Vec::new();

        while let Some(best) = board.best_fit() {
            let (Some(bin), Some(item)) = (self.bins.get_mut(best.bin.0), items.get_mut(best.item.0))
            else {
                board.remove_item(best.item);
                continue;
            };

            // The cached score can only be stale if bin state changed behind
            // the board's back; drop the item for this run.
            if !bin.insert(item) {
                log::debug!(
                    "{} rejected {} despite cached score {}; skipping it",
                    best.bin,
                    best.item,
                    best.score
                );
                board.remove_item(best.item);
                continue;
            }

            log::trace!(
                "{} -> {}: {} (score {})",
                best.item,
                best.bin,
                item,
                best.score
            );

            packed.push(best.item);
            self.assignments.push((best.item, best.bin));
            board.remove_item(best.item);
            board.recalculate_bin(best.bin, &self.bins, items);

            if cap.is_some_and(|cap| packed.len() >= cap) {
                break;
            }
        }

        packed
    }
}
