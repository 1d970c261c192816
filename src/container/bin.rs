//! A single rectangular bin.

use crate::free_space::FreeSpace;
use crate::geometry::{Item, Rect};
use crate::placement::{find_best_placement, Heuristic, Score};
use std::fmt;

/// A rectangular container.
///
/// # Examples
///
/// ```
/// use u_rectpack::container::Bin;
/// use u_rectpack::geometry::Item;
///
/// let mut bin = Bin::new(100, 50);
/// let mut item = Item::new(50, 50, false);
///
/// assert!(bin.insert(&mut item));
/// assert!(item.is_placed());
/// assert_eq!(bin.label(), "100x50 50.00%");
/// ```
#[derive(Debug, Clone)]
pub struct Bin {
    width: i64,
    height: i64,
    heuristic: Heuristic,
    items: Vec<Item>,
    free: FreeSpace,
}

impl Bin {
    /// Creates an empty bin scored with [`Heuristic::BestShortSideFit`].
    pub fn new(width: i64, height: i64) -> Self {
        Self::with_heuristic(width, height, Heuristic::default())
    }

    /// Creates an empty bin scored with `heuristic`.
    pub fn with_heuristic(width: i64, height: i64, heuristic: Heuristic) -> Self {
        Self {
            width,
            height,
            heuristic,
            items: Vec::new(),
            free: FreeSpace::new(width, height),
        }
    }

    pub fn width(&self) -> i64 {
        self.width
    }

    pub fn height(&self) -> i64 {
        self.height
    }

    pub fn heuristic(&self) -> Heuristic {
        self.heuristic
    }

    pub fn area(&self) -> i64 {
        self.width.saturating_mul(self.height)
    }

    /// Items placed so far, in insertion order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn free_rects(&self) -> &[Rect] {
        self.free.rects()
    }

    pub fn free_space(&self) -> &FreeSpace {
        &self.free
    }

    /// Places `item` at the best position this bin's heuristic can find.
    ///
    /// Returns `false`, leaving both the bin and the item untouched, when
    /// the item is already placed, has a non-positive side, or fits
    /// nowhere. On success the item's position is set (rotating it if the
    /// winning candidate required it), the free space is updated and a copy
    /// of the item is appended to [`items`](Bin::items).
    pub fn insert(&mut self, item: &mut Item) -> bool {
        if item.is_placed() || item.validate().is_err() {
            return false;
        }

        let placement = find_best_placement(item, self.free.rects(), self.heuristic);
        if !placement.fits() {
            return false;
        }

        item.place(placement.x, placement.y, placement.rotated);
        self.free.occupy(&item.rect());
        self.items.push(*item);

        true
    }

    /// Score `item` would get if inserted now, without inserting it.
    ///
    /// The search runs on an unplaced copy of the item, so neither the item
    /// nor the bin is touched. [`Score::NO_FIT`] when it would not fit.
    pub fn score_for(&self, item: &Item) -> Score {
        let probe = item.blank_copy();
        if probe.validate().is_err() {
            return Score::NO_FIT;
        }
        find_best_placement(&probe, self.free.rects(), self.heuristic).score
    }

    /// Whether the empty bin could hold `item` in some permitted
    /// orientation. Ignores space already taken by earlier placements.
    pub fn is_larger_than(&self, item: &Item) -> bool {
        let original = self.width >= item.width() && self.height >= item.height();
        let rotated =
            item.can_rotate() && self.width >= item.height() && self.height >= item.width();
        original || rotated
    }

    /// Percentage of the bin's area covered by placed items.
    ///
    /// Returns 0 for a bin with zero area. Computed in floating point, so
    /// bins near the `i64` range cannot overflow.
    pub fn efficiency(&self) -> f64 {
        if self.width <= 0 || self.height <= 0 {
            return 0.0;
        }
        let used: f64 = self
            .items
            .iter()
            .map(|item| item.width() as f64 * item.height() as f64)
            .sum();
        used * 100.0 / (self.width as f64 * self.height as f64)
    }

    /// Human-readable description, e.g. `"100x50 58.00%"`.
    pub fn label(&self) -> String {
        format!("{}x{} {:.2}%", self.width, self.height, self.efficiency())
    }
}

impl fmt::Display for Bin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_while_space_available() {
        let mut bin = Bin::new(100, 50);
        let mut boxes = [
            Item::new(50, 50, false),
            Item::new(10, 40, false),
            Item::new(50, 44, false),
        ];

        let inserted: Vec<bool> = boxes.iter_mut().map(|b| bin.insert(b)).collect();
        assert_eq!(inserted, vec![true, true, false]);

        assert_eq!(bin.items().len(), 2);
        assert_eq!(bin.items()[0].rect(), Rect::new(0, 0, 50, 50));
        assert_eq!(bin.items()[1].rect(), Rect::new(50, 0, 10, 40));

        assert!(boxes[0].is_placed());
        assert!(boxes[1].is_placed());
        let rejected = &boxes[2];
        assert!(!rejected.is_placed());
        assert_eq!((rejected.x(), rejected.y()), (0, 0));

        assert!((bin.efficiency() - 58.0).abs() < 1e-9);
        assert_eq!(bin.label(), "100x50 58.00%");
    }

    #[test]
    fn test_custom_heuristic_rotates() {
        let mut bin = Bin::with_heuristic(100, 50, Heuristic::BestAreaFit);
        let mut item = Item::new(50, 100, false);

        assert!(bin.insert(&mut item));
        assert_eq!(bin.items().len(), 1);
        assert_eq!((item.width(), item.height()), (100, 50));
        assert_eq!(bin.items()[0], item);
        assert!(bin.free_rects().is_empty());
    }

    #[test]
    fn test_insert_placed_item_is_noop() {
        let mut bin = Bin::new(100, 50);
        let mut item = Item::new(10, 10, false);
        assert!(bin.insert(&mut item));

        let free_before = bin.free_rects().to_vec();
        assert!(!bin.insert(&mut item));
        assert_eq!(bin.items().len(), 1);
        assert_eq!(bin.free_rects(), &free_before[..]);
    }

    #[test]
    fn test_insert_rejects_degenerate_item() {
        let mut bin = Bin::new(100, 50);
        let mut item = Item::new(0, 10, false);
        assert!(!bin.insert(&mut item));
        assert!(!item.is_placed());
        assert_eq!(bin.free_rects(), &[Rect::new(0, 0, 100, 50)]);
        assert_eq!(bin.score_for(&item), Score::NO_FIT);
    }

    #[test]
    fn test_score_for_does_not_mutate() {
        let bin = Bin::new(100, 50);
        let item = Item::new(50, 100, false);

        let score = bin.score_for(&item);
        assert!(score.fits());
        assert_eq!(score.value(), 0);
        assert!(!item.is_placed());
        assert_eq!((item.width(), item.height()), (50, 100));
        assert!(bin.items().is_empty());
    }

    #[test]
    fn test_score_for_placed_item_uses_dimensions() {
        let mut bin = Bin::new(100, 50);
        let mut item = Item::new(20, 20, false);
        assert!(bin.insert(&mut item));

        // Scored as a fresh copy, so being placed does not hide it.
        assert!(bin.score_for(&item).fits());
    }

    #[test]
    fn test_is_larger_than() {
        let bin = Bin::new(100, 50);
        assert!(bin.is_larger_than(&Item::new(100, 50, true)));
        assert!(bin.is_larger_than(&Item::new(50, 100, false)));
        assert!(!bin.is_larger_than(&Item::new(50, 100, true)));
        assert!(!bin.is_larger_than(&Item::new(101, 1, false)));
    }

    #[test]
    fn test_efficiency_of_empty_and_degenerate_bins() {
        assert_eq!(Bin::new(100, 50).efficiency(), 0.0);
        assert_eq!(Bin::new(0, 50).efficiency(), 0.0);
        assert_eq!(Bin::new(0, 0).label(), "0x0 0.00%");
    }

    #[test]
    fn test_efficiency_of_huge_bin_does_not_overflow() {
        let mut bin = Bin::new(i64::MAX, 2);
        let mut a = Item::new(i64::MAX, 1, true);
        let mut b = Item::new(i64::MAX, 1, true);
        assert!(bin.insert(&mut a));
        assert!(bin.insert(&mut b));

        assert!((bin.efficiency() - 100.0).abs() < 1e-9);
        assert_eq!(bin.label(), format!("{}x2 100.00%", i64::MAX));
    }

    #[test]
    fn test_fill_exactly() {
        let mut bin = Bin::new(20, 20);
        let mut items: Vec<Item> = (0..4).map(|_| Item::new(10, 10, true)).collect();
        for item in &mut items {
            assert!(bin.insert(item));
        }
        assert!(bin.free_rects().is_empty());
        assert!((bin.efficiency() - 100.0).abs() < 1e-9);

        let mut extra = Item::new(1, 1, false);
        assert!(!bin.insert(&mut extra));
    }
}
