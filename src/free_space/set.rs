//! The free-rectangle list of a single bin.

use super::split::split;
use crate::geometry::Rect;

/// Maximal free rectangles of one bin.
///
/// After every [`occupy`](FreeSpace::occupy) the list covers exactly the
/// bin's unoccupied area and no rectangle is contained in another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FreeSpace {
    rects: Vec<Rect>,
}

impl FreeSpace {
    /// One free rectangle covering a `width` x `height` bin.
    ///
    /// A degenerate bin has no free space at all.
    pub fn new(width: i64, height: i64) -> Self {
        let rects = if width > 0 && height > 0 {
            vec![Rect::new(0, 0, width, height)]
        } else {
            Vec::new()
        };
        Self { rects }
    }

    pub fn rects(&self) -> &[Rect] {
        &self.rects
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rect> {
        self.rects.iter()
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// Marks `used` as occupied.
    ///
    /// Every free rectangle overlapping `used` is replaced, at its position
    /// in the list, by its [`split`] slices. Rectangles that do not overlap
    /// are kept as they are. The list is pruned afterwards.
    ///
    /// Splitting only the rectangle an item was placed in is not enough:
    /// free rectangles overlap, so a neighbour could still cover `used` and
    /// let a later item overlap this one. See
    /// `test_occupy_splits_every_overlapping_rect`.
    pub fn occupy(&mut self, used: &Rect) {
        let mut next = Vec::with_capacity(self.rects.len() + 3);
        for free in &self.rects {
            if free.intersects(used) {
                next.extend(split(free, used));
            } else {
                next.push(*free);
            }
        }
        self.rects = next;
        self.prune();
    }

    /// Removes every rectangle contained in another one.
    ///
    /// Of several identical rectangles the earliest survives. Pairwise,
    /// O(n²) in the number of free rectangles.
    pub fn prune(&mut self) {
        let n = self.rects.len();
        let mut redundant = vec![false; n];

        for (i, a) in self.rects.iter().enumerate() {
            redundant[i] = self
                .rects
                .iter()
                .enumerate()
                .any(|(j, b)| i != j && b.contains(a) && (a != b || j < i));
        }

        // Compact survivors to the front, preserving order.
        let mut write = 0;
        for read in 0..n {
            if !redundant[read] {
                self.rects.swap(write, read);
                write += 1;
            }
        }
        self.rects.truncate(write);
    }
}

impl<'a> IntoIterator for &'a FreeSpace {
    type Item = &'a Rect;
    type IntoIter = std::slice::Iter<'a, Rect>;

    fn into_iter(self) -> Self::IntoIter {
        self.rects.iter()
    }
}
