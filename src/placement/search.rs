//! Best-placement search over a bin's free rectangles.

use super::heuristic::Heuristic;
use super::score::Score;
use crate::geometry::{Item, Rect};

/// Best position found for an item within a set of free rectangles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Heuristic score; [`Score::NO_FIT`] when nothing fits.
    pub score: Score,
    /// Index of the chosen free rectangle, `None` when nothing fits.
    pub space: Option<usize>,
    /// Target left edge (the chosen rectangle's `x`).
    pub x: i64,
    /// Target top edge (the chosen rectangle's `y`).
    pub y: i64,
    /// Whether width and height must be swapped.
    pub rotated: bool,
}

impl Placement {
    /// The "no fit" result.
    pub fn none() -> Self {
        Self {
            score: Score::NO_FIT,
            space: None,
            x: 0,
            y: 0,
            rotated: false,
        }
    }

    pub fn fits(&self) -> bool {
        self.space.is_some()
    }
}

impl Default for Placement {
    fn default() -> Self {
        Self::none()
    }
}

/// Finds the lowest-scoring position for `item` among `free_rects`.
///
/// For every free rectangle the item's current orientation is tried first,
/// then, if the item may rotate and is not square, the swapped orientation.
/// Only a strictly lower score replaces the incumbent, so ties go to the
/// earliest candidate. The position is always the free rectangle's
/// top-left corner.
///
/// # Examples
///
/// ```
/// use u_rectpack::geometry::{Item, Rect};
/// use u_rectpack::placement::{find_best_placement, Heuristic};
///
/// let free = [Rect::new(0, 0, 100, 50)];
/// let item = Item::new(50, 100, false);
/// let placement = find_best_placement(&item, &free, Heuristic::BestShortSideFit);
///
/// assert!(placement.fits());
/// assert!(placement.rotated);
/// ```
pub fn find_best_placement(item: &Item, free_rects: &[Rect], heuristic: Heuristic) -> Placement {
    let mut best = Placement::none();
    let (w, h) = (item.width(), item.height());
    let try_rotated = item.can_rotate() && w != h;

    for (index, free) in free_rects.iter().enumerate() {
        if free.fits(w, h) {
            let score = heuristic.score(free, w, h);
            if score < best.score {
                best = Placement {
                    score,
                    space: Some(index),
                    x: free.x,
                    y: free.y,
                    rotated: false,
                };
            }
        }

        if try_rotated && free.fits(h, w) {
            let score = heuristic.score(free, h, w);
            if score < best.score {
                best = Placement {
                    score,
                    space: Some(index),
                    x: free.x,
                    y: free.y,
                    rotated: true,
                };
            }
        }
    }

    best
}
