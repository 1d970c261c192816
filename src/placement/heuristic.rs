//! Placement heuristics.

use super::score::Score;
use crate::error::PackError;
use crate::geometry::Rect;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Scoring rule used to rank candidate free rectangles.
///
/// Every rule is a pure function of the free rectangle and the candidate
/// item dimensions. Lower scores win.
///
/// # Examples
///
/// ```
/// use u_rectpack::geometry::Rect;
/// use u_rectpack::placement::Heuristic;
///
/// let free = Rect::new(0, 0, 100, 50);
/// assert_eq!(Heuristic::BestShortSideFit.score(&free, 50, 50).value(), 50);
/// assert_eq!("baf".parse::<Heuristic>(), Ok(Heuristic::BestAreaFit));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Heuristic {
    /// `(free_area - item_area) + min(|fw - w|, |fh - h|)`.
    ///
    /// Minimizes wasted area; the added term favours a snug edge among
    /// rectangles that waste the same area.
    BestAreaFit,

    /// `|fw - w| + |fh - h|`.
    ///
    /// Sum of both leftover gaps. Note that the usual literature definition
    /// compares the shorter gap first and the longer gap as a tie-break;
    /// this single-scalar form is what is implemented.
    #[default]
    BestShortSideFit,

    /// `max(|fw - w|, |fh - h|)`.
    ///
    /// Only the larger leftover gap; there is no short-side tie-break term.
    BestLongSideFit,

    /// `free.y + free.x + h`.
    ///
    /// Favours free rectangles nearer the top-left origin, then shorter
    /// orientations.
    BottomLeft,
}

impl Heuristic {
    /// All heuristics, in declaration order.
    pub const ALL: [Heuristic; 4] = [
        Heuristic::BestAreaFit,
        Heuristic::BestShortSideFit,
        Heuristic::BestLongSideFit,
        Heuristic::BottomLeft,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Heuristic::BestAreaFit => "best-area-fit",
            Heuristic::BestShortSideFit => "best-short-side-fit",
            Heuristic::BestLongSideFit => "best-long-side-fit",
            Heuristic::BottomLeft => "bottom-left",
        }
    }

    /// Scores a `width` x `height` item placed in `free`.
    ///
    /// The caller is responsible for checking that the item fits; the
    /// score of a non-fitting candidate is meaningless.
    pub fn score(&self, free: &Rect, width: i64, height: i64) -> Score {
        let gap_x = free.width.saturating_sub(width).saturating_abs();
        let gap_y = free.height.saturating_sub(height).saturating_abs();

        let value = match self {
            Heuristic::BestAreaFit => free
                .area()
                .saturating_sub(width.saturating_mul(height))
                .saturating_add(gap_x.min(gap_y)),
            Heuristic::BestShortSideFit => gap_x.saturating_add(gap_y),
            Heuristic::BestLongSideFit => gap_x.max(gap_y),
            Heuristic::BottomLeft => free.y.saturating_add(free.x).saturating_add(height),
        };

        Score::new(value)
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Heuristic {
    type Err = PackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "best-area-fit" | "baf" => Ok(Heuristic::BestAreaFit),
            "best-short-side-fit" | "bssf" => Ok(Heuristic::BestShortSideFit),
            "best-long-side-fit" | "blsf" => Ok(Heuristic::BestLongSideFit),
            "bottom-left" | "bl" => Ok(Heuristic::BottomLeft),
            _ => Err(PackError::UnknownHeuristic(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_short_side() {
        assert_eq!(Heuristic::default(), Heuristic::BestShortSideFit);
    }

    #[test]
    fn test_best_area_fit() {
        let free = Rect::new(0, 0, 100, 50);
        // waste = 5000 - 2500, snug edge = min(50, 0)
        assert_eq!(Heuristic::BestAreaFit.score(&free, 50, 50).value(), 2500);
        // waste = 5000 - 400, snug edge = min(90, 10)
        assert_eq!(Heuristic::BestAreaFit.score(&free, 10, 40).value(), 4610);
    }

    #[test]
    fn test_best_short_side_fit_sums_gaps() {
        let free = Rect::new(0, 0, 100, 50);
        assert_eq!(Heuristic::BestShortSideFit.score(&free, 50, 44).value(), 56);
        assert_eq!(Heuristic::BestShortSideFit.score(&free, 44, 50).value(), 56);
        assert_eq!(Heuristic::BestShortSideFit.score(&free, 100, 50).value(), 0);
    }

    #[test]
    fn test_best_long_side_fit_takes_larger_gap() {
        let free = Rect::new(0, 0, 100, 50);
        assert_eq!(Heuristic::BestLongSideFit.score(&free, 50, 44).value(), 50);
        assert_eq!(Heuristic::BestLongSideFit.score(&free, 95, 10).value(), 40);
    }

    #[test]
    fn test_bottom_left_uses_position_and_height() {
        let free = Rect::new(30, 20, 100, 50);
        assert_eq!(Heuristic::BottomLeft.score(&free, 10, 40).value(), 90);
        assert_eq!(Heuristic::BottomLeft.score(&free, 40, 10).value(), 60);
    }

    #[test]
    fn test_scores_saturate_below_sentinel() {
        let huge = Rect::new(0, 0, i64::MAX, i64::MAX);
        for h in Heuristic::ALL {
            assert!(h.score(&huge, 1, 1).fits(), "{h} produced the sentinel");
        }
    }

    #[test]
    fn test_parse_names() {
        for h in Heuristic::ALL {
            assert_eq!(h.name().parse::<Heuristic>(), Ok(h));
        }
        assert_eq!(" BSSF ".parse::<Heuristic>(), Ok(Heuristic::BestShortSideFit));
        assert_eq!("blsf".parse::<Heuristic>(), Ok(Heuristic::BestLongSideFit));
        assert_eq!("bl".parse::<Heuristic>(), Ok(Heuristic::BottomLeft));
        assert_eq!(
            "top-right".parse::<Heuristic>(),
            Err(PackError::UnknownHeuristic("top-right".into()))
        );
    }
}
