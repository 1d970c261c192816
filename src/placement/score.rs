//! Placement score.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Quality of a candidate placement. Lower is better.
///
/// Scores produced by [`Score::new`] are clamped strictly below
/// [`Score::NO_FIT`], so a real placement can never be mistaken for the
/// sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Score(i64);

impl Score {
    /// "Does not fit / not evaluated."
    pub const NO_FIT: Score = Score(i64::MAX);

    pub fn new(value: i64) -> Self {
        Score(value.min(i64::MAX - 1))
    }

    pub fn value(self) -> i64 {
        self.0
    }

    /// Whether this score describes an actual placement.
    pub fn fits(self) -> bool {
        self != Self::NO_FIT
    }
}

impl Default for Score {
    fn default() -> Self {
        Self::NO_FIT
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.fits() {
            write!(f, "{}", self.0)
        } else {
            f.write_str("no-fit")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering() {
        assert!(Score::new(3) < Score::new(5));
        assert!(Score::new(-10) < Score::new(0));
        assert!(Score::new(i64::MAX - 5) < Score::NO_FIT);
    }

    #[test]
    fn test_new_never_produces_sentinel() {
        let s = Score::new(i64::MAX);
        assert!(s.fits());
        assert!(s < Score::NO_FIT);
    }

    #[test]
    fn test_default_is_no_fit() {
        assert!(!Score::default().fits());
        assert_eq!(Score::default().to_string(), "no-fit");
        assert_eq!(Score::new(42).to_string(), "42");
    }
}
