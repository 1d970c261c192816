//! Error types for u-rectpack.
//!
//! The packing core itself never fails: "does not fit" is reported through
//! [`Score::NO_FIT`](crate::placement::Score::NO_FIT) and boolean results.
//! Errors are reserved for construction-time validation.

use thiserror::Error;

/// Result type alias for u-rectpack operations.
pub type Result<T> = std::result::Result<T, PackError>;

/// Errors raised while building packing inputs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PackError {
    /// An item was given a non-positive width or height.
    #[error("Invalid dimensions: {width}x{height} (both sides must be positive)")]
    InvalidDimensions {
        /// Offending width.
        width: i64,
        /// Offending height.
        height: i64,
    },

    /// A heuristic name did not match any known placement heuristic.
    #[error("Unknown placement heuristic: {0}")]
    UnknownHeuristic(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = PackError::InvalidDimensions {
            width: 0,
            height: 10,
        };
        assert_eq!(
            err.to_string(),
            "Invalid dimensions: 0x10 (both sides must be positive)"
        );

        let err = PackError::UnknownHeuristic("top-right".into());
        assert_eq!(err.to_string(), "Unknown placement heuristic: top-right");
    }
}
