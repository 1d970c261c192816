//! Packing options.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Options for a single [`Packer::pack`](super::Packer::pack) call.
///
/// # Examples
///
/// ```
/// use u_rectpack::packer::PackOptions;
///
/// assert_eq!(PackOptions::default().cap(), None);
/// assert_eq!(PackOptions::default().with_limit(3).cap(), Some(3));
/// assert_eq!(PackOptions::default().with_limit(-1).cap(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PackOptions {
    /// Maximum number of items to pack in this call.
    ///
    /// Zero or negative means no limit.
    pub limit: i64,
}

impl PackOptions {
    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = limit;
        self
    }

    /// The effective cap, `None` when unlimited.
    pub fn cap(&self) -> Option<usize> {
        if self.limit > 0 {
            usize::try_from(self.limit).ok()
        } else {
            None
        }
    }
}
