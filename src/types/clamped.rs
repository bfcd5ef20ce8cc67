use core::fmt;

use crate::traits::{Details, Failure};
use crate::types::Category;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Synthetic failure reporting that the cap dropped some failures.
///
/// Appended as the last member of an aggregate whenever `dropped > 0` at
/// materialization time. It is recomputed from the counters on every
/// materialization, so repeated calls never accumulate notices.
///
/// # Examples
///
/// ```
/// use guard_rail::{Category, ClampedNotice, Failure};
///
/// let notice = ClampedNotice::new(2, 5);
/// assert_eq!(notice.category(), Category::Clamped);
/// assert_eq!(notice.to_string(), "validation: 5 additional errors omitted (kept 2)");
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClampedNotice {
    pub kept: usize,
    pub dropped: usize,
}

impl ClampedNotice {
    #[inline]
    pub const fn new(kept: usize, dropped: usize) -> Self {
        Self { kept, dropped }
    }
}

impl fmt::Display for ClampedNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation: {} additional errors omitted (kept {})", self.dropped, self.kept)
    }
}

impl core::error::Error for ClampedNotice {}

impl Failure for ClampedNotice {
    #[inline]
    fn category(&self) -> Category {
        Category::Clamped
    }

    #[inline]
    fn details(&self) -> Details<'_> {
        Details::Clamped(*self)
    }
}
