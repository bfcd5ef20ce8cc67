//! Failure categories.
//!
//! Every failure carries exactly one [`Category`]. Category tests on an
//! aggregate compare variants, so two failures with different fields or
//! payloads still match the same category.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Closed set of failure kinds.
///
/// The first six variants are produced by field validators. [`Category::Clamped`]
/// belongs to the aggregation layer and signals that failures were dropped
/// because the configured cap was reached.
///
/// # Examples
///
/// ```
/// use guard_rail::Category;
///
/// assert!(Category::NonEmpty.is_validation());
/// assert!(!Category::Clamped.is_validation());
/// assert_eq!(Category::OutOfRange.to_string(), "out_of_range");
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    /// A required value was absent.
    NotNil,
    /// A value equal to its type's zero value where non-zero is required.
    NonZero,
    /// An empty (or blank) string where content is required.
    NonEmpty,
    /// A string or collection shorter than required.
    LenAtLeast,
    /// A value outside an inclusive range, or a non-finite float.
    OutOfRange,
    /// A value outside an allowed set.
    NotInSet,
    /// Failures were dropped once the cap was reached.
    #[cfg_attr(feature = "serde", serde(rename = "errors_clamped"))]
    Clamped,
}

impl Category {
    /// All categories in declaration order.
    pub const ALL: [Category; 7] = [
        Category::NotNil,
        Category::NonZero,
        Category::NonEmpty,
        Category::LenAtLeast,
        Category::OutOfRange,
        Category::NotInSet,
        Category::Clamped,
    ];

    /// Stable snake_case identifier.
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Category::NotNil => "not_nil",
            Category::NonZero => "non_zero",
            Category::NonEmpty => "non_empty",
            Category::LenAtLeast => "len_at_least",
            Category::OutOfRange => "out_of_range",
            Category::NotInSet => "not_in_set",
            Category::Clamped => "errors_clamped",
        }
    }

    /// Returns `true` for categories produced by field validators.
    #[inline]
    pub const fn is_validation(self) -> bool {
        !matches!(self, Category::Clamped)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
