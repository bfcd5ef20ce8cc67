//! Typed extraction of failure payloads.

use crate::traits::{Details, Failure};
use crate::types::{Bound, ClampedNotice};

/// A shape that can be pulled out of a failure.
///
/// Extraction is a pattern match over [`Failure::details`] (and
/// [`Failure::field`]). [`extract_from`] walks the cause chain and returns
/// the first match.
///
/// # Examples
///
/// ```
/// use guard_rail::{extract_from, FieldError, RangeDetails};
///
/// let err = FieldError::out_of_range("port", 1, 10, 0);
/// let range: RangeDetails<'_> = extract_from(&err).unwrap();
/// assert_eq!(range.field, "port");
/// assert_eq!(range.min.as_i64(), Some(1));
/// ```
pub trait Extract<'a>: Sized {
    /// Attempts extraction from this failure alone, ignoring its causes.
    fn from_failure(failure: &'a dyn Failure) -> Option<Self>;
}

/// Extracts `T` from `failure` or the first link of its cause chain that
/// matches.
pub fn extract_from<'a, T: Extract<'a>>(failure: &'a dyn Failure) -> Option<T> {
    let mut current = Some(failure);
    while let Some(link) = current {
        if let Some(found) = T::from_failure(link) {
            return Some(found);
        }
        current = link.cause();
    }
    None
}

/// Name of the field a failure concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldName<'a>(pub &'a str);

/// Length requirement of a `LenAtLeast` failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthDetails<'a> {
    pub field: &'a str,
    pub want: usize,
    pub got: usize,
}

/// Bounds and offending value of an `OutOfRange` failure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeDetails<'a> {
    pub field: &'a str,
    pub min: &'a Bound,
    pub max: &'a Bound,
    pub got: &'a Bound,
}

impl<'a> Extract<'a> for FieldName<'a> {
    #[inline]
    fn from_failure(failure: &'a dyn Failure) -> Option<Self> {
        failure.field().map(FieldName)
    }
}

impl<'a> Extract<'a> for LengthDetails<'a> {
    fn from_failure(failure: &'a dyn Failure) -> Option<Self> {
        match failure.details() {
            Details::Length { want, got } => {
                Some(LengthDetails { field: failure.field().unwrap_or_default(), want, got })
            },
            _ => None,
        }
    }
}

impl<'a> Extract<'a> for RangeDetails<'a> {
    fn from_failure(failure: &'a dyn Failure) -> Option<Self> {
        match failure.details() {
            Details::Range { min, max, got } => {
                Some(RangeDetails { field: failure.field().unwrap_or_default(), min, max, got })
            },
            _ => None,
        }
    }
}

impl<'a> Extract<'a> for ClampedNotice {
    #[inline]
    fn from_failure(failure: &'a dyn Failure) -> Option<Self> {
        match failure.details() {
            Details::Clamped(notice) => Some(notice),
            _ => None,
        }
    }
}
