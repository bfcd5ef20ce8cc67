//! Stateless field validators.
//!
//! Each validator returns `Ok(())` or a [`FieldError`] naming the field, so
//! results feed straight into [`Collector::check`](crate::Collector::check)
//! or a lazy check.
//!
//! # Examples
//!
//! ```
//! use guard_rail::validators::{in_range_num, in_set, non_blank};
//! use guard_rail::{Category, Failure};
//!
//! assert!(in_range_num("workers", 4, 1, 8).is_ok());
//! assert!(in_set("mode", &"fast", &["fast", "safe"]).is_ok());
//!
//! let err = non_blank("name", "   ").unwrap_err();
//! assert_eq!(err.category(), Category::NonEmpty);
//! ```

use core::time::Duration;

use crate::types::{Bound, FieldError};

/// Fails with `NotNil` when `value` is absent.
#[inline]
pub fn not_nil<T>(name: &str, value: Option<&T>) -> Result<(), FieldError> {
    match value {
        Some(_) => Ok(()),
        None => Err(FieldError::not_nil(name)),
    }
}

/// Fails with `NonZero` when `value` equals `T::default()`.
#[inline]
pub fn non_zero<T: Default + PartialEq>(name: &str, value: T) -> Result<(), FieldError> {
    if value == T::default() {
        return Err(FieldError::non_zero(name));
    }
    Ok(())
}

#[inline]
pub fn non_empty(name: &str, value: &str) -> Result<(), FieldError> {
    if value.is_empty() {
        return Err(FieldError::non_empty(name));
    }
    Ok(())
}

/// Like [`non_empty`], but whitespace-only strings fail too.
#[inline]
pub fn non_blank(name: &str, value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        return Err(FieldError::non_empty(name));
    }
    Ok(())
}

/// Length check for any collection whose length is already known.
#[inline]
pub fn len_at_least(name: &str, len: usize, want: usize) -> Result<(), FieldError> {
    if len < want {
        return Err(FieldError::len_at_least(name, want, len));
    }
    Ok(())
}

/// Byte length of `value` must be at least `want`.
#[inline]
pub fn str_len_at_least(name: &str, value: &str, want: usize) -> Result<(), FieldError> {
    len_at_least(name, value.len(), want)
}

#[inline]
pub fn slice_len_at_least<T>(name: &str, value: &[T], want: usize) -> Result<(), FieldError> {
    len_at_least(name, value.len(), want)
}

/// Collections that can answer membership queries.
pub trait Membership<T: ?Sized> {
    fn has(&self, value: &T) -> bool;
}

impl<T: PartialEq> Membership<T> for [T] {
    #[inline]
    fn has(&self, value: &T) -> bool {
        self.contains(value)
    }
}

impl<T: PartialEq, const N: usize> Membership<T> for [T; N] {
    #[inline]
    fn has(&self, value: &T) -> bool {
        self.contains(value)
    }
}

impl<T: Ord> Membership<T> for alloc::collections::BTreeSet<T> {
    #[inline]
    fn has(&self, value: &T) -> bool {
        self.contains(value)
    }
}

#[cfg(feature = "std")]
impl<T, S> Membership<T> for std::collections::HashSet<T, S>
where
    T: Eq + core::hash::Hash,
    S: core::hash::BuildHasher,
{
    #[inline]
    fn has(&self, value: &T) -> bool {
        self.contains(value)
    }
}

/// Fails with `NotInSet` when `value` is not in `allowed`.
#[inline]
pub fn in_set<T, S>(name: &str, value: &T, allowed: &S) -> Result<(), FieldError>
where
    S: Membership<T> + ?Sized,
{
    if allowed.has(value) {
        return Ok(());
    }
    Err(FieldError::not_in_set(name))
}

/// Inclusive range check; reversed bounds are swapped first.
pub fn in_range_num<T>(name: &str, value: T, min: T, max: T) -> Result<(), FieldError>
where
    T: PartialOrd + Into<Bound>,
{
    let (min, max) = if min > max { (max, min) } else { (min, max) };
    if value < min || value > max {
        return Err(FieldError::out_of_range(name, min, max, value));
    }
    Ok(())
}

/// Lexicographic inclusive range check; reversed bounds are swapped first.
pub fn in_range_str(name: &str, value: &str, min: &str, max: &str) -> Result<(), FieldError> {
    in_range_num(name, value, min, max)
}

/// Inclusive range check that also rejects NaN and infinities.
///
/// Bounds are taken as given, not swapped.
pub fn in_range_f64(name: &str, value: f64, min: f64, max: f64) -> Result<(), FieldError> {
    if !value.is_finite() || value < min || value > max {
        return Err(FieldError::out_of_range(name, min, max, value));
    }
    Ok(())
}

/// Rejects NaN and infinities; the failure reports `value` as both bounds.
pub fn finite_f64(name: &str, value: f64) -> Result<(), FieldError> {
    if !value.is_finite() {
        return Err(FieldError::out_of_range(name, value, value, value));
    }
    Ok(())
}

#[inline]
pub fn in_range_duration(
    name: &str,
    value: Duration,
    min: Duration,
    max: Duration,
) -> Result<(), FieldError> {
    in_range_num(name, value, min, max)
}
