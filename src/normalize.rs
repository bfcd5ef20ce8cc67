//! Value normalization helpers.
//!
//! Companions to the validators: instead of reporting a bad value they
//! replace it with a default or pull it into range. None of them records
//! anything.
//!
//! # Examples
//!
//! ```
//! use core::time::Duration;
//! use guard_rail::normalize::{clamp, default_if, set_if_zero_then_clamp};
//!
//! let mut workers = 0;
//! set_if_zero_then_clamp(&mut workers, 4, 1, 16);
//! assert_eq!(workers, 4);
//!
//! let mut timeout = Duration::from_secs(90);
//! clamp(&mut timeout, Duration::from_secs(1), Duration::from_secs(30));
//! assert_eq!(timeout, Duration::from_secs(30));
//!
//! assert_eq!(default_if("", "localhost"), "localhost");
//! ```

#[inline]
fn ordered<T: PartialOrd>(min: T, max: T) -> (T, T) {
    if min > max {
        (max, min)
    } else {
        (min, max)
    }
}

/// Replaces `*slot` with `default` when it equals `T::default()`.
#[inline]
pub fn set_if_zero<T: Default + PartialEq>(slot: &mut T, default: T) {
    if *slot == T::default() {
        *slot = default;
    }
}

/// Returns `default` when `value` equals `T::default()`.
#[inline]
pub fn default_if<T: Default + PartialEq>(value: T, default: T) -> T {
    if value == T::default() {
        default
    } else {
        value
    }
}

#[inline]
pub fn set_if_lt<T: PartialOrd>(slot: &mut T, limit: T, default: T) {
    if *slot < limit {
        *slot = default;
    }
}

#[inline]
pub fn set_if_le<T: PartialOrd>(slot: &mut T, limit: T, default: T) {
    if *slot <= limit {
        *slot = default;
    }
}

#[inline]
pub fn set_if_gt<T: PartialOrd>(slot: &mut T, limit: T, default: T) {
    if *slot > limit {
        *slot = default;
    }
}

#[inline]
pub fn set_if_ge<T: PartialOrd>(slot: &mut T, limit: T, default: T) {
    if *slot >= limit {
        *slot = default;
    }
}

/// Pulls `*slot` into `[min, max]`; reversed bounds are swapped first.
pub fn clamp<T: PartialOrd>(slot: &mut T, min: T, max: T) {
    let (min, max) = ordered(min, max);
    if *slot < min {
        *slot = min;
    } else if *slot > max {
        *slot = max;
    }
}

/// Applies [`set_if_zero`], then [`clamp`].
pub fn set_if_zero_then_clamp<T>(slot: &mut T, default: T, min: T, max: T)
where
    T: Default + PartialOrd,
{
    set_if_zero(slot, default);
    clamp(slot, min, max);
}

/// Value form of [`set_if_zero_then_clamp`].
pub fn default_if_clamp<T>(value: T, default: T, min: T, max: T) -> T
where
    T: Default + PartialOrd,
{
    let mut value = value;
    set_if_zero_then_clamp(&mut value, default, min, max);
    value
}

/// Inclusive range test; reversed bounds are swapped first.
#[inline]
pub fn in_range<T: PartialOrd>(value: &T, min: &T, max: &T) -> bool {
    let (min, max) = ordered(min, max);
    value >= min && value <= max
}

/// Returns `default` when `value` is empty or whitespace only.
#[inline]
pub fn default_if_blank<'a>(value: &'a str, default: &'a str) -> &'a str {
    if value.trim().is_empty() {
        default
    } else {
        value
    }
}

#[inline]
pub fn zero_if_nan(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value
    }
}

#[inline]
pub fn default_if_nan(value: f64, default: f64) -> f64 {
    if value.is_nan() {
        default
    } else {
        value
    }
}

/// Replaces NaN and infinities with `default`.
#[inline]
pub fn clamp_finite(slot: &mut f64, default: f64) {
    if !slot.is_finite() {
        *slot = default;
    }
}
