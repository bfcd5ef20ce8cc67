//! Failure values and storage types.
//!
//! # Examples
//!
//! ```
//! use guard_rail::types::{Category, FieldError, RenderMode};
//! use guard_rail::Failure;
//!
//! let err = FieldError::out_of_range("timeout", 1, 5, 0);
//! assert_eq!(err.category(), Category::OutOfRange);
//! assert_eq!(err.render(RenderMode::Verbose).to_string(), "timeout: must be in [1,5] (got 0)");
//! ```
use smallvec::SmallVec;

pub mod alloc_type;
pub mod bound;
pub mod category;
pub mod clamped;
pub mod field_error;

pub use bound::Bound;
pub use category::Category;
pub use clamped::ClampedNotice;
pub use field_error::{FieldError, RenderMode, Rendered};

/// Number of failures a collector stores without touching the heap.
pub const INLINE_FAILURES: usize = 4;

/// SmallVec-backed storage for kept failures.
///
/// The first [`INLINE_FAILURES`] entries live inline; the common
/// first-error and few-errors cases never allocate for storage.
pub type FailureVec<F> = SmallVec<[F; INLINE_FAILURES]>;
