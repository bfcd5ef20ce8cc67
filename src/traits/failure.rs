//! The failure-signal contract shared by validators and the aggregate.

use core::fmt::{Debug, Display};

use crate::types::{Bound, Category, ClampedNotice};

/// Structured payload attached to a failure.
///
/// Everything a consumer may want to branch on besides the category. The
/// payload never affects category matching.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Details<'a> {
    /// No payload beyond the category and field name.
    None,
    /// Length requirement: wanted at least `want`, observed `got`.
    Length { want: usize, got: usize },
    /// Inclusive range requirement with the offending value.
    Range { min: &'a Bound, max: &'a Bound, got: &'a Bound },
    /// Aggregation-level drop accounting.
    Clamped(ClampedNotice),
}

/// One recorded rule violation.
///
/// Implementors render themselves through [`Display`], belong to exactly one
/// [`Category`], and may expose a field name, a structured payload, and a
/// `cause` link. Category tests and typed extraction follow the `cause`
/// chain, so a wrapper failure matches both its own category and every
/// category further down.
///
/// # Examples
///
/// ```
/// use core::fmt;
/// use guard_rail::{Category, Failure, FieldError};
///
/// #[derive(Debug)]
/// struct InSection {
///     section: &'static str,
///     inner: FieldError,
/// }
///
/// impl fmt::Display for InSection {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "[{}] {}", self.section, self.inner)
///     }
/// }
///
/// impl Failure for InSection {
///     fn category(&self) -> Category {
///         self.inner.category()
///     }
///
///     fn cause(&self) -> Option<&dyn Failure> {
///         Some(&self.inner)
///     }
/// }
///
/// let err = InSection { section: "server", inner: FieldError::non_zero("port") };
/// assert!(err.is(Category::NonZero));
/// assert_eq!(err.to_string(), "[server] port: must be non-zero");
/// ```
pub trait Failure: Display + Debug {
    /// The single category this failure belongs to.
    fn category(&self) -> Category;

    /// Logical field name, when the failure concerns one field.
    #[inline]
    fn field(&self) -> Option<&str> {
        None
    }

    #[inline]
    fn details(&self) -> Details<'_> {
        Details::None
    }

    /// Next link in the chain, consulted by [`Failure::is`] and extraction.
    #[inline]
    fn cause(&self) -> Option<&dyn Failure> {
        None
    }

    /// Returns `true` if this failure or anything in its cause chain has
    /// `category`.
    fn is(&self, category: Category) -> bool {
        self.category() == category || self.cause().is_some_and(|cause| cause.is(category))
    }
}

impl<T: Failure + ?Sized> Failure for &T {
    #[inline]
    fn category(&self) -> Category {
        (**self).category()
    }

    #[inline]
    fn field(&self) -> Option<&str> {
        (**self).field()
    }

    #[inline]
    fn details(&self) -> Details<'_> {
        (**self).details()
    }

    #[inline]
    fn cause(&self) -> Option<&dyn Failure> {
        (**self).cause()
    }

    #[inline]
    fn is(&self, category: Category) -> bool {
        (**self).is(category)
    }
}
