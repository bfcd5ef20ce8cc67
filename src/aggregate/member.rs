use core::fmt;

use crate::traits::{Details, Failure};
use crate::types::{Category, ClampedNotice};

/// One member of a materialized view: a kept failure or the trailing
/// [`ClampedNotice`].
#[derive(Debug)]
pub enum Member<'a, F> {
    Failure(&'a F),
    Clamped(&'a ClampedNotice),
}

impl<F> Clone for Member<'_, F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F> Copy for Member<'_, F> {}

impl<'a, F: Failure> Member<'a, F> {
    /// The member as a trait object, for extraction and chain walking.
    #[inline]
    pub fn as_dyn(self) -> &'a dyn Failure {
        match self {
            Member::Failure(failure) => failure,
            Member::Clamped(notice) => notice,
        }
    }
}

impl<F> Member<'_, F> {
    /// Returns the kept failure, or `None` for the notice.
    #[inline]
    pub fn failure(&self) -> Option<&F> {
        match *self {
            Member::Failure(failure) => Some(failure),
            Member::Clamped(_) => None,
        }
    }

    #[inline]
    pub fn is_clamped(&self) -> bool {
        matches!(self, Member::Clamped(_))
    }
}

impl<F: fmt::Display> fmt::Display for Member<'_, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Member::Failure(failure) => fmt::Display::fmt(failure, f),
            Member::Clamped(notice) => fmt::Display::fmt(notice, f),
        }
    }
}

impl<F: Failure> Failure for Member<'_, F> {
    fn category(&self) -> Category {
        match self {
            Member::Failure(failure) => failure.category(),
            Member::Clamped(notice) => notice.category(),
        }
    }

    fn field(&self) -> Option<&str> {
        match self {
            Member::Failure(failure) => failure.field(),
            Member::Clamped(_) => None,
        }
    }

    fn details(&self) -> Details<'_> {
        match self {
            Member::Failure(failure) => failure.details(),
            Member::Clamped(notice) => notice.details(),
        }
    }

    fn cause(&self) -> Option<&dyn Failure> {
        match self {
            Member::Failure(failure) => failure.cause(),
            Member::Clamped(_) => None,
        }
    }

    fn is(&self, category: Category) -> bool {
        match self {
            Member::Failure(failure) => failure.is(category),
            Member::Clamped(notice) => notice.is(category),
        }
    }
}
