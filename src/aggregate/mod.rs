//! Materialized, read-only views of a collector's state.
//!
//! Materialization yields `None` when nothing was kept, otherwise a
//! [`GuardError`]:
//!
//! | kept | dropped | result |
//! |---|---|---|
//! | 1 | 0 | [`GuardError::Single`], the failure itself |
//! | 1 | > 0 | aggregate of the failure and a [`ClampedNotice`] |
//! | >= 2 | any | aggregate of all kept failures, notice appended iff dropped > 0 |
//!
//! Both variants expose the same inspection protocols: ordered traversal
//! with early exit, category tests, and typed extraction.
//!
//! # Examples
//!
//! ```
//! use core::ops::ControlFlow;
//! use guard_rail::validators::non_empty;
//! use guard_rail::{ClampedNotice, Collector, GuardConfig};
//!
//! let mut guard = Collector::new(GuardConfig::keep(2));
//! for name in ["a", "b", "c", "d"] {
//!     guard.check(non_empty(name, ""));
//! }
//!
//! let err = guard.err().unwrap();
//! assert_eq!(err.len(), 3);
//! assert_eq!(err.extract::<ClampedNotice>(), Some(ClampedNotice::new(2, 2)));
//!
//! let mut seen = 0;
//! let _ = err.visit(|_| {
//!     seen += 1;
//!     if seen == 2 { ControlFlow::Break(()) } else { ControlFlow::Continue(()) }
//! });
//! assert_eq!(seen, 2);
//! ```

use core::fmt;
use core::ops::ControlFlow;

use crate::traits::{extract_from, Extract, Failure};
use crate::types::alloc_type::{Cow, Vec};
use crate::types::{Category, ClampedNotice};

mod member;
mod view;

pub use member::Member;
pub use view::{Aggregate, Members};

/// Result of materializing a collector that kept at least one failure.
#[derive(Debug, Clone, PartialEq)]
pub enum GuardError<'a, F: Clone> {
    /// Exactly one failure was kept and none dropped.
    Single(Cow<'a, F>),
    /// Several members, or one failure plus a [`ClampedNotice`].
    Aggregate(Aggregate<'a, F>),
}

/// Builds the view for `members` and the drop counter.
pub(crate) fn materialize<F: Clone>(
    members: Cow<'_, [F]>,
    dropped: usize,
) -> Option<GuardError<'_, F>> {
    let kept = members.len();
    if kept == 0 {
        return None;
    }
    if kept == 1 && dropped == 0 {
        let single = match members {
            Cow::Borrowed(slice) => Cow::Borrowed(slice.first()?),
            Cow::Owned(mut owned) => Cow::Owned(owned.pop()?),
        };
        return Some(GuardError::Single(single));
    }
    let clamped = (dropped > 0).then(|| ClampedNotice::new(kept, dropped));
    Some(GuardError::Aggregate(Aggregate { members, clamped }))
}

impl<'a, F: Clone> GuardError<'a, F> {
    /// Number of members, counting a notice.
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            GuardError::Single(_) => 1,
            GuardError::Aggregate(aggregate) => aggregate.len(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Kept failures in arrival order, without the notice.
    #[inline]
    pub fn failures(&self) -> &[F] {
        match self {
            GuardError::Single(failure) => core::slice::from_ref(&**failure),
            GuardError::Aggregate(aggregate) => aggregate.failures(),
        }
    }

    /// The failure itself when this is [`GuardError::Single`].
    #[inline]
    pub fn as_single(&self) -> Option<&F> {
        match self {
            GuardError::Single(failure) => Some(&**failure),
            GuardError::Aggregate(_) => None,
        }
    }

    #[inline]
    pub fn as_aggregate(&self) -> Option<&Aggregate<'a, F>> {
        match self {
            GuardError::Single(_) => None,
            GuardError::Aggregate(aggregate) => Some(aggregate),
        }
    }

    /// Drop accounting, present only when the cap discarded failures.
    #[inline]
    pub fn clamped(&self) -> Option<ClampedNotice> {
        match self {
            GuardError::Single(_) => None,
            GuardError::Aggregate(aggregate) => aggregate.clamped(),
        }
    }

    /// Members in order: kept failures, then the notice if any.
    #[inline]
    pub fn iter(&self) -> Members<'_, F> {
        match self {
            GuardError::Single(failure) => {
                Members::new(core::slice::from_ref(&**failure), None)
            },
            GuardError::Aggregate(aggregate) => aggregate.iter(),
        }
    }

    /// Visits members in order until `visitor` breaks; nothing after the
    /// breaking member is visited.
    #[inline]
    pub fn visit<B, V>(&self, visitor: V) -> ControlFlow<B>
    where
        V: FnMut(Member<'_, F>) -> ControlFlow<B>,
    {
        self.iter().try_for_each(visitor)
    }

    /// Flat list of members for interop. Not used by [`GuardError::is`] or
    /// [`GuardError::extract`].
    #[inline]
    pub fn flatten(&self) -> Vec<Member<'_, F>> {
        self.iter().collect()
    }

    /// Detaches the value from any collector storage it borrows.
    pub fn into_owned<'b>(self) -> GuardError<'b, F> {
        match self {
            GuardError::Single(failure) => GuardError::Single(Cow::Owned(failure.into_owned())),
            GuardError::Aggregate(aggregate) => GuardError::Aggregate(aggregate.into_owned()),
        }
    }
}

impl<F: Failure + Clone> GuardError<'_, F> {
    /// Returns `true` if any member, the notice included, has `category`
    /// directly or through its cause chain.
    #[inline]
    pub fn is(&self, category: Category) -> bool {
        self.iter().any(|member| member.is(category))
    }

    /// First member payload of shape `T`, in traversal order.
    #[inline]
    pub fn extract<'s, T: Extract<'s>>(&'s self) -> Option<T> {
        self.iter().find_map(|member| extract_from(member.as_dyn()))
    }
}

impl<F: fmt::Display + Clone> fmt::Display for GuardError<'_, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuardError::Single(failure) => fmt::Display::fmt(&**failure, f),
            GuardError::Aggregate(aggregate) => fmt::Display::fmt(aggregate, f),
        }
    }
}

impl<F: Failure + Clone> core::error::Error for GuardError<'_, F> {}

impl<'s, F: Clone> IntoIterator for &'s GuardError<'_, F> {
    type Item = Member<'s, F>;
    type IntoIter = Members<'s, F>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, F: Clone> From<Aggregate<'a, F>> for GuardError<'a, F> {
    #[inline]
    fn from(aggregate: Aggregate<'a, F>) -> Self {
        GuardError::Aggregate(aggregate)
    }
}
