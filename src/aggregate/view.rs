use core::fmt;
use core::iter::FusedIterator;
use core::ops::ControlFlow;

use crate::aggregate::Member;
use crate::traits::{extract_from, Extract, Failure};
use crate::types::alloc_type::{Cow, Vec};
use crate::types::{Category, ClampedNotice};

/// Composite of kept failures plus an optional trailing [`ClampedNotice`].
///
/// Produced by materialization whenever more than one member has to be
/// reported. Members are either borrowed from an unsynchronized collector
/// or owned (synchronized mode, consuming materialization, or compaction).
/// Which one is never observable through the inspection API.
///
/// Rendering is terse (`"multiple errors"`); iterate the members or use
/// [`GuardError::report`](crate::GuardError::report) for full detail.
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregate<'a, F: Clone> {
    pub(crate) members: Cow<'a, [F]>,
    pub(crate) clamped: Option<ClampedNotice>,
}

impl<'a, F: Clone> Aggregate<'a, F> {
    /// Number of members, counting the notice.
    #[inline]
    pub fn len(&self) -> usize {
        self.members.len() + usize::from(self.clamped.is_some())
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Kept failures in arrival order, without the notice.
    #[inline]
    pub fn failures(&self) -> &[F] {
        &self.members
    }

    #[inline]
    pub fn clamped(&self) -> Option<ClampedNotice> {
        self.clamped
    }

    /// Members in order: kept failures, then the notice if any.
    #[inline]
    pub fn iter(&self) -> Members<'_, F> {
        Members::new(&self.members, self.clamped.as_ref())
    }

    /// Visits members in order until `visitor` breaks.
    ///
    /// No member after the one that returned [`ControlFlow::Break`] is
    /// visited.
    #[inline]
    pub fn visit<B, V>(&self, visitor: V) -> ControlFlow<B>
    where
        V: FnMut(Member<'_, F>) -> ControlFlow<B>,
    {
        self.iter().try_for_each(visitor)
    }

    /// Copies the members out into a plain list, for consumers that expect
    /// a flat sequence. Category tests and extraction never go through it.
    #[inline]
    pub fn flatten(&self) -> Vec<Member<'_, F>> {
        self.iter().collect()
    }

    /// Detaches the view from any collector storage it borrows.
    #[inline]
    pub fn into_owned<'b>(self) -> Aggregate<'b, F> {
        Aggregate { members: Cow::Owned(self.members.into_owned()), clamped: self.clamped }
    }
}

impl<F: Failure + Clone> Aggregate<'_, F> {
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

impl<F: Clone> fmt::Display for Aggregate<'_, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("multiple errors")
    }
}

impl<F: Failure + Clone> core::error::Error for Aggregate<'_, F> {}

impl<'s, F: Clone> IntoIterator for &'s Aggregate<'_, F> {
    type Item = Member<'s, F>;
    type IntoIter = Members<'s, F>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Ordered iterator over the members of a view.
#[derive(Debug)]
pub struct Members<'a, F> {
    failures: core::slice::Iter<'a, F>,
    clamped: Option<&'a ClampedNotice>,
}

impl<'a, F> Members<'a, F> {
    #[inline]
    pub(crate) fn new(failures: &'a [F], clamped: Option<&'a ClampedNotice>) -> Self {
        Self { failures: failures.iter(), clamped }
    }
}

impl<F> Clone for Members<'_, F> {
    fn clone(&self) -> Self {
        Self { failures: self.failures.clone(), clamped: self.clamped }
    }
}

impl<'a, F> Iterator for Members<'a, F> {
    type Item = Member<'a, F>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        match self.failures.next() {
            Some(failure) => Some(Member::Failure(failure)),
            None => self.clamped.take().map(Member::Clamped),
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.failures.len() + usize::from(self.clamped.is_some());
        (len, Some(len))
    }
}

impl<F> ExactSizeIterator for Members<'_, F> {}

impl<F> FusedIterator for Members<'_, F> {}
