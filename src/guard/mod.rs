//! Bounded accumulators and their configuration.
//!
//! - [`Collector`]: unsynchronized core for single-owner use
//! - [`SyncCollector`]: the same core behind a mutex (requires `std`)
//! - [`Guard`]: picks one of the two once, from [`GuardConfig::thread_safe`]
//!
//! # Examples
//!
//! ```
//! use guard_rail::validators::{non_empty, non_zero};
//! use guard_rail::{Category, Guard, GuardConfig, Recorder};
//!
//! let mut guard = Guard::new(GuardConfig::default());
//! guard.check(non_empty("env", ""));
//! guard.check(non_zero("port", 0));
//!
//! let err = guard.err().unwrap();
//! assert!(err.is(Category::NonEmpty));
//! assert!(!err.is(Category::NonZero));
//! ```

mod collector;
mod config;
mod stats;
#[cfg(feature = "std")]
mod sync;

pub use collector::Collector;
pub use config::{GuardConfig, DEFAULT_COMPACTION_RATIO};
pub use stats::Stats;
#[cfg(feature = "std")]
pub use sync::SyncCollector;

use crate::aggregate::GuardError;
use crate::traits::{Failure, Recorder};

/// Accumulator whose locking strategy is chosen at construction.
///
/// Without the `std` feature there is no mutex and `thread_safe` is
/// ignored.
#[derive(Debug)]
pub enum Guard<F> {
    Local(Collector<F>),
    #[cfg(feature = "std")]
    Shared(SyncCollector<F>),
}

macro_rules! dispatch {
    ($self:expr, $inner:ident => $body:expr) => {
        match $self {
            Guard::Local($inner) => $body,
            #[cfg(feature = "std")]
            Guard::Shared($inner) => $body,
        }
    };
}

impl<F> Guard<F> {
    pub fn new(config: GuardConfig) -> Self {
        #[cfg(feature = "std")]
        if config.thread_safe {
            return Guard::Shared(SyncCollector::new(config));
        }
        Guard::Local(Collector::new(config))
    }

    #[inline]
    pub fn is_thread_safe(&self) -> bool {
        !matches!(self, Guard::Local(_))
    }

    /// The synchronized collector, for sharing across threads.
    #[cfg(feature = "std")]
    #[inline]
    pub fn as_shared(&self) -> Option<&SyncCollector<F>> {
        match self {
            Guard::Shared(shared) => Some(shared),
            Guard::Local(_) => None,
        }
    }

    /// Consumes the guard, returning the unsynchronized collector.
    #[inline]
    pub fn into_collector(self) -> Collector<F> {
        dispatch!(self, inner => inner.into())
    }
}

impl<F: Clone> Guard<F> {
    /// Consumes the guard and materializes its state.
    #[inline]
    pub fn into_err<'a>(self) -> Option<GuardError<'a, F>> {
        self.into_collector().into_err()
    }

    /// Consumes the guard: `Ok(())` if nothing was kept.
    #[inline]
    pub fn finish<'a>(self) -> Result<(), GuardError<'a, F>> {
        self.into_collector().finish()
    }
}

impl<F> Default for Guard<F> {
    #[inline]
    fn default() -> Self {
        Self::new(GuardConfig::default())
    }
}

impl<F> From<Collector<F>> for Guard<F> {
    #[inline]
    fn from(collector: Collector<F>) -> Self {
        Guard::Local(collector)
    }
}

#[cfg(feature = "std")]
impl<F> From<SyncCollector<F>> for Collector<F> {
    #[inline]
    fn from(shared: SyncCollector<F>) -> Self {
        shared.into_inner()
    }
}

impl<F: Failure + Clone> Recorder<F> for Guard<F> {
    #[inline]
    fn add(&mut self, failure: F) {
        dispatch!(self, inner => inner.add(failure))
    }

    #[inline]
    fn is_capped(&self) -> bool {
        dispatch!(self, inner => inner.is_capped())
    }

    #[inline]
    fn stats(&self) -> Stats {
        dispatch!(self, inner => inner.stats())
    }

    #[inline]
    fn reset(&mut self) {
        dispatch!(self, inner => inner.reset())
    }

    #[inline]
    fn err(&self) -> Option<GuardError<'_, F>> {
        dispatch!(self, inner => inner.err())
    }

    #[inline]
    fn check_lazy<C>(&mut self, check: C)
    where
        C: FnOnce() -> Result<(), F>,
    {
        dispatch!(self, inner => inner.check_lazy(check))
    }

    #[inline]
    fn is_ok(&self) -> bool {
        dispatch!(self, inner => inner.is_ok())
    }
}
