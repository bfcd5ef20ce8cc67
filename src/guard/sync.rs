//! Mutex-guarded decorator around [`Collector`].

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::aggregate::GuardError;
use crate::guard::{Collector, GuardConfig, Stats};
use crate::traits::{Failure, Recorder};

/// Thread-safe bounded accumulator.
///
/// Every operation runs inside one short critical section over an inner
/// [`Collector`]. Caller-supplied code never runs under the lock: a lazy
/// check is admitted under the lock, evaluated after releasing it, and its
/// failure re-enters through [`SyncCollector::add`]. Under contention the
/// kept order follows lock acquisition, and a check admitted before a racing
/// caller reached the cap is still counted even if its failure is dropped.
///
/// Materialization copies members and counters under the lock, so the
/// returned value is independent of later mutation. Failures the collector
/// discards, whether rejected at the cap or cleared by a reset, are dropped
/// only after the lock is released.
///
/// # Examples
///
/// ```
/// use guard_rail::validators::non_zero;
/// use guard_rail::{GuardConfig, SyncCollector};
///
/// let guard = SyncCollector::new(GuardConfig::collect_all());
/// std::thread::scope(|scope| {
///     for worker in 0..4 {
///         let guard = &guard;
///         scope.spawn(move || guard.check_lazy(|| non_zero("worker", worker % 2)));
///     }
/// });
///
/// assert_eq!(guard.stats().checks, 4);
/// assert_eq!(guard.stats().kept, 2);
/// ```
#[derive(Debug)]
pub struct SyncCollector<F> {
    inner: Mutex<Collector<F>>,
}

impl<F> Default for SyncCollector<F> {
    fn default() -> Self {
        Self::new(GuardConfig::default())
    }
}

impl<F> SyncCollector<F> {
    #[inline]
    pub fn new(config: GuardConfig) -> Self {
        Self { inner: Mutex::new(Collector::new(config)) }
    }

    /// Caller code running under the lock is limited to `F::clone` during a
    /// snapshot, and a panicking clone leaves the counters consistent, so a
    /// poisoned lock is recovered.
    #[inline]
    fn lock(&self) -> MutexGuard<'_, Collector<F>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[inline]
    pub fn config(&self) -> GuardConfig {
        *self.lock().config()
    }

    /// Records `failure`, or counts it as dropped once the cap is reached.
    ///
    /// A rejected failure is dropped after the lock is released.
    #[inline]
    pub fn add(&self, failure: F) {
        let rejected = self.lock().push_or_reject(failure);
        drop(rejected);
    }

    #[inline]
    pub fn check(&self, result: Result<(), F>) {
        if let Err(failure) = result {
            self.add(failure);
        }
    }

    /// Evaluates `check` outside the lock unless the cap is reached.
    pub fn check_lazy<C>(&self, check: C)
    where
        C: FnOnce() -> Result<(), F>,
    {
        if !self.begin_check() {
            return;
        }
        if let Err(failure) = check() {
            self.add(failure);
        }
    }

    #[inline]
    pub fn check_lazy_opt<C>(&self, check: Option<C>)
    where
        C: FnOnce() -> Result<(), F>,
    {
        if let Some(check) = check {
            self.check_lazy(check);
        }
    }

    /// Evaluates `checks` in order, stopping as soon as the cap is reached.
    pub fn run<I>(&self, checks: I)
    where
        I: IntoIterator,
        I::Item: FnOnce() -> Result<(), F>,
    {
        for check in checks {
            if self.is_capped() {
                return;
            }
            self.check_lazy(check);
        }
    }

    #[inline]
    pub fn is_capped(&self) -> bool {
        self.lock().is_capped()
    }

    #[inline]
    pub fn is_ok(&self) -> bool {
        self.lock().is_ok()
    }

    #[inline]
    pub fn stats(&self) -> Stats {
        self.lock().stats()
    }

    /// Clears kept failures and counters. The old failures are dropped after
    /// the lock is released.
    #[inline]
    pub fn reset(&self) {
        let stale = self.lock().take_reset();
        drop(stale);
    }

    /// Consumes the wrapper, returning the unsynchronized collector.
    #[inline]
    pub fn into_inner(self) -> Collector<F> {
        self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    #[inline]
    pub(crate) fn begin_check(&self) -> bool {
        self.lock().begin_check()
    }
}

impl<F: Clone> SyncCollector<F> {
    /// Snapshots the current state into a caller-owned value.
    #[inline]
    pub fn err<'a>(&self) -> Option<GuardError<'a, F>> {
        self.lock().to_owned_err()
    }
}

impl<F> From<Collector<F>> for SyncCollector<F> {
    #[inline]
    fn from(collector: Collector<F>) -> Self {
        Self { inner: Mutex::new(collector) }
    }
}

impl<F: Failure + Clone> Recorder<F> for SyncCollector<F> {
    #[inline]
    fn add(&mut self, failure: F) {
        SyncCollector::add(self, failure);
    }

    #[inline]
    fn is_capped(&self) -> bool {
        SyncCollector::is_capped(self)
    }

    #[inline]
    fn stats(&self) -> Stats {
        SyncCollector::stats(self)
    }

    #[inline]
    fn reset(&mut self) {
        SyncCollector::reset(self);
    }

    #[inline]
    fn err(&self) -> Option<GuardError<'_, F>> {
        SyncCollector::err(self)
    }

    #[inline]
    fn check_lazy<C>(&mut self, check: C)
    where
        C: FnOnce() -> Result<(), F>,
    {
        SyncCollector::check_lazy(self, check);
    }

    #[inline]
    fn is_ok(&self) -> bool {
        SyncCollector::is_ok(self)
    }
}
