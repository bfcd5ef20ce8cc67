//! Unsynchronized bounded accumulator.

use crate::aggregate::{materialize, GuardError};
use crate::guard::{GuardConfig, Stats};
use crate::traits::{Failure, Recorder};
use crate::types::alloc_type::Cow;
use crate::types::FailureVec;

/// Bounded failure accumulator for single-owner use within one validation
/// pass.
///
/// Keeps at most `max_errors` failures in arrival order (unlimited when the
/// cap is `0`) and counts everything it had to drop. The first four kept
/// failures are stored inline.
///
/// Materializing with [`Collector::err`] borrows the collector, so the
/// returned view stays valid exactly until the next mutation.
///
/// # Examples
///
/// ```
/// use guard_rail::validators::{in_range_num, non_empty, non_zero};
/// use guard_rail::{Category, Collector, GuardConfig};
///
/// let mut guard = Collector::new(GuardConfig::keep(2));
/// guard.check(non_empty("env", ""));
/// guard.check(non_zero("port", 0u16));
/// guard.check(in_range_num("workers", 0, 1, 8));
///
/// let stats = guard.stats();
/// assert_eq!((stats.kept, stats.dropped), (2, 1));
///
/// let err = guard.err().unwrap();
/// assert!(err.is(Category::NonEmpty));
/// assert!(err.is(Category::Clamped));
/// assert!(!err.is(Category::OutOfRange));
/// ```
#[derive(Debug, Clone)]
pub struct Collector<F> {
    kept: FailureVec<F>,
    config: GuardConfig,
    checks: usize,
    failures: usize,
    dropped: usize,
}

impl<F> Default for Collector<F> {
    fn default() -> Self {
        Self::new(GuardConfig::default())
    }
}

impl<F> Collector<F> {
    /// Creates an empty collector. `config.thread_safe` is ignored here; use
    /// [`SyncCollector`](crate::SyncCollector) or [`Guard`](crate::Guard) for locking.
    #[inline]
    pub fn new(config: GuardConfig) -> Self {
        Self { kept: FailureVec::new(), config, checks: 0, failures: 0, dropped: 0 }
    }

    #[inline]
    pub fn config(&self) -> &GuardConfig {
        &self.config
    }

    /// Records `failure`, or counts it as dropped once the cap is reached.
    #[inline]
    pub fn add(&mut self, failure: F) {
        self.push_or_reject(failure);
    }

    /// Like [`Collector::add`], but hands a rejected failure back to the
    /// caller instead of dropping it here.
    pub(crate) fn push_or_reject(&mut self, failure: F) -> Option<F> {
        self.failures += 1;
        if self.is_capped() {
            self.dropped += 1;
            #[cfg(feature = "tracing")]
            if self.dropped == 1 {
                tracing::debug!(
                    max_errors = self.config.max_errors,
                    "failure cap reached, dropping further failures"
                );
            }
            return Some(failure);
        }
        self.kept.push(failure);
        None
    }

    /// Records the failure side of `result`. `Ok` is a no-op.
    #[inline]
    pub fn check(&mut self, result: Result<(), F>) {
        if let Err(failure) = result {
            self.add(failure);
        }
    }

    /// Evaluates `check` unless the cap is reached.
    ///
    /// A skipped check is neither evaluated nor counted in `checks`.
    pub fn check_lazy<C>(&mut self, check: C)
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

    /// Like [`Collector::check_lazy`]; `None` is silently ignored.
    #[inline]
    pub fn check_lazy_opt<C>(&mut self, check: Option<C>)
    where
        C: FnOnce() -> Result<(), F>,
    {
        if let Some(check) = check {
            self.check_lazy(check);
        }
    }

    /// Evaluates `checks` in order, stopping as soon as the cap is reached.
    ///
    /// ```
    /// use guard_rail::validators::non_empty;
    /// use guard_rail::{Collector, FieldError, GuardConfig};
    ///
    /// let mut guard = Collector::<FieldError>::new(GuardConfig::keep(2));
    /// guard.run(["a", "b", "c"].map(|name| move || non_empty(name, "")));
    ///
    /// assert_eq!(guard.stats().checks, 2);
    /// assert_eq!(guard.stats().dropped, 0);
    /// ```
    pub fn run<I>(&mut self, checks: I)
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

    /// Returns `true` once no further failure can be kept.
    #[inline]
    pub fn is_capped(&self) -> bool {
        self.config.max_errors > 0 && self.kept.len() >= self.config.max_errors
    }

    /// Returns `true` if no failure has been kept.
    #[inline]
    pub fn is_ok(&self) -> bool {
        self.kept.is_empty()
    }

    #[inline]
    pub fn stats(&self) -> Stats {
        Stats {
            checks: self.checks,
            failures: self.failures,
            kept: self.kept.len(),
            dropped: self.dropped,
        }
    }

    /// Kept failures in arrival order.
    #[inline]
    pub fn failures(&self) -> &[F] {
        &self.kept
    }

    /// Returns the collector to its pristine state, keeping the configuration.
    #[inline]
    pub fn reset(&mut self) {
        drop(self.take_reset());
    }

    /// Resets the collector and returns the failures it kept, so the caller
    /// decides where they are dropped.
    pub(crate) fn take_reset(&mut self) -> FailureVec<F> {
        #[cfg(feature = "tracing")]
        tracing::trace!(
            kept = self.kept.len(),
            dropped = self.dropped,
            "resetting failure collector"
        );
        self.checks = 0;
        self.failures = 0;
        self.dropped = 0;
        core::mem::take(&mut self.kept)
    }

    /// Admits one lazy check: counts it unless the cap is reached.
    #[inline]
    pub(crate) fn begin_check(&mut self) -> bool {
        if self.is_capped() {
            return false;
        }
        self.checks += 1;
        true
    }

    /// Spilled storage holding far more capacity than it uses.
    #[inline]
    fn is_over_allocated(&self) -> bool {
        self.kept.spilled()
            && self.kept.capacity()
                > self.config.effective_compaction_ratio().saturating_mul(self.kept.len())
    }
}

impl<F: Clone> Collector<F> {
    /// Materializes the current state without mutating it.
    ///
    /// Returns `None` when nothing was kept, the failure itself when exactly
    /// one was kept and none dropped, and an aggregate otherwise. Members are
    /// borrowed from the collector unless its storage is over-allocated
    /// relative to the compaction ratio, in which case they are copied.
    pub fn err(&self) -> Option<GuardError<'_, F>> {
        let members = if self.is_over_allocated() {
            Cow::Owned(self.kept.to_vec())
        } else {
            Cow::Borrowed(self.kept.as_slice())
        };
        materialize(members, self.dropped)
    }

    /// Materializes into a caller-owned value, leaving the collector intact.
    #[inline]
    pub fn to_owned_err<'a>(&self) -> Option<GuardError<'a, F>> {
        materialize(Cow::Owned(self.kept.to_vec()), self.dropped)
    }

    /// Consumes the collector and materializes its state.
    #[inline]
    pub fn into_err<'a>(self) -> Option<GuardError<'a, F>> {
        materialize(Cow::Owned(self.kept.into_vec()), self.dropped)
    }

    /// Consumes the collector: `Ok(())` if nothing was kept.
    #[inline]
    pub fn finish<'a>(self) -> Result<(), GuardError<'a, F>> {
        self.into_err().map_or(Ok(()), Err)
    }
}

impl<F: Failure + Clone> Recorder<F> for Collector<F> {
    #[inline]
    fn add(&mut self, failure: F) {
        Collector::add(self, failure);
    }

    #[inline]
    fn is_capped(&self) -> bool {
        Collector::is_capped(self)
    }

    #[inline]
    fn stats(&self) -> Stats {
        Collector::stats(self)
    }

    #[inline]
    fn reset(&mut self) {
        Collector::reset(self);
    }

    #[inline]
    fn err(&self) -> Option<GuardError<'_, F>> {
        Collector::err(self)
    }

    #[inline]
    fn check_lazy<C>(&mut self, check: C)
    where
        C: FnOnce() -> Result<(), F>,
    {
        Collector::check_lazy(self, check);
    }

    #[inline]
    fn is_ok(&self) -> bool {
        Collector::is_ok(self)
    }
}
