use crate::aggregate::GuardError;
use crate::guard::Stats;
use crate::traits::Failure;

/// Capability contract shared by every accumulator.
///
/// [`Collector`](crate::Collector) implements it without any locking,
/// [`SyncCollector`](crate::SyncCollector) behind a mutex, and
/// [`Guard`](crate::Guard) dispatches to whichever was selected by its
/// configuration. Validation code written against `Recorder` works with all
/// three.
///
/// # Examples
///
/// ```
/// use guard_rail::validators::{non_empty, non_zero};
/// use guard_rail::{Collector, FieldError, GuardConfig, Recorder};
///
/// fn validate(env: &str, port: u16, out: &mut impl Recorder<FieldError>) {
///     out.check(non_empty("env", env));
///     out.check_lazy(|| non_zero("port", port));
/// }
///
/// let mut guard = Collector::new(GuardConfig::collect_all());
/// validate("", 0, &mut guard);
/// assert_eq!(guard.stats().kept, 2);
/// ```
pub trait Recorder<F: Failure + Clone> {
    /// Records `failure`, or counts it as dropped once the cap is reached.
    fn add(&mut self, failure: F);

    /// Returns `true` once no further failure can be kept.
    fn is_capped(&self) -> bool;

    /// Returns the current counters.
    fn stats(&self) -> Stats;

    /// Clears kept failures and counters. Configuration is preserved.
    fn reset(&mut self);

    /// Materializes the current state without mutating it.
    ///
    /// Returns `None` when nothing was kept.
    fn err(&self) -> Option<GuardError<'_, F>>;

    /// Records the failure side of `result`. `Ok` is a no-op.
    #[inline]
    fn check(&mut self, result: Result<(), F>) {
        if let Err(failure) = result {
            self.add(failure);
        }
    }

    /// Evaluates `check` unless the cap is reached.
    ///
    /// A skipped check is neither evaluated nor counted.
    fn check_lazy<C>(&mut self, check: C)
    where
        C: FnOnce() -> Result<(), F>;

    /// Like [`Recorder::check_lazy`]; an absent check is silently ignored.
    #[inline]
    fn check_lazy_opt<C>(&mut self, check: Option<C>)
    where
        C: FnOnce() -> Result<(), F>,
    {
        if let Some(check) = check {
            self.check_lazy(check);
        }
    }

    /// Evaluates `checks` in order and stops as soon as the cap is reached.
    ///
    /// Checks after the stopping point are never invoked.
    fn run<I>(&mut self, checks: I)
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

    /// Returns `true` if no failure has been kept.
    #[inline]
    fn is_ok(&self) -> bool {
        self.stats().kept == 0
    }
}
