//! Ergonomic macros for running validators against a collector.
//!
//! - [`macro@crate::checks`] - Wraps each validator call in a lazy check so
//!   nothing after the cap is evaluated.

/// Runs each expression as a lazy check against a collector.
///
/// Every expression is wrapped in a closure and passed to `check_lazy`, so
/// expressions are evaluated in order and none is evaluated once the cap is
/// reached. `$guard` should be a place expression; it is named once per
/// check. Works with anything exposing `check_lazy`: [`Collector`](crate::Collector),
/// [`SyncCollector`](crate::SyncCollector), or a [`Recorder`](crate::Recorder).
///
/// # Examples
///
/// ```
/// use guard_rail::validators::{in_range_num, non_empty, non_zero};
/// use guard_rail::{checks, Collector, GuardConfig};
///
/// let mut guard = Collector::new(GuardConfig::keep(2));
/// checks!(guard;
///     non_empty("env", ""),
///     non_zero("port", 0),
///     in_range_num("workers", 0, 1, 8),
/// );
///
/// let stats = guard.stats();
/// assert_eq!((stats.checks, stats.kept, stats.dropped), (2, 2, 0));
/// ```
#[macro_export]
macro_rules! checks {
    ($guard:expr; $($check:expr),+ $(,)?) => {{
        $( $guard.check_lazy(|| $check); )+
    }};
}
