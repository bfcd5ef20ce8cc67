//! Async checks on the unsynchronized collector.

use core::future::Future;

use crate::guard::Collector;

impl<F> Collector<F> {
    /// Awaits `check` unless the cap is reached, recording its failure.
    ///
    /// A skipped future is dropped without being polled and is not counted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// use guard_rail::validators::non_empty;
    /// use guard_rail::{Collector, GuardConfig};
    ///
    /// let mut guard = Collector::new(GuardConfig::first_error());
    /// guard.check_async(async { non_empty("env", "") }).await;
    /// guard.check_async(async { non_empty("region", "") }).await;
    ///
    /// assert_eq!(guard.stats().checks, 1);
    /// # }
    /// ```
    pub async fn check_async<Fut>(&mut self, check: Fut)
    where
        Fut: Future<Output = Result<(), F>>,
    {
        if !self.begin_check() {
            return;
        }
        if let Err(failure) = check.await {
            self.add(failure);
        }
    }

    /// Awaits `checks` sequentially, stopping as soon as the cap is reached.
    pub async fn run_async<I>(&mut self, checks: I)
    where
        I: IntoIterator,
        I::Item: Future<Output = Result<(), F>>,
    {
        for check in checks {
            if self.is_capped() {
                return;
            }
            self.check_async(check).await;
        }
    }
}
