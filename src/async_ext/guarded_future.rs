//! Future wrapper that records its failure into a [`SyncCollector`].

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::future::FusedFuture;
use pin_project_lite::pin_project;

use crate::guard::SyncCollector;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Admission {
    Unchecked,
    Admitted,
    Done,
}

pin_project! {
    /// A check future admitted against a collector's cap.
    ///
    /// On first poll the collector decides whether the check runs at all: if
    /// the cap is already reached the inner future is never polled and the
    /// wrapper resolves to `None`. Otherwise the check is counted, the inner
    /// future is driven without holding the collector lock, and an `Err`
    /// is recorded through [`SyncCollector::add`].
    ///
    /// Polling again after completion yields `None` without touching the
    /// inner future.
    ///
    /// # Cancel Safety
    ///
    /// Dropping the wrapper before completion records nothing beyond the
    /// admission count.
    #[must_use = "futures do nothing unless polled"]
    pub struct GuardedFuture<'a, Fut, F> {
        #[pin]
        future: Fut,
        collector: &'a SyncCollector<F>,
        admission: Admission,
    }
}

impl<'a, Fut, F> GuardedFuture<'a, Fut, F> {
    #[inline]
    pub fn new(future: Fut, collector: &'a SyncCollector<F>) -> Self {
        Self { future, collector, admission: Admission::Unchecked }
    }
}

impl<Fut, F, T> Future for GuardedFuture<'_, Fut, F>
where
    Fut: Future<Output = Result<T, F>>,
{
    type Output = Option<T>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        match *this.admission {
            Admission::Unchecked => {
                if !this.collector.begin_check() {
                    *this.admission = Admission::Done;
                    return Poll::Ready(None);
                }
                *this.admission = Admission::Admitted;
            },
            Admission::Admitted => {},
            Admission::Done => return Poll::Ready(None),
        }

        this.future.poll(cx).map(|result| {
            *this.admission = Admission::Done;
            match result {
                Ok(value) => Some(value),
                Err(failure) => {
                    this.collector.add(failure);
                    None
                },
            }
        })
    }
}

impl<Fut, F, T> FusedFuture for GuardedFuture<'_, Fut, F>
where
    Fut: Future<Output = Result<T, F>>,
{
    fn is_terminated(&self) -> bool {
        self.admission == Admission::Done
    }
}

/// Extension trait attaching a [`SyncCollector`] to a check future.
///
/// # Examples
///
/// ```rust
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// use guard_rail::async_ext::FutureCheckExt;
/// use guard_rail::validators::non_zero;
/// use guard_rail::{GuardConfig, SyncCollector};
///
/// let guard = SyncCollector::new(GuardConfig::first_error());
/// let first = async { non_zero("port", 0).map(|_| 8080) }.guarded(&guard).await;
/// let second = async { non_zero("port", 0).map(|_| 8080) }.guarded(&guard).await;
///
/// assert_eq!((first, second), (None, None));
/// assert_eq!(guard.stats().checks, 1);
/// # }
/// ```
pub trait FutureCheckExt<T, F>: Future<Output = Result<T, F>> + Sized {
    /// Wraps the future so it runs only while `collector` is below its cap.
    #[inline]
    fn guarded(self, collector: &SyncCollector<F>) -> GuardedFuture<'_, Self, F> {
        GuardedFuture::new(self, collector)
    }
}

impl<Fut, T, F> FutureCheckExt<T, F> for Fut where Fut: Future<Output = Result<T, F>> {}
