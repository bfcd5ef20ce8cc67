#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Compaction ratio used when the configured one is `0`.
pub const DEFAULT_COMPACTION_RATIO: usize = 2;

/// Construction options for collectors and [`Guard`](crate::Guard).
///
/// | `max_errors` | behavior |
/// |---|---|
/// | `0` | unlimited, never drops |
/// | `1` (default) | first error: keep the first, drop the rest |
/// | `N >= 2` | keep the first `N` in arrival order |
///
/// # Examples
///
/// ```
/// use guard_rail::GuardConfig;
///
/// let config = GuardConfig::default();
/// assert_eq!(config.max_errors, 1);
/// assert!(!config.thread_safe);
///
/// let config = GuardConfig::keep(8).thread_safe(true);
/// assert_eq!(config.max_errors, 8);
/// assert!(config.thread_safe);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GuardConfig {
    /// Cap on kept failures; `0` means unlimited.
    pub max_errors: usize,
    /// Selects the mutex-guarded collector in [`Guard::new`](crate::Guard::new).
    pub thread_safe: bool,
    /// Unsynchronized materialization copies members instead of borrowing
    /// them when spilled storage capacity exceeds `ratio * len`.
    /// `0` selects [`DEFAULT_COMPACTION_RATIO`].
    pub compaction_ratio: usize,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self { max_errors: 1, thread_safe: false, compaction_ratio: DEFAULT_COMPACTION_RATIO }
    }
}

impl GuardConfig {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep only the first failure.
    #[inline]
    pub fn first_error() -> Self {
        Self::default()
    }

    /// Keep every failure.
    #[inline]
    pub fn collect_all() -> Self {
        Self { max_errors: 0, ..Default::default() }
    }

    /// Keep the first `n` failures. `keep(0)` is the same as [`collect_all`](Self::collect_all).
    #[inline]
    pub fn keep(n: usize) -> Self {
        Self { max_errors: n, ..Default::default() }
    }

    #[inline]
    pub fn max_errors(mut self, n: usize) -> Self {
        self.max_errors = n;
        self
    }

    #[inline]
    pub fn thread_safe(mut self, enabled: bool) -> Self {
        self.thread_safe = enabled;
        self
    }

    #[inline]
    pub fn compaction_ratio(mut self, ratio: usize) -> Self {
        self.compaction_ratio = ratio;
        self
    }

    /// Compaction ratio with `0` resolved to the default.
    #[inline]
    pub(crate) fn effective_compaction_ratio(&self) -> usize {
        if self.compaction_ratio == 0 {
            DEFAULT_COMPACTION_RATIO
        } else {
            self.compaction_ratio
        }
    }
}
