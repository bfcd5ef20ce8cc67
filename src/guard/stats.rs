#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Counter snapshot for inspection and telemetry.
///
/// When the cap is non-zero, `kept + dropped == failures`. `checks` counts
/// lazy checks that were evaluated, including ones whose failure was later
/// dropped by a racing caller in synchronized mode.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Stats {
    pub checks: usize,
    pub failures: usize,
    pub kept: usize,
    pub dropped: usize,
}
