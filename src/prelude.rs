//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use guard_rail::prelude::*;
//!
//! let mut guard = Guard::new(GuardConfig::collect_all());
//! guard.check(non_empty("env", ""));
//! guard.check(in_range_num("port", 0, 1, 65535));
//!
//! let err = guard.err().unwrap();
//! assert!(err.is(Category::OutOfRange));
//! assert_eq!(err.len(), 2);
//! ```

// Macros
pub use crate::checks;

// Core types
pub use crate::aggregate::{Aggregate, GuardError, Member};
pub use crate::guard::{Collector, Guard, GuardConfig, Stats};
#[cfg(feature = "std")]
pub use crate::guard::SyncCollector;
pub use crate::types::{Category, ClampedNotice, FieldError};

// Traits
pub use crate::traits::{Failure, Recorder};

// Validators
pub use crate::validators::{
    in_range_num, in_set, len_at_least, non_blank, non_empty, non_zero, not_nil,
};
