//! Bounded error aggregation for multi-step validation.
//!
//! A collector records failures produced by independent checks, keeps at
//! most a configured number of them, and counts the rest as dropped. The
//! materialized result supports ordered traversal with early exit, category
//! tests, and typed payload extraction, and reports drops through a
//! trailing [`ClampedNotice`].
//!
//! # Examples
//!
//! ## First error (default)
//!
//! ```
//! use guard_rail::validators::{non_empty, non_zero};
//! use guard_rail::{Category, Collector};
//!
//! let mut guard = Collector::default();
//! guard.check(non_empty("env", ""));
//! guard.check(non_zero("port", 0));
//!
//! let err = guard.err().unwrap();
//! assert!(err.is(Category::NonEmpty));
//! assert!(err.is(Category::Clamped));
//! assert!(!err.is(Category::NonZero));
//! ```
//!
//! ## Keep the first N
//!
//! ```
//! use guard_rail::validators::{in_range_num, non_empty, non_zero};
//! use guard_rail::{ClampedNotice, Collector, GuardConfig};
//!
//! let mut guard = Collector::new(GuardConfig::keep(2));
//! guard.check(non_empty("env", ""));
//! guard.check(non_zero("port", 0));
//! guard.check(in_range_num("workers", 0, 1, 8));
//!
//! let err = guard.err().unwrap();
//! assert_eq!(err.extract::<ClampedNotice>(), Some(ClampedNotice::new(2, 1)));
//! ```
//!
//! ## Shared across threads
//!
//! ```
//! use guard_rail::validators::non_empty;
//! use guard_rail::{GuardConfig, SyncCollector};
//!
//! let guard = SyncCollector::new(GuardConfig::collect_all());
//! std::thread::scope(|scope| {
//!     scope.spawn(|| guard.check(non_empty("a", "")));
//!     scope.spawn(|| guard.check(non_empty("b", "")));
//! });
//! assert_eq!(guard.err().map(|err| err.len()), Some(2));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Materialized views: `GuardError`, `Aggregate`, members
pub mod aggregate;
/// Bounded accumulators and configuration
pub mod guard;
/// Ergonomic macros
pub mod macros;
/// Value normalization helpers
pub mod normalize;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Full-detail member reports
pub mod report;
/// Core traits: `Failure`, `Extract`, `Recorder`
pub mod traits;
/// Failure values and storage types
pub mod types;
/// Stateless field validators
pub mod validators;

/// Async checks (requires `async` feature)
#[cfg(feature = "async")]
pub mod async_ext;

pub use aggregate::{Aggregate, GuardError, Member, Members};
pub use guard::*;
pub use traits::*;
pub use types::{Bound, Category, ClampedNotice, FieldError, RenderMode};
