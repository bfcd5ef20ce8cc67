//! Async extensions for guard-rail.
//!
//! Futures are lazy, so an async check is admitted exactly like a lazy
//! closure: nothing is polled once the cap is reached, and the collector
//! lock is never held across an `.await`.
//!
//! # Feature Flag
//!
//! Requires the `async` feature to be enabled:
//!
//! ```toml
//! [dependencies]
//! guard-rail = { version = "0.3", features = ["async"] }
//! ```

mod collector;
mod guarded_future;

pub use guarded_future::{FutureCheckExt, GuardedFuture};
