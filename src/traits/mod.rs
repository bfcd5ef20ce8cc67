//! Core traits for recording and inspecting failures.
//!
//! - [`Failure`]: the contract every recorded failure satisfies
//! - [`Extract`]: typed payload extraction over a failure's cause chain
//! - [`Recorder`]: the capability set shared by all accumulators
//!
//! # Examples
//!
//! ```
//! use guard_rail::traits::{extract_from, Failure, FieldName};
//! use guard_rail::{Category, FieldError};
//!
//! let err = FieldError::non_empty("env");
//! assert!(err.is(Category::NonEmpty));
//! assert_eq!(extract_from::<FieldName<'_>>(&err), Some(FieldName("env")));
//! ```

pub mod extract;
pub mod failure;
pub mod recorder;

pub use extract::{extract_from, Extract, FieldName, LengthDetails, RangeDetails};
pub use failure::{Details, Failure};
pub use recorder::Recorder;
