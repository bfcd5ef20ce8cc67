//! Full-detail rendering of a materialized view.
//!
//! The view's own `Display` is deliberately terse. A report enumerates
//! every member, notice included, with a configurable layout.
//!
//! # Examples
//!
//! ```
//! use guard_rail::report::ReportFormat;
//! use guard_rail::validators::{non_empty, non_zero};
//! use guard_rail::{Collector, GuardConfig};
//!
//! let mut guard = Collector::new(GuardConfig::keep(1));
//! guard.check(non_empty("env", ""));
//! guard.check(non_zero("port", 0));
//!
//! let err = guard.err().unwrap();
//! assert_eq!(err.to_string(), "multiple errors");
//! assert_eq!(
//!     err.report(&ReportFormat::compact()),
//!     "env: must be non-empty | validation: 1 additional errors omitted (kept 1)"
//! );
//! ```

use core::fmt::Write;

use crate::aggregate::GuardError;
use crate::traits::Failure;
use crate::types::alloc_type::String;

/// Layout of a member report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportFormat {
    /// Inserted between members.
    pub separator: String,
    /// Written before each member.
    pub prefix: String,
    /// Writes `[category] ` before each member's text.
    pub show_category: bool,
}

impl Default for ReportFormat {
    fn default() -> Self {
        Self { separator: "; ".into(), prefix: String::new(), show_category: false }
    }
}

impl ReportFormat {
    /// Single line, members separated by ` | `.
    #[inline]
    pub fn compact() -> Self {
        Self { separator: " | ".into(), ..Default::default() }
    }

    /// One bulleted member per line, tagged with its category.
    #[inline]
    pub fn pretty() -> Self {
        Self { separator: "\n".into(), prefix: "- ".into(), show_category: true }
    }
}

impl<F: Failure + Clone> GuardError<'_, F> {
    /// Renders every member according to `format`.
    pub fn report(&self, format: &ReportFormat) -> String {
        let mut out = String::with_capacity(self.len() * 48);
        for (index, member) in self.iter().enumerate() {
            if index > 0 {
                out.push_str(&format.separator);
            }
            out.push_str(&format.prefix);
            // Writing into a String cannot fail.
            let _ = if format.show_category {
                write!(out, "[{}] {}", member.category(), member)
            } else {
                write!(out, "{member}")
            };
        }
        out
    }
}

/// Emits one `warn` event per member, with `category` and `field` fields.
#[cfg(feature = "tracing")]
pub fn trace_members<F: Failure + Clone>(err: &GuardError<'_, F>) {
    for (index, member) in err.iter().enumerate() {
        tracing::warn!(
            index,
            category = %member.category(),
            field = member.field().unwrap_or_default(),
            "{member}"
        );
    }
}
