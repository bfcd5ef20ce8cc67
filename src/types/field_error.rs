//! Failures produced by the field validators.

use core::fmt;

use crate::traits::{Details, Failure};
use crate::types::alloc_type::String;
use crate::types::{Bound, Category};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Selects how much of a failure's payload is rendered.
///
/// `Redacted` omits offending values, which may be sensitive, from the
/// display string. The mode never changes category or payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderMode {
    Verbose,
    Redacted,
}

impl Default for RenderMode {
    /// `Redacted` when built with the `redact` feature, `Verbose` otherwise.
    #[inline]
    fn default() -> Self {
        if cfg!(feature = "redact") {
            RenderMode::Redacted
        } else {
            RenderMode::Verbose
        }
    }
}

/// A single field-validation failure.
///
/// # Examples
///
/// ```
/// use guard_rail::{Category, Failure, FieldError, RenderMode};
///
/// let err = FieldError::len_at_least("name", 3, 1);
/// assert_eq!(err.category(), Category::LenAtLeast);
/// assert_eq!(err.field(), Some("name"));
/// assert_eq!(err.render(RenderMode::Redacted).to_string(), "name: len must be >= 3");
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
#[derive(Debug, Clone, PartialEq)]
pub enum FieldError {
    NotNil { field: String },
    NonZero { field: String },
    NonEmpty { field: String },
    LenAtLeast { field: String, want: usize, got: usize },
    OutOfRange { field: String, min: Bound, max: Bound, got: Bound },
    NotInSet { field: String },
}

impl FieldError {
    #[inline]
    pub fn not_nil(field: impl Into<String>) -> Self {
        Self::NotNil { field: field.into() }
    }

    #[inline]
    pub fn non_zero(field: impl Into<String>) -> Self {
        Self::NonZero { field: field.into() }
    }

    #[inline]
    pub fn non_empty(field: impl Into<String>) -> Self {
        Self::NonEmpty { field: field.into() }
    }

    #[inline]
    pub fn len_at_least(field: impl Into<String>, want: usize, got: usize) -> Self {
        Self::LenAtLeast { field: field.into(), want, got }
    }

    #[inline]
    pub fn out_of_range(
        field: impl Into<String>,
        min: impl Into<Bound>,
        max: impl Into<Bound>,
        got: impl Into<Bound>,
    ) -> Self {
        Self::OutOfRange { field: field.into(), min: min.into(), max: max.into(), got: got.into() }
    }

    #[inline]
    pub fn not_in_set(field: impl Into<String>) -> Self {
        Self::NotInSet { field: field.into() }
    }

    /// Name of the offending field.
    pub fn field_name(&self) -> &str {
        match self {
            Self::NotNil { field }
            | Self::NonZero { field }
            | Self::NonEmpty { field }
            | Self::LenAtLeast { field, .. }
            | Self::OutOfRange { field, .. }
            | Self::NotInSet { field } => field,
        }
    }

    /// Renders with an explicit mode instead of the build default.
    #[inline]
    pub fn render(&self, mode: RenderMode) -> Rendered<'_> {
        Rendered { error: self, mode }
    }
}

/// Display adapter returned by [`FieldError::render`].
#[derive(Debug, Clone, Copy)]
pub struct Rendered<'a> {
    error: &'a FieldError,
    mode: RenderMode,
}

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verbose = self.mode == RenderMode::Verbose;
        match self.error {
            FieldError::NotNil { field } => write!(f, "{field}: must not be nil"),
            FieldError::NonZero { field } => write!(f, "{field}: must be non-zero"),
            FieldError::NonEmpty { field } => write!(f, "{field}: must be non-empty"),
            FieldError::NotInSet { field } => write!(f, "{field}: invalid value"),
            FieldError::LenAtLeast { field, want, got } => {
                write!(f, "{field}: len must be >= {want}")?;
                if verbose {
                    write!(f, " (got {got})")?;
                }
                Ok(())
            },
            FieldError::OutOfRange { field, min, max, got } => {
                write!(f, "{field}: must be in [{min},{max}]")?;
                if verbose {
                    write!(f, " (got {got})")?;
                }
                Ok(())
            },
        }
    }
}

impl fmt::Display for FieldError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.render(RenderMode::default()), f)
    }
}

impl core::error::Error for FieldError {}

impl Failure for FieldError {
    fn category(&self) -> Category {
        match self {
            Self::NotNil { .. } => Category::NotNil,
            Self::NonZero { .. } => Category::NonZero,
            Self::NonEmpty { .. } => Category::NonEmpty,
            Self::LenAtLeast { .. } => Category::LenAtLeast,
            Self::OutOfRange { .. } => Category::OutOfRange,
            Self::NotInSet { .. } => Category::NotInSet,
        }
    }

    #[inline]
    fn field(&self) -> Option<&str> {
        Some(self.field_name())
    }

    fn details(&self) -> Details<'_> {
        match self {
            Self::LenAtLeast { want, got, .. } => Details::Length { want: *want, got: *got },
            Self::OutOfRange { min, max, got, .. } => Details::Range { min, max, got },
            _ => Details::None,
        }
    }
}
