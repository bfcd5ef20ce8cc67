use core::fmt;
use core::time::Duration;

use crate::types::alloc_type::String;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Loosely typed range or length value carried by a failure.
///
/// Validators are generic over the checked type, but consumers inspect the
/// bounds without knowing it. `Bound` erases the type while keeping enough
/// structure to compare and render the value.
///
/// # Examples
///
/// ```
/// use guard_rail::Bound;
///
/// assert_eq!(Bound::from(5u8), Bound::UInt(5));
/// assert_eq!(Bound::from(-3i32).to_string(), "-3");
/// assert_eq!(Bound::from("b").as_str(), Some("b"));
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, PartialOrd)]
pub enum Bound {
    Int(i64),
    UInt(u64),
    Float(f64),
    Str(String),
    Duration(Duration),
}

impl Bound {
    /// Signed view of integer bounds.
    #[inline]
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Bound::Int(v) => Some(v),
            Bound::UInt(v) => i64::try_from(v).ok(),
            _ => None,
        }
    }

    #[inline]
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Bound::Float(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Bound::Str(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    pub fn as_duration(&self) -> Option<Duration> {
        match *self {
            Bound::Duration(d) => Some(d),
            _ => None,
        }
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::Int(v) => write!(f, "{v}"),
            Bound::UInt(v) => write!(f, "{v}"),
            Bound::Float(v) => write!(f, "{v}"),
            Bound::Str(s) => f.write_str(s),
            Bound::Duration(d) => write!(f, "{d:?}"),
        }
    }
}

macro_rules! impl_bound_from {
    ($variant:ident as $target:ty: $($source:ty),+) => {
        $(
            impl From<$source> for Bound {
                #[inline]
                fn from(value: $source) -> Self {
                    Bound::$variant(value as $target)
                }
            }
        )+
    };
}

impl_bound_from!(Int as i64: i8, i16, i32, i64, isize);
impl_bound_from!(UInt as u64: u8, u16, u32, u64, usize);
impl_bound_from!(Float as f64: f32, f64);

impl From<&str> for Bound {
    #[inline]
    fn from(value: &str) -> Self {
        Bound::Str(value.into())
    }
}

impl From<String> for Bound {
    #[inline]
    fn from(value: String) -> Self {
        Bound::Str(value)
    }
}

impl From<Duration> for Bound {
    #[inline]
    fn from(value: Duration) -> Self {
        Bound::Duration(value)
    }
}
