mod compare;
mod float;
mod tag;


use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

// re-exports
pub use compare::value_cmp;
pub use float::{Float32, Float64};
pub use tag::ValueTag;

///
/// Value
///
/// One raw field value as extracted from a single record.
///
/// All values of one extraction run notionally share a kind, but nothing is
/// assumed: the comparator handles every kind pairing and `Null` defensively.
///
/// Null → the record carries no value for the field (SQL NULL).
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Value {
    Float32(Float32),
    Float64(Float64),
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    Null,
    Text(String),
}

impl Value {
    ///
    /// TYPES
    ///

    /// Stable kind tag used by schema checks and diagnostics.
    #[must_use]
    pub const fn tag(&self) -> ValueTag {
        tag::value_tag(self)
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns true for the numeric variants (integers and floats).
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        !matches!(self, Self::Null | Self::Text(_))
    }

    ///
    /// CONVERSION
    ///

    #[must_use]
    pub const fn as_text(&self) -> Option<&str> {
        if let Self::Text(s) = self {
            Some(s.as_str())
        } else {
            None
        }
    }

    ///
    /// COMPARISON
    ///

    /// Total comparator over raw values; see [`value_cmp`].
    #[must_use]
    pub fn cmp_values(left: &Self, right: &Self) -> Ordering {
        compare::value_cmp(left, right)
    }
}

macro_rules! impl_from_for {
    ( $( $type:ty => $variant:ident ),* $(,)? ) => {
        $(
            impl From<$type> for Value {
                fn from(v: $type) -> Self {
                    Self::$variant(v.into())
                }
            }
        )*
    };
}

impl_from_for! {
    Float32 => Float32,
    Float64 => Float64,
    i8      => Int8,
    i16     => Int16,
    i32     => Int32,
    i64     => Int64,
    &str    => Text,
    String  => Text,
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Self::Float32(Float32::new(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float64(Float64::new(v))
    }
}

// Absent field values arrive as `Option::None` and map to `Null`.
impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}
