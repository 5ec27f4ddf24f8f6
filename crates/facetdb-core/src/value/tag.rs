use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::fmt;

///
/// ValueTag
///
/// Stable value-kind tag shared by schema field declarations, schema
/// checks, and diagnostics.
///

#[repr(u8)]
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum ValueTag {
    Float32 = 1,
    Float64 = 2,
    Int8 = 3,
    Int16 = 4,
    Int32 = 5,
    Int64 = 6,
    Null = 7,
    Text = 8,
}

impl ValueTag {
    /// Stable byte tag for this kind.
    #[must_use]
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    /// Stable human-readable kind label for diagnostics.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Float32 => "Float32",
            Self::Float64 => "Float64",
            Self::Int8 => "Int8",
            Self::Int16 => "Int16",
            Self::Int32 => "Int32",
            Self::Int64 => "Int64",
            Self::Null => "Null",
            Self::Text => "Text",
        }
    }
}

impl fmt::Display for ValueTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Stable kind tag for a value.
#[must_use]
pub(super) const fn value_tag(value: &Value) -> ValueTag {
    match value {
        Value::Float32(_) => ValueTag::Float32,
        Value::Float64(_) => ValueTag::Float64,
        Value::Int8(_) => ValueTag::Int8,
        Value::Int16(_) => ValueTag::Int16,
        Value::Int32(_) => ValueTag::Int32,
        Value::Int64(_) => ValueTag::Int64,
        Value::Null => ValueTag::Null,
        Value::Text(_) => ValueTag::Text,
    }
}
