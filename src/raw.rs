//! Raw stored representation of an enum value.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// The representation an enum value has outside of this crate: the literal
/// ordinal integer or the literal symbol text.
///
/// This is what a persistence column holds, and what coercion accepts when it
/// is not handed an [`EnumValue`](crate::EnumValue) directly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    /// An integer, usually an ordinal.
    Int(i64),
    /// Text, usually a symbol.
    Text(String),
}

impl RawValue {
    /// Interpret this value as an ordinal.
    ///
    /// Text only qualifies when it is the canonical decimal form of an
    /// integer: `"2"` and `"-1"` do, `"02"`, `"+2"` and `" 2"` do not.
    pub fn as_ordinal(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            Self::Text(s) => s
                .parse::<i64>()
                .ok()
                .filter(|n| n.to_string() == *s),
        }
    }

    /// Interpret this value as a symbol. Integers become their decimal text.
    pub fn as_symbol(&self) -> Cow<'_, str> {
        match self {
            Self::Int(i) => Cow::Owned(i.to_string()),
            Self::Text(s) => Cow::Borrowed(s),
        }
    }
}

impl std::fmt::Display for RawValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{}", i),
            Self::Text(s) => write!(f, "{:?}", s),
        }
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for RawValue {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}
