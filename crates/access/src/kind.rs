//! Coarse runtime type tags for JSON values
//!
//! The accessor compares the *tag* of the resolved value against the tag of
//! the caller's default, so the default doubles as an expected shape: a `0`
//! default guarantees a number back, a `[]` default guarantees an array.

use serde_json::Value;
use std::fmt;

/// Runtime type tag of a (possibly absent) value.
///
/// Arrays and `null` get their own tags instead of collapsing into `object`.
/// An absent value is [`TypeTag::Undefined`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeTag {
    Array,
    Null,
    Object,
    String,
    Number,
    Boolean,
    Undefined,
}

impl TypeTag {
    /// Classify a value; `None` is treated as undefined.
    pub fn of(value: Option<&Value>) -> Self {
        match value {
            None => Self::Undefined,
            Some(Value::Null) => Self::Null,
            Some(Value::Bool(_)) => Self::Boolean,
            Some(Value::Number(_)) => Self::Number,
            Some(Value::String(_)) => Self::String,
            Some(Value::Array(_)) => Self::Array,
            Some(Value::Object(_)) => Self::Object,
        }
    }

    /// Lowercase tag name
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Array => "array",
            Self::Null => "null",
            Self::Object => "object",
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Undefined => "undefined",
        }
    }

    /// `true` for tags that mean "nothing there" (`undefined` and `null`)
    pub const fn is_nullish(&self) -> bool {
        matches!(self, Self::Undefined | Self::Null)
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<&Value> for TypeTag {
    fn from(value: &Value) -> Self {
        Self::of(Some(value))
    }
}

/// Check if a value is truthy.
///
/// `null`, `false`, `0`, `NaN` and `""` are falsy. Arrays and objects are
/// always truthy, including empty ones.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i != 0
            } else if let Some(u) = n.as_u64() {
                u != 0
            } else if let Some(f) = n.as_f64() {
                f != 0.0 && !f.is_nan()
            } else {
                true
            }
        }
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Check whether a value has zero own enumerable keys.
///
/// Returns `None` for falsy input: the question does not apply there, which is
/// not the same as "not empty". For truthy input the own keys are object
/// members, array elements or string characters; numbers and `true` have none.
pub fn is_empty(value: &Value) -> Option<bool> {
    if !is_truthy(value) {
        return None;
    }
    let empty = match value {
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::String(s) => s.is_empty(),
        Value::Null | Value::Bool(_) | Value::Number(_) => true,
    };
    Some(empty)
}
