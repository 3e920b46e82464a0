//! Structured field type and constructor functions
//!
//! Fields are key-value pairs appended to a record's JSON object alongside
//! the fixed keys. Constructors mirror the common scalar shapes; `any`
//! accepts anything serializable.

use serde::Serialize;
use serde_json::Value;

/// A single structured logging field.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub key: String,
    pub value: Value,
    skip: bool,
}

impl Field {
    pub fn new(key: impl Into<String>, value: Value) -> Self {
        Self {
            key: key.into(),
            value,
            skip: false,
        }
    }

    /// A `skip` field carries no data and is dropped at encode time.
    /// Distinct from the key, so an empty-keyed field still encodes.
    pub fn is_skip(&self) -> bool {
        self.skip
    }
}

/// String-valued field.
pub fn string(key: impl Into<String>, value: impl Into<String>) -> Field {
    Field::new(key, Value::String(value.into()))
}

/// Borrowed-string convenience, same encoding as [`string`].
pub fn str(key: impl Into<String>, value: &str) -> Field {
    Field::new(key, Value::String(value.to_string()))
}

/// Plain integer field, widened to 64 bits on encode.
pub fn int(key: impl Into<String>, value: i32) -> Field {
    Field::new(key, Value::Number(i64::from(value).into()))
}

/// Signed integer field.
pub fn int64(key: impl Into<String>, value: i64) -> Field {
    Field::new(key, Value::Number(value.into()))
}

/// Unsigned integer field.
pub fn uint64(key: impl Into<String>, value: u64) -> Field {
    Field::new(key, Value::Number(value.into()))
}

/// Floating-point field. Non-finite values encode as JSON null.
pub fn float64(key: impl Into<String>, value: f64) -> Field {
    let value = serde_json::Number::from_f64(value)
        .map(Value::Number)
        .unwrap_or(Value::Null);
    Field::new(key, value)
}

/// Boolean field.
pub fn boolean(key: impl Into<String>, value: bool) -> Field {
    Field::new(key, Value::Bool(value))
}

/// Error field under the fixed key `error`.
pub fn error(err: &dyn std::error::Error) -> Field {
    Field::new("error", Value::String(err.to_string()))
}

/// Any serializable value. Values that fail to serialize encode as null.
pub fn any<T: Serialize>(key: impl Into<String>, value: &T) -> Field {
    Field::new(key, serde_json::to_value(value).unwrap_or(Value::Null))
}

/// A field that encodes nothing. Useful as a placeholder in conditional
/// field lists.
pub fn skip() -> Field {
    Field {
        key: String::new(),
        value: Value::Null,
        skip: true,
    }
}
