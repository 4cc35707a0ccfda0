//! Typed field values and the shared coercion rules
//!
//! Coercion turns a trimmed raw substring into a [`Value`] according
//! to a field's declared [`Datatype`]. The same integer rule also
//! validates width cells during format loading.

mod record;

pub use record::Record;

use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::schema::Datatype;

/// Coercion failures. Non-fatal during decoding: the decoder reports
/// the offending line and moves on.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConversionError {
    /// Not a base-10 signed integer literal
    #[error("'{0}' is not a valid integer")]
    InvalidInteger(String),

    /// Booleans accept exactly "1" or "0"
    #[error("'{0}' is not '1' or '0' for a boolean")]
    InvalidBoolean(String),
}

/// A single decoded field value.
///
/// Serializes untagged, so records come out as plain JSON scalars.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Int(i64),
    Bool(bool),
    Text(String),
}

impl Value {
    /// Returns the integer value, if this is an Int.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the boolean value, if this is a Bool.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the text value, if this is Text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(v) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{}", v),
            Value::Bool(v) => write!(f, "{}", v),
            Value::Text(v) => write!(f, "{}", v),
        }
    }
}

/// Converts a trimmed raw substring into a typed value.
///
/// - INTEGER: base-10 signed 64-bit; an optional leading sign and
///   leading zeros are accepted
/// - BOOLEAN: exactly `"1"` is true, exactly `"0"` is false
/// - TEXT: identity
pub fn coerce(raw: &str, datatype: Datatype) -> Result<Value, ConversionError> {
    match datatype {
        Datatype::Integer => raw
            .parse::<i64>()
            .map(Value::Int)
            .map_err(|_| ConversionError::InvalidInteger(raw.to_string())),
        Datatype::Boolean => match raw {
            "1" => Ok(Value::Bool(true)),
            "0" => Ok(Value::Bool(false)),
            _ => Err(ConversionError::InvalidBoolean(raw.to_string())),
        },
        Datatype::Text => Ok(Value::Text(raw.to_string())),
    }
}
