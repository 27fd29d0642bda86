//! Validation error types and field parsing helpers

use std::fmt;

use serde_json::{Map, Value};

/// Validation error for request payloads.
///
/// Every variant maps to a 422 at the HTTP boundary; a body that is not a
/// JSON object at all is rejected a layer up as a 400.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required field is absent (or JSON null)
    Missing { field: &'static str },

    /// Field is present but empty
    Empty { field: &'static str },

    /// Field has the wrong JSON type
    WrongType {
        field: &'static str,
        expected: &'static str,
    },

    /// Integer field outside its allowed range
    OutOfRange {
        field: &'static str,
        min: i64,
        max: i64,
    },

    /// Category id does not exist in the store
    UnknownCategory { id: i64 },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { field } => write!(f, "{} is required", field),
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::WrongType { field, expected } => {
                write!(f, "{} must be {}", field, expected)
            }
            Self::OutOfRange { field, min, max } => {
                write!(f, "{} must be between {} and {}", field, min, max)
            }
            Self::UnknownCategory { id } => write!(f, "no category with id {}", id),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Parse a non-empty string field.
pub(crate) fn require_text(
    body: &Map<String, Value>,
    field: &'static str,
) -> Result<String, ValidationError> {
    match body.get(field) {
        None | Some(Value::Null) => Err(ValidationError::Missing { field }),
        Some(Value::String(s)) if s.is_empty() => Err(ValidationError::Empty { field }),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(ValidationError::WrongType {
            field,
            expected: "a string",
        }),
    }
}

/// Parse an integer field that may arrive as a JSON integer or an integer
/// string ("5"). Floats and anything else are rejected, never truncated.
pub(crate) fn require_int(
    body: &Map<String, Value>,
    field: &'static str,
) -> Result<i64, ValidationError> {
    match body.get(field) {
        None | Some(Value::Null) => Err(ValidationError::Missing { field }),
        Some(value) => parse_id(value, field),
    }
}

/// Parse a single id value: a JSON integer or an integer string.
pub(crate) fn parse_id(value: &Value, field: &'static str) -> Result<i64, ValidationError> {
    match value {
        Value::Number(n) => n.as_i64().ok_or(ValidationError::WrongType {
            field,
            expected: "an integer",
        }),
        Value::String(s) if s.is_empty() => Err(ValidationError::Empty { field }),
        Value::String(s) => s.trim().parse().map_err(|_| ValidationError::WrongType {
            field,
            expected: "an integer",
        }),
        _ => Err(ValidationError::WrongType {
            field,
            expected: "an integer",
        }),
    }
}
