//! Decoded response payloads
//!
//! The backend's responses are dynamically shaped, so decoded JSON is
//! wrapped in a small tagged union with explicit shape helpers. Scenarios
//! ask the payload what it is instead of assuming structure.

use serde_json::{Map, Value};

/// A decoded response body
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Object(Map<String, Value>),
    Array(Vec<Value>),
    Scalar(Value),
    Empty,
}

impl From<Value> for Payload {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => Payload::Object(map),
            Value::Array(items) => Payload::Array(items),
            Value::Null => Payload::Empty,
            other => Payload::Scalar(other),
        }
    }
}

impl Payload {
    pub fn is_object(&self) -> bool {
        matches!(self, Payload::Object(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Payload::Array(_))
    }

    /// Look up a top-level field; `None` for non-object payloads
    pub fn get(&self, field: &str) -> Option<&Value> {
        match self {
            Payload::Object(map) => map.get(field),
            _ => None,
        }
    }

    /// A top-level field as a string slice, if present and a string
    pub fn str_field(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(Value::as_str)
    }

    /// Required fields absent from the payload
    ///
    /// A non-object payload is missing every required field.
    pub fn missing_fields<'a>(&self, required: &[&'a str]) -> Vec<&'a str> {
        match self {
            Payload::Object(map) => required
                .iter()
                .filter(|field| !map.contains_key(**field))
                .copied()
                .collect(),
            _ => required.to_vec(),
        }
    }
}
