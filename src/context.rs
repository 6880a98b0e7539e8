//! Request-scoped claims handed to every resolver.
//!
//! Callers supply the context as a loose JSON object (for example
//! `{"is_anonymous": true}`). It is converted once into a [`Viewer`] before
//! execution and attached to the request; resolvers only ever read it.

use serde_json::{Map, Value};

use crate::error::{GqlMockError, Result};

/// Context key that marks the caller as anonymous.
pub const IS_ANONYMOUS_KEY: &str = "is_anonymous";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewer {
    pub anonymous: bool,
}

impl Viewer {
    pub fn anonymous() -> Self {
        Self { anonymous: true }
    }

    pub fn authenticated() -> Self {
        Self { anonymous: false }
    }

    pub fn from_map(map: &Map<String, Value>) -> Self {
        Self {
            anonymous: map.get(IS_ANONYMOUS_KEY).is_some_and(is_truthy),
        }
    }

    /// Builds a viewer from a JSON value, which must be an object or null.
    pub fn from_json(value: &Value) -> Result<Self> {
        match value {
            Value::Null => Ok(Self::default()),
            Value::Object(map) => Ok(Self::from_map(map)),
            other => Err(GqlMockError::InvalidContext(format!(
                "expected a JSON object, got {}",
                other
            ))),
        }
    }

    /// Parses a viewer from JSON text such as `{"is_anonymous": true}`.
    pub fn parse(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_json(&value)
    }
}

/// Loose truthiness: empty, zero, false and null are falsy.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}
