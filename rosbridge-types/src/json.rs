//! JSON document boundary
//!
//! All parsing and serialization goes through this module so the wrapper
//! types never touch `serde_json` directly. Documents are
//! [`serde_json::Value`] trees whose root is an object.

use crate::{Error, Result};
use serde_json::{Map, Value};

/// The String representation of an empty message in JSON.
pub const EMPTY_JSON: &str = "{}";

/// Returns an empty JSON object.
pub fn empty_object() -> Value {
    Value::Object(Map::new())
}

/// Parse JSON text into a document.
///
/// # Errors
///
/// Returns [`Error::Json`] if `text` is not valid JSON and
/// [`Error::NotAnObject`] if the root is anything other than an object.
pub fn parse(text: &str) -> Result<Value> {
    let value: Value = serde_json::from_str(text)?;
    if value.is_object() {
        Ok(value)
    } else {
        Err(Error::NotAnObject {
            found: kind_of(&value),
        })
    }
}

/// Serialize a document to compact JSON text.
pub fn serialize(document: &Value) -> String {
    // Display on Value is infallible and produces the compact form.
    document.to_string()
}

/// Get a field of an object document.
pub fn get_field<'a>(document: &'a Value, name: &str) -> Option<&'a Value> {
    document.as_object()?.get(name)
}

/// Set a field of an object document.
///
/// A non-object root is replaced by an empty object first.
pub fn set_field(document: &mut Value, name: &str, value: impl Into<Value>) {
    if !document.is_object() {
        *document = empty_object();
    }
    if let Value::Object(map) = document {
        map.insert(name.to_string(), value.into());
    }
}

/// Read a boolean field, falling back to `default` when absent or mistyped.
pub fn bool_field_or(document: &Value, name: &str, default: bool) -> bool {
    match get_field(document, name) {
        Some(Value::Bool(b)) => *b,
        Some(other) => {
            tracing::debug!(field = name, found = kind_of(other), "mistyped field, using default");
            default
        }
        None => {
            tracing::debug!(field = name, "missing field, using default");
            default
        }
    }
}

/// Read a string field, falling back to `default` when absent or mistyped.
pub fn str_field_or(document: &Value, name: &str, default: &str) -> String {
    match get_field(document, name) {
        Some(Value::String(s)) => s.clone(),
        Some(other) => {
            tracing::debug!(field = name, found = kind_of(other), "mistyped field, using default");
            default.to_string()
        }
        None => {
            tracing::debug!(field = name, "missing field, using default");
            default.to_string()
        }
    }
}

pub(crate) fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
