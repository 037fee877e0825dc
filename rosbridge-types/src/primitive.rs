//! Wrappers for non-native ROS primitives
//!
//! Types such as `time` or `duration` travel as JSON objects rather than
//! scalars. A [`Primitive`] carries that object together with the name of
//! its wire type. The unsigned codec for ROS' `uintN` fields lives in
//! [`crate::unsigned`].

use crate::{JsonPayload, Result, WrapperInit, impl_json_wrapper};
use serde_json::Value;

/// A JSON object tagged with its ROS primitive type.
///
/// The type tag is metadata next to the payload, not derived from it;
/// callers keep the two consistent.
#[derive(Debug, Clone, Default)]
pub struct Primitive {
    payload: JsonPayload,
    primitive_type: String,
}

impl_json_wrapper!(Primitive, payload);

impl Primitive {
    /// The String representation of an empty primitive in JSON.
    pub const EMPTY_MESSAGE: &'static str = crate::json::EMPTY_JSON;

    /// An empty primitive of the given type.
    pub fn new(primitive_type: impl Into<String>) -> Self {
        Self::with_payload(JsonPayload::new(), primitive_type)
    }

    /// Wrap an existing payload.
    pub fn with_payload(payload: JsonPayload, primitive_type: impl Into<String>) -> Self {
        Self {
            payload,
            primitive_type: primitive_type.into(),
        }
    }

    /// Parse a primitive of the given type from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if `text` is not a JSON object.
    pub fn from_json_str(text: &str, primitive_type: impl Into<String>) -> Result<Self> {
        Ok(Self::with_payload(
            JsonPayload::from_json_str(text)?,
            primitive_type,
        ))
    }

    /// Build a primitive of the given type from a document.
    pub fn from_json_value(document: Value, primitive_type: impl Into<String>) -> Self {
        Self::with_payload(JsonPayload::from_json_value(document), primitive_type)
    }

    /// Build a primitive from explicit construction parameters.
    ///
    /// # Errors
    ///
    /// See [`WrapperInit::resolve`].
    pub fn from_init(init: WrapperInit, primitive_type: impl Into<String>) -> Result<Self> {
        Ok(Self::with_payload(JsonPayload::from_init(init)?, primitive_type))
    }

    /// The type of the primitive (e.g., `"time"`).
    pub fn primitive_type(&self) -> &str {
        &self.primitive_type
    }

    /// Set the type of the primitive.
    pub fn set_primitive_type(&mut self, primitive_type: impl Into<String>) {
        self.primitive_type = primitive_type.into();
    }
}
