//! Immutable JSON wrappers
//!
//! Every message and service value exchanged with rosbridge is a JSON
//! object. A [`JsonPayload`] pairs the canonical text of that object with
//! its parsed document; both are fixed at construction. Wrapper kinds
//! ([`Primitive`](crate::Primitive), [`ServiceRequest`](crate::ServiceRequest),
//! [`ServiceResponse`](crate::ServiceResponse) and typed service values)
//! hold a payload plus a few metadata fields and implement [`JsonWrapper`].
//!
//! # Equality
//!
//! Two wrappers are equal if and only if their canonical texts are equal.
//! Metadata (type tags, ids, result flags) does not take part in equality
//! or hashing.
//!
//! # Threads
//!
//! Wrappers are plain owned values and are `Send + Sync`. Metadata setters
//! take `&mut self`, so a setter can never race a read of the same value.

use crate::{Result, json};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::{
    collections::hash_map::DefaultHasher,
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};

/// Construction parameters for a [`JsonPayload`].
///
/// Precedence:
///
/// | text | document | canonical text | document |
/// |------|----------|----------------|----------|
/// | none | none | `{}` | `{}` |
/// | some | none | text | parsed from text |
/// | none | some | serialized document | document |
/// | some | some | text | document as given |
///
/// When both are given the document is not re-derived from the text; the
/// caller is responsible for them describing the same object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WrapperInit {
    /// Canonical JSON text
    pub text: Option<String>,
    /// Parsed document
    pub document: Option<Value>,
}

impl WrapperInit {
    /// Empty parameters, resolving to `{}`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the canonical text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set the document.
    pub fn with_document(mut self, document: Value) -> Self {
        self.document = Some(document);
        self
    }

    /// Resolve into `(canonical text, document)`.
    ///
    /// # Errors
    ///
    /// Fails only when text is given without a document and does not parse
    /// as a JSON object.
    pub fn resolve(self) -> Result<(String, Value)> {
        match (self.text, self.document) {
            (None, None) => Ok((json::EMPTY_JSON.to_string(), json::empty_object())),
            (Some(text), None) => {
                tracing::trace!(len = text.len(), "parsing wrapper text");
                let document = json::parse(&text)?;
                Ok((text, document))
            }
            (None, Some(document)) => Ok((json::serialize(&document), document)),
            (Some(text), Some(document)) => Ok((text, document)),
        }
    }
}

/// Canonical JSON text and its parsed document.
#[derive(Debug, Clone)]
pub struct JsonPayload {
    text: String,
    document: Value,
}

impl JsonPayload {
    /// An empty object payload, `{}`.
    pub fn new() -> Self {
        Self {
            text: json::EMPTY_JSON.to_string(),
            document: json::empty_object(),
        }
    }

    /// Build a payload from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if `text` is not a JSON object.
    pub fn from_json_str(text: &str) -> Result<Self> {
        Self::from_init(WrapperInit::new().with_text(text))
    }

    /// Build a payload from a document; the canonical text is its
    /// serialization.
    pub fn from_json_value(document: Value) -> Self {
        Self {
            text: json::serialize(&document),
            document,
        }
    }

    /// Build a payload from explicit construction parameters.
    ///
    /// # Errors
    ///
    /// See [`WrapperInit::resolve`].
    pub fn from_init(init: WrapperInit) -> Result<Self> {
        let (text, document) = init.resolve()?;
        Ok(Self { text, document })
    }

    /// The parsed document.
    pub fn as_json(&self) -> &Value {
        &self.document
    }

    /// The canonical text.
    pub fn as_json_str(&self) -> &str {
        &self.text
    }

    /// Consume the payload, returning the document.
    pub fn into_json(self) -> Value {
        self.document
    }
}

impl Default for JsonPayload {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for JsonPayload {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for JsonPayload {}

impl Hash for JsonPayload {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

impl fmt::Display for JsonPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl FromStr for JsonPayload {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_json_str(s)
    }
}

impl From<Value> for JsonPayload {
    fn from(document: Value) -> Self {
        Self::from_json_value(document)
    }
}

impl Serialize for JsonPayload {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.document.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for JsonPayload {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let document = Value::deserialize(deserializer)?;
        if !document.is_object() {
            return Err(serde::de::Error::custom(format!(
                "expected a JSON object, found {}",
                json::kind_of(&document)
            )));
        }
        Ok(Self::from_json_value(document))
    }
}

/// Common behavior of all JSON-backed values.
pub trait JsonWrapper: fmt::Debug + Send + Sync {
    /// The wrapped payload.
    fn payload(&self) -> &JsonPayload;

    /// Create an independent copy behind a trait object.
    ///
    /// The copy carries the same canonical text and metadata.
    fn clone_wrapper(&self) -> Box<dyn JsonWrapper>;

    /// The parsed document.
    fn as_json(&self) -> &Value {
        self.payload().as_json()
    }

    /// The canonical text.
    fn as_json_str(&self) -> &str {
        self.payload().as_json_str()
    }

    /// Compare with any other wrapper kind by canonical text.
    fn json_eq(&self, other: &dyn JsonWrapper) -> bool {
        std::ptr::eq(self.payload(), other.payload()) || self.as_json_str() == other.as_json_str()
    }

    /// Hash of the canonical text, consistent with [`JsonWrapper::json_eq`].
    fn json_hash(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.payload().hash(&mut hasher);
        hasher.finish()
    }
}

impl Clone for Box<dyn JsonWrapper> {
    fn clone(&self) -> Self {
        self.clone_wrapper()
    }
}

impl PartialEq for dyn JsonWrapper {
    fn eq(&self, other: &Self) -> bool {
        self.json_eq(other)
    }
}

impl JsonWrapper for JsonPayload {
    fn payload(&self) -> &JsonPayload {
        self
    }

    fn clone_wrapper(&self) -> Box<dyn JsonWrapper> {
        Box::new(self.clone())
    }
}

/// Implement [`JsonWrapper`] and the text-based `PartialEq`, `Eq`, `Hash`
/// and `Display` for a type by delegating to one of its fields.
///
/// The field may be a [`JsonPayload`] or any other [`JsonWrapper`]. The
/// type must implement `Clone`.
#[macro_export]
macro_rules! impl_json_wrapper {
    ($ty: ty, $field: ident) => {
        impl $crate::JsonWrapper for $ty {
            fn payload(&self) -> &$crate::JsonPayload {
                $crate::JsonWrapper::payload(&self.$field)
            }

            fn clone_wrapper(&self) -> ::std::boxed::Box<dyn $crate::JsonWrapper> {
                ::std::boxed::Box::new(::std::clone::Clone::clone(self))
            }
        }

        impl ::std::cmp::PartialEq for $ty {
            fn eq(&self, other: &Self) -> bool {
                $crate::JsonWrapper::payload(self) == $crate::JsonWrapper::payload(other)
            }
        }

        impl ::std::cmp::Eq for $ty {}

        impl ::std::hash::Hash for $ty {
            fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
                ::std::hash::Hash::hash($crate::JsonWrapper::payload(self), state);
            }
        }

        impl ::std::fmt::Display for $ty {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Display::fmt($crate::JsonWrapper::payload(self), f)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_is_empty_object() {
        let payload = JsonPayload::default();
        assert_eq!(payload.as_json_str(), "{}");
        assert_eq!(payload.as_json(), &json!({}));
    }

    #[test]
    fn test_init_text_only_parses_text() {
        let payload = JsonPayload::from_init(WrapperInit::new().with_text(r#"{"x": 1}"#)).unwrap();
        assert_eq!(payload.as_json_str(), r#"{"x": 1}"#);
        assert_eq!(payload.as_json(), &json!({"x": 1}));
    }

    #[test]
    fn test_init_document_only_serializes() {
        let payload = JsonPayload::from_init(WrapperInit::new().with_document(json!({"x": 1}))).unwrap();
        assert_eq!(payload.as_json_str(), r#"{"x":1}"#);
    }

    #[test]
    fn test_init_both_keeps_document_as_given() {
        let payload = JsonPayload::from_init(
            WrapperInit::new()
                .with_text(r#"{"x": 1}"#)
                .with_document(json!({"y": 2})),
        )
        .unwrap();
        assert_eq!(payload.as_json_str(), r#"{"x": 1}"#);
        assert_eq!(payload.as_json(), &json!({"y": 2}));
    }

    #[test]
    fn test_init_malformed_text_fails() {
        assert!(JsonPayload::from_init(WrapperInit::new().with_text("{")).is_err());
        assert!("nope".parse::<JsonPayload>().is_err());
    }

    #[test]
    fn test_equality_is_textual() {
        let a: JsonPayload = r#"{"a":1}"#.parse().unwrap();
        let b: JsonPayload = r#"{"a":1}"#.parse().unwrap();
        let spaced: JsonPayload = r#"{"a": 1}"#.parse().unwrap();
        assert_eq!(a, b);
        assert_eq!(a.json_hash(), b.json_hash());
        assert_ne!(a, spaced);
        assert_eq!(a.as_json(), spaced.as_json());
    }

    #[test]
    fn test_serde_round_trip_rejects_non_object() {
        let payload: JsonPayload = serde_json::from_value(json!({"k": "v"})).unwrap();
        assert_eq!(payload.to_string(), r#"{"k":"v"}"#);
        assert!(serde_json::from_value::<JsonPayload>(json!([1])).is_err());
        assert_eq!(serde_json::to_value(&payload).unwrap(), json!({"k": "v"}));
    }

    #[test]
    fn test_boxed_clone_is_equal() {
        let payload: JsonPayload = r#"{"a":true}"#.parse().unwrap();
        let boxed: Box<dyn JsonWrapper> = Box::new(payload.clone());
        let copy = boxed.clone();
        assert!(copy.json_eq(&payload));
        assert!(*copy == *boxed);
    }
}
