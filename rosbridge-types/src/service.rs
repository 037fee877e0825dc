//! Service request and response wrappers
//!
//! A rosbridge service call is a JSON request sent with a service type and
//! a caller-chosen id, answered by a JSON response with a result flag.
//! [`ServiceRequest`] and [`ServiceResponse`] are the untyped forms; a
//! concrete service implements [`ServiceDefinition`] and provides typed
//! request/response values that rebuild themselves from the untyped ones.

use crate::{JsonPayload, Result, WrapperInit, impl_json_wrapper};
use serde_json::Value;
use std::str::FromStr;

/// The String representation of an empty service request or response in JSON.
pub const EMPTY_MESSAGE: &str = crate::json::EMPTY_JSON;

/// An untyped service request.
#[derive(Debug, Clone, Default)]
pub struct ServiceRequest {
    payload: JsonPayload,
    service_request_type: String,
    id: String,
}

impl_json_wrapper!(ServiceRequest, payload);

impl ServiceRequest {
    /// Wrap a payload as a request of the given service type.
    pub fn new(payload: JsonPayload, service_request_type: impl Into<String>) -> Self {
        Self {
            payload,
            service_request_type: service_request_type.into(),
            id: String::new(),
        }
    }

    /// Parse an untyped request from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if `text` is not a JSON object.
    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(Self::new(JsonPayload::from_json_str(text)?, ""))
    }

    /// Build an untyped request from a document.
    pub fn from_json_value(document: Value) -> Self {
        Self::new(JsonPayload::from_json_value(document), "")
    }

    /// Build a request from explicit construction parameters.
    ///
    /// # Errors
    ///
    /// See [`WrapperInit::resolve`].
    pub fn from_init(init: WrapperInit, service_request_type: impl Into<String>) -> Result<Self> {
        Ok(Self::new(JsonPayload::from_init(init)?, service_request_type))
    }

    /// The type of the service request (e.g., `"std_srvs/Empty"`).
    pub fn service_request_type(&self) -> &str {
        &self.service_request_type
    }

    /// Set the type of the service request.
    pub fn set_service_request_type(&mut self, service_request_type: impl Into<String>) {
        self.service_request_type = service_request_type.into();
    }

    /// The id correlating this request with its response. Empty until set.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Set the correlation id.
    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = id.into();
    }
}

impl FromStr for ServiceRequest {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_json_str(s)
    }
}

/// An untyped service response.
#[derive(Debug, Clone)]
pub struct ServiceResponse {
    payload: JsonPayload,
    service_response_type: String,
    result: bool,
}

impl_json_wrapper!(ServiceResponse, payload);

impl Default for ServiceResponse {
    fn default() -> Self {
        Self::new(JsonPayload::new(), "", true)
    }
}

impl ServiceResponse {
    /// Wrap a payload as a response of the given service type.
    pub fn new(payload: JsonPayload, service_response_type: impl Into<String>, result: bool) -> Self {
        Self {
            payload,
            service_response_type: service_response_type.into(),
            result,
        }
    }

    /// Parse an untyped, successful response from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if `text` is not a JSON object.
    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(Self::new(JsonPayload::from_json_str(text)?, "", true))
    }

    /// Build an untyped, successful response from a document.
    pub fn from_json_value(document: Value) -> Self {
        Self::new(JsonPayload::from_json_value(document), "", true)
    }

    /// Build a response from explicit construction parameters.
    ///
    /// # Errors
    ///
    /// See [`WrapperInit::resolve`].
    pub fn from_init(
        init: WrapperInit,
        service_response_type: impl Into<String>,
        result: bool,
    ) -> Result<Self> {
        Ok(Self::new(
            JsonPayload::from_init(init)?,
            service_response_type,
            result,
        ))
    }

    /// The type of the service response (e.g., `"std_srvs/Empty"`).
    pub fn service_response_type(&self) -> &str {
        &self.service_response_type
    }

    /// Set the type of the service response.
    pub fn set_service_response_type(&mut self, service_response_type: impl Into<String>) {
        self.service_response_type = service_response_type.into();
    }

    /// Whether the service server reported success.
    pub fn result(&self) -> bool {
        self.result
    }

    /// Set the result flag.
    pub fn set_result(&mut self, result: bool) {
        self.result = result;
    }
}

impl FromStr for ServiceResponse {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_json_str(s)
    }
}

/// A named rosbridge service with its request and response types.
pub trait ServiceDefinition: 'static + Send + Sync {
    /// The wire type of the service (e.g., `"std_srvs/Empty"`).
    const TYPE: &'static str;

    /// The request type.
    type Request: FromServiceRequest + Into<ServiceRequest>;

    /// The response type.
    type Response: FromServiceResponse + Into<ServiceResponse>;
}

/// Typed reconstruction of a service request.
///
/// All entry points converge on [`FromServiceRequest::from_json_value`],
/// which fills absent fields with their defaults and ignores unknown ones.
pub trait FromServiceRequest: Sized {
    /// Rebuild from a document.
    fn from_json_value(document: &Value) -> Self;

    /// Rebuild from an untyped request.
    fn from_service_request(request: &ServiceRequest) -> Self {
        Self::from_json_value(crate::JsonWrapper::as_json(request))
    }

    /// Rebuild from JSON text.
    ///
    /// Only the root is checked; fields are read by `from_json_value`.
    ///
    /// # Errors
    ///
    /// [`Error::Json`](crate::Error::Json) if `text` is malformed, and
    /// [`Error::NotAnObject`](crate::Error::NotAnObject) if it is well-formed
    /// but its root is not an object (`42`, `[]`, `"x"`, `null`).
    fn from_json_str(text: &str) -> Result<Self> {
        let request = ServiceRequest::from_json_str(text)?;
        Ok(Self::from_service_request(&request))
    }
}

/// Typed reconstruction of a service response.
///
/// Mirrors [`FromServiceRequest`].
pub trait FromServiceResponse: Sized {
    /// Rebuild from a document.
    fn from_json_value(document: &Value) -> Self;

    /// Rebuild from an untyped response.
    fn from_service_response(response: &ServiceResponse) -> Self {
        Self::from_json_value(crate::JsonWrapper::as_json(response))
    }

    /// Rebuild from JSON text.
    ///
    /// Only the root is checked; fields are read by `from_json_value`.
    ///
    /// # Errors
    ///
    /// [`Error::Json`](crate::Error::Json) if `text` is malformed, and
    /// [`Error::NotAnObject`](crate::Error::NotAnObject) if it is well-formed
    /// but its root is not an object (`42`, `[]`, `"x"`, `null`).
    fn from_json_str(text: &str) -> Result<Self> {
        let response = ServiceResponse::from_json_str(text)?;
        Ok(Self::from_service_response(&response))
    }
}
