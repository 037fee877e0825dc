//! The `std_srvs/Trigger` service.

use crate::std_srvs::ignore_fields;
use rosbridge_types::{
    FromServiceRequest, FromServiceResponse, JsonPayload, ServiceDefinition, ServiceRequest,
    ServiceResponse, Value, json,
};

/// The `std_srvs/Trigger` service definition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Trigger;

impl ServiceDefinition for Trigger {
    const TYPE: &'static str = "std_srvs/Trigger";
    type Request = TriggerRequest;
    type Response = TriggerResponse;
}

/// Trigger request message
#[derive(Debug, Clone)]
pub struct TriggerRequest {
    inner: ServiceRequest,
}

impl_service_request!(TriggerRequest);

impl Default for TriggerRequest {
    fn default() -> Self {
        Self {
            inner: ServiceRequest::new(JsonPayload::new(), Trigger::TYPE),
        }
    }
}

impl FromServiceRequest for TriggerRequest {
    // Empty request - no fields to read
    fn from_json_value(document: &Value) -> Self {
        ignore_fields(Trigger::TYPE, document);
        Self::default()
    }
}

/// Trigger response message
#[derive(Debug, Clone)]
pub struct TriggerResponse {
    inner: ServiceResponse,
    success: bool,
    message: String,
}

impl_service_response!(TriggerResponse);

impl TriggerResponse {
    /// JSON key of the success flag.
    pub const FIELD_SUCCESS: &'static str = "success";
    /// JSON key of the message.
    pub const FIELD_MESSAGE: &'static str = "message";

    /// Create a response with the service's own `success` flag and message.
    pub fn new(success: bool, message: impl Into<String>) -> Self {
        let message = message.into();
        let mut document = json::empty_object();
        json::set_field(&mut document, Self::FIELD_SUCCESS, success);
        json::set_field(&mut document, Self::FIELD_MESSAGE, message.as_str());
        Self {
            inner: ServiceResponse::new(JsonPayload::from_json_value(document), Trigger::TYPE, true),
            success,
            message,
        }
    }

    /// Whether the trigger succeeded.
    pub fn success(&self) -> bool {
        self.success
    }

    /// Informational message, e.g. for error reporting.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Default for TriggerResponse {
    fn default() -> Self {
        Self::new(false, "")
    }
}

impl FromServiceResponse for TriggerResponse {
    fn from_json_value(document: &Value) -> Self {
        Self::new(
            json::bool_field_or(document, Self::FIELD_SUCCESS, false),
            json::str_field_or(document, Self::FIELD_MESSAGE, ""),
        )
    }
}
