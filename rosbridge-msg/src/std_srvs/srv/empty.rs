//! The `std_srvs/Empty` service.

use crate::std_srvs::ignore_fields;
use rosbridge_types::{
    FromServiceRequest, FromServiceResponse, JsonPayload, ServiceDefinition, ServiceRequest,
    ServiceResponse, Value,
};

/// The `std_srvs/Empty` service definition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Empty;

impl ServiceDefinition for Empty {
    const TYPE: &'static str = "std_srvs/Empty";
    type Request = EmptyRequest;
    type Response = EmptyResponse;
}

/// Empty request message
#[derive(Debug, Clone)]
pub struct EmptyRequest {
    inner: ServiceRequest,
}

impl_service_request!(EmptyRequest);

impl Default for EmptyRequest {
    fn default() -> Self {
        Self {
            inner: ServiceRequest::new(JsonPayload::new(), Empty::TYPE),
        }
    }
}

impl FromServiceRequest for EmptyRequest {
    // No fields: anything in the document is ignored.
    fn from_json_value(document: &Value) -> Self {
        ignore_fields(Empty::TYPE, document);
        Self::default()
    }
}

/// Empty response message
#[derive(Debug, Clone)]
pub struct EmptyResponse {
    inner: ServiceResponse,
}

impl_service_response!(EmptyResponse);

impl Default for EmptyResponse {
    fn default() -> Self {
        Self {
            inner: ServiceResponse::new(JsonPayload::new(), Empty::TYPE, true),
        }
    }
}

impl FromServiceResponse for EmptyResponse {
    fn from_json_value(document: &Value) -> Self {
        ignore_fields(Empty::TYPE, document);
        Self::default()
    }
}
