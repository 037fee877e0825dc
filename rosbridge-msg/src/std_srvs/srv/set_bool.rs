//! The `std_srvs/SetBool` service.

use rosbridge_types::{
    FromServiceRequest, FromServiceResponse, JsonPayload, ServiceDefinition, ServiceRequest,
    ServiceResponse, Value, json,
};

/// The `std_srvs/SetBool` service definition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SetBool;

impl ServiceDefinition for SetBool {
    const TYPE: &'static str = "std_srvs/SetBool";
    type Request = SetBoolRequest;
    type Response = SetBoolResponse;
}

/// SetBool request message
///
/// The payload is fixed at construction; only the correlation id can be
/// changed afterwards.
///
/// ```compile_fail
/// use rosbridge_msg::rosbridge_types::ServiceRequest;
/// use rosbridge_msg::std_srvs::srv::SetBoolRequest;
///
/// let mut req = SetBoolRequest::new(true);
/// let _: &mut ServiceRequest = req.as_mut();
/// ```
#[derive(Debug, Clone)]
pub struct SetBoolRequest {
    inner: ServiceRequest,
    data: bool,
}

impl_service_request!(SetBoolRequest);

impl SetBoolRequest {
    /// JSON key of the requested value.
    pub const FIELD_DATA: &'static str = "data";

    /// Create a request carrying `data`.
    pub fn new(data: bool) -> Self {
        let mut document = json::empty_object();
        json::set_field(&mut document, Self::FIELD_DATA, data);
        Self {
            inner: ServiceRequest::new(JsonPayload::from_json_value(document), SetBool::TYPE),
            data,
        }
    }

    /// The requested value.
    pub fn data(&self) -> bool {
        self.data
    }
}

impl Default for SetBoolRequest {
    fn default() -> Self {
        Self::new(false)
    }
}

impl FromServiceRequest for SetBoolRequest {
    fn from_json_value(document: &Value) -> Self {
        Self::new(json::bool_field_or(document, Self::FIELD_DATA, false))
    }
}

/// SetBool response message
#[derive(Debug, Clone)]
pub struct SetBoolResponse {
    inner: ServiceResponse,
    success: bool,
    message: String,
}

impl_service_response!(SetBoolResponse);

impl SetBoolResponse {
    /// JSON key of the success flag.
    pub const FIELD_SUCCESS: &'static str = "success";
    /// JSON key of the message.
    pub const FIELD_MESSAGE: &'static str = "message";

    /// Create a response with the service's own `success` flag and message.
    ///
    /// This is independent of the transport-level result flag, which starts
    /// out `true`.
    pub fn new(success: bool, message: impl Into<String>) -> Self {
        let message = message.into();
        let mut document = json::empty_object();
        json::set_field(&mut document, Self::FIELD_SUCCESS, success);
        json::set_field(&mut document, Self::FIELD_MESSAGE, message.as_str());
        Self {
            inner: ServiceResponse::new(JsonPayload::from_json_value(document), SetBool::TYPE, true),
            success,
            message,
        }
    }

    /// Whether the requested change was applied.
    pub fn success(&self) -> bool {
        self.success
    }

    /// Informational message, e.g. for error reporting.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Default for SetBoolResponse {
    fn default() -> Self {
        Self::new(false, "")
    }
}

impl FromServiceResponse for SetBoolResponse {
    fn from_json_value(document: &Value) -> Self {
        Self::new(
            json::bool_field_or(document, Self::FIELD_SUCCESS, false),
            json::str_field_or(document, Self::FIELD_MESSAGE, ""),
        )
    }
}
