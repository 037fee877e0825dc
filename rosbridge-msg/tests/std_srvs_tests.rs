//! Reconstruction tests for the std_srvs services

use rosbridge_msg::rosbridge_types::{
    Error, FromServiceRequest, FromServiceResponse, JsonWrapper, ServiceDefinition,
    ServiceRequest, ServiceResponse,
};
use rosbridge_msg::std_srvs::srv::*;
use serde_json::json;

// =============================================================================
// Empty
// =============================================================================

#[test]
fn test_empty_type_tag() {
    assert_eq!(Empty::TYPE, "std_srvs/Empty");
}

#[test]
fn test_empty_request_from_any_text_is_default() {
    for text in ["{}", r#"{"unexpected":1}"#, r#"{"a":{"b":[1,2,3]},"c":null}"#] {
        let req = EmptyRequest::from_json_str(text).unwrap();
        assert_eq!(req, EmptyRequest::default());
        assert_eq!(req.as_json_str(), "{}");
        assert_eq!(req.as_ref().service_request_type(), Empty::TYPE);
    }
}

#[test]
fn test_empty_response_from_any_text_is_default() {
    let resp = EmptyResponse::from_json_str(r#"{"unexpected":1}"#).unwrap();
    assert_eq!(resp, EmptyResponse::default());
    assert!(resp.as_ref().result());
}

#[test]
fn test_empty_entry_points_converge() {
    let base = ServiceRequest::from_json_value(json!({"x": 1}));
    let from_base = EmptyRequest::from_service_request(&base);
    let from_doc = EmptyRequest::from_json_value(&json!({"x": 1}));
    let from_text = EmptyRequest::from_json_str(r#"{"x":1}"#).unwrap();
    assert_eq!(from_base, from_doc);
    assert_eq!(from_doc, from_text);
}

#[test]
fn test_empty_malformed_text_fails() {
    assert!(EmptyRequest::from_json_str("{").is_err());
    assert!(EmptyResponse::from_json_str("[]").is_err());
}

#[test]
fn test_empty_rejects_non_object_root() {
    assert!(matches!(
        EmptyRequest::from_json_str("42"),
        Err(Error::NotAnObject { found: "number" })
    ));
    assert!(matches!(
        EmptyResponse::from_json_str("null"),
        Err(Error::NotAnObject { found: "null" })
    ));
    assert!(matches!(
        SetBoolRequest::from_json_str(r#""data""#),
        Err(Error::NotAnObject { found: "string" })
    ));
}

#[test]
fn test_empty_clone() {
    let mut req = EmptyRequest::default();
    req.set_id("call_service:/reset:4");
    let copy = req.clone();
    assert_eq!(copy, req);
    assert_eq!(copy.id(), "call_service:/reset:4");

    let boxed = req.clone_wrapper();
    assert!(boxed.json_eq(&req));
}

// =============================================================================
// SetBool
// =============================================================================

#[test]
fn test_set_bool_reads_fields() {
    let req = SetBoolRequest::from_json_str(r#"{"data":true}"#).unwrap();
    assert!(req.data());
    assert_eq!(req, SetBoolRequest::new(true));
}

#[test]
fn test_set_bool_missing_fields_default() {
    let req = SetBoolRequest::from_json_str("{}").unwrap();
    assert!(!req.data());
    assert_eq!(req.as_json_str(), r#"{"data":false}"#);

    let resp = SetBoolResponse::from_json_value(&json!({"success": true}));
    assert!(resp.success());
    assert_eq!(resp.message(), "");
}

#[test]
fn test_set_bool_mistyped_field_defaults() {
    let req = SetBoolRequest::from_json_value(&json!({"data": "yes", "extra": 3}));
    assert!(!req.data());
    assert_eq!(req, SetBoolRequest::default());
}

#[test]
fn test_set_bool_response_from_untyped() {
    let base: ServiceResponse = r#"{"success":true,"message":"enabled"}"#.parse().unwrap();
    let resp = SetBoolResponse::from_service_response(&base);
    assert!(resp.success());
    assert_eq!(resp.message(), "enabled");
    assert_eq!(resp.as_json_str(), r#"{"message":"enabled","success":true}"#);
    assert_eq!(resp.as_ref().service_response_type(), SetBool::TYPE);
}

#[test]
fn test_set_bool_into_untyped_keeps_text() {
    let req = SetBoolRequest::new(true);
    let text = req.as_json_str().to_string();
    let untyped: ServiceRequest = req.into();
    assert_eq!(untyped.as_json_str(), text);
    assert_eq!(untyped.service_request_type(), "std_srvs/SetBool");
}

#[test]
fn test_set_bool_metadata_setters_keep_payload() {
    let mut req = SetBoolRequest::new(true);
    req.set_id("call_service:/enable:1");
    assert_eq!(req.id(), "call_service:/enable:1");
    assert!(req.data());
    assert_eq!(req.as_json_str(), r#"{"data":true}"#);
    assert_eq!(req.as_json(), &json!({"data": true}));

    let mut resp = SetBoolResponse::new(true, "enabled");
    resp.set_result(false);
    resp.set_service_response_type("custom/SetBool");
    assert!(!resp.result());
    assert_eq!(resp.as_ref().service_response_type(), "custom/SetBool");
    assert!(resp.success());
    assert_eq!(resp.message(), "enabled");
    assert_eq!(resp.as_json_str(), r#"{"message":"enabled","success":true}"#);

    // Metadata is not part of equality.
    assert_eq!(resp, SetBoolResponse::new(true, "enabled"));
}

// =============================================================================
// Trigger
// =============================================================================

#[test]
fn test_trigger_round_trip_through_text() {
    let resp = TriggerResponse::new(true, "triggered");
    let again = TriggerResponse::from_json_str(resp.as_json_str()).unwrap();
    assert_eq!(again, resp);
    assert!(again.success());
    assert_eq!(again.message(), "triggered");
}

#[test]
fn test_trigger_request_ignores_content() {
    let req = TriggerRequest::from_json_str(r#"{"anything":[1]}"#).unwrap();
    assert_eq!(req, TriggerRequest::default());
    assert_eq!(req.as_json_str(), "{}");
    assert_eq!(Trigger::TYPE, "std_srvs/Trigger");
}

// =============================================================================
// Generic use through ServiceDefinition
// =============================================================================

fn default_request_type<S: ServiceDefinition>() -> String
where
    S::Request: Default,
{
    let request: ServiceRequest = S::Request::default().into();
    request.service_request_type().to_string()
}

#[test]
fn test_service_definition_generic() {
    assert_eq!(default_request_type::<Empty>(), Empty::TYPE);
    assert_eq!(default_request_type::<SetBool>(), SetBool::TYPE);
    assert_eq!(default_request_type::<Trigger>(), Trigger::TYPE);
}
