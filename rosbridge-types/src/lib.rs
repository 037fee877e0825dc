//! rosbridge value types
//!
//! This crate provides the immutable, JSON-backed values exchanged with a
//! rosbridge server: messages and services travel as JSON objects over a
//! WebSocket, and every value here pairs a canonical JSON text with its
//! parsed document.
//!
//! # Modules
//!
//! - [`json`]: the JSON document boundary (parse, serialize, field access)
//! - [`unsigned`]: bit-exact conversion for ROS `uint8` .. `uint64` fields
//! - [`JsonPayload`], [`JsonWrapper`], [`WrapperInit`]: the wrapper core
//! - [`Primitive`]: non-native ROS primitives tagged with their type
//! - [`ServiceRequest`], [`ServiceResponse`], [`ServiceDefinition`]: services
//!
//! # Features
//!
//! - `logging`: enable [`logger::init_logging`] (tracing-subscriber based)
//!
//! # Example
//!
//! ```
//! use rosbridge_types::{JsonWrapper, ServiceRequest};
//!
//! let mut req: ServiceRequest = r#"{"data":true}"#.parse()?;
//! req.set_service_request_type("std_srvs/SetBool");
//! req.set_id("call_service:/enable:1");
//! assert_eq!(req.as_json_str(), r#"{"data":true}"#);
//! # Ok::<(), rosbridge_types::Error>(())
//! ```

mod error;
pub mod json;
#[cfg(feature = "logging")]
pub mod logger;
mod primitive;
pub mod service;
pub mod unsigned;
mod wrapper;

pub use error::{Error, Result};
pub use primitive::Primitive;
pub use service::{
    FromServiceRequest, FromServiceResponse, ServiceDefinition, ServiceRequest, ServiceResponse,
};
pub use wrapper::{JsonPayload, JsonWrapper, WrapperInit};

// Re-export the document type so dependents need not name serde_json.
pub use serde_json::{self, Value};
