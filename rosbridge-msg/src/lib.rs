//! rosbridge service definitions.
//!
//! Typed request/response values for well-known ROS services, built on
//! [`rosbridge_types`]. Each service is a unit struct implementing
//! [`ServiceDefinition`](rosbridge_types::ServiceDefinition); its request and
//! response rebuild themselves from JSON text, from the untyped
//! [`ServiceRequest`](rosbridge_types::ServiceRequest) /
//! [`ServiceResponse`](rosbridge_types::ServiceResponse), or from a document,
//! filling absent fields with defaults.
//!
//! ```
//! use rosbridge_msg::std_srvs::srv::{Empty, EmptyRequest};
//! use rosbridge_msg::rosbridge_types::{FromServiceRequest, JsonWrapper, ServiceDefinition};
//!
//! let req = EmptyRequest::from_json_str(r#"{"unexpected":1}"#)?;
//! assert_eq!(req, EmptyRequest::default());
//! assert_eq!(Empty::TYPE, "std_srvs/Empty");
//! assert_eq!(req.as_json_str(), "{}");
//! # Ok::<(), rosbridge_msg::rosbridge_types::Error>(())
//! ```

#[macro_use]
mod macros;

pub mod std_srvs;

// Re-export rosbridge-types so users need a single dependency
pub use rosbridge_types;
