//! Services of the `std_srvs` package.

use rosbridge_types::Value;

pub mod srv {
    //! Service types for this package

    mod empty;
    pub use empty::{Empty, EmptyRequest, EmptyResponse};

    mod set_bool;
    pub use set_bool::{SetBool, SetBoolRequest, SetBoolResponse};

    mod trigger;
    pub use trigger::{Trigger, TriggerRequest, TriggerResponse};
}

/// Note fields of a field-less message that are dropped on reconstruction.
///
/// Returns how many were ignored.
fn ignore_fields(service: &str, document: &Value) -> usize {
    let ignored = document.as_object().map_or(0, |m| m.len());
    if ignored > 0 {
        tracing::debug!(
            service,
            ignored,
            "ignoring fields of an empty service message"
        );
    }
    ignored
}
