//! Logging setup for applications using rosbridge values.
//!
//! The library itself only emits `tracing` events (parse traces, field
//! defaulting). This module installs a subscriber for binaries and tests
//! that want to see them. Requires the `logging` feature.
//!
//! # Example
//!
//! ```ignore
//! use rosbridge_types::logger::init_logging;
//!
//! init_logging("bridge_client");
//! tracing::info!("connected");
//! ```

use std::sync::OnceLock;
use tracing_subscriber::{
    EnvFilter,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

static LOGGER_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Initialize logging with tracing.
///
/// This sets up:
/// 1. A fmt subscriber writing to stderr, filtered by `RUST_LOG` (default `info`)
/// 2. A bridge that forwards `log` crate calls to tracing
///
/// Calls after the first are ignored, as is failure to install the global
/// subscriber when another one is already set.
///
/// `name` only labels the one-time `logging initialized` debug event, as its
/// `logger` field. It does not become a span or a target.
pub fn init_logging(name: &str) {
    LOGGER_INITIALIZED.get_or_init(|| {
        tracing_log::LogTracer::init().ok();

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        let fmt_layer = fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_thread_names(false)
            .with_file(true)
            .with_line_number(true)
            .with_span_events(FmtSpan::NONE)
            .with_writer(std::io::stderr);

        let installed = tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .try_init()
            .is_ok();

        if installed {
            tracing::debug!(logger = name, "logging initialized");
        }
    });
}

/// Re-export tracing macros for convenience.
pub use tracing::{debug, error, info, trace, warn};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging() {
        init_logging("test_client");

        // Idempotent
        init_logging("test_client_2");
    }

    #[test]
    fn test_name_only_labels_first_call() {
        init_logging("");
        assert!(LOGGER_INITIALIZED.get().is_some());

        // A different name does not install anything new.
        init_logging("another_name");
        assert!(LOGGER_INITIALIZED.get().is_some());
    }

    #[test]
    fn test_events_after_init() {
        init_logging("test_events");

        trace!("trace message");
        debug!(field = "data", "missing field, using default");
        info!("info message");
        warn!("warn message");
        error!("error message");
    }

    #[test]
    fn test_log_crate_forwarding() {
        init_logging("test_log_forward");

        log::info!("log crate info");
        log::warn!("log crate warn");
    }
}
