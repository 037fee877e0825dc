//! Error types for JSON value construction

use thiserror::Error;

/// Result type for rosbridge value operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building a JSON wrapper from text
///
/// Unsigned truncation and missing-field defaulting are not errors and
/// never surface here.
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed JSON text
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Well-formed JSON whose root is not an object
    #[error("Expected a JSON object at the root, found {found}")]
    NotAnObject {
        /// Kind of the JSON value found at the root
        found: &'static str,
    },
}

impl Error {
    /// Returns true if the error came from malformed JSON text.
    pub fn is_syntax(&self) -> bool {
        matches!(self, Error::Json(e) if e.is_syntax() || e.is_eof())
    }
}
