//! Error types for content-sieve.
//!
//! Most failures inside an extraction pass are recovered locally (an invalid
//! selector is ignored, a malformed URL rejects one item). The variants here
//! cover what can still surface to a caller of the library API.

/// Error type for extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// HTML or JSON input could not be parsed.
    #[error("Parse failed: {0}")]
    ParseError(String),

    /// A message did not match any known request shape.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The main-content collaborator produced no usable article.
    #[error("Main content unavailable: {0}")]
    MainContentUnavailable(String),

    /// General extraction failure.
    #[error("Extraction failed: {0}")]
    ExtractionError(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::ParseError(err.to_string())
    }
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Best-effort text of a caught panic payload.
pub(crate) fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    }
}
