//! Error types for the node list pane.
//!
//! This module defines the centralized error type [`NodeListError`] and a type
//! alias [`Result`]. None of these errors reach the user: the host logs them
//! and skips the render.

use thiserror::Error;

/// The main error type for node list operations.
#[derive(Debug, Error)]
pub enum NodeListError {
    /// An inbound payload was not valid JSON.
    ///
    /// Structurally valid JSON that merely lacks a usable node array is not
    /// an error; it is ignored by the update handler.
    #[error("Payload error: {0}")]
    Payload(#[from] serde_json::Error),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme file could not be read or parsed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// The element tree could not be serialized.
    #[error("Markup error: {0}")]
    Markup(String),

    /// Configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for node list operations.
pub type Result<T> = std::result::Result<T, NodeListError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_errors_convert_from_serde() {
        let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: NodeListError = err.into();
        assert!(matches!(err, NodeListError::Payload(_)));
        assert!(err.to_string().starts_with("Payload error:"));
    }
}
