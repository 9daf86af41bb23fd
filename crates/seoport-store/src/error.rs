//! Error types for the option and site stores.

use thiserror::Error;

/// Errors that can occur when reading or writing site data.
#[derive(Debug, Error)]
pub enum StoreError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The structured options failed validation.
    #[error("invalid options: {0}")]
    InvalidOptions(String),

    /// The legacy option array has an unexpected shape.
    #[error("invalid legacy options: {0}")]
    InvalidLegacy(String),

    /// A serialized legacy value could not be decoded.
    #[error("invalid serialized value at byte {offset}: {message}")]
    InvalidSerialized { offset: usize, message: String },

    /// Record not found.
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },
}
