//! Error types for the social meta migration.

use thiserror::Error;

/// Errors that can occur while migrating social settings.
///
/// Missing or empty legacy values are never errors; they leave the target
/// field untouched.
#[derive(Debug, Error)]
pub enum MigrationError {
    /// Store error.
    #[error("store error: {0}")]
    Store(#[from] seoport_store::StoreError),

    /// Invalid site configuration.
    #[error("invalid site configuration: {0}")]
    Config(String),
}
