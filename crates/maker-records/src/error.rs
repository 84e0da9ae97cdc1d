//! Record store error types.

use thiserror::Error;

/// Errors that can occur when persisting records.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to read from the backend.
    #[error("Failed to read store: {0}")]
    ReadError(String),

    /// Failed to write to the backend.
    #[error("Failed to write store: {0}")]
    WriteError(String),

    /// Failed to serialize records.
    #[error("Serialization error: {0}")]
    SerializeError(#[from] serde_json::Error),
}
