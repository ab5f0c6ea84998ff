//! Error types for overlay generation.

use thiserror::Error;

/// Result type for overlay operations.
pub type OverlayResult<T> = Result<T, OverlayError>;

/// Error types for overlay generation.
#[derive(Debug, Error)]
pub enum OverlayError {
    /// The overlay target could not be written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed node sequences.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Feature collection serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
