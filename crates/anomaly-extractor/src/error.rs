//! Error types for anomaly extraction.

use thiserror::Error;

/// Result type for extraction operations.
pub type ExtractResult<T> = Result<T, ExtractError>;

/// Error types for anomaly extraction.
///
/// Nearest-match snapping never misses, so the only expected failure is an
/// unreadable data source.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The dataset handle is invalid, closed, or otherwise unreadable.
    #[error("Data unavailable: {0}")]
    DataUnavailable(String),
}
