//! Error types for NetCDF dataset reading.

use thiserror::Error;

/// Result type for dataset operations.
pub type DatasetResult<T> = Result<T, DatasetError>;

/// Error types for NetCDF dataset reading.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The file could not be opened as NetCDF.
    #[error("Failed to open dataset: {0}")]
    Open(String),

    /// Missing required variable, dimension, or attribute.
    #[error("Missing required data: {0}")]
    MissingData(String),

    /// The file opened but its contents do not match the expected layout.
    #[error("Invalid data format: {0}")]
    InvalidFormat(String),
}
