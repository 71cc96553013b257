//! Error types for change-point detection

use thiserror::Error;

/// Error type for change-point detection operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter provided to a detector
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;
