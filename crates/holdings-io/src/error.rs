//! Error types for holdings file I/O

use thiserror::Error;

/// Errors that can occur while reading or writing holdings files
#[derive(Debug, Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Failed to open file: {0}")]
    OpenFailed(String),

    #[error("Missing column: {0}")]
    MissingColumn(String),

    #[error("Invalid format at row {row}: {message}")]
    InvalidFormat { row: usize, message: String },

    #[error("Write failed: {0}")]
    Write(String),
}

/// Result type for holdings I/O operations
pub type IoResult<T> = Result<T, IoError>;
