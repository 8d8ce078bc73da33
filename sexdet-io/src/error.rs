use std::io;
use thiserror::Error;

/// Error type for sexdet-io operations.
#[derive(Error, Debug)]
pub enum ReportError {
    /// IO error occurred during file operations.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The JSON report could not be serialized.
    #[error("Failed to serialize JSON report: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for sexdet-io operations.
pub type Result<T> = std::result::Result<T, ReportError>;
