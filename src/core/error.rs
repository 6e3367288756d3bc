//! Error types and error handling for the siteindex tool.
//!
//! This module defines the error types used throughout the
//! application. Every error here is fatal: the tool is a
//! single-shot batch job and never writes a partial index.

use thiserror::Error;

/// Result type alias for siteindex operations
pub type Result<T> = std::result::Result<T, IndexError>;

/// Main error type for the siteindex tool
#[derive(Error, Debug)]
pub enum IndexError {
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Invalid encoding: {0}")]
    InvalidEncoding(String),

    #[error("Indexing failed: {0}")]
    IndexingFailed(String),

    #[error("Write failed: {0}")]
    WriteFailed(String),

    #[error("Traversal error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

impl IndexError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }
}
