//! Error types and error handling for docdex.
//!
//! Only failures the driver surfaces are represented here:
//! configuration, traversal and persistence. Per-document conditions
//! (unreadable files, malformed markup, unknown entities) are not
//! errors; they degrade to empty text plus a log line, so a single
//! bad document never aborts an indexing run.

use thiserror::Error;

/// Result type alias for docdex operations
pub type Result<T> = std::result::Result<T, DocdexError>;

/// Main error type for the docdex indexer
#[derive(Error, Debug)]
pub enum DocdexError {
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Indexing failed: {0}")]
    IndexingFailed(String),

    #[error("Failed to write index artifact: {0}")]
    PersistFailed(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl DocdexError {
    /// Check if this error was caused by invalid user input
    pub fn is_bad_request(&self) -> bool {
        matches!(
            self,
            DocdexError::InvalidPath(_) | DocdexError::ConfigError(_)
        )
    }
}
