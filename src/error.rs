//! Error types for taskmgr
//!
//! Centralized error handling using thiserror. Not-found is never an error
//! here: lookups return `Option`/`bool`, and only backend I/O failures
//! surface through these variants.

use thiserror::Error;

/// All error types that can occur in taskmgr
#[derive(Debug, Error)]
pub enum TaskError {
    /// Storage/persistence error
    #[error("Storage error: {0}")]
    Storage(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// SQLite error
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Result type alias for taskmgr operations
pub type Result<T> = std::result::Result<T, TaskError>;
