//! CLI error types.

use thiserror::Error;

/// Errors surfaced by the command-line tool.
#[derive(Debug, Error)]
pub enum CliError {
    /// The model could not be loaded or queried.
    #[error("model error: {0}")]
    Model(#[from] curriculum_core::Error),

    /// The store rejected the schema.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Output could not be serialized.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Filesystem failure.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
