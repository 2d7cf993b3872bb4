//! Error taxonomy for todo-mcp
//!
//! Every failure surfaces to the caller as an error result payload on the
//! specific tool call; none of these terminate the server. Only a failed
//! listener bind at startup is process-fatal, and that path uses anyhow.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TodoError {
    /// Missing or malformed argument. The call is rejected before any
    /// storage operation is attempted.
    #[error("{0}")]
    Validation(String),

    /// No todo exists for the given id (get/complete only; delete of a
    /// missing id is a silent success).
    #[error("todo not found with ID: {0}")]
    NotFound(i64),

    /// Underlying storage engine failure.
    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),
}

pub type TodoResult<T> = Result<T, TodoError>;
