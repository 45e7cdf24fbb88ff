//! Storage error types for komplex-db.

use komplex_core::errors::CoreError;
use thiserror::Error;

/// Errors from store and service operations.
///
/// Lookups of unknown entities are not errors; they return `None` or a
/// neutral default.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Reading or writing the backing file failed.
    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// A value could not be encoded for storage.
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Domain validation or transition error.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
