//! Client error types.

use std::io;

use saneschedule_core::{CatalogError, SessionError, StoreError};
use thiserror::Error;

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors that can occur in the client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// The event catalog could not be loaded.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// A session operation failed.
    #[error(transparent)]
    Session(#[from] SessionError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Output could not be encoded.
    #[error("failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),

    /// No such category or entry.
    #[error("not found: {0}")]
    NotFound(String),

    /// Action failed (open link).
    #[error("action failed: {0}")]
    Action(String),
}

impl From<StoreError> for ClientError {
    fn from(err: StoreError) -> Self {
        Self::Session(SessionError::Store(err))
    }
}

impl ClientError {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
