//! Error types for resource pool operations

use thiserror::Error;

use crate::domain::{PoolName, PoolNameError};

/// Errors that can occur while driving pool operations through a transport
#[derive(Debug, Error)]
pub enum PoolError {
    /// Pool name failed validation
    #[error("Invalid pool name: {0}")]
    InvalidName(#[from] PoolNameError),

    /// Error reported by the caller's transport, passed through unchanged
    #[error("Transport error: {0}")]
    Transport(String),

    /// Response did not have the expected shape
    #[error("Deserialization error: {0}")]
    Deserialization(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Pool does not exist on the remote side
    #[error("Pool not found: {0}")]
    NotFound(PoolName),
}

/// Result type for pool operations
pub type PoolResult<T> = Result<T, PoolError>;

impl From<serde_json::Error> for PoolError {
    fn from(err: serde_json::Error) -> Self {
        PoolError::Deserialization(err.to_string())
    }
}
