//! Error types for RPM Life storage.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur in store operations.
#[derive(Error, Debug)]
pub enum RpmError {
    #[error("{label} not found")]
    NotFound { label: &'static str, id: String },

    #[error("Malformed store file {}: {reason}", path.display())]
    MalformedStore { path: PathBuf, reason: String },

    #[error("Invalid record: {0}")]
    Invalid(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl RpmError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        RpmError::Invalid(msg.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, RpmError::NotFound { .. })
    }
}

/// Result type alias for store operations.
pub type RpmResult<T> = Result<T, RpmError>;
