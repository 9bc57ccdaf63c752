//! Centralized error types for SafeHire.

use thiserror::Error;

use crate::oracle::OracleError;

/// Main error type for SafeHire operations.
#[derive(Error, Debug)]
pub enum SafeHireError {
    #[error("{0} is not set. Please configure it in the environment or a .env file.")]
    MissingCredential(String),

    #[error("Please paste a message to analyze.")]
    EmptyMessage,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Analysis failed: {0}")]
    Oracle(#[from] OracleError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type for SafeHire operations.
pub type SafeHireResult<T> = Result<T, SafeHireError>;

impl SafeHireError {
    /// Create an invalid configuration error.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}
