//! Error types for the CLI

use numbernoodle::prelude::{CalcError, ConfigError};
use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI
#[derive(Debug, Error)]
pub enum CliError {
    /// Session config file could not be loaded
    #[error("Configuration error: {0}")]
    SessionConfig(#[from] ConfigError),

    /// Invalid argument
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Error message
        message: String,
    },

    /// The expression did not evaluate; already reported to the user
    #[error("{0}")]
    Calculation(#[from] CalcError),

    /// Unbalanced parentheses reported by `check`
    #[error("{message}")]
    Check {
        /// Error message
        message: String,
    },

    /// IO error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON output error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Requested feature was not compiled in
    #[error("{0} is not available in this build")]
    Unavailable(&'static str),
}

impl CliError {
    /// Create an invalid argument error
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a balance check failure
    #[must_use]
    pub fn check(message: impl Into<String>) -> Self {
        Self::Check {
            message: message.into(),
        }
    }

    /// True when the handler already printed the failure to the user
    #[must_use]
    pub const fn is_reported(&self) -> bool {
        matches!(self, Self::Calculation(_) | Self::Check { .. })
    }
}
