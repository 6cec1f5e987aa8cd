//! Logger setup errors.

use thiserror::Error;

/// Result alias for logger setup.
pub type LogResult<T> = Result<T, LogError>;

#[derive(Debug, Error)]
pub enum LogError {
    /// The level directive could not be parsed as an `EnvFilter`.
    #[error("invalid log filter: {0}")]
    Filter(String),

    /// A global subscriber is already installed.
    #[error("failed to install subscriber: {0}")]
    Init(String),
}
