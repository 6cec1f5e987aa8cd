//! Rule evaluation error types.

use thiserror::Error;

use crate::message::RuleKind;

/// Boxed error returned by the I/O behind an async validator.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// The first rule a field value failed, with its resolved message.
///
/// This is data, not a fault: evaluation itself never fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{rule}: {message}")]
pub struct RuleViolation {
    /// Which rule failed.
    pub rule: RuleKind,
    /// Message after overrides were applied.
    pub message: String,
}

impl RuleViolation {
    /// Create a violation for `rule`.
    pub fn new(rule: RuleKind, message: impl Into<String>) -> Self {
        Self {
            rule,
            message: message.into(),
        }
    }
}

/// An async validator could not produce a verdict (network down, timeout).
///
/// Distinct from a validator that ran and rejected the value, which returns
/// `Ok(Some(message))`.
#[derive(Debug, Error)]
#[error("async validator failed: {message}")]
pub struct AsyncValidatorError {
    message: String,
    #[source]
    source: Option<BoxError>,
}

impl AsyncValidatorError {
    /// Create an error with a description and no underlying cause.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Wrap an underlying cause.
    pub fn with_source(message: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// The description given when the error was created.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}
