//! Form engine error types.

use thiserror::Error;

/// Errors returned by [`FormEngine`](crate::FormEngine) operations.
///
/// A field failing its rules is not an error; failures are reported in
/// [`FieldErrors`](formedible_validator::FieldErrors).
#[derive(Debug, Error)]
pub enum FormError {
    /// A transition carried a `type` tag the state machine does not know.
    #[error("unknown transition type: {0}")]
    UnknownTransition(String),

    /// A transition could not be decoded.
    #[error("malformed transition: {0}")]
    MalformedTransition(#[from] serde_json::Error),

    /// A field was added with an empty name.
    #[error("field name must not be empty")]
    MissingFieldName,

    /// The field is not registered in this form.
    #[error("unknown field: {0}")]
    UnknownField(String),
}
