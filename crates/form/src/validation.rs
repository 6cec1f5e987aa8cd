//! Single-field validation in three steps: begin, resolve, finish.
//!
//! [`FormEngine::begin_field_validation`](crate::FormEngine::begin_field_validation)
//! runs the synchronous rules and snapshots what an async validator needs.
//! [`PendingFieldValidation::resolve`] awaits the async validator without
//! borrowing the engine, so the form can keep receiving transitions.
//! [`FormEngine::finish_field_validation`](crate::FormEngine::finish_field_validation)
//! applies the result only if the field's token is still current.

use formedible_validator::{
    ASYNC_FAILED, AsyncValidatorFn, FieldStatus, FieldValue, FieldValues, RuleKind, RuleMessages,
};

use crate::token::ValidationToken;

/// A started single-field validation.
#[must_use = "a pending validation does nothing until resolved and finished"]
pub struct PendingFieldValidation {
    field: String,
    token: ValidationToken,
    stage: Stage,
}

enum Stage {
    Decided(FieldStatus),
    Async(AsyncCheck),
}

/// Everything an async validator needs, owned.
pub(crate) struct AsyncCheck {
    pub(crate) validator: AsyncValidatorFn,
    pub(crate) value: FieldValue,
    pub(crate) values: FieldValues,
    pub(crate) messages: RuleMessages,
}

impl PendingFieldValidation {
    pub(crate) fn decided(field: String, token: ValidationToken, status: FieldStatus) -> Self {
        Self {
            field,
            token,
            stage: Stage::Decided(status),
        }
    }

    pub(crate) fn awaiting(field: String, token: ValidationToken, check: AsyncCheck) -> Self {
        Self {
            field,
            token,
            stage: Stage::Async(check),
        }
    }

    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    #[must_use]
    pub fn token(&self) -> ValidationToken {
        self.token
    }

    /// Whether resolving will call an async validator.
    #[must_use]
    pub fn is_async(&self) -> bool {
        matches!(self.stage, Stage::Async(_))
    }

    /// Produce the field's status, awaiting the async validator if needed.
    pub async fn resolve(self) -> FieldValidationOutcome {
        let status = match self.stage {
            Stage::Decided(status) => status,
            Stage::Async(check) => check.run(&self.field).await,
        };
        FieldValidationOutcome {
            field: self.field,
            token: self.token,
            status,
        }
    }
}

impl std::fmt::Debug for PendingFieldValidation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingFieldValidation")
            .field("field", &self.field)
            .field("token", &self.token)
            .field("async", &self.is_async())
            .finish()
    }
}

impl AsyncCheck {
    /// Await the validator and map its outcome to a status.
    ///
    /// An `Err` from the validator is logged and recorded as invalid, using
    /// the async override when present.
    pub(crate) async fn run(self, field: &str) -> FieldStatus {
        tracing::debug!(field = %field, "awaiting async validator");
        match (self.validator)(self.value, self.values).await {
            Ok(None) => FieldStatus::Valid,
            Ok(Some(message)) => {
                FieldStatus::Invalid(self.messages.resolve(RuleKind::Async, None, || message))
            }
            Err(err) => {
                tracing::warn!(field = %field, error = %err, "async validator failed");
                let message = self
                    .messages
                    .get(RuleKind::Async)
                    .unwrap_or(ASYNC_FAILED)
                    .to_owned();
                FieldStatus::Invalid(message)
            }
        }
    }
}

/// The status computed for a field, not yet applied to the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldValidationOutcome {
    pub field: String,
    pub token: ValidationToken,
    pub status: FieldStatus,
}

/// What happened when an outcome was handed back to the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValidationApplied {
    /// The status was written to the form.
    Applied(FieldStatus),
    /// The field changed (or was removed) since the validation began; the
    /// result was dropped.
    Stale,
}

impl FieldValidationApplied {
    #[must_use]
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }

    /// The applied status, if any.
    #[must_use]
    pub fn status(&self) -> Option<&FieldStatus> {
        match self {
            Self::Applied(status) => Some(status),
            Self::Stale => None,
        }
    }
}
