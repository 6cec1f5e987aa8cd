//! Transitions of the form state machine.
//!
//! On the wire a transition is `{"type": "...", "payload": ...}`:
//!
//! ```json
//! {"type": "CHANGE", "payload": {"field": "email", "value": "ada@example.com"}}
//! {"type": "SUBMIT"}
//! {"type": "ADD_FIELD", "payload": {"fieldName": "nickname", "initialValue": ""}}
//! ```

use serde::{Deserialize, Serialize};

use formedible_validator::{FieldErrors, FieldStatus, FieldValue};

use crate::error::FormError;

/// A single state change applied by [`FormState::apply`](crate::FormState::apply).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Transition {
    /// Set a field's value. Errors are left alone.
    Change { field: String, value: FieldValue },
    /// Mark a field as touched.
    Blur { field: String },
    /// Mark the form as submitted.
    Submit,
    /// Replace every field status.
    Validate(FieldErrors),
    /// Set one field's status.
    ValidateField { field: String, status: FieldStatus },
    /// Add a field with its starting value.
    AddField {
        #[serde(rename = "fieldName")]
        field: String,
        #[serde(rename = "initialValue", default)]
        initial_value: FieldValue,
    },
    /// Remove a field from values, errors and touched flags.
    RemoveField {
        #[serde(rename = "fieldName")]
        field: String,
    },
}

impl Transition {
    /// Every `type` tag the state machine accepts.
    pub const KINDS: [&'static str; 7] = [
        "CHANGE",
        "BLUR",
        "SUBMIT",
        "VALIDATE",
        "VALIDATE_FIELD",
        "ADD_FIELD",
        "REMOVE_FIELD",
    ];

    /// Decode a transition from its JSON form.
    ///
    /// An unrecognised `type` is rejected with
    /// [`FormError::UnknownTransition`] before the payload is looked at.
    pub fn from_json(json: &str) -> Result<Self, FormError> {
        #[derive(Deserialize)]
        struct Envelope {
            #[serde(rename = "type")]
            kind: String,
        }

        let envelope: Envelope = serde_json::from_str(json)?;
        if !Self::KINDS.contains(&envelope.kind.as_str()) {
            return Err(FormError::UnknownTransition(envelope.kind));
        }
        Ok(serde_json::from_str(json)?)
    }

    /// The wire `type` tag.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Change { .. } => "CHANGE",
            Self::Blur { .. } => "BLUR",
            Self::Submit => "SUBMIT",
            Self::Validate(_) => "VALIDATE",
            Self::ValidateField { .. } => "VALIDATE_FIELD",
            Self::AddField { .. } => "ADD_FIELD",
            Self::RemoveField { .. } => "REMOVE_FIELD",
        }
    }

    /// The field this transition is about, if it targets one.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Change { field, .. }
            | Self::Blur { field }
            | Self::ValidateField { field, .. }
            | Self::AddField { field, .. }
            | Self::RemoveField { field } => Some(field),
            Self::Submit | Self::Validate(_) => None,
        }
    }

    /// Whether applying this transition changes the form's values.
    #[must_use]
    pub fn changes_values(&self) -> bool {
        matches!(
            self,
            Self::Change { .. } | Self::AddField { .. } | Self::RemoveField { .. }
        )
    }
}
