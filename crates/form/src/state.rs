//! Form state and its reducer.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use formedible_validator::{FieldErrors, FieldRules, FieldStatus, FieldValue, FieldValues};

use crate::transition::Transition;

/// The complete state of one form session.
///
/// `values` holds exactly the registered fields. `errors` and `blurred` may
/// cover only some of them; a missing entry reads as unvalidated and
/// untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormState {
    pub values: FieldValues,
    pub errors: FieldErrors,
    pub blurred: IndexMap<String, bool>,
    pub submitted: bool,
}

impl FormState {
    /// Initial state for a set of values: no errors, nothing touched.
    #[must_use]
    pub fn new(values: FieldValues) -> Self {
        Self {
            values,
            ..Self::default()
        }
    }

    /// Initial state seeded from each field's configured initial value.
    #[must_use]
    pub fn from_rules(rules: &FieldRules) -> Self {
        Self::new(rules.initial_values())
    }

    #[must_use]
    pub fn value(&self, field: &str) -> Option<&FieldValue> {
        self.values.get(field)
    }

    #[must_use]
    pub fn status(&self, field: &str) -> &FieldStatus {
        self.errors.status(field)
    }

    /// Whether the field has lost focus at least once.
    #[must_use]
    pub fn is_blurred(&self, field: &str) -> bool {
        self.blurred.get(field).copied().unwrap_or(false)
    }

    /// Apply a transition. Never fails and has no side effects.
    pub fn apply(&mut self, transition: Transition) {
        match transition {
            Transition::Change { field, value } => {
                self.values.insert(field, value);
            }
            Transition::Blur { field } => {
                self.blurred.insert(field, true);
            }
            Transition::Submit => self.submitted = true,
            Transition::Validate(errors) => self.errors = errors,
            Transition::ValidateField { field, status } => {
                self.errors.set(field, status);
            }
            Transition::AddField {
                field,
                initial_value,
            } => {
                self.values.insert(field.as_str(), initial_value);
                self.errors.set(field.as_str(), FieldStatus::Unvalidated);
                self.blurred.insert(field, false);
            }
            Transition::RemoveField { field } => {
                self.values.remove(&field);
                self.errors.remove(&field);
                self.blurred.shift_remove(&field);
            }
        }
    }

    /// Apply a transition to a copy of this state.
    #[must_use]
    pub fn applied(&self, transition: Transition) -> Self {
        let mut next = self.clone();
        next.apply(transition);
        next
    }
}
