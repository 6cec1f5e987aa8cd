//! Validation results per field.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::RuleViolation;

/// The validation state of one field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "status", content = "message", rename_all = "camelCase")]
pub enum FieldStatus {
    /// Not validated since it was added.
    #[default]
    Unvalidated,
    /// Validated with no failures.
    Valid,
    /// Validated and failed with this message.
    Invalid(String),
}

impl FieldStatus {
    /// An invalid status carrying `message`.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid(message.into())
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    #[must_use]
    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }

    /// The failure message, if invalid.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Invalid(message) => Some(message),
            Self::Unvalidated | Self::Valid => None,
        }
    }
}

impl From<Result<(), RuleViolation>> for FieldStatus {
    fn from(result: Result<(), RuleViolation>) -> Self {
        match result {
            Ok(()) => Self::Valid,
            Err(violation) => Self::Invalid(violation.message),
        }
    }
}

static UNVALIDATED: FieldStatus = FieldStatus::Unvalidated;

/// Per-field validation statuses, in field order.
///
/// A field with no entry reads as [`FieldStatus::Unvalidated`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors {
    entries: IndexMap<String, FieldStatus>,
}

impl FieldErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Status of `field`; `Unvalidated` when there is no entry.
    #[must_use]
    pub fn status(&self, field: &str) -> &FieldStatus {
        self.entries.get(field).unwrap_or(&UNVALIDATED)
    }

    /// Failure message of `field`, if it is invalid.
    #[must_use]
    pub fn message(&self, field: &str) -> Option<&str> {
        self.entries.get(field).and_then(FieldStatus::message)
    }

    /// Set the status of `field`, returning the previous entry.
    pub fn set(&mut self, field: impl Into<String>, status: FieldStatus) -> Option<FieldStatus> {
        self.entries.insert(field.into(), status)
    }

    /// Drop the entry for `field`, keeping the order of the rest.
    pub fn remove(&mut self, field: &str) -> Option<FieldStatus> {
        self.entries.shift_remove(field)
    }

    /// Whether `field` has an entry at all.
    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.entries.contains_key(field)
    }

    /// Whether any field is invalid.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.entries.values().any(FieldStatus::is_invalid)
    }

    /// `(field, message)` for every invalid field.
    pub fn invalid(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .filter_map(|(field, status)| status.message().map(|m| (field.as_str(), m)))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldStatus)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, FieldStatus)> for FieldErrors {
    fn from_iter<I: IntoIterator<Item = (K, FieldStatus)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::RuleKind;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn absent_reads_unvalidated() {
        let errors = FieldErrors::new();
        assert_eq!(errors.status("anything"), &FieldStatus::Unvalidated);
        assert_eq!(errors.message("anything"), None);
        assert!(!errors.has_errors());
    }

    #[test]
    fn invalid_iterates_failures_only() {
        let errors: FieldErrors = [
            ("username", FieldStatus::invalid("This field is required")),
            ("email", FieldStatus::Valid),
            ("password", FieldStatus::invalid("Minimum length is 8")),
            ("bio", FieldStatus::Unvalidated),
        ]
        .into_iter()
        .collect();

        assert!(errors.has_errors());
        let failures: Vec<_> = errors.invalid().collect();
        assert_eq!(
            failures,
            [
                ("username", "This field is required"),
                ("password", "Minimum length is 8"),
            ]
        );
    }

    #[test]
    fn set_and_remove() {
        let mut errors = FieldErrors::new();
        assert_eq!(errors.set("a", FieldStatus::Valid), None);
        assert_eq!(
            errors.set("a", FieldStatus::invalid("bad")),
            Some(FieldStatus::Valid)
        );
        assert_eq!(errors.message("a"), Some("bad"));
        assert_eq!(errors.remove("a"), Some(FieldStatus::invalid("bad")));
        assert!(errors.is_empty());
    }

    #[test]
    fn from_rule_result() {
        let ok: FieldStatus = Ok(()).into();
        assert_eq!(ok, FieldStatus::Valid);

        let err: FieldStatus = Err(RuleViolation::new(RuleKind::Email, "Invalid email format")).into();
        assert_eq!(err, FieldStatus::invalid("Invalid email format"));
    }

    #[test]
    fn serde_shape() {
        let errors: FieldErrors = [
            ("a", FieldStatus::Valid),
            ("b", FieldStatus::invalid("nope")),
            ("c", FieldStatus::Unvalidated),
        ]
        .into_iter()
        .collect();

        let value = serde_json::to_value(&errors).unwrap();
        assert_eq!(
            value,
            json!({
                "a": {"status": "valid"},
                "b": {"status": "invalid", "message": "nope"},
                "c": {"status": "unvalidated"},
            })
        );
        let back: FieldErrors = serde_json::from_value(value).unwrap();
        assert_eq!(back, errors);
    }
}
