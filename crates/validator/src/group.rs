//! Group evaluator: cross-field rules layered over per-field results.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::evaluate::evaluate_registered;
use crate::report::{FieldErrors, FieldStatus};
use crate::rules::FieldRules;
use crate::value::FieldValues;

/// Group rule; `Some(message)` marks every listed field invalid.
pub type GroupFn = Arc<dyn Fn(&FieldValues) -> Option<String> + Send + Sync>;

/// A named set of fields validated together.
#[derive(Clone)]
pub struct FieldGroup {
    /// Fields that receive the group's message when it fails.
    pub fields: Vec<String>,
    pub validate: GroupFn,
}

impl FieldGroup {
    pub fn new<I, S, F>(fields: I, validate: F) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        F: Fn(&FieldValues) -> Option<String> + Send + Sync + 'static,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
            validate: Arc::new(validate),
        }
    }
}

impl fmt::Debug for FieldGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldGroup")
            .field("fields", &self.fields)
            .field("validate", &"<function>")
            .finish()
    }
}

/// Groups by name, in registration order.
pub type FieldGroups = IndexMap<String, FieldGroup>;

/// Run the group rule against the current values.
pub fn evaluate_group(group: &FieldGroup, values: &FieldValues) -> Option<String> {
    (group.validate)(values)
}

/// Per-field statuses for every field in `values`.
///
/// Fields without a registered config are reported as
/// "Configuration error".
pub fn evaluate_fields(values: &FieldValues, rules: &FieldRules) -> FieldErrors {
    values
        .names()
        .map(|name| (name, FieldStatus::from(evaluate_registered(name, rules, values))))
        .collect()
}

/// Overlay group failures onto `errors`.
///
/// A failing group fills each listed field that is not already invalid. A
/// field's own error is never replaced. Listed names with no value in the
/// form are skipped.
pub fn apply_groups(errors: &mut FieldErrors, groups: &FieldGroups, values: &FieldValues) {
    for (group_name, group) in groups {
        let Some(message) = evaluate_group(group, values) else {
            continue;
        };
        tracing::debug!(group = %group_name, message = %message, "group failed");

        for field in &group.fields {
            if !values.contains(field) {
                tracing::debug!(group = %group_name, field = %field, "group lists unknown field");
                continue;
            }
            if !errors.status(field).is_invalid() {
                errors.set(field.as_str(), FieldStatus::Invalid(message.clone()));
            }
        }
    }
}

/// Field rules followed by the group overlay.
pub fn evaluate_all_fields(
    values: &FieldValues,
    rules: &FieldRules,
    groups: &FieldGroups,
) -> FieldErrors {
    let mut errors = evaluate_fields(values, rules);
    apply_groups(&mut errors, groups, values);
    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FieldConfig;
    use pretty_assertions::assert_eq;

    fn address_group() -> FieldGroup {
        FieldGroup::new(["street", "city"], |values| {
            let filled = ["street", "city"]
                .iter()
                .filter(|f| values.get(f).is_some_and(|v| v.is_truthy()))
                .count();
            (filled == 1).then(|| "Fill in the whole address".to_owned())
        })
    }

    #[test]
    fn evaluate_group_delegates() {
        let group = address_group();
        let partial: FieldValues = [("street", "Main 1"), ("city", "")].into_iter().collect();
        let full: FieldValues = [("street", "Main 1"), ("city", "Utrecht")]
            .into_iter()
            .collect();

        assert_eq!(
            evaluate_group(&group, &partial).as_deref(),
            Some("Fill in the whole address")
        );
        assert_eq!(evaluate_group(&group, &full), None);
    }

    #[test]
    fn group_never_overwrites_field_error() {
        let rules = FieldRules::new()
            .with("street", FieldConfig::new().min_length(20))
            .with("city", FieldConfig::new());
        let groups: FieldGroups = [("address".to_owned(), address_group())].into_iter().collect();
        let values: FieldValues = [("street", "Main 1"), ("city", "")].into_iter().collect();

        let errors = evaluate_all_fields(&values, &rules, &groups);

        let expected: FieldErrors = [
            ("street", FieldStatus::invalid("Minimum length is 20")),
            ("city", FieldStatus::invalid("Fill in the whole address")),
        ]
        .into_iter()
        .collect();
        assert_eq!(errors, expected);
    }

    #[test]
    fn group_skips_names_without_values() {
        let rules = FieldRules::new().with("a", FieldConfig::new());
        let group = FieldGroup::new(["a", "ghost"], |_| Some("group".into()));
        let groups: FieldGroups = [("g".to_owned(), group)].into_iter().collect();
        let values: FieldValues = [("a", "x")].into_iter().collect();

        let errors = evaluate_all_fields(&values, &rules, &groups);
        assert_eq!(errors.message("a"), Some("group"));
        assert!(!errors.contains("ghost"));
    }

    #[test]
    fn evaluate_fields_marks_valid_and_unconfigured() {
        let rules = FieldRules::new().with("name", FieldConfig::new().required());
        let values: FieldValues = [("name", "Ada"), ("stray", "?")].into_iter().collect();

        let errors = evaluate_fields(&values, &rules);
        assert_eq!(errors.status("name"), &FieldStatus::Valid);
        assert_eq!(errors.message("stray"), Some("Configuration error"));
    }
}
