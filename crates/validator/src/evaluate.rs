//! Rule evaluator: checks one field value against its [`FieldConfig`].

use crate::config::FieldConfig;
use crate::error::RuleViolation;
use crate::foundation::Validate;
use crate::message::{self, RuleKind};
use crate::rules::FieldRules;
use crate::validators;
use crate::value::{FieldValue, FieldValues};

/// Evaluate the synchronous rules of `config` against `value`.
///
/// Rules run in this order and the first failure is returned:
///
/// 1. required
/// 2. logic predicate
/// 3. minimum length
/// 4. maximum length
/// 5. equal to another field (fails when the other field is absent)
/// 6. not equal to another field (passes when the other field is absent)
/// 7. email
/// 8. phone
/// 9. date
/// 10. url
/// 11. file
/// 12. custom validator
/// 13. condition
///
/// The async validator is not run here.
pub fn evaluate_field(
    value: &FieldValue,
    config: &FieldConfig,
    all: &FieldValues,
) -> Result<(), RuleViolation> {
    let text = value.as_text();
    let fail = |rule: RuleKind, default: &dyn Fn() -> String| -> Result<(), RuleViolation> {
        Err(RuleViolation::new(
            rule,
            config.messages.resolve(rule, None, default),
        ))
    };

    if config.required && !value.is_truthy() {
        return fail(RuleKind::Required, &|| message::REQUIRED.to_owned());
    }

    if let Some(logic) = &config.logic
        && !logic(all)
    {
        return fail(RuleKind::Logic, &|| message::LOGIC.to_owned());
    }

    if let Some(min) = config.min_length
        && let Err(err) = validators::min_length(min).validate(&text)
    {
        return fail(RuleKind::MinLength, &|| err.message.to_string());
    }

    if let Some(max) = config.max_length
        && let Err(err) = validators::max_length(max).validate(&text)
    {
        return fail(RuleKind::MaxLength, &|| err.message.to_string());
    }

    if let Some(other) = &config.equal_to
        && all.text(other).as_deref() != Some(text.as_ref())
    {
        return fail(RuleKind::EqualTo, &|| message::equal_to(other));
    }

    if let Some(other) = &config.not_equal
        && all.text(other).as_deref() == Some(text.as_ref())
    {
        return fail(RuleKind::NotEqual, &|| message::not_equal(other));
    }

    let formats: [(bool, RuleKind, &dyn Validate<Input = str>); 4] = [
        (config.email, RuleKind::Email, &validators::email()),
        (config.phone, RuleKind::Phone, &validators::phone()),
        (config.date, RuleKind::Date, &validators::iso_date()),
        (config.url, RuleKind::Url, &validators::url()),
    ];
    for (enabled, rule, validator) in formats {
        if enabled && let Err(err) = validator.validate(&text) {
            return fail(rule, &|| err.message.to_string());
        }
    }

    if config.file && !value.is_truthy() {
        return fail(RuleKind::File, &|| message::FILE.to_owned());
    }

    if let Some(custom) = &config.custom
        && let Some(returned) = custom(value, all)
    {
        return fail(RuleKind::Custom, &|| returned.clone());
    }

    if let Some(condition) = &config.condition
        && let Err(default) = condition.check(value, all)
    {
        let message = config.messages.resolve(
            RuleKind::Condition,
            config.condition_message.as_deref(),
            || default,
        );
        return Err(RuleViolation::new(RuleKind::Condition, message));
    }

    Ok(())
}

/// Evaluate the field `name` using its registered config.
///
/// A field with no registered config yields a [`RuleKind::Configuration`]
/// violation. A registered field with no value is checked as empty text.
pub fn evaluate_registered(
    name: &str,
    rules: &FieldRules,
    values: &FieldValues,
) -> Result<(), RuleViolation> {
    let Some(config) = rules.get(name) else {
        tracing::error!(field = %name, "no rule configuration registered for field");
        return Err(RuleViolation::new(
            RuleKind::Configuration,
            message::CONFIGURATION,
        ));
    };

    let empty = FieldValue::empty();
    let value = values.get(name).unwrap_or(&empty);
    let result = evaluate_field(value, config, values);

    match &result {
        Ok(()) => tracing::debug!(field = %name, "field passed"),
        Err(violation) => tracing::debug!(
            field = %name,
            rule = %violation.rule,
            message = %violation.message,
            "field failed"
        ),
    }

    result
}
