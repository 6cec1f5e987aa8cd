//! Conditional rules evaluated last in a field's rule chain.

use std::borrow::Cow;
use std::fmt;
use std::sync::{Arc, LazyLock};

use crate::foundation::Validate;
use crate::validators::MatchesRegex;
use crate::value::{FieldValue, FieldValues};

/// Leading numeric prefix: optional sign, digits with an optional fraction,
/// optional exponent. Anything after the prefix is ignored.
static NUMERIC_PREFIX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^[+-]?(?:Infinity|(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)").unwrap()
});

/// Parse the leading number of `text`.
///
/// `"15abc"` parses as `15`, `" 2.5"` as `2.5`. Text with no numeric prefix
/// yields `NaN`, which fails every comparison.
#[must_use]
pub fn parse_number(text: &str) -> f64 {
    let trimmed = text.trim_start();
    NUMERIC_PREFIX
        .find(trimmed)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(f64::NAN)
}

/// Predicate for [`Condition::Custom`].
pub type ConditionFn = Arc<dyn Fn(&FieldValue, &FieldValues) -> bool + Send + Sync>;

/// The right-hand side of an equality condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    /// The current value of another field.
    Field(String),
    /// A fixed string.
    Literal(String),
}

impl Operand {
    fn resolve<'a>(&'a self, all: &'a FieldValues) -> Option<Cow<'a, str>> {
        match self {
            Self::Field(name) => all.text(name),
            Self::Literal(text) => Some(Cow::Borrowed(text)),
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(name) | Self::Literal(name) => f.write_str(name),
        }
    }
}

/// A conditional rule attached to a field.
#[derive(Clone)]
pub enum Condition {
    /// The value must equal the operand's string form.
    Equals(Operand),
    /// The value must differ from the operand's string form.
    NotEquals(Operand),
    /// The value must be numerically greater than the named field's value.
    GreaterThan(String),
    /// The value must be numerically less than the named field's value.
    LessThan(String),
    /// The value must lie in the inclusive numeric range.
    Between { min: f64, max: f64 },
    /// The value must contain a match of the pattern.
    Matches(MatchesRegex),
    /// The predicate must return `true`.
    Custom(ConditionFn),
}

impl Condition {
    /// Build a [`Condition::Custom`] from a closure.
    pub fn custom<F>(predicate: F) -> Self
    where
        F: Fn(&FieldValue, &FieldValues) -> bool + Send + Sync + 'static,
    {
        Self::Custom(Arc::new(predicate))
    }

    /// Build a [`Condition::Matches`] from a compiled pattern.
    #[must_use]
    pub fn matches(pattern: regex::Regex) -> Self {
        Self::Matches(pattern.into())
    }

    /// Check `value` against the condition.
    ///
    /// On failure returns the built-in message for this condition; callers
    /// layer per-field overrides on top.
    pub fn check(&self, value: &FieldValue, all: &FieldValues) -> Result<(), String> {
        let text = value.as_text();
        match self {
            Self::Equals(operand) => match operand.resolve(all) {
                Some(other) if other == text => Ok(()),
                _ => Err(format!("Value must equal {operand}")),
            },
            Self::NotEquals(operand) => match operand.resolve(all) {
                Some(other) if other == text => Err(format!("Value must not equal {operand}")),
                _ => Ok(()),
            },
            Self::GreaterThan(field) => {
                let other = all.text(field).map_or(f64::NAN, |t| parse_number(&t));
                if parse_number(&text) > other {
                    Ok(())
                } else {
                    Err(format!("Value must be greater than {field}"))
                }
            }
            Self::LessThan(field) => {
                let other = all.text(field).map_or(f64::NAN, |t| parse_number(&t));
                if parse_number(&text) < other {
                    Ok(())
                } else {
                    Err(format!("Value must be less than {field}"))
                }
            }
            Self::Between { min, max } => {
                let number = parse_number(&text);
                if number >= *min && number <= *max {
                    Ok(())
                } else {
                    Err(format!("Value must be between {min} and {max}"))
                }
            }
            Self::Matches(pattern) => pattern
                .validate(&text)
                .map_err(|err| err.message.into_owned()),
            Self::Custom(predicate) => {
                if predicate(value, all) {
                    Ok(())
                } else {
                    Err("Custom validation failed".to_owned())
                }
            }
        }
    }
}

impl fmt::Debug for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Equals(operand) => f.debug_tuple("Equals").field(operand).finish(),
            Self::NotEquals(operand) => f.debug_tuple("NotEquals").field(operand).finish(),
            Self::GreaterThan(field) => f.debug_tuple("GreaterThan").field(field).finish(),
            Self::LessThan(field) => f.debug_tuple("LessThan").field(field).finish(),
            Self::Between { min, max } => f
                .debug_struct("Between")
                .field("min", min)
                .field("max", max)
                .finish(),
            Self::Matches(pattern) => f
                .debug_tuple("Matches")
                .field(&pattern.pattern.as_str())
                .finish(),
            Self::Custom(_) => f.debug_tuple("Custom").field(&"<function>").finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn values(pairs: &[(&str, &str)]) -> FieldValues {
        pairs.iter().copied().collect()
    }

    #[rstest]
    #[case("15", 15.0)]
    #[case("15abc", 15.0)]
    #[case("  -2.5e1x", -25.0)]
    #[case(".5", 0.5)]
    #[case("3.", 3.0)]
    #[case("1e", 1.0)]
    #[case("1٥", 1.0)]
    #[case("2.5٣", 2.5)]
    fn parses_numeric_prefix(#[case] input: &str, #[case] expected: f64) {
        assert_eq!(parse_number(input), expected);
    }

    #[rstest]
    #[case("abc")]
    #[case("")]
    #[case("-")]
    #[case(".")]
    fn non_numeric_is_nan(#[case] input: &str) {
        assert!(parse_number(input).is_nan());
    }

    #[rstest]
    #[case("15", false)]
    #[case("18", true)]
    #[case("45", true)]
    #[case("120", true)]
    #[case("121", false)]
    #[case("abc", false)]
    fn between_is_inclusive(#[case] input: &str, #[case] ok: bool) {
        let cond = Condition::Between {
            min: 18.0,
            max: 120.0,
        };
        let result = cond.check(&input.into(), &FieldValues::new());
        assert_eq!(result.is_ok(), ok);
        if !ok {
            assert_eq!(result.unwrap_err(), "Value must be between 18 and 120");
        }
    }

    #[test]
    fn greater_and_less_than_reference_other_field() {
        let all = values(&[("min", "10"), ("max", "20")]);
        let gt = Condition::GreaterThan("min".into());
        let lt = Condition::LessThan("max".into());

        assert!(gt.check(&"11".into(), &all).is_ok());
        assert_eq!(
            gt.check(&"10".into(), &all).unwrap_err(),
            "Value must be greater than min"
        );
        assert!(lt.check(&"19".into(), &all).is_ok());
        assert_eq!(
            lt.check(&"25".into(), &all).unwrap_err(),
            "Value must be less than max"
        );
    }

    #[test]
    fn missing_reference_field_fails_numeric_compare() {
        let gt = Condition::GreaterThan("absent".into());
        assert!(gt.check(&"100".into(), &FieldValues::new()).is_err());
    }

    #[test]
    fn equals_field_and_literal() {
        let all = values(&[("country", "NL")]);
        let eq_field = Condition::Equals(Operand::Field("country".into()));
        let eq_lit = Condition::Equals(Operand::Literal("yes".into()));

        assert!(eq_field.check(&"NL".into(), &all).is_ok());
        assert_eq!(
            eq_field.check(&"DE".into(), &all).unwrap_err(),
            "Value must equal country"
        );
        assert!(eq_lit.check(&"yes".into(), &all).is_ok());
        assert!(eq_lit.check(&true.into(), &all).is_err());
        assert!(
            Condition::Equals(Operand::Literal("true".into()))
                .check(&true.into(), &all)
                .is_ok()
        );
    }

    #[test]
    fn not_equals_passes_on_missing_reference() {
        let all = values(&[("old", "hunter2")]);
        let ne = Condition::NotEquals(Operand::Field("old".into()));

        assert!(ne.check(&"hunter3".into(), &all).is_ok());
        assert_eq!(
            ne.check(&"hunter2".into(), &all).unwrap_err(),
            "Value must not equal old"
        );
        let missing = Condition::NotEquals(Operand::Field("nope".into()));
        assert!(missing.check(&"x".into(), &all).is_ok());
    }

    #[test]
    fn matches_searches_anywhere() {
        let cond = Condition::matches(regex::Regex::new(r"\d").unwrap());
        assert!(cond.check(&"abc1".into(), &FieldValues::new()).is_ok());
        assert_eq!(
            cond.check(&"abc".into(), &FieldValues::new()).unwrap_err(),
            "Value does not match required pattern"
        );
    }

    #[test]
    fn custom_sees_all_values() {
        let all = values(&[("plan", "pro")]);
        let cond = Condition::custom(|value, all| {
            all.text("plan").as_deref() != Some("pro") || !value.as_text().is_empty()
        });

        assert!(cond.check(&"ACME".into(), &all).is_ok());
        assert_eq!(
            cond.check(&"".into(), &all).unwrap_err(),
            "Custom validation failed"
        );
    }

    #[test]
    fn debug_elides_closures() {
        let cond = Condition::custom(|_, _| true);
        assert_eq!(format!("{cond:?}"), r#"Custom("<function>")"#);
    }
}
