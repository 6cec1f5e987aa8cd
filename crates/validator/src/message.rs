//! Rule kinds and message resolution.
//!
//! Every failing rule resolves its message the same way: a per-field override
//! for the rule kind, then (for conditional rules) the field's
//! `condition_message`, then the built-in default. For custom and async
//! validators the default is whatever the validator itself returned.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The rule that produced a validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RuleKind {
    Required,
    Logic,
    MinLength,
    MaxLength,
    EqualTo,
    NotEqual,
    Email,
    Phone,
    Date,
    Url,
    File,
    Custom,
    Async,
    Condition,
    /// A value is present for a field that has no registered rules.
    Configuration,
}

impl RuleKind {
    /// Stable lowercase identifier, as used in logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Logic => "logic",
            Self::MinLength => "min_length",
            Self::MaxLength => "max_length",
            Self::EqualTo => "equal_to",
            Self::NotEqual => "not_equal",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Date => "date",
            Self::Url => "url",
            Self::File => "file",
            Self::Custom => "custom",
            Self::Async => "async",
            Self::Condition => "condition",
            Self::Configuration => "configuration",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-field message overrides, one per rule kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RuleMessages {
    pub required: Option<String>,
    pub logic: Option<String>,
    pub min_length: Option<String>,
    pub max_length: Option<String>,
    pub equal_to: Option<String>,
    pub not_equal: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub date: Option<String>,
    pub url: Option<String>,
    pub file: Option<String>,
    pub custom: Option<String>,
    #[serde(rename = "async")]
    pub async_validate: Option<String>,
    pub condition: Option<String>,
}

impl RuleMessages {
    /// Create an empty override set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the override for `rule`.
    ///
    /// [`RuleKind::Configuration`] has no override slot and is ignored.
    #[must_use = "builder methods must be chained or built"]
    pub fn with(mut self, rule: RuleKind, message: impl Into<String>) -> Self {
        if let Some(slot) = self.slot_mut(rule) {
            *slot = Some(message.into());
        }
        self
    }

    /// The override configured for `rule`, if any.
    #[must_use]
    pub fn get(&self, rule: RuleKind) -> Option<&str> {
        let slot = match rule {
            RuleKind::Required => &self.required,
            RuleKind::Logic => &self.logic,
            RuleKind::MinLength => &self.min_length,
            RuleKind::MaxLength => &self.max_length,
            RuleKind::EqualTo => &self.equal_to,
            RuleKind::NotEqual => &self.not_equal,
            RuleKind::Email => &self.email,
            RuleKind::Phone => &self.phone,
            RuleKind::Date => &self.date,
            RuleKind::Url => &self.url,
            RuleKind::File => &self.file,
            RuleKind::Custom => &self.custom,
            RuleKind::Async => &self.async_validate,
            RuleKind::Condition => &self.condition,
            RuleKind::Configuration => return None,
        };
        slot.as_deref()
    }

    fn slot_mut(&mut self, rule: RuleKind) -> Option<&mut Option<String>> {
        Some(match rule {
            RuleKind::Required => &mut self.required,
            RuleKind::Logic => &mut self.logic,
            RuleKind::MinLength => &mut self.min_length,
            RuleKind::MaxLength => &mut self.max_length,
            RuleKind::EqualTo => &mut self.equal_to,
            RuleKind::NotEqual => &mut self.not_equal,
            RuleKind::Email => &mut self.email,
            RuleKind::Phone => &mut self.phone,
            RuleKind::Date => &mut self.date,
            RuleKind::Url => &mut self.url,
            RuleKind::File => &mut self.file,
            RuleKind::Custom => &mut self.custom,
            RuleKind::Async => &mut self.async_validate,
            RuleKind::Condition => &mut self.condition,
            RuleKind::Configuration => return None,
        })
    }

    /// Resolve the message for a failed `rule`.
    ///
    /// `condition_message` only applies to [`RuleKind::Condition`]. The
    /// `default` closure is evaluated only when nothing overrides it.
    pub fn resolve(
        &self,
        rule: RuleKind,
        condition_message: Option<&str>,
        default: impl FnOnce() -> String,
    ) -> String {
        if let Some(message) = self.get(rule) {
            return message.to_owned();
        }
        if rule == RuleKind::Condition
            && let Some(message) = condition_message
        {
            return message.to_owned();
        }
        default()
    }
}

pub(crate) const REQUIRED: &str = "This field is required";
pub(crate) const LOGIC: &str = "Logic validation failed";
pub(crate) const FILE: &str = "File is required";
pub(crate) const CONFIGURATION: &str = "Configuration error";

/// Default message for a failed async validator.
pub const ASYNC_FAILED: &str = "Async validation failed";

pub(crate) fn equal_to(field: &str) -> String {
    format!("This field must match with {field}")
}

pub(crate) fn not_equal(field: &str) -> String {
    format!("This field must not match with {field}")
}
