//! Per-field rule configuration.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use futures::future::BoxFuture;

use crate::condition::Condition;
use crate::error::AsyncValidatorError;
use crate::message::{RuleKind, RuleMessages};
use crate::value::{FieldValue, FieldValues};

/// Cross-field predicate; the field fails when it returns `false`.
pub type LogicFn = Arc<dyn Fn(&FieldValues) -> bool + Send + Sync>;

/// Custom synchronous validator; `Some(message)` is a failure.
pub type CustomFn = Arc<dyn Fn(&FieldValue, &FieldValues) -> Option<String> + Send + Sync>;

/// Result of an async validator: `Ok(None)` accepts, `Ok(Some(message))`
/// rejects, `Err` means no verdict could be reached.
pub type AsyncOutcome = Result<Option<String>, AsyncValidatorError>;

/// Custom asynchronous validator. Receives owned snapshots so the future
/// can outlive the borrow of the form.
pub type AsyncValidatorFn =
    Arc<dyn Fn(FieldValue, FieldValues) -> BoxFuture<'static, AsyncOutcome> + Send + Sync>;

/// Rules for a single field.
///
/// Every rule is optional; a default config accepts any value. Rules run in
/// a fixed order and the first failure wins, see
/// [`evaluate_field`](crate::evaluate_field).
///
/// # Examples
///
/// ```rust,ignore
/// use formedible_validator::{FieldConfig, RuleKind};
///
/// let password = FieldConfig::new()
///     .required()
///     .min_length(8)
///     .message(RuleKind::MinLength, "Use at least 8 characters");
/// ```
#[derive(Clone, Default)]
pub struct FieldConfig {
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    /// Name of a field this one must equal.
    pub equal_to: Option<String>,
    /// Name of a field this one must differ from.
    pub not_equal: Option<String>,
    pub email: bool,
    pub phone: bool,
    pub date: bool,
    pub url: bool,
    pub file: bool,
    pub logic: Option<LogicFn>,
    pub custom: Option<CustomFn>,
    /// Runs only after every synchronous rule passed.
    pub async_validate: Option<AsyncValidatorFn>,
    pub condition: Option<Condition>,
    /// Fallback message for a failed condition when no
    /// [`RuleKind::Condition`] override is set.
    pub condition_message: Option<String>,
    pub messages: RuleMessages,
    /// Value the field holds when it is first registered.
    pub initial_value: FieldValue,
}

impl FieldConfig {
    /// A config with no rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Require this field to equal the value of `field`.
    #[must_use = "builder methods must be chained or built"]
    pub fn equal_to(mut self, field: impl Into<String>) -> Self {
        self.equal_to = Some(field.into());
        self
    }

    /// Require this field to differ from the value of `field`.
    #[must_use = "builder methods must be chained or built"]
    pub fn not_equal(mut self, field: impl Into<String>) -> Self {
        self.not_equal = Some(field.into());
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn email(mut self) -> Self {
        self.email = true;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn phone(mut self) -> Self {
        self.phone = true;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn date(mut self) -> Self {
        self.date = true;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn url(mut self) -> Self {
        self.url = true;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn file(mut self) -> Self {
        self.file = true;
        self
    }

    /// Attach a cross-field predicate.
    #[must_use = "builder methods must be chained or built"]
    pub fn logic<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&FieldValues) -> bool + Send + Sync + 'static,
    {
        self.logic = Some(Arc::new(predicate));
        self
    }

    /// Attach a custom synchronous validator.
    #[must_use = "builder methods must be chained or built"]
    pub fn custom<F>(mut self, validator: F) -> Self
    where
        F: Fn(&FieldValue, &FieldValues) -> Option<String> + Send + Sync + 'static,
    {
        self.custom = Some(Arc::new(validator));
        self
    }

    /// Attach an async validator, e.g. a username availability lookup.
    #[must_use = "builder methods must be chained or built"]
    pub fn async_validate<F, Fut>(mut self, validator: F) -> Self
    where
        F: Fn(FieldValue, FieldValues) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = AsyncOutcome> + Send + 'static,
    {
        self.async_validate = Some(Arc::new(move |value: FieldValue, all: FieldValues| {
            Box::pin(validator(value, all)) as BoxFuture<'static, AsyncOutcome>
        }));
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn condition(mut self, condition: Condition) -> Self {
        self.condition = Some(condition);
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn condition_message(mut self, message: impl Into<String>) -> Self {
        self.condition_message = Some(message.into());
        self
    }

    /// Override the message for one rule kind.
    #[must_use = "builder methods must be chained or built"]
    pub fn message(mut self, rule: RuleKind, message: impl Into<String>) -> Self {
        self.messages = self.messages.with(rule, message);
        self
    }

    /// Replace all message overrides.
    #[must_use = "builder methods must be chained or built"]
    pub fn messages(mut self, messages: RuleMessages) -> Self {
        self.messages = messages;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn initial_value(mut self, value: impl Into<FieldValue>) -> Self {
        self.initial_value = value.into();
        self
    }

    /// Whether an async validator is attached.
    #[must_use]
    pub fn has_async(&self) -> bool {
        self.async_validate.is_some()
    }
}

impl fmt::Debug for FieldConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldConfig")
            .field("required", &self.required)
            .field("min_length", &self.min_length)
            .field("max_length", &self.max_length)
            .field("equal_to", &self.equal_to)
            .field("not_equal", &self.not_equal)
            .field("email", &self.email)
            .field("phone", &self.phone)
            .field("date", &self.date)
            .field("url", &self.url)
            .field("file", &self.file)
            .field("logic", &self.logic.is_some())
            .field("custom", &self.custom.is_some())
            .field("async_validate", &self.async_validate.is_some())
            .field("condition", &self.condition)
            .field("condition_message", &self.condition_message)
            .field("messages", &self.messages)
            .field("initial_value", &self.initial_value)
            .finish()
    }
}

/// A field config paired with the name it registers under.
#[derive(Debug, Clone)]
pub struct NamedFieldConfig {
    pub name: String,
    pub config: FieldConfig,
}

impl NamedFieldConfig {
    pub fn new(name: impl Into<String>, config: FieldConfig) -> Self {
        Self {
            name: name.into(),
            config,
        }
    }
}
