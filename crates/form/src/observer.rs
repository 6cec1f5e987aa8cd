//! Validation lifecycle observers.
//!
//! The engine notifies its observer around every full validation and after
//! every applied single-field validation. Observers cannot influence the
//! result.

use std::fmt;

use formedible_validator::FieldErrors;

/// Receives validation lifecycle notifications.
///
/// Every method defaults to a no-op, so implementors override only what they
/// need.
pub trait FormObserver: Send + Sync {
    /// A full validation is about to run.
    fn on_validate_start(&self) {}

    /// A full validation finished with no invalid fields.
    fn on_validate_success(&self) {}

    /// A full validation finished with at least one invalid field.
    fn on_validate_error(&self, errors: &FieldErrors) {
        let _ = errors;
    }

    /// A single-field validation result was applied.
    fn on_field_validate(&self, field: &str, valid: bool) {
        let _ = (field, valid);
    }
}

/// Observer that ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl FormObserver for NoopObserver {}

type StartFn = Box<dyn Fn() + Send + Sync>;
type ErrorFn = Box<dyn Fn(&FieldErrors) + Send + Sync>;
type FieldFn = Box<dyn Fn(&str, bool) + Send + Sync>;

/// Observer built from optional closures.
///
/// ```rust,ignore
/// use formedible_form::FormCallbacks;
///
/// let callbacks = FormCallbacks::new()
///     .on_validate_success(|| println!("ready to send"))
///     .on_validate_error(|errors| eprintln!("{} invalid", errors.invalid().count()));
/// ```
#[derive(Default)]
pub struct FormCallbacks {
    start: Option<StartFn>,
    success: Option<StartFn>,
    error: Option<ErrorFn>,
    field: Option<FieldFn>,
}

impl FormCallbacks {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn on_validate_start(mut self, f: impl Fn() + Send + Sync + 'static) -> Self {
        self.start = Some(Box::new(f));
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn on_validate_success(mut self, f: impl Fn() + Send + Sync + 'static) -> Self {
        self.success = Some(Box::new(f));
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn on_validate_error(mut self, f: impl Fn(&FieldErrors) + Send + Sync + 'static) -> Self {
        self.error = Some(Box::new(f));
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn on_field_validate(mut self, f: impl Fn(&str, bool) + Send + Sync + 'static) -> Self {
        self.field = Some(Box::new(f));
        self
    }
}

impl FormObserver for FormCallbacks {
    fn on_validate_start(&self) {
        if let Some(f) = &self.start {
            f();
        }
    }

    fn on_validate_success(&self) {
        if let Some(f) = &self.success {
            f();
        }
    }

    fn on_validate_error(&self, errors: &FieldErrors) {
        if let Some(f) = &self.error {
            f(errors);
        }
    }

    fn on_field_validate(&self, field: &str, valid: bool) {
        if let Some(f) = &self.field {
            f(field, valid);
        }
    }
}

impl fmt::Debug for FormCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormCallbacks")
            .field("on_validate_start", &self.start.is_some())
            .field("on_validate_success", &self.success.is_some())
            .field("on_validate_error", &self.error.is_some())
            .field("on_field_validate", &self.field.is_some())
            .finish()
    }
}
