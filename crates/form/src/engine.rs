//! The form engine: state, rules, groups and the validation protocol.

use formedible_validator::{
    FieldErrors, FieldGroup, FieldGroups, FieldRules, FieldStatus, FieldValues, NamedFieldConfig,
    RuleViolation, apply_groups, evaluate_fields, evaluate_registered,
};

use crate::config::FormConfig;
use crate::error::FormError;
use crate::observer::{FormObserver, NoopObserver};
use crate::state::FormState;
use crate::token::{FieldTokens, ValidationToken};
use crate::transition::Transition;
use crate::validation::{
    AsyncCheck, FieldValidationApplied, FieldValidationOutcome, PendingFieldValidation,
};

/// A form session.
///
/// Owns the rule registry, the groups and the [`FormState`]. All mutation
/// goes through [`dispatch`](Self::dispatch) or the helpers built on it, so
/// the observer and the revalidation policy see every change.
///
/// # Examples
///
/// ```rust,ignore
/// use formedible_form::{FormEngine, Transition};
/// use formedible_validator::{FieldConfig, FieldRules};
///
/// let rules = FieldRules::new()
///     .with("username", FieldConfig::new().required())
///     .with("password", FieldConfig::new().required().min_length(8));
/// let mut form = FormEngine::new(rules);
///
/// form.dispatch(Transition::Change { field: "username".into(), value: "ada".into() }).await?;
/// form.dispatch(Transition::Submit).await?;
/// assert_eq!(form.state().errors.message("password"), Some("This field is required"));
/// ```
pub struct FormEngine {
    state: FormState,
    rules: FieldRules,
    groups: FieldGroups,
    observer: Box<dyn FormObserver>,
    config: FormConfig,
    tokens: FieldTokens,
}

impl FormEngine {
    /// Start a session with every registered field at its initial value.
    #[must_use]
    pub fn new(rules: FieldRules) -> Self {
        let state = FormState::from_rules(&rules);
        let mut tokens = FieldTokens::default();
        for field in state.values.names() {
            tokens.bump(field);
        }
        Self {
            state,
            rules,
            groups: FieldGroups::default(),
            observer: Box::new(NoopObserver),
            config: FormConfig::default(),
            tokens,
        }
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_groups(mut self, groups: FieldGroups) -> Self {
        self.groups = groups;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_observer(mut self, observer: impl FormObserver + 'static) -> Self {
        self.observer = Box::new(observer);
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_config(mut self, config: FormConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn state(&self) -> &FormState {
        &self.state
    }

    #[must_use]
    pub fn rules(&self) -> &FieldRules {
        &self.rules
    }

    #[must_use]
    pub fn groups(&self) -> &FieldGroups {
        &self.groups
    }

    #[must_use]
    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    /// Current validation token of `field`.
    #[must_use]
    pub fn token(&self, field: &str) -> ValidationToken {
        self.tokens.current(field)
    }

    // ------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------

    /// Apply a transition and run the side effects it triggers.
    ///
    /// `SUBMIT` runs a full validation. Once the form is submitted, every
    /// transition that changes the value set runs one too, unless
    /// [`FormConfig::revalidate_after_submit`] is off.
    ///
    /// `CHANGE`, `BLUR` and `VALIDATE_FIELD` must name a registered field.
    pub async fn dispatch(&mut self, transition: Transition) -> Result<(), FormError> {
        if let Transition::Change { field, .. }
        | Transition::Blur { field }
        | Transition::ValidateField { field, .. } = &transition
            && !self.state.values.contains(field)
        {
            return Err(FormError::UnknownField(field.clone()));
        }

        let validate = match &transition {
            Transition::Submit => true,
            t => t.changes_values() && self.state.submitted && self.config.revalidate_after_submit,
        };

        self.apply(transition);

        if validate {
            self.validate_all_fields().await;
        }
        Ok(())
    }

    /// Decode a JSON transition and dispatch it.
    pub async fn dispatch_json(&mut self, json: &str) -> Result<(), FormError> {
        let transition = Transition::from_json(json)?;
        self.dispatch(transition).await
    }

    /// Reducer plus token bookkeeping. No observer calls.
    fn apply(&mut self, transition: Transition) {
        tracing::debug!(
            transition = transition.kind(),
            field = transition.field().unwrap_or_default(),
            "applying transition"
        );

        match &transition {
            Transition::Change { field, .. } | Transition::AddField { field, .. } => {
                self.tokens.bump(field);
            }
            Transition::RemoveField { field } => self.tokens.remove(field),
            Transition::Validate(_) => self.tokens.bump_all(),
            Transition::Blur { .. } | Transition::Submit | Transition::ValidateField { .. } => {}
        }

        self.state.apply(transition);
    }

    // ------------------------------------------------------------------
    // Validation
    // ------------------------------------------------------------------

    /// Run the synchronous rules of one registered field against the
    /// current values, without touching the form.
    pub fn evaluate_field(&self, field: &str) -> Result<(), RuleViolation> {
        evaluate_registered(field, &self.rules, &self.state.values)
    }

    /// Validate every field and replace the form's errors.
    ///
    /// Fields whose synchronous rules pass have their async validator
    /// awaited (see [`FormConfig::await_async_on_full_validation`]); group
    /// rules are overlaid last. The observer hears `on_validate_start`
    /// first and exactly one of `on_validate_success` / `on_validate_error`
    /// at the end.
    pub async fn validate_all_fields(&mut self) -> FieldErrors {
        self.observer.on_validate_start();

        let values = self.state.values.clone();
        let mut errors = evaluate_fields(&values, &self.rules);

        if self.config.await_async_on_full_validation {
            let checks: Vec<(String, AsyncCheck)> = errors
                .iter()
                .filter(|(_, status)| status.is_valid())
                .filter_map(|(field, _)| {
                    self.async_check(field, &values)
                        .map(|check| (field.to_owned(), check))
                })
                .collect();

            for (field, check) in checks {
                let status = check.run(&field).await;
                errors.set(field, status);
            }
        }

        apply_groups(&mut errors, &self.groups, &values);
        self.apply(Transition::Validate(errors.clone()));

        if errors.has_errors() {
            tracing::debug!(invalid = errors.invalid().count(), "form validation failed");
            self.observer.on_validate_error(&errors);
        } else {
            tracing::debug!(fields = errors.len(), "form validation passed");
            self.observer.on_validate_success();
        }

        errors
    }

    /// Validate one field: synchronous rules, then its async validator if
    /// they passed. The result is applied as `VALIDATE_FIELD`.
    pub async fn validate_single_field(
        &mut self,
        field: &str,
    ) -> Result<FieldValidationApplied, FormError> {
        let pending = self.begin_field_validation(field)?;
        let outcome = pending.resolve().await;
        Ok(self.finish_field_validation(outcome))
    }

    /// Start validating `field` and issue it a fresh token.
    ///
    /// The synchronous rules run now, against the current values. If they
    /// pass and the field has an async validator, the returned pending
    /// validation carries an owned snapshot for it.
    pub fn begin_field_validation(
        &mut self,
        field: &str,
    ) -> Result<PendingFieldValidation, FormError> {
        if !self.state.values.contains(field) {
            return Err(FormError::UnknownField(field.to_owned()));
        }

        let token = self.tokens.bump(field);
        let status = FieldStatus::from(self.evaluate_field(field));
        tracing::debug!(field = %field, %token, "field validation started");

        if status.is_valid()
            && let Some(check) = self.async_check(field, &self.state.values)
        {
            return Ok(PendingFieldValidation::awaiting(
                field.to_owned(),
                token,
                check,
            ));
        }
        Ok(PendingFieldValidation::decided(
            field.to_owned(),
            token,
            status,
        ))
    }

    /// Apply a resolved single-field validation if it is still current.
    pub fn finish_field_validation(
        &mut self,
        outcome: FieldValidationOutcome,
    ) -> FieldValidationApplied {
        let FieldValidationOutcome {
            field,
            token,
            status,
        } = outcome;

        if !self.tokens.is_current(&field, token) {
            tracing::warn!(
                field = %field,
                %token,
                current = %self.tokens.current(&field),
                "discarding stale field validation"
            );
            return FieldValidationApplied::Stale;
        }

        let valid = !status.is_invalid();
        self.apply(Transition::ValidateField {
            field: field.clone(),
            status: status.clone(),
        });
        self.observer.on_field_validate(&field, valid);
        FieldValidationApplied::Applied(status)
    }

    fn async_check(&self, field: &str, values: &FieldValues) -> Option<AsyncCheck> {
        let config = self.rules.get(field)?;
        let validator = config.async_validate.clone()?;
        Some(AsyncCheck {
            validator,
            value: values.get(field).cloned().unwrap_or_default(),
            values: values.clone(),
            messages: config.messages.clone(),
        })
    }

    // ------------------------------------------------------------------
    // Dynamic fields and groups
    // ------------------------------------------------------------------

    /// Register a field at runtime and add it to the form.
    ///
    /// An existing field with the same name has its rules replaced and its
    /// value reset to the new initial value.
    pub async fn add_field(&mut self, named: NamedFieldConfig) -> Result<(), FormError> {
        let NamedFieldConfig { name, config } = named;
        if name.is_empty() {
            return Err(FormError::MissingFieldName);
        }

        let initial_value = config.initial_value.clone();
        self.rules.insert(name.as_str(), config);
        tracing::debug!(field = %name, "field registered");

        self.dispatch(Transition::AddField {
            field: name,
            initial_value,
        })
        .await
    }

    /// Unregister a field and drop its value, status and touched flag.
    pub async fn remove_field(&mut self, name: &str) -> Result<(), FormError> {
        self.rules.remove(name);
        tracing::debug!(field = %name, "field unregistered");

        self.dispatch(Transition::RemoveField {
            field: name.to_owned(),
        })
        .await
    }

    /// Register a group, replacing any group with the same name.
    pub fn add_group(&mut self, name: impl Into<String>, group: FieldGroup) -> Option<FieldGroup> {
        self.groups.insert(name.into(), group)
    }

    pub fn remove_group(&mut self, name: &str) -> Option<FieldGroup> {
        self.groups.shift_remove(name)
    }
}

impl std::fmt::Debug for FormEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormEngine")
            .field("state", &self.state)
            .field("rules", &self.rules)
            .field("groups", &self.groups)
            .field("config", &self.config)
            .finish()
    }
}
