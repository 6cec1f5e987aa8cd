//! # formedible-form
//!
//! Form state machine and validation orchestration on top of
//! [`formedible_validator`].
//!
//! A [`FormEngine`] owns one form session: the [`FormState`] (values,
//! per-field statuses, touched flags, submission flag), the field rule
//! registry and the group rules. State changes only through
//! [`Transition`]s; the engine adds the side effects:
//!
//! - `SUBMIT` runs a full validation, and after submission every change to
//!   the value set runs one again.
//! - Single-field validation awaits async validators and drops results that
//!   went stale while they were in flight, see [`ValidationToken`].
//! - Fields and groups can be added and removed at runtime.
//! - A [`FormObserver`] hears about every validation.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use formedible_form::{FormCallbacks, FormEngine, Transition};
//! use formedible_validator::{FieldConfig, FieldRules};
//!
//! let rules = FieldRules::new()
//!     .with("email", FieldConfig::new().required().email())
//!     .with("password", FieldConfig::new().required().min_length(8));
//!
//! let mut form = FormEngine::new(rules).with_observer(
//!     FormCallbacks::new().on_validate_success(|| println!("submitting")),
//! );
//!
//! form.dispatch_json(r#"{"type":"CHANGE","payload":{"field":"email","value":"ada@example.com"}}"#)
//!     .await?;
//! form.dispatch(Transition::Submit).await?;
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod observer;
pub mod state;
pub mod token;
pub mod transition;
pub mod validation;

pub use config::FormConfig;
pub use engine::FormEngine;
pub use error::FormError;
pub use observer::{FormCallbacks, FormObserver, NoopObserver};
pub use state::FormState;
pub use token::ValidationToken;
pub use transition::Transition;
pub use validation::{FieldValidationApplied, FieldValidationOutcome, PendingFieldValidation};
