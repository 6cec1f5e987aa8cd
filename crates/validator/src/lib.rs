//! # formedible-validator
//!
//! Declarative, configuration-driven validation of form fields.
//!
//! A form is described by a [`FieldRules`] registry mapping field names to
//! [`FieldConfig`]s. Given the current [`FieldValues`], the evaluator computes
//! a [`FieldStatus`] per field, and [`FieldGroup`]s layer cross-field rules
//! over the per-field results without ever replacing a field's own error.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use formedible_validator::*;
//!
//! let rules = FieldRules::new()
//!     .with("username", FieldConfig::new().required())
//!     .with("password", FieldConfig::new().required().min_length(8));
//!
//! let values: FieldValues = [("username", ""), ("password", "short")]
//!     .into_iter()
//!     .collect();
//!
//! let errors = evaluate_all_fields(&values, &rules, &FieldGroups::default());
//! assert_eq!(errors.message("username"), Some("This field is required"));
//! assert_eq!(errors.message("password"), Some("Minimum length is 8"));
//! ```
//!
//! ## Rule order
//!
//! [`evaluate_field`] checks rules in a fixed order and stops at the first
//! failure: required, logic, min/max length, equal/not-equal, email, phone,
//! date, url, file, custom, condition. Async validators are driven by the
//! form engine, not by this crate.
//!
//! ## Built-in validators
//!
//! Length and format rules are backed by [`Validate`](foundation::Validate)
//! implementations in [`validators`], declared with the [`validator!`] macro.

pub mod condition;
pub mod config;
pub mod error;
pub mod evaluate;
pub mod foundation;
pub mod group;
mod macros;
pub mod message;
pub mod report;
pub mod rules;
pub mod validators;
pub mod value;

pub use condition::{Condition, ConditionFn, Operand, parse_number};
pub use config::{
    AsyncOutcome, AsyncValidatorFn, CustomFn, FieldConfig, LogicFn, NamedFieldConfig,
};
pub use error::{AsyncValidatorError, BoxError, RuleViolation};
pub use evaluate::{evaluate_field, evaluate_registered};
pub use group::{
    FieldGroup, FieldGroups, GroupFn, apply_groups, evaluate_all_fields, evaluate_fields,
    evaluate_group,
};
pub use message::{ASYNC_FAILED, RuleKind, RuleMessages};
pub use report::{FieldErrors, FieldStatus};
pub use rules::FieldRules;
pub use value::{FieldValue, FieldValues};
