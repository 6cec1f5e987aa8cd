//! Core validation types and traits
//!
//! This module contains the building blocks the built-in format and length
//! validators are made of:
//!
//! - **Traits**: [`Validate`]
//! - **Errors**: [`ValidationError`]
//!
//! Validators are generic over their input type, so a string validator can
//! only ever be handed a `str`:
//!
//! ```rust,ignore
//! use formedible_validator::foundation::Validate;
//! use formedible_validator::validators::email;
//!
//! assert!(email().validate("user@example.com").is_ok());
//! assert!(email().validate("user@example").is_err());
//! ```

pub mod error;
pub mod traits;

pub use error::ValidationError;
pub use traits::Validate;

/// A validation result using the standard `ValidationError`.
pub type ValidationResult<T> = Result<T, ValidationError>;
