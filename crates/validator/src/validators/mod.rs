//! Built-in validators
//!
//! Ready-to-use validators backing the length and format rules of a
//! [`FieldConfig`](crate::FieldConfig).
//!
//! # Examples
//!
//! ```rust,ignore
//! use formedible_validator::foundation::Validate;
//! use formedible_validator::validators::*;
//!
//! assert!(min_length(3).validate("abc").is_ok());
//! assert!(email().validate("user@example.com").is_ok());
//! assert!(phone().validate("+15551234567").is_ok());
//! ```

pub mod content;
pub mod length;

pub use content::{
    Email, IsoDate, MatchesRegex, Phone, Url, email, iso_date, matches_regex, phone, url,
};
pub use length::{MaxLength, MinLength, max_length, min_length};
