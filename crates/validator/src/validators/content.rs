//! String content validators
//!
//! Format checks used by the rule evaluator. Each pattern is compiled once,
//! on first use.

use std::sync::LazyLock;

use crate::foundation::ValidationError;

static EMAIL_REGEX: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]{2,}$").unwrap());

static PHONE_REGEX: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^\+[0-9]{1,3}[0-9]{5,12}$").unwrap());

static DATE_REGEX: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").unwrap());

static URL_REGEX: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^(https?://)[^\s$.?#].[^\s]*$").unwrap());

// ============================================================================
// REGEX VALIDATOR
// ============================================================================

crate::validator! {
    /// Validates that a string matches a regular expression.
    pub MatchesRegex { pattern: regex::Regex } for str;
    rule(self, input) { self.pattern.is_match(input) }
    error(self, input) {
        ValidationError::invalid_format("regex", "Value does not match required pattern")
            .with_param("pattern", self.pattern.as_str().to_string())
    }
    new(pattern: &str) -> regex::Error {
        Ok(Self {
            pattern: regex::Regex::new(pattern)?,
        })
    }
    fn matches_regex(pattern: &str) -> regex::Error;
}

impl From<regex::Regex> for MatchesRegex {
    fn from(pattern: regex::Regex) -> Self {
        Self { pattern }
    }
}

// ============================================================================
// EMAIL VALIDATOR
// ============================================================================

crate::validator! {
    /// Validates email format: `local@domain.tld` with a TLD of two or more
    /// characters and no whitespace anywhere.
    pub Email for str;
    rule(input) { EMAIL_REGEX.is_match(input) }
    error(input) { ValidationError::invalid_format("email", "Invalid email format") }
    fn email();
}

// ============================================================================
// PHONE VALIDATOR
// ============================================================================

crate::validator! {
    /// Validates an international phone number: `+`, a 1-3 digit country
    /// code, then 5-12 digits. Separators are not accepted.
    pub Phone for str;
    rule(input) { PHONE_REGEX.is_match(input) }
    error(input) {
        ValidationError::invalid_format(
            "phone",
            "Invalid phone number format, expected +(xxx) xxxxxx",
        )
    }
    fn phone();
}

// ============================================================================
// DATE VALIDATOR
// ============================================================================

crate::validator! {
    /// Validates the `YYYY-MM-DD` shape. Calendar validity is not checked.
    pub IsoDate for str;
    rule(input) { DATE_REGEX.is_match(input) }
    error(input) {
        ValidationError::invalid_format("date", "Invalid date format, expected YYYY-MM-DD")
    }
    fn iso_date();
}

// ============================================================================
// URL VALIDATOR
// ============================================================================

crate::validator! {
    /// Validates an `http` or `https` URL.
    pub Url for str;
    rule(input) { URL_REGEX.is_match(input) }
    error(input) { ValidationError::invalid_format("url", "Invalid URL format") }
    fn url();
}

// ============================================================================
// TESTS
// ============================================================================
