//! Per-field validation tokens for discarding stale async results.
//!
//! Every time a field's validation context changes (its value changes, it is
//! added or removed, a full validation replaces all statuses, or a new
//! single-field validation starts) the field gets a fresh token. A
//! single-field result is applied only if it still carries the field's
//! current token.

use std::collections::HashMap;
use std::fmt;

/// A monotonically increasing validation sequence number.
///
/// Token 0 is reserved for "never issued". Tokens come from one counter per
/// form, so they are strictly increasing across all fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ValidationToken(u64);

impl ValidationToken {
    /// The token of a field that has never been issued one.
    pub const NONE: Self = Self(0);

    /// Create a token from a raw value.
    #[must_use]
    pub const fn from_raw(value: u64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl Default for ValidationToken {
    fn default() -> Self {
        Self::NONE
    }
}

impl fmt::Display for ValidationToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Token({})", self.0)
    }
}

/// Current token of every field.
#[derive(Debug, Default)]
pub(crate) struct FieldTokens {
    last: u64,
    current: HashMap<String, ValidationToken>,
}

impl FieldTokens {
    fn next(&mut self) -> ValidationToken {
        self.last += 1;
        ValidationToken(self.last)
    }

    /// Issue a fresh token for `field`.
    pub(crate) fn bump(&mut self, field: &str) -> ValidationToken {
        let token = self.next();
        self.current.insert(field.to_owned(), token);
        token
    }

    /// Issue fresh tokens for every field seen so far.
    pub(crate) fn bump_all(&mut self) {
        let fields: Vec<String> = self.current.keys().cloned().collect();
        for field in fields {
            let token = self.next();
            self.current.insert(field, token);
        }
    }

    /// Forget `field`; any outstanding token for it becomes stale.
    pub(crate) fn remove(&mut self, field: &str) {
        self.current.remove(field);
    }

    pub(crate) fn current(&self, field: &str) -> ValidationToken {
        self.current.get(field).copied().unwrap_or_default()
    }

    pub(crate) fn is_current(&self, field: &str, token: ValidationToken) -> bool {
        token != ValidationToken::NONE && self.current(field) == token
    }
}
