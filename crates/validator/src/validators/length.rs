//! String length validators
//!
//! Length is measured in Unicode scalar values (chars), so `"héllo"` has
//! length 5 regardless of its UTF-8 byte width.

use crate::foundation::ValidationError;

#[inline]
fn measure(input: &str) -> usize {
    input.chars().count()
}

// ============================================================================
// MIN LENGTH
// ============================================================================

crate::validator! {
    /// Validates that a string has at least a minimum length.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MinLength { min: usize } for str;
    rule(self, input) { measure(input) >= self.min }
    error(self, input) { ValidationError::min_length(self.min, measure(input)) }
    new(min: usize) { Self { min } }
    fn min_length(min: usize);
}

// ============================================================================
// MAX LENGTH
// ============================================================================

crate::validator! {
    /// Validates that a string does not exceed a maximum length.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MaxLength { max: usize } for str;
    rule(self, input) { measure(input) <= self.max }
    error(self, input) { ValidationError::max_length(self.max, measure(input)) }
    new(max: usize) { Self { max } }
    fn max_length(max: usize);
}

// ============================================================================
// TESTS
// ============================================================================
