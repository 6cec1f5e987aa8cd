//! Engine behaviour switches.

use serde::{Deserialize, Serialize};

/// Configuration for a [`FormEngine`](crate::FormEngine).
///
/// Field rules are code and are not part of this struct.
///
/// # Examples
///
/// ```rust,ignore
/// use formedible_form::FormConfig;
///
/// let config = FormConfig::new().revalidate_after_submit(false);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Re-run full validation after every change to the value set once the
    /// form has been submitted.
    pub revalidate_after_submit: bool,
    /// Await async validators during full-form validation. When `false`,
    /// only synchronous rules and groups decide the result.
    pub await_async_on_full_validation: bool,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            revalidate_after_submit: true,
            await_async_on_full_validation: true,
        }
    }
}

impl FormConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn revalidate_after_submit(mut self, enabled: bool) -> Self {
        self.revalidate_after_submit = enabled;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn await_async_on_full_validation(mut self, enabled: bool) -> Self {
        self.await_async_on_full_validation = enabled;
        self
    }
}
