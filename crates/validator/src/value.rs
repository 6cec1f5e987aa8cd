//! Field values as the form holds them.

use std::borrow::Cow;
use std::fmt;
use std::ops::Index;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The value of a single form field.
///
/// Forms only ever hold text or a checkbox flag. Rules that need a string
/// (lengths, formats, equality) read [`as_text`](Self::as_text).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Free text input.
    Text(String),
    /// Checkbox or toggle.
    Bool(bool),
}

impl FieldValue {
    /// The empty text value every field starts with unless configured otherwise.
    #[must_use]
    pub const fn empty() -> Self {
        Self::Text(String::new())
    }

    /// String form of the value. Booleans render as `true` / `false`.
    #[must_use]
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            Self::Text(text) => Cow::Borrowed(text),
            Self::Bool(true) => Cow::Borrowed("true"),
            Self::Bool(false) => Cow::Borrowed("false"),
        }
    }

    /// Presence test used by the required and file rules.
    ///
    /// Empty text and `false` are falsy. Any non-empty text is truthy,
    /// including the text `"false"`.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Text(text) => !text.is_empty(),
            Self::Bool(flag) => *flag,
        }
    }
}

impl Default for FieldValue {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_text())
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// Values of every field in a form, keyed by field name.
///
/// Insertion order is preserved so that error reports and observers see
/// fields in registration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldValues {
    values: IndexMap<String, FieldValue>,
}

impl FieldValues {
    /// Create an empty value set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a value by field name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    /// String form of a value, if the field exists.
    #[must_use]
    pub fn text(&self, name: &str) -> Option<Cow<'_, str>> {
        self.values.get(name).map(FieldValue::as_text)
    }

    /// Set a field's value, returning the previous one.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<FieldValue>,
    ) -> Option<FieldValue> {
        self.values.insert(name.into(), value.into())
    }

    /// Remove a field, keeping the order of the remaining ones.
    pub fn remove(&mut self, name: &str) -> Option<FieldValue> {
        self.values.shift_remove(name)
    }

    /// Whether a value exists for the field.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Field names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// The number of values stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether there are no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for FieldValues
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl Index<&str> for FieldValues {
    type Output = FieldValue;

    fn index(&self, name: &str) -> &Self::Output {
        &self.values[name]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn truthiness() {
        assert!(!FieldValue::empty().is_truthy());
        assert!(!FieldValue::Bool(false).is_truthy());
        assert!(FieldValue::Bool(true).is_truthy());
        assert!(FieldValue::from("x").is_truthy());
        assert!(FieldValue::from("false").is_truthy());
    }

    #[test]
    fn text_coercion() {
        assert_eq!(FieldValue::Bool(true).as_text(), "true");
        assert_eq!(FieldValue::from("abc").as_text(), "abc");
        assert_eq!(FieldValue::Bool(false).to_string(), "false");
    }

    #[test]
    fn insert_get_remove() {
        let mut vals = FieldValues::new();
        vals.insert("email", "a@b.io");
        vals.insert("terms", true);

        assert_eq!(vals.get("email"), Some(&FieldValue::from("a@b.io")));
        assert_eq!(vals.text("terms").as_deref(), Some("true"));
        assert_eq!(vals.len(), 2);

        assert_eq!(vals.remove("email"), Some(FieldValue::from("a@b.io")));
        assert!(!vals.contains("email"));
        assert!(vals.remove("email").is_none());
    }

    #[test]
    fn preserves_insertion_order() {
        let mut vals: FieldValues = [("c", "3"), ("a", "1"), ("b", "2")].into_iter().collect();
        vals.remove("a");
        vals.insert("d", "4");

        let names: Vec<_> = vals.names().collect();
        assert_eq!(names, ["c", "b", "d"]);
    }

    #[test]
    fn serde_untagged() {
        let vals: FieldValues = [("name", FieldValue::from("Ada")), ("terms", true.into())]
            .into_iter()
            .collect();

        let json = serde_json::to_value(&vals).unwrap();
        assert_eq!(json, json!({"name": "Ada", "terms": true}));

        let back: FieldValues = serde_json::from_value(json).unwrap();
        assert_eq!(back, vals);
    }
}
