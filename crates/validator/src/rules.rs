//! The rule registry of a form session.

use indexmap::IndexMap;

use crate::config::{FieldConfig, NamedFieldConfig};
use crate::value::FieldValues;

/// Field name to [`FieldConfig`], in registration order.
///
/// Each form owns its registry; fields added or removed at runtime only
/// affect the form they were added to.
#[derive(Debug, Clone, Default)]
pub struct FieldRules {
    configs: IndexMap<String, FieldConfig>,
}

impl FieldRules {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `config` under `name`, replacing any previous config.
    pub fn insert(&mut self, name: impl Into<String>, config: FieldConfig) -> Option<FieldConfig> {
        self.configs.insert(name.into(), config)
    }

    /// Builder form of [`insert`](Self::insert).
    #[must_use = "builder methods must be chained or built"]
    pub fn with(mut self, name: impl Into<String>, config: FieldConfig) -> Self {
        self.insert(name, config);
        self
    }

    pub fn remove(&mut self, name: &str) -> Option<FieldConfig> {
        self.configs.shift_remove(name)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FieldConfig> {
        self.configs.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.configs.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.configs.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldConfig)> {
        self.configs.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.configs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }

    /// Starting values for every registered field.
    #[must_use]
    pub fn initial_values(&self) -> FieldValues {
        self.configs
            .iter()
            .map(|(name, config)| (name.as_str(), config.initial_value.clone()))
            .collect()
    }
}

impl<K: Into<String>> FromIterator<(K, FieldConfig)> for FieldRules {
    fn from_iter<I: IntoIterator<Item = (K, FieldConfig)>>(iter: I) -> Self {
        Self {
            configs: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl FromIterator<NamedFieldConfig> for FieldRules {
    fn from_iter<I: IntoIterator<Item = NamedFieldConfig>>(iter: I) -> Self {
        iter.into_iter().map(|named| (named.name, named.config)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::FieldValue;

    #[test]
    fn insert_overwrites() {
        let mut rules = FieldRules::new();
        rules.insert("name", FieldConfig::new());
        let previous = rules.insert("name", FieldConfig::new().required());

        assert!(previous.is_some_and(|c| !c.required));
        assert!(rules.get("name").is_some_and(|c| c.required));
        assert_eq!(rules.len(), 1);
    }

    #[test]
    fn initial_values_default_to_empty_text() {
        let rules = FieldRules::new()
            .with("username", FieldConfig::new().required())
            .with("newsletter", FieldConfig::new().initial_value(false))
            .with("country", FieldConfig::new().initial_value("NL"));

        let values = rules.initial_values();
        let names: Vec<_> = values.names().collect();
        assert_eq!(names, ["username", "newsletter", "country"]);
        assert_eq!(values.get("username"), Some(&FieldValue::empty()));
        assert_eq!(values.get("newsletter"), Some(&FieldValue::Bool(false)));
        assert_eq!(values.text("country").as_deref(), Some("NL"));
    }

    #[test]
    fn remove_keeps_order() {
        let mut rules: FieldRules = [
            NamedFieldConfig::new("a", FieldConfig::new()),
            NamedFieldConfig::new("b", FieldConfig::new()),
            NamedFieldConfig::new("c", FieldConfig::new()),
        ]
        .into_iter()
        .collect();

        assert!(rules.remove("b").is_some());
        assert!(!rules.contains("b"));
        assert!(rules.remove("b").is_none());
        let names: Vec<_> = rules.names().collect();
        assert_eq!(names, ["a", "c"]);
    }
}
