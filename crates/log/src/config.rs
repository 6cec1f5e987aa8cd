//! Logger configuration and presets.

use serde::{Deserialize, Serialize};

/// Output format of the fmt layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Single-line, human readable.
    #[default]
    Compact,
    /// Multi-line with source locations.
    Pretty,
    /// One JSON object per event.
    Json,
}

impl Format {
    /// Parse a format name. Unknown names fall back to [`Format::Compact`].
    #[must_use]
    pub fn parse(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "pretty" => Self::Pretty,
            "json" => Self::Json,
            _ => Self::Compact,
        }
    }
}

/// Logger configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// `EnvFilter` directive, e.g. `info` or `formedible_form=debug,warn`.
    pub level: String,
    pub format: Format,
    /// Colored output. Ignored for JSON.
    pub ansi: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            format: Format::Compact,
            ansi: true,
        }
    }
}

impl Config {
    /// Read `FORMEDIBLE_LOG` (falling back to `RUST_LOG`) and
    /// `FORMEDIBLE_LOG_FORMAT`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) over an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(level) = lookup("FORMEDIBLE_LOG").or_else(|| lookup("RUST_LOG")) {
            config.level = level;
        }
        if let Some(format) = lookup("FORMEDIBLE_LOG_FORMAT") {
            config.format = Format::parse(&format);
        }
        config
    }

    /// Pretty output at debug level.
    #[must_use]
    pub fn development() -> Self {
        Self {
            level: "debug".to_owned(),
            format: Format::Pretty,
            ansi: true,
        }
    }

    /// JSON output at info level, no colors.
    #[must_use]
    pub fn production() -> Self {
        Self {
            level: "info".to_owned(),
            format: Format::Json,
            ansi: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[rstest]
    #[case("pretty", Format::Pretty)]
    #[case("JSON", Format::Json)]
    #[case(" compact ", Format::Compact)]
    #[case("logfmt", Format::Compact)]
    fn parse_format(#[case] name: &str, #[case] expected: Format) {
        assert_eq!(Format::parse(name), expected);
    }

    #[test]
    fn env_prefers_own_variable() {
        let config = Config::from_lookup(lookup(&[
            ("FORMEDIBLE_LOG", "formedible_form=debug"),
            ("RUST_LOG", "warn"),
            ("FORMEDIBLE_LOG_FORMAT", "json"),
        ]));
        assert_eq!(config.level, "formedible_form=debug");
        assert_eq!(config.format, Format::Json);
    }

    #[test]
    fn env_falls_back_to_rust_log() {
        let config = Config::from_lookup(lookup(&[("RUST_LOG", "warn")]));
        assert_eq!(config.level, "warn");
        assert_eq!(config.format, Format::Compact);
    }

    #[test]
    fn empty_env_is_default() {
        assert_eq!(Config::from_lookup(lookup(&[])), Config::default());
    }

    #[test]
    fn presets() {
        assert_eq!(Config::development().format, Format::Pretty);
        assert_eq!(Config::development().level, "debug");
        let production = Config::production();
        assert_eq!(production.format, Format::Json);
        assert!(!production.ansi);
    }

    #[test]
    fn deserializes_partial_config() {
        let config: Config = serde_json::from_str(r#"{"format": "pretty"}"#).unwrap();
        assert_eq!(config.format, Format::Pretty);
        assert_eq!(config.level, "info");
        assert!(config.ansi);
    }
}
