//! Subscriber construction.

use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

use crate::config::{Config, Format};
use crate::error::{LogError, LogResult};

/// Install a global subscriber configured from the environment.
///
/// See [`Config::from_env`].
pub fn auto_init() -> LogResult<()> {
    init_with(Config::from_env())
}

/// Install a global subscriber for `config`.
///
/// Fails if the level directive does not parse or a subscriber is already
/// installed.
pub fn init_with(config: Config) -> LogResult<()> {
    let filter = make_filter(&config.level)?;
    let registry = Registry::default().with(filter);

    let installed = match config.format {
        Format::Compact => registry
            .with(fmt::layer().compact().with_ansi(config.ansi))
            .try_init(),
        Format::Pretty => registry
            .with(fmt::layer().pretty().with_ansi(config.ansi))
            .try_init(),
        Format::Json => registry
            .with(fmt::layer().json().with_ansi(false))
            .try_init(),
    };
    installed.map_err(|e| LogError::Init(e.to_string()))?;

    tracing::debug!(level = %config.level, format = ?config.format, "logger initialized");
    Ok(())
}

pub(crate) fn make_filter(level: &str) -> LogResult<EnvFilter> {
    EnvFilter::try_new(level).map_err(|e| LogError::Filter(format!("{level}: {e}")))
}
