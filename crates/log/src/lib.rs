//! # formedible-log
//!
//! Installs a global `tracing` subscriber for binaries, examples and test
//! harnesses built on Formedible. The library crates only emit events; this
//! crate decides where they go.
//!
//! ```rust,ignore
//! // FORMEDIBLE_LOG=formedible_form=debug FORMEDIBLE_LOG_FORMAT=pretty
//! formedible_log::auto_init()?;
//!
//! // or explicitly
//! formedible_log::init_with(formedible_log::Config::development())?;
//! ```

mod builder;
mod config;
mod error;

pub use builder::{auto_init, init_with};
pub use config::{Config, Format};
pub use error::{LogError, LogResult};
