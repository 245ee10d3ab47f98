//! Docket CLI library.
//!
//! This library provides the core functionality for the Docket command-line
//! interface, including configuration management, document sources, command
//! execution, and output formatting.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod fixtures;
pub mod output;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;

use tracing_subscriber::EnvFilter;

/// Install the log subscriber, writing to stderr.
///
/// `RUST_LOG` takes precedence; otherwise the level follows `verbosity`
/// (0 warn, 1 info, 2+ debug).
pub fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .try_init();
}
