//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Pipeline could not be built
    #[error("{0}")]
    Router(#[from] docket_router::RouterError),

    /// Pipeline configuration file could not be loaded
    #[error("{0}")]
    PipelineConfig(#[from] docket_router::ConfigError),

    /// Requested document is not in the source
    #[error("Document '{id}' not found (available: {available})")]
    UnknownDocument {
        /// Requested id
        id: String,
        /// Comma-separated ids in the source
        available: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
