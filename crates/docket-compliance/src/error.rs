//! Compliance error types

use docket_domain::matching::PatternError;
use docket_domain::Category;
use thiserror::Error;

/// Errors that can occur during compliance operations
#[derive(Error, Debug)]
pub enum ComplianceError {
    /// The classification handed to the validator is malformed
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A rule phrase could not be compiled into a matcher
    #[error("Invalid phrase '{phrase}' in {category} rule: {source}")]
    Phrase {
        /// Category whose rule holds the phrase
        category: Category,
        /// The offending phrase
        phrase: String,
        /// Underlying pattern error
        #[source]
        source: PatternError,
    },
}
