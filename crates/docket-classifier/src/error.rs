//! Classifier error types

use docket_domain::matching::PatternError;
use docket_domain::Category;
use thiserror::Error;

/// Errors that can occur while building a classifier
///
/// Classification itself is total; only construction can fail.
#[derive(Error, Debug)]
pub enum ClassifierError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A keyword could not be compiled into a matcher
    #[error("Invalid keyword '{keyword}' for {category}: {source}")]
    Keyword {
        /// Category the keyword belongs to
        category: Category,
        /// The offending keyword
        keyword: String,
        /// Underlying pattern error
        #[source]
        source: PatternError,
    },
}
