//! Docket Router
//!
//! Orchestrates the triage pipeline: every document is classified, then
//! validated against its category's compliance rule, and the outcome is
//! appended to an in-memory history as an immutable [`ProcessingRecord`].
//!
//! Stage failures never escape [`Router::process_document`]; they become
//! records with status `ERROR`, so a batch always yields one record per
//! input document.
//!
//! [`ProcessingRecord`]: docket_domain::ProcessingRecord

#![warn(missing_docs)]

pub mod config;
mod router;
mod summary;

pub use config::{ConfigError, RouterConfig};
pub use router::{EstateRouter, PipelineInfo, Router};
pub use summary::BatchSummary;

use docket_classifier::ClassifierError;
use docket_compliance::ComplianceError;

/// Router error
#[derive(Debug, thiserror::Error)]
pub enum RouterError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// The classifier could not be built
    #[error("Classifier setup failed: {0}")]
    Classifier(#[from] ClassifierError),

    /// The compliance checker could not be built
    #[error("Compliance setup failed: {0}")]
    Compliance(#[from] ComplianceError),
}
