//! Trait definitions for the pipeline stages
//!
//! These traits are the seams between the router and the stage
//! implementations. Implementations live in other crates
//! (`docket-classifier`, `docket-compliance`); tests substitute their own.

use crate::{ClassificationResult, Document, ValidationResult};
use std::fmt::Display;

/// Assigns a category to a document
///
/// Implemented by the classification layer (docket-classifier)
pub trait DocumentClassifier {
    /// Error type for unexpected classification failures
    type Error: Display;

    /// Classify a single document
    fn classify(&self, document: &Document) -> Result<ClassificationResult, Self::Error>;
}

/// Checks a classified document against compliance rules
///
/// Implemented by the compliance layer (docket-compliance)
pub trait ComplianceValidator {
    /// Error type for validation failures
    type Error: Display;

    /// Validate a document using the category from `classification`
    fn validate(
        &self,
        document: &Document,
        classification: &ClassificationResult,
    ) -> Result<ValidationResult, Self::Error>;
}

impl<T: DocumentClassifier + ?Sized> DocumentClassifier for &T {
    type Error = T::Error;

    fn classify(&self, document: &Document) -> Result<ClassificationResult, Self::Error> {
        (**self).classify(document)
    }
}

impl<T: ComplianceValidator + ?Sized> ComplianceValidator for &T {
    type Error = T::Error;

    fn validate(
        &self,
        document: &Document,
        classification: &ClassificationResult,
    ) -> Result<ValidationResult, Self::Error> {
        (**self).validate(document, classification)
    }
}
