//! Docket Domain Layer
//!
//! This crate contains the domain model shared by every stage of the Docket
//! document triage pipeline. It defines the fundamental concepts, value
//! objects, and the trait interfaces that the classifier, the compliance
//! validator, and the router depend upon.
//!
//! ## Key Concepts
//!
//! - **Document**: Caller-owned text with an identifier and free-form metadata
//! - **Category**: One entry of the fixed estate taxonomy, each with a stable code
//! - **ClassificationResult**: Winning category, confidence ratio, per-category scores
//! - **ValidationResult**: Pass/fail verdict of a category's compliance rule
//! - **ProcessingRecord**: The immutable audit entry produced per document
//!
//! ## Architecture
//!
//! - Pure data and pure functions only
//! - Stage implementations live in `docket-classifier` and `docket-compliance`
//! - Trait definitions for each pipeline stage live in [`traits`]

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod category;
pub mod classification;
pub mod document;
pub mod matching;
pub mod record;
pub mod traits;
pub mod validation;

// Re-exports for convenience
pub use category::Category;
pub use classification::{CategoryScore, ClassificationResult};
pub use document::{Document, DocumentError, Metadata};
pub use matching::{phrase_key, PatternError, PhraseMatcher};
pub use record::{ProcessingRecord, ProcessingStatus, RecordError, RecordId, Stage};
pub use validation::{RuleKind, ValidationResult};
