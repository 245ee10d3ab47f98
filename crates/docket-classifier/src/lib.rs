//! Docket Classifier
//!
//! Assigns estate documents to a taxonomy category by keyword scoring.
//!
//! # Algorithm
//!
//! ```text
//! content → match every keyword (word-boundary, case-insensitive)
//!         → score(category) = distinct keywords matched
//!         → winner = highest score, ties broken by taxonomy priority
//!         → confidence = score / keywords defined for the winner
//! ```
//!
//! Documents that match nothing (including empty content) are classified as
//! Miscellaneous with confidence 0.0. Classification never fails.
//!
//! # Examples
//!
//! ```
//! use docket_classifier::{ClassifierConfig, KeywordClassifier};
//! use docket_domain::{Category, Document};
//!
//! let classifier = KeywordClassifier::new(ClassifierConfig::default()).unwrap();
//! let doc = Document::new("DC001", "CERTIFICATE OF DEATH ... Date of Death: Jan 1").unwrap();
//!
//! let result = classifier.classify(&doc);
//! assert_eq!(result.category, Category::DeathCertificate);
//! assert_eq!(result.code, "01.0000-50");
//! ```

#![warn(missing_docs)]

mod classifier;
mod config;
mod error;

pub use classifier::KeywordClassifier;
pub use config::{ClassifierConfig, KeywordTable};
pub use error::ClassifierError;
