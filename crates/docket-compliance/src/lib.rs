//! Docket Compliance
//!
//! Checks classified documents against category-specific phrase rules.
//!
//! Each category maps to one rule:
//! - **bypass**: always passes (the default for categories without a rule)
//! - **all-of**: every listed phrase must be present
//! - **any-of**: at least one listed phrase must be present
//!
//! The checker trusts the category in the supplied classification and never
//! re-classifies, so it can be exercised with hand-built classifications.
//!
//! # Examples
//!
//! ```
//! use docket_compliance::{ComplianceChecker, ComplianceConfig};
//! use docket_domain::{Category, ClassificationResult, Document};
//!
//! let checker = ComplianceChecker::new(ComplianceConfig::default()).unwrap();
//! let doc = Document::new("DC002", "Certificate of Death for John Doe").unwrap();
//! let classification = ClassificationResult::new(Category::DeathCertificate, 1.0 / 7.0);
//!
//! let result = checker.validate(&doc, &classification).unwrap();
//! assert!(!result.passed);
//! assert_eq!(result.reasons, ["missing required phrase 'Date of Death'"]);
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod validator;

pub use config::{ComplianceConfig, Rule, RuleTable};
pub use error::ComplianceError;
pub use validator::ComplianceChecker;
