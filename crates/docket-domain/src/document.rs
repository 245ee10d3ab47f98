//! Document module - the unit of input to the pipeline

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Free-form document metadata
pub type Metadata = serde_json::Map<String, serde_json::Value>;

/// Reasons a document is not well-formed enough to enter the pipeline
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DocumentError {
    /// The identifier is missing or blank
    #[error("document id is missing or blank")]
    MissingId,

    /// The document could not be decoded from its source representation
    #[error("malformed document: {0}")]
    Malformed(String),
}

/// A document submitted for triage
///
/// Documents are owned by the caller and only read by the pipeline. The
/// identifier is caller-supplied; uniqueness is not enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Caller-supplied identifier
    #[serde(rename = "document_id", default)]
    pub id: String,

    /// Raw text content (may be empty)
    #[serde(default)]
    pub content: String,

    /// Optional free-form metadata
    #[serde(default, skip_serializing_if = "Metadata::is_empty")]
    pub metadata: Metadata,
}

impl Document {
    /// Create a new document, rejecting a blank identifier
    ///
    /// # Examples
    ///
    /// ```
    /// use docket_domain::Document;
    ///
    /// let doc = Document::new("DC001", "Certificate of Death").unwrap();
    /// assert_eq!(doc.id, "DC001");
    /// assert!(Document::new("  ", "text").is_err());
    /// ```
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Result<Self, DocumentError> {
        let document = Self {
            id: id.into(),
            content: content.into(),
            metadata: Metadata::new(),
        };
        document.check_shape()?;
        Ok(document)
    }

    /// Decode a document from a JSON value
    ///
    /// A missing `document_id` decodes to an empty id so the router can turn
    /// it into an ERROR record; content that is not a string is malformed.
    pub fn from_json(value: serde_json::Value) -> Result<Self, DocumentError> {
        serde_json::from_value(value).map_err(|e| DocumentError::Malformed(e.to_string()))
    }

    /// Check the basic shape required before any stage runs
    pub fn check_shape(&self) -> Result<(), DocumentError> {
        if self.id.trim().is_empty() {
            return Err(DocumentError::MissingId);
        }
        Ok(())
    }

    /// A single-line preview of the content, at most `max_chars` characters
    pub fn preview(&self, max_chars: usize) -> String {
        let flat = self.content.split_whitespace().collect::<Vec<_>>().join(" ");
        if flat.chars().count() <= max_chars {
            return flat;
        }
        let truncated: String = flat.chars().take(max_chars).collect();
        format!("{}...", truncated.trim_end())
    }
}
