//! Document sources: the built-in estate fixtures or a JSON file.

use crate::error::{CliError, Result};
use docket_domain::Document;
use std::fs;
use std::path::Path;

const BUILTIN_DOCUMENTS: &str = include_str!("../fixtures/documents.json");

/// The seven built-in estate documents.
pub fn builtin() -> Result<Vec<Document>> {
    parse_documents(BUILTIN_DOCUMENTS)
}

/// Load documents from a JSON file holding an array of document objects.
pub fn load_file(path: &Path) -> Result<Vec<Document>> {
    let contents = fs::read_to_string(path)?;
    parse_documents(&contents)
}

/// Parse a JSON array of documents.
///
/// A missing `document_id` is accepted here and reported later as an ERROR
/// record; non-string content is rejected.
pub fn parse_documents(json: &str) -> Result<Vec<Document>> {
    let values: Vec<serde_json::Value> = serde_json::from_str(json)?;
    values
        .into_iter()
        .enumerate()
        .map(|(i, value)| {
            Document::from_json(value)
                .map_err(|e| CliError::InvalidInput(format!("document #{}: {}", i + 1, e)))
        })
        .collect()
}

/// Find a document by id.
pub fn select(documents: &[Document], id: &str) -> Result<Document> {
    documents
        .iter()
        .find(|d| d.id == id)
        .cloned()
        .ok_or_else(|| CliError::UnknownDocument {
            id: id.to_string(),
            available: documents
                .iter()
                .map(|d| d.id.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        })
}
