//! Process command implementation.

use crate::error::Result;
use crate::fixtures;
use crate::output::Formatter;
use docket_domain::traits::{ComplianceValidator, DocumentClassifier};
use docket_domain::Document;
use docket_router::Router;

/// Execute the process command.
///
/// With an id, processes that document alone; otherwise runs the whole
/// source as a batch. Returns the rendered output.
pub fn execute_process<C, V>(
    document_id: Option<&str>,
    documents: &[Document],
    router: &mut Router<C, V>,
    formatter: &Formatter,
) -> Result<String>
where
    C: DocumentClassifier,
    V: ComplianceValidator,
{
    match document_id {
        Some(id) => {
            let document = fixtures::select(documents, id)?;
            let record = router.process_document(&document);
            formatter.format_record(&record)
        }
        None => {
            let summary = router.process_batch(documents);
            formatter.format_batch(&summary)
        }
    }
}
