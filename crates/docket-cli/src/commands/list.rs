//! List command implementation.

use crate::error::Result;
use crate::output::Formatter;
use docket_domain::Document;

/// Execute the list command.
pub fn execute_list(documents: &[Document], formatter: &Formatter) -> Result<String> {
    formatter.format_documents(documents)
}
