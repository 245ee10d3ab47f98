//! Info command implementation.

use crate::error::Result;
use crate::output::Formatter;
use docket_router::EstateRouter;

/// Execute the info command.
pub fn execute_info(router: &EstateRouter, formatter: &Formatter) -> Result<String> {
    formatter.format_info(&router.info())
}
