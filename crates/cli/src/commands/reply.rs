//! Classify a saved validate, price or place reply.

use std::io::Write;
use std::path::Path;

use pie_order_core::replies::ServiceReply;

use super::{CommandError, read_file};

/// Print the reply status and its status items.
///
/// # Errors
///
/// Returns [`pie_order_core::OrderError::Rejected`] when the service
/// rejected the document, so the process exits non-zero.
pub fn run(path: &Path) -> Result<(), CommandError> {
    let reply = ServiceReply::from_json(&read_file(path)?)?;
    let status = reply.ensure_accepted()?;

    let mut out = std::io::stdout().lock();
    writeln!(out, "{status}")?;
    for reason in reply.reasons() {
        writeln!(out, "  {reason}")?;
    }
    Ok(())
}
