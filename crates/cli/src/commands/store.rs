//! Pick the nearest store from a saved store-locator reply.

use std::io::Write;
use std::path::Path;

use pie_order_core::replies::pick_store;

use super::{CommandError, read_file};

/// Print the nearest store's id and delivery estimate.
///
/// # Errors
///
/// Returns an error if the reply cannot be read or lists no usable store.
pub fn run(path: &Path) -> Result<(), CommandError> {
    let picked = pick_store(&read_file(path)?)?;
    writeln!(
        std::io::stdout().lock(),
        "store {} (delivery from {} min)",
        picked.store_id,
        picked.delivery_minutes
    )?;
    Ok(())
}
