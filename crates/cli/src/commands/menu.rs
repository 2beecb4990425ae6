//! List and search a saved catalog reply.

use std::io::Write;
use std::path::Path;

use pie_order_core::replies::{parse_menu, search};
use tracing::info;

use super::{CommandError, read_file};

/// Print `code`, price and name for every item matching all `queries`.
///
/// # Errors
///
/// Returns an error if the reply cannot be read or decoded.
pub fn run(path: &Path, queries: &[String]) -> Result<(), CommandError> {
    let items = parse_menu(&read_file(path)?)?;
    let matches = search(&items, queries);
    info!(items = items.len(), matches = matches.len(), "menu searched");

    let mut out = std::io::stdout().lock();
    for item in matches {
        let price = item.price.to_string();
        writeln!(out, "{:<12} {price:>8}  {}", item.code, item.name)?;
    }
    Ok(())
}
