//! Resolve an address.

use pie_order_core::{Address, AddressInput, LocatorLines};
use serde::Serialize;
use tracing::info;

use super::{CommandError, print_json};

#[derive(Serialize)]
struct Resolved {
    address: Address,
    locator: LocatorLines,
}

/// Print the defaulted address object and its locator lines.
///
/// # Errors
///
/// Returns a validation error naming the first missing location field.
pub fn run(input: AddressInput) -> Result<(), CommandError> {
    let address = Address::resolve(&input)?;
    let locator = address.locator_lines();
    info!(kind = %address.kind, "address resolved");
    print_json(&Resolved { address, locator })
}
