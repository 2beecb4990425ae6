//! Build a single order line.

use pie_order_core::item::{self, ItemRequest};
use pie_order_core::{CustomizationRequest, OrderError};
use tracing::info;

use super::{CommandError, print_json};

/// Parse `INGREDIENT[:PLACEMENT[:INTENSITY]]`.
///
/// # Errors
///
/// Returns a validation error naming the part that does not parse.
pub fn parse_option(text: &str) -> Result<CustomizationRequest, OrderError> {
    let mut parts = text.splitn(3, ':').map(str::trim);
    let ingredient = parts.next().unwrap_or_default();
    let placement = parts.next().filter(|p| !p.is_empty());
    let intensity = parts.next().filter(|i| !i.is_empty());
    CustomizationRequest::parse(ingredient, placement, intensity)
}

/// Build the line and print it as JSON.
///
/// # Errors
///
/// Returns an error if an option or the item itself is invalid.
pub fn run(
    size: &str,
    variant: &str,
    qty: Option<i64>,
    options: &[String],
) -> Result<(), CommandError> {
    let mut request = ItemRequest::new(size, variant);
    if let Some(qty) = qty {
        request = request.quantity(qty);
    }
    for option in options {
        request = request.customize(parse_option(option)?);
    }

    let line = item::build(&request)?;
    info!(code = line.code(), qty = line.qty(), "built order line");
    print_json(&line)
}
