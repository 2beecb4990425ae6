//! Integration tests for Pie Order.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p pie-order-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `assemble_order` - End-to-end assembly from order-file inputs
//! - `wire_format` - Exact JSON shape of the order envelope
//! - `collaborator_replies` - Store, menu and service reply decoding
//!
//! Shared fixtures live here so every test file builds the same customer,
//! address and order lines.

use pie_order_core::item::{self, ItemRequest, RawItem};
use pie_order_core::{
    AccountProfile, AddressInput, CardDetails, CustomerIdentity, Email, OrderError, OrderLine,
    OrderRequest, StoreId,
};
use secrecy::SecretString;

/// Store id used by every fixture.
pub const STORE_ID: i64 = 4336;

/// A customer with no card on file.
///
/// # Panics
///
/// Never; the fixture email is valid.
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn sample_profile() -> AccountProfile {
    AccountProfile::new(CustomerIdentity {
        first_name: "Pat".to_owned(),
        last_name: "Doe".to_owned(),
        email: Email::parse("pat@example.com").unwrap(),
        phone: "5555550100".to_owned(),
    })
}

/// [`sample_profile`] with a test card and no explicit card type.
#[must_use]
pub fn sample_profile_with_card() -> AccountProfile {
    sample_profile().with_card(CardDetails {
        number: SecretString::from("4111111111111111".to_owned()),
        security_code: SecretString::from("123".to_owned()),
        expiration: "0128".to_owned(),
        postal_code: "62701".to_owned(),
        card_type: None,
    })
}

/// A complete delivery address.
#[must_use]
pub fn sample_address() -> AddressInput {
    AddressInput {
        street: Some("1 Main St".to_owned()),
        city: Some("Springfield".to_owned()),
        region: Some("IL".to_owned()),
        postal_code: Some("62701".to_owned()),
        ..AddressInput::default()
    }
}

/// Build order lines from order-file YAML (a list of items).
///
/// # Errors
///
/// Returns the first item's validation error.
///
/// # Panics
///
/// Panics if `yaml` is not a list of items.
#[allow(clippy::unwrap_used)]
pub fn lines_from_yaml(yaml: &str) -> Result<Vec<OrderLine>, OrderError> {
    let raw: Vec<RawItem> = serde_yaml::from_str(yaml).unwrap();
    raw.iter()
        .map(|raw| item::build(&ItemRequest::try_from(raw)?))
        .collect()
}

/// One large hand-tossed pizza with half pepperoni, no payments.
///
/// # Panics
///
/// Never; the fixture item is valid.
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn sample_request() -> OrderRequest {
    let lines = lines_from_yaml(
        r"
- size: '14'
  variant: SCREEN
  options:
    - ingredient: Pepperoni
      placement: left-half
",
    )
    .unwrap();

    OrderRequest {
        address: sample_address(),
        store_id: StoreId::new(STORE_ID),
        lines,
        payments: Vec::new(),
    }
}
