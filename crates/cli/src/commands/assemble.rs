//! Assemble a full order document from a YAML order file.
//!
//! ```yaml
//! address:
//!   street: 1 Main St
//!   city: Springfield
//!   region: IL
//!   postal_code: "62701"
//! store_id: 4336
//! items:
//!   - size: "14"
//!     variant: SCREEN
//!     options:
//!       - ingredient: Pepperoni
//!         placement: left-half
//! use_card: true
//! card_amount: 19.99
//! ```

use std::path::Path;

use pie_order_core::item::{self, ItemRequest};
use pie_order_core::{
    AccountProfile, AddressInput, OrderAssembler, OrderError, OrderRequest, PaymentRecord, RawItem,
    StoreId,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::info;

use super::{CommandError, print_json, read_file};
use crate::config;

/// An order as written by hand.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OrderFile {
    pub address: AddressInput,
    pub store_id: StoreId,
    pub items: Vec<RawItem>,
    #[serde(default)]
    pub payments: Vec<PaymentEntry>,
    /// Charge the configured card.
    #[serde(default)]
    pub use_card: bool,
    /// Amount charged to the card when `use_card` is set.
    #[serde(default)]
    pub card_amount: Decimal,
}

/// A payment written by hand. Unset fields take the payment defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PaymentEntry {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub amount: Decimal,
}

impl From<PaymentEntry> for PaymentRecord {
    fn from(entry: PaymentEntry) -> Self {
        Self {
            kind: entry.kind,
            amount: entry.amount,
            ..Self::default()
        }
    }
}

impl OrderFile {
    /// Parse an order file.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML does not have the order file's shape.
    pub fn from_yaml(yaml: &str) -> Result<Self, CommandError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Build the lines and payments and bundle them into a request.
    ///
    /// # Errors
    ///
    /// Returns the first item error, or [`CommandError::NoCard`] when a card
    /// payment is requested for a profile without one.
    pub fn into_request(self, profile: &AccountProfile) -> Result<OrderRequest, CommandError> {
        let lines = self
            .items
            .iter()
            .map(|raw| item::build(&ItemRequest::try_from(raw)?))
            .collect::<Result<Vec<_>, OrderError>>()?;

        let mut payments: Vec<PaymentRecord> =
            self.payments.into_iter().map(PaymentRecord::from).collect();
        if self.use_card {
            let card = profile
                .card_payment(self.card_amount)?
                .ok_or(CommandError::NoCard)?;
            payments.push(card);
        }

        Ok(OrderRequest {
            address: self.address,
            store_id: self.store_id,
            lines,
            payments,
        })
    }
}

/// Assemble the order in `path` for the configured account and print the
/// `{"Order": …}` envelope.
///
/// # Errors
///
/// Returns an error if the file or profile cannot be loaded, or assembly
/// fails.
pub fn run(path: &Path) -> Result<(), CommandError> {
    let profile = config::profile_from_env()?;
    let order = OrderFile::from_yaml(&read_file(path)?)?;
    let request = order.into_request(&profile)?;

    let document = OrderAssembler::new(&profile).assemble(request)?;
    info!(
        store_id = document.store_id(),
        products = document.products().len(),
        payments = document.payments().len(),
        "order assembled"
    );
    print_json(&document.to_envelope()?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pie_order_core::{CustomerIdentity, Email};

    use super::*;

    const ORDER: &str = r#"
address:
  street: 1 Main St
  city: Springfield
  region: IL
  postal_code: "62701"
store_id: 4336
items:
  - size: "14"
    variant: SCREEN
    quantity: 2
    options:
      - ingredient: Pepperoni
        placement: left-half
        intensity: extra
  - size: "12"
    variant: THIN
payments:
  - amount: 5
"#;

    fn profile() -> AccountProfile {
        AccountProfile::new(CustomerIdentity {
            first_name: "Pat".to_owned(),
            last_name: "Doe".to_owned(),
            email: Email::parse("pat@example.com").unwrap(),
            phone: "5555550100".to_owned(),
        })
    }

    #[test]
    fn test_order_file_into_request() {
        let order = OrderFile::from_yaml(ORDER).unwrap();
        let request = order.into_request(&profile()).unwrap();

        assert_eq!(request.store_id, StoreId::new(4336));
        assert_eq!(request.lines.len(), 2);
        assert_eq!(request.lines[0].code(), "14SCREEN");
        assert_eq!(request.lines[0].qty(), 2);
        assert_eq!(request.lines[1].qty(), 1);
        assert_eq!(request.payments.len(), 1);
        assert_eq!(request.payments[0].amount, Decimal::new(5, 0));
        assert_eq!(request.payments[0].kind, "");
    }

    #[test]
    fn test_use_card_without_card() {
        let yaml = format!("{ORDER}use_card: true\n");
        let order = OrderFile::from_yaml(&yaml).unwrap();
        let err = order.into_request(&profile()).unwrap_err();
        assert!(matches!(err, CommandError::NoCard));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let yaml = format!("{ORDER}coupon: FREEPIE\n");
        assert!(matches!(
            OrderFile::from_yaml(&yaml),
            Err(CommandError::OrderFile(_))
        ));
    }

    #[test]
    fn test_bad_item_surfaces_field() {
        let yaml = ORDER.replace("variant: THIN", "variant: \"  \"");
        let order = OrderFile::from_yaml(&yaml).unwrap();
        let err = order.into_request(&profile()).unwrap_err();
        assert!(matches!(err, CommandError::Order(ref e) if e.field() == Some("variant")));
    }
}
