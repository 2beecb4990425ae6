//! The order document and its nested records, in the ordering API's layout.
//!
//! Field names and casing follow the API verbatim. Each record type carries a
//! static [`DefaultPolicy`] listing what its unset fields become.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::defaults::{self, DefaultPolicy, Defaults, FieldDefault, FieldSlot};
use crate::error::OrderError;
use crate::item::OrderLine;

// =============================================================================
// Address
// =============================================================================

/// Defaults for [`Address`]. The four location fields have none: they must
/// come from the caller.
pub static ADDRESS_DEFAULTS: DefaultPolicy = DefaultPolicy {
    name: "address",
    fields: &[
        FieldDefault::unset("Street"),
        FieldDefault::unset("City"),
        FieldDefault::unset("Region"),
        FieldDefault::unset("PostalCode"),
        FieldDefault::value("Type", "House"),
        FieldDefault::unset("DeliveryInstructions"),
    ],
};

/// Delivery address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    #[serde(rename = "Street")]
    pub street: String,
    #[serde(rename = "City")]
    pub city: String,
    #[serde(rename = "Region")]
    pub region: String,
    #[serde(rename = "PostalCode")]
    pub postal_code: String,
    /// Dwelling classification, e.g. `House` or `Apartment`.
    #[serde(rename = "Type")]
    pub kind: String,
    #[serde(rename = "DeliveryInstructions", default)]
    pub delivery_instructions: String,
}

impl Defaults for Address {
    fn slot(&mut self, field: &str) -> Option<FieldSlot<'_>> {
        match field {
            "Street" => Some(FieldSlot::Text(&mut self.street)),
            "City" => Some(FieldSlot::Text(&mut self.city)),
            "Region" => Some(FieldSlot::Text(&mut self.region)),
            "PostalCode" => Some(FieldSlot::Text(&mut self.postal_code)),
            "Type" => Some(FieldSlot::Text(&mut self.kind)),
            "DeliveryInstructions" => Some(FieldSlot::Text(&mut self.delivery_instructions)),
            _ => None,
        }
    }
}

/// An address as the caller supplies it: any field may be missing.
///
/// Accepts both the API's keys (`Street`) and snake case (`street`), so the
/// address object produced by a lookup and a hand-written order file both
/// decode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AddressInput {
    #[serde(rename = "Street", alias = "street", default)]
    pub street: Option<String>,
    #[serde(rename = "City", alias = "city", default)]
    pub city: Option<String>,
    #[serde(rename = "Region", alias = "region", default)]
    pub region: Option<String>,
    #[serde(rename = "PostalCode", alias = "postal_code", default)]
    pub postal_code: Option<String>,
    #[serde(rename = "Type", alias = "type", default)]
    pub kind: Option<String>,
    #[serde(rename = "DeliveryInstructions", alias = "delivery_instructions", default)]
    pub delivery_instructions: Option<String>,
}

impl Address {
    /// Default an address, overlay the caller's fields, and check that the
    /// location is complete.
    ///
    /// Blank caller values do not override defaults.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::Validation`] naming the first of `street`,
    /// `city`, `region`, `postal_code` that is still empty, or a
    /// [`OrderError::Defaulting`] error if the address policy is broken.
    pub fn resolve(input: &AddressInput) -> Result<Self, OrderError> {
        let mut address = Self::default();
        defaults::fill(&mut address, &ADDRESS_DEFAULTS)?;

        let overlay = [
            (&mut address.street, &input.street),
            (&mut address.city, &input.city),
            (&mut address.region, &input.region),
            (&mut address.postal_code, &input.postal_code),
            (&mut address.kind, &input.kind),
            (&mut address.delivery_instructions, &input.delivery_instructions),
        ];
        for (target, supplied) in overlay {
            if let Some(value) = supplied.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
                value.clone_into(target);
            }
        }

        let required = [
            ("street", &address.street),
            ("city", &address.city),
            ("region", &address.region),
            ("postal_code", &address.postal_code),
        ];
        if let Some(&(field, _)) = required.iter().find(|(_, value)| value.is_empty()) {
            return Err(OrderError::validation(field, "must not be empty"));
        }

        Ok(address)
    }

    /// The two-line form the store locator searches by.
    #[must_use]
    pub fn locator_lines(&self) -> LocatorLines {
        LocatorLines {
            line1: self.street.clone(),
            line2: format!("{}, {} {}", self.city, self.region, self.postal_code),
        }
    }
}

/// Address split the way the store locator expects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocatorLines {
    /// Street line.
    pub line1: String,
    /// `"<city>, <region> <postal code>"`.
    pub line2: String,
}

// =============================================================================
// Payment
// =============================================================================

/// Defaults for [`PaymentRecord`]: pay at the door, no card details.
pub static PAYMENT_DEFAULTS: DefaultPolicy = DefaultPolicy {
    name: "payment",
    fields: &[
        FieldDefault::value("Type", "DoorCredit"),
        FieldDefault::unset("Amount"),
        FieldDefault::value("Number", ""),
        FieldDefault::value("CardType", ""),
        FieldDefault::value("Expiration", ""),
        FieldDefault::value("SecurityCode", ""),
        FieldDefault::value("PostalCode", ""),
        FieldDefault::value("ProviderID", ""),
    ],
};

/// One way the order is paid for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRecord {
    /// Payment method, e.g. `DoorCredit` or `CreditCard`.
    #[serde(rename = "Type")]
    pub kind: String,
    #[serde(rename = "Amount", with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    #[serde(rename = "Number")]
    pub number: String,
    #[serde(rename = "CardType")]
    pub card_type: String,
    #[serde(rename = "Expiration")]
    pub expiration: String,
    #[serde(rename = "SecurityCode")]
    pub security_code: String,
    #[serde(rename = "PostalCode")]
    pub postal_code: String,
    #[serde(rename = "ProviderID")]
    pub provider_id: String,
}

impl Defaults for PaymentRecord {
    fn slot(&mut self, field: &str) -> Option<FieldSlot<'_>> {
        match field {
            "Type" => Some(FieldSlot::Text(&mut self.kind)),
            "Number" => Some(FieldSlot::Text(&mut self.number)),
            "CardType" => Some(FieldSlot::Text(&mut self.card_type)),
            "Expiration" => Some(FieldSlot::Text(&mut self.expiration)),
            "SecurityCode" => Some(FieldSlot::Text(&mut self.security_code)),
            "PostalCode" => Some(FieldSlot::Text(&mut self.postal_code)),
            "ProviderID" => Some(FieldSlot::Text(&mut self.provider_id)),
            _ => None,
        }
    }
}

/// Amounts at or above this many whole units lose digits as a JSON number.
const MAX_AMOUNT_UNITS: i64 = 10_000_000_000_000;

impl PaymentRecord {
    /// Check that `Amount` decodes back to the same value after travelling
    /// as a JSON number: at most two decimal places, magnitude below 10^13.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::Validation`] naming `Amount` otherwise.
    pub fn check_amount(&self) -> Result<(), OrderError> {
        let amount = self.amount.normalize();
        if amount.scale() > 2 {
            return Err(OrderError::validation(
                "Amount",
                format!("{} has more than two decimal places", self.amount),
            ));
        }
        if amount.abs() >= Decimal::from(MAX_AMOUNT_UNITS) {
            return Err(OrderError::validation(
                "Amount",
                format!("{} is too large to send exactly", self.amount),
            ));
        }
        Ok(())
    }

    /// The pay-at-the-door record used when the caller supplies none.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::Defaulting`] if the payment policy is broken.
    pub fn placeholder() -> Result<Self, OrderError> {
        let mut payment = Self::default();
        defaults::fill(&mut payment, &PAYMENT_DEFAULTS)?;
        Ok(payment)
    }
}

// =============================================================================
// Order document
// =============================================================================

/// Protocol metadata defaults for [`OrderDocument`].
pub static ORDER_DEFAULTS: DefaultPolicy = DefaultPolicy {
    name: "order",
    fields: &[
        FieldDefault::value("CustomerID", ""),
        FieldDefault::unset("Email"),
        FieldDefault::value("Extension", ""),
        FieldDefault::unset("FirstName"),
        FieldDefault::unset("LastName"),
        FieldDefault::value("LanguageCode", "en"),
        FieldDefault::value("OrderChannel", "OLO"),
        FieldDefault::value("OrderID", ""),
        FieldDefault::value("OrderMethod", "Web"),
        FieldDefault::unset("Phone"),
        FieldDefault::value("PhonePrefix", ""),
        FieldDefault::value("ServiceMethod", "Delivery"),
        FieldDefault::value("SourceOrganizationURI", "order.dominos.com"),
        FieldDefault::unset("StoreID"),
        FieldDefault::value("Version", "1.0"),
        FieldDefault::value("NoCombine", "true"),
        FieldDefault::value("HotspotsLite", "false"),
        FieldDefault::value("NewUser", "true"),
    ],
};

/// An always-empty JSON object (`{}`) the API requires to be present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Empty {}

/// The complete request body for the ordering service.
///
/// Only [`crate::assembler::OrderAssembler`] builds one; outside this crate
/// it is read-only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDocument {
    #[serde(rename = "Address")]
    pub(crate) address: Address,
    #[serde(rename = "Coupons")]
    pub(crate) coupons: Vec<serde_json::Value>,
    #[serde(rename = "CustomerID")]
    pub(crate) customer_id: String,
    #[serde(rename = "Email")]
    pub(crate) email: String,
    #[serde(rename = "Extension")]
    pub(crate) extension: String,
    #[serde(rename = "FirstName")]
    pub(crate) first_name: String,
    #[serde(rename = "LastName")]
    pub(crate) last_name: String,
    #[serde(rename = "LanguageCode")]
    pub(crate) language_code: String,
    #[serde(rename = "OrderChannel")]
    pub(crate) order_channel: String,
    #[serde(rename = "OrderID")]
    pub(crate) order_id: String,
    #[serde(rename = "OrderMethod")]
    pub(crate) order_method: String,
    #[serde(rename = "OrderTaker")]
    pub(crate) order_taker: Empty,
    #[serde(rename = "Payments")]
    pub(crate) payments: Vec<PaymentRecord>,
    #[serde(rename = "Phone")]
    pub(crate) phone: String,
    #[serde(rename = "PhonePrefix")]
    pub(crate) phone_prefix: String,
    #[serde(rename = "Products")]
    pub(crate) products: Vec<OrderLine>,
    #[serde(rename = "ServiceMethod")]
    pub(crate) service_method: String,
    #[serde(rename = "SourceOrganizationURI")]
    pub(crate) source_organization_uri: String,
    #[serde(rename = "StoreID")]
    pub(crate) store_id: String,
    #[serde(rename = "Tags")]
    pub(crate) tags: Empty,
    #[serde(rename = "Version")]
    pub(crate) version: String,
    #[serde(rename = "NoCombine")]
    pub(crate) no_combine: bool,
    #[serde(rename = "Partners")]
    pub(crate) partners: Empty,
    #[serde(rename = "HotspotsLite")]
    pub(crate) hotspots_lite: bool,
    #[serde(rename = "OrderInfoCollection")]
    pub(crate) order_info_collection: Vec<serde_json::Value>,
    #[serde(rename = "NewUser")]
    pub(crate) new_user: bool,
}

impl Defaults for OrderDocument {
    fn slot(&mut self, field: &str) -> Option<FieldSlot<'_>> {
        let slot = match field {
            "CustomerID" => FieldSlot::Text(&mut self.customer_id),
            "Email" => FieldSlot::Text(&mut self.email),
            "Extension" => FieldSlot::Text(&mut self.extension),
            "FirstName" => FieldSlot::Text(&mut self.first_name),
            "LastName" => FieldSlot::Text(&mut self.last_name),
            "LanguageCode" => FieldSlot::Text(&mut self.language_code),
            "OrderChannel" => FieldSlot::Text(&mut self.order_channel),
            "OrderID" => FieldSlot::Text(&mut self.order_id),
            "OrderMethod" => FieldSlot::Text(&mut self.order_method),
            "Phone" => FieldSlot::Text(&mut self.phone),
            "PhonePrefix" => FieldSlot::Text(&mut self.phone_prefix),
            "ServiceMethod" => FieldSlot::Text(&mut self.service_method),
            "SourceOrganizationURI" => FieldSlot::Text(&mut self.source_organization_uri),
            "StoreID" => FieldSlot::Text(&mut self.store_id),
            "Version" => FieldSlot::Text(&mut self.version),
            "NoCombine" => FieldSlot::Flag(&mut self.no_combine),
            "HotspotsLite" => FieldSlot::Flag(&mut self.hotspots_lite),
            "NewUser" => FieldSlot::Flag(&mut self.new_user),
            _ => return None,
        };
        Some(slot)
    }
}

/// Borrowed `{"Order": …}` wrapper used when serializing.
#[derive(Serialize)]
struct EnvelopeRef<'a> {
    #[serde(rename = "Order")]
    order: &'a OrderDocument,
}

/// Owned `{"Order": …}` wrapper used when decoding.
#[derive(Deserialize)]
struct Envelope {
    #[serde(rename = "Order")]
    order: OrderDocument,
}

impl OrderDocument {
    /// The document wrapped as the service expects it: `{"Order": {...}}`.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::Decode`] if serialization fails.
    pub fn to_envelope(&self) -> Result<serde_json::Value, OrderError> {
        Ok(serde_json::to_value(EnvelopeRef { order: self })?)
    }

    /// Decode a document from its `{"Order": {...}}` envelope.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::Decode`] if the JSON does not have the order
    /// document's shape.
    pub fn from_envelope(json: &str) -> Result<Self, OrderError> {
        let envelope: Envelope = serde_json::from_str(json)?;
        Ok(envelope.order)
    }

    #[must_use]
    pub const fn address(&self) -> &Address {
        &self.address
    }

    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Store the order is placed with, as decimal text.
    #[must_use]
    pub fn store_id(&self) -> &str {
        &self.store_id
    }

    #[must_use]
    pub fn payments(&self) -> &[PaymentRecord] {
        &self.payments
    }

    #[must_use]
    pub fn products(&self) -> &[OrderLine] {
        &self.products
    }

    #[must_use]
    pub fn order_channel(&self) -> &str {
        &self.order_channel
    }

    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    #[must_use]
    pub fn language_code(&self) -> &str {
        &self.language_code
    }

    #[must_use]
    pub fn service_method(&self) -> &str {
        &self.service_method
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    fn input() -> AddressInput {
        AddressInput {
            street: Some("1 Main St".to_owned()),
            city: Some("Springfield".to_owned()),
            region: Some("IL".to_owned()),
            postal_code: Some("62701".to_owned()),
            ..AddressInput::default()
        }
    }

    #[test]
    fn test_resolve_defaults_type() {
        let address = Address::resolve(&input()).unwrap();
        assert_eq!(address.kind, "House");
        assert_eq!(address.delivery_instructions, "");
    }

    #[test]
    fn test_resolve_caller_type_wins() {
        let address = Address::resolve(&AddressInput {
            kind: Some("Apartment".to_owned()),
            ..input()
        })
        .unwrap();
        assert_eq!(address.kind, "Apartment");
    }

    #[test]
    fn test_resolve_blank_does_not_override_default() {
        let address = Address::resolve(&AddressInput {
            kind: Some("  ".to_owned()),
            ..input()
        })
        .unwrap();
        assert_eq!(address.kind, "House");
    }

    #[test]
    fn test_resolve_missing_required() {
        let cases: [(&str, fn(&mut AddressInput)); 4] = [
            ("street", |i| i.street = None),
            ("city", |i| i.city = Some(String::new())),
            ("region", |i| i.region = None),
            ("postal_code", |i| i.postal_code = Some(" ".to_owned())),
        ];
        for (expected, clear) in cases {
            let mut partial = input();
            clear(&mut partial);
            let err = Address::resolve(&partial).unwrap_err();
            assert_eq!(err.field(), Some(expected));
        }
    }

    #[test]
    fn test_address_input_accepts_api_keys() {
        let parsed: AddressInput = serde_json::from_value(json!({
            "Street": "1 Main St",
            "City": "Springfield",
            "Region": "IL",
            "PostalCode": "62701",
            "Type": "House"
        }))
        .unwrap();
        assert_eq!(parsed.postal_code.as_deref(), Some("62701"));
        assert_eq!(parsed.kind.as_deref(), Some("House"));
    }

    #[test]
    fn test_locator_lines() {
        let lines = Address::resolve(&input()).unwrap().locator_lines();
        assert_eq!(lines.line1, "1 Main St");
        assert_eq!(lines.line2, "Springfield, IL 62701");
    }

    #[test]
    fn test_placeholder_payment() {
        let payment = PaymentRecord::placeholder().unwrap();
        assert_eq!(
            serde_json::to_value(&payment).unwrap(),
            json!({
                "Type": "DoorCredit",
                "Amount": 0.0,
                "Number": "",
                "CardType": "",
                "Expiration": "",
                "SecurityCode": "",
                "PostalCode": "",
                "ProviderID": ""
            })
        );
    }

    #[test]
    fn test_check_amount() {
        let with = |amount| PaymentRecord {
            amount,
            ..PaymentRecord::default()
        };

        assert!(with(Decimal::new(1999, 2)).check_amount().is_ok());
        assert!(with(Decimal::new(5000, 3)).check_amount().is_ok());
        assert!(with(Decimal::new(999_999_999_999_999, 2)).check_amount().is_ok());

        let err = with(Decimal::new(12_345_678_901_234_567, 4)).check_amount().unwrap_err();
        assert_eq!(err.field(), Some("Amount"));
        let err = with(Decimal::new(1_234_567_890_123_456_789, 1)).check_amount().unwrap_err();
        assert_eq!(err.field(), Some("Amount"));
        assert!(with(Decimal::from(MAX_AMOUNT_UNITS)).check_amount().is_err());
    }

    #[test]
    fn test_order_defaults_fill_metadata() {
        let mut document = OrderDocument::default();
        defaults::fill(&mut document, &ORDER_DEFAULTS).unwrap();
        assert_eq!(document.order_channel(), "OLO");
        assert_eq!(document.version(), "1.0");
        assert_eq!(document.language_code(), "en");
        assert_eq!(document.service_method(), "Delivery");
        assert_eq!(document.source_organization_uri, "order.dominos.com");
        assert_eq!(document.order_method, "Web");
        assert!(document.no_combine);
        assert!(document.new_user);
        assert!(!document.hotspots_lite);
        assert_eq!(document.store_id(), "");
    }

    #[test]
    fn test_empty_objects_serialize_as_braces() {
        assert_eq!(serde_json::to_string(&Empty {}).unwrap(), "{}");
    }
}
