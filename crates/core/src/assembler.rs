//! Composes a complete order document from its parts.

use tracing::{debug, instrument};

use crate::defaults;
use crate::document::{Address, AddressInput, ORDER_DEFAULTS, OrderDocument, PAYMENT_DEFAULTS, PaymentRecord};
use crate::error::OrderError;
use crate::item::OrderLine;
use crate::profile::AccountProfile;
use crate::types::StoreId;

/// The per-order inputs to [`OrderAssembler::assemble`].
#[derive(Debug, Clone)]
pub struct OrderRequest {
    /// Address as supplied by the caller or an address lookup.
    pub address: AddressInput,
    /// Store resolved for the address.
    pub store_id: StoreId,
    /// Lines already built by [`crate::item::build`].
    pub lines: Vec<OrderLine>,
    /// Caller-supplied payments; empty means pay at the door.
    pub payments: Vec<PaymentRecord>,
}

/// Builds order documents for one account.
///
/// Holds only a borrowed, immutable profile, so one assembler can be shared
/// across threads and every call produces an independent document.
#[derive(Debug, Clone, Copy)]
pub struct OrderAssembler<'a> {
    profile: &'a AccountProfile,
}

impl<'a> OrderAssembler<'a> {
    /// Create an assembler for `profile`.
    #[must_use]
    pub const fn new(profile: &'a AccountProfile) -> Self {
        Self { profile }
    }

    /// Assemble a complete order document.
    ///
    /// Either every step succeeds and the finished document is returned, or
    /// the first failing step's error is returned unchanged and the partial
    /// document is dropped.
    ///
    /// # Errors
    ///
    /// - [`OrderError::Validation`] naming `street`, `city`, `region` or
    ///   `postal_code` if the address is incomplete, or `products` if there
    ///   are no order lines, or `Amount` if a payment amount would not
    ///   survive the trip through a JSON number.
    /// - [`OrderError::Defaulting`] if a default policy table is broken.
    #[instrument(
        name = "assemble_order",
        skip(self, request),
        fields(store_id = %request.store_id, lines = request.lines.len())
    )]
    pub fn assemble(&self, request: OrderRequest) -> Result<OrderDocument, OrderError> {
        let OrderRequest {
            address,
            store_id,
            lines,
            payments,
        } = request;

        let mut document = OrderDocument::default();
        defaults::fill(&mut document, &ORDER_DEFAULTS)?;
        debug!("protocol metadata defaulted");

        document.address = Address::resolve(&address)?;
        debug!(kind = %document.address.kind, "address resolved");

        let customer = &self.profile.customer;
        document.first_name.clone_from(&customer.first_name);
        document.last_name.clone_from(&customer.last_name);
        document.email = customer.email.as_str().to_owned();
        document.phone.clone_from(&customer.phone);

        document.store_id = store_id.to_string();

        if lines.is_empty() {
            return Err(OrderError::validation("products", "an order needs at least one item"));
        }
        document.products = lines;

        document.payments = if payments.is_empty() {
            debug!("no payment supplied, paying at the door");
            vec![PaymentRecord::placeholder()?]
        } else {
            payments
                .into_iter()
                .map(|mut payment| {
                    defaults::fill(&mut payment, &PAYMENT_DEFAULTS)?;
                    payment.check_amount()?;
                    Ok(payment)
                })
                .collect::<Result<_, OrderError>>()?
        };

        debug!(payments = document.payments.len(), "order assembled");
        Ok(document)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;
    use secrecy::SecretString;

    use super::*;
    use crate::item::{self, ItemRequest};
    use crate::options::{CustomizationRequest, Intensity, Placement};
    use crate::profile::{CardDetails, CustomerIdentity};
    use crate::types::Email;

    fn profile() -> AccountProfile {
        AccountProfile::new(CustomerIdentity {
            first_name: "Pat".to_owned(),
            last_name: "Doe".to_owned(),
            email: Email::parse("pat@example.com").unwrap(),
            phone: "5555550100".to_owned(),
        })
    }

    fn request() -> OrderRequest {
        let line = item::build(
            &ItemRequest::new("14", "SCREEN").customize(
                CustomizationRequest::new("P")
                    .placement(Placement::LeftHalf)
                    .intensity(Intensity::Extra),
            ),
        )
        .unwrap();

        OrderRequest {
            address: AddressInput {
                street: Some("1 Main St".to_owned()),
                city: Some("Springfield".to_owned()),
                region: Some("IL".to_owned()),
                postal_code: Some("62701".to_owned()),
                ..AddressInput::default()
            },
            store_id: StoreId::new(4336),
            lines: vec![line],
            payments: Vec::new(),
        }
    }

    #[test]
    fn test_assemble_fills_everything() {
        let profile = profile();
        let document = OrderAssembler::new(&profile).assemble(request()).unwrap();

        assert_eq!(document.order_channel(), "OLO");
        assert_eq!(document.version(), "1.0");
        assert_eq!(document.address().kind, "House");
        assert_eq!(document.first_name(), "Pat");
        assert_eq!(document.last_name(), "Doe");
        assert_eq!(document.email(), "pat@example.com");
        assert_eq!(document.phone(), "5555550100");
        assert_eq!(document.store_id(), "4336");
        assert_eq!(document.products().len(), 1);
        assert_eq!(document.products()[0].code(), "14SCREEN");
    }

    #[test]
    fn test_missing_street_aborts() {
        let profile = profile();
        let mut request = request();
        request.address.street = None;

        let err = OrderAssembler::new(&profile).assemble(request).unwrap_err();
        assert!(matches!(err, OrderError::Validation { field: "street", .. }));
    }

    #[test]
    fn test_no_lines_aborts() {
        let profile = profile();
        let mut request = request();
        request.lines.clear();

        let err = OrderAssembler::new(&profile).assemble(request).unwrap_err();
        assert_eq!(err.field(), Some("products"));
    }

    #[test]
    fn test_placeholder_payment_when_none_supplied() {
        let profile = profile();
        let document = OrderAssembler::new(&profile).assemble(request()).unwrap();

        assert_eq!(document.payments().len(), 1);
        assert_eq!(document.payments()[0], PaymentRecord::placeholder().unwrap());
        assert_eq!(document.payments()[0].kind, "DoorCredit");
    }

    #[test]
    fn test_supplied_payments_are_defaulted_and_kept() {
        let profile = profile().with_card(CardDetails {
            number: SecretString::from("4111111111111111".to_owned()),
            security_code: SecretString::from("123".to_owned()),
            expiration: "0128".to_owned(),
            postal_code: "62701".to_owned(),
            card_type: None,
        });
        let card = profile.card_payment(Decimal::new(1999, 2)).unwrap().unwrap();
        let partial = PaymentRecord {
            amount: Decimal::new(500, 2),
            ..PaymentRecord::default()
        };

        let mut request = request();
        request.payments = vec![card.clone(), partial];
        let document = OrderAssembler::new(&profile).assemble(request).unwrap();

        assert_eq!(document.payments().len(), 2);
        assert_eq!(document.payments()[0], card);
        assert_eq!(document.payments()[1].kind, "DoorCredit");
        assert_eq!(document.payments()[1].amount, Decimal::new(500, 2));
    }

    #[test]
    fn test_inexact_payment_amount_aborts() {
        let profile = profile();
        let mut request = request();
        request.payments = vec![PaymentRecord {
            amount: Decimal::new(12_345_678_901_234_567, 4),
            ..PaymentRecord::default()
        }];

        let err = OrderAssembler::new(&profile).assemble(request).unwrap_err();
        assert_eq!(err.field(), Some("Amount"));
    }

    #[test]
    fn test_envelope_round_trip() {
        let profile = profile();
        let document = OrderAssembler::new(&profile).assemble(request()).unwrap();

        let json = document.to_envelope().unwrap().to_string();
        let decoded = OrderDocument::from_envelope(&json).unwrap();
        assert_eq!(decoded, document);
    }
}
