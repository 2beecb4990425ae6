//! Account profile passed to the assembler at call time.
//!
//! The profile is an immutable value: the assembler borrows it for one call
//! and keeps nothing, so concurrent assemblies can share one profile.

use rust_decimal::Decimal;
use secrecy::{ExposeSecret, SecretString};

use crate::defaults;
use crate::document::{PAYMENT_DEFAULTS, PaymentRecord};
use crate::error::OrderError;
use crate::types::Email;

/// Card type assumed when the profile's card does not name one.
pub const DEFAULT_CARD_TYPE: &str = "VISA";

/// Who the order is for. Copied into the document as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerIdentity {
    pub first_name: String,
    pub last_name: String,
    pub email: Email,
    pub phone: String,
}

/// A payment card on file.
///
/// Implements `Debug` manually to redact the number and security code.
#[derive(Clone)]
pub struct CardDetails {
    /// Card number (SENSITIVE).
    pub number: SecretString,
    /// Card verification value (SENSITIVE).
    pub security_code: SecretString,
    /// Expiration, as printed on the card (e.g. `"0128"`).
    pub expiration: String,
    /// Billing postal code.
    pub postal_code: String,
    /// Card network; `None` means [`DEFAULT_CARD_TYPE`].
    pub card_type: Option<String>,
}

impl std::fmt::Debug for CardDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CardDetails")
            .field("number", &"[REDACTED]")
            .field("security_code", &"[REDACTED]")
            .field("expiration", &self.expiration)
            .field("postal_code", &self.postal_code)
            .field("card_type", &self.card_type)
            .finish()
    }
}

impl CardDetails {
    /// The card network, falling back to [`DEFAULT_CARD_TYPE`].
    #[must_use]
    pub fn card_type(&self) -> &str {
        self.card_type
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(DEFAULT_CARD_TYPE)
    }
}

/// Customer identity plus an optional card.
#[derive(Debug, Clone)]
pub struct AccountProfile {
    pub customer: CustomerIdentity,
    pub card: Option<CardDetails>,
}

impl AccountProfile {
    /// A profile with no card on file.
    #[must_use]
    pub fn new(customer: CustomerIdentity) -> Self {
        Self {
            customer,
            card: None,
        }
    }

    /// Attach a card.
    #[must_use]
    pub fn with_card(mut self, card: CardDetails) -> Self {
        self.card = Some(card);
        self
    }

    /// A payment record charging the profile's card, if it has one.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::Defaulting`] if the payment policy is broken.
    pub fn card_payment(&self, amount: Decimal) -> Result<Option<PaymentRecord>, OrderError> {
        self.card
            .as_ref()
            .map(|card| PaymentRecord::credit_card(card, amount))
            .transpose()
    }
}

impl PaymentRecord {
    /// A `CreditCard` payment for `amount` charged to `card`.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::Validation`] naming `Amount` if `amount` would
    /// not survive the trip through a JSON number, or
    /// [`OrderError::Defaulting`] if the payment policy is broken.
    pub fn credit_card(card: &CardDetails, amount: Decimal) -> Result<Self, OrderError> {
        let mut payment = Self {
            kind: "CreditCard".to_owned(),
            amount,
            number: card.number.expose_secret().to_owned(),
            card_type: card.card_type().to_owned(),
            expiration: card.expiration.clone(),
            security_code: card.security_code.expose_secret().to_owned(),
            postal_code: card.postal_code.clone(),
            provider_id: String::new(),
        };
        payment.check_amount()?;
        defaults::fill(&mut payment, &PAYMENT_DEFAULTS)?;
        Ok(payment)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn customer() -> CustomerIdentity {
        CustomerIdentity {
            first_name: "Pat".to_owned(),
            last_name: "Doe".to_owned(),
            email: Email::parse("pat@example.com").unwrap(),
            phone: "5555550100".to_owned(),
        }
    }

    fn card(card_type: Option<&str>) -> CardDetails {
        CardDetails {
            number: SecretString::from("4111111111111111".to_owned()),
            security_code: SecretString::from("123".to_owned()),
            expiration: "0128".to_owned(),
            postal_code: "62701".to_owned(),
            card_type: card_type.map(str::to_owned),
        }
    }

    #[test]
    fn test_no_card_no_payment() {
        let profile = AccountProfile::new(customer());
        assert!(profile.card_payment(Decimal::ZERO).unwrap().is_none());
    }

    #[test]
    fn test_card_type_defaults_to_visa() {
        let profile = AccountProfile::new(customer()).with_card(card(None));
        let payment = profile.card_payment(Decimal::new(2345, 2)).unwrap().unwrap();
        assert_eq!(payment.kind, "CreditCard");
        assert_eq!(payment.card_type, "VISA");
        assert_eq!(payment.number, "4111111111111111");
        assert_eq!(payment.amount, Decimal::new(2345, 2));
    }

    #[test]
    fn test_card_amount_beyond_cents_rejected() {
        let profile = AccountProfile::new(customer()).with_card(card(None));
        let err = profile.card_payment(Decimal::new(19_999, 3)).unwrap_err();
        assert_eq!(err.field(), Some("Amount"));
    }

    #[test]
    fn test_explicit_card_type_kept() {
        assert_eq!(card(Some("MASTERCARD")).card_type(), "MASTERCARD");
        assert_eq!(card(Some(" ")).card_type(), "VISA");
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let debug = format!("{:?}", card(None));
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("4111"));
        assert!(!debug.contains("\"123\""));
    }
}
