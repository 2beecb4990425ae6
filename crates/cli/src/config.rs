//! Account profile loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `PIE_FIRST_NAME` - Customer first name
//! - `PIE_LAST_NAME` - Customer last name
//! - `PIE_EMAIL` - Customer email address
//! - `PIE_PHONE` - Customer phone number
//!
//! ## Optional (card on file, all four or none)
//! - `PIE_CARD_NUMBER` - Card number
//! - `PIE_CARD_CVV` - Card verification value
//! - `PIE_CARD_EXPIRATION` - Expiration as printed, e.g. `0128`
//! - `PIE_CARD_POSTAL_CODE` - Billing postal code
//!
//! ## Optional
//! - `PIE_CARD_TYPE` - Card network (default: VISA)

use pie_order_core::{AccountProfile, CardDetails, CustomerIdentity, Email};
use secrecy::SecretString;
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Load the account profile from the process environment.
///
/// Calls `dotenvy::dotenv()` to load from `.env` file if present.
///
/// # Errors
///
/// Returns an error if a required variable is missing, the email is
/// malformed, or only some of the card variables are set.
pub fn profile_from_env() -> Result<AccountProfile, ConfigError> {
    // Load .env file if present (ignore errors if not found)
    let _ = dotenvy::dotenv();
    profile_from_lookup(|key| std::env::var(key).ok())
}

/// Load the account profile through `lookup`.
///
/// Blank values count as unset.
///
/// # Errors
///
/// See [`profile_from_env`].
pub fn profile_from_lookup(
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<AccountProfile, ConfigError> {
    let get_optional = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
    let get_required =
        |key: &str| get_optional(key).ok_or_else(|| ConfigError::MissingEnvVar(key.to_string()));

    let email = get_required("PIE_EMAIL")?;
    let customer = CustomerIdentity {
        first_name: get_required("PIE_FIRST_NAME")?,
        last_name: get_required("PIE_LAST_NAME")?,
        email: Email::parse(&email)
            .map_err(|e| ConfigError::InvalidEnvVar("PIE_EMAIL".to_string(), e.to_string()))?,
        phone: get_required("PIE_PHONE")?,
    };
    let profile = AccountProfile::new(customer);

    let card = (
        get_optional("PIE_CARD_NUMBER"),
        get_optional("PIE_CARD_CVV"),
        get_optional("PIE_CARD_EXPIRATION"),
        get_optional("PIE_CARD_POSTAL_CODE"),
    );
    match card {
        (Some(number), Some(cvv), Some(expiration), Some(postal_code)) => {
            Ok(profile.with_card(CardDetails {
                number: SecretString::from(number),
                security_code: SecretString::from(cvv),
                expiration,
                postal_code,
                card_type: get_optional("PIE_CARD_TYPE"),
            }))
        }
        (None, None, None, None) => Ok(profile),
        _ => Err(ConfigError::InvalidEnvVar(
            "PIE_CARD_*".to_string(),
            "PIE_CARD_NUMBER, PIE_CARD_CVV, PIE_CARD_EXPIRATION and PIE_CARD_POSTAL_CODE must be set together"
                .to_string(),
        )),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    const CUSTOMER: [(&str, &str); 4] = [
        ("PIE_FIRST_NAME", "Pat"),
        ("PIE_LAST_NAME", "Doe"),
        ("PIE_EMAIL", "pat@example.com"),
        ("PIE_PHONE", "5555550100"),
    ];

    #[test]
    fn test_customer_only() {
        let profile = profile_from_lookup(env(&CUSTOMER)).unwrap();
        assert_eq!(profile.customer.first_name, "Pat");
        assert_eq!(profile.customer.email.as_str(), "pat@example.com");
        assert!(profile.card.is_none());
    }

    #[test]
    fn test_missing_required() {
        let err = profile_from_lookup(env(&CUSTOMER[..3])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingEnvVar(ref key) if key == "PIE_PHONE"));
    }

    #[test]
    fn test_invalid_email() {
        let mut pairs = CUSTOMER.to_vec();
        pairs[2] = ("PIE_EMAIL", "pat.example.com");
        let err = profile_from_lookup(env(&pairs)).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(ref key, _) if key == "PIE_EMAIL"));
    }

    #[test]
    fn test_full_card() {
        let mut pairs = CUSTOMER.to_vec();
        pairs.extend([
            ("PIE_CARD_NUMBER", "4111111111111111"),
            ("PIE_CARD_CVV", "123"),
            ("PIE_CARD_EXPIRATION", "0128"),
            ("PIE_CARD_POSTAL_CODE", "62701"),
        ]);
        let profile = profile_from_lookup(env(&pairs)).unwrap();
        let card = profile.card.unwrap();
        assert_eq!(card.card_type(), "VISA");
        assert_eq!(card.expiration, "0128");
    }

    #[test]
    fn test_partial_card_rejected() {
        let mut pairs = CUSTOMER.to_vec();
        pairs.push(("PIE_CARD_NUMBER", "4111111111111111"));
        let err = profile_from_lookup(env(&pairs)).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(ref key, _) if key == "PIE_CARD_*"));
    }
}
