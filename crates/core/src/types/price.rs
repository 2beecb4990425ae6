//! Menu prices using decimal arithmetic.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., dollars, not cents).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// Parse a catalog price string such as `"12.99"`.
    ///
    /// Returns `None` for text that is not a decimal number; catalogs
    /// occasionally list unpriced variants and those are skipped.
    #[must_use]
    pub fn parse(text: &str, currency_code: CurrencyCode) -> Option<Self> {
        Decimal::from_str(text.trim())
            .ok()
            .map(|amount| Self::new(amount, currency_code))
    }

    /// Amount in the smallest currency unit, rounded half away from zero.
    ///
    /// `None` when the amount is too large to scale or to fit an `i64`.
    #[must_use]
    pub fn cents(&self) -> Option<i64> {
        let scaled = self.amount.checked_mul(Decimal::ONE_HUNDRED)?.round();
        i64::try_from(scaled).ok()
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{:.2}", self.currency_code.symbol(), self.amount)
    }
}

/// ISO 4217 currency codes the ordering service trades in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    USD,
    CAD,
}

impl CurrencyCode {
    /// Display symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::USD | Self::CAD => "$",
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_cents() {
        let price = Price::parse("12.99", CurrencyCode::USD).unwrap();
        assert_eq!(price.cents(), Some(1299));
        assert_eq!(price.to_string(), "$12.99");
    }

    #[test]
    fn test_whole_dollars() {
        let price = Price::parse("7", CurrencyCode::CAD).unwrap();
        assert_eq!(price.cents(), Some(700));
        assert_eq!(price.to_string(), "$7.00");
    }

    #[test]
    fn test_unparsable() {
        assert!(Price::parse("", CurrencyCode::USD).is_none());
        assert!(Price::parse("free", CurrencyCode::USD).is_none());
    }

    #[test]
    fn test_cents_out_of_range() {
        let max = Price::parse("79228162514264337593543950335", CurrencyCode::USD).unwrap();
        assert_eq!(max.cents(), None);

        let huge = Price::parse("1000000000000000000", CurrencyCode::USD).unwrap();
        assert_eq!(huge.cents(), None);
    }
}
