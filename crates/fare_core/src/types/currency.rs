//! Currency types for fare quotation.
//!
//! This module provides the closed set of settlement currencies the fare
//! engine can quote in, with ISO 4217 codes and display symbols.
//!
//! # Examples
//!
//! ```
//! use fare_core::types::currency::Currency;
//!
//! let gbp = Currency::GBP;
//! assert_eq!(gbp.code(), "GBP");
//! assert_eq!(gbp.symbol(), "£");
//!
//! let usd: Currency = "usd".parse().unwrap();
//! assert_eq!(usd, Currency::USD);
//! ```

use std::fmt;
use std::str::FromStr;

use super::error::CurrencyError;

/// Settlement currencies supported by the fare engine.
///
/// Fares are whole amounts in the currency's major unit, so no minor-unit
/// metadata is carried.
///
/// # Examples
///
/// ```
/// use fare_core::types::currency::Currency;
///
/// assert_eq!(Currency::GBP.code(), "GBP");
/// assert_eq!(Currency::EUR.symbol(), "€");
///
/// // Parse from string (case-insensitive)
/// let eur: Currency = "eur".parse().unwrap();
/// assert_eq!(eur, Currency::EUR);
/// ```
#[non_exhaustive]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Currency {
    /// British Pound Sterling (ISO 4217 code: GBP)
    #[default]
    GBP,

    /// United States Dollar (ISO 4217 code: USD)
    USD,

    /// Euro (ISO 4217 code: EUR)
    EUR,
}

impl Currency {
    /// Returns the ISO 4217 three-letter currency code.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::GBP => "GBP",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
        }
    }

    /// Returns the display symbol used in human-readable output.
    ///
    /// # Examples
    ///
    /// ```
    /// use fare_core::types::currency::Currency;
    ///
    /// assert_eq!(Currency::GBP.symbol(), "£");
    /// assert_eq!(Currency::USD.symbol(), "$");
    /// assert_eq!(Currency::EUR.symbol(), "€");
    /// ```
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::GBP => "£",
            Currency::USD => "$",
            Currency::EUR => "€",
        }
    }
}

impl FromStr for Currency {
    type Err = CurrencyError;

    /// Parses an ISO 4217 currency code (case-insensitive).
    fn from_str(s: &str) -> Result<Self, CurrencyError> {
        match s.to_uppercase().as_str() {
            "GBP" => Ok(Currency::GBP),
            "USD" => Ok(Currency::USD),
            "EUR" => Ok(Currency::EUR),
            _ => Err(CurrencyError::UnknownCurrency(s.to_string())),
        }
    }
}

impl fmt::Display for Currency {
    /// Formats as ISO 4217 code.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_code() {
        assert_eq!(Currency::GBP.code(), "GBP");
        assert_eq!(Currency::USD.code(), "USD");
        assert_eq!(Currency::EUR.code(), "EUR");
    }

    #[test]
    fn test_currency_symbol() {
        assert_eq!(Currency::GBP.symbol(), "£");
        assert_eq!(Currency::USD.symbol(), "$");
        assert_eq!(Currency::EUR.symbol(), "€");
    }

    #[test]
    fn test_currency_default_is_gbp() {
        assert_eq!(Currency::default(), Currency::GBP);
    }

    #[test]
    fn test_currency_from_str() {
        assert_eq!("GBP".parse::<Currency>().unwrap(), Currency::GBP);
        assert_eq!("usd".parse::<Currency>().unwrap(), Currency::USD);
        assert_eq!("Eur".parse::<Currency>().unwrap(), Currency::EUR);
    }

    #[test]
    fn test_currency_from_str_unknown() {
        let result = "XYZ".parse::<Currency>();
        match result {
            Err(CurrencyError::UnknownCurrency(code)) => assert_eq!(code, "XYZ"),
            _ => panic!("Expected UnknownCurrency error"),
        }
    }

    #[test]
    fn test_currency_display() {
        assert_eq!(format!("{}", Currency::GBP), "GBP");
    }

    #[test]
    fn test_currency_roundtrip() {
        for currency in [Currency::GBP, Currency::USD, Currency::EUR] {
            let parsed: Currency = currency.code().parse().unwrap();
            assert_eq!(currency, parsed);
        }
    }

    #[test]
    fn test_currency_serde_roundtrip() {
        let currency = Currency::GBP;
        let json = serde_json::to_string(&currency).unwrap();
        assert_eq!(json, "\"GBP\"");

        let parsed: Currency = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, currency);
    }
}
