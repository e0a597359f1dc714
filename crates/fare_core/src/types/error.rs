//! Error types for structured error handling.
//!
//! This module provides:
//! - `DateError`: Errors from date construction and parsing
//! - `MonthError`: Errors from month construction and parsing
//! - `CurrencyError`: Errors from currency parsing
//! - `CabinError`: Errors from cabin-class parsing
//! - `RouteError`: Errors from route construction

use thiserror::Error;

/// Date-related errors.
///
/// # Variants
/// - `InvalidDate`: Invalid date components (e.g., February 30th)
/// - `ParseError`: Failed to parse a date string
///
/// # Examples
/// ```
/// use fare_core::types::DateError;
///
/// let err = DateError::InvalidDate { year: 2025, month: 2, day: 30 };
/// assert_eq!(format!("{}", err), "Invalid date: 2025-2-30");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// Invalid date components (e.g., February 30th).
    #[error("Invalid date: {year}-{month}-{day}")]
    InvalidDate {
        /// Year component
        year: i32,
        /// Month component (1-12)
        month: u32,
        /// Day component (1-31)
        day: u32,
    },

    /// Failed to parse a date string.
    #[error("Date parse error: {0}")]
    ParseError(String),
}

/// Month-related errors.
///
/// # Variants
/// - `InvalidMonth`: Month number outside 1-12 or year unrepresentable
/// - `ParseError`: Failed to parse a `YYYY-MM` string
///
/// # Examples
/// ```
/// use fare_core::types::MonthError;
///
/// let err = MonthError::InvalidMonth { year: 2025, month: 13 };
/// assert_eq!(format!("{}", err), "Invalid month: 2025-13");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MonthError {
    /// Month number outside 1-12, or the year is not representable.
    #[error("Invalid month: {year}-{month}")]
    InvalidMonth {
        /// Year component
        year: i32,
        /// Month component
        month: u32,
    },

    /// Failed to parse a `YYYY-MM` string.
    #[error("Month parse error: {0}")]
    ParseError(String),
}

/// Currency-related errors.
///
/// # Examples
/// ```
/// use fare_core::types::CurrencyError;
///
/// let err = CurrencyError::UnknownCurrency("XYZ".to_string());
/// assert_eq!(format!("{}", err), "Unknown currency: XYZ");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CurrencyError {
    /// Unknown currency code.
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),
}

/// Cabin-class parsing errors.
///
/// # Examples
/// ```
/// use fare_core::types::CabinError;
///
/// let err = CabinError::UnknownCabin("luxury".to_string());
/// assert_eq!(
///     format!("{}", err),
///     "Unknown cabin class: luxury. Must be one of: economy, premium, business"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CabinError {
    /// Unknown cabin-class name.
    #[error("Unknown cabin class: {0}. Must be one of: economy, premium, business")]
    UnknownCabin(String),
}

/// Route construction errors.
///
/// # Variants
/// - `InvalidCode`: A location code is empty, too long, or non-alphanumeric
/// - `SameEndpoints`: Origin and destination are the same code
///
/// # Examples
/// ```
/// use fare_core::types::RouteError;
///
/// let err = RouteError::SameEndpoints("LHR".to_string());
/// assert_eq!(format!("{}", err), "Origin and destination are the same: LHR");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// Location code is not 2-4 ASCII alphanumeric characters.
    #[error("Invalid location code: {0:?}. Must be 2-4 ASCII letters or digits")]
    InvalidCode(String),

    /// Origin and destination are the same code.
    #[error("Origin and destination are the same: {0}")]
    SameEndpoints(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_error_invalid_date_display() {
        let err = DateError::InvalidDate {
            year: 2025,
            month: 2,
            day: 30,
        };
        assert_eq!(format!("{}", err), "Invalid date: 2025-2-30");
    }

    #[test]
    fn test_date_error_parse_error_display() {
        let err = DateError::ParseError("invalid format".to_string());
        assert_eq!(format!("{}", err), "Date parse error: invalid format");
    }

    #[test]
    fn test_month_error_invalid_month_display() {
        let err = MonthError::InvalidMonth {
            year: 2025,
            month: 0,
        };
        assert_eq!(format!("{}", err), "Invalid month: 2025-0");
    }

    #[test]
    fn test_currency_error_display() {
        let err = CurrencyError::UnknownCurrency("XYZ".to_string());
        assert_eq!(format!("{}", err), "Unknown currency: XYZ");
    }

    #[test]
    fn test_cabin_error_display() {
        let err = CabinError::UnknownCabin("first".to_string());
        assert!(format!("{}", err).contains("first"));
        assert!(format!("{}", err).contains("economy"));
    }

    #[test]
    fn test_route_error_display() {
        let err = RouteError::InvalidCode("L".to_string());
        assert!(format!("{}", err).contains("\"L\""));

        let err = RouteError::SameEndpoints("JFK".to_string());
        assert_eq!(format!("{}", err), "Origin and destination are the same: JFK");
    }

    #[test]
    fn test_error_trait_implementations() {
        let _: &dyn std::error::Error = &DateError::ParseError("x".to_string());
        let _: &dyn std::error::Error = &MonthError::ParseError("x".to_string());
        let _: &dyn std::error::Error = &CurrencyError::UnknownCurrency("x".to_string());
        let _: &dyn std::error::Error = &CabinError::UnknownCabin("x".to_string());
        let _: &dyn std::error::Error = &RouteError::InvalidCode("x".to_string());
    }

    #[test]
    fn test_clone_and_equality() {
        let err1 = DateError::InvalidDate {
            year: 2025,
            month: 2,
            day: 30,
        };
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }
}
