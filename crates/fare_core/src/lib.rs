//! # fare_core: Domain Types for the Skyfare Fare-Calendar Engine
//!
//! ## Foundation Layer Role
//!
//! fare_core is the bottom layer of the workspace, providing:
//! - Time types: `Date`, `Month` (`types::time`)
//! - Currency types: `Currency` (`types::currency`)
//! - Fare tiers: `CabinClass` (`types::cabin`)
//! - Route identity: `Route` (`types::route`)
//! - Error types: `DateError`, `MonthError`, `CurrencyError`, `CabinError`,
//!   `RouteError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! The foundation layer has no dependencies on other fare_* crates, with
//! minimal external dependencies:
//! - chrono: Date arithmetic
//! - serde: Serialisation support
//! - thiserror: Structured error types
//!
//! ## Usage Examples
//!
//! ```rust
//! use fare_core::types::{CabinClass, Currency, Date, Month, Route};
//!
//! // Routes validate and normalise their endpoint codes
//! let route = Route::new("lhr", "JFK").unwrap();
//! assert_eq!(route.origin(), "LHR");
//!
//! // Months know their true calendar length
//! let feb = Month::from_ym(2024, 2).unwrap();
//! assert_eq!(feb.day_count(), 29);
//!
//! // Dates parse from ISO 8601
//! let date = Date::parse("2025-06-15").unwrap();
//! assert_eq!(date.day(), 15);
//!
//! // Cabin classes are ordered by fare tier
//! assert!(CabinClass::Business > CabinClass::Economy);
//! assert_eq!(Currency::GBP.code(), "GBP");
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod types;

#[cfg(test)]
mod tests {
    #[test]
    fn it_works() {
        assert_eq!(2 + 2, 4);
    }
}
