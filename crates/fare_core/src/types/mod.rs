//! Core time, currency, and route types.
//!
//! This module provides:
//! - `time`: `Date` (validated calendar date) and `Month` (year/month pair)
//! - `currency`: settlement currencies with ISO 4217 codes
//! - `cabin`: fare tiers (economy, premium, business)
//! - `route`: origin/destination code pairs
//! - `error`: structured error types for all of the above
//!
//! # Re-exports
//!
//! Commonly used types are re-exported at this module level:
//! - [`Date`], [`Month`] from `time`
//! - [`Currency`] from `currency`
//! - [`CabinClass`] from `cabin`
//! - [`Route`] from `route`
//! - [`CabinError`], [`CurrencyError`], [`DateError`], [`MonthError`],
//!   [`RouteError`] from `error`

pub mod cabin;
pub mod currency;
pub mod error;
pub mod route;
pub mod time;

// Re-export commonly used types at module level
pub use cabin::CabinClass;
pub use currency::Currency;
pub use error::{CabinError, CurrencyError, DateError, MonthError, RouteError};
pub use route::Route;
pub use time::{Date, Month};
