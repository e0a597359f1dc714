//! # fare_pricing: Deterministic Fare-Calendar Kernel
//!
//! ## Kernel Layer Role
//!
//! fare_pricing sits above `fare_core` and provides the synthetic pricing
//! engine:
//! - Seeded pseudo-random generation (`rng`)
//! - Stable per-route base fares (`base_fare`)
//! - The configurable multiplier chain (`policy`, `multipliers`)
//! - Month-calendar assembly (`calendar`)
//!
//! Everything in this crate is a pure function of its inputs: no clocks, no
//! global state, no I/O (policy file loading aside). Fixed inputs produce
//! byte-identical output across invocations and processes, which is the
//! property the whole engine exists to provide.
//!
//! ## Usage Example
//!
//! ```rust
//! use fare_core::types::{CabinClass, Date, Month, Route};
//! use fare_pricing::{generate_month_calendar, PricingPolicy};
//!
//! let route = Route::new("LHR", "JFK").unwrap();
//! let month = Month::from_ym(2025, 6).unwrap();
//! let booking = Date::from_ymd(2025, 5, 1).unwrap();
//! let policy = PricingPolicy::default();
//!
//! let calendar = generate_month_calendar(&route, month, CabinClass::Economy, booking, &policy);
//! assert_eq!(calendar.days.len(), 30);
//! assert!(calendar.days.iter().all(|d| d.price >= policy.floor_price));
//! ```
//!
//! ## Concurrency
//!
//! All entry points take `&PricingPolicy` and return owned values; they are
//! safe to call concurrently from any number of request handlers without
//! coordination.

pub mod base_fare;
pub mod calendar;
pub mod multipliers;
pub mod policy;
pub mod rng;

pub use base_fare::{base_fare, route_seed};
pub use calendar::{generate_month_calendar, CalendarResult, DayPrice};
pub use multipliers::{quote, quote_before_jitter};
pub use policy::{PolicyError, PricingPolicy};
pub use rng::FareRng;
