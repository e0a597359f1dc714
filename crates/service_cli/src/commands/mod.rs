//! CLI command implementations.
//!
//! Each command lives in its own module:
//! - `calendar`: month fare-calendar generation
//! - `quote`: single-day quoting
//! - `check`: policy validation and display

pub mod calendar;
pub mod check;
pub mod quote;

use fare_core::types::{CabinClass, Date, Route};
use fare_pricing::PricingPolicy;

use crate::{CliError, Result};

/// Loads the pricing policy from an optional file path.
///
/// Falls back to the default policy when no path is given.
pub(crate) fn load_policy(path: Option<&str>) -> Result<PricingPolicy> {
    match path {
        Some(p) => {
            if !std::path::Path::new(p).exists() {
                return Err(CliError::FileNotFound(p.to_string()));
            }
            Ok(PricingPolicy::from_file(std::path::Path::new(p))?)
        }
        None => Ok(PricingPolicy::default()),
    }
}

/// Parses the common route/cabin/booking-date argument triple.
pub(crate) fn parse_trip(
    origin: &str,
    destination: &str,
    cabin: &str,
    booking_date: Option<&str>,
) -> Result<(Route, CabinClass, Date)> {
    let route = Route::new(origin, destination)?;
    let cabin: CabinClass = cabin.parse()?;
    let booking = match booking_date {
        Some(raw) => Date::parse(raw)?,
        None => Date::today(),
    };
    Ok((route, cabin, booking))
}
