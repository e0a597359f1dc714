//! Quote command implementation
//!
//! Quotes a single travel day for a route and cabin.

use tracing::info;

use fare_core::types::Date;
use fare_pricing::quote;

use super::{load_policy, parse_trip};
use crate::Result;

/// Run the quote command
pub fn run(
    origin: &str,
    destination: &str,
    date: &str,
    cabin: &str,
    booking_date: Option<&str>,
    policy_path: Option<&str>,
) -> Result<()> {
    let policy = load_policy(policy_path)?;
    let (route, cabin, booking) = parse_trip(origin, destination, cabin, booking_date)?;
    let travel_date = Date::parse(date)?;

    info!("Quoting {} on {} ({})...", route, travel_date, cabin);

    let price = quote(&route, travel_date, cabin, booking, &policy);

    println!(
        "{} {} {} {}{}",
        route,
        travel_date,
        cabin,
        policy.currency.symbol(),
        price
    );

    Ok(())
}
