//! Month-calendar assembly.
//!
//! The assembler enumerates every day of a requested month and prices each
//! one with the multiplier chain. There is no partial failure mode: `Month`
//! is validated at construction, so assembly is a total function of its
//! inputs.

use serde::{Deserialize, Serialize};

use fare_core::types::{CabinClass, Currency, Date, Month, Route};

use crate::multipliers::quote;
use crate::policy::PricingPolicy;

/// A single day's quoted fare.
///
/// Ephemeral: recomputed on every request, never persisted, never mutated
/// after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPrice {
    /// The travel date.
    pub date: Date,
    /// Quoted fare in major currency units.
    pub price: u32,
}

/// A full month of quoted fares for one route and cabin.
///
/// Serialises to the wire shape
/// `{ "currency": "GBP", "days": [{ "date": "YYYY-MM-DD", "price": n }, ...] }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarResult {
    /// Currency all prices are quoted in.
    pub currency: Currency,
    /// One entry per calendar day of the requested month, in date order.
    pub days: Vec<DayPrice>,
}

/// Generates the fare calendar for one month of a route.
///
/// Enumerates every day of `month` in calendar order and quotes each with
/// the full multiplier chain. The result is fully determined by the
/// arguments: fixed (route, month, cabin, booking date, policy) produce
/// byte-identical output across invocations and processes.
///
/// # Examples
///
/// ```
/// use fare_core::types::{CabinClass, Date, Month, Route};
/// use fare_pricing::{generate_month_calendar, PricingPolicy};
///
/// let route = Route::new("LHR", "JFK").unwrap();
/// let month = Month::from_ym(2024, 2).unwrap();
/// let booking = Date::from_ymd(2024, 1, 15).unwrap();
/// let policy = PricingPolicy::default();
///
/// let calendar = generate_month_calendar(&route, month, CabinClass::Economy, booking, &policy);
/// assert_eq!(calendar.days.len(), 29);  // leap February
/// assert_eq!(format!("{}", calendar.days[0].date), "2024-02-01");
/// ```
pub fn generate_month_calendar(
    route: &Route,
    month: Month,
    cabin: CabinClass,
    booking_date: Date,
    policy: &PricingPolicy,
) -> CalendarResult {
    let days = month
        .days()
        .map(|date| DayPrice {
            date,
            price: quote(route, date, cabin, booking_date, policy),
        })
        .collect();

    CalendarResult {
        currency: policy.currency,
        days,
    }
}
