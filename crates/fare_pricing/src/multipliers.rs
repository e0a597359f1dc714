//! The multiplier chain.
//!
//! A day's quote starts from the route's base fare and applies, in order:
//! cabin multiplier, day-of-week multiplier, seasonal multiplier, lead-time
//! urgency multiplier, and a final jitter factor keyed on the specific date.
//! The result is rounded to a whole amount and clamped to the policy's
//! price band.

use chrono::Weekday;

use fare_core::types::{CabinClass, Date, Route};

use crate::base_fare::{base_fare, route_seed};
use crate::policy::PricingPolicy;
use crate::rng::{mix64, FareRng};

/// Returns the day-of-week multiplier for a travel date.
///
/// Friday, Saturday, and Sunday departures carry the weekend uplift; other
/// days are neutral.
#[inline]
pub fn day_of_week_multiplier(date: Date, policy: &PricingPolicy) -> f64 {
    match date.weekday() {
        Weekday::Fri | Weekday::Sat | Weekday::Sun => policy.weekend_uplift,
        _ => 1.0,
    }
}

/// Returns the lead-time urgency multiplier.
///
/// Lead time is the number of whole days from `booking_date` to `date`.
/// Bookings inside the urgent window are the costliest, bookings inside the
/// near window slightly cheaper, and anything further out (or in the past)
/// is neutral.
///
/// # Examples
///
/// ```
/// use fare_core::types::Date;
/// use fare_pricing::multipliers::lead_time_multiplier;
/// use fare_pricing::PricingPolicy;
///
/// let policy = PricingPolicy::default();
/// let booking = Date::from_ymd(2025, 6, 1).unwrap();
///
/// let soon = Date::from_ymd(2025, 6, 5).unwrap();
/// assert_eq!(lead_time_multiplier(booking, soon, &policy), policy.urgent_uplift);
///
/// let later = Date::from_ymd(2025, 6, 25).unwrap();
/// assert_eq!(lead_time_multiplier(booking, later, &policy), policy.near_uplift);
///
/// let far = Date::from_ymd(2025, 9, 1).unwrap();
/// assert_eq!(lead_time_multiplier(booking, far, &policy), 1.0);
/// ```
#[inline]
pub fn lead_time_multiplier(booking_date: Date, date: Date, policy: &PricingPolicy) -> f64 {
    let lead_days = date - booking_date;
    if lead_days < 0 {
        1.0
    } else if lead_days < policy.urgent_days {
        policy.urgent_uplift
    } else if lead_days < policy.near_days {
        policy.near_uplift
    } else {
        1.0
    }
}

/// Returns the jitter factor for a route/date pair, in `[1 - j, 1 + j)`.
///
/// The factor is drawn from a generator seeded on the route seed mixed with
/// the date's day number, so it depends only on the (route, date) pair and
/// not on which slice of the calendar is being generated.
fn jitter_factor(seed: u64, date: Date, policy: &PricingPolicy) -> f64 {
    let day_key = mix64(date.days_from_ce() as u64);
    let mut rng = FareRng::from_seed(seed ^ day_key);
    1.0 - policy.jitter + rng.next_f64() * 2.0 * policy.jitter
}

/// Quotes a day's fare with every multiplier except jitter applied.
///
/// This is the deterministic backbone of a quote. Because jitter is the only
/// stage that can reorder nearby prices, the strict cabin ordering
/// `business ≥ premium ≥ economy` holds exactly on this value.
///
/// # Examples
///
/// ```
/// use fare_core::types::{CabinClass, Date, Route};
/// use fare_pricing::{quote_before_jitter, PricingPolicy};
///
/// let route = Route::new("LHR", "JFK").unwrap();
/// let policy = PricingPolicy::default();
/// let date = Date::from_ymd(2025, 6, 15).unwrap();
/// let booking = Date::from_ymd(2025, 5, 1).unwrap();
///
/// let economy = quote_before_jitter(&route, date, CabinClass::Economy, booking, &policy);
/// let business = quote_before_jitter(&route, date, CabinClass::Business, booking, &policy);
/// assert!(business > economy);
/// ```
pub fn quote_before_jitter(
    route: &Route,
    date: Date,
    cabin: CabinClass,
    booking_date: Date,
    policy: &PricingPolicy,
) -> f64 {
    base_fare(route, policy) as f64
        * policy.cabin_multiplier(cabin)
        * day_of_week_multiplier(date, policy)
        * policy.seasonal_multiplier_for(date)
        * lead_time_multiplier(booking_date, date, policy)
}

/// Quotes a single day's fare.
///
/// Applies the full multiplier chain including jitter, rounds to a whole
/// amount, and clamps to `[floor_price, ceiling_price]`.
///
/// # Examples
///
/// ```
/// use fare_core::types::{CabinClass, Date, Route};
/// use fare_pricing::{quote, PricingPolicy};
///
/// let route = Route::new("LHR", "JFK").unwrap();
/// let policy = PricingPolicy::default();
/// let date = Date::from_ymd(2025, 6, 15).unwrap();
/// let booking = Date::from_ymd(2025, 5, 1).unwrap();
///
/// let price = quote(&route, date, CabinClass::Economy, booking, &policy);
/// assert!(price >= policy.floor_price && price <= policy.ceiling_price);
/// assert_eq!(price, quote(&route, date, CabinClass::Economy, booking, &policy));
/// ```
pub fn quote(
    route: &Route,
    date: Date,
    cabin: CabinClass,
    booking_date: Date,
    policy: &PricingPolicy,
) -> u32 {
    let before_jitter = quote_before_jitter(route, date, cabin, booking_date, policy);
    let jittered = before_jitter * jitter_factor(route_seed(route), date, policy);
    (jittered.round() as u32).clamp(policy.floor_price, policy.ceiling_price)
}
