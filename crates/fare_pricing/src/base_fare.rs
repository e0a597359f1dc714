//! Stable per-route base fares.
//!
//! A route's base fare is derived from nothing but its origin and
//! destination codes: the character codes are folded into a single seed,
//! mapped through the PRNG into the policy's base-fare band. No external
//! state is involved, so the same pair yields the same base fare within a
//! process and across processes.

use fare_core::types::Route;

use crate::policy::PricingPolicy;
use crate::rng::{mix64, FareRng};

/// Polynomial fold of a location code's bytes.
fn code_fold(code: &str) -> u64 {
    code.bytes()
        .fold(0u64, |acc, b| acc.wrapping_mul(31).wrapping_add(b as u64))
}

/// Derives the deterministic seed for a route.
///
/// Origin and destination are folded with distinct salts, so the seed is
/// directional: `LHR→JFK` and `JFK→LHR` produce different sequences.
///
/// # Examples
///
/// ```
/// use fare_core::types::Route;
/// use fare_pricing::route_seed;
///
/// let out = Route::new("LHR", "JFK").unwrap();
/// let back = out.reversed();
///
/// assert_eq!(route_seed(&out), route_seed(&out));
/// assert_ne!(route_seed(&out), route_seed(&back));
/// ```
pub fn route_seed(route: &Route) -> u64 {
    let origin = code_fold(route.origin());
    let destination = code_fold(route.destination());
    mix64(
        origin
            .wrapping_mul(0x9E37_79B9)
            .wrapping_add(destination.wrapping_mul(0x85EB_CA6B)),
    )
}

/// Returns the stable base fare for a route in major currency units.
///
/// The first PRNG draw for the route's seed is mapped into the policy's
/// base-fare band `[base_fare_min, base_fare_max)`.
///
/// # Examples
///
/// ```
/// use fare_core::types::Route;
/// use fare_pricing::{base_fare, PricingPolicy};
///
/// let route = Route::new("LHR", "JFK").unwrap();
/// let policy = PricingPolicy::default();
///
/// let fare = base_fare(&route, &policy);
/// assert!(fare >= policy.base_fare_min && fare < policy.base_fare_max);
/// assert_eq!(fare, base_fare(&route, &policy));
/// ```
pub fn base_fare(route: &Route, policy: &PricingPolicy) -> u32 {
    let mut rng = FareRng::from_seed(route_seed(route));
    let span = (policy.base_fare_max - policy.base_fare_min) as f64;
    policy.base_fare_min + (rng.next_f64() * span) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(origin: &str, destination: &str) -> Route {
        Route::new(origin, destination).unwrap()
    }

    #[test]
    fn test_base_fare_is_stable() {
        let policy = PricingPolicy::default();
        let lhr_jfk = route("LHR", "JFK");
        assert_eq!(base_fare(&lhr_jfk, &policy), base_fare(&lhr_jfk, &policy));
    }

    #[test]
    fn test_base_fare_within_band() {
        let policy = PricingPolicy::default();
        for (o, d) in [("LHR", "JFK"), ("CDG", "NRT"), ("SYD", "LAX"), ("AMS", "FCO")] {
            let fare = base_fare(&route(o, d), &policy);
            assert!(
                fare >= policy.base_fare_min && fare < policy.base_fare_max,
                "{}-{} fare {} outside band",
                o,
                d,
                fare
            );
        }
    }

    #[test]
    fn test_base_fare_is_directional() {
        let policy = PricingPolicy::default();
        let out = route("LHR", "JFK");
        assert_ne!(base_fare(&out, &policy), base_fare(&out.reversed(), &policy));
    }

    #[test]
    fn test_base_fare_differs_between_routes() {
        let policy = PricingPolicy::default();
        let a = base_fare(&route("LHR", "JFK"), &policy);
        let b = base_fare(&route("LHR", "SIN"), &policy);
        assert_ne!(a, b);
    }

    #[test]
    fn test_base_fare_respects_custom_band() {
        let policy = PricingPolicy {
            base_fare_min: 200,
            base_fare_max: 210,
            ..Default::default()
        };
        for (o, d) in [("LHR", "JFK"), ("CDG", "NRT"), ("SYD", "LAX")] {
            let fare = base_fare(&route(o, d), &policy);
            assert!((200..210).contains(&fare));
        }
    }

    #[test]
    fn test_route_seed_case_insensitive_via_route() {
        // Route normalises case, so seeds agree for any input spelling
        let a = Route::new("lhr", "jfk").unwrap();
        let b = Route::new("LHR", "JFK").unwrap();
        assert_eq!(route_seed(&a), route_seed(&b));
    }
}
