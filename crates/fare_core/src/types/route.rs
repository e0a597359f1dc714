//! Route identity for fare quotation.
//!
//! A route is an ordered (origin, destination) pair of location codes. It is
//! never persisted; the pricing kernel uses it purely as a deterministic
//! hash key.

use std::fmt;

use super::error::RouteError;

/// An ordered origin/destination pair of location codes.
///
/// Codes are 2-4 ASCII alphanumeric characters (IATA airport or city codes
/// in practice) and are normalised to uppercase on construction, so two
/// spellings of the same route always hash identically. Direction matters:
/// `LHR→JFK` and `JFK→LHR` are distinct routes.
///
/// # Examples
///
/// ```
/// use fare_core::types::route::Route;
///
/// let route = Route::new("lhr", "JFK").unwrap();
/// assert_eq!(route.origin(), "LHR");
/// assert_eq!(route.destination(), "JFK");
/// assert_eq!(format!("{}", route), "LHR-JFK");
///
/// assert!(Route::new("LHR", "LHR").is_err());
/// assert!(Route::new("L", "JFK").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Route {
    origin: String,
    destination: String,
}

fn normalise_code(code: &str) -> Result<String, RouteError> {
    let trimmed = code.trim();
    let valid = (2..=4).contains(&trimmed.len())
        && trimmed.chars().all(|c| c.is_ascii_alphanumeric());
    if !valid {
        return Err(RouteError::InvalidCode(code.to_string()));
    }
    Ok(trimmed.to_ascii_uppercase())
}

impl Route {
    /// Creates a route from origin and destination codes.
    ///
    /// Both codes are validated (2-4 ASCII alphanumerics) and uppercased.
    ///
    /// # Errors
    /// - `RouteError::InvalidCode` if either code fails validation
    /// - `RouteError::SameEndpoints` if both codes normalise to the same value
    pub fn new(origin: &str, destination: &str) -> Result<Self, RouteError> {
        let origin = normalise_code(origin)?;
        let destination = normalise_code(destination)?;
        if origin == destination {
            return Err(RouteError::SameEndpoints(origin));
        }
        Ok(Route {
            origin,
            destination,
        })
    }

    /// Returns the normalised origin code.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Returns the normalised destination code.
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Returns the reverse route (destination to origin).
    ///
    /// # Examples
    ///
    /// ```
    /// use fare_core::types::route::Route;
    ///
    /// let out = Route::new("LHR", "JFK").unwrap();
    /// let back = out.reversed();
    /// assert_eq!(back.origin(), "JFK");
    /// assert_eq!(back.destination(), "LHR");
    /// ```
    pub fn reversed(&self) -> Route {
        Route {
            origin: self.destination.clone(),
            destination: self.origin.clone(),
        }
    }
}

impl fmt::Display for Route {
    /// Formats as `ORIGIN-DESTINATION`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.origin, self.destination)
    }
}
