//! Cabin class enumeration.

use std::fmt;
use std::str::FromStr;

use super::error::CabinError;

/// Fare tier of a booking.
///
/// Variants are ordered by fare level, so `Economy < Premium < Business`
/// holds and the per-tier price ordering can be asserted directly.
///
/// # Examples
///
/// ```
/// use fare_core::types::cabin::CabinClass;
///
/// let cabin: CabinClass = "premium".parse().unwrap();
/// assert_eq!(cabin, CabinClass::Premium);
/// assert!(CabinClass::Business > CabinClass::Economy);
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CabinClass {
    /// Economy cabin (base fare level).
    #[default]
    Economy,
    /// Premium economy cabin.
    Premium,
    /// Business cabin (highest fare level).
    Business,
}

impl CabinClass {
    /// Returns the wire name of the cabin class.
    ///
    /// # Examples
    ///
    /// ```
    /// use fare_core::types::cabin::CabinClass;
    ///
    /// assert_eq!(CabinClass::Economy.code(), "economy");
    /// assert_eq!(CabinClass::Premium.code(), "premium");
    /// assert_eq!(CabinClass::Business.code(), "business");
    /// ```
    #[inline]
    pub fn code(&self) -> &'static str {
        match self {
            CabinClass::Economy => "economy",
            CabinClass::Premium => "premium",
            CabinClass::Business => "business",
        }
    }

    /// Returns all cabin classes in ascending fare order.
    #[inline]
    pub fn all() -> [CabinClass; 3] {
        [CabinClass::Economy, CabinClass::Premium, CabinClass::Business]
    }
}

impl FromStr for CabinClass {
    type Err = CabinError;

    /// Parses a cabin-class name (case-insensitive).
    fn from_str(s: &str) -> Result<Self, CabinError> {
        match s.to_lowercase().as_str() {
            "economy" => Ok(CabinClass::Economy),
            "premium" => Ok(CabinClass::Premium),
            "business" => Ok(CabinClass::Business),
            _ => Err(CabinError::UnknownCabin(s.to_string())),
        }
    }
}

impl fmt::Display for CabinClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cabin_code() {
        assert_eq!(CabinClass::Economy.code(), "economy");
        assert_eq!(CabinClass::Premium.code(), "premium");
        assert_eq!(CabinClass::Business.code(), "business");
    }

    #[test]
    fn test_cabin_from_str() {
        assert_eq!("economy".parse::<CabinClass>().unwrap(), CabinClass::Economy);
        assert_eq!("Premium".parse::<CabinClass>().unwrap(), CabinClass::Premium);
        assert_eq!("BUSINESS".parse::<CabinClass>().unwrap(), CabinClass::Business);
    }

    #[test]
    fn test_cabin_from_str_unknown() {
        let result = "first".parse::<CabinClass>();
        match result {
            Err(CabinError::UnknownCabin(name)) => assert_eq!(name, "first"),
            _ => panic!("Expected UnknownCabin error"),
        }
    }

    #[test]
    fn test_cabin_ordering() {
        assert!(CabinClass::Economy < CabinClass::Premium);
        assert!(CabinClass::Premium < CabinClass::Business);
    }

    #[test]
    fn test_cabin_default_is_economy() {
        assert_eq!(CabinClass::default(), CabinClass::Economy);
    }

    #[test]
    fn test_cabin_all_is_ascending() {
        let all = CabinClass::all();
        assert!(all.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_cabin_serde_lowercase() {
        let json = serde_json::to_string(&CabinClass::Business).unwrap();
        assert_eq!(json, "\"business\"");

        let parsed: CabinClass = serde_json::from_str("\"premium\"").unwrap();
        assert_eq!(parsed, CabinClass::Premium);
    }

    #[test]
    fn test_cabin_display() {
        assert_eq!(format!("{}", CabinClass::Economy), "economy");
    }
}
