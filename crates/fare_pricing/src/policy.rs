//! Pricing policy configuration.
//!
//! Every empirically chosen business parameter of the multiplier chain lives
//! here rather than as a literal in the pricing code: cabin multipliers,
//! day-of-week and seasonal uplifts, lead-time thresholds, the jitter band,
//! and the clamp interval. Policies deserialise from TOML and default to the
//! example policy.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use fare_core::types::{CabinClass, Currency, Date};

/// Policy configuration error types.
#[derive(Debug, Error)]
pub enum PolicyError {
    /// The policy file could not be read or parsed.
    #[error("Policy file error: {0}")]
    FileError(String),

    /// A numeric band is empty or inverted.
    #[error("Invalid {name} band: {min} must be below {max}")]
    InvalidBand {
        /// Which band failed validation.
        name: &'static str,
        /// Lower bound as configured.
        min: u32,
        /// Upper bound as configured.
        max: u32,
    },

    /// A multiplier is zero or negative.
    #[error("Invalid multiplier {name}: {value}. Must be positive")]
    InvalidMultiplier {
        /// Which multiplier failed validation.
        name: &'static str,
        /// Offending value.
        value: f64,
    },

    /// Jitter fraction outside [0, 1).
    #[error("Invalid jitter: {0}. Must be within [0, 1)")]
    InvalidJitter(f64),

    /// A month number outside 1-12 in the peak or shoulder sets.
    #[error("Invalid month number in policy: {0}. Must be within 1-12")]
    InvalidMonthNumber(u32),

    /// Lead-time thresholds are inverted.
    #[error("Invalid lead-time thresholds: urgent ({urgent}) must not exceed near ({near})")]
    InvalidLeadTime {
        /// Urgent threshold in days.
        urgent: i64,
        /// Near threshold in days.
        near: i64,
    },
}

/// Business parameters of the synthetic fare model.
///
/// The defaults carry the example policy: base fares in 80-500, cabin
/// multipliers 1.0/1.35/2.2, a 1.15 weekend uplift on Friday-Sunday, peak
/// months June-August and December at 1.2, shoulder months April, May,
/// September and October at 0.9, urgency uplifts 1.3 within 14 days and 1.1
/// within 30, ±10% jitter, and a final clamp to [49, 1299].
///
/// # Examples
///
/// ```
/// use fare_pricing::PricingPolicy;
///
/// let policy = PricingPolicy::default();
/// assert_eq!(policy.floor_price, 49);
/// assert_eq!(policy.ceiling_price, 1299);
/// assert!(policy.validate().is_ok());
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PricingPolicy {
    /// Currency fares are quoted in.
    pub currency: Currency,
    /// Lower bound of the per-route base-fare band (inclusive).
    pub base_fare_min: u32,
    /// Upper bound of the per-route base-fare band (exclusive).
    pub base_fare_max: u32,
    /// Economy cabin multiplier.
    pub cabin_economy: f64,
    /// Premium cabin multiplier.
    pub cabin_premium: f64,
    /// Business cabin multiplier.
    pub cabin_business: f64,
    /// Uplift applied on Friday, Saturday, and Sunday departures.
    pub weekend_uplift: f64,
    /// Months (1-12) priced as peak season.
    pub peak_months: Vec<u32>,
    /// Uplift applied in peak months.
    pub peak_uplift: f64,
    /// Months (1-12) priced as shoulder season.
    pub shoulder_months: Vec<u32>,
    /// Discount applied in shoulder months.
    pub shoulder_discount: f64,
    /// Lead time in days under which the urgent uplift applies.
    pub urgent_days: i64,
    /// Uplift for bookings within `urgent_days` of travel.
    pub urgent_uplift: f64,
    /// Lead time in days under which the near uplift applies.
    pub near_days: i64,
    /// Uplift for bookings within `near_days` of travel.
    pub near_uplift: f64,
    /// Half-width of the jitter band as a fraction (0.10 means ±10%).
    pub jitter: f64,
    /// Lowest quotable price (inclusive).
    pub floor_price: u32,
    /// Highest quotable price (inclusive).
    pub ceiling_price: u32,
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            currency: Currency::GBP,
            base_fare_min: 80,
            base_fare_max: 500,
            cabin_economy: 1.0,
            cabin_premium: 1.35,
            cabin_business: 2.2,
            weekend_uplift: 1.15,
            peak_months: vec![6, 7, 8, 12],
            peak_uplift: 1.2,
            shoulder_months: vec![4, 5, 9, 10],
            shoulder_discount: 0.9,
            urgent_days: 14,
            urgent_uplift: 1.3,
            near_days: 30,
            near_uplift: 1.1,
            jitter: 0.10,
            floor_price: 49,
            ceiling_price: 1299,
        }
    }
}

impl PricingPolicy {
    /// Loads a policy from a TOML file and validates it.
    ///
    /// Unspecified fields fall back to the defaults, so a file may override
    /// only the parameters it cares about.
    pub fn from_file(path: &Path) -> Result<Self, PolicyError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| PolicyError::FileError(format!("Failed to read policy file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Parses a policy from a TOML string and validates it.
    pub fn from_toml(content: &str) -> Result<Self, PolicyError> {
        let policy: PricingPolicy = toml::from_str(content)
            .map_err(|e| PolicyError::FileError(format!("Failed to parse TOML: {}", e)))?;
        policy.validate()?;
        Ok(policy)
    }

    /// Validates all parameter bands, multipliers, and month sets.
    pub fn validate(&self) -> Result<(), PolicyError> {
        if self.base_fare_min >= self.base_fare_max {
            return Err(PolicyError::InvalidBand {
                name: "base fare",
                min: self.base_fare_min,
                max: self.base_fare_max,
            });
        }
        if self.floor_price > self.ceiling_price {
            return Err(PolicyError::InvalidBand {
                name: "price clamp",
                min: self.floor_price,
                max: self.ceiling_price,
            });
        }

        let multipliers = [
            ("cabin_economy", self.cabin_economy),
            ("cabin_premium", self.cabin_premium),
            ("cabin_business", self.cabin_business),
            ("weekend_uplift", self.weekend_uplift),
            ("peak_uplift", self.peak_uplift),
            ("shoulder_discount", self.shoulder_discount),
            ("urgent_uplift", self.urgent_uplift),
            ("near_uplift", self.near_uplift),
        ];
        for (name, value) in multipliers {
            if !value.is_finite() || value <= 0.0 {
                return Err(PolicyError::InvalidMultiplier { name, value });
            }
        }

        if !self.jitter.is_finite() || !(0.0..1.0).contains(&self.jitter) {
            return Err(PolicyError::InvalidJitter(self.jitter));
        }

        for &m in self.peak_months.iter().chain(self.shoulder_months.iter()) {
            if !(1..=12).contains(&m) {
                return Err(PolicyError::InvalidMonthNumber(m));
            }
        }

        if self.urgent_days > self.near_days {
            return Err(PolicyError::InvalidLeadTime {
                urgent: self.urgent_days,
                near: self.near_days,
            });
        }

        Ok(())
    }

    /// Returns the multiplier for a cabin class.
    #[inline]
    pub fn cabin_multiplier(&self, cabin: CabinClass) -> f64 {
        match cabin {
            CabinClass::Economy => self.cabin_economy,
            CabinClass::Premium => self.cabin_premium,
            CabinClass::Business => self.cabin_business,
        }
    }

    /// Returns the seasonal multiplier for the month a date falls in.
    #[inline]
    pub fn seasonal_multiplier_for(&self, date: Date) -> f64 {
        let m = date.month();
        if self.peak_months.contains(&m) {
            self.peak_uplift
        } else if self.shoulder_months.contains(&m) {
            self.shoulder_discount
        } else {
            1.0
        }
    }
}
