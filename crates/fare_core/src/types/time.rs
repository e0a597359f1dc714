//! Time types for fare-calendar calculations.
//!
//! This module provides:
//! - `Date`: Type-safe date wrapper around chrono::NaiveDate
//! - `Month`: A validated (year, month-of-year) pair with calendar enumeration
//!
//! # Examples
//!
//! ```
//! use fare_core::types::time::{Date, Month};
//!
//! let month = Month::from_ym(2025, 6).unwrap();
//! assert_eq!(month.day_count(), 30);
//!
//! let first = month.first_day();
//! assert_eq!(format!("{}", first), "2025-06-01");
//!
//! let travel = Date::parse("2025-06-15").unwrap();
//! let booking = Date::from_ymd(2025, 6, 1).unwrap();
//! assert_eq!(travel - booking, 14);
//! ```

use chrono::{Datelike, Local, NaiveDate, Weekday};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use super::error::{DateError, MonthError};

/// Type-safe date wrapper around chrono::NaiveDate.
///
/// Provides ISO 8601 parsing and serialisation plus the date arithmetic the
/// pricing chain needs (weekday lookup, whole-day differences, a stable
/// per-day integer key).
///
/// # Examples
///
/// ```
/// use fare_core::types::time::Date;
///
/// // Create from year, month, day
/// let date = Date::from_ymd(2025, 6, 15).unwrap();
/// assert_eq!(date.year(), 2025);
/// assert_eq!(date.month(), 6);
/// assert_eq!(date.day(), 15);
///
/// // Parse from ISO 8601 string
/// let parsed: Date = "2025-06-15".parse().unwrap();
/// assert_eq!(date, parsed);
///
/// // Whole days between dates
/// let start = Date::from_ymd(2025, 6, 1).unwrap();
/// assert_eq!(date - start, 14);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a Date from year, month, and day components.
    ///
    /// # Arguments
    /// * `year` - Year (e.g., 2025)
    /// * `month` - Month (1-12)
    /// * `day` - Day (1-31, depending on month)
    ///
    /// # Returns
    /// `Ok(Date)` if the date is valid, `Err(DateError::InvalidDate)` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use fare_core::types::time::Date;
    ///
    /// let date = Date::from_ymd(2024, 2, 29).unwrap();  // leap day
    /// assert!(Date::from_ymd(2025, 2, 29).is_err());
    /// ```
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or(DateError::InvalidDate { year, month, day })
    }

    /// Returns today's date based on local system time.
    pub fn today() -> Self {
        Date(Local::now().date_naive())
    }

    /// Parses a date from ISO 8601 format string (YYYY-MM-DD).
    ///
    /// # Examples
    ///
    /// ```
    /// use fare_core::types::time::Date;
    ///
    /// let date = Date::parse("2025-06-15").unwrap();
    /// assert_eq!(date.year(), 2025);
    ///
    /// assert!(Date::parse("not-a-date").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, DateError> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Date)
            .map_err(|e| DateError::ParseError(e.to_string()))
    }

    /// Returns the underlying NaiveDate for access to chrono's full API.
    pub fn into_inner(self) -> NaiveDate {
        self.0
    }

    /// Returns the year component.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Returns the day of the week.
    ///
    /// # Examples
    ///
    /// ```
    /// use fare_core::types::time::Date;
    /// use chrono::Weekday;
    ///
    /// let date = Date::from_ymd(2025, 6, 14).unwrap();
    /// assert_eq!(date.weekday(), Weekday::Sat);
    /// ```
    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Returns the number of whole days since the Common Era.
    ///
    /// Stable across processes; used as a per-day key when deriving
    /// deterministic jitter seeds.
    pub fn days_from_ce(&self) -> i32 {
        self.0.num_days_from_ce()
    }
}

impl Sub for Date {
    type Output = i64;

    /// Returns the number of whole days from `rhs` to `self`.
    fn sub(self, rhs: Date) -> i64 {
        (self.0 - rhs.0).num_days()
    }
}

impl FromStr for Date {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, DateError> {
        Date::parse(s)
    }
}

impl fmt::Display for Date {
    /// Formats as ISO 8601 (YYYY-MM-DD).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// A validated (year, month-of-year) pair.
///
/// `Month` is the unit a fare calendar is generated over. Construction
/// validates the month number, so enumeration over its days is total: every
/// `Month` value has a well-defined first day and day count.
///
/// # Examples
///
/// ```
/// use fare_core::types::time::Month;
///
/// let june = Month::from_ym(2025, 6).unwrap();
/// assert_eq!(june.day_count(), 30);
///
/// let parsed: Month = "2025-06".parse().unwrap();
/// assert_eq!(parsed, june);
///
/// let days: Vec<_> = june.days().collect();
/// assert_eq!(days.len(), 30);
/// assert_eq!(format!("{}", days[0]), "2025-06-01");
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month {
    year: i32,
    month: u32,
}

impl Month {
    /// Creates a Month from year and month-of-year components.
    ///
    /// # Arguments
    /// * `year` - Year (e.g., 2025)
    /// * `month` - Month of year (1-12)
    ///
    /// # Returns
    /// `Ok(Month)` if valid, `Err(MonthError::InvalidMonth)` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use fare_core::types::time::Month;
    ///
    /// assert!(Month::from_ym(2025, 12).is_ok());
    /// assert!(Month::from_ym(2025, 0).is_err());
    /// assert!(Month::from_ym(2025, 13).is_err());
    /// ```
    pub fn from_ym(year: i32, month: u32) -> Result<Self, MonthError> {
        // from_ymd_opt also rejects years chrono cannot represent
        match NaiveDate::from_ymd_opt(year, month, 1) {
            Some(_) => Ok(Month { year, month }),
            None => Err(MonthError::InvalidMonth { year, month }),
        }
    }

    /// Returns the month containing the given date.
    ///
    /// # Examples
    ///
    /// ```
    /// use fare_core::types::time::{Date, Month};
    ///
    /// let date = Date::from_ymd(2025, 6, 15).unwrap();
    /// assert_eq!(Month::containing(date), Month::from_ym(2025, 6).unwrap());
    /// ```
    pub fn containing(date: Date) -> Self {
        Month {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Parses a month from a `YYYY-MM` string.
    ///
    /// # Examples
    ///
    /// ```
    /// use fare_core::types::time::Month;
    ///
    /// let month = Month::parse("2025-06").unwrap();
    /// assert_eq!(month.year(), 2025);
    /// assert_eq!(month.month(), 6);
    ///
    /// assert!(Month::parse("2025-6-1").is_err());
    /// assert!(Month::parse("June 2025").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, MonthError> {
        let (year_str, month_str) = s
            .split_once('-')
            .ok_or_else(|| MonthError::ParseError(format!("expected YYYY-MM, got {:?}", s)))?;
        if month_str.contains('-') {
            return Err(MonthError::ParseError(format!(
                "expected YYYY-MM, got {:?}",
                s
            )));
        }
        let year: i32 = year_str
            .parse()
            .map_err(|_| MonthError::ParseError(format!("invalid year in {:?}", s)))?;
        let month: u32 = month_str
            .parse()
            .map_err(|_| MonthError::ParseError(format!("invalid month in {:?}", s)))?;
        Month::from_ym(year, month)
    }

    /// Returns the year component.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month-of-year component (1-12).
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Returns the first day of the month.
    pub fn first_day(&self) -> Date {
        // Validated at construction, so this cannot fail
        Date(NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or_default())
    }

    /// Returns the true number of calendar days in the month.
    ///
    /// Leap years are accounted for.
    ///
    /// # Examples
    ///
    /// ```
    /// use fare_core::types::time::Month;
    ///
    /// assert_eq!(Month::from_ym(2025, 1).unwrap().day_count(), 31);
    /// assert_eq!(Month::from_ym(2025, 2).unwrap().day_count(), 28);
    /// assert_eq!(Month::from_ym(2024, 2).unwrap().day_count(), 29);
    /// assert_eq!(Month::from_ym(2025, 6).unwrap().day_count(), 30);
    /// ```
    pub fn day_count(&self) -> u32 {
        let first = self.first_day().into_inner();
        let next_first = if self.month == 12 {
            NaiveDate::from_ymd_opt(self.year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(self.year, self.month + 1, 1)
        };
        match next_first {
            Some(next) => (next - first).num_days() as u32,
            // December of chrono's maximum year: count the remaining days directly
            None => 31,
        }
    }

    /// Returns an iterator over every day of the month in calendar order.
    ///
    /// # Examples
    ///
    /// ```
    /// use fare_core::types::time::Month;
    ///
    /// let feb = Month::from_ym(2024, 2).unwrap();
    /// let days: Vec<_> = feb.days().collect();
    /// assert_eq!(days.len(), 29);
    /// assert_eq!(format!("{}", days[28]), "2024-02-29");
    /// ```
    pub fn days(&self) -> impl Iterator<Item = Date> {
        self.first_day()
            .into_inner()
            .iter_days()
            .take(self.day_count() as usize)
            .map(Date)
    }
}

impl FromStr for Month {
    type Err = MonthError;

    fn from_str(s: &str) -> Result<Self, MonthError> {
        Month::parse(s)
    }
}

impl fmt::Display for Month {
    /// Formats as `YYYY-MM`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_from_ymd_valid() {
        let date = Date::from_ymd(2025, 6, 15).unwrap();
        assert_eq!(date.year(), 2025);
        assert_eq!(date.month(), 6);
        assert_eq!(date.day(), 15);
    }

    #[test]
    fn test_date_from_ymd_invalid() {
        let result = Date::from_ymd(2025, 2, 30);
        assert_eq!(
            result,
            Err(DateError::InvalidDate {
                year: 2025,
                month: 2,
                day: 30
            })
        );
    }

    #[test]
    fn test_date_leap_day() {
        assert!(Date::from_ymd(2024, 2, 29).is_ok());
        assert!(Date::from_ymd(2025, 2, 29).is_err());
    }

    #[test]
    fn test_date_parse_iso() {
        let date = Date::parse("2025-06-15").unwrap();
        assert_eq!(date, Date::from_ymd(2025, 6, 15).unwrap());
    }

    #[test]
    fn test_date_parse_invalid() {
        assert!(Date::parse("15/06/2025").is_err());
        assert!(Date::parse("not-a-date").is_err());
    }

    #[test]
    fn test_date_display_round_trip() {
        let date = Date::from_ymd(2025, 6, 5).unwrap();
        let shown = format!("{}", date);
        assert_eq!(shown, "2025-06-05");
        assert_eq!(Date::parse(&shown).unwrap(), date);
    }

    #[test]
    fn test_date_subtraction() {
        let start = Date::from_ymd(2025, 6, 1).unwrap();
        let end = Date::from_ymd(2025, 6, 15).unwrap();
        assert_eq!(end - start, 14);
        assert_eq!(start - end, -14);
    }

    #[test]
    fn test_date_weekday() {
        // 2025-06-14 is a Saturday
        let date = Date::from_ymd(2025, 6, 14).unwrap();
        assert_eq!(date.weekday(), Weekday::Sat);
    }

    #[test]
    fn test_date_days_from_ce_is_monotone() {
        let a = Date::from_ymd(2025, 6, 14).unwrap();
        let b = Date::from_ymd(2025, 6, 15).unwrap();
        assert_eq!(b.days_from_ce() - a.days_from_ce(), 1);
    }

    #[test]
    fn test_date_serde_iso_string() {
        let date = Date::from_ymd(2025, 6, 1).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"2025-06-01\"");

        let parsed: Date = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, date);
    }

    #[test]
    fn test_month_from_ym_valid() {
        let month = Month::from_ym(2025, 6).unwrap();
        assert_eq!(month.year(), 2025);
        assert_eq!(month.month(), 6);
    }

    #[test]
    fn test_month_from_ym_invalid() {
        assert!(Month::from_ym(2025, 0).is_err());
        assert!(Month::from_ym(2025, 13).is_err());
    }

    #[test]
    fn test_month_parse() {
        assert_eq!(Month::parse("2025-06").unwrap(), Month::from_ym(2025, 6).unwrap());
        assert_eq!(Month::parse("2024-2").unwrap(), Month::from_ym(2024, 2).unwrap());
    }

    #[test]
    fn test_month_parse_invalid() {
        assert!(Month::parse("2025").is_err());
        assert!(Month::parse("2025-06-01").is_err());
        assert!(Month::parse("2025-xx").is_err());
        assert!(Month::parse("June 2025").is_err());
    }

    #[test]
    fn test_month_day_count() {
        assert_eq!(Month::from_ym(2025, 1).unwrap().day_count(), 31);
        assert_eq!(Month::from_ym(2025, 4).unwrap().day_count(), 30);
        assert_eq!(Month::from_ym(2025, 2).unwrap().day_count(), 28);
        assert_eq!(Month::from_ym(2024, 2).unwrap().day_count(), 29);
        assert_eq!(Month::from_ym(2000, 2).unwrap().day_count(), 29);
        assert_eq!(Month::from_ym(1900, 2).unwrap().day_count(), 28);
        assert_eq!(Month::from_ym(2025, 12).unwrap().day_count(), 31);
    }

    #[test]
    fn test_month_first_day() {
        let month = Month::from_ym(2025, 6).unwrap();
        assert_eq!(month.first_day(), Date::from_ymd(2025, 6, 1).unwrap());
    }

    #[test]
    fn test_month_days_iterator() {
        let month = Month::from_ym(2025, 6).unwrap();
        let days: Vec<Date> = month.days().collect();
        assert_eq!(days.len(), 30);
        assert_eq!(days[0], Date::from_ymd(2025, 6, 1).unwrap());
        assert_eq!(days[29], Date::from_ymd(2025, 6, 30).unwrap());

        // Strictly ascending by one day
        for pair in days.windows(2) {
            assert_eq!(pair[1] - pair[0], 1);
        }
    }

    #[test]
    fn test_month_days_iterator_december_stays_in_month() {
        let month = Month::from_ym(2025, 12).unwrap();
        let days: Vec<Date> = month.days().collect();
        assert_eq!(days.len(), 31);
        assert!(days.iter().all(|d| d.month() == 12));
    }

    #[test]
    fn test_month_containing() {
        let date = Date::from_ymd(2025, 6, 15).unwrap();
        assert_eq!(Month::containing(date), Month::from_ym(2025, 6).unwrap());
    }

    #[test]
    fn test_month_display() {
        assert_eq!(format!("{}", Month::from_ym(2025, 6).unwrap()), "2025-06");
        assert_eq!(format!("{}", Month::from_ym(2025, 12).unwrap()), "2025-12");
    }

    #[test]
    fn test_month_from_str() {
        let month: Month = "2025-06".parse().unwrap();
        assert_eq!(month, Month::from_ym(2025, 6).unwrap());
    }
}
