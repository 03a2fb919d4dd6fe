//! Birthday value object and next-occurrence arithmetic.

use super::clock::Clock;
use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use std::fmt;

/// Format used for birthdays everywhere: input prompts, rendering and the saved file.
pub const BIRTHDAY_FORMAT: &str = "%Y-%m-%d";

/// A date of birth that is not later than the day it was recorded.
///
/// # Example
///
/// ```
/// use address_book::domain::{Birthday, FixedClock};
///
/// let clock = FixedClock::ymd(2024, 6, 1).unwrap();
/// let birthday = Birthday::parse("2000-05-01", &clock).unwrap();
/// assert_eq!(birthday.to_string(), "2000-05-01");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Create a Birthday from a date, rejecting dates after `clock.today()`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::FutureBirthday` for a date in the future.
    pub fn new(date: NaiveDate, clock: &dyn Clock) -> Result<Self, ValidationError> {
        if date > clock.today() {
            return Err(ValidationError::FutureBirthday(date));
        }
        Ok(Self(date))
    }

    /// Parse a `YYYY-MM-DD` string and validate it like [`Birthday::new`].
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` when the text is not a date.
    pub fn parse(raw: &str, clock: &dyn Clock) -> Result<Self, ValidationError> {
        let date = NaiveDate::parse_from_str(raw.trim(), BIRTHDAY_FORMAT)
            .map_err(|_| ValidationError::InvalidBirthday(raw.to_string()))?;
        Self::new(date, clock)
    }

    /// The next anniversary on or after `today`.
    ///
    /// Feb 29 birthdays are observed on Feb 28 in non-leap years.
    pub fn next_occurrence(&self, today: NaiveDate) -> NaiveDate {
        let this_year = self.anniversary_in(today.year());
        if this_year >= today {
            this_year
        } else {
            self.anniversary_in(today.year() + 1)
        }
    }

    /// Days from `today` until the next anniversary; 0 when it is today.
    pub fn days_until(&self, today: NaiveDate) -> u32 {
        let days = (self.next_occurrence(today) - today).num_days();
        u32::try_from(days).unwrap_or(0)
    }

    fn anniversary_in(&self, year: i32) -> NaiveDate {
        let (month, day) = (self.0.month(), self.0.day());
        NaiveDate::from_ymd_opt(year, month, day)
            .or_else(|| NaiveDate::from_ymd_opt(year, month, day - 1))
            .unwrap_or(self.0)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}
