//! Domain validation errors.

use chrono::NaiveDate;
use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided contact name is empty or blank.
    EmptyName,

    /// The provided phone number does not match any accepted shape.
    InvalidPhone(String),

    /// No phone number was supplied where at least one is required.
    NoPhones,

    /// The provided email address is invalid.
    InvalidEmail(String),

    /// The provided birthday is not a `YYYY-MM-DD` date.
    InvalidBirthday(String),

    /// The provided birthday lies after today.
    FutureBirthday(NaiveDate),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Name cannot be empty"),
            Self::InvalidPhone(phone) => write!(f, "Invalid phone number: {}", phone),
            Self::NoPhones => write!(f, "At least one phone number is required"),
            Self::InvalidEmail(email) => write!(f, "Invalid email address: {}", email),
            Self::InvalidBirthday(raw) => {
                write!(f, "Invalid birthday: {} (expected YYYY-MM-DD)", raw)
            }
            Self::FutureBirthday(date) => {
                write!(f, "Invalid birthday: {} is in the future", date)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_message_names_token() {
        let err = ValidationError::InvalidPhone("12ab".to_string());
        assert_eq!(err.to_string(), "Invalid phone number: 12ab");
    }

    #[test]
    fn test_no_phones_message() {
        assert_eq!(
            ValidationError::NoPhones.to_string(),
            "At least one phone number is required"
        );
    }

    #[test]
    fn test_future_birthday_message() {
        let date = NaiveDate::from_ymd_opt(2999, 1, 2).unwrap();
        let err = ValidationError::FutureBirthday(date);
        assert_eq!(err.to_string(), "Invalid birthday: 2999-01-02 is in the future");
    }
}
