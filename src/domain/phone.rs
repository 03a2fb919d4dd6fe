//! PhoneNumber value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Accepted phone shapes: `+38-000-0000000`, `+380000000000`, `000-0000000`, `0000000000`.
static PHONE_PATTERNS: Lazy<[Regex; 4]> = Lazy::new(|| {
    [
        Regex::new(r"^\+\d{2}-\d{3}-\d{7}$").expect("Failed to compile phone regex"),
        Regex::new(r"^\+\d{12}$").expect("Failed to compile phone regex"),
        Regex::new(r"^\d{3}-\d{7}$").expect("Failed to compile phone regex"),
        Regex::new(r"^\d{10}$").expect("Failed to compile phone regex"),
    ]
});

/// A type-safe wrapper for phone numbers.
///
/// The number is kept exactly as entered; no normalization between the
/// accepted shapes is performed.
///
/// # Example
///
/// ```
/// use address_book::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("+38-050-1234567").unwrap();
/// assert_eq!(phone.as_str(), "+38-050-1234567");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the value matches none of
    /// the accepted shapes.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if !Self::is_valid(&phone) {
            return Err(ValidationError::InvalidPhone(phone));
        }

        Ok(Self(phone))
    }

    /// Check a raw value against the accepted shapes.
    pub fn is_valid(phone: &str) -> bool {
        PHONE_PATTERNS.iter().any(|re| re.is_match(phone))
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
