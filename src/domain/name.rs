//! ContactName and Address value objects.

use super::errors::ValidationError;
use std::fmt;

/// The name a contact is filed under.
///
/// Names are the key of an [`AddressBook`](crate::AddressBook), so they
/// cannot be blank.
///
/// # Example
///
/// ```
/// use address_book::domain::ContactName;
///
/// let name = ContactName::new("John Smith").unwrap();
/// assert_eq!(name.as_str(), "John Smith");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContactName(String);

impl ContactName {
    /// Create a new ContactName, validating that it's not blank.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if the name is empty or whitespace.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(Self(name))
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ContactName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Free-form postal address.
///
/// Any string is accepted today; construction still goes through a fallible
/// constructor so a syntax check can be added without touching callers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Address(String);

impl Address {
    /// Create a new Address.
    pub fn new(address: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self(address.into()))
    }

    /// Get the address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_valid() {
        let name = ContactName::new("Ann").unwrap();
        assert_eq!(name.as_str(), "Ann");
    }

    #[test]
    fn test_name_rejects_blank() {
        assert_eq!(ContactName::new(""), Err(ValidationError::EmptyName));
        assert_eq!(ContactName::new("   "), Err(ValidationError::EmptyName));
    }

    #[test]
    fn test_address_accepts_anything() {
        assert_eq!(Address::new("").unwrap().as_str(), "");
        assert_eq!(Address::new("Main St 1").unwrap().to_string(), "Main St 1");
    }
}
