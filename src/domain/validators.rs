//! Field validators.
//!
//! Each field kind has a [`FieldValidator`] that turns raw text into a
//! validated value object, plus a plain predicate for callers that only need
//! a yes/no answer. Predicates never fail; only the validators return errors.

use super::birthday::Birthday;
use super::clock::Clock;
use super::email::EmailAddress;
use super::errors::ValidationError;
use super::name::{Address, ContactName};
use super::phone::PhoneNumber;
use chrono::NaiveDate;

/// Turns raw user input into a validated field value.
pub trait FieldValidator {
    /// The value object produced on success.
    type Value;

    /// Validate `raw`, returning the typed value or the reason it was rejected.
    fn validate(&self, raw: &str) -> Result<Self::Value, ValidationError>;
}

/// Validator for [`ContactName`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NameValidator;

impl FieldValidator for NameValidator {
    type Value = ContactName;

    fn validate(&self, raw: &str) -> Result<ContactName, ValidationError> {
        ContactName::new(raw)
    }
}

/// Validator for [`Address`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AddressValidator;

impl FieldValidator for AddressValidator {
    type Value = Address;

    fn validate(&self, raw: &str) -> Result<Address, ValidationError> {
        Address::new(raw)
    }
}

/// Validator for [`PhoneNumber`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PhoneValidator;

impl FieldValidator for PhoneValidator {
    type Value = PhoneNumber;

    fn validate(&self, raw: &str) -> Result<PhoneNumber, ValidationError> {
        PhoneNumber::new(raw)
    }
}

/// Validator for [`EmailAddress`].
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailValidator;

impl FieldValidator for EmailValidator {
    type Value = EmailAddress;

    fn validate(&self, raw: &str) -> Result<EmailAddress, ValidationError> {
        EmailAddress::new(raw)
    }
}

/// Validator for [`Birthday`], parsing `YYYY-MM-DD` against an injected clock.
pub struct BirthdayValidator<'a> {
    clock: &'a dyn Clock,
}

impl<'a> BirthdayValidator<'a> {
    pub fn new(clock: &'a dyn Clock) -> Self {
        Self { clock }
    }
}

impl FieldValidator for BirthdayValidator<'_> {
    type Value = Birthday;

    fn validate(&self, raw: &str) -> Result<Birthday, ValidationError> {
        Birthday::parse(raw, self.clock)
    }
}

/// True iff `value` has one of the four accepted phone shapes.
pub fn validate_phone(value: &str) -> bool {
    PhoneNumber::is_valid(value)
}

/// True iff `value` looks like `local@domain.tld`.
pub fn validate_email(value: &str) -> bool {
    EmailAddress::is_valid(value)
}

/// True iff `value` is not after the clock's current date.
pub fn validate_birthday(value: NaiveDate, clock: &dyn Clock) -> bool {
    value <= clock.today()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::clock::FixedClock;

    #[test]
    fn test_validate_phone_predicate() {
        assert!(validate_phone("+38-050-1234567"));
        assert!(validate_phone("+380501234567"));
        assert!(validate_phone("050-1234567"));
        assert!(validate_phone("0501234567"));
        assert!(!validate_phone("+38-050-12345678"));
        assert!(!validate_phone("+38050123456"));
        assert!(!validate_phone("050-123456"));
        assert!(!validate_phone("050123456"));
        assert!(!validate_phone("bad"));
    }

    #[test]
    fn test_validate_email_predicate() {
        assert!(validate_email("user@domain.tld"));
        assert!(validate_email("a.b-c@sub.domain.org"));
        assert!(!validate_email("user.domain.tld"));
        assert!(!validate_email("user@domain"));
    }

    #[test]
    fn test_validate_birthday_predicate() {
        let clock = FixedClock::ymd(2024, 6, 1).unwrap();
        let today = clock.today();
        assert!(validate_birthday(today, &clock));
        assert!(validate_birthday(today.pred_opt().unwrap(), &clock));
        assert!(!validate_birthday(today.succ_opt().unwrap(), &clock));
    }

    #[test]
    fn test_validators_produce_values() {
        let clock = FixedClock::ymd(2024, 6, 1).unwrap();

        assert_eq!(NameValidator.validate("Ann").unwrap().as_str(), "Ann");
        assert_eq!(AddressValidator.validate("Main St").unwrap().as_str(), "Main St");
        assert_eq!(PhoneValidator.validate("0501234567").unwrap().as_str(), "0501234567");
        assert_eq!(EmailValidator.validate("a@b.co").unwrap().as_str(), "a@b.co");
        assert_eq!(
            BirthdayValidator::new(&clock)
                .validate("2000-05-01")
                .unwrap()
                .to_string(),
            "2000-05-01"
        );
    }

    #[test]
    fn test_validators_report_reason() {
        let clock = FixedClock::ymd(2024, 6, 1).unwrap();

        assert_eq!(NameValidator.validate(" "), Err(ValidationError::EmptyName));
        assert_eq!(
            PhoneValidator.validate("123"),
            Err(ValidationError::InvalidPhone("123".to_string()))
        );
        assert_eq!(
            EmailValidator.validate("nope"),
            Err(ValidationError::InvalidEmail("nope".to_string()))
        );
        assert!(matches!(
            BirthdayValidator::new(&clock).validate("2030-01-01"),
            Err(ValidationError::FutureBirthday(_))
        ));
    }
}
