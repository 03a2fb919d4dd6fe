//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the fields of a contact
//! record: names, addresses, phone numbers, email addresses and birthdays.
//! These value objects provide validation at construction time and prevent
//! invalid data from being represented in the system.

pub mod birthday;
pub mod clock;
pub mod email;
pub mod errors;
pub mod name;
pub mod phone;
pub mod validators;

pub use birthday::{Birthday, BIRTHDAY_FORMAT};
pub use clock::{Clock, FixedClock, SystemClock};
pub use email::EmailAddress;
pub use errors::ValidationError;
pub use name::{Address, ContactName};
pub use phone::PhoneNumber;
pub use validators::{
    validate_birthday, validate_email, validate_phone, AddressValidator, BirthdayValidator,
    EmailValidator, FieldValidator, NameValidator, PhoneValidator,
};
