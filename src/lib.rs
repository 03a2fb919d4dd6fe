//! Address Book - a personal contact manager.
//!
//! This library stores contact records (name, address, phone numbers, emails,
//! birthday), persists them to a JSON file, and answers search and
//! "upcoming birthday" queries. An interactive text menu drives it from the
//! `address-book` binary.
//!
//! # Architecture
//!
//! - **domain**: Validated field value objects, validators and the clock
//! - **models**: The `Record` entity and its mutations
//! - **book**: The `AddressBook` store and its file format
//! - **cli**: The interactive menu session
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod book;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;

pub use book::AddressBook;
pub use cli::Session;
pub use config::Config;
pub use domain::{
    Address, Birthday, Clock, ContactName, EmailAddress, FixedClock, PhoneNumber, SystemClock,
    ValidationError,
};
pub use error::{BookError, BookResult, ConfigError};
pub use models::Record;
