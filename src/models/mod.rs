//! Data models for the address book.
//!
//! A [`Record`] holds one contact's validated fields together with the
//! mutations the interactive menu performs on them.

pub mod record;

pub use record::Record;
