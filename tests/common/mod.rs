//! Shared helpers for integration tests.
//!
//! Every date-dependent test runs against a [`FixedClock`] so results do not
//! depend on the day the suite is executed.

pub mod fixtures;

use address_book::{AddressBook, Clock, FixedClock};
use std::sync::Arc;

/// The date all integration tests treat as "today": 2024-06-01.
pub fn test_clock() -> Arc<dyn Clock> {
    Arc::new(FixedClock::ymd(2024, 6, 1).expect("valid test date"))
}

/// An empty book driven by [`test_clock`].
pub fn empty_book() -> AddressBook {
    AddressBook::with_clock(test_clock())
}
