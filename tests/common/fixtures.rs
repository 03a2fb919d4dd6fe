//! Test fixtures and sample records.

use super::test_clock;
use address_book::{Address, Birthday, ContactName, EmailAddress, Record};

/// Build a record from plain strings, panicking on invalid input.
pub fn sample_record(
    name: &str,
    address: &str,
    phones: &[&str],
    emails: &[&str],
    birthday: Option<&str>,
) -> Record {
    let clock = test_clock();
    Record::new(
        ContactName::new(name).unwrap(),
        Address::new(address).unwrap(),
        phones,
        emails.iter().map(|e| EmailAddress::new(*e).unwrap()).collect(),
        birthday.map(|b| Birthday::parse(b, clock.as_ref()).unwrap()),
    )
    .unwrap()
}

/// The "Ann" record used throughout the scenarios.
pub fn ann() -> Record {
    sample_record(
        "Ann",
        "Main St",
        &["380-1234567"],
        &["ann@x.com"],
        Some("2000-05-01"),
    )
}

/// A record with a name and one phone only.
#[allow(dead_code)]
pub fn minimal_record(name: &str, phone: &str) -> Record {
    sample_record(name, "", &[phone], &[], None)
}
