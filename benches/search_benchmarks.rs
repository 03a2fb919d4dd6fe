//! Performance benchmarks for address book queries.
//!
//! These benchmarks measure:
//! - Substring search over names, phones and emails
//! - The exact-day birthday query
//! - Different book sizes

use address_book::{
    Address, AddressBook, Birthday, Clock, ContactName, EmailAddress, FixedClock, Record,
};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use std::sync::Arc;

/// Build a synthetic book with `size` records.
fn create_test_book(size: usize) -> AddressBook {
    let clock: Arc<dyn Clock> = Arc::new(FixedClock::ymd(2024, 6, 1).unwrap());
    let mut book = AddressBook::with_clock(clock.clone());

    for i in 0..size {
        let phone = format!("050{:07}", i);
        let email = EmailAddress::new(format!("person{}@example.com", i)).unwrap();
        let birthday = format!("1990-{:02}-{:02}", i % 12 + 1, i % 28 + 1);
        let record = Record::new(
            ContactName::new(format!("Person {}", i)).unwrap(),
            Address::new(format!("{} Main St", i)).unwrap(),
            &[phone],
            vec![email],
            Some(Birthday::parse(&birthday, clock.as_ref()).unwrap()),
        )
        .unwrap();
        book.add_record(record);
    }

    book
}

/// Benchmark search across book sizes for a query that hits few records.
fn bench_search_by_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_by_size");

    for size in [100, 1_000, 10_000] {
        let book = create_test_book(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &book, |b, book| {
            b.iter(|| black_box(book.search_records(black_box("person 42"))));
        });
    }

    group.finish();
}

/// Benchmark a phone-fragment query that has to scan every phone list.
fn bench_search_phone_fragment(c: &mut Criterion) {
    let book = create_test_book(1_000);

    c.bench_function("search_phone_fragment", |b| {
        b.iter(|| black_box(book.search_records(black_box("0000999"))));
    });
}

/// Benchmark the birthday query.
fn bench_upcoming_birthdays(c: &mut Criterion) {
    let book = create_test_book(1_000);

    c.bench_function("upcoming_birthdays", |b| {
        b.iter(|| black_box(book.get_upcoming_birthday_contacts(black_box(7))));
    });
}

criterion_group!(
    benches,
    bench_search_by_size,
    bench_search_phone_fragment,
    bench_upcoming_birthdays
);
criterion_main!(benches);
