//! Address book store and its file format.

mod address_book;
pub mod codec;

pub use address_book::AddressBook;
pub use codec::{BookDocument, RecordDocument};
