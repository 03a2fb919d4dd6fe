//! The keyed record store.

use super::codec::{BookDocument, RecordDocument};
use crate::domain::{Clock, ContactName, SystemClock};
use crate::error::{BookError, BookResult};
use crate::models::Record;
use serde::Serialize;
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::sync::Arc;

/// A collection of [`Record`]s keyed by contact name.
///
/// Records keep insertion order. Adding a record whose name is already taken
/// replaces the old one in its original position. The store is meant for a
/// single interactive session; it does no locking of its own.
#[derive(Clone)]
pub struct AddressBook {
    records: Vec<Record>,
    clock: Arc<dyn Clock>,
}

impl AddressBook {
    /// Create an empty book that reads "today" from the system clock.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Create an empty book with an injected clock.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            records: Vec::new(),
            clock,
        }
    }

    /// The clock used for birthday queries and for validating loaded birthdays.
    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    /// Shared handle to the clock, for building values outside the book.
    pub fn clock_handle(&self) -> Arc<dyn Clock> {
        Arc::clone(&self.clock)
    }

    /// Insert a record, overwriting any record with the same name.
    pub fn add_record(&mut self, record: Record) {
        match self.position(record.name().as_str()) {
            Some(index) => {
                tracing::debug!(name = %record.name(), "Replacing existing record");
                self.records[index] = record;
            }
            None => {
                tracing::debug!(name = %record.name(), "Adding record");
                self.records.push(record);
            }
        }
    }

    /// All records in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn get(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name().as_str() == name)
    }

    /// Mutable access to a record. Renaming is only possible via [`AddressBook::rename`].
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| r.name().as_str() == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Remove and return the record filed under `name`.
    pub fn remove(&mut self, name: &str) -> Option<Record> {
        let index = self.position(name)?;
        tracing::debug!(name = %name, "Removing record");
        Some(self.records.remove(index))
    }

    /// Change a record's name and its key together.
    ///
    /// # Errors
    ///
    /// - `BookError::NotFound` if no record is filed under `old`
    /// - `BookError::NameTaken` if a different record already uses `new`
    pub fn rename(&mut self, old: &str, new: ContactName) -> BookResult<()> {
        let index = self
            .position(old)
            .ok_or_else(|| BookError::NotFound(old.to_string()))?;

        if new.as_str() != old && self.contains(new.as_str()) {
            return Err(BookError::NameTaken(new.into_inner()));
        }

        tracing::debug!(old = %old, new = %new, "Renaming record");
        self.records[index].set_name(new);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Case-insensitive substring search over names, phones and emails.
    ///
    /// Each record is returned at most once no matter how many of its fields
    /// match, in store order. An empty query matches every record.
    pub fn search_records(&self, query: &str) -> Vec<&Record> {
        let needle = query.to_lowercase();
        let found: Vec<&Record> = self.records.iter().filter(|r| r.matches(&needle)).collect();
        tracing::debug!(query = %query, result_count = found.len(), "Search completed");
        found
    }

    /// Records whose next birthday is exactly `days` days away.
    pub fn get_upcoming_birthday_contacts(&self, days: u32) -> Vec<&Record> {
        self.records
            .iter()
            .filter(|r| r.days_to_birthday(self.clock.as_ref()) == Some(days))
            .collect()
    }

    /// Write every record to `path` as a pretty-printed JSON document.
    ///
    /// The file is truncated and rewritten in place; an interrupted save can
    /// leave it partial.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> BookResult<()> {
        let path = path.as_ref();
        let document = BookDocument {
            records: self.records.iter().map(RecordDocument::from).collect(),
        };

        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        document.serialize(&mut serializer)?;

        fs::write(path, buf).map_err(|source| BookError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::info!(path = %path.display(), records = self.len(), "Address book saved");
        Ok(())
    }

    /// Load a book from `path`, validating birthdays against the system clock.
    ///
    /// A missing file yields an empty book.
    pub fn load_from_file(path: impl AsRef<Path>) -> BookResult<Self> {
        Self::load_from_file_with_clock(path, Arc::new(SystemClock))
    }

    /// Load a book from `path` with an injected clock.
    ///
    /// # Errors
    ///
    /// - `BookError::Io` if the file exists but cannot be read
    /// - `BookError::Json` if it is not a valid document
    /// - `BookError::Validation` if any field fails validation; no partial
    ///   book is returned
    pub fn load_from_file_with_clock(
        path: impl AsRef<Path>,
        clock: Arc<dyn Clock>,
    ) -> BookResult<Self> {
        let path = path.as_ref();
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!(path = %path.display(), "No address book file, starting empty");
                return Ok(Self::with_clock(clock));
            }
            Err(source) => {
                return Err(BookError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let document: BookDocument = serde_json::from_str(&text)?;
        let mut book = Self::with_clock(clock);
        for entry in document.records {
            let name = entry.name.clone();
            let record = entry.into_record(book.clock()).map_err(|e| {
                tracing::warn!(path = %path.display(), name = %name, error = %e, "Rejected record");
                e
            })?;
            book.add_record(record);
        }

        tracing::info!(path = %path.display(), records = book.len(), "Address book loaded");
        Ok(book)
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name().as_str() == name)
    }
}

impl Default for AddressBook {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AddressBook")
            .field("records", &self.records)
            .field("today", &self.clock.today())
            .finish()
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
