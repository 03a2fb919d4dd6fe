//! Record model: one contact's data and the edits the menu can make to it.

use crate::domain::{
    Address, Birthday, Clock, ContactName, EmailAddress, PhoneNumber, ValidationError,
};
use std::fmt;

/// Width of the dashed line closing a rendered record.
const SEPARATOR_WIDTH: usize = 30;

/// A contact in the address book.
///
/// Fields are private so every change goes through a method. The name in
/// particular can only change via [`AddressBook::rename`](crate::AddressBook::rename),
/// which keeps the book's key in step with the record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: ContactName,
    address: Address,
    phones: Vec<PhoneNumber>,
    emails: Vec<EmailAddress>,
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record.
    ///
    /// Every phone entry may hold several numbers separated by commas or
    /// whitespace; the entries are flattened in order into individual numbers.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` for the first token that is not
    /// a valid phone number, or for an entry holding no number at all, and
    /// `ValidationError::NoPhones` when `phones` is empty. Nothing is
    /// constructed in either case.
    pub fn new<S: AsRef<str>>(
        name: ContactName,
        address: Address,
        phones: &[S],
        emails: Vec<EmailAddress>,
        birthday: Option<Birthday>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            name,
            address,
            phones: split_phones(phones)?,
            emails,
            birthday,
        })
    }

    /// Assemble a record from already validated parts.
    ///
    /// Used when reading the saved file, where each stored entry is a single
    /// number and an emptied phone list is legitimate.
    pub(crate) fn from_parts(
        name: ContactName,
        address: Address,
        phones: Vec<PhoneNumber>,
        emails: Vec<EmailAddress>,
        birthday: Option<Birthday>,
    ) -> Self {
        Self {
            name,
            address,
            phones,
            emails,
            birthday,
        }
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn emails(&self) -> &[EmailAddress] {
        &self.emails
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone number.
    ///
    /// Failure is reported in the returned message rather than as an error;
    /// the phone list is left untouched when the number is rejected.
    pub fn add_phone(&mut self, phone: &str) -> String {
        match PhoneNumber::new(phone) {
            Ok(number) => {
                self.phones.push(number);
                tracing::debug!(name = %self.name, phone = %phone, "Phone added");
                format!("Phone number {} added for {}", phone, self.name)
            }
            Err(e) => format!("Error: {}", e),
        }
    }

    /// Remove every stored number exactly equal to `phone`.
    ///
    /// Returns how many entries were removed; absent numbers are a no-op.
    pub fn delete_phone(&mut self, phone: &str) -> usize {
        let before = self.phones.len();
        self.phones.retain(|p| p.as_str() != phone);
        let removed = before - self.phones.len();
        tracing::debug!(name = %self.name, phone = %phone, removed, "Phone deleted");
        removed
    }

    /// Replace the first number equal to `old` with `new`.
    ///
    /// The replacement is validated first. Both the not-found and the invalid
    /// cases are reported in the returned message and leave the record as is.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> String {
        let Some(index) = self.phones.iter().position(|p| p.as_str() == old) else {
            return format!(
                "Error: Old phone number {} not found in {}'s record.",
                old, self.name
            );
        };

        match PhoneNumber::new(new) {
            Ok(number) => {
                self.phones[index] = number;
                tracing::debug!(name = %self.name, old = %old, new = %new, "Phone edited");
                format!(
                    "Phone number updated for {}\nOld phone number: {}\nNew phone number: {}",
                    self.name, old, new
                )
            }
            Err(e) => format!("Error: {}\nPlease enter a valid phone number.", e),
        }
    }

    pub fn set_address(&mut self, address: Address) {
        self.address = address;
    }

    /// Replace the first email, or add one when the record has none.
    pub fn set_primary_email(&mut self, email: EmailAddress) {
        match self.emails.first_mut() {
            Some(first) => *first = email,
            None => self.emails.push(email),
        }
    }

    pub fn set_birthday(&mut self, birthday: Option<Birthday>) {
        self.birthday = birthday;
    }

    pub(crate) fn set_name(&mut self, name: ContactName) {
        self.name = name;
    }

    /// Days until the next birthday, or `None` when no birthday is recorded.
    pub fn days_to_birthday(&self, clock: &dyn Clock) -> Option<u32> {
        self.birthday.map(|b| b.days_until(clock.today()))
    }

    /// Case-insensitive substring match against name, phones and emails.
    ///
    /// `needle` must already be lowercase.
    pub(crate) fn matches(&self, needle: &str) -> bool {
        self.name.as_str().to_lowercase().contains(needle)
            || self
                .phones
                .iter()
                .any(|p| p.as_str().to_lowercase().contains(needle))
            || self
                .emails
                .iter()
                .any(|e| e.as_str().to_lowercase().contains(needle))
    }

    /// Multi-line human-readable summary.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(PhoneNumber::as_str).collect();
        let emails: Vec<&str> = self.emails.iter().map(EmailAddress::as_str).collect();

        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Address: {}", self.address)?;
        writeln!(f, "Phones: {}", phones.join(", "))?;
        writeln!(f, "Emails: {}", emails.join(", "))?;
        if let Some(birthday) = &self.birthday {
            writeln!(f, "Birthday: {}", birthday)?;
        }
        write!(f, "{}", "-".repeat(SEPARATOR_WIDTH))
    }
}

/// Split raw phone entries on commas and whitespace and validate each token.
///
/// Separators at the edges of an entry are ignored, but every entry must
/// yield at least one number.
fn split_phones<S: AsRef<str>>(entries: &[S]) -> Result<Vec<PhoneNumber>, ValidationError> {
    if entries.is_empty() {
        return Err(ValidationError::NoPhones);
    }

    let mut phones = Vec::with_capacity(entries.len());
    for entry in entries {
        let entry = entry.as_ref();
        let before = phones.len();
        for token in entry
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
        {
            phones.push(PhoneNumber::new(token)?);
        }
        if phones.len() == before {
            return Err(ValidationError::InvalidPhone(entry.to_string()));
        }
    }
    Ok(phones)
}
