//! On-disk document format.
//!
//! ```json
//! {
//!     "records": [
//!         {
//!             "name": "Ann",
//!             "address": "Main St",
//!             "phones": ["380-1234567"],
//!             "emails": ["ann@x.com"],
//!             "birthday": "2000-05-01"
//!         }
//!     ]
//! }
//! ```
//!
//! Decoding goes back through the validating constructors, so a hand-edited
//! file with a bad phone, email or birthday is rejected as a whole. Each
//! stored phone entry must be exactly one number. Only `emails` and
//! `birthday` may be left out of a record.

use crate::domain::{
    Address, Birthday, Clock, ContactName, EmailAddress, PhoneNumber, ValidationError,
};
use crate::models::Record;
use serde::{Deserialize, Serialize};

/// Top-level document.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BookDocument {
    pub records: Vec<RecordDocument>,
}

/// One record as stored in the file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecordDocument {
    pub name: String,

    pub address: String,

    pub phones: Vec<String>,

    #[serde(default)]
    pub emails: Vec<String>,

    /// `YYYY-MM-DD` or null
    #[serde(default)]
    pub birthday: Option<String>,
}

impl From<&Record> for RecordDocument {
    fn from(record: &Record) -> Self {
        Self {
            name: record.name().to_string(),
            address: record.address().to_string(),
            phones: record.phones().iter().map(ToString::to_string).collect(),
            emails: record.emails().iter().map(ToString::to_string).collect(),
            birthday: record.birthday().map(ToString::to_string),
        }
    }
}

impl RecordDocument {
    /// Rebuild a [`Record`], validating every field.
    pub fn into_record(self, clock: &dyn Clock) -> Result<Record, ValidationError> {
        let name = ContactName::new(self.name)?;
        let address = Address::new(self.address)?;
        let phones = self
            .phones
            .into_iter()
            .map(PhoneNumber::new)
            .collect::<Result<Vec<_>, _>>()?;
        let emails = self
            .emails
            .into_iter()
            .map(EmailAddress::new)
            .collect::<Result<Vec<_>, _>>()?;
        let birthday = self
            .birthday
            .as_deref()
            .map(|raw| Birthday::parse(raw, clock))
            .transpose()?;

        Ok(Record::from_parts(name, address, phones, emails, birthday))
    }
}
