//! # Contacts File Format
//!
//! The contacts file is plain CSV with a header row:
//!
//! ```text
//! Contact_name,phones,birthday
//! John,1234567890; 5555555555,
//! Vicky,7777777777,23.03.1996
//! ```
//!
//! The phones column holds the `"; "`-joined phone list and the birthday column
//! is either `DD.MM.YYYY` or empty. Quoting follows the usual CSV rules, which
//! the `csv` crate applies on write and undoes on read.

use crate::error::{Result, ValidationError};
use crate::fields::{Birthday, Field, Name, Phone};
use crate::model::Record;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One line of the contacts file, as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRow {
    #[serde(rename = "Contact_name")]
    pub name: String,
    pub phones: String,
    pub birthday: String,
}

impl From<&Record> for ContactRow {
    fn from(record: &Record) -> Self {
        Self {
            name: record.name().to_string(),
            phones: record.phones_text(),
            birthday: record.birthday().map(|b| b.to_string()).unwrap_or_default(),
        }
    }
}

impl ContactRow {
    /// Rebuilds a validated [`Record`] from the row's text.
    pub fn to_record(&self) -> std::result::Result<Record, ValidationError> {
        let name = Name::parse(&self.name)?;
        let phones = self
            .phones
            .split(';')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(Phone::parse)
            .collect::<std::result::Result<Vec<_>, _>>()?;
        let birthday = match self.birthday.trim() {
            "" => None,
            text => Some(Birthday::parse(text)?),
        };
        Ok(Record::from_parts(name, phones, birthday))
    }
}

/// Writes the header and `rows` to `path`, replacing any existing file.
pub fn write_rows<I>(path: &Path, rows: I) -> Result<()>
where
    I: IntoIterator<Item = ContactRow>,
{
    let mut writer = csv::Writer::from_path(path)?;
    let mut count = 0usize;
    for row in rows {
        writer.serialize(&row)?;
        count += 1;
    }
    if count == 0 {
        // serialize() emits the header lazily; an empty book still gets one.
        writer.write_record(["Contact_name", "phones", "birthday"])?;
    }
    writer.flush()?;
    tracing::debug!(path = %path.display(), rows = count, "wrote contacts file");
    Ok(())
}

/// Reads every data row of the file at `path`.
pub fn read_rows(path: &Path) -> Result<Vec<ContactRow>> {
    let mut reader = csv::Reader::from_path(path)?;
    let rows = reader
        .deserialize()
        .collect::<std::result::Result<Vec<ContactRow>, csv::Error>>()?;
    tracing::debug!(path = %path.display(), rows = rows.len(), "read contacts file");
    Ok(rows)
}
