//! # Address Book
//!
//! [`AddressBook`] owns every [`Record`] and keys them by name. Records keep
//! the order in which they were first added: that order drives listings,
//! batches and the contacts file. Re-adding a name replaces the record in
//! place.
//!
//! Lookups are linear scans. Address books are personal-sized, and a `Vec`
//! keeps insertion order without an extra index to maintain.

use crate::error::Result;
use crate::fields::Field;
use crate::model::Record;
use crate::rows::{read_rows, write_rows, ContactRow};
use std::num::NonZeroUsize;
use std::path::Path;
use std::slice::Chunks;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `record`, replacing any record with the same name. Returns the
    /// replaced record, if there was one.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        match self.position_of(record.name().value()) {
            Some(pos) => Some(std::mem::replace(&mut self.records[pos], record)),
            None => {
                self.records.push(record);
                None
            }
        }
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name().value() == name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| r.name().value() == name)
    }

    /// Removes the record called `name`. Absent names are a no-op.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        self.position_of(name).map(|pos| self.records.remove(pos))
    }

    /// Pages through the book `batch_size` records at a time, in insertion
    /// order. Every batch is full except possibly the last.
    pub fn iterator(&self, batch_size: NonZeroUsize) -> Batches<'_> {
        Batches {
            chunks: self.records.chunks(batch_size.get()),
        }
    }

    /// Records whose name, phone list or birthday contains `query`.
    /// Matching is a case-sensitive substring test.
    pub fn find_info(&self, query: &str) -> Vec<&Record> {
        self.records
            .iter()
            .filter(|r| {
                r.name().value().contains(query)
                    || r.phones_text().contains(query)
                    || r.birthday().is_some_and(|b| b.value().contains(query))
            })
            .collect()
    }

    /// Writes every record to a CSV file at `path`, replacing it.
    pub fn write_contacts_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        write_rows(path.as_ref(), self.records.iter().map(ContactRow::from))
    }

    /// Reads the rows of a contacts file as text, without touching any book.
    pub fn read_contacts_from_file(path: impl AsRef<Path>) -> Result<Vec<ContactRow>> {
        read_rows(path.as_ref())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.name().value())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn position_of(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name().value() == name)
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Batches of consecutive records, produced by [`AddressBook::iterator`].
#[derive(Debug, Clone)]
pub struct Batches<'a> {
    chunks: Chunks<'a, Record>,
}

impl<'a> Iterator for Batches<'a> {
    type Item = &'a [Record];

    fn next(&mut self) -> Option<Self::Item> {
        self.chunks.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl ExactSizeIterator for Batches<'_> {}

impl std::iter::FusedIterator for Batches<'_> {}
