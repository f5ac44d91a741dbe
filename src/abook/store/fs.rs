use super::DataStore;
use crate::book::AddressBook;
use crate::error::{AbookError, Result};
use crate::rows::ContactRow;
use std::fs;
use std::path::{Path, PathBuf};

/// Header line plus one-based numbering.
const FIRST_DATA_LINE: u64 = 2;

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(AbookError::Io)?;
            }
        }
        Ok(())
    }
}

/// Rehydrates rows into a book. The first invalid row aborts the load.
fn rows_to_book(rows: Vec<ContactRow>) -> Result<AddressBook> {
    let mut book = AddressBook::new();
    for (line, row) in (FIRST_DATA_LINE..).zip(rows) {
        let record = row
            .to_record()
            .map_err(|source| AbookError::Row { line, source })?;
        book.add_record(record);
    }
    Ok(book)
}

impl DataStore for FileStore {
    fn load(&self) -> Result<AddressBook> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no contacts file yet");
            return Ok(AddressBook::new());
        }
        let rows = AddressBook::read_contacts_from_file(&self.path)?;
        let book = rows_to_book(rows)?;
        tracing::debug!(path = %self.path.display(), contacts = book.len(), "loaded address book");
        Ok(book)
    }

    fn save(&mut self, book: &AddressBook) -> Result<()> {
        self.ensure_parent()?;
        book.write_contacts_to_file(&self.path)?;
        tracing::info!(path = %self.path.display(), contacts = book.len(), "saved address book");
        Ok(())
    }

    fn location(&self) -> Option<PathBuf> {
        Some(self.path.clone())
    }
}
