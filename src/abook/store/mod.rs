//! # Storage Layer
//!
//! The [`DataStore`] trait is the seam between commands and persistence.
//! Commands load the whole [`AddressBook`], work on it in memory, and save it
//! back when they changed something.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage, a single CSV contacts file
//!   (see [`crate::rows`] for the format). Saving rewrites the whole file.
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Fast, isolated test execution

use crate::book::AddressBook;
use crate::error::Result;
use std::path::PathBuf;

pub mod fs;
pub mod memory;

/// Abstract interface for address book storage.
pub trait DataStore {
    /// Load the whole book. A store that holds nothing yet yields an empty book.
    fn load(&self) -> Result<AddressBook>;

    /// Replace the stored book with `book`.
    fn save(&mut self, book: &AddressBook) -> Result<()>;

    /// Where the book lives on disk, for file-based stores.
    fn location(&self) -> Option<PathBuf>;
}
