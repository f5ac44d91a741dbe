use super::DataStore;
use crate::book::AddressBook;
use crate::error::Result;
use std::path::PathBuf;

#[derive(Debug, Default)]
pub struct InMemoryStore {
    book: AddressBook,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<AddressBook> {
        Ok(self.book.clone())
    }

    fn save(&mut self, book: &AddressBook) -> Result<()> {
        self.book = book.clone();
        Ok(())
    }

    fn location(&self) -> Option<PathBuf> {
        None
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Record;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_contact(mut self, name: &str, phones: &[&str]) -> Self {
            let mut record = Record::new(name).unwrap();
            for phone in phones {
                record.add_phone(phone).unwrap();
            }
            self.push(record);
            self
        }

        pub fn with_birthday_contact(
            mut self,
            name: &str,
            birthday: &str,
            phones: &[&str],
        ) -> Self {
            let mut record = Record::with_birthday(name, birthday).unwrap();
            for phone in phones {
                record.add_phone(phone).unwrap();
            }
            self.push(record);
            self
        }

        /// John and Jane without birthdays, then Vicky with one.
        pub fn with_demo_contacts(self) -> Self {
            self.with_contact("John", &["1234567890", "5555555555"])
                .with_contact("Jane", &["9876543210"])
                .with_birthday_contact("Vicky", "23.03.1996", &["7777777777"])
        }

        fn push(&mut self, record: Record) {
            let mut book = self.store.load().unwrap();
            book.add_record(record);
            self.store.save(&book).unwrap();
        }
    }
}
