use crate::error::{AbookError, Result};
use crate::model::Record;
use crate::store::DataStore;

/// Loads the book, applies `edit` to the contact called `name`, and saves.
///
/// Nothing is saved when the contact is missing or `edit` fails. Returns the
/// edit's output together with the updated contact.
pub fn update_contact<S, T, F>(store: &mut S, name: &str, edit: F) -> Result<(T, Record)>
where
    S: DataStore,
    F: FnOnce(&mut Record) -> Result<T>,
{
    let mut book = store.load()?;
    let record = book
        .find_mut(name)
        .ok_or_else(|| AbookError::ContactNotFound(name.to_string()))?;
    let output = edit(record)?;
    let updated = record.clone();
    store.save(&book)?;
    Ok((output, updated))
}

/// Clones the contact called `name` out of the store.
pub fn get_contact<S: DataStore>(store: &S, name: &str) -> Result<Record> {
    store
        .load()?
        .find(name)
        .cloned()
        .ok_or_else(|| AbookError::ContactNotFound(name.to_string()))
}
