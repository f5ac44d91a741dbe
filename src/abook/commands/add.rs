use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Record;
use crate::store::DataStore;

/// Creates a contact and stores it, replacing any contact with the same name.
///
/// All fields are validated before the book is touched.
pub fn run<S: DataStore>(
    store: &mut S,
    name: &str,
    birthday: Option<&str>,
    phones: &[String],
) -> Result<CmdResult> {
    let mut record = match birthday {
        Some(date) => Record::with_birthday(name, date)?,
        None => Record::new(name)?,
    };
    for phone in phones {
        record.add_phone(phone)?;
    }

    let mut book = store.load()?;
    let replaced = book.add_record(record.clone());
    store.save(&book)?;
    tracing::debug!(contact = %record.name(), replaced = replaced.is_some(), "stored contact");

    let mut result = CmdResult::default();
    if replaced.is_some() {
        result.add_message(CmdMessage::warning(format!(
            "Contact replaced: {}",
            record.name()
        )));
    } else {
        result.add_message(CmdMessage::success(format!(
            "Contact added: {}",
            record.name()
        )));
    }
    Ok(result.with_affected_contacts(vec![record]))
}
