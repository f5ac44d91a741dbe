use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

/// Removes a contact. Deleting an unknown name changes nothing.
pub fn run<S: DataStore>(store: &mut S, name: &str) -> Result<CmdResult> {
    let mut book = store.load()?;
    let mut result = CmdResult::default();

    match book.delete(name) {
        Some(record) => {
            store.save(&book)?;
            tracing::debug!(contact = name, "deleted contact");
            result.add_message(CmdMessage::success(format!("Contact deleted: {}", name)));
            result.affected_contacts.push(record);
        }
        None => {
            result.add_message(CmdMessage::info(format!("No contact named {}", name)));
        }
    }

    Ok(result)
}
