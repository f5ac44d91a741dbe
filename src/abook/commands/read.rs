use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use std::path::Path;

/// Shows the rows of a contacts file. The stored book is not touched.
pub fn run(path: &Path) -> Result<CmdResult> {
    let rows = AddressBook::read_contacts_from_file(path)?;

    let mut result = CmdResult::default();
    if rows.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "{} has no contacts",
            path.display()
        )));
    }
    Ok(result.with_rows(rows))
}
