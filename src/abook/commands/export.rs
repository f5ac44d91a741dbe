use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;
use std::path::Path;

/// Writes the whole book as a contacts file at `path`, replacing it.
pub fn run<S: DataStore>(store: &S, path: &Path) -> Result<CmdResult> {
    let book = store.load()?;
    book.write_contacts_to_file(path)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Exported {} contact(s) to {}",
        book.len(),
        path.display()
    )));
    Ok(result.with_paths(vec![path.to_path_buf()]))
}
