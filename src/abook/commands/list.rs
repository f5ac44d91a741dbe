use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;
use std::num::NonZeroUsize;

/// Lists every contact, split into pages of `batch_size`.
pub fn run<S: DataStore>(store: &S, batch_size: NonZeroUsize) -> Result<CmdResult> {
    let book = store.load()?;
    let pages: Vec<_> = book
        .iterator(batch_size)
        .map(|batch| batch.to_vec())
        .collect();

    let mut result = CmdResult::default();
    if pages.is_empty() {
        result.add_message(CmdMessage::info("No contacts yet."));
    }
    Ok(result.with_pages(pages))
}
