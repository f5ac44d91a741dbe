use crate::commands::CmdResult;
use crate::error::{AbookError, Result};
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    let path = store
        .location()
        .ok_or_else(|| AbookError::Store("This store has no file location".to_string()))?;
    Ok(CmdResult::default().with_paths(vec![path]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fs::FileStore;
    use crate::store::memory::InMemoryStore;
    use std::path::PathBuf;

    #[test]
    fn reports_file_location() {
        let store = FileStore::new("/tmp/abook/address_book.csv");
        let result = run(&store).unwrap();
        assert_eq!(result.paths, [PathBuf::from("/tmp/abook/address_book.csv")]);
    }

    #[test]
    fn memory_store_has_none() {
        assert!(run(&InMemoryStore::new()).is_err());
    }
}
