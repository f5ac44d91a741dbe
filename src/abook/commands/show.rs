use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

/// Exact-name lookup. A missing contact is reported, not an error.
pub fn run<S: DataStore>(store: &S, name: &str) -> Result<CmdResult> {
    let book = store.load()?;
    match book.find(name) {
        Some(record) => Ok(CmdResult::default().with_listed_contacts(vec![record.clone()])),
        None => {
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::info(format!("No contact named {}", name)));
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::Field;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn finds_by_exact_name() {
        let store = StoreFixture::new().with_demo_contacts().store;
        let result = run(&store, "Jane").unwrap();
        assert_eq!(result.listed_contacts.len(), 1);
        assert_eq!(result.listed_contacts[0].name().value(), "Jane");
    }

    #[test]
    fn missing_contact_is_reported() {
        let store = StoreFixture::new().with_demo_contacts().store;
        let result = run(&store, "jane").unwrap();
        assert!(result.listed_contacts.is_empty());
        assert_eq!(result.messages[0].content, "No contact named jane");
    }
}
