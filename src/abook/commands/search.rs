use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

/// Case-sensitive substring search over names, phones and birthdays.
pub fn run<S: DataStore>(store: &S, term: &str) -> Result<CmdResult> {
    let book = store.load()?;
    let matches: Vec<_> = book.find_info(term).into_iter().cloned().collect();
    tracing::debug!(term, hits = matches.len(), "searched contacts");

    let mut result = CmdResult::default();
    if matches.is_empty() {
        result.add_message(CmdMessage::info(format!("No contacts match {:?}", term)));
    }
    Ok(result.with_listed_contacts(matches))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::Field;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn matches_phone_substring() {
        let store = StoreFixture::new().with_demo_contacts().store;
        let result = run(&store, "777").unwrap();
        assert_eq!(result.listed_contacts.len(), 1);
        assert_eq!(result.listed_contacts[0].name().value(), "Vicky");
    }

    #[test]
    fn no_match_reports_nothing() {
        let store = StoreFixture::new().with_demo_contacts().store;
        let result = run(&store, "zzz").unwrap();
        assert!(result.listed_contacts.is_empty());
        assert_eq!(result.messages.len(), 1);
    }

    #[test]
    fn matches_in_insertion_order() {
        let store = StoreFixture::new().with_demo_contacts().store;
        // "J" hits John and Jane by name only
        let result = run(&store, "J").unwrap();
        let names: Vec<_> = result
            .listed_contacts
            .iter()
            .map(|r| r.name().value())
            .collect();
        assert_eq!(names, ["John", "Jane"]);
    }
}
