//! Phone operations on a single named contact.
//!
//! A missing contact is always an error here. A missing phone is a no-op for
//! `remove`, a reported absence for `find`, and an error for `edit`.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

use super::helpers::{get_contact, update_contact};

pub fn add<S: DataStore>(store: &mut S, name: &str, number: &str) -> Result<CmdResult> {
    let ((), record) = update_contact(store, name, |record| record.add_phone(number))?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Phone {} added to {}",
        number, name
    )));
    Ok(result.with_affected_contacts(vec![record]))
}

pub fn remove<S: DataStore>(store: &mut S, name: &str, number: &str) -> Result<CmdResult> {
    let (removed, record) = update_contact(store, name, |record| Ok(record.remove_phone(number)))?;

    let mut result = CmdResult::default();
    if removed {
        result.add_message(CmdMessage::success(format!(
            "Phone {} removed from {}",
            number, name
        )));
    } else {
        result.add_message(CmdMessage::info(format!(
            "{} has no phone {}",
            name, number
        )));
    }
    Ok(result.with_affected_contacts(vec![record]))
}

pub fn edit<S: DataStore>(store: &mut S, name: &str, old: &str, new: &str) -> Result<CmdResult> {
    let ((), record) = update_contact(store, name, |record| record.edit_phone(old, new))?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Phone {} changed to {} for {}",
        old, new, name
    )));
    Ok(result.with_affected_contacts(vec![record]))
}

pub fn find<S: DataStore>(store: &S, name: &str, number: &str) -> Result<CmdResult> {
    let record = get_contact(store, name)?;

    let mut result = CmdResult::default();
    match record.find_phone(number) {
        Some(phone) => result.add_message(CmdMessage::success(format!("{}: {}", name, phone))),
        None => result.add_message(CmdMessage::info(format!(
            "{} has no phone {}",
            name, number
        ))),
    }
    Ok(result.with_listed_contacts(vec![record]))
}
