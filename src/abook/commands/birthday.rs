use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

use super::helpers::{get_contact, update_contact};

pub fn set<S: DataStore>(store: &mut S, name: &str, date: &str) -> Result<CmdResult> {
    let ((), record) = update_contact(store, name, |record| record.set_birthday(date))?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Birthday of {} set to {}",
        name, date
    )));
    Ok(result.with_affected_contacts(vec![record]))
}

pub fn days<S: DataStore>(store: &S, name: &str) -> Result<CmdResult> {
    let record = get_contact(store, name)?;
    let days = record.days_to_birthday()?;

    let message = match days {
        0 => format!("{}'s birthday is today", name),
        1 => format!("1 day until {}'s birthday", name),
        n => format!("{} days until {}'s birthday", n, name),
    };
    let mut result = CmdResult::default().with_days_to_birthday(days);
    result.add_message(CmdMessage::info(message));
    Ok(result)
}
