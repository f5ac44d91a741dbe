use abook::api::{CmdMessage, MessageLevel};
use abook::commands::config::{value_of, KEYS};
use abook::config::AbookConfig;
use abook::fields::Field;
use abook::model::Record;
use abook::rows::ContactRow;
use colored::Colorize;
use unicode_width::UnicodeWidthStr;

const NO_BIRTHDAY: &str = "-";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

pub(super) fn print_contacts(records: &[Record]) {
    let name_width = records
        .iter()
        .map(|r| r.name().value().width())
        .max()
        .unwrap_or(0);

    for record in records {
        println!("{}", contact_line(record, name_width));
    }
}

pub(super) fn print_pages(pages: &[Vec<Record>]) {
    let name_width = pages
        .iter()
        .flatten()
        .map(|r| r.name().value().width())
        .max()
        .unwrap_or(0);

    for (i, page) in pages.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}", format!("-- page {} --", i + 1).dimmed());
        for record in page {
            println!("{}", contact_line(record, name_width));
        }
    }
}

pub(super) fn print_rows(rows: &[ContactRow]) {
    for row in rows {
        println!("{} {} {}", row.name, row.phones, row.birthday);
    }
}

pub(super) fn print_config(config: &AbookConfig) {
    for key in KEYS {
        println!("{} = {}", key, value_of(config, key));
    }
}

fn contact_line(record: &Record, name_width: usize) -> String {
    let name = record.name().value();
    let padding = " ".repeat(name_width.saturating_sub(name.width()));
    let phones = record.phones_text();
    let birthday = record.birthday().map(|b| b.value()).unwrap_or(NO_BIRTHDAY);

    format!(
        "{}{}  {}  {}",
        name.bold(),
        padding,
        if phones.is_empty() {
            "no phones".dimmed()
        } else {
            phones.normal()
        },
        birthday.yellow()
    )
}
