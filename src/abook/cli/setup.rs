use clap::{ArgAction, Parser, Subcommand};
use std::num::NonZeroUsize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "abook", bin_name = "abook", version)]
#[command(about = "A small, file-backed address book", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data directory (defaults to $ABOOK_HOME, then the platform data dir)
    #[arg(short, long, global = true, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Verbose output (-vv for trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a contact (replaces an existing contact with the same name)
    #[command(alias = "n")]
    Add {
        /// Contact name
        name: String,

        /// Birthday as DD.MM.YYYY
        #[arg(short, long)]
        birthday: Option<String>,

        /// Phone number, 10 digits (repeatable)
        #[arg(short, long = "phone", value_name = "NUMBER")]
        phones: Vec<String>,
    },

    /// Show one contact by exact name
    #[command(alias = "find")]
    Show { name: String },

    /// Delete a contact
    #[command(alias = "rm")]
    Delete { name: String },

    /// Manage a contact's phones
    Phone {
        #[command(subcommand)]
        action: PhoneCommands,
    },

    /// Manage a contact's birthday
    Birthday {
        #[command(subcommand)]
        action: BirthdayCommands,
    },

    /// List contacts in batches
    #[command(alias = "ls")]
    List {
        /// Contacts per batch (defaults to the page-size setting)
        #[arg(short, long)]
        batch_size: Option<NonZeroUsize>,
    },

    /// Search names, phones and birthdays (reads the term from stdin if omitted)
    Search { term: Option<String> },

    /// Write all contacts to a CSV file
    Export { path: PathBuf },

    /// Print the rows of a CSV contacts file
    Read { path: PathBuf },

    /// Print the path of the contacts file
    Path,

    /// Get or set configuration
    Config {
        /// Configuration key (contacts-file, page-size)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum PhoneCommands {
    /// Add a phone to a contact
    Add { name: String, number: String },

    /// Remove a phone from a contact
    #[command(alias = "rm")]
    Remove { name: String, number: String },

    /// Replace one of a contact's phones
    Edit {
        name: String,
        old: String,
        new: String,
    },

    /// Check whether a contact has a phone
    Find { name: String, number: String },
}

#[derive(Subcommand, Debug)]
pub enum BirthdayCommands {
    /// Set a contact's birthday (DD.MM.YYYY)
    Set { name: String, date: String },

    /// Days until a contact's next birthday
    Days { name: String },
}
