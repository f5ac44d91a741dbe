//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every abook operation, whatever UI drives it.
//!
//! It dispatches to `commands/*.rs` and returns `Result<CmdResult>`. It holds
//! no business logic and performs no terminal I/O.
//!
//! `AbookApi<S: DataStore>` is generic over the storage backend:
//! - Production: `AbookApi<FileStore>`
//! - Testing: `AbookApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::store::DataStore;
use std::num::NonZeroUsize;
use std::path::Path;

pub struct AbookApi<S: DataStore> {
    store: S,
    paths: commands::AbookPaths,
}

impl<S: DataStore> AbookApi<S> {
    pub fn new(store: S, paths: commands::AbookPaths) -> Self {
        Self { store, paths }
    }

    pub fn add_contact(
        &mut self,
        name: &str,
        birthday: Option<&str>,
        phones: &[String],
    ) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, name, birthday, phones)
    }

    pub fn show_contact(&self, name: &str) -> Result<commands::CmdResult> {
        commands::show::run(&self.store, name)
    }

    pub fn delete_contact(&mut self, name: &str) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, name)
    }

    pub fn add_phone(&mut self, name: &str, number: &str) -> Result<commands::CmdResult> {
        commands::phone::add(&mut self.store, name, number)
    }

    pub fn remove_phone(&mut self, name: &str, number: &str) -> Result<commands::CmdResult> {
        commands::phone::remove(&mut self.store, name, number)
    }

    pub fn edit_phone(&mut self, name: &str, old: &str, new: &str) -> Result<commands::CmdResult> {
        commands::phone::edit(&mut self.store, name, old, new)
    }

    pub fn find_phone(&self, name: &str, number: &str) -> Result<commands::CmdResult> {
        commands::phone::find(&self.store, name, number)
    }

    pub fn set_birthday(&mut self, name: &str, date: &str) -> Result<commands::CmdResult> {
        commands::birthday::set(&mut self.store, name, date)
    }

    pub fn days_to_birthday(&self, name: &str) -> Result<commands::CmdResult> {
        commands::birthday::days(&self.store, name)
    }

    pub fn list_contacts(&self, batch_size: NonZeroUsize) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, batch_size)
    }

    pub fn search_contacts(&self, term: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.store, term)
    }

    pub fn export_contacts(&self, path: &Path) -> Result<commands::CmdResult> {
        commands::export::run(&self.store, path)
    }

    pub fn read_contacts(&self, path: &Path) -> Result<commands::CmdResult> {
        commands::read::run(path)
    }

    pub fn contacts_path(&self) -> Result<commands::CmdResult> {
        commands::path::run(&self.store)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn paths(&self) -> &commands::AbookPaths {
        &self.paths
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{AbookPaths, CmdMessage, CmdResult, MessageLevel};
