//! # Abook Architecture
//!
//! Abook is a small address-book library with a CLI client on top. Contacts
//! have a name, any number of phones and an optional birthday; the book is
//! stored as a flat CSV file.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Load the book, apply one operation, save if changed      │
//! │  - Return a structured CmdResult                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Domain (fields.rs, model.rs, book.rs, rows.rs)             │
//! │  Storage (store/): DataStore, FileStore, InMemoryStore      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `api.rs` inward, code never writes to stdout/stderr (diagnostics go
//! through `tracing`) and never exits the process.
//!
//! ## Module Overview
//!
//! - [`fields`]: validated `Name`, `Phone`, `Birthday`
//! - [`model`]: `Record`, one contact
//! - [`book`]: `AddressBook`, batches, search, CSV export/read
//! - [`rows`]: contacts file format
//! - [`store`]: storage abstraction and implementations
//! - [`commands`]: business logic for each command
//! - [`api`]: the API facade
//! - [`config`]: configuration management
//! - [`logging`]: tracing subscriber setup
//! - [`error`]: error types

pub mod api;
pub mod book;
pub mod commands;
pub mod config;
pub mod error;
pub mod fields;
pub mod logging;
pub mod model;
pub mod rows;
pub mod store;
