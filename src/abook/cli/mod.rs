//! # CLI Layer
//!
//! One possible UI client for abook. This is the only place that parses
//! arguments, reads stdin, prints to the terminal, and decides exit codes.
//!
//! - `setup`: clap definitions
//! - `commands`: `run()`, context setup and per-command handlers
//! - `print`: output formatting

mod commands;
mod print;
mod setup;

pub use commands::run;
