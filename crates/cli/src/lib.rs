// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! vwrs - Command-line host for the vw-core view engine.
//!
//! This crate provides the functionality behind the `vw` CLI tool, which
//! reads a JSON snapshot of a property schema and its records, applies filter
//! rules and sort keys, and prints the resulting view.
//!
//! # Main Components
//!
//! - [`Snapshot`] - Schema, records and saved view loaded from JSON
//! - [`Config`] - User defaults (output format, limit, UTC offset, sort keys)
//! - [`rule`] - Parsers for `-f`/`-s` arguments and `--now`
//! - [`Error`] - Error types for all operations
//!
//! # Usage
//!
//! ```rust,ignore
//! use vwrs::{run, Command, LimitArgs, ViewArgs};
//!
//! run(Command::List {
//!     snapshot: "pages.json".into(),
//!     view: ViewArgs::default(),
//!     now: None,
//!     limits: LimitArgs::default(),
//!     output: None,
//! })?;
//! ```

mod cli;
pub mod colors;
mod commands;
mod display;
pub mod env;
pub mod help;
mod schema;

pub mod config;
pub mod error;
pub mod rule;
pub mod snapshot;

pub use cli::{Cli, Command, LimitArgs, OutputFormat, SchemaCommand, ViewArgs};
pub use config::Config;
pub use error::{Error, Result};
pub use snapshot::Snapshot;

use clap::CommandFactory;
use clap_complete::generate;

/// Execute a CLI command. This is the main entry point for library users
/// and provides a testable way to run commands without process execution.
pub fn run(command: Command) -> Result<()> {
    match command {
        Command::List {
            snapshot,
            view,
            now,
            limits,
            output,
        } => commands::list::run(&snapshot, view, now, limits, output),
        Command::Check { snapshot, view } => commands::check::run(&snapshot, view),
        Command::Operators {
            property_type,
            output,
        } => commands::operators::run(property_type, output),
        Command::Presets { date, now } => commands::presets::run(date, now),
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "vw", &mut std::io::stdout());
            Ok(())
        }
        Command::Schema(cmd) => commands::schema::run(cmd),
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
