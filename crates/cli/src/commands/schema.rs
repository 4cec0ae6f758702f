// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema command implementation.
//!
//! Outputs JSON Schema specifications for input files and JSON output.

use crate::cli::SchemaCommand;
use crate::error::Result;
use crate::schema::list;
use crate::snapshot::Snapshot;
use schemars::schema_for;
use vw_core::View;

/// Run the schema command.
pub fn run(cmd: SchemaCommand) -> Result<()> {
    println!("{}", render(cmd)?);
    Ok(())
}

/// Pretty-printed JSON Schema for a schema command.
pub(crate) fn render(cmd: SchemaCommand) -> Result<String> {
    let schema = match cmd {
        SchemaCommand::Snapshot => schema_for!(Snapshot),
        SchemaCommand::View => schema_for!(View),
        SchemaCommand::List => schema_for!(list::ListOutputJson),
    };
    Ok(serde_json::to_string_pretty(&schema)?)
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
