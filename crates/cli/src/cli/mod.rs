// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod args;

use crate::colors;
use crate::help;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use vw_core::PropertyType;

pub use args::{LimitArgs, ViewArgs};

/// Parse a property type name, reporting the valid names on failure.
fn property_type(s: &str) -> Result<PropertyType, String> {
    s.parse::<PropertyType>().map_err(|e| e.to_string())
}

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "vw")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(disable_version_flag = true)]
#[command(about = "Filter and sort page records by typed properties")]
#[command(
    long_about = "Filter and sort page records by typed properties.\n\n\
    Reads a JSON snapshot of a property schema and its records, applies filter rules \
    and sort keys, and prints the resulting view."
)]
#[command(help_template = help::template())]
#[command(before_help = help::commands())]
#[command(after_help = help::quickstart())]
#[command(styles = help::styles())]
// Allow the unit type field pattern which is required for clap's ArgAction::Version/Help
#[allow(clippy::manual_non_exhaustive)]
pub struct Cli {
    /// Print version
    #[arg(short = 'v', short_alias = 'V', long = "version", action = clap::ArgAction::Version)]
    version: (),

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    // ─────────────────────────────────────────────────────────────────────────
    // Views
    // ─────────────────────────────────────────────────────────────────────────
    /// Filter and sort the records of a snapshot
    ///
    /// Rules and sort keys from the snapshot's own view come first, then those
    /// from --view, then those given with -f/-s.
    #[command(after_help = colors::examples("\
Examples:
  vw list pages.json                             List every record
  vw list pages.json -f title:contains:plan      Titles containing \"plan\"
  vw list pages.json -f done:is_not_checked      Unchecked records only
  vw list pages.json -f due:date_within:this_week  Due this week
  vw list pages.json -s status -s due:desc       Sort by status, then due date
  vw list pages.json --view board.json -n 10     Apply a saved view, first 10
  vw list pages.json --now 2024-06-10T12:00      Resolve presets against a fixed time
  vw list pages.json -o json                     Output as JSON"))]
    List {
        /// Snapshot file ({"properties": [...], "records": [...], "view"?: {...}})
        snapshot: PathBuf,

        #[command(flatten)]
        view: ViewArgs,

        /// Reference time for relative dates (default: current time)
        #[arg(long, value_name = "TIMESTAMP")]
        now: Option<String>,

        #[command(flatten)]
        limits: LimitArgs,

        /// Output format (text, json; default from config, else text)
        #[arg(long = "output", short = 'o', value_enum)]
        output: Option<OutputFormat>,
    },

    /// Validate view rules against the schema and operator catalog
    #[command(after_help = colors::examples("\
Examples:
  vw check pages.json                        Check the snapshot's own view
  vw check pages.json --view board.json      Check a saved view too
  vw check pages.json -f points:contains:3   Check a single rule"))]
    Check {
        /// Snapshot file
        snapshot: PathBuf,

        #[command(flatten)]
        view: ViewArgs,
    },

    /// Show the filter operators available for a property type
    #[command(after_help = colors::examples("\
Examples:
  vw operators text        Operators for text properties
  vw operators date -o json  Catalog entries as JSON

Types: text, title, number, date, select, multi_select, checkbox, status, priority"))]
    Operators {
        /// Property type
        #[arg(value_parser = property_type)]
        property_type: PropertyType,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// List relative date presets for date_within
    #[command(after_help = colors::examples("\
Examples:
  vw presets                                    List every preset
  vw presets --date 2024-06-03 --now 2024-06-10  Presets containing a date"))]
    Presets {
        /// Only show presets containing this date
        #[arg(long, value_name = "DATE")]
        date: Option<String>,

        /// Reference time for --date (default: current time)
        #[arg(long, value_name = "TIMESTAMP", requires = "date")]
        now: Option<String>,
    },

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Output JSON Schema for input files and JSON output
    ///
    /// Use these schemas to validate snapshots and views or to generate type
    /// definitions.
    #[command(
        subcommand,
        after_help = colors::examples("\
Examples:
  vw schema snapshot    Schema of snapshot files
  vw schema view        Schema of --view files
  vw schema list        Schema of 'vw list -o json'

Available schemas: snapshot, view, list")
    )]
    Schema(SchemaCommand),
}

/// Schema output commands.
#[derive(Subcommand, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchemaCommand {
    /// Output JSON Schema for snapshot files
    Snapshot,
    /// Output JSON Schema for view files
    View,
    /// Output JSON Schema for 'vw list' JSON output
    List,
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;
