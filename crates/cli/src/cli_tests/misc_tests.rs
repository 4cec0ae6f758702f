// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
    Cli::try_parse_from(args)
}

// ─────────────────────────────────────────────────────────────────────────────
// operators
// ─────────────────────────────────────────────────────────────────────────────

#[parameterized(
    text = { "text", PropertyType::Text },
    title = { "title", PropertyType::Title },
    multi_select = { "multi_select", PropertyType::MultiSelect },
    multi_select_dash = { "multi-select", PropertyType::MultiSelect },
    priority = { "priority", PropertyType::Priority },
)]
fn test_operators_type(arg: &str, expected: PropertyType) {
    let cli = parse(&["vw", "operators", arg]).unwrap();
    match cli.command {
        Command::Operators {
            property_type,
            output,
        } => {
            assert_eq!(property_type, expected);
            assert_eq!(output, OutputFormat::Text);
        }
        _ => panic!("Expected Operators command"),
    }
}

#[test]
fn test_operators_unknown_type() {
    let err = parse(&["vw", "operators", "rollup"]).err().unwrap();
    assert!(err.to_string().contains("invalid property type: 'rollup'"));
}

// ─────────────────────────────────────────────────────────────────────────────
// check / presets / schema / completion
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_check_with_rules() {
    let cli = parse(&["vw", "check", "pages.json", "-f", "points:contains:3"]).unwrap();
    match cli.command {
        Command::Check { snapshot, view } => {
            assert_eq!(snapshot, PathBuf::from("pages.json"));
            assert_eq!(view.filters, vec!["points:contains:3"]);
        }
        _ => panic!("Expected Check command"),
    }
}

#[test]
fn test_presets_default() {
    let cli = parse(&["vw", "presets"]).unwrap();
    assert!(matches!(
        cli.command,
        Command::Presets {
            date: None,
            now: None
        }
    ));
}

#[test]
fn test_presets_now_requires_date() {
    assert!(parse(&["vw", "presets", "--now", "2024-06-10"]).is_err());
}

#[parameterized(
    snapshot = { "snapshot", SchemaCommand::Snapshot },
    view = { "view", SchemaCommand::View },
    list = { "list", SchemaCommand::List },
)]
fn test_schema_subcommands(arg: &str, expected: SchemaCommand) {
    let cli = parse(&["vw", "schema", arg]).unwrap();
    match cli.command {
        Command::Schema(cmd) => assert_eq!(cmd, expected),
        _ => panic!("Expected Schema command"),
    }
}

#[test]
fn test_completion_shell() {
    let cli = parse(&["vw", "completion", "bash"]).unwrap();
    assert!(matches!(
        cli.command,
        Command::Completion { shell: Shell::Bash }
    ));
}
