// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod common;
use common::*;

// ─────────────────────────────────────────────────────────────────────────────
// Presets
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn presets_lists_all() {
    let ws = Workspace::new();
    let output = ws.vw().arg("presets").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 7);
    assert!(stdout.starts_with("  today       Bugün\n"));
}

#[test]
fn presets_containing_date() {
    let ws = Workspace::new();
    ws.vw()
        .args(["presets", "--date", "2024-06-09", "--now", NOW])
        .assert()
        .success()
        .stdout("  yesterday   Dün\n  last_week   Geçen hafta\n  this_month  Bu ay\n");
}

#[test]
fn presets_now_requires_date() {
    vw().args(["presets", "--now", NOW]).assert().failure();
}

// ─────────────────────────────────────────────────────────────────────────────
// Schema and completion
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn schema_commands_output_json() {
    for name in ["snapshot", "view", "list"] {
        let output = vw().args(["schema", name]).output().unwrap();
        assert!(output.status.success(), "schema {name}");
        let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert!(json.get("$schema").is_some(), "schema {name}");
    }
}

#[test]
fn completion_bash() {
    vw().args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("_vw"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Help and version
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn version_flags() {
    for flag in ["-v", "-V", "--version"] {
        vw().arg(flag)
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}

#[test]
fn help_lists_commands() {
    vw().env("NO_COLOR", "1")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("operators"))
        .stdout(predicate::str::contains("presets"));
}

#[test]
fn no_command_fails() {
    vw().assert().failure();
}
