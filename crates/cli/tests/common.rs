// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use std::path::PathBuf;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

pub const NOW: &str = "2024-06-10T12:00:00+03:00";

pub const SNAPSHOT: &str = r#"{
  "properties": [
    {"id": "title", "name": "Başlık", "type": "title"},
    {"id": "points", "name": "Puan", "type": "number"},
    {"id": "status", "name": "Durum", "type": "status", "config": {"options": [
      {"id": "todo", "name": "Yapılacak", "color": "gray", "group": "To-do"},
      {"id": "doing", "name": "Devam Ediyor", "color": "blue", "group": "In Progress"},
      {"id": "done", "name": "Bitti", "color": "green", "group": "Complete"}
    ]}},
    {"id": "priority", "name": "Öncelik", "type": "priority"},
    {"id": "due", "name": "Bitiş", "type": "date"},
    {"id": "tags", "name": "Etiketler", "type": "multi_select", "config": {"options": [
      {"id": "t1", "name": "Acil", "color": "red"},
      {"id": "t2", "name": "İş", "color": "blue"}
    ]}},
    {"id": "flag", "name": "İşaret", "type": "checkbox"}
  ],
  "records": [
    {"id": "r1", "values": {
      "title": {"text": "Bütçe"}, "points": {"number": 3},
      "status": {"option_id": "done"}, "due": {"date": "2024-06-03"},
      "priority": {"option_id": "p5"}, "flag": {"checked": true}
    }},
    {"id": "r2", "values": {
      "title": {"text": "Çalıştay"}, "points": {"number": "8"},
      "status": {"option_id": "todo"}, "due": {"date": "2024-06-10T09:00"},
      "tags": {"option_ids": ["t1", "t2"]}, "priority": {"option_id": "p1"}
    }},
    {"id": "r3", "values": {
      "title": {"text": "ajanda"}, "points": {"number": 3},
      "status": {"option_id": "doing"}, "due": {"date": "2024-06-12", "end_date": "2024-06-14"},
      "tags": {"option_ids": ["t2"]}, "flag": {"checked": false}
    }},
    {"id": "r4", "values": {
      "title": {"text": "Duyuru"}, "points": {"number": 1},
      "status": {"option_id": "archived"}, "priority": {"option_id": "p3"}
    }}
  ]
}"#;

/// A temp directory holding a snapshot, a config and optional view files.
pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    /// Workspace with the standard snapshot and a config pinning the offset.
    pub fn new() -> Self {
        Self::with_snapshot(SNAPSHOT)
    }

    pub fn with_snapshot(snapshot: &str) -> Self {
        let ws = Workspace {
            dir: TempDir::new().unwrap(),
        };
        ws.write("pages.json", snapshot);
        ws.write("config.toml", "utc_offset = \"+03:00\"\n");
        ws
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    /// `vw` running inside the workspace with its config and no color.
    pub fn vw(&self) -> Command {
        let mut cmd = vw();
        cmd.current_dir(self.dir.path())
            .env("VW_CONFIG", self.path("config.toml"))
            .env_remove("COLOR")
            .env_remove("VW_LOG")
            .env("NO_COLOR", "1");
        cmd
    }

    /// Runs `vw list pages.json --now NOW <args>` and returns the listed ids.
    pub fn list_ids(&self, args: &[&str]) -> Vec<String> {
        let output = self
            .vw()
            .args(["list", "pages.json", "--now", NOW])
            .args(args)
            .output()
            .unwrap();
        assert!(
            output.status.success(),
            "vw list failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout)
            .lines()
            .filter_map(|line| line.strip_prefix("- "))
            .filter_map(|line| line.split(':').next())
            .map(str::to_string)
            .collect()
    }
}

pub fn vw() -> Command {
    cargo_bin_cmd!("vw")
}
