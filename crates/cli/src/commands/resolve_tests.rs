// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::commands::testing::fixture;
use crate::error::Error;
use chrono::{TimeZone, Timelike};
use std::fs;
use vw_core::{FilterRule, SortKey};

fn args(filters: &[&str], sorts: &[&str]) -> ViewArgs {
    ViewArgs {
        filters: filters.iter().map(|s| s.to_string()).collect(),
        sorts: sorts.iter().map(|s| s.to_string()).collect(),
        view: None,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// resolve_view
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn resolve_view_empty() {
    let view = resolve_view(&fixture(), &ViewArgs::default()).unwrap();
    assert!(view.is_empty());
}

#[test]
fn resolve_view_parses_flags() {
    let view = resolve_view(&fixture(), &args(&["points:greater_than:2"], &["due:desc"])).unwrap();
    assert_eq!(
        view.filters,
        vec![FilterRule::new("points", "greater_than").with_value("2")]
    );
    assert_eq!(view.sorts, vec![SortKey::desc("due")]);
}

#[test]
fn resolve_view_merge_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("board.json");
    fs::write(
        &path,
        r#"{"filters": [{"property_id": "flag", "operator": "is_not_checked"}],
            "sorts": [{"property_id": "points"}]}"#,
    )
    .unwrap();

    let mut snapshot = fixture();
    snapshot.view = Some(View::new(
        vec![FilterRule::new("title", "is_not_empty")],
        vec![SortKey::asc("status")],
    ));
    let mut view_args = args(&["due:date_within:this_week"], &["title:desc"]);
    view_args.view = Some(path);

    let view = resolve_view(&snapshot, &view_args).unwrap();
    let filter_props: Vec<_> = view.filters.iter().map(|f| f.property_id.as_str()).collect();
    assert_eq!(filter_props, vec!["title", "flag", "due"]);
    assert_eq!(
        view.sorts,
        vec![SortKey::asc("status"), SortKey::asc("points"), SortKey::desc("title")]
    );
}

#[test]
fn resolve_view_missing_view_file() {
    let mut view_args = ViewArgs::default();
    view_args.view = Some("/nonexistent/board.json".into());
    assert!(matches!(
        resolve_view(&fixture(), &view_args),
        Err(Error::Read { .. })
    ));
}

#[test]
fn resolve_view_bad_rule() {
    assert!(matches!(
        resolve_view(&fixture(), &args(&[":is_empty"], &[])),
        Err(Error::InvalidRuleSyntax { .. })
    ));
    assert!(matches!(
        resolve_view(&fixture(), &args(&[], &["due:sideways"])),
        Err(Error::InvalidSortKey { .. })
    ));
}

// ─────────────────────────────────────────────────────────────────────────────
// resolve_now
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn resolve_now_uses_given_offset() {
    let offset = FixedOffset::east_opt(3 * 3600).unwrap();
    let now = resolve_now(Some("2024-06-10T09:30"), Some(offset)).unwrap();
    assert_eq!(now, offset.with_ymd_and_hms(2024, 6, 10, 9, 30, 0).unwrap());
}

#[test]
fn resolve_now_converts_into_offset() {
    let offset = FixedOffset::east_opt(3 * 3600).unwrap();
    let now = resolve_now(Some("2024-06-10T22:00:00Z"), Some(offset)).unwrap();
    assert_eq!(now.offset(), &offset);
    assert_eq!(now.hour(), 1);
}

#[test]
fn resolve_now_defaults_to_current_time() {
    let offset = FixedOffset::west_opt(5 * 3600).unwrap();
    let before = Utc::now();
    let now = resolve_now(None, Some(offset)).unwrap();
    assert_eq!(now.offset(), &offset);
    assert!(now.with_timezone(&Utc) >= before);
}

#[test]
fn resolve_now_invalid() {
    assert!(matches!(
        resolve_now(Some("next tuesday"), None),
        Err(Error::InvalidTimestamp { .. })
    ));
}
