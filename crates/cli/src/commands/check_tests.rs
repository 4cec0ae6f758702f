// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::commands::testing::{fixture, render};
use vw_core::{FilterRule, SortKey};
use yare::parameterized;

fn args(filters: &[&str], sorts: &[&str]) -> ViewArgs {
    ViewArgs {
        filters: filters.iter().map(|s| s.to_string()).collect(),
        sorts: sorts.iter().map(|s| s.to_string()).collect(),
        view: None,
    }
}

#[test]
fn test_check_empty_view_is_ok() {
    let (result, out) = render(|out| run_impl(&fixture(), &ViewArgs::default(), out));
    result.unwrap();
    assert_eq!(out, "ok: 0 filter(s), 0 sort key(s)\n");
}

#[parameterized(
    text_contains = { "title:contains:plan" },
    number_compare = { "points:greater_than:3" },
    date_preset = { "due:date_within:this_week" },
    status_is = { "status:is:todo" },
    checkbox = { "flag:is_checked" },
    emptiness = { "due:is_empty" },
)]
fn test_check_valid_rule(rule: &str) {
    let (result, out) = render(|out| run_impl(&fixture(), &args(&[rule], &["due:desc"]), out));
    result.unwrap();
    assert_eq!(out, "ok: 1 filter(s), 1 sort key(s)\n");
}

#[test]
fn test_check_unsupported_operator() {
    let (result, out) = render(|out| run_impl(&fixture(), &args(&["points:contains:3"], &[]), out));
    assert!(matches!(result, Err(Error::CheckFailed { problems: 1 })));
    assert!(out.starts_with("filter points:contains: operator 'contains' is not supported for number properties"));
}

#[test]
fn test_check_missing_value() {
    let (result, out) = render(|out| run_impl(&fixture(), &args(&["title:is"], &[]), out));
    assert!(matches!(result, Err(Error::CheckFailed { problems: 1 })));
    assert_eq!(out, "filter title:is: operator 'is' requires a value\n");
}

#[test]
fn test_check_unknown_properties() {
    let (result, out) = render(|out| {
        run_impl(&fixture(), &args(&["owner:is:ayse"], &["created"]), out)
    });
    assert!(matches!(result, Err(Error::CheckFailed { problems: 2 })));
    assert!(out.contains("filter owner:is: unknown property 'owner'"));
    assert!(out.contains("sort created: unknown property 'created'"));
    assert!(out.contains("title, points, status, due, flag"));
}

#[test]
fn test_check_includes_snapshot_view() {
    let mut snapshot = fixture();
    snapshot.view = Some(View::new(
        vec![FilterRule::new("flag", "is_empty")],
        vec![SortKey::asc("title")],
    ));
    let problems = find_problems(&snapshot, snapshot.view.as_ref().unwrap());
    assert_eq!(problems.len(), 1);
    assert!(problems[0].starts_with("filter flag:is_empty: operator 'is_empty' is not supported for checkbox"));
}

#[test]
fn test_check_reports_every_problem() {
    let (result, out) = render(|out| {
        run_impl(
            &fixture(),
            &args(&["title:is", "points:date_is:2024-06-10", "title:contains:x"], &[]),
            out,
        )
    });
    assert!(matches!(result, Err(Error::CheckFailed { problems: 2 })));
    assert_eq!(out.lines().filter(|l| l.starts_with("filter ")).count(), 2);
}
