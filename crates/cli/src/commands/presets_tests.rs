// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::commands::testing::{render, NOW};
use yare::parameterized;

fn config() -> Config {
    Config {
        utc_offset: Some("+03:00".to_string()),
        ..Config::default()
    }
}

fn names(out: &str) -> Vec<String> {
    out.lines()
        .map(|line| line.split_whitespace().next().unwrap().to_string())
        .collect()
}

#[test]
fn test_presets_lists_all() {
    let (result, out) = render(|out| run_impl(&config(), None, None, out));
    result.unwrap();
    assert_eq!(
        names(&out),
        vec![
            "today",
            "yesterday",
            "tomorrow",
            "this_week",
            "last_week",
            "this_month",
            "last_month"
        ]
    );
    assert!(out.contains("Geçen ay"));
}

// 2024-06-10 is a Monday.
#[parameterized(
    same_day = { "2024-06-10", &["today", "this_week", "this_month"] },
    wall_clock = { "2024-06-10T23:30", &["today", "this_week", "this_month"] },
    sunday_before = { "2024-06-09", &["yesterday", "last_week", "this_month"] },
    next_day = { "2024-06-11", &["tomorrow", "this_week", "this_month"] },
    previous_month = { "2024-05-31", &["last_month"] },
    far_away = { "2023-01-01", &[] },
)]
fn test_presets_containing_date(date: &str, expected: &[&str]) {
    let (result, out) = render(|out| run_impl(&config(), Some(date), Some(NOW), out));
    result.unwrap();
    assert_eq!(names(&out), expected);
}

#[test]
fn test_presets_rfc3339_date_moves_into_offset() {
    // 22:30 UTC on the 9th is 01:30 on the 10th at +03:00.
    let (result, out) = render(|out| {
        run_impl(&config(), Some("2024-06-09T22:30:00Z"), Some(NOW), out)
    });
    result.unwrap();
    assert_eq!(names(&out), vec!["today", "this_week", "this_month"]);
}

#[test]
fn test_presets_invalid_date() {
    let (result, out) = render(|out| run_impl(&config(), Some("someday"), Some(NOW), out));
    assert!(matches!(result, Err(Error::InvalidTimestamp { .. })));
    assert!(out.is_empty());
}
