// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

fn istanbul() -> FixedOffset {
    FixedOffset::east_opt(3 * 3600).unwrap()
}

/// Monday 2024-06-10, 12:00 in UTC+3.
fn monday_noon() -> DateTime<FixedOffset> {
    istanbul().with_ymd_and_hms(2024, 6, 10, 12, 0, 0).unwrap()
}

fn at(raw: &str) -> DateTime<FixedOffset> {
    parse_instant(raw, &istanbul()).unwrap()
}

// ─────────────────────────────────────────────────────────────────────────────
// Presets against Monday 2024-06-10
// ─────────────────────────────────────────────────────────────────────────────

#[parameterized(
    today_morning = { "2024-06-10T09:00", "today", true },
    today_late = { "2024-06-10T23:59:59", "today", true },
    today_other_day = { "2024-06-11", "today", false },
    yesterday = { "2024-06-09", "yesterday", true },
    yesterday_not_today = { "2024-06-10", "yesterday", false },
    tomorrow = { "2024-06-11", "tomorrow", true },
    this_week_monday = { "2024-06-10", "this_week", true },
    this_week_sunday = { "2024-06-16", "this_week", true },
    this_week_previous_sunday = { "2024-06-09", "this_week", false },
    this_week_last_monday = { "2024-06-03", "this_week", false },
    last_week_monday = { "2024-06-03", "last_week", true },
    last_week_sunday = { "2024-06-09", "last_week", true },
    last_week_too_old = { "2024-06-02", "last_week", false },
    this_month_first = { "2024-06-01", "this_month", true },
    this_month_last = { "2024-06-30", "this_month", true },
    this_month_next = { "2024-07-01", "this_month", false },
    last_month = { "2024-05-15", "last_month", true },
    last_month_not_this = { "2024-06-01", "last_month", false },
)]
fn preset_on_monday(value: &str, preset: &str, expected: bool) {
    assert_eq!(matches_preset(&at(value), preset, &monday_noon()), expected);
}

#[test]
fn unknown_preset_never_matches() {
    let now = monday_noon();
    assert!(!matches_preset(&now, "next_year", &now));
    assert!(!matches_preset(&now, "", &now));
    assert!(!matches_preset(&now, "Today", &now));
}

#[test]
fn last_month_uses_month_arithmetic_across_years() {
    let now = istanbul().with_ymd_and_hms(2024, 1, 31, 8, 0, 0).unwrap();
    assert!(matches_preset(&at("2023-12-01"), "last_month", &now));
    assert!(!matches_preset(&at("2023-11-30"), "last_month", &now));
}

#[test]
fn last_month_from_month_end_lands_in_previous_month() {
    // March 31 minus one month clamps to February 29.
    let now = istanbul().with_ymd_and_hms(2024, 3, 31, 8, 0, 0).unwrap();
    assert!(matches_preset(&at("2024-02-01"), "last_month", &now));
    assert!(!matches_preset(&at("2024-03-01"), "last_month", &now));
}

#[test]
fn calendar_day_is_taken_in_reference_offset() {
    // 22:30 UTC on the 9th is 01:30 on the 10th in UTC+3.
    let instant = DateTime::parse_from_rfc3339("2024-06-09T22:30:00Z").unwrap();
    assert!(matches_preset(&instant, "today", &monday_noon()));
}

#[test]
fn presets_are_pure() {
    let instant = at("2024-06-05");
    let now = monday_noon();
    let first: Vec<bool> = DatePreset::ALL
        .iter()
        .map(|p| matches_preset(&instant, p.as_str(), &now))
        .collect();
    let second: Vec<bool> = DatePreset::ALL
        .iter()
        .map(|p| matches_preset(&instant, p.as_str(), &now))
        .collect();
    assert_eq!(first, second);
}

// ─────────────────────────────────────────────────────────────────────────────
// DatePreset
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn preset_from_str_round_trips() {
    for preset in DatePreset::ALL {
        assert_eq!(preset.as_str().parse::<DatePreset>().unwrap(), preset);
    }
}

#[test]
fn preset_from_str_rejects_unknown() {
    assert_eq!(
        "next_week".parse::<DatePreset>(),
        Err(Error::UnknownPreset("next_week".into()))
    );
}

// ─────────────────────────────────────────────────────────────────────────────
// parse_instant
// ─────────────────────────────────────────────────────────────────────────────

#[parameterized(
    plain_date = { "2024-06-10", "2024-06-10T00:00:00+03:00" },
    wall_clock_minutes = { "2024-06-10T09:00", "2024-06-10T09:00:00+03:00" },
    wall_clock_seconds = { "2024-06-10T09:00:30", "2024-06-10T09:00:30+03:00" },
    wall_clock_space = { "2024-06-10 09:00", "2024-06-10T09:00:00+03:00" },
    rfc3339_utc = { "2024-06-10T06:00:00Z", "2024-06-10T09:00:00+03:00" },
    padded = { "  2024-06-10  ", "2024-06-10T00:00:00+03:00" },
)]
fn parse_instant_valid(raw: &str, expected: &str) {
    let expected = DateTime::parse_from_rfc3339(expected).unwrap();
    assert_eq!(parse_instant(raw, &istanbul()), Some(expected));
}

#[parameterized(
    empty = { "" },
    garbage = { "yarın" },
    bad_month = { "2024-13-01" },
    day_first = { "10.06.2024" },
)]
fn parse_instant_invalid(raw: &str) {
    assert_eq!(parse_instant(raw, &istanbul()), None);
}
