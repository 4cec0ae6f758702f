// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Relative date presets and date value parsing.
//!
//! Presets are named calendar ranges resolved against an explicit reference
//! instant ("now"). Calendar days, weeks and months are taken in the UTC
//! offset of that reference instant; weeks start on Monday.
//!
//! # Presets
//!
//! - `today`, `yesterday`, `tomorrow` - a single calendar day
//! - `this_week`, `last_week` - Monday to Sunday
//! - `this_month`, `last_month` - a calendar month

use chrono::{
    DateTime, Datelike, Days, FixedOffset, Months, NaiveDate, NaiveDateTime, TimeZone,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// A named relative date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum DatePreset {
    Today,
    Yesterday,
    Tomorrow,
    ThisWeek,
    LastWeek,
    ThisMonth,
    LastMonth,
}

impl DatePreset {
    /// Every preset, in picker order.
    pub const ALL: [DatePreset; 7] = [
        DatePreset::Today,
        DatePreset::Yesterday,
        DatePreset::Tomorrow,
        DatePreset::ThisWeek,
        DatePreset::LastWeek,
        DatePreset::ThisMonth,
        DatePreset::LastMonth,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DatePreset::Today => "today",
            DatePreset::Yesterday => "yesterday",
            DatePreset::Tomorrow => "tomorrow",
            DatePreset::ThisWeek => "this_week",
            DatePreset::LastWeek => "last_week",
            DatePreset::ThisMonth => "this_month",
            DatePreset::LastMonth => "last_month",
        }
    }

    /// Label shown by the date picker.
    pub fn label(&self) -> &'static str {
        match self {
            DatePreset::Today => "Bugün",
            DatePreset::Yesterday => "Dün",
            DatePreset::Tomorrow => "Yarın",
            DatePreset::ThisWeek => "Bu hafta",
            DatePreset::LastWeek => "Geçen hafta",
            DatePreset::ThisMonth => "Bu ay",
            DatePreset::LastMonth => "Geçen ay",
        }
    }

    /// Returns true if `day` falls inside this preset's range when the
    /// current calendar day is `today`.
    pub fn contains(&self, day: NaiveDate, today: NaiveDate) -> bool {
        match self {
            DatePreset::Today => day == today,
            DatePreset::Yesterday => today.checked_sub_days(Days::new(1)) == Some(day),
            DatePreset::Tomorrow => today.checked_add_days(Days::new(1)) == Some(day),
            DatePreset::ThisWeek => same_week(day, today),
            DatePreset::LastWeek => today
                .checked_sub_days(Days::new(7))
                .is_some_and(|anchor| same_week(day, anchor)),
            DatePreset::ThisMonth => same_month(day, today),
            DatePreset::LastMonth => today
                .checked_sub_months(Months::new(1))
                .is_some_and(|anchor| same_month(day, anchor)),
        }
    }
}

impl fmt::Display for DatePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DatePreset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        DatePreset::ALL
            .into_iter()
            .find(|preset| preset.as_str() == s)
            .ok_or_else(|| Error::UnknownPreset(s.to_string()))
    }
}

/// Monday of the week containing `day`.
fn week_start(day: NaiveDate) -> Option<NaiveDate> {
    day.checked_sub_days(Days::new(u64::from(day.weekday().num_days_from_monday())))
}

fn same_week(day: NaiveDate, anchor: NaiveDate) -> bool {
    match (week_start(day), week_start(anchor)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

fn same_month(day: NaiveDate, anchor: NaiveDate) -> bool {
    day.year() == anchor.year() && day.month() == anchor.month()
}

/// Checks an instant against a preset by name.
///
/// Unknown preset names never match.
pub fn matches_preset(
    instant: &DateTime<FixedOffset>,
    preset: &str,
    now: &DateTime<FixedOffset>,
) -> bool {
    match preset.parse::<DatePreset>() {
        Ok(preset) => {
            let day = instant.with_timezone(now.offset()).date_naive();
            preset.contains(day, now.date_naive())
        }
        Err(_) => {
            tracing::trace!(preset, "unknown date preset, not matching");
            false
        }
    }
}

const WALL_CLOCK_FORMATS: [&str; 5] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Parses a date value into an instant in `offset`.
///
/// Accepts RFC 3339 timestamps (converted into `offset`), wall-clock
/// date-times and plain `YYYY-MM-DD` dates (read as local to `offset`,
/// midnight for plain dates). Returns `None` for anything else.
pub fn parse_instant(raw: &str, offset: &FixedOffset) -> Option<DateTime<FixedOffset>> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(offset));
    }

    let naive = WALL_CLOCK_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })?;

    offset.from_local_datetime(&naive).single()
}

#[cfg(test)]
#[path = "preset_tests.rs"]
mod tests;
