// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parsers for command-line filter rules, sort keys and timestamps.
//!
//! Rules are written `property:operator[:value]` and sort keys
//! `property[:asc|desc]`. Everything after the second colon of a rule is the
//! value, so values may contain colons (`due:date_after:2024-06-10T09:00`).

use chrono::{DateTime, FixedOffset, Offset, Utc};
use vw_core::{parse_instant, FilterRule, Operator, SortDirection, SortKey};

use crate::error::{Error, Result};

/// Parse a filter rule from a string.
///
/// # Examples
///
/// ```ignore
/// let rule = parse_rule("title:contains:plan")?;
/// let rule = parse_rule("done:is_checked")?;
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidRuleSyntax`] when the property or operator is
/// missing. Operators are not checked against the catalog here.
pub fn parse_rule(input: &str) -> Result<FilterRule> {
    let invalid = |reason: &str| Error::InvalidRuleSyntax {
        input: input.to_string(),
        reason: reason.to_string(),
    };

    let mut parts = input.trim().splitn(3, ':');
    let property = parts.next().map(str::trim).unwrap_or_default();
    if property.is_empty() {
        return Err(invalid("missing property"));
    }

    let operator = parts.next().map(str::trim).unwrap_or_default();
    if operator.is_empty() {
        return Err(invalid("missing operator"));
    }

    let rule = FilterRule::new(property, Operator::from(operator.to_lowercase()));
    Ok(match parts.next() {
        Some(value) => rule.with_value(value),
        None => rule,
    })
}

/// Parse a sort key from a string. The direction defaults to ascending.
pub fn parse_sort_key(input: &str) -> Result<SortKey> {
    let invalid = |reason: String| Error::InvalidSortKey {
        input: input.to_string(),
        reason,
    };

    let (property, direction) = match input.trim().split_once(':') {
        Some((property, direction)) => (property.trim(), Some(direction)),
        None => (input.trim(), None),
    };
    if property.is_empty() {
        return Err(invalid("missing property".to_string()));
    }

    let direction = match direction {
        Some(raw) => raw
            .parse::<SortDirection>()
            .map_err(|_| invalid(format!("unknown direction '{}'", raw.trim())))?,
        None => SortDirection::Asc,
    };

    Ok(SortKey {
        property_id: property.to_string(),
        direction,
    })
}

/// Parse the reference instant given with `--now`.
///
/// The result is expressed in `offset`. Inputs without an offset of their
/// own are read as wall-clock time in `offset`.
pub fn parse_now(input: &str, offset: &FixedOffset) -> Result<DateTime<FixedOffset>> {
    parse_instant(input, offset).ok_or_else(|| Error::InvalidTimestamp {
        input: input.to_string(),
    })
}

/// Parse a UTC offset such as `+03:00` or `Z`.
pub fn parse_offset(input: &str) -> Result<FixedOffset> {
    let trimmed = input.trim();
    if trimmed.eq_ignore_ascii_case("z") || trimmed.eq_ignore_ascii_case("utc") {
        return Ok(Utc.fix());
    }
    trimmed
        .parse::<FixedOffset>()
        .map_err(|e| Error::Config(format!("invalid utc_offset '{trimmed}': {e}")))
}

#[cfg(test)]
#[path = "rule_tests.rs"]
mod tests;
