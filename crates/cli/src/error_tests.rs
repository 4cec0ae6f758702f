// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;

#[test]
fn test_error_invalid_rule_syntax_display() {
    let err = Error::InvalidRuleSyntax {
        input: "title".to_string(),
        reason: "missing operator".to_string(),
    };
    let msg = err.to_string();
    assert!(msg.contains("invalid filter rule 'title'"));
    assert!(msg.contains("missing operator"));
    assert!(msg.contains("hint: rules look like property:operator[:value]"));
}

#[test]
fn test_error_invalid_sort_key_display() {
    let err = Error::InvalidSortKey {
        input: "due:sideways".to_string(),
        reason: "unknown direction".to_string(),
    };
    let msg = err.to_string();
    assert!(msg.contains("invalid sort key 'due:sideways'"));
    assert!(msg.contains("property[:asc|desc]"));
}

#[test]
fn test_error_invalid_timestamp_display() {
    let err = Error::InvalidTimestamp {
        input: "yesterday".to_string(),
    };
    assert!(err.to_string().contains("invalid timestamp 'yesterday'"));
}

#[test]
fn test_error_unknown_property_display() {
    let err = Error::UnknownProperty {
        id: "owner".to_string(),
        known: "title, due".to_string(),
    };
    let msg = err.to_string();
    assert!(msg.contains("unknown property 'owner'"));
    assert!(msg.contains("title, due"));
}

#[test]
fn test_error_check_failed_display() {
    let err = Error::CheckFailed { problems: 2 };
    assert_eq!(err.to_string(), "2 problem(s) found");
}

#[test]
fn test_core_error_is_transparent() {
    let err: Error = vw_core::Error::UnknownPreset("someday".to_string()).into();
    assert!(err.to_string().starts_with("unknown date preset: 'someday'"));
}

#[test]
fn test_error_from_io() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: Error = io_err.into();
    assert!(err.to_string().contains("io error"));
}

#[test]
fn test_error_from_json() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: Error = json_err.into();
    assert!(err.to_string().contains("json error"));
}
