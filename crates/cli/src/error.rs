// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the vwrs library.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid filter rule '{input}': {reason}\n  hint: rules look like property:operator[:value], e.g. title:contains:plan")]
    InvalidRuleSyntax { input: String, reason: String },

    #[error("invalid sort key '{input}': {reason}\n  hint: sort keys look like property[:asc|desc], e.g. due:desc")]
    InvalidSortKey { input: String, reason: String },

    #[error("invalid timestamp '{input}'\n  hint: use RFC 3339 (2024-06-10T12:00:00+03:00), YYYY-MM-DDTHH:MM or YYYY-MM-DD")]
    InvalidTimestamp { input: String },

    #[error("unknown property '{id}'\n  hint: properties in this snapshot: {known}")]
    UnknownProperty { id: String, known: String },

    #[error("{problems} problem(s) found")]
    CheckFailed { problems: usize },

    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },

    #[error("config error: {0}")]
    Config(String),

    #[error(transparent)]
    Core(#[from] vw_core::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for vwrs operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
