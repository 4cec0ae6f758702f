// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for vw-core operations.
//!
//! Evaluation (filters, comparators, presets) never fails. These errors are
//! only produced when parsing names supplied by a host or when validating a
//! rule against the operator catalog.

use thiserror::Error;

/// All possible errors that can occur in vw-core operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("invalid property type: '{0}'\n  hint: valid types are: text, title, number, date, select, multi_select, checkbox, status, priority")]
    InvalidPropertyType(String),

    #[error("invalid sort direction: '{0}'\n  hint: valid directions are: asc, desc")]
    InvalidDirection(String),

    #[error("unknown date preset: '{0}'\n  hint: valid presets are: today, yesterday, tomorrow, this_week, last_week, this_month, last_month")]
    UnknownPreset(String),

    #[error("operator '{operator}' is not supported for {property_type} properties\n  hint: valid operators are: {valid}")]
    OperatorNotSupported {
        operator: String,
        property_type: String,
        valid: String,
    },

    #[error("operator '{operator}' requires a value")]
    MissingRuleValue { operator: String },
}

/// A specialized Result type for vw-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
