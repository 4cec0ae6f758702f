// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema types for `vw list` JSON output.

use schemars::JsonSchema;
use serde::Serialize;
use vw_core::{FilterRule, Record, SortKey};

/// JSON output structure for the list command.
#[derive(Debug, JsonSchema, Serialize)]
pub struct ListOutputJson {
    /// Records of the view, in view order.
    pub records: Vec<Record>,
    /// Number of records that passed the filters, before the limit.
    pub total: usize,
    /// Filter rules that were applied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters_applied: Option<Vec<FilterRule>>,
    /// Sort keys that were applied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sorts_applied: Option<Vec<SortKey>>,
    /// Maximum number of results requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
}
