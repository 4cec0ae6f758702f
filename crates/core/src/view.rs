// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! View pipeline: filter then sort a record snapshot.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::filter::{passes_all, FilterRule};
use crate::record::{Record, Schema};
use crate::sort::{SortKey, SortPlan};

/// Filter rules (implicit AND) and sort keys (left to right) of a view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct View {
    #[serde(default)]
    pub filters: Vec<FilterRule>,
    #[serde(default)]
    pub sorts: Vec<SortKey>,
}

impl View {
    pub fn new(filters: Vec<FilterRule>, sorts: Vec<SortKey>) -> Self {
        View { filters, sorts }
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty() && self.sorts.is_empty()
    }

    /// Appends the rules and keys of `other` after this view's own.
    pub fn extend(&mut self, other: View) {
        self.filters.extend(other.filters);
        self.sorts.extend(other.sorts);
    }

    /// Returns the records passing every filter, ordered by the sort keys.
    ///
    /// Records that compare equal on every key keep their input order.
    pub fn apply<'r>(
        &self,
        records: &'r [Record],
        schema: &Schema,
        now: &DateTime<FixedOffset>,
    ) -> Vec<&'r Record> {
        let mut matched: Vec<&Record> = records
            .iter()
            .filter(|record| passes_all(record, schema, &self.filters, now))
            .collect();

        tracing::trace!(
            total = records.len(),
            matched = matched.len(),
            "applied view filters"
        );

        SortPlan::new(schema, &self.sorts).sort(&mut matched);
        matched
    }
}

/// Applies `view` to `records`. See [`View::apply`].
pub fn apply<'r>(
    records: &'r [Record],
    schema: &Schema,
    view: &View,
    now: &DateTime<FixedOffset>,
) -> Vec<&'r Record> {
    view.apply(records, schema, now)
}

#[cfg(test)]
#[path = "view_tests.rs"]
mod tests;
