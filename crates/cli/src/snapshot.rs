// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Snapshot and view files.
//!
//! A snapshot is a JSON document holding a property schema, the records to
//! evaluate and optionally the view state saved with them:
//!
//! ```json
//! {
//!   "properties": [{"id": "title", "name": "Başlık", "type": "title"}],
//!   "records": [{"id": "r1", "values": {"title": {"text": "Bütçe"}}}],
//!   "view": {"filters": [], "sorts": [{"property_id": "title"}]}
//! }
//! ```

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use vw_core::{Record, Schema, View};

use crate::error::{Error, Result};

/// Schema, records and saved view of one collection.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct Snapshot {
    /// Property schema.
    #[serde(default)]
    pub properties: Schema,
    /// Records to evaluate.
    #[serde(default)]
    pub records: Vec<Record>,
    /// View state saved with the collection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view: Option<View>,
}

impl Snapshot {
    /// Loads a snapshot from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let snapshot: Snapshot = read_json(path)?;
        tracing::debug!(
            path = %path.display(),
            properties = snapshot.properties.properties().len(),
            records = snapshot.records.len(),
            "loaded snapshot"
        );
        Ok(snapshot)
    }

    /// Comma-separated property ids, for hints.
    pub fn property_ids(&self) -> String {
        self.properties
            .properties()
            .iter()
            .map(|p| p.id.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Loads a view from a JSON file.
pub fn load_view(path: &Path) -> Result<View> {
    let view: View = read_json(path)?;
    tracing::debug!(
        path = %path.display(),
        filters = view.filters.len(),
        sorts = view.sorts.len(),
        "loaded view"
    );
    Ok(view)
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| Error::Parse {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
#[path = "snapshot_tests.rs"]
mod tests;
