// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Records and the schema snapshot they are evaluated against.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::property::{Property, PropertyValue};

/// An item in a table or board view (a "page").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Record {
    pub id: String,
    /// Values keyed by property id. Missing keys mean "no value".
    #[serde(default)]
    #[cfg_attr(
        feature = "schemars",
        schemars(with = "BTreeMap<String, crate::property::RawPropertyValue>")
    )]
    pub values: BTreeMap<String, PropertyValue>,
}

impl Record {
    pub fn new(id: impl Into<String>) -> Self {
        Record {
            id: id.into(),
            values: BTreeMap::new(),
        }
    }

    pub fn with_value(mut self, property_id: impl Into<String>, value: PropertyValue) -> Self {
        self.values.insert(property_id.into(), value);
        self
    }

    pub fn value(&self, property_id: &str) -> Option<&PropertyValue> {
        self.values.get(property_id)
    }
}

/// Read-only property schema of a collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(transparent)]
pub struct Schema {
    properties: Vec<Property>,
}

impl Schema {
    pub fn new(properties: Vec<Property>) -> Self {
        Schema { properties }
    }

    pub fn property(&self, id: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.id == id)
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }
}

impl FromIterator<Property> for Schema {
    fn from_iter<I: IntoIterator<Item = Property>>(iter: I) -> Self {
        Schema::new(iter.into_iter().collect())
    }
}
