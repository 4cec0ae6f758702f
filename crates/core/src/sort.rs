// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sort comparators.
//!
//! [`comparator_for`] builds the type-specific ordering of a property. A raw
//! [`Comparator`] cannot order anything outside this crate: it has to be
//! passed through [`with_null_handling`], which puts empty values first,
//! before it can be used. [`SortPlan`] chains wrapped comparators over a list
//! of [`SortKey`]s.

use chrono::{Offset, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::collate;
use crate::error::{Error, Result};
use crate::preset::parse_instant;
use crate::property::{is_empty, Property, PropertyConfig, PropertyType, PropertyValue, SelectOption};
use crate::record::{Record, Schema};
use crate::vocab::{priority_score, status_rank};

type CompareFn = dyn Fn(Option<&PropertyValue>, Option<&PropertyValue>) -> Ordering + Send + Sync;

/// Type-specific ordering of two values of one property.
pub struct Comparator {
    property_type: PropertyType,
    compare: Box<CompareFn>,
}

impl Comparator {
    pub fn property_type(&self) -> PropertyType {
        self.property_type
    }

    pub(crate) fn compare(&self, a: Option<&PropertyValue>, b: Option<&PropertyValue>) -> Ordering {
        (self.compare)(a, b)
    }
}

impl fmt::Debug for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Comparator")
            .field("property_type", &self.property_type)
            .finish_non_exhaustive()
    }
}

/// A comparator that orders empty values before everything else.
#[derive(Debug)]
pub struct NullsFirst {
    inner: Comparator,
}

impl NullsFirst {
    /// Compares two values; emptiness decides before the wrapped comparator.
    pub fn compare(&self, a: Option<&PropertyValue>, b: Option<&PropertyValue>) -> Ordering {
        match (is_empty(a), is_empty(b)) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => self.inner.compare(a, b),
        }
    }

    pub fn property_type(&self) -> PropertyType {
        self.inner.property_type()
    }
}

/// Wraps a comparator so empty values sort first in ascending order.
pub fn with_null_handling(comparator: Comparator) -> NullsFirst {
    NullsFirst { inner: comparator }
}

/// Builds the ordering for a property type.
///
/// - number: numeric, non-numeric reads as 0
/// - date: by instant, unparseable reads as the epoch
/// - checkbox: unchecked before checked
/// - text, title: Turkish collation
/// - select, status: unresolved first, then status group rank when both
///   options have a group, then declaration order
/// - priority: by priority score of the option name
/// - multi_select: collation of the first selected option id only
pub fn comparator_for(property_type: PropertyType, config: &PropertyConfig) -> Comparator {
    let compare: Box<CompareFn> = match property_type {
        PropertyType::Number => Box::new(|a, b| {
            let (a, b) = (number(a), number(b));
            a.total_cmp(&b)
        }),
        PropertyType::Date => Box::new(|a, b| epoch_millis(a).cmp(&epoch_millis(b))),
        PropertyType::Checkbox => Box::new(|a, b| checked(a).cmp(&checked(b))),
        PropertyType::Text | PropertyType::Title => {
            Box::new(|a, b| collate::compare(text(a), text(b)))
        }
        PropertyType::Select | PropertyType::Status => {
            let options = config.options.clone();
            Box::new(move |a, b| compare_grouped(&options, a, b))
        }
        PropertyType::Priority => {
            let options = config.options.clone();
            Box::new(move |a, b| priority(&options, a).cmp(&priority(&options, b)))
        }
        PropertyType::MultiSelect => Box::new(|a, b| collate::compare(first_id(a), first_id(b))),
    };

    Comparator {
        property_type,
        compare,
    }
}

fn number(value: Option<&PropertyValue>) -> f64 {
    value.map_or(0.0, PropertyValue::coerce_number)
}

fn epoch_millis(value: Option<&PropertyValue>) -> i64 {
    value
        .and_then(PropertyValue::as_date)
        .and_then(|raw| parse_instant(raw, &Utc.fix()))
        .map_or(0, |instant| instant.timestamp_millis())
}

fn checked(value: Option<&PropertyValue>) -> bool {
    value.is_some_and(PropertyValue::is_checked)
}

fn text(value: Option<&PropertyValue>) -> &str {
    value.and_then(PropertyValue::as_text).unwrap_or_default()
}

fn first_id(value: Option<&PropertyValue>) -> &str {
    value
        .and_then(|v| v.option_ids().first())
        .map_or("", String::as_str)
}

fn resolve<'o>(
    options: &'o [SelectOption],
    value: Option<&PropertyValue>,
) -> Option<(usize, &'o SelectOption)> {
    let id = value?.option_id()?;
    options.iter().enumerate().find(|(_, option)| option.id == id)
}

fn compare_grouped(
    options: &[SelectOption],
    a: Option<&PropertyValue>,
    b: Option<&PropertyValue>,
) -> Ordering {
    match (resolve(options, a), resolve(options, b)) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some((index_a, option_a)), Some((index_b, option_b))) => {
            let by_group = match (&option_a.group, &option_b.group) {
                (Some(group_a), Some(group_b)) => status_rank(group_a).cmp(&status_rank(group_b)),
                _ => Ordering::Equal,
            };
            by_group.then(index_a.cmp(&index_b))
        }
    }
}

fn priority(options: &[SelectOption], value: Option<&PropertyValue>) -> u8 {
    resolve(options, value).map_or(0, |(_, option)| priority_score(&option.name))
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    /// Applies this direction to an ascending ordering.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Asc),
            "desc" | "descending" => Ok(SortDirection::Desc),
            _ => Err(Error::InvalidDirection(s.to_string())),
        }
    }
}

/// One sort key from view state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct SortKey {
    #[serde(alias = "propertyId")]
    pub property_id: String,
    #[serde(default)]
    pub direction: SortDirection,
}

impl SortKey {
    pub fn asc(property_id: impl Into<String>) -> Self {
        SortKey {
            property_id: property_id.into(),
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(property_id: impl Into<String>) -> Self {
        SortKey {
            property_id: property_id.into(),
            direction: SortDirection::Desc,
        }
    }
}

struct PlannedKey {
    property: Property,
    direction: SortDirection,
    comparator: NullsFirst,
}

/// Wrapped comparators for a sort-key list, resolved against a schema.
///
/// Keys naming properties missing from the schema are dropped.
pub struct SortPlan {
    keys: Vec<PlannedKey>,
}

impl SortPlan {
    pub fn new(schema: &Schema, keys: &[SortKey]) -> Self {
        let keys = keys
            .iter()
            .filter_map(|key| {
                let Some(property) = schema.property(&key.property_id) else {
                    tracing::trace!(property = %key.property_id, "sort key names unknown property, skipping");
                    return None;
                };
                let comparator = with_null_handling(comparator_for(
                    property.property_type,
                    &property.effective_config(),
                ));
                Some(PlannedKey {
                    property: property.clone(),
                    direction: key.direction,
                    comparator,
                })
            })
            .collect();
        SortPlan { keys }
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Compares two records key by key; the first non-equal key decides.
    pub fn compare(&self, a: &Record, b: &Record) -> Ordering {
        for key in &self.keys {
            let id = &key.property.id;
            let value_a = a.value(id).map(|v| key.property.normalize_value(v));
            let value_b = b.value(id).map(|v| key.property.normalize_value(v));
            let ordering = key
                .direction
                .apply(key.comparator.compare(value_a.as_deref(), value_b.as_deref()));
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        Ordering::Equal
    }

    /// Stable sort of `records` by this plan.
    pub fn sort(&self, records: &mut [&Record]) {
        if !self.is_empty() {
            records.sort_by(|a, b| self.compare(a, b));
        }
    }
}

#[cfg(test)]
#[path = "sort_tests.rs"]
mod tests;
