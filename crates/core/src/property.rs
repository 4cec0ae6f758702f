// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Property schema and value types.
//!
//! A page carries a dynamic set of typed properties. The schema side
//! ([`Property`], [`PropertyType`], [`PropertyConfig`]) is a read-only snapshot
//! supplied by the host; the value side ([`PropertyValue`]) is one cell of a
//! record.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::vocab;

/// Type of a schema-declared property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum PropertyType {
    /// Free text.
    Text,
    /// The page title. Behaves exactly like [`PropertyType::Text`].
    Title,
    /// Numeric value.
    Number,
    /// Date or date-time, optionally a range.
    Date,
    /// One option out of a declared vocabulary.
    Select,
    /// Any number of options out of a declared vocabulary.
    MultiSelect,
    /// Boolean flag.
    Checkbox,
    /// Select with grouped workflow options (to-do, in progress, complete).
    Status,
    /// Select with the five canonical priority levels.
    Priority,
}

impl PropertyType {
    /// Every property type, in catalog order.
    pub const ALL: [PropertyType; 9] = [
        PropertyType::Text,
        PropertyType::Title,
        PropertyType::Number,
        PropertyType::Date,
        PropertyType::Select,
        PropertyType::MultiSelect,
        PropertyType::Checkbox,
        PropertyType::Status,
        PropertyType::Priority,
    ];

    /// Returns the string representation used in snapshots and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Text => "text",
            PropertyType::Title => "title",
            PropertyType::Number => "number",
            PropertyType::Date => "date",
            PropertyType::Select => "select",
            PropertyType::MultiSelect => "multi_select",
            PropertyType::Checkbox => "checkbox",
            PropertyType::Status => "status",
            PropertyType::Priority => "priority",
        }
    }

    /// Returns true for types whose values reference a declared option list.
    pub fn is_select_family(&self) -> bool {
        matches!(
            self,
            PropertyType::Select
                | PropertyType::MultiSelect
                | PropertyType::Status
                | PropertyType::Priority
        )
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PropertyType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(PropertyType::Text),
            "title" => Ok(PropertyType::Title),
            "number" => Ok(PropertyType::Number),
            "date" => Ok(PropertyType::Date),
            "select" => Ok(PropertyType::Select),
            "multi_select" | "multi-select" => Ok(PropertyType::MultiSelect),
            "checkbox" => Ok(PropertyType::Checkbox),
            "status" => Ok(PropertyType::Status),
            "priority" => Ok(PropertyType::Priority),
            _ => Err(Error::InvalidPropertyType(s.to_string())),
        }
    }
}

/// One named, colored value in a select-family vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct SelectOption {
    /// Stable identifier referenced by values.
    pub id: String,
    /// Display name. Priority scoring looks options up by this name.
    pub name: String,
    /// UI color token.
    #[serde(default)]
    pub color: String,
    /// Status group the option belongs to, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

impl SelectOption {
    /// Creates an ungrouped option.
    pub fn new(id: impl Into<String>, name: impl Into<String>, color: impl Into<String>) -> Self {
        SelectOption {
            id: id.into(),
            name: name.into(),
            color: color.into(),
            group: None,
        }
    }

    /// Places the option in a status group.
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }
}

/// Type-specific configuration. Only select-family types use it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct PropertyConfig {
    /// Declared options. Declaration order is significant for sorting.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<SelectOption>,
}

impl PropertyConfig {
    pub fn with_options(options: Vec<SelectOption>) -> Self {
        PropertyConfig { options }
    }

    /// Looks an option up by id, returning its declaration index too.
    pub fn option(&self, id: &str) -> Option<(usize, &SelectOption)> {
        self.options.iter().enumerate().find(|(_, o)| o.id == id)
    }

    /// The fixed status vocabulary: one option per canonical group.
    pub fn default_status() -> Self {
        PropertyConfig::with_options(vocab::default_status_options())
    }

    /// The fixed priority vocabulary, lowest level first.
    pub fn default_priority() -> Self {
        PropertyConfig::with_options(vocab::default_priority_options())
    }
}

/// A schema-declared column applicable to every record in a collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Property {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    #[serde(default)]
    pub config: PropertyConfig,
}

impl Property {
    pub fn new(id: impl Into<String>, property_type: PropertyType) -> Self {
        let id = id.into();
        Property {
            name: id.clone(),
            id,
            property_type,
            config: PropertyConfig::default(),
        }
    }

    pub fn with_config(mut self, config: PropertyConfig) -> Self {
        self.config = config;
        self
    }

    /// Configuration to evaluate against.
    ///
    /// Status and priority properties declared without options fall back to
    /// their fixed vocabulary.
    pub fn effective_config(&self) -> Cow<'_, PropertyConfig> {
        if !self.config.options.is_empty() {
            return Cow::Borrowed(&self.config);
        }
        match self.property_type {
            PropertyType::Status => Cow::Owned(PropertyConfig::default_status()),
            PropertyType::Priority => Cow::Owned(PropertyConfig::default_priority()),
            PropertyType::Text
            | PropertyType::Title
            | PropertyType::Number
            | PropertyType::Date
            | PropertyType::Select
            | PropertyType::MultiSelect
            | PropertyType::Checkbox => Cow::Borrowed(&self.config),
        }
    }

    /// Drops option references that are not in the current option list.
    ///
    /// A stale `option_id` becomes [`PropertyValue::Blank`]; stale entries of
    /// `option_ids` are removed. Non-select values pass through untouched.
    pub fn normalize_value<'v>(&self, value: &'v PropertyValue) -> Cow<'v, PropertyValue> {
        if !self.property_type.is_select_family() {
            return Cow::Borrowed(value);
        }
        let config = self.effective_config();
        match value {
            PropertyValue::Select(id) if config.option(id).is_none() => {
                Cow::Owned(PropertyValue::Blank)
            }
            PropertyValue::MultiSelect(ids) if ids.iter().any(|id| config.option(id).is_none()) => {
                Cow::Owned(PropertyValue::MultiSelect(
                    ids.iter()
                        .filter(|id| config.option(id).is_some())
                        .cloned()
                        .collect(),
                ))
            }
            _ => Cow::Borrowed(value),
        }
    }
}

/// One cell of a record.
///
/// The wire form is an untagged object whose defining field selects the
/// variant: `{"text": ..}`, `{"number": ..}`, `{"date": .., "end_date": ..}`,
/// `{"option_id": ..}`, `{"option_ids": [..]}` or `{"checked": ..}`. An object
/// with none of those fields set is [`PropertyValue::Blank`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawPropertyValue", into = "RawPropertyValue")]
pub enum PropertyValue {
    Text(String),
    Number(f64),
    Date {
        date: String,
        end_date: Option<String>,
    },
    Select(String),
    MultiSelect(Vec<String>),
    Checkbox(bool),
    Blank,
}

impl PropertyValue {
    /// Returns true when the value carries no meaningful content.
    ///
    /// Empty or whitespace-only strings, empty option lists and
    /// [`PropertyValue::Blank`] are blank. Numbers and checkboxes never are.
    pub fn is_blank(&self) -> bool {
        match self {
            PropertyValue::Text(text) => text.trim().is_empty(),
            PropertyValue::Number(_) => false,
            PropertyValue::Date { date, .. } => date.trim().is_empty(),
            PropertyValue::Select(id) => id.trim().is_empty(),
            PropertyValue::MultiSelect(ids) => ids.is_empty(),
            PropertyValue::Checkbox(_) => false,
            PropertyValue::Blank => true,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            PropertyValue::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Best-effort numeric reading: finite numbers as-is, numeric text
    /// parsed, anything else (NaN and infinities included) 0.
    pub fn coerce_number(&self) -> f64 {
        match self {
            PropertyValue::Number(n) if n.is_finite() => *n,
            PropertyValue::Text(text) => parse_number(text).unwrap_or(0.0),
            _ => 0.0,
        }
    }

    /// Start of a date value, unparsed.
    pub fn as_date(&self) -> Option<&str> {
        match self {
            PropertyValue::Date { date, .. } => Some(date),
            _ => None,
        }
    }

    pub fn option_id(&self) -> Option<&str> {
        match self {
            PropertyValue::Select(id) => Some(id),
            _ => None,
        }
    }

    pub fn option_ids(&self) -> &[String] {
        match self {
            PropertyValue::MultiSelect(ids) => ids,
            _ => &[],
        }
    }

    /// True only for a checkbox holding exactly `true`.
    pub fn is_checked(&self) -> bool {
        matches!(self, PropertyValue::Checkbox(true))
    }
}

/// Emptiness shared by the `is_empty` filters and the null-handling wrapper.
pub fn is_empty(value: Option<&PropertyValue>) -> bool {
    value.is_none_or(PropertyValue::is_blank)
}

/// Parses a finite number out of text. Blank or non-numeric text is `None`.
pub(crate) fn parse_number(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Reads a JSON scalar as a number the way the evaluator does: numbers as-is,
/// numeric strings parsed, booleans as 1/0, anything else 0.
pub(crate) fn coerce_json_number(value: &serde_json::Value) -> f64 {
    match value {
        serde_json::Value::Number(n) => n.as_f64().unwrap_or(0.0),
        serde_json::Value::String(s) => parse_number(s).unwrap_or(0.0),
        serde_json::Value::Bool(b) => f64::from(u8::from(*b)),
        _ => 0.0,
    }
}

/// Object form of a [`PropertyValue`] as it appears in snapshots.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct RawPropertyValue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// A number, or a string read as one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub option_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub option_ids: Option<Vec<String>>,
    /// Only a literal `true` counts as checked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checked: Option<serde_json::Value>,
}

impl From<RawPropertyValue> for PropertyValue {
    fn from(raw: RawPropertyValue) -> Self {
        if let Some(text) = raw.text {
            return PropertyValue::Text(text);
        }
        if let Some(number) = raw.number.filter(|n| !n.is_null()) {
            return match &number {
                serde_json::Value::String(s) if s.trim().is_empty() => PropertyValue::Blank,
                other => PropertyValue::Number(coerce_json_number(other)),
            };
        }
        if let Some(date) = raw.date {
            return PropertyValue::Date {
                date,
                end_date: raw.end_date,
            };
        }
        if let Some(id) = raw.option_id {
            return PropertyValue::Select(id);
        }
        if let Some(ids) = raw.option_ids {
            return PropertyValue::MultiSelect(ids);
        }
        if let Some(checked) = raw.checked.filter(|c| !c.is_null()) {
            return PropertyValue::Checkbox(checked == serde_json::Value::Bool(true));
        }
        PropertyValue::Blank
    }
}

impl From<PropertyValue> for RawPropertyValue {
    fn from(value: PropertyValue) -> Self {
        let mut raw = RawPropertyValue::default();
        match value {
            PropertyValue::Text(text) => raw.text = Some(text),
            PropertyValue::Number(n) => raw.number = Some(serde_json::json!(n)),
            PropertyValue::Date { date, end_date } => {
                raw.date = Some(date);
                raw.end_date = end_date;
            }
            PropertyValue::Select(id) => raw.option_id = Some(id),
            PropertyValue::MultiSelect(ids) => raw.option_ids = Some(ids),
            PropertyValue::Checkbox(checked) => raw.checked = Some(checked.into()),
            PropertyValue::Blank => {}
        }
        raw
    }
}

#[cfg(test)]
#[path = "property_tests.rs"]
mod tests;
