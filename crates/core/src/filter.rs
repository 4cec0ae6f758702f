// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Filter predicate evaluation.
//!
//! A [`FilterRule`] names a property, an operator and an optional value.
//! [`passes`] decides whether one property value satisfies one rule:
//!
//! 1. `is_empty` / `is_not_empty` are answered first, the same way for every
//!    property type.
//! 2. An absent value fails every other operator.
//! 3. The property type selects the comparison.
//! 4. Operator/type combinations with no defined comparison pass, so an
//!    unrecognized rule never hides a record.
//!
//! Evaluation never fails; malformed values simply do not match.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::collate::match_key;
use crate::operator::Operator;
use crate::preset::{matches_preset, parse_instant};
use crate::property::{coerce_json_number, is_empty, PropertyType, PropertyValue};
use crate::record::{Record, Schema};

/// One filter condition from view state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct FilterRule {
    #[serde(alias = "propertyId")]
    pub property_id: String,
    #[cfg_attr(feature = "schemars", schemars(with = "String"))]
    pub operator: Operator,
    /// Comparison operand: text, number, option id, date or preset name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
}

impl FilterRule {
    pub fn new(property_id: impl Into<String>, operator: impl Into<Operator>) -> Self {
        FilterRule {
            property_id: property_id.into(),
            operator: operator.into(),
            value: None,
        }
    }

    pub fn with_value(mut self, value: impl Into<serde_json::Value>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// The operand as text. Numbers and booleans are rendered, null is empty.
    pub fn text(&self) -> String {
        match &self.value {
            Some(serde_json::Value::String(s)) => s.clone(),
            Some(serde_json::Value::Number(n)) => n.to_string(),
            Some(serde_json::Value::Bool(b)) => b.to_string(),
            _ => String::new(),
        }
    }

    /// The operand read best-effort as a number.
    pub fn number(&self) -> f64 {
        self.value.as_ref().map_or(0.0, coerce_json_number)
    }

    /// Whether the rule carries a non-blank operand.
    pub fn has_value(&self) -> bool {
        match &self.value {
            None | Some(serde_json::Value::Null) => false,
            Some(serde_json::Value::String(s)) => !s.trim().is_empty(),
            Some(_) => true,
        }
    }
}

/// Evaluates one rule against one property value.
///
/// `value` is `None` when the record has no value for the property at all.
/// `now` is the reference instant for relative date presets.
///
/// Option ids are taken as given: normalize the value with
/// [`Property::normalize_value`](crate::property::Property::normalize_value)
/// first, or use [`passes_all`], so stale ids count as no selection.
pub fn passes(
    value: Option<&PropertyValue>,
    rule: &FilterRule,
    property_type: PropertyType,
    now: &DateTime<FixedOffset>,
) -> bool {
    match rule.operator {
        Operator::IsEmpty => return is_empty(value),
        Operator::IsNotEmpty => return !is_empty(value),
        _ => {}
    }

    let Some(value) = value else {
        return false;
    };

    let verdict = match property_type {
        PropertyType::Text | PropertyType::Title => text_passes(value, rule),
        PropertyType::Number => number_passes(value, rule),
        PropertyType::Date => date_passes(value, rule, now),
        PropertyType::Select | PropertyType::Status | PropertyType::Priority => {
            select_passes(value, rule)
        }
        PropertyType::MultiSelect => multi_select_passes(value, rule),
        PropertyType::Checkbox => checkbox_passes(value, rule),
    };

    verdict.unwrap_or_else(|| {
        tracing::trace!(
            operator = %rule.operator,
            property_type = %property_type,
            "no comparison for operator, passing record"
        );
        true
    })
}

/// Evaluates every rule against a record (implicit AND).
///
/// Rules naming a property missing from the schema pass. Option references
/// not in the property's current option list count as no selection.
pub fn passes_all(
    record: &Record,
    schema: &Schema,
    rules: &[FilterRule],
    now: &DateTime<FixedOffset>,
) -> bool {
    rules.iter().all(|rule| match schema.property(&rule.property_id) {
        Some(property) => {
            let value = record
                .value(&property.id)
                .map(|v| property.normalize_value(v));
            passes(value.as_deref(), rule, property.property_type, now)
        }
        None => {
            tracing::trace!(property = %rule.property_id, "rule names unknown property, passing");
            true
        }
    })
}

fn text_passes(value: &PropertyValue, rule: &FilterRule) -> Option<bool> {
    let haystack = match_key(value.as_text().unwrap_or_default());
    let needle = match_key(&rule.text());

    let result = match rule.operator {
        Operator::Contains => haystack.contains(&needle),
        Operator::DoesNotContain => !haystack.contains(&needle),
        Operator::Is => haystack == needle,
        Operator::IsNot => haystack != needle,
        Operator::StartsWith => haystack.starts_with(&needle),
        Operator::EndsWith => haystack.ends_with(&needle),
        _ => return None,
    };
    Some(result)
}

fn number_passes(value: &PropertyValue, rule: &FilterRule) -> Option<bool> {
    let actual = value.coerce_number();
    let expected = rule.number();

    let result = match rule.operator {
        Operator::Equals => actual == expected,
        Operator::DoesNotEqual => actual != expected,
        Operator::GreaterThan => actual > expected,
        Operator::LessThan => actual < expected,
        Operator::GreaterThanOrEqual => actual >= expected,
        Operator::LessThanOrEqual => actual <= expected,
        _ => return None,
    };
    Some(result)
}

fn date_passes(value: &PropertyValue, rule: &FilterRule, now: &DateTime<FixedOffset>) -> Option<bool> {
    let offset = now.offset();
    let actual = value.as_date().and_then(|raw| parse_instant(raw, offset));

    if rule.operator == Operator::DateWithin {
        return Some(actual.is_some_and(|instant| matches_preset(&instant, &rule.text(), now)));
    }

    let expected = parse_instant(&rule.text(), offset);

    let result = match (&rule.operator, actual, expected) {
        (Operator::DateIs, Some(a), Some(b)) => a.date_naive() == b.date_naive(),
        (Operator::DateBefore, Some(a), Some(b)) => a < b,
        (Operator::DateAfter, Some(a), Some(b)) => a > b,
        // Either side unparseable.
        (Operator::DateIs | Operator::DateBefore | Operator::DateAfter, _, _) => false,
        _ => return None,
    };
    Some(result)
}

fn select_passes(value: &PropertyValue, rule: &FilterRule) -> Option<bool> {
    let expected = rule.text();
    let selected = value.option_id();

    let result = match rule.operator {
        Operator::Is => selected == Some(expected.as_str()),
        Operator::IsNot => selected != Some(expected.as_str()),
        _ => return None,
    };
    Some(result)
}

fn multi_select_passes(value: &PropertyValue, rule: &FilterRule) -> Option<bool> {
    let expected = rule.text();
    let selected = value.option_ids().iter().any(|id| *id == expected);

    let result = match rule.operator {
        Operator::ContainsAny => selected,
        Operator::DoesNotContain => !selected,
        _ => return None,
    };
    Some(result)
}

fn checkbox_passes(value: &PropertyValue, rule: &FilterRule) -> Option<bool> {
    let result = match rule.operator {
        Operator::IsChecked => value.is_checked(),
        Operator::IsNotChecked => !value.is_checked(),
        _ => return None,
    };
    Some(result)
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
