// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Operator catalog.
//!
//! Declares, per property type, which comparison operators exist and whether
//! each needs a user-supplied value. The catalog is advisory: the filter
//! evaluator never consults it, so a rule with an undeclared operator is not
//! rejected at evaluation time.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};
use crate::filter::FilterRule;
use crate::property::PropertyType;

/// A filter comparison operator.
///
/// Names that are not part of the catalog are kept as
/// [`Operator::Unrecognized`] instead of failing to parse.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Operator {
    Contains,
    DoesNotContain,
    Is,
    IsNot,
    StartsWith,
    EndsWith,
    Equals,
    DoesNotEqual,
    GreaterThan,
    LessThan,
    GreaterThanOrEqual,
    LessThanOrEqual,
    DateIs,
    DateBefore,
    DateAfter,
    DateWithin,
    ContainsAny,
    IsChecked,
    IsNotChecked,
    IsEmpty,
    IsNotEmpty,
    Unrecognized(String),
}

impl Operator {
    /// Returns the string representation used in rules.
    pub fn as_str(&self) -> &str {
        match self {
            Operator::Contains => "contains",
            Operator::DoesNotContain => "does_not_contain",
            Operator::Is => "is",
            Operator::IsNot => "is_not",
            Operator::StartsWith => "starts_with",
            Operator::EndsWith => "ends_with",
            Operator::Equals => "equals",
            Operator::DoesNotEqual => "does_not_equal",
            Operator::GreaterThan => "greater_than",
            Operator::LessThan => "less_than",
            Operator::GreaterThanOrEqual => "greater_than_or_equal",
            Operator::LessThanOrEqual => "less_than_or_equal",
            Operator::DateIs => "date_is",
            Operator::DateBefore => "date_before",
            Operator::DateAfter => "date_after",
            Operator::DateWithin => "date_within",
            Operator::ContainsAny => "contains_any",
            Operator::IsChecked => "is_checked",
            Operator::IsNotChecked => "is_not_checked",
            Operator::IsEmpty => "is_empty",
            Operator::IsNotEmpty => "is_not_empty",
            Operator::Unrecognized(name) => name,
        }
    }

    /// `is_empty` and `is_not_empty` are evaluated the same for every type.
    pub fn is_emptiness(&self) -> bool {
        matches!(self, Operator::IsEmpty | Operator::IsNotEmpty)
    }
}

impl From<&str> for Operator {
    fn from(s: &str) -> Self {
        match s {
            "contains" => Operator::Contains,
            "does_not_contain" => Operator::DoesNotContain,
            "is" => Operator::Is,
            "is_not" => Operator::IsNot,
            "starts_with" => Operator::StartsWith,
            "ends_with" => Operator::EndsWith,
            "equals" => Operator::Equals,
            "does_not_equal" => Operator::DoesNotEqual,
            "greater_than" => Operator::GreaterThan,
            "less_than" => Operator::LessThan,
            "greater_than_or_equal" => Operator::GreaterThanOrEqual,
            "less_than_or_equal" => Operator::LessThanOrEqual,
            "date_is" => Operator::DateIs,
            "date_before" => Operator::DateBefore,
            "date_after" => Operator::DateAfter,
            "date_within" => Operator::DateWithin,
            "contains_any" => Operator::ContainsAny,
            "is_checked" => Operator::IsChecked,
            "is_not_checked" => Operator::IsNotChecked,
            "is_empty" => Operator::IsEmpty,
            "is_not_empty" => Operator::IsNotEmpty,
            other => Operator::Unrecognized(other.to_string()),
        }
    }
}

impl From<String> for Operator {
    fn from(s: String) -> Self {
        Operator::from(s.as_str())
    }
}

impl From<Operator> for String {
    fn from(op: Operator) -> Self {
        match op {
            Operator::Unrecognized(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperatorSpec {
    pub operator: Operator,
    /// Label shown by the rule builder.
    pub label: &'static str,
    /// Whether the rule builder must ask for a value.
    pub requires_value: bool,
}

const fn spec(operator: Operator, label: &'static str, requires_value: bool) -> OperatorSpec {
    OperatorSpec {
        operator,
        label,
        requires_value,
    }
}

static TEXT_OPERATORS: [OperatorSpec; 8] = [
    spec(Operator::Contains, "İçerir", true),
    spec(Operator::DoesNotContain, "İçermez", true),
    spec(Operator::Is, "Eşittir", true),
    spec(Operator::IsNot, "Eşit değildir", true),
    spec(Operator::StartsWith, "İle başlar", true),
    spec(Operator::EndsWith, "İle biter", true),
    spec(Operator::IsEmpty, "Boş", false),
    spec(Operator::IsNotEmpty, "Boş değil", false),
];

static NUMBER_OPERATORS: [OperatorSpec; 8] = [
    spec(Operator::Equals, "=", true),
    spec(Operator::DoesNotEqual, "≠", true),
    spec(Operator::GreaterThan, ">", true),
    spec(Operator::LessThan, "<", true),
    spec(Operator::GreaterThanOrEqual, "≥", true),
    spec(Operator::LessThanOrEqual, "≤", true),
    spec(Operator::IsEmpty, "Boş", false),
    spec(Operator::IsNotEmpty, "Boş değil", false),
];

static DATE_OPERATORS: [OperatorSpec; 6] = [
    spec(Operator::DateIs, "Tarihinde", true),
    spec(Operator::DateBefore, "Öncesinde", true),
    spec(Operator::DateAfter, "Sonrasında", true),
    spec(Operator::DateWithin, "Aralığında", true),
    spec(Operator::IsEmpty, "Boş", false),
    spec(Operator::IsNotEmpty, "Boş değil", false),
];

static SELECT_OPERATORS: [OperatorSpec; 4] = [
    spec(Operator::Is, "Eşittir", true),
    spec(Operator::IsNot, "Eşit değildir", true),
    spec(Operator::IsEmpty, "Boş", false),
    spec(Operator::IsNotEmpty, "Boş değil", false),
];

static MULTI_SELECT_OPERATORS: [OperatorSpec; 4] = [
    spec(Operator::ContainsAny, "Herhangi birini içerir", true),
    spec(Operator::DoesNotContain, "İçermez", true),
    spec(Operator::IsEmpty, "Boş", false),
    spec(Operator::IsNotEmpty, "Boş değil", false),
];

static CHECKBOX_OPERATORS: [OperatorSpec; 2] = [
    spec(Operator::IsChecked, "İşaretli", false),
    spec(Operator::IsNotChecked, "İşaretli değil", false),
];

/// Operators available for a property type, in rule-builder order.
pub fn operators_for(property_type: PropertyType) -> &'static [OperatorSpec] {
    match property_type {
        PropertyType::Text | PropertyType::Title => &TEXT_OPERATORS,
        PropertyType::Number => &NUMBER_OPERATORS,
        PropertyType::Date => &DATE_OPERATORS,
        PropertyType::Select | PropertyType::Status | PropertyType::Priority => {
            &SELECT_OPERATORS
        }
        PropertyType::MultiSelect => &MULTI_SELECT_OPERATORS,
        PropertyType::Checkbox => &CHECKBOX_OPERATORS,
    }
}

/// Catalog entry for an operator on a type, if the type declares it.
pub fn find_operator(property_type: PropertyType, operator: &Operator) -> Option<&'static OperatorSpec> {
    operators_for(property_type)
        .iter()
        .find(|spec| spec.operator == *operator)
}

/// Checks a rule against the catalog.
///
/// # Errors
///
/// Returns [`Error::OperatorNotSupported`] if the type does not declare the
/// operator, or [`Error::MissingRuleValue`] if the operator needs a value and
/// the rule has none.
pub fn validate_rule(rule: &FilterRule, property_type: PropertyType) -> Result<()> {
    let Some(spec) = find_operator(property_type, &rule.operator) else {
        return Err(Error::OperatorNotSupported {
            operator: rule.operator.to_string(),
            property_type: property_type.to_string(),
            valid: operators_for(property_type)
                .iter()
                .map(|spec| spec.operator.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        });
    };

    if spec.requires_value && !rule.has_value() {
        return Err(Error::MissingRuleValue {
            operator: rule.operator.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
#[path = "operator_tests.rs"]
mod tests;
