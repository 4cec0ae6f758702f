// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use vw_core::{DatePreset, OperatorSpec, Property, PropertyType, PropertyValue, Record, Schema};

use crate::colors;

/// Placeholder for records without a title.
const UNTITLED: &str = "(untitled)";

/// Format a record as a single list line.
///
/// Output format:
/// ```text
/// - r1: Bütçe (status: Yapılacak, points: 3, due: 2024-06-10)
/// ```
///
/// The title is the value of the first `title` property. Other properties
/// follow in schema order; empty ones are left out.
pub fn format_record_line(record: &Record, schema: &Schema, color: bool) -> String {
    let title_property = schema
        .properties()
        .iter()
        .find(|p| p.property_type == PropertyType::Title);

    let title = title_property
        .and_then(|p| record.value(&p.id))
        .and_then(PropertyValue::as_text)
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .unwrap_or(UNTITLED);

    let details: Vec<String> = schema
        .properties()
        .iter()
        .filter(|p| title_property.is_none_or(|t| t.id != p.id))
        .filter_map(|p| {
            let value = p.normalize_value(record.value(&p.id)?);
            if value.is_blank() {
                return None;
            }
            Some(format!("{}: {}", display_name(p), format_value(p, &value, color)))
        })
        .collect();

    if details.is_empty() {
        format!("- {}: {}", record.id, title)
    } else {
        format!("- {}: {} ({})", record.id, title, details.join(", "))
    }
}

/// Property name for display, falling back to the id.
pub fn display_name(property: &Property) -> &str {
    if property.name.trim().is_empty() {
        &property.id
    } else {
        &property.name
    }
}

/// Format one value of a property for display.
///
/// Select-family values show option names instead of ids, in the option's
/// color when `color` is set.
pub fn format_value(property: &Property, value: &PropertyValue, color: bool) -> String {
    match value {
        PropertyValue::Text(text) => text.clone(),
        PropertyValue::Number(n) => n.to_string(),
        PropertyValue::Date { date, end_date } => match end_date {
            Some(end) if !end.trim().is_empty() => format!("{date} → {end}"),
            _ => date.clone(),
        },
        PropertyValue::Select(id) => option_label(property, id, color),
        PropertyValue::MultiSelect(ids) => format!(
            "[{}]",
            ids.iter()
                .map(|id| option_label(property, id, color))
                .collect::<Vec<_>>()
                .join(", ")
        ),
        PropertyValue::Checkbox(checked) => if *checked { "[x]" } else { "[ ]" }.to_string(),
        PropertyValue::Blank => String::new(),
    }
}

fn option_label(property: &Property, id: &str, color: bool) -> String {
    let config = property.effective_config();
    match config.option(id) {
        Some((_, option)) if color => colors::option(&option.name, &option.color),
        Some((_, option)) => option.name.clone(),
        None => id.to_string(),
    }
}

/// Format an operator catalog entry.
///
/// Output format:
/// ```text
///   contains               İçerir
///   is_empty               Boş (no value)
/// ```
pub fn format_operator_line(spec: &OperatorSpec) -> String {
    let suffix = if spec.requires_value { "" } else { " (no value)" };
    format!("  {:<22} {}{}", spec.operator.as_str(), spec.label, suffix)
}

/// Format a date preset entry.
pub fn format_preset_line(preset: DatePreset) -> String {
    format!("  {:<11} {}", preset.as_str(), preset.label())
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
