// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::{self, Write};
use std::path::Path;

use crate::cli::{LimitArgs, OutputFormat, ViewArgs};
use crate::colors;
use crate::config::Config;
use crate::display::format_record_line;
use crate::error::Result;
use crate::schema::list::ListOutputJson;
use crate::snapshot::Snapshot;

use super::{resolve_now, resolve_view};

pub fn run(
    snapshot: &Path,
    view: ViewArgs,
    now: Option<String>,
    limits: LimitArgs,
    output: Option<OutputFormat>,
) -> Result<()> {
    let config = Config::discover()?;
    let snapshot = Snapshot::load(snapshot)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_impl(
        &snapshot,
        &config,
        &view,
        now.as_deref(),
        &limits,
        output,
        colors::should_colorize(),
        &mut out,
    )
}

/// Internal implementation that accepts a loaded snapshot for testing.
#[allow(clippy::too_many_arguments)]
pub(crate) fn run_impl(
    snapshot: &Snapshot,
    config: &Config,
    args: &ViewArgs,
    now: Option<&str>,
    limits: &LimitArgs,
    output: Option<OutputFormat>,
    color: bool,
    out: &mut impl Write,
) -> Result<()> {
    let mut view = resolve_view(snapshot, args)?;
    if view.sorts.is_empty() {
        view.sorts = config.sort.clone();
    }

    let schema = &snapshot.properties;
    for rule in &view.filters {
        if schema.property(&rule.property_id).is_none() {
            tracing::warn!(property = %rule.property_id, "ignoring filter on unknown property");
        }
    }
    for key in &view.sorts {
        if schema.property(&key.property_id).is_none() {
            tracing::warn!(property = %key.property_id, "ignoring sort on unknown property");
        }
    }

    let now = resolve_now(now, config.offset()?)?;
    let mut records = view.apply(&snapshot.records, schema, &now);
    let total = records.len();

    // --no-limit overrides both -n and the configured limit
    let limit = if limits.no_limit {
        None
    } else {
        limits.limit.or(config.limit)
    };
    if let Some(n) = limit {
        records.truncate(n);
    }

    tracing::debug!(
        records = snapshot.records.len(),
        matched = total,
        shown = records.len(),
        "listed view"
    );

    match output.or(config.output).unwrap_or_default() {
        OutputFormat::Text => {
            for record in &records {
                writeln!(out, "{}", format_record_line(record, schema, color))?;
            }
        }
        OutputFormat::Json => {
            let filters_applied = (!view.filters.is_empty()).then(|| view.filters.clone());
            let sorts_applied = (!view.sorts.is_empty()).then(|| view.sorts.clone());
            let output = ListOutputJson {
                records: records.into_iter().cloned().collect(),
                total,
                filters_applied,
                sorts_applied,
                limit,
            };
            writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
