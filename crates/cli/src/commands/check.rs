// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Check command implementation.
//!
//! Validates the effective view of a snapshot: every rule and sort key must
//! name a known property, and every rule must use an operator declared for
//! the property's type with a value when one is required.

use std::io::{self, Write};
use std::path::Path;

use vw_core::{validate_rule, View};

use crate::cli::ViewArgs;
use crate::error::{Error, Result};
use crate::snapshot::Snapshot;

use super::resolve_view;

pub fn run(snapshot: &Path, view: ViewArgs) -> Result<()> {
    let snapshot = Snapshot::load(snapshot)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_impl(&snapshot, &view, &mut out)
}

/// Internal implementation that accepts a loaded snapshot for testing.
pub(crate) fn run_impl(snapshot: &Snapshot, args: &ViewArgs, out: &mut impl Write) -> Result<()> {
    let view = resolve_view(snapshot, args)?;
    let problems = find_problems(snapshot, &view);

    if problems.is_empty() {
        writeln!(
            out,
            "ok: {} filter(s), {} sort key(s)",
            view.filters.len(),
            view.sorts.len()
        )?;
        return Ok(());
    }

    for problem in &problems {
        writeln!(out, "{}", problem)?;
    }
    Err(Error::CheckFailed {
        problems: problems.len(),
    })
}

/// Describes every rule and key of `view` that does not fit the schema.
pub(crate) fn find_problems(snapshot: &Snapshot, view: &View) -> Vec<String> {
    let mut problems = Vec::new();

    for rule in &view.filters {
        let label = format!("filter {}:{}", rule.property_id, rule.operator);
        let result = match snapshot.properties.property(&rule.property_id) {
            Some(property) => validate_rule(rule, property.property_type).map_err(Error::from),
            None => Err(unknown_property(snapshot, &rule.property_id)),
        };
        if let Err(e) = result {
            problems.push(format!("{}: {}", label, e));
        }
    }

    for key in &view.sorts {
        if snapshot.properties.property(&key.property_id).is_none() {
            let e = unknown_property(snapshot, &key.property_id);
            problems.push(format!("sort {}: {}", key.property_id, e));
        }
    }

    tracing::debug!(problems = problems.len(), "checked view");
    problems
}

fn unknown_property(snapshot: &Snapshot, id: &str) -> Error {
    Error::UnknownProperty {
        id: id.to_string(),
        known: snapshot.property_ids(),
    }
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
