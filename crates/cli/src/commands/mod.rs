// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod check;
pub mod list;
pub mod operators;
pub mod presets;
pub mod schema;
#[cfg(test)]
#[path = "mod_tests.rs"]
pub mod testing;

use chrono::{DateTime, FixedOffset, Local, Offset, Utc};
use vw_core::View;

use crate::cli::ViewArgs;
use crate::error::Result;
use crate::rule::{parse_now, parse_rule, parse_sort_key};
use crate::snapshot::{load_view, Snapshot};

/// Builds the effective view of a command.
///
/// The snapshot's own view comes first, then the `--view` file, then rules
/// and keys given with `-f` and `-s`.
pub fn resolve_view(snapshot: &Snapshot, args: &ViewArgs) -> Result<View> {
    let mut view = snapshot.view.clone().unwrap_or_default();

    if let Some(path) = &args.view {
        view.extend(load_view(path)?);
    }

    let filters = args
        .filters
        .iter()
        .map(|f| parse_rule(f))
        .collect::<Result<Vec<_>>>()?;
    let sorts = args
        .sorts
        .iter()
        .map(|s| parse_sort_key(s))
        .collect::<Result<Vec<_>>>()?;
    view.extend(View::new(filters, sorts));

    Ok(view)
}

/// Resolves the reference instant for relative dates.
///
/// Uses `offset` when given, else the local offset. Without `now` the
/// current time is used.
pub fn resolve_now(
    now: Option<&str>,
    offset: Option<FixedOffset>,
) -> Result<DateTime<FixedOffset>> {
    let offset = offset.unwrap_or_else(|| Local::now().offset().fix());
    match now {
        Some(raw) => parse_now(raw, &offset),
        None => Ok(Utc::now().with_timezone(&offset)),
    }
}

#[cfg(test)]
#[path = "resolve_tests.rs"]
mod tests;
