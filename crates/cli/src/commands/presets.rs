// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::{self, Write};

use vw_core::{matches_preset, parse_instant, DatePreset};

use crate::config::Config;
use crate::display::format_preset_line;
use crate::error::{Error, Result};

use super::resolve_now;

pub fn run(date: Option<String>, now: Option<String>) -> Result<()> {
    let config = Config::discover()?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_impl(&config, date.as_deref(), now.as_deref(), &mut out)
}

/// Lists date presets, or only those containing `date` when given.
pub(crate) fn run_impl(
    config: &Config,
    date: Option<&str>,
    now: Option<&str>,
    out: &mut impl Write,
) -> Result<()> {
    let Some(date) = date else {
        for preset in DatePreset::ALL {
            writeln!(out, "{}", format_preset_line(preset))?;
        }
        return Ok(());
    };

    let now = resolve_now(now, config.offset()?)?;
    let instant = parse_instant(date, now.offset()).ok_or_else(|| Error::InvalidTimestamp {
        input: date.to_string(),
    })?;

    let matching: Vec<DatePreset> = DatePreset::ALL
        .into_iter()
        .filter(|preset| matches_preset(&instant, preset.as_str(), &now))
        .collect();
    tracing::debug!(%instant, %now, matching = matching.len(), "matched date presets");

    for preset in matching {
        writeln!(out, "{}", format_preset_line(preset))?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "presets_tests.rs"]
mod tests;
