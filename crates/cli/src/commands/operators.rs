// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::{self, Write};

use vw_core::{operators_for, PropertyType};

use crate::cli::OutputFormat;
use crate::colors;
use crate::display::format_operator_line;
use crate::error::Result;

pub fn run(property_type: PropertyType, output: OutputFormat) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_impl(property_type, output, colors::should_colorize(), &mut out)
}

pub(crate) fn run_impl(
    property_type: PropertyType,
    output: OutputFormat,
    color: bool,
    out: &mut impl Write,
) -> Result<()> {
    let catalog = operators_for(property_type);

    match output {
        OutputFormat::Text => {
            let heading = format!("Operators for {} properties:", property_type);
            if color {
                writeln!(out, "{}", colors::header(&heading))?;
            } else {
                writeln!(out, "{}", heading)?;
            }
            for spec in catalog {
                writeln!(out, "{}", format_operator_line(spec))?;
            }
        }
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(catalog)?)?;
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "operators_tests.rs"]
mod tests;
