// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help text generation with colorization support.

use crate::colors;
use clap::builder::styling::Styles;

/// Generate clap Styles for help output.
pub fn styles() -> Styles {
    if !colors::should_colorize() {
        return Styles::plain();
    }

    use anstyle::{Ansi256Color, Color, Style};

    let header = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::HEADER))));
    let literal = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::LITERAL))));
    let placeholder =
        Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::CONTEXT))));
    let context = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::CONTEXT))));

    Styles::styled()
        .header(header)
        .usage(header)
        .literal(literal)
        .placeholder(placeholder)
        .valid(context)
}

/// Main help template with colorized Options header.
pub fn template() -> String {
    format!(
        "{{about-with-newline}}
{{usage-heading}} {{usage}}

{{before-help}}{}
{{options}}{{after-help}}",
        colors::header("Options:")
    )
}

/// Commands list shown before options in main help.
pub fn commands() -> String {
    format!(
        "\
{header_views}
  {list}        Filter and sort the records of a snapshot
  {check}       Validate view rules against the schema

{header_reference}
  {operators}   Show operators for a property type
  {presets}     List relative date presets
  {schema}      Output JSON Schema for inputs and output
  {completion}  Generate shell completions",
        header_views = colors::header("Views:"),
        header_reference = colors::header("Reference:"),
        list = colors::literal("list"),
        check = colors::literal("check"),
        operators = colors::literal("operators"),
        presets = colors::literal("presets"),
        schema = colors::literal("schema"),
        completion = colors::literal("completion"),
    )
}

/// Quickstart help shown after options in main help.
pub fn quickstart() -> String {
    colors::examples(
        "\
Get started:
  vw list pages.json                        List every record
  vw list pages.json -f title:contains:x    Filter by a rule
  vw list pages.json -s due:desc            Sort by a property
  vw operators date                         See which rules a type accepts",
    )
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
