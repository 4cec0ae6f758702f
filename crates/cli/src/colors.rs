// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal color utilities for help and list output.
//!
//! Respects environment variables:
//! - `NO_COLOR=1`: Disables colors
//! - `COLOR=1`: Forces colors even without TTY

use std::io::IsTerminal;

use crate::env;

/// ANSI 256-color codes for help output.
pub mod codes {
    /// Section headers: pastel cyan/steel blue
    pub const HEADER: u8 = 74;
    /// Commands/literals: light grey
    pub const LITERAL: u8 = 250;
    /// Default values/context: medium grey
    pub const CONTEXT: u8 = 245;
}

/// Check if colors should be enabled based on TTY and environment variables.
pub fn should_colorize() -> bool {
    decide(env::no_color(), env::force_color(), std::io::stdout().is_terminal())
}

/// `NO_COLOR` wins over `COLOR`, which wins over TTY detection.
fn decide(no_color: bool, force_color: bool, is_tty: bool) -> bool {
    if no_color {
        return false;
    }
    force_color || is_tty
}

/// Format a 256-color ANSI escape sequence for foreground color.
fn fg256(code: u8) -> String {
    format!("\x1b[38;5;{code}m")
}

/// ANSI reset sequence.
const RESET: &str = "\x1b[0m";

fn paint(code: u8, text: &str) -> String {
    format!("{}{}{}", fg256(code), text, RESET)
}

/// Apply header color (section titles) to text.
pub fn header(text: &str) -> String {
    paint(codes::HEADER, text)
}

/// Apply literal color (commands, options) to text.
pub fn literal(text: &str) -> String {
    paint(codes::LITERAL, text)
}

/// Apply context color (default values, hints) to text.
pub fn context(text: &str) -> String {
    paint(codes::CONTEXT, text)
}

/// Maps an option color token to a 256-color code.
pub fn option_code(token: &str) -> Option<u8> {
    match token.trim().to_lowercase().as_str() {
        "gray" | "grey" | "default" => Some(245),
        "brown" => Some(137),
        "orange" => Some(208),
        "yellow" => Some(178),
        "green" => Some(71),
        "blue" => Some(74),
        "purple" => Some(140),
        "pink" => Some(211),
        "red" => Some(167),
        _ => None,
    }
}

/// Paint an option name in its color. Unknown tokens are left plain.
pub fn option(text: &str, token: &str) -> String {
    match option_code(token) {
        Some(code) => paint(code, text),
        None => text.to_string(),
    }
}

/// Colorize an examples help block.
///
/// Lines ending with `:` are headers. On other lines the command (everything
/// before a run of two or more spaces) is a literal, with `<placeholders>`
/// and quoted arguments in the context color.
pub fn examples(text: &str) -> String {
    if !should_colorize() {
        return text.to_string();
    }
    colorize_examples(text)
}

fn colorize_examples(text: &str) -> String {
    let mut lines = Vec::new();
    for line in text.lines() {
        let trimmed = line.trim_start();
        let indent = &line[..line.len() - trimmed.len()];

        if trimmed.ends_with(':') && !trimmed.contains("  ") {
            lines.push(format!("{indent}{}", header(trimmed)));
        } else if let Some(end) = find_description_start(trimmed) {
            let (cmd, desc) = trimmed.split_at(end);
            lines.push(format!("{indent}{}{desc}", colorize_command(cmd)));
        } else {
            lines.push(line.to_string());
        }
    }
    lines.join("\n")
}

/// Colorize a command, marking `<placeholders>` and quoted words as context.
pub fn colorize_command(cmd: &str) -> String {
    cmd.split(' ')
        .map(|word| {
            if word.is_empty() {
                String::new()
            } else if word.starts_with('<') || word.starts_with('"') || word.starts_with('\'') {
                context(word)
            } else {
                literal(word)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Find where the description starts (after 2+ spaces following the command).
pub fn find_description_start(line: &str) -> Option<usize> {
    let start = line.find("  ")?;
    if line[start..].trim().is_empty() {
        None
    } else {
        Some(start)
    }
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod tests;
