// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal color utilities for help and command output.
//!
//! Respects environment variables:
//! - `NO_COLOR=1`: Disables colors
//! - `COLOR=1`: Forces colors even without TTY

use std::io::IsTerminal;

use crate::env;

/// ANSI 256-color codes.
pub mod codes {
    /// Section headers: pastel cyan/steel blue
    pub const HEADER: u8 = 74;
    /// Commands/literals: light grey
    pub const LITERAL: u8 = 250;
    /// Secondary detail: medium grey
    pub const CONTEXT: u8 = 245;
    /// Completed goals: soft green
    pub const DONE: u8 = 114;
    /// Queued changes and warnings: amber
    pub const PENDING: u8 = 179;
}

/// Check if colors should be enabled based on TTY and environment variables.
pub fn should_colorize() -> bool {
    if env::no_color() {
        return false;
    }
    if env::force_color() {
        return true;
    }
    std::io::stdout().is_terminal()
}

fn fg256(code: u8) -> String {
    format!("\x1b[38;5;{code}m")
}

const RESET: &str = "\x1b[0m";

fn styled(code: u8, text: &str) -> String {
    format!("{}{}{}", fg256(code), text, RESET)
}

/// Wrap `text` in a color, or return it unchanged when colors are off.
fn paint(code: u8, text: &str) -> String {
    if !should_colorize() {
        return text.to_string();
    }
    styled(code, text)
}

pub fn header(text: &str) -> String {
    paint(codes::HEADER, text)
}

pub fn literal(text: &str) -> String {
    paint(codes::LITERAL, text)
}

pub fn context(text: &str) -> String {
    paint(codes::CONTEXT, text)
}

pub fn done(text: &str) -> String {
    paint(codes::DONE, text)
}

pub fn pending(text: &str) -> String {
    paint(codes::PENDING, text)
}

/// Colorize an examples help block.
///
/// Lines ending in `:` are headers. In `  command    description` lines the
/// command part (up to the first run of two spaces) is a literal.
pub fn examples(text: &str) -> String {
    if !should_colorize() {
        return text.to_string();
    }
    colorize_examples(text)
}

fn colorize_examples(text: &str) -> String {
    text.lines()
        .map(|line| {
            let trimmed = line.trim_start();
            let indent = &line[..line.len() - trimmed.len()];
            if trimmed.ends_with(':') && !trimmed.contains("  ") {
                return format!("{indent}{}", styled(codes::HEADER, trimmed));
            }
            match trimmed.find("  ") {
                Some(end) => format!(
                    "{indent}{}{}",
                    styled(codes::LITERAL, &trimmed[..end]),
                    &trimmed[end..]
                ),
                None => line.to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod tests;
