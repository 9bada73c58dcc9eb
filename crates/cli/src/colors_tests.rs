// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;

/// Strip all ANSI escape sequences from a string
fn strip_ansi(s: &str) -> String {
    let mut result = String::new();
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            while let Some(&next) = chars.peek() {
                chars.next();
                if next == 'm' {
                    break;
                }
            }
        } else {
            result.push(c);
        }
    }
    result
}

#[test]
fn fg256_produces_correct_escape_sequence() {
    assert_eq!(fg256(0), "\x1b[38;5;0m");
    assert_eq!(fg256(74), "\x1b[38;5;74m");
    assert_eq!(fg256(255), "\x1b[38;5;255m");
}

#[test]
fn styled_wraps_and_resets() {
    assert_eq!(styled(codes::DONE, "ok"), "\x1b[38;5;114mok\x1b[0m");
}

#[test]
fn examples_header_line_is_header_colored() {
    let out = colorize_examples("Examples:");
    assert_eq!(out, styled(codes::HEADER, "Examples:"));
}

#[test]
fn examples_command_is_literal_description_plain() {
    let out = colorize_examples("  gym-coach students    List students");
    assert!(out.starts_with("  \x1b[38;5;250mgym-coach students\x1b[0m"));
    assert!(out.ends_with("    List students"));
}

#[test]
fn examples_preserve_text_when_stripped() {
    let text = "Examples:\n  gym-coach sync    Push and pull\nplain line";
    assert_eq!(strip_ansi(&colorize_examples(text)), text);
}

#[test]
fn examples_keep_unmatched_lines() {
    assert_eq!(colorize_examples("just text"), "just text");
}
