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

    let fg = |code: u8| Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(code))));

    Styles::styled()
        .header(fg(colors::codes::HEADER))
        .usage(fg(colors::codes::HEADER))
        .literal(fg(colors::codes::LITERAL))
        .placeholder(fg(colors::codes::CONTEXT))
        .valid(fg(colors::codes::CONTEXT))
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

/// (name, summary) rows for one help section.
type Section = (&'static str, &'static [(&'static str, &'static str)]);

const SECTIONS: [Section; 3] = [
    (
        "Roster:",
        &[
            ("students", "List students"),
            ("show", "Show a student's details and goals"),
            ("groups", "List training groups"),
            ("exercises", "List the exercise catalog"),
            ("set-group", "Move a student to another group"),
            ("record", "Record a monthly count"),
        ],
    ),
    (
        "Goals:",
        &[
            ("goals", "List goals"),
            ("goal", "Add, complete, reopen or delete a goal"),
        ],
    ),
    (
        "Sync & Setup:",
        &[
            ("init", "Set up local state"),
            ("sync", "Push queued changes and refresh from the remote"),
            ("status", "Show sync state and queue size"),
            ("pending", "List queued changes"),
            ("completions", "Generate shell completions"),
        ],
    ),
];

/// Commands list shown before options in main help.
pub fn commands() -> String {
    SECTIONS
        .iter()
        .map(|(title, rows)| {
            let mut block = colors::header(title);
            for (name, summary) in rows.iter() {
                block.push_str(&format!(
                    "\n  {}{}{}",
                    colors::literal(name),
                    " ".repeat(13usize.saturating_sub(name.len())),
                    summary
                ));
            }
            block
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Quickstart help shown after options in main help.
pub fn quickstart() -> String {
    colors::examples(
        "\
Get started:
  gym-coach init --remote-url <url>    Set up and download the roster
  gym-coach students --group А-1       List one group
  gym-coach record 1 Окт pullups 18    Record October pull-ups
  gym-coach sync                       Push queued changes",
    )
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
