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
    let header = fg(colors::codes::HEADER);
    let context = fg(colors::codes::CONTEXT);

    Styles::styled()
        .header(header)
        .usage(header)
        .literal(fg(colors::codes::LITERAL))
        .placeholder(context)
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
    let row = |name: &str, about: &str| format!("  {}{}{}\n", colors::literal(name), " ".repeat(12 - name.len()), about);

    let mut out = colors::header("Issues:");
    out.push('\n');
    for (name, about) in [
        ("new", "Report a new issue"),
        ("list", "List issues"),
        ("show", "Show issue details"),
        ("log", "Show an issue's action history"),
        ("assign", "Assign an issue to a user"),
        ("team", "Hand an issue to a team"),
        ("act", "Record a work step (start, complete, verify, close)"),
        ("pause", "Put an issue on hold"),
        ("rollback", "Restore an issue's previous status"),
        ("edit", "Edit an issue's fields"),
        ("support", "Request help from another department"),
        ("comment", "Add a comment to an issue"),
    ] {
        out.push_str(&row(name, about));
    }

    out.push('\n');
    out.push_str(&colors::header("Directory & Setup:"));
    out.push('\n');
    for (name, about) in [
        ("init", "Initialize the tracker"),
        ("stats", "Show dashboard counters"),
        ("teams", "List teams"),
        ("users", "List users"),
        ("schema", "Output JSON Schema for structured output"),
        ("completion", "Generate shell completions"),
    ] {
        out.push_str(&row(name, about));
    }
    out.pop();
    out
}

/// Quickstart help shown after options in main help.
pub fn quickstart() -> String {
    colors::examples(
        "\
Get started:
  civic init --prefix city                             Initialize tracker
  civic new \"Pothole\" -d public-works -p high          Report an issue
  civic assign <id> u7                                 Assign it
  civic act <id> complete                              Mark it resolved",
    )
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
