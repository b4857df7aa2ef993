// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use crate::colors;
use crate::help;
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// Parse a string that must not be empty or whitespace-only.
fn non_empty_string(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("cannot be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Id,
}

#[derive(Parser)]
#[command(name = "civic")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Track civic issues from report to resolution with a complete audit trail")]
#[command(help_template = help::template())]
#[command(before_help = help::commands())]
#[command(after_help = help::quickstart())]
#[command(styles = help::styles())]
pub struct Cli {
    /// Run as if civic was started in <path>
    #[arg(short = 'C', long = "directory", global = true, value_name = "path")]
    pub directory: Option<String>,

    /// User id recorded as the performer of mutations
    #[arg(long = "as", global = true, value_name = "user")]
    pub actor: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Filters shared by listing commands.
#[derive(Args, Clone, Debug, Default)]
pub struct ListFilterArgs {
    /// Only issues owned by this department
    #[arg(long, short = 'd')]
    pub department: Option<String>,

    /// Only issues with this status
    #[arg(long, short = 's')]
    pub status: Option<String>,

    /// Only issues with this priority
    #[arg(long, short = 'p')]
    pub priority: Option<String>,

    /// Maximum number of issues to show
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,
}

/// Location of a reported problem.
#[derive(Args, Clone, Debug, Default)]
pub struct LocationArgs {
    /// Latitude of the problem
    #[arg(long, requires = "lon", allow_hyphen_values = true)]
    pub lat: Option<f64>,

    /// Longitude of the problem
    #[arg(long, requires = "lat", allow_hyphen_values = true)]
    pub lon: Option<f64>,

    /// Street address of the problem
    #[arg(long)]
    pub address: Option<String>,
}

#[derive(Subcommand)]
pub enum Command {
    // ─────────────────────────────────────────────────────────────────────────
    // Issues
    // ─────────────────────────────────────────────────────────────────────────
    /// Report a new issue
    #[command(after_help = colors::examples("\
Examples:
  civic new \"Pothole\" -d public-works                  Report with default priority
  civic new \"Water main\" -d utilities -p urgent        Report an urgent issue
  civic new \"Graffiti\" -d parks -c \"Parks Cleanup\"     Tag from the category
  civic new \"Light out\" -d public-works -a u7          Report and assign
  civic new \"Pothole\" -d public-works -o id            Output only the ID"))]
    New {
        /// Short summary of the problem
        #[arg(value_parser = non_empty_string)]
        title: String,

        /// Owning department
        #[arg(long, short = 'd', value_parser = non_empty_string)]
        department: String,

        /// Priority (low, medium, high, urgent)
        #[arg(long, short = 'p', default_value = "medium")]
        priority: String,

        /// Longer description of the problem
        #[arg(long)]
        description: Option<String>,

        /// Category (e.g. "Road Maintenance")
        #[arg(long, short = 'c')]
        category: Option<String>,

        /// Tag(s) for the issue (comma-separated or repeated)
        #[arg(long, short = 't', value_delimiter = ',')]
        tag: Vec<String>,

        /// Who reported the problem (defaults to the actor)
        #[arg(long)]
        reporter: Option<String>,

        /// Initial assignee
        #[arg(long, short = 'a')]
        assignee: Option<String>,

        /// Due date (RFC 3339; derived from priority if omitted)
        #[arg(long)]
        due: Option<String>,

        /// Expected resolution time in hours (derived from priority if omitted)
        #[arg(long)]
        estimate: Option<u32>,

        #[command(flatten)]
        location: LocationArgs,

        /// Output format (text, json, id)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// List issues
    #[command(after_help = colors::examples("\
Examples:
  civic list                            All issues
  civic list -d police -s open          Open police issues
  civic list -p urgent -o json          Urgent issues as JSON"))]
    List {
        #[command(flatten)]
        filter: ListFilterArgs,

        /// Output format (text, json, id)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Show issue details
    Show {
        /// Issue ID
        id: String,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Show an issue's action history
    Log {
        /// Issue ID
        id: String,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Assign an issue to a user (moves it to in_progress)
    #[command(after_help = colors::examples("\
Examples:
  civic assign <id> u7                        Assign to u7
  civic assign <id> u9 -r \"u7 is on leave\"    Reassign with a reason"))]
    Assign {
        /// Issue ID
        id: String,

        /// User id of the new assignee
        assignee: String,

        /// Why the issue is being assigned
        #[arg(long, short = 'r')]
        reason: Option<String>,
    },

    /// Hand an issue to a team (the lead becomes the assignee)
    Team {
        /// Issue ID
        id: String,

        /// Team ID
        team: String,

        /// Why the team is taking the issue
        #[arg(long, short = 'r')]
        reason: Option<String>,
    },

    /// Record a work step
    #[command(after_help = colors::examples("\
Examples:
  civic act <id> start                         Start work (in_progress)
  civic act <id> complete -n \"Patched hole\"    Resolve with notes
  civic act <id> verify                        Verify (stays resolved)
  civic act <id> close                         Close"))]
    Act {
        /// Issue ID
        id: String,

        /// Step (start, complete, verify, close)
        step: String,

        /// Field notes appended to the issue
        #[arg(long, short = 'n')]
        notes: Option<String>,
    },

    /// Put an issue on hold
    Pause {
        /// Issue ID
        id: String,

        /// Why work is on hold
        reason: String,
    },

    /// Restore an issue's previous status
    Rollback {
        /// Issue ID
        id: String,

        /// Action ID to record as the rollback target
        #[arg(long)]
        target: Option<String>,
    },

    /// Edit an issue's fields
    #[command(after_help = colors::examples("\
Examples:
  civic edit <id> --title \"Pothole on 5th\"     Change the title
  civic edit <id> -p urgent                    Raise the priority
  civic edit <id> -t road,school-zone          Replace the tags"))]
    Edit {
        /// Issue ID
        id: String,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New description
        #[arg(long)]
        description: Option<String>,

        /// New priority (low, medium, high, urgent)
        #[arg(long, short = 'p')]
        priority: Option<String>,

        /// New category
        #[arg(long, short = 'c')]
        category: Option<String>,

        /// Replacement tag set (comma-separated or repeated)
        #[arg(long, short = 't', value_delimiter = ',')]
        tag: Option<Vec<String>>,

        /// New due date (RFC 3339)
        #[arg(long)]
        due: Option<String>,
    },

    /// Request help from another department
    #[command(after_help = colors::examples("\
Examples:
  civic support <id> escalation --to police -m \"Traffic control\"
  civic support <id> resource-request --to utilities -p urgent -m \"Pump\""))]
    Support {
        /// Issue ID
        id: String,

        /// Request type (escalation, consultation, resource_request, technical_support)
        #[arg(value_name = "TYPE")]
        request_type: String,

        /// Department asked for help
        #[arg(long, value_parser = non_empty_string)]
        to: String,

        /// What is needed
        #[arg(long = "message", short = 'm')]
        description: String,

        /// Request priority (low, medium, high, urgent)
        #[arg(long, short = 'p', default_value = "medium")]
        priority: String,

        /// Department asking (defaults to the issue's department)
        #[arg(long)]
        from: Option<String>,

        /// User asking (defaults to the actor)
        #[arg(long)]
        by: Option<String>,

        /// Output format (text, json, id)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Add a comment to an issue
    Comment {
        /// Issue ID
        id: String,

        /// Comment text
        text: String,
    },

    // ─────────────────────────────────────────────────────────────────────────
    // Directory & setup
    // ─────────────────────────────────────────────────────────────────────────
    /// Initialize the tracker
    Init {
        /// Prefix for issue IDs
        #[arg(long, default_value = "civic")]
        prefix: String,

        /// Default actor recorded on mutations
        #[arg(long = "actor", value_name = "user")]
        default_actor: Option<String>,

        /// Path of the SQLite database (relative to the project root)
        #[arg(long)]
        database: Option<String>,

        /// Directory to initialize (defaults to the current directory)
        #[arg(long)]
        path: Option<String>,
    },

    /// Show dashboard counters
    Stats {
        /// Only count issues owned by this department
        #[arg(long, short = 'd')]
        department: Option<String>,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// List teams
    Teams {
        /// Only teams of this department
        #[arg(long, short = 'd')]
        department: Option<String>,

        /// Output format (text, json, id)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// List users
    Users {
        /// Only users of this department
        #[arg(long, short = 'd')]
        department: Option<String>,

        /// Output format (text, json, id)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Output JSON Schema for structured output
    #[command(subcommand)]
    Schema(SchemaCommand),

    /// Generate shell completions
    Completion {
        /// Target shell
        shell: Shell,
    },
}

/// Schema output targets.
#[derive(Subcommand, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchemaCommand {
    /// Output JSON Schema for 'civic show' JSON output
    Issue,
    /// Output JSON Schema for one entry of 'civic log' JSON output
    Action,
    /// Output JSON Schema for 'civic support' JSON output
    Support,
    /// Output JSON Schema for 'civic stats' JSON output
    Stats,
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
