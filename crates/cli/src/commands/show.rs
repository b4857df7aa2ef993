// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use crate::cli::OutputFormat;
use crate::display::{format_action_line, format_issue_details};
use crate::error::Result;

use super::Context;

pub fn run(ctx: &Context, id: &str, output: OutputFormat) -> Result<()> {
    let issue = ctx.engine.get_issue(id)?;
    match output {
        OutputFormat::Json => println!("{}", serde_json::to_string(&issue)?),
        OutputFormat::Id => println!("{}", issue.id),
        OutputFormat::Text => println!("{}", format_issue_details(&issue)),
    }
    Ok(())
}

/// Prints an issue's action history, oldest first.
pub fn log(ctx: &Context, id: &str, output: OutputFormat) -> Result<()> {
    let history = ctx.engine.history(id)?;
    match output {
        OutputFormat::Json => println!("{}", serde_json::to_string(&history)?),
        OutputFormat::Id => {
            for action in &history {
                println!("{}", action.id);
            }
        }
        OutputFormat::Text => {
            for action in &history {
                println!("{}", format_action_line(action));
            }
        }
    }
    Ok(())
}
