// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use civic_core::{EditRequest, Issue, IssueUpdates, Priority};

use crate::error::Result;

use super::{parse_timestamp, report, Context};

/// Field updates as given on the command line. `None` leaves a field alone.
#[derive(Debug, Clone, Default)]
pub struct EditArgs {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<String>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub due: Option<String>,
}

pub fn run(ctx: &Context, id: &str, args: EditArgs) -> Result<()> {
    report(&run_impl(ctx, id, args)?);
    Ok(())
}

pub(crate) fn run_impl(ctx: &Context, id: &str, args: EditArgs) -> Result<Issue> {
    let priority = args
        .priority
        .as_deref()
        .map(str::parse::<Priority>)
        .transpose()?;
    let due_date = args.due.as_deref().map(parse_timestamp).transpose()?;

    let req = EditRequest {
        issue_id: id.to_string(),
        updates: IssueUpdates {
            title: args.title,
            description: args.description,
            priority,
            category: args.category,
            tags: args.tags,
            due_date,
        },
    };
    Ok(ctx.engine.edit(req, &ctx.actor()?)?)
}

#[cfg(test)]
#[path = "edit_tests.rs"]
mod tests;
