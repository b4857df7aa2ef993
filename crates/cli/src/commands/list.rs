// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use civic_core::{Issue, IssueFilter};

use crate::cli::{ListFilterArgs, OutputFormat};
use crate::display::format_issue_line;
use crate::error::Result;

use super::Context;

pub fn run(ctx: &Context, args: ListFilterArgs, output: OutputFormat) -> Result<()> {
    let issues = run_impl(ctx, args)?;
    match output {
        OutputFormat::Json => println!("{}", serde_json::to_string(&issues)?),
        OutputFormat::Id => {
            for issue in &issues {
                println!("{}", issue.id);
            }
        }
        OutputFormat::Text => {
            if issues.is_empty() {
                println!("No issues found");
            }
            for issue in &issues {
                println!("{}", format_issue_line(issue));
            }
        }
    }
    Ok(())
}

pub(crate) fn run_impl(ctx: &Context, args: ListFilterArgs) -> Result<Vec<Issue>> {
    let filter = build_filter(args)?;
    Ok(ctx.engine.list_issues(&filter)?)
}

pub(crate) fn build_filter(args: ListFilterArgs) -> Result<IssueFilter> {
    let mut filter = IssueFilter::new();
    if let Some(department) = args.department {
        filter = filter.department(department);
    }
    if let Some(status) = args.status {
        filter = filter.status(status.parse()?);
    }
    if let Some(priority) = args.priority {
        filter = filter.priority(priority.parse()?);
    }
    if let Some(limit) = args.limit {
        filter = filter.limit(limit);
    }
    Ok(filter)
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
