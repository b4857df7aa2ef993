// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::{DateTime, Utc};
use civic_core::{stats, DashboardStats, IssueFilter};

use crate::cli::OutputFormat;
use crate::display::format_stats;
use crate::error::Result;

use super::Context;

pub fn run(ctx: &Context, department: Option<String>, output: OutputFormat) -> Result<()> {
    let stats = run_impl(ctx, department, Utc::now())?;
    match output {
        OutputFormat::Json => println!("{}", serde_json::to_string(&stats)?),
        OutputFormat::Text | OutputFormat::Id => println!("{}", format_stats(&stats)),
    }
    Ok(())
}

pub(crate) fn run_impl(
    ctx: &Context,
    department: Option<String>,
    now: DateTime<Utc>,
) -> Result<DashboardStats> {
    let mut filter = IssueFilter::new();
    if let Some(department) = department {
        filter = filter.department(department);
    }
    let issues = ctx.engine.list_issues(&filter)?;
    Ok(stats::compute(&issues, now))
}

#[cfg(test)]
#[path = "stats_tests.rs"]
mod tests;
