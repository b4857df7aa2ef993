// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use civic_core::{Issue, Location, NewIssue, Priority};

use crate::cli::{LocationArgs, OutputFormat};
use crate::error::{Error, Result};

use super::{parse_timestamp, Context};

/// Options for reporting a new issue, as given on the command line.
#[derive(Debug, Clone, Default)]
pub struct NewArgs {
    pub title: String,
    pub department: String,
    pub priority: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub tags: Vec<String>,
    pub reporter: Option<String>,
    pub assignee: Option<String>,
    pub due: Option<String>,
    pub estimate: Option<u32>,
    pub location: LocationArgs,
}

pub fn run(ctx: &Context, args: NewArgs, output: OutputFormat) -> Result<()> {
    let issue = run_impl(ctx, args)?;
    match output {
        OutputFormat::Id => println!("{}", issue.id),
        OutputFormat::Json => println!("{}", serde_json::to_string(&issue)?),
        OutputFormat::Text => println!("Created {}: {} [{}]", issue.id, issue.title, issue.priority),
    }
    Ok(())
}

pub(crate) fn run_impl(ctx: &Context, args: NewArgs) -> Result<Issue> {
    let priority: Priority = args.priority.parse()?;
    let reporter = match args.reporter {
        Some(r) => r,
        None => ctx.actor()?,
    };

    let mut new = NewIssue::new(args.title, priority, args.department, reporter);
    new.description = args.description.unwrap_or_default();
    new.category = args.category.unwrap_or_default();
    new.tags = args.tags;
    new.assigned_to = args.assignee;
    new.due_date = args.due.as_deref().map(parse_timestamp).transpose()?;
    new.estimated_resolution_hours = args.estimate;
    new.location = location(args.location)?;

    Ok(ctx.engine.open_issue(&ctx.config.prefix, new)?)
}

fn location(args: LocationArgs) -> Result<Option<Location>> {
    match (args.lat, args.lon) {
        (Some(latitude), Some(longitude)) => {
            if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
                return Err(Error::InvalidLocation {
                    reason: format!("({}, {}) is out of range", latitude, longitude),
                });
            }
            Ok(Some(Location {
                latitude,
                longitude,
                address: args.address.unwrap_or_default(),
            }))
        }
        (None, None) => match args.address {
            Some(_) => Err(Error::InvalidLocation {
                reason: "an address needs --lat and --lon".to_string(),
            }),
            None => Ok(None),
        },
        _ => Err(Error::InvalidLocation {
            reason: "--lat and --lon go together".to_string(),
        }),
    }
}

#[cfg(test)]
#[path = "new_tests.rs"]
mod tests;
