// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use civic_core::{NewSupportRequest, SupportRequest};

use crate::cli::OutputFormat;
use crate::display::{format_notice, format_support_line};
use crate::error::Result;

use super::Context;

/// A support request as given on the command line.
#[derive(Debug, Clone, Default)]
pub struct SupportArgs {
    pub request_type: String,
    pub to: String,
    pub description: String,
    pub priority: String,
    pub from: Option<String>,
    pub by: Option<String>,
}

pub fn run(ctx: &Context, id: &str, args: SupportArgs, output: OutputFormat) -> Result<()> {
    let request = run_impl(ctx, id, args)?;
    match output {
        OutputFormat::Json => println!("{}", serde_json::to_string(&request)?),
        OutputFormat::Id => println!("{}", request.id),
        OutputFormat::Text => {
            println!("{}: {}", id, format_support_line(&request));
            let issue = ctx.engine.get_issue(id)?;
            if let Some(notice) = issue
                .last_action()
                .and_then(|action| civic_core::notice::for_action(&issue, action))
            {
                println!("  {}", format_notice(&notice));
            }
        }
    }
    Ok(())
}

pub(crate) fn run_impl(ctx: &Context, id: &str, args: SupportArgs) -> Result<SupportRequest> {
    let req = NewSupportRequest {
        issue_id: id.to_string(),
        request_type: args.request_type.parse()?,
        priority: args.priority.parse()?,
        description: args.description,
        requested_by: args.by,
        requested_from: args.from,
        requested_to: args.to,
    };
    Ok(ctx.engine.create_support_request(req, &ctx.actor()?)?)
}

#[cfg(test)]
#[path = "support_tests.rs"]
mod tests;
