// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Read-only listings of the configured teams and users.

use civic_core::{TeamDirectory, UserDirectory};

use crate::cli::OutputFormat;
use crate::display::{format_team_line, format_user_line};
use crate::error::Result;

use super::Context;

pub fn teams(ctx: &Context, department: Option<&str>, output: OutputFormat) -> Result<()> {
    let teams = ctx.engine.teams().list_teams(department)?;
    match output {
        OutputFormat::Json => println!("{}", serde_json::to_string(&teams)?),
        OutputFormat::Id => teams.iter().for_each(|t| println!("{}", t.id)),
        OutputFormat::Text => teams.iter().for_each(|t| println!("{}", format_team_line(t))),
    }
    Ok(())
}

pub fn users(ctx: &Context, department: Option<&str>, output: OutputFormat) -> Result<()> {
    let users = ctx.engine.teams().list_users(department)?;
    match output {
        OutputFormat::Json => println!("{}", serde_json::to_string(&users)?),
        OutputFormat::Id => users.iter().for_each(|u| println!("{}", u.id)),
        OutputFormat::Text => users.iter().for_each(|u| println!("{}", format_user_line(u))),
    }
    Ok(())
}
