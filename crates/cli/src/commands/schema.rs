// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema command implementation.
//!
//! Outputs JSON Schema for commands that support JSON output.

use civic_core::{DashboardStats, Issue, IssueAction, SupportRequest};
use schemars::schema::RootSchema;
use schemars::schema_for;

use crate::cli::SchemaCommand;
use crate::error::Result;

/// Run the schema command.
pub fn run(cmd: SchemaCommand) -> Result<()> {
    let json = serde_json::to_string_pretty(&schema(cmd))?;
    println!("{}", json);
    Ok(())
}

pub(crate) fn schema(cmd: SchemaCommand) -> RootSchema {
    match cmd {
        SchemaCommand::Issue => schema_for!(Issue),
        SchemaCommand::Action => schema_for!(IssueAction),
        SchemaCommand::Support => schema_for!(SupportRequest),
        SchemaCommand::Stats => schema_for!(DashboardStats),
    }
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
