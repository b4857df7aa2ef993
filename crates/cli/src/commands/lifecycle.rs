// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Commands that move an issue through its workflow.
//!
//! Each one is a single engine call: the engine validates, records the
//! action and persists. These wrappers only resolve the actor, parse
//! vocabulary words and print what was recorded.

use civic_core::{
    AssignRequest, CommentRequest, Issue, PauseRequest, RollbackRequest, TakeActionRequest,
    TeamAssignRequest, WorkStep,
};

use crate::error::Result;

use super::{report, Context};

pub fn assign(ctx: &Context, id: &str, assignee: &str, reason: Option<String>) -> Result<()> {
    report(&assign_impl(ctx, id, assignee, reason)?);
    Ok(())
}

pub(crate) fn assign_impl(
    ctx: &Context,
    id: &str,
    assignee: &str,
    reason: Option<String>,
) -> Result<Issue> {
    let req = AssignRequest {
        issue_id: id.to_string(),
        assigned_to: assignee.to_string(),
        reason,
    };
    Ok(ctx.engine.assign(req, &ctx.actor()?)?)
}

pub fn team(ctx: &Context, id: &str, team_id: &str, reason: Option<String>) -> Result<()> {
    report(&team_impl(ctx, id, team_id, reason)?);
    Ok(())
}

pub(crate) fn team_impl(
    ctx: &Context,
    id: &str,
    team_id: &str,
    reason: Option<String>,
) -> Result<Issue> {
    let req = TeamAssignRequest {
        issue_id: id.to_string(),
        team_id: team_id.to_string(),
        reason,
    };
    Ok(ctx.engine.assign_team(req, &ctx.actor()?)?)
}

pub fn act(ctx: &Context, id: &str, step: &str, notes: Option<String>) -> Result<()> {
    report(&act_impl(ctx, id, step, notes)?);
    Ok(())
}

pub(crate) fn act_impl(ctx: &Context, id: &str, step: &str, notes: Option<String>) -> Result<Issue> {
    let step: WorkStep = step.parse()?;
    let req = TakeActionRequest {
        issue_id: id.to_string(),
        step,
        notes,
    };
    Ok(ctx.engine.take_action(req, &ctx.actor()?)?)
}

pub fn pause(ctx: &Context, id: &str, reason: &str) -> Result<()> {
    let req = PauseRequest {
        issue_id: id.to_string(),
        reason: reason.to_string(),
    };
    report(&ctx.engine.pause(req, &ctx.actor()?)?);
    Ok(())
}

pub fn rollback(ctx: &Context, id: &str, target: Option<String>) -> Result<()> {
    report(&rollback_impl(ctx, id, target)?);
    Ok(())
}

pub(crate) fn rollback_impl(ctx: &Context, id: &str, target: Option<String>) -> Result<Issue> {
    let req = RollbackRequest {
        issue_id: id.to_string(),
        target_action_id: target,
    };
    Ok(ctx.engine.rollback(req, &ctx.actor()?)?)
}

pub fn comment(ctx: &Context, id: &str, text: &str) -> Result<()> {
    let req = CommentRequest {
        issue_id: id.to_string(),
        text: text.to_string(),
    };
    report(&ctx.engine.comment(req, &ctx.actor()?)?);
    Ok(())
}

#[cfg(test)]
#[path = "lifecycle_tests.rs"]
mod tests;
