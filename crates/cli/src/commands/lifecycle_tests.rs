// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::commands::testing::{open_issue, test_context};
use crate::error::Error;
use civic_core::{ActionKind, ErrorKind, Status};
use yare::parameterized;

#[test]
fn test_assign_records_actor_and_moves_to_in_progress() {
    let ctx = test_context();
    let issue = open_issue(&ctx, "Pothole");

    let updated = assign_impl(&ctx, &issue.id, "u7", Some("closest crew".to_string())).unwrap();
    assert_eq!(updated.status, Status::InProgress);
    assert_eq!(updated.assigned_to.as_deref(), Some("u7"));
    let last = updated.last_action().unwrap();
    assert_eq!(last.kind(), ActionKind::Assign);
    assert_eq!(last.performed_by, "u1");
}

#[test]
fn test_team_assign_uses_config_directory() {
    let ctx = test_context();
    let issue = open_issue(&ctx, "Pothole");

    let updated = team_impl(&ctx, &issue.id, "teamX", None).unwrap();
    assert_eq!(updated.assigned_to.as_deref(), Some("u7"));
    assert_eq!(updated.assigned_team, vec!["u7", "u9"]);

    let err = team_impl(&ctx, &issue.id, "teamZ", None).unwrap_err();
    assert!(matches!(err, Error::Core(ref e) if e.kind() == ErrorKind::TeamNotFound));
}

#[parameterized(
    start = { "start", Status::InProgress },
    complete = { "complete", Status::Resolved },
    verify = { "VERIFY", Status::Resolved },
    close = { "close", Status::Closed },
)]
fn test_act_parses_step(step: &str, expected: Status) {
    let ctx = test_context();
    let issue = open_issue(&ctx, "Pothole");
    assert_eq!(act_impl(&ctx, &issue.id, step, None).unwrap().status, expected);
}

#[test]
fn test_act_rejects_unknown_step() {
    let ctx = test_context();
    let issue = open_issue(&ctx, "Pothole");
    let err = act_impl(&ctx, &issue.id, "finish", None).unwrap_err();
    assert!(err.to_string().contains("invalid work step"));
    assert_eq!(ctx.engine.history(&issue.id).unwrap().len(), 1);
}

#[test]
fn test_rollback_undoes_completion() {
    let ctx = test_context();
    let issue = open_issue(&ctx, "Pothole");
    act_impl(&ctx, &issue.id, "start", None).unwrap();
    act_impl(&ctx, &issue.id, "complete", Some("patched".to_string())).unwrap();

    let restored = rollback_impl(&ctx, &issue.id, None).unwrap();
    assert_eq!(restored.status, Status::InProgress);
    assert_eq!(restored.history.len(), 4);
    assert_eq!(restored.notes.as_deref(), Some("patched"));
}

#[test]
fn test_pause_requires_reason() {
    let ctx = test_context();
    let issue = open_issue(&ctx, "Pothole");
    let err = pause(&ctx, &issue.id, "   ").unwrap_err();
    assert!(matches!(err, Error::Core(ref e) if e.kind() == ErrorKind::Validation));
}

#[test]
fn test_comment_on_missing_issue_is_not_found() {
    let ctx = test_context();
    let err = comment(&ctx, "city-00000000", "hello").unwrap_err();
    assert!(matches!(err, Error::Core(ref e) if e.kind() == ErrorKind::NotFound));
}
