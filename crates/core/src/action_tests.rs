// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::testing::{action, at, comment, status_change};
use yare::parameterized;

#[parameterized(
    start = { WorkStep::Start, Status::InProgress },
    complete = { WorkStep::Complete, Status::Resolved },
    verify = { WorkStep::Verify, Status::Resolved },
    close = { WorkStep::Close, Status::Closed },
)]
fn work_step_targets(step: WorkStep, status: Status) {
    assert_eq!(step.target_status(), status);
}

#[parameterized(
    assign = { "assign", ActionKind::Assign },
    reassign = { "reassign", ActionKind::Reassign },
    team_assign = { "team_assign", ActionKind::TeamAssign },
    edit = { "edit", ActionKind::Edit },
    pause = { "pause", ActionKind::Pause },
    rollback = { "rollback", ActionKind::Rollback },
    status_change = { "status_change", ActionKind::StatusChange },
    support_request = { "support_request", ActionKind::SupportRequest },
    comment = { "comment", ActionKind::Comment },
)]
fn action_kind_parses(s: &str, kind: ActionKind) {
    assert_eq!(s.parse::<ActionKind>().unwrap(), kind);
    assert_eq!(kind.as_str(), s);
}

#[test]
fn unknown_step_is_rejected() {
    assert!(matches!("finish".parse::<WorkStep>(), Err(Error::InvalidStep(_))));
}

#[test]
fn payload_serializes_with_type_tag() {
    let payload = ActionPayload::Pause {
        reason: "blocked".to_string(),
        transition: Transition::new(Status::InProgress, Status::Paused),
    };
    let json = serde_json::to_value(&payload).unwrap();
    assert_eq!(json["type"], "pause");
    assert_eq!(json["transition"]["status_from"], "in_progress");
    assert_eq!(json["transition"]["status_to"], "paused");

    let back: ActionPayload = serde_json::from_value(json).unwrap();
    assert_eq!(back, payload);
}

#[test]
fn status_moving_actions_expose_transition() {
    let a = action("act-1", at(9, 0), status_change(WorkStep::Complete, Status::InProgress));
    assert_eq!(a.kind(), ActionKind::StatusChange);
    assert_eq!(a.status_from(), Some(Status::InProgress));
    assert_eq!(a.status_to(), Some(Status::Resolved));
}

#[test]
fn comments_have_no_transition() {
    let a = action("act-1", at(9, 0), comment("looked at it"));
    assert_eq!(a.status_from(), None);
    assert_eq!(a.status_to(), None);
    assert_eq!(a.payload.reason(), None);
}

#[test]
fn intake_assign_has_no_transition() {
    let payload = ActionPayload::Assign { assigned_to: None, reason: None, transition: None };
    assert_eq!(payload.transition(), None);
    let json = serde_json::to_value(&payload).unwrap();
    assert_eq!(json, serde_json::json!({ "type": "assign" }));
}

#[test]
fn edit_changes_list_fields_in_order() {
    let changes = EditChanges {
        priority: Some(FieldChange { from: Priority::Low, to: Priority::High }),
        title: Some(FieldChange { from: "a".to_string(), to: "b".to_string() }),
        ..EditChanges::default()
    };
    assert_eq!(changes.changed_fields(), vec!["title", "priority"]);
    assert!(!changes.is_empty());
    assert!(EditChanges::default().is_empty());
}

#[test]
fn empty_edit_serializes_as_empty_changes() {
    let payload = ActionPayload::Edit { changes: EditChanges::default() };
    let json = serde_json::to_value(&payload).unwrap();
    assert_eq!(json, serde_json::json!({ "type": "edit", "changes": {} }));
}
