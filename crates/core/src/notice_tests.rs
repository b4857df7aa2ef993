// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::action::{EditChanges, Transition, WorkStep};
use crate::support::{SupportRequest, SupportStatus, SupportType};
use crate::testing::{action, at, bare_issue, comment, status_change};

fn assigned_issue() -> Issue {
    let mut issue = bare_issue("civ-1");
    issue.assigned_to = Some("u2".to_string());
    issue
}

#[test]
fn assign_notifies_assignee() {
    let issue = assigned_issue();
    let a = action(
        "act-1",
        at(9, 0),
        ActionPayload::Assign {
            assigned_to: Some("u2".to_string()),
            reason: None,
            transition: Some(Transition::new(Status::Open, Status::InProgress)),
        },
    );
    let notice = for_action(&issue, &a).unwrap();
    assert_eq!(notice.recipient, "u2");
    assert_eq!(notice.level, NoticeLevel::Info);
    assert!(notice.message.contains("civ-1"));
}

#[test]
fn intake_assign_without_assignee_is_silent() {
    let issue = bare_issue("civ-1");
    let a = action("act-1", at(9, 0), ActionPayload::Assign { assigned_to: None, reason: None, transition: None });
    assert!(for_action(&issue, &a).is_none());
}

#[test]
fn team_assign_notifies_lead() {
    let issue = assigned_issue();
    let a = action(
        "act-1",
        at(9, 0),
        ActionPayload::TeamAssign {
            team_id: "teamX".to_string(),
            team_name: "Road Crew".to_string(),
            lead: "u7".to_string(),
            members: vec!["u7".to_string(), "u9".to_string()],
            reason: None,
            transition: Transition::new(Status::Open, Status::InProgress),
        },
    );
    let notice = for_action(&issue, &a).unwrap();
    assert_eq!(notice.recipient, "u7");
    assert!(notice.message.contains("Road Crew"));
}

#[test]
fn pause_warns_assignee() {
    let a = action(
        "act-1",
        at(9, 0),
        ActionPayload::Pause { reason: "blocked".to_string(), transition: Transition::new(Status::InProgress, Status::Paused) },
    );
    let notice = for_action(&assigned_issue(), &a).unwrap();
    assert_eq!(notice.level, NoticeLevel::Warning);
    assert!(notice.message.ends_with("blocked"));

    assert!(for_action(&bare_issue("civ-1"), &a).is_none());
}

#[test]
fn resolution_notifies_reporter() {
    let a = action("act-1", at(9, 0), status_change(WorkStep::Complete, Status::InProgress));
    let notice = for_action(&assigned_issue(), &a).unwrap();
    assert_eq!(notice.recipient, "citizen@example.com");
    assert_eq!(notice.level, NoticeLevel::Success);

    let start = action("act-2", at(9, 0), status_change(WorkStep::Start, Status::Open));
    assert!(for_action(&assigned_issue(), &start).is_none());
}

#[test]
fn support_request_notifies_target_with_priority_level() {
    let mut issue = assigned_issue();
    issue.support_requests.push(SupportRequest {
        id: "sup-1".to_string(),
        requested_by: "u2".to_string(),
        requested_from: "public-works".to_string(),
        requested_to: "police".to_string(),
        request_type: SupportType::ResourceRequest,
        priority: Priority::Urgent,
        description: "traffic control".to_string(),
        status: SupportStatus::Pending,
        created_at: at(9, 0),
    });
    let a = action(
        "act-1",
        at(9, 0),
        ActionPayload::SupportRequest {
            support_request_id: "sup-1".to_string(),
            requested_to: "police".to_string(),
            request_type: SupportType::ResourceRequest,
        },
    );
    let notice = for_action(&issue, &a).unwrap();
    assert_eq!(notice.recipient, "police");
    assert_eq!(notice.level, NoticeLevel::Warning);
    assert!(notice.message.ends_with("needs resource request"));
}

#[test]
fn self_inflicted_actions_are_silent() {
    let issue = assigned_issue();
    let mut a = action(
        "act-1",
        at(9, 0),
        ActionPayload::Assign { assigned_to: Some("u2".to_string()), reason: None, transition: None },
    );
    a.performed_by = "u2".to_string();
    assert!(for_action(&issue, &a).is_none());
}

#[test]
fn edits_and_comments_are_silent() {
    let issue = assigned_issue();
    let edit = action("act-1", at(9, 0), ActionPayload::Edit { changes: EditChanges::default() });
    assert!(for_action(&issue, &edit).is_none());
    assert!(for_action(&issue, &action("act-2", at(9, 0), comment("hi"))).is_none());
}
