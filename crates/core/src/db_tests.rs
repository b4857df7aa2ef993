// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::action::{EditChanges, FieldChange, Transition, WorkStep};
use crate::issue::{Priority, Status};
use crate::support::{SupportStatus, SupportType};
use crate::testing::{action, at, bare_issue, comment, status_change};

fn detailed_issue(id: &str) -> Issue {
    let mut issue = bare_issue(id);
    issue.assigned_to = Some("u7".to_string());
    issue.assigned_team = vec!["u7".to_string(), "u9".to_string()];
    issue.location = Some(Location {
        latitude: 40.7128,
        longitude: -74.006,
        address: "123 Main St".to_string(),
    });
    issue.notes = Some("cones placed".to_string());
    issue.tags.insert("school-zone".to_string());
    issue
        .history
        .append(action(
            "act-1",
            at(8, 0),
            ActionPayload::Assign { assigned_to: Some("u7".to_string()), reason: None, transition: None },
        ))
        .unwrap();
    issue
}

fn support(id: &str) -> SupportRequest {
    SupportRequest {
        id: id.to_string(),
        requested_by: "u7".to_string(),
        requested_from: "public-works".to_string(),
        requested_to: "police".to_string(),
        request_type: SupportType::TechnicalSupport,
        priority: Priority::Medium,
        description: "Signal timing".to_string(),
        status: SupportStatus::Pending,
        created_at: at(9, 0),
    }
}

#[test]
fn insert_and_get_round_trip() {
    let store = SqliteStore::open_in_memory().unwrap();
    let issue = detailed_issue("civ-1");
    store.insert(&issue).unwrap();

    similar_asserts::assert_eq!(store.get("civ-1").unwrap(), issue);
    assert!(store.exists("civ-1").unwrap());
    assert!(!store.exists("civ-2").unwrap());
}

#[test]
fn get_missing_is_not_found() {
    let store = SqliteStore::open_in_memory().unwrap();
    assert!(matches!(store.get("civ-1"), Err(Error::IssueNotFound(_))));
}

#[test]
fn insert_rejects_duplicates() {
    let store = SqliteStore::open_in_memory().unwrap();
    store.insert(&bare_issue("civ-1")).unwrap();
    assert!(matches!(store.insert(&bare_issue("civ-1")), Err(Error::DuplicateIssue(_))));
}

#[test]
fn put_appends_actions_and_support_requests() {
    let store = SqliteStore::open_in_memory().unwrap();
    let mut issue = detailed_issue("civ-1");
    store.insert(&issue).unwrap();

    issue.status = Status::InProgress;
    issue.title = "Pothole on Main St".to_string();
    issue.tags.remove("school-zone");
    issue.history.append(action("act-2", at(9, 0), status_change(WorkStep::Start, Status::Open))).unwrap();
    issue
        .history
        .append(action(
            "act-3",
            at(9, 5),
            ActionPayload::Edit {
                changes: EditChanges {
                    title: Some(FieldChange {
                        from: "Pothole on Main Street".to_string(),
                        to: "Pothole on Main St".to_string(),
                    }),
                    ..EditChanges::default()
                },
            },
        ))
        .unwrap();
    issue.support_requests.push(support("sup-1"));
    store.put("civ-1", &issue).unwrap();

    similar_asserts::assert_eq!(store.get("civ-1").unwrap(), issue);
}

#[test]
fn put_rejects_history_rewrite() {
    let store = SqliteStore::open_in_memory().unwrap();
    let mut issue = detailed_issue("civ-1");
    issue.history.append(action("act-2", at(9, 0), comment("original"))).unwrap();
    store.insert(&issue).unwrap();

    let mut rewritten = issue.clone();
    rewritten.history = crate::testing::history_of([
        issue.history.get(0).cloned().unwrap(),
        action("act-2", at(9, 0), comment("rewritten")),
    ]);
    assert!(matches!(store.put("civ-1", &rewritten), Err(Error::HistoryRewrite { .. })));

    let mut truncated = issue.clone();
    truncated.status = Status::Closed;
    truncated.history = crate::testing::history_of(issue.history.get(0).cloned());
    assert!(matches!(store.put("civ-1", &truncated), Err(Error::HistoryRewrite { .. })));

    // Nothing from the rejected writes leaked through.
    similar_asserts::assert_eq!(store.get("civ-1").unwrap(), issue);
}

#[test]
fn list_filters_in_insertion_order() {
    let store = SqliteStore::open_in_memory().unwrap();
    let mut second = bare_issue("civ-b");
    second.department_id = "police".to_string();
    second.priority = Priority::Low;
    let mut third = bare_issue("civ-a");
    third.status = Status::Paused;
    for issue in [bare_issue("civ-c"), second, third] {
        store.insert(&issue).unwrap();
    }

    let ids = |filter: IssueFilter| -> Vec<String> {
        store.list(&filter).unwrap().into_iter().map(|i| i.id).collect()
    };
    assert_eq!(ids(IssueFilter::new()), vec!["civ-c", "civ-b", "civ-a"]);
    assert_eq!(ids(IssueFilter::new().department("police")), vec!["civ-b"]);
    assert_eq!(ids(IssueFilter::new().status(Status::Paused)), vec!["civ-a"]);
    assert_eq!(ids(IssueFilter::new().priority(Priority::High)), vec!["civ-c", "civ-a"]);
    assert_eq!(ids(IssueFilter::new().limit(1)), vec!["civ-c"]);
    assert_eq!(ids(IssueFilter::new().limit(0)), vec!["civ-c", "civ-b", "civ-a"]);
}

#[test]
fn rollback_payload_survives_storage() {
    let store = SqliteStore::open_in_memory().unwrap();
    let mut issue = bare_issue("civ-1");
    issue.history
        .append(action(
            "act-1",
            at(9, 0),
            ActionPayload::Rollback {
                transition: Transition::new(Status::Paused, Status::InProgress),
                rolled_back_from: Some("act-0".to_string()),
            },
        ))
        .unwrap();
    store.insert(&issue).unwrap();

    let stored = store.get("civ-1").unwrap();
    assert_eq!(stored.history.get(0).unwrap().status_to(), Some(Status::InProgress));
}

#[test]
fn open_creates_parent_dir_and_persists() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("issues.db");

    {
        let store = SqliteStore::open(&path).unwrap();
        store.insert(&detailed_issue("civ-1")).unwrap();
    }

    let reopened = SqliteStore::open(&path).unwrap();
    similar_asserts::assert_eq!(reopened.get("civ-1").unwrap(), detailed_issue("civ-1"));
}

#[test]
fn corrupted_status_is_reported() {
    let store = SqliteStore::open_in_memory().unwrap();
    store.insert(&bare_issue("civ-1")).unwrap();
    store
        .conn()
        .unwrap()
        .execute("UPDATE issues SET status = 'bogus' WHERE id = 'civ-1'", [])
        .unwrap();

    let err = store.get("civ-1").unwrap_err();
    assert!(err.is_storage());
}
