// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::action::WorkStep;
use crate::issue::Status;
use crate::testing::{action, at, comment, history_of, status_change};

#[test]
fn append_keeps_order() {
    let history = history_of([
        action("act-1", at(9, 0), comment("one")),
        action("act-2", at(9, 0), comment("two")),
        action("act-3", at(9, 5), comment("three")),
    ]);
    let ids: Vec<&str> = history.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["act-1", "act-2", "act-3"]);
    assert_eq!(history.len(), 3);
}

#[test]
fn append_rejects_going_back_in_time() {
    let mut history = history_of([action("act-1", at(9, 30), comment("one"))]);
    let err = history.append(action("act-2", at(9, 0), comment("two"))).unwrap_err();

    assert!(matches!(err, Error::HistoryOrder { ref action_id, .. } if action_id == "act-2"));
    assert_eq!(history.len(), 1);
}

#[test]
fn next_timestamp_clamps_to_newest() {
    let history = history_of([action("act-1", at(9, 30), comment("one"))]);
    assert_eq!(history.next_timestamp(at(9, 0)), at(9, 30));
    assert_eq!(history.next_timestamp(at(10, 0)), at(10, 0));
    assert_eq!(ActionHistory::new().next_timestamp(at(8, 0)), at(8, 0));
}

#[test]
fn latest_of_scans_newest_first() {
    let history = history_of([
        action("act-1", at(9, 0), status_change(WorkStep::Start, Status::Open)),
        action("act-2", at(9, 1), comment("between")),
        action("act-3", at(9, 2), status_change(WorkStep::Complete, Status::InProgress)),
        action("act-4", at(9, 3), comment("after")),
    ]);
    assert_eq!(history.latest_of(ActionKind::StatusChange).unwrap().id, "act-3");
    assert!(history.latest_of(ActionKind::Pause).is_none());
    assert_eq!(history.find("act-2").unwrap().description, "comment entry");
}

#[test]
fn prefix_relation() {
    let short = history_of([action("act-1", at(9, 0), comment("one"))]);
    let long = history_of([
        action("act-1", at(9, 0), comment("one")),
        action("act-2", at(9, 1), comment("two")),
    ]);
    let rewritten = history_of([
        action("act-1", at(9, 0), comment("edited")),
        action("act-2", at(9, 1), comment("two")),
    ]);

    assert!(ActionHistory::new().is_prefix_of(&short));
    assert!(short.is_prefix_of(&long));
    assert!(long.is_prefix_of(&long));
    assert!(!long.is_prefix_of(&short));
    assert!(!short.is_prefix_of(&rewritten));
}

#[test]
fn serializes_as_plain_array() {
    let history = history_of([action("act-1", at(9, 0), comment("one"))]);
    let json = serde_json::to_value(&history).unwrap();
    assert!(json.is_array());
    assert_eq!(json[0]["payload"]["type"], "comment");
}
