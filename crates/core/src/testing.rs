// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Fixtures shared by the unit tests.

#![allow(clippy::unwrap_used)]

use chrono::{DateTime, TimeZone, Utc};
use std::collections::BTreeSet;

use crate::action::{ActionPayload, IssueAction, Transition, WorkStep};
use crate::clock::ManualClock;
use crate::directory::{Department, Role, StaticDirectory, Team, User};
use crate::engine::ActionEngine;
use crate::history::ActionHistory;
use crate::issue::{Issue, Priority, Status};
use crate::store::MemoryStore;

pub(crate) type TestEngine = ActionEngine<MemoryStore, StaticDirectory, ManualClock>;

/// A fixed instant on the test day.
pub(crate) fn at(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 9, 15, hour, minute, 0).unwrap()
}

/// An open, unassigned issue with an empty history.
pub(crate) fn bare_issue(id: &str) -> Issue {
    Issue {
        id: id.to_string(),
        title: "Pothole on Main Street".to_string(),
        description: "Large pothole near the school crossing".to_string(),
        category: "Road Maintenance".to_string(),
        tags: BTreeSet::from(["road-maintenance".to_string()]),
        priority: Priority::High,
        status: Status::Open,
        department_id: "public-works".to_string(),
        assigned_to: None,
        assigned_team: Vec::new(),
        reported_by: "citizen@example.com".to_string(),
        reported_at: at(8, 0),
        location: None,
        notes: None,
        due_date: at(8, 0) + chrono::Duration::hours(24),
        estimated_resolution_hours: 24,
        last_updated: at(8, 0),
        updated_by: "citizen@example.com".to_string(),
        history: ActionHistory::new(),
        support_requests: Vec::new(),
    }
}

pub(crate) fn action(id: &str, performed_at: DateTime<Utc>, payload: ActionPayload) -> IssueAction {
    IssueAction {
        id: id.to_string(),
        performed_by: "u1".to_string(),
        performed_at,
        description: format!("{} entry", payload.kind()),
        payload,
    }
}

pub(crate) fn status_change(step: WorkStep, from: Status) -> ActionPayload {
    ActionPayload::StatusChange { step, notes: None, transition: Transition::new(from, step.target_status()) }
}

pub(crate) fn comment(text: &str) -> ActionPayload {
    ActionPayload::Comment { text: text.to_string() }
}

pub(crate) fn history_of(actions: impl IntoIterator<Item = IssueAction>) -> ActionHistory {
    let mut history = ActionHistory::new();
    for a in actions {
        history.append(a).unwrap();
    }
    history
}

pub(crate) fn team_x() -> Team {
    Team {
        id: "teamX".to_string(),
        name: "Road Crew".to_string(),
        department_id: "public-works".to_string(),
        members: vec!["u7".to_string(), "u9".to_string()],
        lead: "u7".to_string(),
        specializations: vec!["asphalt".to_string()],
        is_active: true,
    }
}

pub(crate) fn directory() -> StaticDirectory {
    StaticDirectory::new(
        vec![
            Department { id: "public-works".to_string(), name: "Public Works".to_string() },
            Department { id: "police".to_string(), name: "Police".to_string() },
        ],
        vec![
            User {
                id: "u1".to_string(),
                name: "Dana Ortiz".to_string(),
                email: "dana@civic.gov".to_string(),
                role: Role::DepartmentAdmin,
                department_id: Some("public-works".to_string()),
                is_active: true,
            },
            User {
                id: "admin".to_string(),
                name: "Admin".to_string(),
                email: "admin@civic.gov".to_string(),
                role: Role::SuperAdmin,
                department_id: None,
                is_active: true,
            },
        ],
        vec![team_x()],
    )
}

/// An engine over a memory store holding `issues`, with the clock at 09:00.
pub(crate) fn engine_with(issues: impl IntoIterator<Item = Issue>) -> TestEngine {
    let store = MemoryStore::with_issues(issues).unwrap();
    ActionEngine::with_clock(store, directory(), ManualClock::new(at(9, 0)))
}
