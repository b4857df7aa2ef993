// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Issue intake: turning a fresh report into an [`Issue`] with defaults
//! applied.
//!
//! Defaults are computed once, here, and never re-derived on read:
//! the resolution estimate and due date come from the priority, tags fall
//! back to the slugged category, and the history starts with a single
//! `assign` entry that carries no status transition.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::action::{ActionPayload, IssueAction};
use crate::error::Result;
use crate::history::ActionHistory;
use crate::id::action_id;
use crate::issue::{Issue, Location, Priority, Status};
use crate::validate::{require, validate_description, validate_tags, validate_title};

/// Tag used when an issue has neither tags nor a category.
pub const GENERAL_TAG: &str = "general";

/// A reported problem, before it becomes an [`Issue`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewIssue {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub priority: Priority,
    pub department_id: String,
    pub reported_by: String,
    /// Defaults to the intake time.
    #[serde(default)]
    pub reported_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default)]
    pub assigned_to: Option<String>,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub estimated_resolution_hours: Option<u32>,
}

impl NewIssue {
    pub fn new(
        title: impl Into<String>,
        priority: Priority,
        department_id: impl Into<String>,
        reported_by: impl Into<String>,
    ) -> Self {
        NewIssue {
            title: title.into(),
            description: String::new(),
            category: String::new(),
            tags: Vec::new(),
            priority,
            department_id: department_id.into(),
            reported_by: reported_by.into(),
            reported_at: None,
            location: None,
            assigned_to: None,
            due_date: None,
            estimated_resolution_hours: None,
        }
    }
}

/// The tag an issue gets when it was reported without any: the category,
/// lowercased, with its first space replaced by `-`.
pub fn default_tag(category: &str) -> String {
    let category = category.trim();
    if category.is_empty() {
        return GENERAL_TAG.to_string();
    }
    category.to_lowercase().replacen(' ', "-", 1)
}

/// Builds an open issue under `id`. `now` stands in for a missing report time.
pub fn build(new: NewIssue, id: String, now: DateTime<Utc>) -> Result<Issue> {
    let title = validate_title(&new.title)?;
    validate_description(&new.description)?;
    let department_id = require("Department", &new.department_id)?;
    let reported_by = require("Reported by", &new.reported_by)?;
    let category = new.category.trim().to_string();

    let mut tags = validate_tags(&new.tags)?;
    if tags.is_empty() {
        tags.insert(default_tag(&category));
    }

    let assigned_to = new
        .assigned_to
        .map(|a| a.trim().to_string())
        .filter(|a| !a.is_empty());
    let reported_at = new.reported_at.unwrap_or(now);
    let estimated_resolution_hours = new
        .estimated_resolution_hours
        .unwrap_or_else(|| new.priority.resolution_hours());
    let due_date = new
        .due_date
        .unwrap_or_else(|| reported_at + Duration::hours(i64::from(estimated_resolution_hours)));
    let updated_by = assigned_to.clone().unwrap_or_else(|| reported_by.clone());

    let mut history = ActionHistory::new();
    history.append(IssueAction {
        id: action_id(&id, 0, &reported_at),
        performed_by: updated_by.clone(),
        performed_at: reported_at,
        description: "Issue initially assigned".to_string(),
        payload: ActionPayload::Assign {
            assigned_to: assigned_to.clone(),
            reason: None,
            transition: None,
        },
    })?;

    Ok(Issue {
        id,
        title,
        description: new.description,
        category,
        tags,
        priority: new.priority,
        status: Status::Open,
        department_id,
        assigned_to,
        assigned_team: Vec::new(),
        reported_by,
        reported_at,
        location: new.location,
        notes: None,
        due_date,
        estimated_resolution_hours,
        last_updated: reported_at,
        updated_by,
        history,
        support_requests: Vec::new(),
    })
}

#[cfg(test)]
#[path = "intake_tests.rs"]
mod tests;
