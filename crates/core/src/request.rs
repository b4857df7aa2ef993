// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Typed requests accepted by [`ActionEngine`](crate::engine::ActionEngine).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::action::WorkStep;
use crate::issue::Priority;
use crate::support::SupportType;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignRequest {
    pub issue_id: String,
    pub assigned_to: String,
    #[serde(default)]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamAssignRequest {
    pub issue_id: String,
    pub team_id: String,
    #[serde(default)]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PauseRequest {
    pub issue_id: String,
    /// Mandatory; blank reasons are rejected.
    pub reason: String,
}

/// Partial field updates for `edit`. `None` leaves a field alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueUpdates {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub priority: Option<Priority>,
    #[serde(default)]
    pub category: Option<String>,
    /// Replaces the whole tag set.
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditRequest {
    pub issue_id: String,
    pub updates: IssueUpdates,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TakeActionRequest {
    pub issue_id: String,
    pub step: WorkStep,
    /// Appended to the issue's notes when non-blank.
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSupportRequest {
    pub issue_id: String,
    #[serde(rename = "type")]
    pub request_type: SupportType,
    pub priority: Priority,
    pub description: String,
    /// Defaults to the actor performing the request.
    #[serde(default)]
    pub requested_by: Option<String>,
    /// Defaults to the issue's department.
    #[serde(default)]
    pub requested_from: Option<String>,
    pub requested_to: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollbackRequest {
    pub issue_id: String,
    /// Recorded on the rollback action. Does not choose the restored status.
    #[serde(default)]
    pub target_action_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentRequest {
    pub issue_id: String,
    pub text: String,
}
