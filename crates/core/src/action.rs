// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Audit entries recorded against an issue.
//!
//! Every mutation the engine performs is captured as one [`IssueAction`]. The
//! transition-specific facts live in a typed [`ActionPayload`] rather than an
//! open key/value bag, so actions that move an issue's status always carry a
//! [`Transition`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::issue::{Priority, Status};
use crate::support::SupportType;

/// Vocabulary of action types, as stored and displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Assign,
    Reassign,
    TeamAssign,
    Edit,
    Pause,
    Rollback,
    StatusChange,
    SupportRequest,
    Comment,
}

impl ActionKind {
    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::Assign => "assign",
            ActionKind::Reassign => "reassign",
            ActionKind::TeamAssign => "team_assign",
            ActionKind::Edit => "edit",
            ActionKind::Pause => "pause",
            ActionKind::Rollback => "rollback",
            ActionKind::StatusChange => "status_change",
            ActionKind::SupportRequest => "support_request",
            ActionKind::Comment => "comment",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ActionKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "assign" => Ok(ActionKind::Assign),
            "reassign" => Ok(ActionKind::Reassign),
            "team_assign" => Ok(ActionKind::TeamAssign),
            "edit" => Ok(ActionKind::Edit),
            "pause" => Ok(ActionKind::Pause),
            "rollback" => Ok(ActionKind::Rollback),
            "status_change" => Ok(ActionKind::StatusChange),
            "support_request" => Ok(ActionKind::SupportRequest),
            "comment" => Ok(ActionKind::Comment),
            _ => Err(Error::InvalidActionKind(s.to_string())),
        }
    }
}

/// A field-work step taken on an issue, each mapping to a fixed status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum WorkStep {
    Start,
    Complete,
    Verify,
    Close,
}

impl WorkStep {
    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkStep::Start => "start",
            WorkStep::Complete => "complete",
            WorkStep::Verify => "verify",
            WorkStep::Close => "close",
        }
    }

    /// The status an issue lands in after this step, whatever its current status.
    pub fn target_status(&self) -> Status {
        match self {
            WorkStep::Start => Status::InProgress,
            WorkStep::Complete | WorkStep::Verify => Status::Resolved,
            WorkStep::Close => Status::Closed,
        }
    }
}

impl fmt::Display for WorkStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for WorkStep {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "start" => Ok(WorkStep::Start),
            "complete" => Ok(WorkStep::Complete),
            "verify" => Ok(WorkStep::Verify),
            "close" => Ok(WorkStep::Close),
            _ => Err(Error::InvalidStep(s.to_string())),
        }
    }
}

/// A status move recorded on the action that caused it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Transition {
    pub status_from: Status,
    pub status_to: Status,
}

impl Transition {
    pub fn new(status_from: Status, status_to: Status) -> Self {
        Transition { status_from, status_to }
    }
}

/// Before/after values of one edited field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct FieldChange<T> {
    pub from: T,
    pub to: T,
}

/// The fields an edit actually changed. Unchanged fields are `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct EditChanges {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<FieldChange<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<FieldChange<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<FieldChange<Priority>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<FieldChange<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<FieldChange<BTreeSet<String>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<FieldChange<DateTime<Utc>>>,
}

impl EditChanges {
    /// Returns true if the edit changed nothing.
    pub fn is_empty(&self) -> bool {
        self.changed_fields().is_empty()
    }

    /// Names of the changed fields, in declaration order.
    pub fn changed_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if self.title.is_some() {
            fields.push("title");
        }
        if self.description.is_some() {
            fields.push("description");
        }
        if self.priority.is_some() {
            fields.push("priority");
        }
        if self.category.is_some() {
            fields.push("category");
        }
        if self.tags.is_some() {
            fields.push("tags");
        }
        if self.due_date.is_some() {
            fields.push("due_date");
        }
        fields
    }
}

/// Transition-specific facts of an action, one variant per [`ActionKind`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ActionPayload {
    /// First assignment. Intake records one without a transition.
    Assign {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        assigned_to: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        reason: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        transition: Option<Transition>,
    },

    /// Assignment replacing an existing assignee.
    Reassign {
        assigned_from: String,
        assigned_to: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        reason: Option<String>,
        transition: Transition,
    },

    /// Hand-off to a team; the lead becomes the assignee.
    TeamAssign {
        team_id: String,
        team_name: String,
        lead: String,
        members: Vec<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        reason: Option<String>,
        transition: Transition,
    },

    /// Field edits. `changes` may be empty.
    Edit { changes: EditChanges },

    Pause { reason: String, transition: Transition },

    Rollback {
        transition: Transition,
        /// Action id the caller asked to roll back from. Informational only.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        rolled_back_from: Option<String>,
    },

    StatusChange {
        step: WorkStep,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        notes: Option<String>,
        transition: Transition,
    },

    SupportRequest {
        support_request_id: String,
        requested_to: String,
        request_type: SupportType,
    },

    Comment { text: String },
}

impl ActionPayload {
    /// The action kind this payload records.
    pub fn kind(&self) -> ActionKind {
        match self {
            ActionPayload::Assign { .. } => ActionKind::Assign,
            ActionPayload::Reassign { .. } => ActionKind::Reassign,
            ActionPayload::TeamAssign { .. } => ActionKind::TeamAssign,
            ActionPayload::Edit { .. } => ActionKind::Edit,
            ActionPayload::Pause { .. } => ActionKind::Pause,
            ActionPayload::Rollback { .. } => ActionKind::Rollback,
            ActionPayload::StatusChange { .. } => ActionKind::StatusChange,
            ActionPayload::SupportRequest { .. } => ActionKind::SupportRequest,
            ActionPayload::Comment { .. } => ActionKind::Comment,
        }
    }

    /// The status move this action caused, if any.
    pub fn transition(&self) -> Option<Transition> {
        match self {
            ActionPayload::Assign { transition, .. } => *transition,
            ActionPayload::Reassign { transition, .. }
            | ActionPayload::TeamAssign { transition, .. }
            | ActionPayload::Pause { transition, .. }
            | ActionPayload::Rollback { transition, .. }
            | ActionPayload::StatusChange { transition, .. } => Some(*transition),
            ActionPayload::Edit { .. }
            | ActionPayload::SupportRequest { .. }
            | ActionPayload::Comment { .. } => None,
        }
    }

    /// Free-text reason the caller gave, if the action takes one.
    pub fn reason(&self) -> Option<&str> {
        match self {
            ActionPayload::Assign { reason, .. }
            | ActionPayload::Reassign { reason, .. }
            | ActionPayload::TeamAssign { reason, .. } => reason.as_deref(),
            ActionPayload::Pause { reason, .. } => Some(reason),
            _ => None,
        }
    }
}

/// One immutable audit record describing a single mutation to an issue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct IssueAction {
    /// Unique identifier (format: `act-{hash}`).
    pub id: String,
    /// Who performed the action.
    pub performed_by: String,
    /// When the action was committed.
    pub performed_at: DateTime<Utc>,
    /// Human-readable summary.
    pub description: String,
    /// What happened, by kind.
    pub payload: ActionPayload,
}

impl IssueAction {
    pub fn kind(&self) -> ActionKind {
        self.payload.kind()
    }

    /// Status before this action, for actions that moved the status.
    pub fn status_from(&self) -> Option<Status> {
        self.payload.transition().map(|t| t.status_from)
    }

    /// Status after this action, for actions that moved the status.
    pub fn status_to(&self) -> Option<Status> {
        self.payload.transition().map(|t| t.status_to)
    }
}

#[cfg(test)]
#[path = "action_tests.rs"]
mod tests;
