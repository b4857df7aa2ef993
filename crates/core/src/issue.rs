// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Core issue types for the civic issue tracker.
//!
//! This module contains the [`Issue`] aggregate and the vocabularies it is
//! built from: [`Status`], [`Priority`] and [`Location`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::action::IssueAction;
use crate::error::{Error, Result};
use crate::history::ActionHistory;
use crate::support::SupportRequest;

/// Workflow status of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Reported, not yet picked up. Initial state for new issues.
    Open,
    /// Someone is working on it.
    InProgress,
    /// Work is finished and awaiting (or past) verification.
    Resolved,
    /// No further work will happen.
    Closed,
    /// Work is on hold.
    Paused,
    /// Handed up the chain.
    Escalated,
}

impl Status {
    /// All statuses, in workflow order.
    pub const ALL: [Status; 6] = [
        Status::Open,
        Status::InProgress,
        Status::Resolved,
        Status::Closed,
        Status::Paused,
        Status::Escalated,
    ];

    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Open => "open",
            Status::InProgress => "in_progress",
            Status::Resolved => "resolved",
            Status::Closed => "closed",
            Status::Paused => "paused",
            Status::Escalated => "escalated",
        }
    }

    /// Returns true if no more work is expected (resolved or closed).
    pub fn is_terminal(&self) -> bool {
        matches!(self, Status::Resolved | Status::Closed)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Status {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "open" => Ok(Status::Open),
            "in_progress" | "in-progress" => Ok(Status::InProgress),
            "resolved" => Ok(Status::Resolved),
            "closed" => Ok(Status::Closed),
            "paused" => Ok(Status::Paused),
            "escalated" => Ok(Status::Escalated),
            _ => Err(Error::InvalidStatus(s.to_string())),
        }
    }
}

/// How urgently an issue needs attention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
    Urgent,
}

impl Priority {
    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Urgent => "urgent",
        }
    }

    /// Default resolution window in hours.
    ///
    /// Urgent issues get 4 hours, high 24, everything else 72.
    pub fn resolution_hours(&self) -> u32 {
        match self {
            Priority::Urgent => 4,
            Priority::High => 24,
            Priority::Medium | Priority::Low => 72,
        }
    }

    /// Returns true for high and urgent issues.
    pub fn is_high(&self) -> bool {
        matches!(self, Priority::High | Priority::Urgent)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Priority {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            "urgent" => Ok(Priority::Urgent),
            _ => Err(Error::InvalidPriority(s.to_string())),
        }
    }
}

/// Where a reported problem is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    pub address: String,
}

/// The tracked unit of civic work and the aggregate the engine manages.
///
/// Mutated only through [`ActionEngine`](crate::engine::ActionEngine)
/// operations, each of which appends exactly one entry to `history`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Issue {
    /// Stable identifier (format: `{prefix}-{hash}`).
    pub id: String,
    /// Short summary of the problem.
    pub title: String,
    /// Longer description as reported.
    pub description: String,
    /// Free-form category (e.g. "Road Maintenance").
    pub category: String,
    /// Tags attached to the issue.
    pub tags: BTreeSet<String>,
    pub priority: Priority,
    /// Current workflow state.
    pub status: Status,
    /// Owning department. Never changes.
    pub department_id: String,
    /// User responsible for the issue.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    /// Members of the team the issue was handed to, lead included.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub assigned_team: Vec<String>,
    /// Who reported the problem (user id or contact address).
    pub reported_by: String,
    /// When the problem was reported.
    pub reported_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    /// Field notes, newline-joined in the order they were added.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// When the issue is due. Derived from priority at intake if absent.
    pub due_date: DateTime<Utc>,
    /// Expected resolution time in hours. Derived from priority at intake if absent.
    pub estimated_resolution_hours: u32,
    /// When the issue was last mutated.
    pub last_updated: DateTime<Utc>,
    /// Who last mutated the issue.
    pub updated_by: String,
    /// Append-only audit trail, oldest first.
    #[serde(default)]
    pub history: ActionHistory,
    /// Help requests raised for this issue, oldest first.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub support_requests: Vec<SupportRequest>,
}

impl Issue {
    /// Returns the most recent action, if any.
    pub fn last_action(&self) -> Option<&IssueAction> {
        self.history.last()
    }

    /// Returns true if the issue is past its due date and still needs work.
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        !self.status.is_terminal() && self.due_date < now
    }
}

#[cfg(test)]
#[path = "issue_tests.rs"]
mod tests;
