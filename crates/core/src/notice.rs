// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Describes whom to tell about a committed action.
//!
//! The engine never sends anything. Callers pass the returned issue and its
//! newest action to [`for_action`] and deliver the [`Notice`] however they
//! like.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::action::{ActionPayload, IssueAction};
use crate::issue::{Issue, Priority, Status};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
    Success,
}

impl NoticeLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoticeLevel::Info => "info",
            NoticeLevel::Warning => "warning",
            NoticeLevel::Error => "error",
            NoticeLevel::Success => "success",
        }
    }
}

impl fmt::Display for NoticeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A message a collaborator may deliver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    /// User (or department) id the notice is for.
    pub recipient: String,
    pub title: String,
    pub message: String,
    pub level: NoticeLevel,
}

/// Returns the notice `action` warrants, if any.
///
/// Actors are never notified of their own actions, and edits and comments
/// produce no notice.
pub fn for_action(issue: &Issue, action: &IssueAction) -> Option<Notice> {
    let subject = format!("{} ({})", issue.title, issue.id);
    let (recipient, title, message, level) = match &action.payload {
        ActionPayload::Assign { assigned_to: Some(to), .. } | ActionPayload::Reassign { assigned_to: to, .. } => (
            to.clone(),
            "Issue assigned",
            format!("{} was assigned to you", subject),
            NoticeLevel::Info,
        ),
        ActionPayload::TeamAssign { lead, team_name, .. } => (
            lead.clone(),
            "Issue assigned to your team",
            format!("{} was assigned to {}", subject, team_name),
            NoticeLevel::Info,
        ),
        ActionPayload::Pause { reason, .. } => (
            issue.assigned_to.clone()?,
            "Issue paused",
            format!("{} was paused: {}", subject, reason),
            NoticeLevel::Warning,
        ),
        ActionPayload::Rollback { transition, .. } => (
            issue.assigned_to.clone()?,
            "Issue rolled back",
            format!("{} was rolled back to {}", subject, transition.status_to),
            NoticeLevel::Warning,
        ),
        ActionPayload::StatusChange { transition, .. }
            if matches!(transition.status_to, Status::Resolved | Status::Closed) =>
        {
            (
                issue.reported_by.clone(),
                "Issue resolved",
                format!("{} is now {}", subject, transition.status_to),
                NoticeLevel::Success,
            )
        }
        ActionPayload::SupportRequest { requested_to, request_type, support_request_id } => {
            let urgent = issue
                .support_requests
                .iter()
                .find(|r| &r.id == support_request_id)
                .is_some_and(|r| r.priority >= Priority::High);
            (
                requested_to.clone(),
                "Support requested",
                format!("{} needs {}", subject, request_type.as_str().replace('_', " ")),
                if urgent { NoticeLevel::Warning } else { NoticeLevel::Info },
            )
        }
        _ => return None,
    };

    if recipient == action.performed_by {
        return None;
    }
    Some(Notice { recipient, title: title.to_string(), message, level })
}

#[cfg(test)]
#[path = "notice_tests.rs"]
mod tests;
