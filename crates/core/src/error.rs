// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for civic-core operations.

use thiserror::Error;

/// All possible errors that can occur in civic-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("issue not found: {0}")]
    IssueNotFound(String),

    #[error("team not found: {0}")]
    TeamNotFound(String),

    #[error("{field} cannot be empty")]
    Validation { field: &'static str },

    #[error("{field} too long ({actual} chars, max {max})")]
    FieldTooLong {
        field: &'static str,
        actual: usize,
        max: usize,
    },

    #[error("too many tags (max {max} per issue)")]
    TagLimitExceeded { max: usize },

    #[error("invalid assignment target: assignee cannot be empty")]
    InvalidTarget,

    #[error("issue already exists: {0}")]
    DuplicateIssue(String),

    #[error("history of {issue_id} would be rewritten\n  hint: committed actions are immutable; only appends are allowed")]
    HistoryRewrite { issue_id: String },

    #[error("action {action_id} at {performed_at} precedes the newest entry at {newest}")]
    HistoryOrder {
        action_id: String,
        performed_at: String,
        newest: String,
    },

    #[error("invalid status: '{0}'\n  hint: valid statuses are: open, in_progress, resolved, closed, paused, escalated")]
    InvalidStatus(String),

    #[error("invalid priority: '{0}'\n  hint: valid priorities are: low, medium, high, urgent")]
    InvalidPriority(String),

    #[error("invalid action kind: '{0}'")]
    InvalidActionKind(String),

    #[error("invalid work step: '{0}'\n  hint: valid steps are: start, complete, verify, close")]
    InvalidStep(String),

    #[error("invalid support type: '{0}'\n  hint: valid types are: escalation, consultation, resource_request, technical_support")]
    InvalidSupportType(String),

    #[error("invalid support status: '{0}'")]
    InvalidSupportStatus(String),

    #[error("invalid role: '{0}'\n  hint: valid roles are: super_admin, department_admin, supervisor")]
    InvalidRole(String),

    #[error("storage error: {0}")]
    Storage(String),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("corrupted data: {0}")]
    CorruptedData(String),
}

/// Coarse classification of an [`Error`], for callers that map failures
/// onto their own surfaces (exit codes, HTTP statuses, toasts).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The issue id does not resolve.
    NotFound,
    /// A required field is missing, blank, or out of bounds.
    Validation,
    /// The assignment target is missing.
    InvalidTarget,
    /// The team id does not resolve in the team directory.
    TeamNotFound,
    /// The write conflicts with what is already committed.
    Conflict,
    /// The backing store failed.
    Storage,
}

impl Error {
    /// Returns the coarse kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::IssueNotFound(_) => ErrorKind::NotFound,
            Error::TeamNotFound(_) => ErrorKind::TeamNotFound,
            Error::InvalidTarget => ErrorKind::InvalidTarget,
            Error::Validation { .. }
            | Error::FieldTooLong { .. }
            | Error::TagLimitExceeded { .. }
            | Error::InvalidStatus(_)
            | Error::InvalidPriority(_)
            | Error::InvalidActionKind(_)
            | Error::InvalidStep(_)
            | Error::InvalidSupportType(_)
            | Error::InvalidSupportStatus(_)
            | Error::InvalidRole(_) => ErrorKind::Validation,
            Error::DuplicateIssue(_) | Error::HistoryRewrite { .. } | Error::HistoryOrder { .. } => {
                ErrorKind::Conflict
            }
            Error::Storage(_)
            | Error::Database(_)
            | Error::Io(_)
            | Error::Json(_)
            | Error::CorruptedData(_) => ErrorKind::Storage,
        }
    }

    /// Returns true if the failure came from the backing store rather than
    /// from the request itself.
    pub fn is_storage(&self) -> bool {
        self.kind() == ErrorKind::Storage
    }
}

/// A specialized Result type for civic-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
