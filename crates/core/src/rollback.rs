// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Recovers the status a rollback restores, from the issue's own history.
//!
//! The scan is newest first:
//!
//! 1. The first `status_change` entry found wins.
//! 2. Without one, the second-newest entry is used, whatever its kind.
//! 3. The restored status is the chosen entry's `status_from`, or
//!    [`Status::Open`] if it has none (or nothing was chosen).
//!
//! Step 2 is long-standing behavior that existing callers rely on. It can
//! pick an entry unrelated to status, such as a comment, in which case step 3
//! falls back to `open`.

use crate::action::{ActionKind, IssueAction};
use crate::history::ActionHistory;
use crate::issue::Status;

/// Which history entry a rollback drew its status from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RollbackSource {
    /// The newest `status_change` entry.
    StatusChange { action_id: String },
    /// The second-newest entry, used when no `status_change` exists.
    SecondNewest { action_id: String },
    /// Nothing usable; history has fewer than two entries.
    Default,
}

/// The outcome of resolving a rollback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollbackResolution {
    pub source: RollbackSource,
    pub restored: Status,
}

/// Resolves the status a rollback should restore.
pub fn resolve(history: &ActionHistory) -> RollbackResolution {
    let (source, found) = match history.latest_of(ActionKind::StatusChange) {
        Some(action) => (RollbackSource::StatusChange { action_id: action.id.clone() }, Some(action)),
        None => match second_newest(history) {
            Some(action) => {
                (RollbackSource::SecondNewest { action_id: action.id.clone() }, Some(action))
            }
            None => (RollbackSource::Default, None),
        },
    };

    let restored = found.and_then(IssueAction::status_from).unwrap_or(Status::Open);
    tracing::debug!(?source, %restored, "resolved rollback target");
    RollbackResolution { source, restored }
}

fn second_newest(history: &ActionHistory) -> Option<&IssueAction> {
    history.len().checked_sub(2).and_then(|i| history.get(i))
}

#[cfg(test)]
#[path = "rollback_tests.rs"]
mod tests;
