// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Ordered, append-only action history attached to each issue.
//!
//! [`ActionHistory`] exposes no way to edit or remove an entry once it has
//! been appended. Appends must not go back in time: an action's
//! `performed_at` is never earlier than the newest entry's.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::action::{ActionKind, IssueAction};
use crate::error::{Error, Result};

/// The audit trail of one issue, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(transparent)]
pub struct ActionHistory(Vec<IssueAction>);

impl ActionHistory {
    pub fn new() -> Self {
        ActionHistory(Vec::new())
    }

    /// Appends an action.
    ///
    /// # Errors
    ///
    /// Returns [`Error::HistoryOrder`] if the action is older than the newest entry.
    pub fn append(&mut self, action: IssueAction) -> Result<()> {
        if let Some(newest) = self.0.last() {
            if action.performed_at < newest.performed_at {
                return Err(Error::HistoryOrder {
                    action_id: action.id,
                    performed_at: action.performed_at.to_rfc3339(),
                    newest: newest.performed_at.to_rfc3339(),
                });
            }
        }
        self.0.push(action);
        Ok(())
    }

    /// Clamps `now` so an action stamped with it can be appended.
    pub fn next_timestamp(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        match self.0.last() {
            Some(newest) if newest.performed_at > now => newest.performed_at,
            _ => now,
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entry at `index`, oldest first.
    pub fn get(&self, index: usize) -> Option<&IssueAction> {
        self.0.get(index)
    }

    pub fn last(&self) -> Option<&IssueAction> {
        self.0.last()
    }

    /// Looks up an entry by action id.
    pub fn find(&self, action_id: &str) -> Option<&IssueAction> {
        self.0.iter().find(|a| a.id == action_id)
    }

    /// Iterates oldest first.
    pub fn iter(&self) -> std::slice::Iter<'_, IssueAction> {
        self.0.iter()
    }

    /// Newest entry of the given kind.
    pub fn latest_of(&self, kind: ActionKind) -> Option<&IssueAction> {
        self.0.iter().rev().find(|a| a.kind() == kind)
    }

    /// Returns true if every entry of `self` appears, in order, at the start
    /// of `other`.
    pub fn is_prefix_of(&self, other: &ActionHistory) -> bool {
        other.0.starts_with(&self.0)
    }

    pub fn as_slice(&self) -> &[IssueAction] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a ActionHistory {
    type Item = &'a IssueAction;
    type IntoIter = std::slice::Iter<'a, IssueAction>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
#[path = "history_tests.rs"]
mod tests;
