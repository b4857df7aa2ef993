// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Keyed storage for issue aggregates.
//!
//! An [`IssueStore`] offers whole-aggregate reads and writes only: there is
//! no partial field update. `put` refuses any write whose history does not
//! extend the history already stored, so committed actions can never be
//! edited or dropped through a store.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::{Error, Result};
use crate::issue::{Issue, Priority, Status};

/// Criteria for [`IssueStore::list`]. Empty criteria match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueFilter {
    pub department_id: Option<String>,
    pub status: Option<Status>,
    pub priority: Option<Priority>,
    /// Maximum number of issues returned, applied after filtering. Zero
    /// means no limit.
    pub limit: Option<usize>,
}

impl IssueFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn department(mut self, department_id: impl Into<String>) -> Self {
        self.department_id = Some(department_id.into());
        self
    }

    pub fn status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// The limit to apply, if any. `Some(0)` is treated as no limit.
    pub fn effective_limit(&self) -> Option<usize> {
        self.limit.filter(|&l| l > 0)
    }

    /// Returns true if the issue satisfies every criterion except `limit`.
    pub fn matches(&self, issue: &Issue) -> bool {
        self.department_id.as_deref().map_or(true, |d| issue.department_id == d)
            && self.status.map_or(true, |s| issue.status == s)
            && self.priority.map_or(true, |p| issue.priority == p)
    }
}

/// Whole-aggregate issue storage.
///
/// Implementations must make `put` atomic: readers observe either the old
/// or the new aggregate, never a mix.
pub trait IssueStore: Send + Sync {
    /// Fetches an issue.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IssueNotFound`] if the id does not exist.
    fn get(&self, id: &str) -> Result<Issue>;

    /// Replaces an existing issue.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IssueNotFound`] if the id does not exist and
    /// [`Error::HistoryRewrite`] if the stored history is not a prefix of
    /// the new one.
    fn put(&self, id: &str, issue: &Issue) -> Result<()>;

    /// Adds a new issue.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateIssue`] if the id is taken.
    fn insert(&self, issue: &Issue) -> Result<()>;

    /// Lists issues matching the filter, oldest insertion first.
    fn list(&self, filter: &IssueFilter) -> Result<Vec<Issue>>;

    fn exists(&self, id: &str) -> Result<bool>;
}

impl<S: IssueStore> IssueStore for &S {
    fn get(&self, id: &str) -> Result<Issue> {
        (*self).get(id)
    }

    fn put(&self, id: &str, issue: &Issue) -> Result<()> {
        (*self).put(id, issue)
    }

    fn insert(&self, issue: &Issue) -> Result<()> {
        (*self).insert(issue)
    }

    fn list(&self, filter: &IssueFilter) -> Result<Vec<Issue>> {
        (*self).list(filter)
    }

    fn exists(&self, id: &str) -> Result<bool> {
        (*self).exists(id)
    }
}

/// Checks the preconditions every store applies before replacing `current`
/// with `next`.
pub(crate) fn check_replace(id: &str, current: &Issue, next: &Issue) -> Result<()> {
    if next.id != id {
        return Err(Error::Storage(format!("cannot store issue {} under id {}", next.id, id)));
    }
    if !current.history.is_prefix_of(&next.history) {
        tracing::warn!(issue_id = id, "rejected write that rewrites committed history");
        return Err(Error::HistoryRewrite { issue_id: id.to_string() });
    }
    if !next.support_requests.starts_with(&current.support_requests) {
        tracing::warn!(issue_id = id, "rejected write that drops support requests");
        return Err(Error::HistoryRewrite { issue_id: id.to_string() });
    }
    Ok(())
}

#[derive(Default)]
struct MemoryStoreInner {
    issues: HashMap<String, Issue>,
    /// Ids in insertion order, for stable listing.
    order: Vec<String>,
}

/// In-memory store: a map behind a read/write lock.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<MemoryStoreInner>,
}

fn poisoned() -> Error {
    Error::Storage("issue store lock poisoned".to_string())
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-loaded with issues, in the given order.
    pub fn with_issues(issues: impl IntoIterator<Item = Issue>) -> Result<Self> {
        let store = Self::new();
        for issue in issues {
            store.insert(&issue)?;
        }
        Ok(store)
    }

    pub fn len(&self) -> Result<usize> {
        Ok(self.inner.read().map_err(|_| poisoned())?.order.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

impl IssueStore for MemoryStore {
    fn get(&self, id: &str) -> Result<Issue> {
        let inner = self.inner.read().map_err(|_| poisoned())?;
        inner.issues.get(id).cloned().ok_or_else(|| Error::IssueNotFound(id.to_string()))
    }

    fn put(&self, id: &str, issue: &Issue) -> Result<()> {
        let mut inner = self.inner.write().map_err(|_| poisoned())?;
        let current = inner.issues.get(id).ok_or_else(|| Error::IssueNotFound(id.to_string()))?;
        check_replace(id, current, issue)?;
        inner.issues.insert(id.to_string(), issue.clone());
        Ok(())
    }

    fn insert(&self, issue: &Issue) -> Result<()> {
        let mut inner = self.inner.write().map_err(|_| poisoned())?;
        if inner.issues.contains_key(&issue.id) {
            return Err(Error::DuplicateIssue(issue.id.clone()));
        }
        inner.order.push(issue.id.clone());
        inner.issues.insert(issue.id.clone(), issue.clone());
        Ok(())
    }

    fn list(&self, filter: &IssueFilter) -> Result<Vec<Issue>> {
        let inner = self.inner.read().map_err(|_| poisoned())?;
        let matching = inner
            .order
            .iter()
            .filter_map(|id| inner.issues.get(id))
            .filter(|issue| filter.matches(issue))
            .take(filter.effective_limit().unwrap_or(usize::MAX))
            .cloned()
            .collect();
        Ok(matching)
    }

    fn exists(&self, id: &str) -> Result<bool> {
        Ok(self.inner.read().map_err(|_| poisoned())?.issues.contains_key(id))
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
