// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The action engine: every mutation an issue goes through after intake.
//!
//! Each operation follows the same read-modify-write cycle under a per-issue
//! lock:
//!
//! 1. fetch the current issue from the store
//! 2. validate and compute the new field values on a copy
//! 3. append exactly one [`IssueAction`] describing the change
//! 4. write the whole aggregate back and return it
//!
//! Request validation happens before the lock is taken where it does not
//! depend on the stored issue, and always before the write, so a failed
//! operation leaves the issue and its history untouched.
//!
//! Writers on the same issue id are serialized; writers on different ids
//! only contend briefly on the lock table.

use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::action::{ActionKind, ActionPayload, EditChanges, FieldChange, IssueAction, Transition};
use crate::clock::{ClockSource, SystemClock};
use crate::directory::TeamDirectory;
use crate::error::{Error, Result};
use crate::history::ActionHistory;
use crate::id::{action_id, generate_unique_id, support_id};
use crate::intake::{self, NewIssue};
use crate::issue::{Issue, Status};
use crate::request::{
    AssignRequest, CommentRequest, EditRequest, NewSupportRequest, PauseRequest, RollbackRequest,
    TakeActionRequest, TeamAssignRequest,
};
use crate::rollback;
use crate::store::{IssueFilter, IssueStore};
use crate::support::{SupportRequest, SupportStatus};
use crate::validate::{
    require, validate_actor, validate_assignee, validate_description, validate_note,
    validate_optional_reason, validate_reason, validate_tags, validate_title,
};

/// What an operation decided to record, before it is stamped and appended.
struct Recorded {
    payload: ActionPayload,
    description: String,
}

impl Recorded {
    fn new(payload: ActionPayload, description: impl Into<String>) -> Self {
        Recorded { payload, description: description.into() }
    }
}

/// Owns every mutation of issues held in an [`IssueStore`].
pub struct ActionEngine<S, D, C = SystemClock> {
    store: S,
    teams: D,
    clock: C,
    locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl<S: IssueStore, D: TeamDirectory> ActionEngine<S, D> {
    pub fn new(store: S, teams: D) -> Self {
        Self::with_clock(store, teams, SystemClock)
    }
}

impl<S: IssueStore, D: TeamDirectory, C: ClockSource> ActionEngine<S, D, C> {
    pub fn with_clock(store: S, teams: D, clock: C) -> Self {
        ActionEngine { store, teams, clock, locks: Mutex::new(HashMap::new()) }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn teams(&self) -> &D {
        &self.teams
    }

    // Reads

    /// Fetches one issue.
    pub fn get_issue(&self, id: &str) -> Result<Issue> {
        self.store.get(id)
    }

    /// Lists issues in store order, filtered.
    pub fn list_issues(&self, filter: &IssueFilter) -> Result<Vec<Issue>> {
        self.store.list(filter)
    }

    /// Returns an issue's action history, oldest first.
    pub fn history(&self, id: &str) -> Result<ActionHistory> {
        Ok(self.store.get(id)?.history)
    }

    // Intake

    /// Creates a new open issue with an id under `prefix`.
    pub fn open_issue(&self, prefix: &str, new: NewIssue) -> Result<Issue> {
        let now = self.clock.now();
        let reported_at = new.reported_at.unwrap_or(now);

        let mut lookup_error = None;
        let id = generate_unique_id(prefix, &new.title, &reported_at, |candidate| {
            match self.store.exists(candidate) {
                Ok(taken) => taken,
                Err(e) => {
                    lookup_error.get_or_insert(e);
                    false
                }
            }
        });
        if let Some(e) = lookup_error {
            return Err(e);
        }

        let issue = intake::build(new, id, now)?;
        self.store.insert(&issue)?;
        tracing::info!(issue_id = %issue.id, department = %issue.department_id, "opened issue");
        Ok(issue)
    }

    // Mutations

    /// Assigns the issue to a user and moves it to `in_progress`.
    ///
    /// Records `reassign` when someone was already assigned, `assign`
    /// otherwise.
    pub fn assign(&self, req: AssignRequest, performed_by: &str) -> Result<Issue> {
        let assignee = validate_assignee(&req.assigned_to)?;
        let reason = validate_optional_reason(req.reason.as_deref())?;

        self.commit(&req.issue_id, performed_by, |issue, _| {
            let transition = Transition::new(issue.status, Status::InProgress);
            issue.status = Status::InProgress;
            let recorded = match issue.assigned_to.replace(assignee.clone()) {
                Some(previous) => Recorded::new(
                    ActionPayload::Reassign {
                        assigned_from: previous,
                        assigned_to: assignee.clone(),
                        reason,
                        transition,
                    },
                    format!("Issue reassigned to {}", assignee),
                ),
                None => Recorded::new(
                    ActionPayload::Assign {
                        assigned_to: Some(assignee.clone()),
                        reason,
                        transition: Some(transition),
                    },
                    format!("Issue assigned to {}", assignee),
                ),
            };
            Ok(recorded)
        })
    }

    /// Hands the issue to a team: members become the assigned team and the
    /// lead becomes the assignee.
    pub fn assign_team(&self, req: TeamAssignRequest, performed_by: &str) -> Result<Issue> {
        let team_id = req.team_id.trim().to_string();
        let reason = validate_optional_reason(req.reason.as_deref())?;

        self.commit(&req.issue_id, performed_by, |issue, _| {
            let team = match team_id.as_str() {
                "" => None,
                id => self.teams.get_team(id)?,
            }
            .ok_or_else(|| Error::TeamNotFound(team_id.clone()))?;

            let transition = Transition::new(issue.status, Status::InProgress);
            issue.status = Status::InProgress;
            issue.assigned_team = team.members.clone();
            issue.assigned_to = Some(team.lead.clone());

            let description = format!("Issue assigned to team: {}", team.name);
            Ok(Recorded::new(
                ActionPayload::TeamAssign {
                    team_id: team.id,
                    team_name: team.name,
                    lead: team.lead,
                    members: team.members,
                    reason,
                    transition,
                },
                description,
            ))
        })
    }

    /// Puts the issue on hold. A reason is mandatory.
    pub fn pause(&self, req: PauseRequest, performed_by: &str) -> Result<Issue> {
        let reason = validate_reason(&req.reason)?;

        self.commit(&req.issue_id, performed_by, |issue, _| {
            let transition = Transition::new(issue.status, Status::Paused);
            issue.status = Status::Paused;
            let description = format!("Issue paused: {}", reason);
            Ok(Recorded::new(ActionPayload::Pause { reason, transition }, description))
        })
    }

    /// Updates descriptive fields, recording only the ones that differ.
    ///
    /// An edit that changes nothing still succeeds and appends an action
    /// with empty changes. Status is never touched.
    pub fn edit(&self, req: EditRequest, performed_by: &str) -> Result<Issue> {
        let updates = req.updates;
        let title = updates.title.as_deref().map(validate_title).transpose()?;
        if let Some(description) = &updates.description {
            validate_description(description)?;
        }
        let category = updates.category.as_deref().map(|c| require("Category", c)).transpose()?;
        let tags = updates.tags.as_ref().map(|t| validate_tags(t)).transpose()?;

        self.commit(&req.issue_id, performed_by, |issue, _| {
            let mut changes = EditChanges::default();
            if let Some(to) = title {
                changes.title = replace_if_changed(&mut issue.title, to);
            }
            if let Some(to) = updates.description {
                changes.description = replace_if_changed(&mut issue.description, to);
            }
            if let Some(to) = updates.priority {
                changes.priority = replace_if_changed(&mut issue.priority, to);
            }
            if let Some(to) = category {
                changes.category = replace_if_changed(&mut issue.category, to);
            }
            if let Some(to) = tags {
                changes.tags = replace_if_changed(&mut issue.tags, to);
            }
            if let Some(to) = updates.due_date {
                changes.due_date = replace_if_changed(&mut issue.due_date, to);
            }

            let fields = changes.changed_fields();
            let description = if fields.is_empty() {
                "Issue updated: no changes".to_string()
            } else {
                let listed: Vec<String> = fields.iter().map(|f| format!("{} changed", f)).collect();
                format!("Issue updated: {}", listed.join(", "))
            };
            Ok(Recorded::new(ActionPayload::Edit { changes }, description))
        })
    }

    /// Records a field-work step, moving the issue to the step's fixed status.
    pub fn take_action(&self, req: TakeActionRequest, performed_by: &str) -> Result<Issue> {
        let notes = req
            .notes
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_string);
        if let Some(n) = &notes {
            validate_note(n)?;
        }
        let step = req.step;

        self.commit(&req.issue_id, performed_by, |issue, _| {
            let transition = Transition::new(issue.status, step.target_status());
            issue.status = transition.status_to;
            if let Some(n) = &notes {
                issue.notes = Some(match issue.notes.take().filter(|existing| !existing.is_empty()) {
                    Some(existing) => format!("{}\n{}", existing, n),
                    None => n.clone(),
                });
            }

            let description = match &notes {
                Some(n) => format!("Action taken: {} - {}", step, n),
                None => format!("Action taken: {}", step),
            };
            Ok(Recorded::new(ActionPayload::StatusChange { step, notes, transition }, description))
        })
    }

    /// Raises a support request on the issue. Status is unchanged.
    pub fn create_support_request(
        &self,
        req: NewSupportRequest,
        performed_by: &str,
    ) -> Result<SupportRequest> {
        let description = require("Description", &req.description)?;
        validate_description(&description)?;
        let requested_to = require("Requested to", &req.requested_to)?;
        let requested_by = match req.requested_by.as_deref() {
            Some(by) => validate_actor(by)?,
            None => validate_actor(performed_by)?,
        };
        let requested_from = req.requested_from.as_deref().map(str::trim).filter(|f| !f.is_empty());

        let issue = self.commit(&req.issue_id, performed_by, |issue, at| {
            let request = SupportRequest {
                id: support_id(&issue.id, issue.support_requests.len(), &at),
                requested_by,
                requested_from: requested_from.unwrap_or(issue.department_id.as_str()).to_string(),
                requested_to: requested_to.clone(),
                request_type: req.request_type,
                priority: req.priority,
                description,
                status: SupportStatus::Pending,
                created_at: at,
            };
            let payload = ActionPayload::SupportRequest {
                support_request_id: request.id.clone(),
                requested_to,
                request_type: request.request_type,
            };
            issue.support_requests.push(request);
            Ok(Recorded::new(payload, format!("Support requested: {}", req.request_type)))
        })?;

        issue
            .support_requests
            .last()
            .cloned()
            .ok_or_else(|| Error::Storage(format!("support request missing from {}", issue.id)))
    }

    /// Restores the status recovered from the issue's history.
    ///
    /// `target_action_id` is recorded as `rolled_back_from` and does not
    /// influence which status is restored.
    pub fn rollback(&self, req: RollbackRequest, performed_by: &str) -> Result<Issue> {
        let rolled_back_from = req
            .target_action_id
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string);

        self.commit(&req.issue_id, performed_by, |issue, _| {
            let resolution = rollback::resolve(&issue.history);
            let transition = Transition::new(issue.status, resolution.restored);
            issue.status = resolution.restored;
            let description = format!("Issue rolled back to previous status: {}", resolution.restored);
            Ok(Recorded::new(ActionPayload::Rollback { transition, rolled_back_from }, description))
        })
    }

    /// Adds a comment to the history. No field other than the update stamp
    /// changes.
    pub fn comment(&self, req: CommentRequest, performed_by: &str) -> Result<Issue> {
        let text = require("Comment", &req.text)?;
        validate_note(&text)?;

        self.commit(&req.issue_id, performed_by, |_, _| {
            Ok(Recorded::new(ActionPayload::Comment { text }, "Comment added"))
        })
    }

    /// Runs one read-modify-write cycle on `issue_id` under its lock.
    ///
    /// `apply` mutates a copy of the issue and returns what to record. It
    /// receives the timestamp the action will carry.
    fn commit<F>(&self, issue_id: &str, performed_by: &str, apply: F) -> Result<Issue>
    where
        F: FnOnce(&mut Issue, DateTime<Utc>) -> Result<Recorded>,
    {
        let performed_by = validate_actor(performed_by)?;

        self.with_issue_lock(issue_id, || {
            let current = self.store.get(issue_id)?;
            let performed_at = current.history.next_timestamp(self.clock.now());

            let mut next = current.clone();
            let recorded = apply(&mut next, performed_at)?;
            let kind: ActionKind = recorded.payload.kind();

            next.history.append(IssueAction {
                id: action_id(issue_id, current.history.len(), &performed_at),
                performed_by: performed_by.clone(),
                performed_at,
                description: recorded.description,
                payload: recorded.payload,
            })?;
            next.last_updated = performed_at;
            next.updated_by = performed_by.clone();

            self.store.put(issue_id, &next)?;
            tracing::info!(issue_id, action = %kind, performed_by = %performed_by, status = %next.status, "committed action");
            Ok(next)
        })
    }

    fn with_issue_lock<T>(&self, issue_id: &str, f: impl FnOnce() -> Result<T>) -> Result<T> {
        let lock = {
            let mut locks = self.locks.lock().unwrap_or_else(|e| e.into_inner());
            Arc::clone(locks.entry(issue_id.to_string()).or_default())
        };

        let result = {
            let _guard = lock.lock().unwrap_or_else(|e| e.into_inner());
            f()
        };

        // Drop the entry once nobody else holds or waits on it. New waiters
        // must go through the table lock first, so the count is stable here.
        let mut locks = self.locks.lock().unwrap_or_else(|e| e.into_inner());
        drop(lock);
        if locks.get(issue_id).is_some_and(|l| Arc::strong_count(l) == 1) {
            locks.remove(issue_id);
        }
        result
    }
}

/// Overwrites `field` with `to` and reports the change, or leaves it alone
/// if the values are equal.
fn replace_if_changed<T: PartialEq + Clone>(field: &mut T, to: T) -> Option<FieldChange<T>> {
    if *field == to {
        return None;
    }
    let from = std::mem::replace(field, to.clone());
    Some(FieldChange { from, to })
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
