// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! civic-core: issue lifecycle and audit engine
//!
//! This crate owns an issue's mutable state and every mutation to it. Each
//! mutation goes through [`ActionEngine`] and is recorded as one entry of an
//! append-only [`ActionHistory`]. Storage and the team/user directories are
//! injected behind traits so callers can pick an in-memory or SQLite store.

pub mod action;
pub mod clock;
pub mod db;
pub mod directory;
pub mod engine;
pub mod error;
pub mod history;
pub mod id;
pub mod intake;
pub mod issue;
pub mod notice;
pub mod request;
pub mod rollback;
pub mod stats;
pub mod store;
pub mod support;
pub mod validate;

#[cfg(test)]
pub(crate) mod testing;

pub use action::{ActionKind, ActionPayload, EditChanges, FieldChange, IssueAction, Transition, WorkStep};
pub use clock::{ClockSource, ManualClock, SystemClock};
pub use db::SqliteStore;
pub use directory::{Department, Role, StaticDirectory, Team, TeamDirectory, User, UserDirectory};
pub use engine::ActionEngine;
pub use error::{Error, ErrorKind, Result};
pub use history::ActionHistory;
pub use intake::NewIssue;
pub use issue::{Issue, Location, Priority, Status};
pub use notice::{Notice, NoticeLevel};
pub use request::{
    AssignRequest, CommentRequest, EditRequest, IssueUpdates, NewSupportRequest, PauseRequest,
    RollbackRequest, TakeActionRequest, TeamAssignRequest,
};
pub use rollback::{RollbackResolution, RollbackSource};
pub use stats::{DashboardStats, DepartmentStats};
pub use store::{IssueFilter, IssueStore, MemoryStore};
pub use support::{SupportRequest, SupportStatus, SupportType};
