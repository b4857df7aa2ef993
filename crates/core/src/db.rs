// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! SQLite-backed issue store.
//!
//! [`SqliteStore`] keeps one row per issue, tag, action and support request.
//! Every write runs in a single transaction. Actions and support requests
//! are only ever INSERTed: a `put` appends the rows beyond what is already
//! committed and is rejected outright if it would change anything older.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use std::collections::BTreeSet;
use std::path::Path;
use std::sync::Mutex;

use crate::action::{ActionPayload, IssueAction};
use crate::error::{Error, Result};
use crate::history::ActionHistory;
use crate::issue::{Issue, Location};
use crate::store::{check_replace, IssueFilter, IssueStore};
use crate::support::SupportRequest;

/// SQL schema for the issue store.
pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS issues (
    id TEXT PRIMARY KEY,
    title TEXT NOT NULL,
    description TEXT NOT NULL DEFAULT '',
    category TEXT NOT NULL DEFAULT '',
    priority TEXT NOT NULL,
    status TEXT NOT NULL DEFAULT 'open',
    department_id TEXT NOT NULL,
    assigned_to TEXT,
    assigned_team TEXT NOT NULL DEFAULT '[]',   -- JSON array of user ids
    reported_by TEXT NOT NULL,
    reported_at TEXT NOT NULL,
    location TEXT,                              -- JSON object or NULL
    notes TEXT,
    due_date TEXT NOT NULL,
    estimated_resolution_hours INTEGER NOT NULL,
    last_updated TEXT NOT NULL,
    updated_by TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS tags (
    issue_id TEXT NOT NULL,
    tag TEXT NOT NULL,
    PRIMARY KEY (issue_id, tag),
    FOREIGN KEY (issue_id) REFERENCES issues(id)
);

-- Append-only audit trail; seq is the position in the issue's history
CREATE TABLE IF NOT EXISTS actions (
    issue_id TEXT NOT NULL,
    seq INTEGER NOT NULL,
    id TEXT NOT NULL,
    kind TEXT NOT NULL,
    performed_by TEXT NOT NULL,
    performed_at TEXT NOT NULL,
    description TEXT NOT NULL,
    payload TEXT NOT NULL,                      -- JSON, tagged by kind
    PRIMARY KEY (issue_id, seq),
    FOREIGN KEY (issue_id) REFERENCES issues(id)
);

CREATE TABLE IF NOT EXISTS support_requests (
    issue_id TEXT NOT NULL,
    seq INTEGER NOT NULL,
    id TEXT NOT NULL,
    requested_by TEXT NOT NULL,
    requested_from TEXT NOT NULL,
    requested_to TEXT NOT NULL,
    type TEXT NOT NULL,
    priority TEXT NOT NULL,
    description TEXT NOT NULL,
    status TEXT NOT NULL,
    created_at TEXT NOT NULL,
    PRIMARY KEY (issue_id, seq),
    FOREIGN KEY (issue_id) REFERENCES issues(id)
);

CREATE INDEX IF NOT EXISTS idx_issues_department ON issues(department_id);
CREATE INDEX IF NOT EXISTS idx_issues_status ON issues(status);
CREATE INDEX IF NOT EXISTS idx_issues_priority ON issues(priority);
CREATE INDEX IF NOT EXISTS idx_actions_kind ON actions(kind);
"#;

fn conversion_error(message: String) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(
        0,
        rusqlite::types::Type::Text,
        Box::new(Error::CorruptedData(message)),
    )
}

/// Parse a string value from the database, returning a rusqlite error on parse failure.
fn parse_db<T: std::str::FromStr>(
    value: &str,
    column: &str,
) -> std::result::Result<T, rusqlite::Error> {
    value
        .parse()
        .map_err(|_| conversion_error(format!("invalid value '{value}' in column '{column}'")))
}

/// Parse an RFC3339 timestamp from the database.
fn parse_timestamp(
    value: &str,
    column: &str,
) -> std::result::Result<DateTime<Utc>, rusqlite::Error> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| conversion_error(format!("invalid timestamp '{value}' in column '{column}'")))
}

/// Parse a JSON column from the database.
fn parse_json<T: DeserializeOwned>(
    value: &str,
    column: &str,
) -> std::result::Result<T, rusqlite::Error> {
    serde_json::from_str(value)
        .map_err(|e| conversion_error(format!("invalid JSON in column '{column}': {e}")))
}

/// Run schema creation on a database connection.
pub fn run_migrations(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA)?;
    Ok(())
}

/// Issue store on a single SQLite connection.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Open a database at the given path, creating and migrating if needed.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        conn.execute_batch(
            "PRAGMA foreign_keys = ON;
             PRAGMA journal_mode = WAL;
             PRAGMA busy_timeout = 5000;",
        )?;
        run_migrations(&conn)?;
        Ok(SqliteStore { conn: Mutex::new(conn) })
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        run_migrations(&conn)?;
        Ok(SqliteStore { conn: Mutex::new(conn) })
    }

    fn conn(&self) -> Result<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| Error::Storage("database connection lock poisoned".to_string()))
    }
}

fn load_issue(conn: &Connection, id: &str) -> Result<Option<Issue>> {
    let issue = conn
        .query_row(
            "SELECT id, title, description, category, priority, status, department_id,
                    assigned_to, assigned_team, reported_by, reported_at, location, notes,
                    due_date, estimated_resolution_hours, last_updated, updated_by
             FROM issues WHERE id = ?1",
            params![id],
            |row| {
                let priority: String = row.get(4)?;
                let status: String = row.get(5)?;
                let assigned_team: String = row.get(8)?;
                let reported_at: String = row.get(10)?;
                let location: Option<String> = row.get(11)?;
                let due_date: String = row.get(13)?;
                let last_updated: String = row.get(15)?;

                Ok(Issue {
                    id: row.get(0)?,
                    title: row.get(1)?,
                    description: row.get(2)?,
                    category: row.get(3)?,
                    tags: BTreeSet::new(),
                    priority: parse_db(&priority, "priority")?,
                    status: parse_db(&status, "status")?,
                    department_id: row.get(6)?,
                    assigned_to: row.get(7)?,
                    assigned_team: parse_json(&assigned_team, "assigned_team")?,
                    reported_by: row.get(9)?,
                    reported_at: parse_timestamp(&reported_at, "reported_at")?,
                    location: location
                        .as_deref()
                        .map(|l| parse_json::<Location>(l, "location"))
                        .transpose()?,
                    notes: row.get(12)?,
                    due_date: parse_timestamp(&due_date, "due_date")?,
                    estimated_resolution_hours: row.get(14)?,
                    last_updated: parse_timestamp(&last_updated, "last_updated")?,
                    updated_by: row.get(16)?,
                    history: ActionHistory::new(),
                    support_requests: Vec::new(),
                })
            },
        )
        .optional()?;

    let Some(mut issue) = issue else {
        return Ok(None);
    };
    issue.tags = load_tags(conn, id)?;
    issue.history = load_history(conn, id)?;
    issue.support_requests = load_support_requests(conn, id)?;
    Ok(Some(issue))
}

fn load_tags(conn: &Connection, id: &str) -> Result<BTreeSet<String>> {
    let mut stmt = conn.prepare("SELECT tag FROM tags WHERE issue_id = ?1")?;
    let tags = stmt
        .query_map(params![id], |row| row.get(0))?
        .collect::<std::result::Result<BTreeSet<String>, _>>()?;
    Ok(tags)
}

fn load_history(conn: &Connection, id: &str) -> Result<ActionHistory> {
    let mut stmt = conn.prepare(
        "SELECT id, performed_by, performed_at, description, payload
         FROM actions WHERE issue_id = ?1 ORDER BY seq",
    )?;
    let actions = stmt
        .query_map(params![id], |row| {
            let performed_at: String = row.get(2)?;
            let payload: String = row.get(4)?;
            Ok(IssueAction {
                id: row.get(0)?,
                performed_by: row.get(1)?,
                performed_at: parse_timestamp(&performed_at, "performed_at")?,
                description: row.get(3)?,
                payload: parse_json::<ActionPayload>(&payload, "payload")?,
            })
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let mut history = ActionHistory::new();
    for action in actions {
        history.append(action)?;
    }
    Ok(history)
}

fn load_support_requests(conn: &Connection, id: &str) -> Result<Vec<SupportRequest>> {
    let mut stmt = conn.prepare(
        "SELECT id, requested_by, requested_from, requested_to, type, priority,
                description, status, created_at
         FROM support_requests WHERE issue_id = ?1 ORDER BY seq",
    )?;
    let requests = stmt
        .query_map(params![id], |row| {
            let request_type: String = row.get(4)?;
            let priority: String = row.get(5)?;
            let status: String = row.get(7)?;
            let created_at: String = row.get(8)?;
            Ok(SupportRequest {
                id: row.get(0)?,
                requested_by: row.get(1)?,
                requested_from: row.get(2)?,
                requested_to: row.get(3)?,
                request_type: parse_db(&request_type, "type")?,
                priority: parse_db(&priority, "priority")?,
                description: row.get(6)?,
                status: parse_db(&status, "status")?,
                created_at: parse_timestamp(&created_at, "created_at")?,
            })
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(requests)
}

fn write_fields(conn: &Connection, issue: &Issue) -> Result<()> {
    let location = issue.location.as_ref().map(serde_json::to_string).transpose()?;
    conn.execute(
        "UPDATE issues SET title = ?2, description = ?3, category = ?4, priority = ?5,
                status = ?6, assigned_to = ?7, assigned_team = ?8, location = ?9, notes = ?10,
                due_date = ?11, estimated_resolution_hours = ?12, last_updated = ?13,
                updated_by = ?14
         WHERE id = ?1",
        params![
            issue.id,
            issue.title,
            issue.description,
            issue.category,
            issue.priority.as_str(),
            issue.status.as_str(),
            issue.assigned_to,
            serde_json::to_string(&issue.assigned_team)?,
            location,
            issue.notes,
            issue.due_date.to_rfc3339(),
            issue.estimated_resolution_hours,
            issue.last_updated.to_rfc3339(),
            issue.updated_by,
        ],
    )?;

    conn.execute("DELETE FROM tags WHERE issue_id = ?1", params![issue.id])?;
    let mut stmt = conn.prepare("INSERT INTO tags (issue_id, tag) VALUES (?1, ?2)")?;
    for tag in &issue.tags {
        stmt.execute(params![issue.id, tag])?;
    }
    Ok(())
}

/// Inserts the actions and support requests at positions `from_action` and
/// `from_support` onwards.
fn append_rows(conn: &Connection, issue: &Issue, from_action: usize, from_support: usize) -> Result<()> {
    let mut stmt = conn.prepare(
        "INSERT INTO actions (issue_id, seq, id, kind, performed_by, performed_at, description, payload)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
    )?;
    for (seq, action) in issue.history.iter().enumerate().skip(from_action) {
        stmt.execute(params![
            issue.id,
            seq as i64,
            action.id,
            action.kind().as_str(),
            action.performed_by,
            action.performed_at.to_rfc3339(),
            action.description,
            serde_json::to_string(&action.payload)?,
        ])?;
    }

    let mut stmt = conn.prepare(
        "INSERT INTO support_requests (issue_id, seq, id, requested_by, requested_from,
             requested_to, type, priority, description, status, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
    )?;
    for (seq, request) in issue.support_requests.iter().enumerate().skip(from_support) {
        stmt.execute(params![
            issue.id,
            seq as i64,
            request.id,
            request.requested_by,
            request.requested_from,
            request.requested_to,
            request.request_type.as_str(),
            request.priority.as_str(),
            request.description,
            request.status.as_str(),
            request.created_at.to_rfc3339(),
        ])?;
    }
    Ok(())
}

impl IssueStore for SqliteStore {
    fn get(&self, id: &str) -> Result<Issue> {
        let conn = self.conn()?;
        load_issue(&conn, id)?.ok_or_else(|| Error::IssueNotFound(id.to_string()))
    }

    fn put(&self, id: &str, issue: &Issue) -> Result<()> {
        let mut conn = self.conn()?;
        let tx = conn.transaction()?;
        let current = load_issue(&tx, id)?.ok_or_else(|| Error::IssueNotFound(id.to_string()))?;
        check_replace(id, &current, issue)?;

        write_fields(&tx, issue)?;
        append_rows(&tx, issue, current.history.len(), current.support_requests.len())?;
        tx.commit()?;
        Ok(())
    }

    fn insert(&self, issue: &Issue) -> Result<()> {
        let mut conn = self.conn()?;
        let tx = conn.transaction()?;
        let taken: bool = tx.query_row(
            "SELECT COUNT(*) > 0 FROM issues WHERE id = ?1",
            params![issue.id],
            |row| row.get(0),
        )?;
        if taken {
            return Err(Error::DuplicateIssue(issue.id.clone()));
        }

        tx.execute(
            "INSERT INTO issues (id, title, priority, department_id, reported_by, reported_at,
                 due_date, estimated_resolution_hours, last_updated, updated_by)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            params![
                issue.id,
                issue.title,
                issue.priority.as_str(),
                issue.department_id,
                issue.reported_by,
                issue.reported_at.to_rfc3339(),
                issue.due_date.to_rfc3339(),
                issue.estimated_resolution_hours,
                issue.last_updated.to_rfc3339(),
                issue.updated_by,
            ],
        )?;
        write_fields(&tx, issue)?;
        append_rows(&tx, issue, 0, 0)?;
        tx.commit()?;
        Ok(())
    }

    fn list(&self, filter: &IssueFilter) -> Result<Vec<Issue>> {
        let conn = self.conn()?;
        let limit = filter.effective_limit().map_or(-1, |l| i64::try_from(l).unwrap_or(i64::MAX));
        let mut stmt = conn.prepare(
            "SELECT id FROM issues
             WHERE (?1 IS NULL OR department_id = ?1)
               AND (?2 IS NULL OR status = ?2)
               AND (?3 IS NULL OR priority = ?3)
             ORDER BY rowid
             LIMIT ?4",
        )?;
        let ids = stmt
            .query_map(
                params![
                    filter.department_id,
                    filter.status.map(|s| s.as_str()),
                    filter.priority.map(|p| p.as_str()),
                    limit,
                ],
                |row| row.get::<_, String>(0),
            )?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let mut issues = Vec::with_capacity(ids.len());
        for id in ids {
            if let Some(issue) = load_issue(&conn, &id)? {
                issues.push(issue);
            }
        }
        Ok(issues)
    }

    fn exists(&self, id: &str) -> Result<bool> {
        let conn = self.conn()?;
        let exists: bool = conn.query_row(
            "SELECT COUNT(*) > 0 FROM issues WHERE id = ?1",
            params![id],
            |row| row.get(0),
        )?;
        Ok(exists)
    }
}

#[cfg(test)]
#[path = "db_tests.rs"]
mod tests;
