// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod directory;
pub mod edit;
pub mod init;
pub mod lifecycle;
pub mod list;
pub mod new;
pub mod schema;
pub mod show;
pub mod stats;
pub mod support;
#[cfg(test)]
#[path = "mod_tests.rs"]
pub mod testing;

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use civic_core::notice::for_action;
use civic_core::{ActionEngine, Issue, SqliteStore, StaticDirectory};

use crate::config::{find_work_dir_from, get_db_path, Config};
use crate::display::format_notice;
use crate::env;
use crate::error::{Error, Result};
use crate::identity::resolve_actor;

/// The engine as the CLI runs it: SQLite storage, config-seeded directory.
pub type Engine = ActionEngine<SqliteStore, StaticDirectory>;

/// Everything a command needs: the engine, the project config and whoever
/// asked for `--as`.
pub struct Context {
    pub engine: Engine,
    pub config: Config,
    actor_flag: Option<String>,
}

impl Context {
    /// Opens the project containing `directory` (or the current directory).
    pub fn open(directory: Option<&str>, actor_flag: Option<String>) -> Result<Self> {
        let start = match directory {
            Some(dir) => PathBuf::from(dir),
            None => std::env::current_dir()?,
        };
        let work_dir = find_work_dir_from(&start)?;
        let config = Config::load(&work_dir)?;
        let db_path = get_db_path(&work_dir, &config);
        tracing::debug!(db = %db_path.display(), "opening issue store");
        let store = SqliteStore::open(&db_path)?;
        Ok(Context::with_store(store, config, actor_flag))
    }

    pub fn with_store(store: SqliteStore, config: Config, actor_flag: Option<String>) -> Self {
        let engine = ActionEngine::new(store, config.directory());
        Context { engine, config, actor_flag }
    }

    /// The user recorded as `performed_by`.
    pub fn actor(&self) -> Result<String> {
        resolve_actor(self.actor_flag.as_deref(), env::actor(), self.config.actor.as_deref())
    }
}

/// Parses an RFC 3339 timestamp given on the command line.
pub fn parse_timestamp(s: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s.trim())
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| Error::InvalidTimestamp {
            reason: format!("'{}': {}", s, e),
        })
}

/// Prints what a mutation recorded, and whom a collaborator should tell.
pub fn report(issue: &Issue) {
    let Some(action) = issue.last_action() else {
        return;
    };
    println!("{}: {} [{}]", issue.id, action.description, issue.status);
    if let Some(notice) = for_action(issue, action) {
        tracing::info!(
            issue_id = %issue.id,
            recipient = %notice.recipient,
            level = %notice.level,
            "notice"
        );
        println!("  {}", format_notice(&notice));
    }
}
