// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::{Path, PathBuf};

use civic_core::SqliteStore;

use crate::config::{get_db_path, init_work_dir, Config};
use crate::error::Result;

pub fn run(
    prefix: String,
    actor: Option<String>,
    database: Option<String>,
    path: Option<String>,
) -> Result<()> {
    let target_path = match path {
        Some(p) => PathBuf::from(p),
        None => std::env::current_dir()?,
    };
    let work_dir = run_impl(&target_path, prefix, actor, database)?;
    println!("Initialized issue tracker at {}", work_dir.display());
    Ok(())
}

/// Writes the config and creates the database so later commands find both.
pub(crate) fn run_impl(
    target_path: &Path,
    prefix: String,
    actor: Option<String>,
    database: Option<String>,
) -> Result<PathBuf> {
    let mut config = Config::new(prefix)?;
    config.actor = actor.map(|a| a.trim().to_string()).filter(|a| !a.is_empty());
    config.database = database;

    let work_dir = init_work_dir(target_path, &config)?;
    SqliteStore::open(&get_db_path(&work_dir, &config))?;
    tracing::info!(work_dir = %work_dir.display(), prefix = %config.prefix, "initialized");
    Ok(work_dir)
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
