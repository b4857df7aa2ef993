// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Project configuration management.
//!
//! Configuration is stored in `.civic/config.toml` and includes:
//! - `prefix`: The prefix for issue IDs (e.g., "city" → "city-a1b2c3d4")
//! - `database`: Optional path of the SQLite file
//! - `actor`: Optional default user id recorded as `performed_by`
//! - `[[departments]]`, `[[users]]`, `[[teams]]`: The directory served to
//!   the engine and to the `teams`/`users` listings

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use civic_core::id::validate_prefix;
use civic_core::{Department, StaticDirectory, Team, User};

use crate::error::{Error, Result};

const WORK_DIR_NAME: &str = ".civic";
const CONFIG_FILE_NAME: &str = "config.toml";
const DB_FILE_NAME: &str = "issues.db";
const GITIGNORE_FILE_NAME: &str = ".gitignore";

/// Project configuration stored in `.civic/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Prefix for issue IDs (2+ lowercase alphanumeric with at least one letter).
    pub prefix: String,
    /// Optional path for the database (relative to project root or absolute).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
    /// Default actor when neither `--as` nor `CIVIC_ACTOR` is given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actor: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub departments: Vec<Department>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub users: Vec<User>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub teams: Vec<Team>,
}

impl Config {
    /// Creates a config with the given prefix and an empty directory.
    pub fn new(prefix: String) -> Result<Self> {
        if !validate_prefix(&prefix) {
            return Err(Error::InvalidPrefix);
        }
        Ok(Config {
            prefix,
            database: None,
            actor: None,
            departments: Vec::new(),
            users: Vec::new(),
            teams: Vec::new(),
        })
    }

    pub fn load(work_dir: &Path) -> Result<Self> {
        let config_path = work_dir.join(CONFIG_FILE_NAME);
        let content = fs::read_to_string(&config_path)
            .map_err(|e| Error::Config(format!("failed to read config: {}", e)))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;
        if !validate_prefix(&config.prefix) {
            return Err(Error::InvalidPrefix);
        }
        Ok(config)
    }

    pub fn save(&self, work_dir: &Path) -> Result<()> {
        let config_path = work_dir.join(CONFIG_FILE_NAME);
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))?;
        fs::write(&config_path, content)?;
        Ok(())
    }

    /// The directory described by the `[[departments]]`, `[[users]]` and
    /// `[[teams]]` tables.
    pub fn directory(&self) -> StaticDirectory {
        StaticDirectory::new(self.departments.clone(), self.users.clone(), self.teams.clone())
    }
}

/// Walks up from `start` looking for a `.civic` directory.
pub fn find_work_dir_from(start: &Path) -> Result<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let work_dir = current.join(WORK_DIR_NAME);
        if work_dir.is_dir() {
            return Ok(work_dir);
        }
        if !current.pop() {
            return Err(Error::NotInitialized);
        }
    }
}

/// Walks up from the current directory looking for a `.civic` directory.
pub fn find_work_dir() -> Result<PathBuf> {
    find_work_dir_from(&std::env::current_dir()?)
}

/// Returns the database path for a work dir.
///
/// A relative `database` setting resolves against the project root, the
/// parent of `.civic`.
pub fn get_db_path(work_dir: &Path, config: &Config) -> PathBuf {
    match &config.database {
        Some(database) => {
            let path = Path::new(database);
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                work_dir.parent().unwrap_or(work_dir).join(path)
            }
        }
        None => work_dir.join(DB_FILE_NAME),
    }
}

/// Creates `.civic/` under `path` with a fresh config and a `.gitignore`
/// that keeps the database out of version control.
pub fn init_work_dir(path: &Path, config: &Config) -> Result<PathBuf> {
    let work_dir = path.join(WORK_DIR_NAME);

    if work_dir.join(CONFIG_FILE_NAME).exists() {
        return Err(Error::AlreadyInitialized(work_dir.display().to_string()));
    }

    fs::create_dir_all(&work_dir)?;
    config.save(&work_dir)?;
    fs::write(work_dir.join(GITIGNORE_FILE_NAME), format!("{DB_FILE_NAME}*\n"))?;

    Ok(work_dir)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
