// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the civic CLI.
///
/// Core failures pass through unchanged so their hints reach the user.
#[derive(Debug, Error)]
pub enum Error {
    #[error("not initialized: run 'civic init' first")]
    NotInitialized,

    #[error("already initialized at {0}")]
    AlreadyInitialized(String),

    #[error("invalid prefix: must be 2+ lowercase alphanumeric with at least one letter")]
    InvalidPrefix,

    #[error("no actor configured\n  hint: pass --as <user>, set CIVIC_ACTOR, or add `actor = \"...\"` to .civic/config.toml")]
    NoActor,

    #[error("invalid timestamp: {reason}")]
    InvalidTimestamp { reason: String },

    #[error("invalid location: {reason}")]
    InvalidLocation { reason: String },

    #[error("config error: {0}")]
    Config(String),

    #[error(transparent)]
    Core(#[from] civic_core::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for civicrs operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
