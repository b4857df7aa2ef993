// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Identifier generation for issues, actions and support requests.
//!
//! Ids are `{prefix}-{hash}` where hash is the first 8 hex chars of a
//! SHA-256 digest over the inputs that make the record unique.

use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};

/// Prefix for action ids.
pub const ACTION_PREFIX: &str = "act";
/// Prefix for support request ids.
pub const SUPPORT_PREFIX: &str = "sup";

fn short_hash(input: &str) -> String {
    let hash = Sha256::digest(input.as_bytes());
    hex::encode(&hash[..4])
}

/// Generate an issue id from prefix, title, and report time.
pub fn generate_id(prefix: &str, title: &str, reported_at: &DateTime<Utc>) -> String {
    let input = format!("{}{}", title, reported_at.to_rfc3339());
    format!("{}-{}", prefix, short_hash(&input))
}

/// Generate a unique issue id, appending an incrementing suffix on collision.
pub fn generate_unique_id<F>(prefix: &str, title: &str, reported_at: &DateTime<Utc>, mut exists: F) -> String
where
    F: FnMut(&str) -> bool,
{
    let base_id = generate_id(prefix, title, reported_at);

    if !exists(&base_id) {
        return base_id;
    }

    let mut suffix = 2;
    loop {
        let id = format!("{}-{}", base_id, suffix);
        if !exists(&id) {
            return id;
        }
        suffix += 1;
    }
}

/// Generate the id of the `seq`-th action of an issue.
///
/// `seq` is the history length before the append, which makes the id
/// unique within the issue even when two actions share a timestamp.
pub fn action_id(issue_id: &str, seq: usize, performed_at: &DateTime<Utc>) -> String {
    let input = format!("{}#{}@{}", issue_id, seq, performed_at.to_rfc3339());
    format!("{}-{}", ACTION_PREFIX, short_hash(&input))
}

/// Generate the id of the `seq`-th support request of an issue.
pub fn support_id(issue_id: &str, seq: usize, created_at: &DateTime<Utc>) -> String {
    let input = format!("{}#{}@{}", issue_id, seq, created_at.to_rfc3339());
    format!("{}-{}", SUPPORT_PREFIX, short_hash(&input))
}

/// Validate that a prefix is valid (2+ lowercase alphanumeric with at least one letter)
pub fn validate_prefix(prefix: &str) -> bool {
    prefix.len() >= 2
        && prefix.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        && prefix.chars().any(|c| c.is_ascii_lowercase())
}

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;
