// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Resolves who is performing a command, for the audit trail.

use std::process::Command;

use crate::env;
use crate::error::{Error, Result};

/// Picks the actor recorded as `performed_by`.
///
/// Resolution order:
/// 1. The `--as` flag
/// 2. `CIVIC_ACTOR` (passed in as `from_env`)
/// 3. `actor` in the project config
/// 4. The local identity (git `user.name`, then the login name)
pub fn resolve_actor(
    flag: Option<&str>,
    from_env: Option<String>,
    from_config: Option<&str>,
) -> Result<String> {
    let candidates = [flag.map(str::to_string), from_env, from_config.map(str::to_string)];
    let explicit = candidates
        .into_iter()
        .flatten()
        .map(|s| s.trim().to_string())
        .find(|s| !s.is_empty());

    explicit.or_else(local_user_name).ok_or(Error::NoActor)
}

/// Returns the local user's name: git `user.name`, else the login name
/// unless it is a system account.
pub fn local_user_name() -> Option<String> {
    get_git_user_name().or_else(|| env::unix_user().filter(|name| !is_system_account(name)))
}

fn get_git_user_name() -> Option<String> {
    let output = Command::new("git")
        .args(["config", "--get", "user.name"])
        .output()
        .ok()?;

    if output.status.success() {
        let name = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if !name.is_empty() {
            return Some(name);
        }
    }
    None
}

fn is_system_account(name: &str) -> bool {
    matches!(
        name.to_lowercase().as_str(),
        "root" | "system" | "administrator" | "admin" | "daemon" | "nobody"
    )
}

#[cfg(test)]
#[path = "identity_tests.rs"]
mod tests;
