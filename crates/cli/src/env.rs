// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! All runtime environment variables used by the CLI are defined here
//! with typed accessor functions. The variable name constants are generated
//! by `build.rs` and live in the [`vars`] submodule.

/// Generated environment variable name constants.
pub mod vars {
    include!(concat!(env!("OUT_DIR"), "/env_vars.rs"));
}

fn non_blank(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Returns the value of `CIVIC_ACTOR` if set and not blank.
pub fn actor() -> Option<String> {
    non_blank(vars::CIVIC_ACTOR)
}

/// Returns the `CIVIC_LOG` filter directive if set.
pub fn log_filter() -> Option<String> {
    non_blank(vars::CIVIC_LOG)
}

/// Returns `true` if `NO_COLOR=1`.
pub fn no_color() -> bool {
    std::env::var(vars::NO_COLOR).is_ok_and(|v| v == "1")
}

/// Returns `true` if `COLOR=1`.
pub fn force_color() -> bool {
    std::env::var(vars::COLOR).is_ok_and(|v| v == "1")
}

/// Returns the login name from `USER`, falling back to `LOGNAME`.
pub fn unix_user() -> Option<String> {
    non_blank(vars::USER).or_else(|| non_blank(vars::LOGNAME))
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
