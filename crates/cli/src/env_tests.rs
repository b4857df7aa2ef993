// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;

#[test]
fn test_vars_constants() {
    assert_eq!(vars::CIVIC_ACTOR, "CIVIC_ACTOR");
    assert_eq!(vars::CIVIC_LOG, "CIVIC_LOG");
    assert_eq!(vars::NO_COLOR, "NO_COLOR");
    assert_eq!(vars::COLOR, "COLOR");
    assert_eq!(vars::USER, "USER");
    assert_eq!(vars::LOGNAME, "LOGNAME");
}

// Only this test touches CIVIC_ACTOR, so it cannot race with the others.
#[test]
fn test_actor_is_trimmed_and_blank_is_unset() {
    std::env::remove_var(vars::CIVIC_ACTOR);
    assert_eq!(actor(), None);

    std::env::set_var(vars::CIVIC_ACTOR, "  u7 ");
    assert_eq!(actor().as_deref(), Some("u7"));

    std::env::set_var(vars::CIVIC_ACTOR, "   ");
    assert_eq!(actor(), None);

    std::env::remove_var(vars::CIVIC_ACTOR);
}

#[test]
fn test_log_filter_reads_civic_log() {
    std::env::set_var(vars::CIVIC_LOG, "civic_core=debug");
    assert_eq!(log_filter().as_deref(), Some("civic_core=debug"));
    std::env::remove_var(vars::CIVIC_LOG);
    assert_eq!(log_filter(), None);
}
