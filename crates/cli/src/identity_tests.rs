// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

#[parameterized(
    flag_wins = { Some("u1"), Some("u2"), Some("u3"), "u1" },
    env_before_config = { None, Some("u2"), Some("u3"), "u2" },
    config_last = { None, None, Some("u3"), "u3" },
    trimmed = { Some("  u1 "), None, None, "u1" },
)]
fn test_resolve_actor_order(flag: Option<&str>, from_env: Option<&str>, config: Option<&str>, expected: &str) {
    let actor = resolve_actor(flag, from_env.map(str::to_string), config).unwrap();
    assert_eq!(actor, expected);
}

#[test]
fn test_blank_values_are_skipped() {
    let actor = resolve_actor(Some("   "), Some(String::new()), Some("u3")).unwrap();
    assert_eq!(actor, "u3");
}

#[test]
fn test_is_system_account() {
    assert!(is_system_account("root"));
    assert!(is_system_account("ROOT"));
    assert!(is_system_account("nobody"));
    assert!(!is_system_account("alice"));
}
