// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

/// Directory tables appended to every test project's config.
const DIRECTORY: &str = r#"
[[departments]]
id = "public-works"
name = "Public Works"

[[departments]]
id = "police"
name = "Police"

[[users]]
id = "u1"
name = "Dana Ortiz"
email = "dana@city.example"
role = "department_admin"
department_id = "public-works"

[[users]]
id = "u5"
name = "Sam Lee"
email = "sam@city.example"
role = "supervisor"
department_id = "police"

[[teams]]
id = "teamX"
name = "Road Crew"
department_id = "public-works"
members = ["u7", "u9"]
lead = "u7"
"#;

/// The binary under test, isolated from the caller's actor and colors.
pub fn civic() -> Command {
    let mut cmd = cargo_bin_cmd!("civic");
    cmd.env_remove("CIVIC_ACTOR").env_remove("CIVIC_LOG").env("NO_COLOR", "1");
    cmd
}

/// Helper to create an initialized temp directory acting as `u1`, with a
/// seeded directory.
pub fn init_temp() -> TempDir {
    let temp = TempDir::new().unwrap();
    civic()
        .args(["init", "--prefix", "city", "--actor", "u1"])
        .current_dir(temp.path())
        .assert()
        .success();

    let config_path = temp.path().join(".civic").join("config.toml");
    let mut config = std::fs::read_to_string(&config_path).unwrap();
    config.push_str(DIRECTORY);
    std::fs::write(&config_path, config).unwrap();
    temp
}

/// Helper to report a high-priority public-works issue and return its ID
pub fn create_issue(temp: &TempDir, title: &str) -> String {
    let output = civic()
        .args(["new", title, "-d", "public-works", "-p", "high", "-o", "id"])
        .current_dir(temp.path())
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// Runs a command in `temp` and returns its stdout, asserting success.
pub fn stdout_of(temp: &TempDir, args: &[&str]) -> String {
    let output = civic().args(args).current_dir(temp.path()).output().unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Runs a command with `-o json` and parses its output.
pub fn json_of(temp: &TempDir, args: &[&str]) -> serde_json::Value {
    let mut args = args.to_vec();
    args.extend(["-o", "json"]);
    serde_json::from_str(&stdout_of(temp, &args)).unwrap()
}
