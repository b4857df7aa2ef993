// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::cli::Cli;
use clap::CommandFactory;

#[test]
fn every_listed_command_exists() {
    let cmd = Cli::command();
    let listed = commands();
    for sub in cmd.get_subcommands() {
        let name = sub.get_name();
        if name == "help" {
            continue;
        }
        assert!(listed.contains(name), "help list is missing '{name}'");
    }
}

#[test]
fn template_keeps_clap_placeholders() {
    let t = template();
    assert!(t.contains("{usage}"));
    assert!(t.contains("{options}"));
    assert!(t.contains("{before-help}"));
}
