// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use std::io::IsTerminal;

use civicrs::{env, Cli};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Logs go to stderr so stdout stays parseable; `CIVIC_LOG` takes
/// `RUST_LOG`-style directives.
fn setup_logging() {
    let filter = env::log_filter()
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
}

fn main() {
    setup_logging();
    let cli = Cli::parse();
    if let Err(e) = civicrs::run(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
