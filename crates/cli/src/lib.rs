// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! civicrs - command-line front end for the civic issue engine.
//!
//! This crate provides the `civic` binary: it finds the project's `.civic/`
//! directory, opens the SQLite store, seeds the team and user directory from
//! config and maps each subcommand onto one [`civic_core::ActionEngine`]
//! call.
//!
//! # Main Components
//!
//! - [`Config`] - Project configuration (prefix, database, actor, directory)
//! - [`Cli`] / [`Command`] - The clap command tree
//! - [`Error`] - Error types for all operations
//!
//! ```rust,ignore
//! use civicrs::{find_work_dir, get_db_path, Config};
//!
//! let work_dir = find_work_dir()?;
//! let config = Config::load(&work_dir)?;
//! let store = civic_core::SqliteStore::open(&get_db_path(&work_dir, &config))?;
//! ```

mod cli;
pub mod colors;
mod commands;
mod display;
pub mod env;
pub mod help;
mod identity;

pub mod config;
pub mod error;

pub use cli::{Cli, Command, ListFilterArgs, LocationArgs, OutputFormat, SchemaCommand};
pub use config::{find_work_dir, get_db_path, init_work_dir, Config};
pub use error::{Error, Result};

use clap::CommandFactory;
use clap_complete::generate;

use commands::edit::EditArgs;
use commands::new::NewArgs;
use commands::support::SupportArgs;
use commands::Context;

pub fn run(cli: Cli) -> Result<()> {
    let open = || Context::open(cli.directory.as_deref(), cli.actor.clone());

    match cli.command {
        Command::Init {
            prefix,
            default_actor,
            database,
            path,
        } => commands::init::run(prefix, default_actor, database, path.or(cli.directory.clone())),
        Command::New {
            title,
            department,
            priority,
            description,
            category,
            tag,
            reporter,
            assignee,
            due,
            estimate,
            location,
            output,
        } => {
            let args = NewArgs {
                title,
                department,
                priority,
                description,
                category,
                tags: tag,
                reporter,
                assignee,
                due,
                estimate,
                location,
            };
            commands::new::run(&open()?, args, output)
        }
        Command::List { filter, output } => commands::list::run(&open()?, filter, output),
        Command::Show { id, output } => commands::show::run(&open()?, &id, output),
        Command::Log { id, output } => commands::show::log(&open()?, &id, output),
        Command::Assign {
            id,
            assignee,
            reason,
        } => commands::lifecycle::assign(&open()?, &id, &assignee, reason),
        Command::Team { id, team, reason } => {
            commands::lifecycle::team(&open()?, &id, &team, reason)
        }
        Command::Act { id, step, notes } => commands::lifecycle::act(&open()?, &id, &step, notes),
        Command::Pause { id, reason } => commands::lifecycle::pause(&open()?, &id, &reason),
        Command::Rollback { id, target } => commands::lifecycle::rollback(&open()?, &id, target),
        Command::Edit {
            id,
            title,
            description,
            priority,
            category,
            tag,
            due,
        } => {
            let args = EditArgs {
                title,
                description,
                priority,
                category,
                tags: tag,
                due,
            };
            commands::edit::run(&open()?, &id, args)
        }
        Command::Support {
            id,
            request_type,
            to,
            description,
            priority,
            from,
            by,
            output,
        } => {
            let args = SupportArgs {
                request_type,
                to,
                description,
                priority,
                from,
                by,
            };
            commands::support::run(&open()?, &id, args, output)
        }
        Command::Comment { id, text } => commands::lifecycle::comment(&open()?, &id, &text),
        Command::Stats { department, output } => {
            commands::stats::run(&open()?, department, output)
        }
        Command::Teams { department, output } => {
            commands::directory::teams(&open()?, department.as_deref(), output)
        }
        Command::Users { department, output } => {
            commands::directory::users(&open()?, department.as_deref(), output)
        }
        Command::Schema(cmd) => commands::schema::run(cmd),
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "civic", &mut std::io::stdout());
            Ok(())
        }
    }
}
