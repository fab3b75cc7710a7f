//! Command-line interface for tsk
//!
//! This module defines the CLI structure using clap derive macros.
//! Command implementations live in the `tasks` submodule.

use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};

use crate::error::Result;
use crate::output::OutputOptions;
use crate::store::{self, TaskStore};
use crate::task::Priority;

mod tasks;

/// tsk - personal task tracker
///
/// Records tasks with a priority and completion state in a local JSON file.
#[derive(Parser, Debug)]
#[command(name = "tsk")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the store file (defaults to ~/.tsk/tasks.json)
    #[arg(long, global = true, env = "TSK_FILE")]
    pub file: Option<PathBuf>,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a task
    Add {
        /// Task description
        task: String,

        /// Task priority
        #[arg(short, long, value_enum, default_value_t = Priority::Medium)]
        priority: Priority,
    },

    /// List tasks (pending only by default)
    List {
        /// Include completed tasks
        #[arg(short, long)]
        all: bool,
    },

    /// Mark a task as completed
    Complete {
        /// Task id
        id: u64,
    },

    /// Delete a task
    Delete {
        /// Task id
        id: u64,
    },

    /// Remove all completed tasks
    Clear,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let command = match self.command {
            Some(command) => command,
            None => {
                // Bare `tsk` prints usage and succeeds.
                Cli::command().print_help()?;
                return Ok(());
            }
        };

        let options = OutputOptions {
            json: self.json,
            quiet: self.quiet,
        };

        let path = match self.file {
            Some(path) => path,
            None => store::default_store_path()?,
        };
        let mut store = TaskStore::open(path)?;

        match command {
            Commands::Add { task, priority } => tasks::add(&mut store, &task, priority, options),
            Commands::List { all } => tasks::list(&store, all, options),
            Commands::Complete { id } => tasks::complete(&mut store, id, options),
            Commands::Delete { id } => tasks::delete(&mut store, id, options),
            Commands::Clear => tasks::clear(&mut store, options),
        }
    }
}
