//! # task-tracker
//!
//! A small command-line task tracker. Tasks carry a description, a lifecycle
//! status (todo / in-progress / done) and timestamps, and are persisted as a
//! single JSON file on local disk.
//!
//! ## Usage
//!
//! ```bash
//! # Add a task
//! task-tracker add "Buy groceries"
//!
//! # Update a description
//! task-tracker update 1 "Buy groceries and cook dinner"
//!
//! # Move a task through its lifecycle
//! task-tracker mark-in-progress 1
//! task-tracker mark-done 1
//!
//! # List tasks, optionally by status
//! task-tracker list
//! task-tracker list done
//!
//! # Remove a task
//! task-tracker delete 1
//! ```
//!
//! ## Data storage
//!
//! Tasks are saved as a JSON array in your local data directory:
//! *   Linux: `~/.local/share/task-tracker/tasks.json`
//! *   macOS: `~/Library/Application Support/task-tracker/tasks.json`
//! *   Windows: `%APPDATA%\task-tracker\tasks.json`
//!
//! You can override this by setting the `TASK_TRACKER_DB` environment
//! variable. The file is created with initial content `[]` on first use.

use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use std::io;
use std::process::ExitCode;

use task_tracker::commands::*;
use task_tracker::models::Status;
use task_tracker::ops::StatusFilter;
use task_tracker::storage::Store;

#[derive(Parser)]
#[command(name = "task-tracker")]
#[command(about = "Simple command-line task tracker", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new task
    Add {
        /// Task description (quoted if it has spaces)
        description: String,
    },
    /// Update a task's description
    Update {
        id: u64,
        /// New description
        description: String,
    },
    /// Remove a task
    Delete {
        id: u64,
    },
    /// Mark a task as todo
    MarkTodo {
        id: u64,
    },
    /// Mark a task as in progress
    MarkInProgress {
        id: u64,
    },
    /// Mark a task as done
    MarkDone {
        id: u64,
    },
    /// List tasks, optionally filtered by status
    List {
        /// Only show tasks with this status
        status: Option<ListFilter>,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ListFilter {
    Todo,
    InProgress,
    Done,
}

fn to_status_filter(f: Option<ListFilter>) -> StatusFilter {
    match f {
        None => StatusFilter::All,
        Some(ListFilter::Todo) => StatusFilter::Todo,
        Some(ListFilter::InProgress) => StatusFilter::InProgress,
        Some(ListFilter::Done) => StatusFilter::Done,
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let store = Store::open_default();
    let result = match cli.command {
        Commands::Add { description } => cmd_add(&store, &description),
        Commands::Update { id, description } => cmd_update(&store, id, &description),
        Commands::Delete { id } => cmd_delete(&store, id),
        Commands::MarkTodo { id } => cmd_mark(&store, id, Status::Todo),
        Commands::MarkInProgress { id } => cmd_mark(&store, id, Status::InProgress),
        Commands::MarkDone { id } => cmd_mark(&store, id, Status::Done),
        Commands::List { status } => cmd_list(&store, to_status_filter(status)),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "task-tracker", &mut io::stdout());
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
