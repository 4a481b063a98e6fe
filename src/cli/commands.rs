//! CLI command definitions using clap.
//!
//! Defines the main CLI structure and subcommands:
//! - add/update: create or edit a task (flags, with interactive fallback)
//! - list/show: display tasks
//! - complete/delete: change or remove a task
//! - search/filter: select subsets

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use taskmgr::storage::Backend;

/// taskmgr - a personal task tracker
#[derive(Parser, Debug)]
#[command(name = "taskmgr")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Storage backend (overrides config; default is sqlite)
    #[arg(short, long, global = true, value_enum)]
    pub storage: Option<Backend>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Main subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new task (missing fields are collected interactively)
    Add {
        /// Task title
        #[arg(long)]
        title: Option<String>,

        /// Task description
        #[arg(long)]
        description: Option<String>,

        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due_date: Option<String>,

        /// Priority (1-low, 2-medium, 3-high)
        #[arg(long)]
        priority: Option<u8>,

        /// Category label
        #[arg(long)]
        category: Option<String>,
    },

    /// List all tasks
    List,

    /// Show details of a task
    Show {
        /// Task id
        id: i64,
    },

    /// Mark a task as completed
    Complete {
        /// Task id
        id: i64,
    },

    /// Delete a task
    Delete {
        /// Task id
        id: i64,
    },

    /// Update a task interactively (blank keeps the current value)
    Update {
        /// Task id
        id: i64,
    },

    /// Search tasks by title, description, or category
    Search {
        /// Search text (case-insensitive substring)
        query: String,
    },

    /// Filter tasks; supplied predicates are ANDed
    Filter {
        /// Show completed (yes) or open (no) tasks
        #[arg(long, value_enum)]
        completed: Option<YesNo>,

        /// Filter by priority (1-3)
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=3))]
        priority: Option<u8>,

        /// Filter by category (case-insensitive exact match)
        #[arg(long)]
        category: Option<String>,
    },
}

/// yes/no argument for the --completed filter
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum YesNo {
    Yes,
    No,
}

impl YesNo {
    pub fn as_bool(self) -> bool {
        matches!(self, YesNo::Yes)
    }
}
