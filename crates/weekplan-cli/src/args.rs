use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{NameCommands, TaskCommands};

/// Main command-line interface for the Weekplan week-planning tool
///
/// Weekplan keeps a reusable catalog of task names and a 7-day planner
/// grid assigning instances of those tasks to weekday/time slots. It
/// provides commands for scheduling, editing and completing tasks, for
/// maintaining the catalog, and for cleaning and scoring the week.
#[derive(Parser)]
#[command(version, about, name = "wp")]
pub struct Args {
    /// Directory holding the planner and catalog documents. Defaults to
    /// $XDG_DATA_HOME/weekplan
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Weekplan CLI
///
/// The CLI is organized into four command categories:
/// - `task`: Operations on scheduled task instances (add, edit, delete, list)
/// - `name`: Operations on the reusable task-name catalog
/// - `clean`: Remove planner entries whose name left the catalog
/// - `points`: Show the week score
#[derive(Subcommand)]
pub enum Commands {
    /// Manage scheduled tasks
    #[command(alias = "t")]
    Task {
        #[command(subcommand)]
        command: TaskCommands,
    },
    /// Manage the task-name catalog
    #[command(alias = "n")]
    Name {
        #[command(subcommand)]
        command: NameCommands,
    },
    /// Remove planner entries whose name is no longer in the catalog
    Clean {
        /// Limit the cleaning pass to one weekday (default: whole week)
        #[arg(value_parser = crate::cli::parse_weekday)]
        weekday: Option<weekplan_core::Weekday>,
    },
    /// Show the week score (1 point per completed task)
    Points,
}
