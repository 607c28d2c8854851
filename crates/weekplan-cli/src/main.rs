//! Weekplan CLI Application
//!
//! Command-line interface for the weekplan week-planning tool. All
//! scheduling logic lives in `weekplan_core`; this binary parses arguments,
//! invokes the store operations, and prints what they return.

mod args;
mod cli;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use weekplan_core::StoreBuilder;
use Commands::*;

fn main() -> Result<()> {
    env_logger::init();

    let Args { data_dir, command } = Args::parse();

    let stores = StoreBuilder::new()
        .with_data_dir(data_dir)
        .build()
        .context("Failed to open the week planner")?;

    info!("Weekplan started");

    let mut cli = Cli::new(stores);
    match command {
        Some(Task { command }) => cli.handle_task_command(command),
        Some(Name { command }) => cli.handle_name_command(command),
        Some(Clean { weekday }) => cli.clean(weekday),
        Some(Points) => cli.points(),
        None => cli.list_week(),
    }
}
