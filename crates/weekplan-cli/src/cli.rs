//! Command handlers and clap argument wrappers.
//!
//! Follows the parameter wrapper pattern: each command defines a clap
//! argument struct here and converts it into the framework-free parameter
//! types of `weekplan_core`, so the core stays clap-agnostic and the
//! conversion is explicit at the boundary.

use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use weekplan_core::{
    params::{AddTask, CleanScope, UpdateTaskRequest},
    CatalogNames, PointsSummary, Stores, Weekday, WeekplanError,
};

/// Parses a weekday CLI argument, case-insensitively.
pub fn parse_weekday(s: &str) -> Result<Weekday, WeekplanError> {
    s.parse()
}

/// Task subcommands operating on the planner grid
#[derive(Subcommand)]
pub enum TaskCommands {
    /// Schedule a task at a weekday/time slot
    #[command(alias = "a")]
    Add(AddTaskArgs),
    /// Edit the task at a weekday/time slot
    #[command(alias = "e")]
    Edit(EditTaskArgs),
    /// Delete the task at a weekday/time slot
    #[command(alias = "d")]
    Delete {
        /// Day of the week
        #[arg(value_parser = parse_weekday)]
        weekday: Weekday,
        /// Slot time (HH:MM)
        time: String,
    },
    /// List scheduled tasks for one day or the whole week
    #[command(alias = "l")]
    List {
        /// Day of the week (default: whole week)
        #[arg(value_parser = parse_weekday)]
        weekday: Option<Weekday>,
    },
}

/// Catalog subcommands operating on the task-name list
#[derive(Subcommand)]
pub enum NameCommands {
    /// Add a name to the catalog
    Add {
        /// The task name (case-sensitive)
        name: String,
    },
    /// Remove a name from the catalog and clean orphaned planner entries
    Remove {
        /// The task name (case-sensitive)
        name: String,
    },
    /// List the catalog in alphabetic order
    List,
}

/// Schedule a task at a weekday/time slot
#[derive(Args)]
pub struct AddTaskArgs {
    /// Day of the week
    #[arg(value_parser = parse_weekday)]
    pub weekday: Weekday,
    /// Slot time (HH:MM, 24-hour)
    pub time: String,
    /// Task name; must already exist in the catalog
    pub name: String,
    /// Priority from 1 to 10 (default 5)
    #[arg(short, long)]
    pub priority: Option<u8>,
    /// Optional free-text description
    #[arg(short, long)]
    pub description: Option<String>,
}

impl From<AddTaskArgs> for AddTask {
    fn from(val: AddTaskArgs) -> Self {
        AddTask {
            weekday: val.weekday,
            time: val.time,
            name: val.name,
            priority: val.priority,
            description: val.description,
        }
    }
}

/// Edit the task at a weekday/time slot
#[derive(Args)]
pub struct EditTaskArgs {
    /// Day of the week
    #[arg(value_parser = parse_weekday)]
    pub weekday: Weekday,
    /// Slot time (HH:MM)
    pub time: String,
    /// New task name
    #[arg(long)]
    pub name: Option<String>,
    /// New priority from 1 to 10
    #[arg(short, long)]
    pub priority: Option<u8>,
    /// New description
    #[arg(short, long)]
    pub description: Option<String>,
    /// Mark the task completed
    #[arg(long)]
    pub done: bool,
    /// Mark the task not completed
    #[arg(long, conflicts_with = "done")]
    pub undone: bool,
    /// Move the task to a new slot time (HH:MM)
    #[arg(long = "move-time")]
    pub move_time: Option<String>,
    /// Move the task to another weekday
    #[arg(long = "move-weekday", value_parser = parse_weekday)]
    pub move_weekday: Option<Weekday>,
}

impl EditTaskArgs {
    fn done_flag(&self) -> Option<bool> {
        match (self.done, self.undone) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

impl From<&EditTaskArgs> for UpdateTaskRequest {
    fn from(val: &EditTaskArgs) -> Self {
        UpdateTaskRequest {
            name: val.name.clone(),
            priority: val.priority,
            description: val.description.clone(),
            done: val.done_flag(),
            time: val.move_time.clone(),
            weekday: val.move_weekday,
        }
    }
}

/// CLI command executor holding the opened stores.
pub struct Cli {
    stores: Stores,
}

impl Cli {
    pub fn new(stores: Stores) -> Self {
        Self { stores }
    }

    /// Dispatches a task subcommand.
    pub fn handle_task_command(&mut self, command: TaskCommands) -> Result<()> {
        match command {
            TaskCommands::Add(args) => self.add_task(args),
            TaskCommands::Edit(args) => self.edit_task(&args),
            TaskCommands::Delete { weekday, time } => self.delete_task(weekday, &time),
            TaskCommands::List { weekday } => self.list_tasks(weekday),
        }
    }

    /// Dispatches a catalog subcommand.
    pub fn handle_name_command(&mut self, command: NameCommands) -> Result<()> {
        match command {
            NameCommands::Add { name } => self.add_name(&name),
            NameCommands::Remove { name } => self.remove_name(&name),
            NameCommands::List => self.list_names(),
        }
    }

    fn add_task(&mut self, args: AddTaskArgs) -> Result<()> {
        // The planner stores names independently of the catalog, so the
        // catalog membership check is the caller's job.
        if !self.stores.catalog.contains(&args.name) {
            bail!(
                "Task name '{}' is not in the catalog; add it first with 'wp name add'",
                args.name
            );
        }

        let task = self.stores.planner.add_task(&args.into())?;
        println!("Scheduled on {}: {}", task.weekday(), task);
        Ok(())
    }

    fn edit_task(&mut self, args: &EditTaskArgs) -> Result<()> {
        let update = UpdateTaskRequest::from(args);
        if update.is_empty() {
            bail!("Nothing to update; pass at least one field flag");
        }
        if let Some(name) = &update.name {
            if !self.stores.catalog.contains(name) {
                bail!(
                    "Task name '{name}' is not in the catalog; add it first with 'wp name add'"
                );
            }
        }

        let task = self.stores.planner.edit_task(args.weekday, &args.time, &update)?;
        println!("Updated on {}: {}", task.weekday(), task);
        Ok(())
    }

    fn delete_task(&mut self, weekday: Weekday, time: &str) -> Result<()> {
        let task = self.stores.planner.delete_task(weekday, time)?;
        println!("Deleted from {}: {}", weekday, task);
        Ok(())
    }

    fn list_tasks(&self, weekday: Option<Weekday>) -> Result<()> {
        match weekday {
            Some(weekday) => print!("{}", self.stores.planner.day_schedule(weekday)),
            None => print!("{}", self.stores.planner.week_overview()),
        }
        Ok(())
    }

    /// Prints the whole week; the default command.
    pub fn list_week(&self) -> Result<()> {
        self.list_tasks(None)
    }

    fn add_name(&mut self, name: &str) -> Result<()> {
        self.stores.catalog.add(name)?;
        println!("Added '{name}' to the catalog.");
        Ok(())
    }

    fn remove_name(&mut self, name: &str) -> Result<()> {
        // Two-step sequence: catalog removal, then the planner cleaning
        // pass against the remaining names.
        self.stores.catalog.remove(name)?;
        let removed = self
            .stores
            .planner
            .clean(self.stores.catalog.as_set(), CleanScope::Week)?;

        println!("Removed '{name}' from the catalog.");
        if removed > 0 {
            println!("Cleaned {removed} scheduled task(s) referencing it.");
        }
        Ok(())
    }

    fn list_names(&self) -> Result<()> {
        print!("{}", CatalogNames(self.stores.catalog.list()));
        Ok(())
    }

    /// Runs an explicit cleaning pass for one day or the whole week.
    pub fn clean(&mut self, weekday: Option<Weekday>) -> Result<()> {
        let scope = match weekday {
            Some(weekday) => CleanScope::Day(weekday),
            None => CleanScope::Week,
        };
        let removed = self.stores.planner.clean(self.stores.catalog.as_set(), scope)?;
        println!("Cleaned {removed} task(s).");
        Ok(())
    }

    /// Prints the week score.
    pub fn points(&self) -> Result<()> {
        let scheduled: usize = Weekday::all()
            .map(|weekday| self.stores.planner.count_scheduled_for(weekday))
            .sum();
        print!(
            "{}",
            PointsSummary {
                points: self.stores.planner.count_points(),
                scheduled,
            }
        );
        Ok(())
    }
}
