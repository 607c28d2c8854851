//! The scheduled task instance and its bounded priority.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{TimeOfDay, Weekday};
use crate::error::{Result, WeekplanError};

/// Task priority in the range 1..=10, defaulting to the midpoint.
///
/// The `try_from` serde attribute rejects out-of-range values already at
/// document parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Priority(u8);

impl Priority {
    /// Lowest accepted priority.
    pub const MIN: u8 = 1;
    /// Highest accepted priority.
    pub const MAX: u8 = 10;

    /// Creates a priority, rejecting values outside 1..=10.
    pub fn new(value: u8) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(WeekplanError::InvalidPriority {
                value,
                min: Self::MIN,
                max: Self::MAX,
            })
        }
    }

    /// The raw priority value.
    pub fn value(self) -> u8 {
        self.0
    }
}

impl Default for Priority {
    fn default() -> Self {
        Self(5)
    }
}

impl TryFrom<u8> for Priority {
    type Error = WeekplanError;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Priority> for u8 {
    fn from(priority: Priority) -> Self {
        priority.0
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One scheduled occurrence of a catalog task.
///
/// The name must correspond to a catalog entry at creation time but is
/// stored independently; removing the catalog entry does not retroactively
/// rename existing instances, only a cleaning pass removes orphans. Within
/// one weekday the time is unique; the planner store enforces that
/// invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskInstance {
    name: String,
    weekday: Weekday,
    time: TimeOfDay,
    priority: Priority,
    description: String,
    done: bool,
}

impl TaskInstance {
    /// Creates a task instance with a validated, non-empty name.
    ///
    /// New instances start not done.
    pub fn new(
        name: &str,
        weekday: Weekday,
        time: TimeOfDay,
        priority: Priority,
        description: String,
    ) -> Result<Self> {
        Self::validate_name(name)?;
        Ok(Self {
            name: name.to_string(),
            weekday,
            time,
            priority,
            description,
            done: false,
        })
    }

    fn validate_name(name: &str) -> Result<()> {
        if name.trim().is_empty() {
            Err(WeekplanError::invalid_name("name must not be empty"))
        } else {
            Ok(())
        }
    }

    /// The task name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The weekday this instance is scheduled on.
    pub fn weekday(&self) -> Weekday {
        self.weekday
    }

    /// The time slot this instance occupies.
    pub fn time(&self) -> TimeOfDay {
        self.time
    }

    /// The task priority.
    pub fn priority(&self) -> Priority {
        self.priority
    }

    /// The free-text description (may be empty).
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Whether the task has been completed.
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Renames the instance, rejecting empty names.
    pub fn set_name(&mut self, name: &str) -> Result<()> {
        Self::validate_name(name)?;
        self.name = name.to_string();
        Ok(())
    }

    pub fn set_priority(&mut self, priority: Priority) {
        self.priority = priority;
    }

    pub fn set_description(&mut self, description: &str) {
        self.description = description.to_string();
    }

    pub fn set_done(&mut self, done: bool) {
        self.done = done;
    }

    pub(crate) fn set_time(&mut self, time: TimeOfDay) {
        self.time = time;
    }

    pub(crate) fn set_weekday(&mut self, weekday: Weekday) {
        self.weekday = weekday;
    }

    /// Points contributed to the week score: a flat 1 when done, else 0.
    pub fn points(&self) -> u32 {
        u32::from(self.done)
    }
}

/// Compact one-line summary: time, done marker, name, priority.
impl fmt::Display for TaskInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.done { "x" } else { " " };
        write!(
            f,
            "{} [{}] {} (priority {})",
            self.time, marker, self.name, self.priority
        )?;
        if !self.description.is_empty() {
            write!(f, " - {}", self.description)?;
        }
        Ok(())
    }
}

/// The planner-document value shape for one slot.
///
/// Weekday and time are implied by the slot position in the document, not
/// duplicated here. Unknown fields are rejected so a malformed document
/// surfaces as corruption instead of being silently coerced.
#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct StoredTask {
    pub name: String,
    pub priority: Priority,
    pub description: String,
    pub done: bool,
}

impl StoredTask {
    /// Reconstructs the in-memory instance at its document position.
    pub fn into_instance(self, weekday: Weekday, time: TimeOfDay) -> Result<TaskInstance> {
        let mut task = TaskInstance::new(&self.name, weekday, time, self.priority, self.description)?;
        task.set_done(self.done);
        Ok(task)
    }
}

impl From<&TaskInstance> for StoredTask {
    fn from(task: &TaskInstance) -> Self {
        Self {
            name: task.name.clone(),
            priority: task.priority,
            description: task.description.clone(),
            done: task.done,
        }
    }
}
