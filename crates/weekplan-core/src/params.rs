//! Parameter structures for week planner operations.
//!
//! Shared parameter types usable across interfaces (CLI today, others
//! later) without framework-specific derives. Interface layers define their
//! own argument wrappers and convert into these via `From`/`Into`, keeping
//! clap concerns out of the core.

use serde::{Deserialize, Serialize};

use crate::models::Weekday;

/// Parameters for scheduling a new task instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTask {
    /// Day of the week to schedule on
    pub weekday: Weekday,
    /// Slot time in `HH:MM` 24-hour form
    pub time: String,
    /// Task name; must exist in the catalog at creation time
    pub name: String,
    /// Priority 1..=10; defaults to the midpoint when omitted
    pub priority: Option<u8>,
    /// Optional free-text description
    pub description: Option<String>,
}

/// Field updates for an existing task instance.
///
/// All fields are optional; only provided fields are applied. Changing
/// `time` or `weekday` moves the instance to a new slot, which must be
/// free; a failed move leaves the original untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTaskRequest {
    pub name: Option<String>,
    pub priority: Option<u8>,
    pub description: Option<String>,
    pub done: Option<bool>,
    pub time: Option<String>,
    pub weekday: Option<Weekday>,
}

impl UpdateTaskRequest {
    /// Returns true when no field is set, so an edit would be a no-op.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.priority.is_none()
            && self.description.is_none()
            && self.done.is_none()
            && self.time.is_none()
            && self.weekday.is_none()
    }
}

/// Scope of a planner cleaning pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CleanScope {
    /// Clean a single weekday
    Day(Weekday),
    /// Clean the whole week
    Week,
}

impl CleanScope {
    /// The weekdays covered by this scope, in week order.
    pub fn days(self) -> Vec<Weekday> {
        match self {
            CleanScope::Day(day) => vec![day],
            CleanScope::Week => Weekday::ALL.to_vec(),
        }
    }
}
