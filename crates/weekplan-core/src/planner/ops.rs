//! Mutating planner operations: add, edit, delete, clean.
//!
//! Each operation validates its input, applies the change to the grid,
//! persists, and rolls the grid back if the write fails, so the caller may
//! retry against unchanged state.

use std::collections::BTreeSet;

use log::info;

use super::PlannerStore;
use crate::{
    error::{Result, WeekplanError},
    models::{Priority, TaskInstance, TimeOfDay, Weekday},
    params::{AddTask, CleanScope, UpdateTaskRequest},
};

impl PlannerStore {
    /// Schedules a new task instance and persists the planner.
    ///
    /// Fails with `SlotOccupied` if the day/time already holds a task, and
    /// with `InvalidTime`/`InvalidPriority`/`InvalidName` on malformed
    /// fields. Returns the created instance.
    pub fn add_task(&mut self, params: &AddTask) -> Result<TaskInstance> {
        let time: TimeOfDay = params.time.parse()?;
        let priority = match params.priority {
            Some(value) => Priority::new(value)?,
            None => Priority::default(),
        };
        let task = TaskInstance::new(
            &params.name,
            params.weekday,
            time,
            priority,
            params.description.clone().unwrap_or_default(),
        )?;

        if self.planner.get(params.weekday, time).is_some() {
            return Err(WeekplanError::SlotOccupied {
                weekday: params.weekday,
                time,
            });
        }

        self.planner.insert(task.clone());
        if let Err(e) = self.save() {
            self.planner.remove(params.weekday, time);
            return Err(e);
        }

        info!("scheduled '{}' at {} on {}", task.name(), time, params.weekday);
        Ok(task)
    }

    /// Applies field updates to the instance at a slot and persists.
    ///
    /// Fails with `SlotNotFound` when the slot is empty. When the update
    /// changes `time` or `weekday` the target slot must be free
    /// (`SlotOccupied` otherwise); the move is a delete-then-insert under
    /// one call, and a failed move leaves the original instance untouched.
    /// Returns the updated instance.
    pub fn edit_task(
        &mut self,
        weekday: Weekday,
        time: &str,
        update: &UpdateTaskRequest,
    ) -> Result<TaskInstance> {
        let time: TimeOfDay = time.parse()?;
        let current = self
            .planner
            .get(weekday, time)
            .cloned()
            .ok_or(WeekplanError::SlotNotFound { weekday, time })?;

        let mut updated = current.clone();
        if let Some(name) = &update.name {
            updated.set_name(name)?;
        }
        if let Some(priority) = update.priority {
            updated.set_priority(Priority::new(priority)?);
        }
        if let Some(description) = &update.description {
            updated.set_description(description);
        }
        if let Some(done) = update.done {
            updated.set_done(done);
        }
        if let Some(new_time) = &update.time {
            updated.set_time(new_time.parse()?);
        }
        if let Some(new_weekday) = update.weekday {
            updated.set_weekday(new_weekday);
        }

        let moved = (updated.weekday(), updated.time()) != (weekday, time);
        if moved && self.planner.get(updated.weekday(), updated.time()).is_some() {
            return Err(WeekplanError::SlotOccupied {
                weekday: updated.weekday(),
                time: updated.time(),
            });
        }

        self.planner.remove(weekday, time);
        self.planner.insert(updated.clone());
        if let Err(e) = self.save() {
            self.planner.remove(updated.weekday(), updated.time());
            self.planner.insert(current);
            return Err(e);
        }

        Ok(updated)
    }

    /// Removes the instance at a slot and persists the planner.
    ///
    /// Fails with `SlotNotFound` when the slot is empty, so deleting the
    /// same slot twice fails the second time. Returns the removed instance
    /// (get-before-delete, for confirmation by the caller).
    pub fn delete_task(&mut self, weekday: Weekday, time: &str) -> Result<TaskInstance> {
        let time: TimeOfDay = time.parse()?;
        let removed = self
            .planner
            .remove(weekday, time)
            .ok_or(WeekplanError::SlotNotFound { weekday, time })?;

        if let Err(e) = self.save() {
            self.planner.insert(removed);
            return Err(e);
        }

        info!("deleted task at {time} on {weekday}");
        Ok(removed)
    }

    /// Removes every instance whose name is not in `valid_names`, scoped to
    /// one weekday or the whole week, and persists when anything changed.
    ///
    /// Used after catalog deletions and explicit clean-up actions.
    /// Idempotent: a second pass with the same names removes nothing and
    /// does not rewrite the document. Returns the removed count.
    pub fn clean(&mut self, valid_names: &BTreeSet<String>, scope: CleanScope) -> Result<usize> {
        let mut removed = Vec::new();
        for weekday in scope.days() {
            let stale: Vec<TimeOfDay> = self
                .planner
                .day(weekday)
                .values()
                .filter(|task| !valid_names.contains(task.name()))
                .map(|task| task.time())
                .collect();
            for time in stale {
                if let Some(task) = self.planner.remove(weekday, time) {
                    removed.push(task);
                }
            }
        }

        if removed.is_empty() {
            return Ok(0);
        }

        if let Err(e) = self.save() {
            for task in removed {
                self.planner.insert(task);
            }
            return Err(e);
        }

        info!("cleaned {} stale task(s)", removed.len());
        Ok(removed.len())
    }
}
