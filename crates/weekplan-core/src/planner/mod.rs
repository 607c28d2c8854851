//! The planner store: the weekday → time → task-instance grid.
//!
//! [`PlannerStore`] owns the in-memory [`Planner`] grid and its JSON
//! document path, and is the only mutation path for scheduled tasks. Every
//! mutating operation persists the full document atomically before
//! returning; a failed write rolls the in-memory grid back so the caller
//! never observes a partial commit.
//!
//! Submodules follow the store's layering:
//!
//! - [`builder`]: resolves the shared data directory and opens both stores
//! - [`ops`]: mutating operations (add, edit, delete, clean)
//! - [`queries`]: read-side enumeration and scoring

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, WeekplanError},
    models::{StoredTask, TaskInstance, TimeOfDay, Weekday},
    storage,
};

pub mod builder;
mod ops;
mod queries;

#[cfg(test)]
mod tests;

pub use builder::{StoreBuilder, Stores};

/// The slots of one weekday, keyed chronologically.
pub(crate) type DaySlots = BTreeMap<TimeOfDay, TaskInstance>;

/// The external planner-document shape: weekday name → `HH:MM` → task.
///
/// `Weekday` and `TimeOfDay` serialize as strings, so both map levels
/// round-trip as JSON object keys, and `BTreeMap` keeps the key order
/// stable (Monday-first, then chronological).
#[derive(Debug, Serialize, Deserialize)]
#[serde(transparent)]
struct PlannerDocument(BTreeMap<Weekday, BTreeMap<TimeOfDay, StoredTask>>);

/// The in-memory week grid.
///
/// Holds one slot map per weekday, indexed by the weekday's stable
/// Monday-first position. Every contained instance's own weekday/time
/// fields match its grid position; the store's operations maintain that
/// invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Planner {
    days: [DaySlots; 7],
}

impl Planner {
    /// An empty planner with all seven weekdays present.
    pub(crate) fn empty() -> Self {
        Self {
            days: Default::default(),
        }
    }

    pub(crate) fn day(&self, weekday: Weekday) -> &DaySlots {
        &self.days[weekday.position()]
    }

    fn day_mut(&mut self, weekday: Weekday) -> &mut DaySlots {
        &mut self.days[weekday.position()]
    }

    /// Looks up the instance at a slot.
    pub fn get(&self, weekday: Weekday, time: TimeOfDay) -> Option<&TaskInstance> {
        self.day(weekday).get(&time)
    }

    /// Inserts an instance at its own weekday/time position.
    pub(crate) fn insert(&mut self, task: TaskInstance) -> Option<TaskInstance> {
        self.day_mut(task.weekday()).insert(task.time(), task)
    }

    /// Removes and returns the instance at a slot, if any.
    pub(crate) fn remove(&mut self, weekday: Weekday, time: TimeOfDay) -> Option<TaskInstance> {
        self.day_mut(weekday).remove(&time)
    }

    fn to_document(&self) -> PlannerDocument {
        let mut document = BTreeMap::new();
        for weekday in Weekday::all() {
            let slots = self
                .day(weekday)
                .iter()
                .map(|(time, task)| (*time, StoredTask::from(task)))
                .collect();
            document.insert(weekday, slots);
        }
        PlannerDocument(document)
    }

    fn from_document(document: PlannerDocument) -> Result<Self> {
        let mut planner = Self::empty();
        for (weekday, slots) in document.0 {
            for (time, stored) in slots {
                let task = stored.into_instance(weekday, time)?;
                planner.insert(task);
            }
        }
        Ok(planner)
    }
}

/// Store owning the planner grid and its document path.
#[derive(Debug)]
pub struct PlannerStore {
    path: PathBuf,
    planner: Planner,
}

impl PlannerStore {
    /// Opens the planner at `path`, loading the document if present.
    ///
    /// An absent document means a first run and yields an empty planner
    /// with all seven weekdays present. A present but malformed document
    /// (unknown weekday key, bad time key, unexpected or missing fields,
    /// out-of-range priority, blank name) fails with `CorruptPlanner`,
    /// which is startup-fatal: the session cannot proceed with an unknown
    /// planner state.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let planner = match storage::read_document(&path)? {
            None => {
                debug!("no planner document at {}, starting empty", path.display());
                Planner::empty()
            }
            Some(contents) => Self::parse_document(&path, &contents)?,
        };

        Ok(Self { path, planner })
    }

    fn parse_document(path: &Path, contents: &str) -> Result<Planner> {
        let corrupt = |reason: String| WeekplanError::CorruptPlanner {
            path: path.to_path_buf(),
            reason,
        };

        let document: PlannerDocument =
            serde_json::from_str(contents).map_err(|e| corrupt(e.to_string()))?;
        Planner::from_document(document).map_err(|e| corrupt(e.to_string()))
    }

    /// Read access to the grid.
    pub fn planner(&self) -> &Planner {
        &self.planner
    }

    /// Path of the backing planner document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persists the grid as a full-document atomic rewrite.
    ///
    /// On I/O failure the prior on-disk document is left untouched and
    /// `Persistence` is returned; mutating operations roll back their
    /// in-memory change before surfacing it.
    pub fn save(&self) -> Result<()> {
        let document = serde_json::to_string_pretty(&self.planner.to_document())?;
        storage::atomic_write(&self.path, &document)
    }
}
