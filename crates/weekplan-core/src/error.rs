//! Error types for the week planner library.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::{TimeOfDay, Weekday};

/// Comprehensive error type for all planner and catalog operations.
#[derive(Error, Debug)]
pub enum WeekplanError {
    /// Time string did not match the canonical `HH:MM` 24-hour form
    #[error("Invalid time '{value}': expected HH:MM in 24-hour format")]
    InvalidTime { value: String },
    /// Priority outside the accepted range
    #[error("Invalid priority {value}: must be between {min} and {max}")]
    InvalidPriority { value: u8, min: u8, max: u8 },
    /// Task name failed validation
    #[error("Invalid task name: {reason}")]
    InvalidName { reason: String },
    /// String matched none of the seven recognized weekday forms
    #[error("Invalid weekday '{value}'")]
    InvalidWeekday { value: String },
    /// The day/time slot already holds a task
    #[error("Time slot {time} on {weekday} is already occupied")]
    SlotOccupied { weekday: Weekday, time: TimeOfDay },
    /// No task exists at the day/time slot
    #[error("No task scheduled at {time} on {weekday}")]
    SlotNotFound { weekday: Weekday, time: TimeOfDay },
    /// Catalog already contains the name (case-sensitive match)
    #[error("Task name '{name}' is already in the catalog")]
    DuplicateTask { name: String },
    /// Catalog does not contain the name
    #[error("Task name '{name}' is not in the catalog")]
    UnknownTask { name: String },
    /// Catalog document exists but failed to parse
    #[error("Corrupt catalog document at '{path}': {reason}")]
    CorruptCatalog { path: PathBuf, reason: String },
    /// Planner document exists but failed to parse
    #[error("Corrupt planner document at '{path}': {reason}")]
    CorruptPlanner { path: PathBuf, reason: String },
    /// I/O failure while writing a document; in-memory state was rolled back
    #[error("Failed to persist '{path}': {source}")]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// File system operation errors outside the save path
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Serialization errors while producing a document
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

impl WeekplanError {
    /// Creates a persistence error for a failed write to `path`.
    pub(crate) fn persistence(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::Persistence {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Creates a file system error for `path`.
    pub(crate) fn file_system(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::FileSystem {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Creates an invalid name error with a reason.
    pub(crate) fn invalid_name(reason: impl Into<String>) -> Self {
        Self::InvalidName {
            reason: reason.into(),
        }
    }
}

/// Result type alias for week planner operations
pub type Result<T> = std::result::Result<T, WeekplanError>;
