//! The task catalog store: the reusable master list of task names.

use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use log::{debug, info};

use crate::{
    error::{Result, WeekplanError},
    ordering, storage,
};

/// Store owning the catalog of reusable task names and its document path.
///
/// The catalog document is a JSON array of strings. Every mutating call
/// performs a full atomic rewrite before returning; a failed write rolls
/// back the in-memory change so no partial commit is visible to the caller.
///
/// Removal from the catalog does not reach into the planner. The caller is
/// responsible for running a planner cleaning pass afterwards, keeping the
/// two stores decoupled and independently testable.
#[derive(Debug)]
pub struct CatalogStore {
    path: PathBuf,
    names: BTreeSet<String>,
}

impl CatalogStore {
    /// Opens the catalog at `path`, loading the document if present.
    ///
    /// An absent document means a first run and yields an empty catalog. A
    /// present but malformed document fails with `CorruptCatalog` rather
    /// than silently dropping data.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let names = match storage::read_document(&path)? {
            None => {
                debug!("no catalog document at {}, starting empty", path.display());
                BTreeSet::new()
            }
            Some(contents) => Self::parse_document(&path, &contents)?,
        };

        Ok(Self { path, names })
    }

    fn parse_document(path: &Path, contents: &str) -> Result<BTreeSet<String>> {
        let corrupt = |reason: String| WeekplanError::CorruptCatalog {
            path: path.to_path_buf(),
            reason,
        };

        let names: Vec<String> =
            serde_json::from_str(contents).map_err(|e| corrupt(e.to_string()))?;

        let mut set = BTreeSet::new();
        for name in names {
            if name.trim().is_empty() {
                return Err(corrupt("blank task name".to_string()));
            }
            if !set.insert(name.clone()) {
                return Err(corrupt(format!("duplicate task name '{name}'")));
            }
        }
        Ok(set)
    }

    /// Adds a task name and persists the catalog.
    ///
    /// Fails with `InvalidName` for blank names and `DuplicateTask` when the
    /// name is already present (case-sensitive exact match).
    pub fn add(&mut self, name: &str) -> Result<()> {
        if name.trim().is_empty() {
            return Err(WeekplanError::invalid_name("name must not be empty"));
        }
        if self.names.contains(name) {
            return Err(WeekplanError::DuplicateTask {
                name: name.to_string(),
            });
        }

        self.names.insert(name.to_string());
        if let Err(e) = self.save() {
            self.names.remove(name);
            return Err(e);
        }

        info!("added '{name}' to the catalog");
        Ok(())
    }

    /// Removes a task name and persists the catalog.
    ///
    /// Fails with `UnknownTask` when the name is absent. The caller should
    /// follow up with a planner cleaning pass to drop orphaned instances.
    pub fn remove(&mut self, name: &str) -> Result<()> {
        if !self.names.remove(name) {
            return Err(WeekplanError::UnknownTask {
                name: name.to_string(),
            });
        }

        if let Err(e) = self.save() {
            self.names.insert(name.to_string());
            return Err(e);
        }

        info!("removed '{name}' from the catalog");
        Ok(())
    }

    /// All names in natural alphabetic order (case-accounting, ascending).
    pub fn list(&self) -> Vec<String> {
        let mut names: Vec<String> = self.names.iter().cloned().collect();
        names.sort_by(|a, b| ordering::compare_names(a, b));
        names
    }

    /// Whether the catalog contains `name` (case-sensitive).
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// The name set, for planner cleaning passes.
    pub fn as_set(&self) -> &BTreeSet<String> {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Path of the backing catalog document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> Result<()> {
        let document = serde_json::to_string_pretty(&self.list())?;
        storage::atomic_write(&self.path, &document)
    }
}
