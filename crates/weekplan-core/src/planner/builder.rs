//! Builder for opening the planner and catalog stores together.

use std::path::{Path, PathBuf};

use log::debug;

use super::PlannerStore;
use crate::{
    catalog::CatalogStore,
    error::{Result, WeekplanError},
    storage,
};

/// Both stores, opened against the same data directory.
///
/// The stores stay decoupled: catalog removal does not reach into the
/// planner, the caller runs the cleaning pass as an explicit second step.
pub struct Stores {
    pub planner: PlannerStore,
    pub catalog: CatalogStore,
}

/// Builder resolving the application data directory and opening the stores.
///
/// Stores are constructed once at startup and passed by reference to all
/// callers; there are no ambient singletons.
#[derive(Debug, Clone, Default)]
pub struct StoreBuilder {
    data_dir: Option<PathBuf>,
}

impl StoreBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom data directory holding both documents.
    ///
    /// If not specified, uses the XDG Base Directory specification:
    /// `$XDG_DATA_HOME/weekplan/` or `~/.local/share/weekplan/`.
    pub fn with_data_dir<P: AsRef<Path>>(mut self, dir: Option<P>) -> Self {
        if let Some(dir) = dir {
            self.data_dir = Some(dir.as_ref().to_path_buf());
        }
        self
    }

    /// Opens both stores, creating the data directory on first run.
    ///
    /// # Errors
    ///
    /// Returns `FileSystem`/`XdgDirectory` if the data directory cannot be
    /// created, and `CorruptPlanner`/`CorruptCatalog` if a present document
    /// fails to parse. Both conditions are fatal at startup.
    pub fn build(self) -> Result<Stores> {
        let (planner_path, catalog_path) = match self.data_dir {
            Some(dir) => {
                std::fs::create_dir_all(&dir)
                    .map_err(|e| WeekplanError::file_system(&dir, e))?;
                (dir.join(storage::PLANNER_FILE), dir.join(storage::CATALOG_FILE))
            }
            None => (
                storage::default_document_path(storage::PLANNER_FILE)?,
                storage::default_document_path(storage::CATALOG_FILE)?,
            ),
        };

        debug!("opening stores at {}", planner_path.display());

        Ok(Stores {
            planner: PlannerStore::open(planner_path)?,
            catalog: CatalogStore::open(catalog_path)?,
        })
    }
}
