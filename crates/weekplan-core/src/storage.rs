//! Document storage helpers: data directory resolution and atomic writes.

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::debug;

use crate::error::{Result, WeekplanError};

/// File name of the planner document inside the data directory.
pub const PLANNER_FILE: &str = "planner.json";

/// File name of the catalog document inside the data directory.
pub const CATALOG_FILE: &str = "task_names.json";

/// Places a document file under the XDG data directory for the application.
///
/// Resolves to `$XDG_DATA_HOME/weekplan/<name>` (or the
/// `~/.local/share/weekplan/` fallback) and creates the leading directories
/// on first run. Directory-creation failure is fatal to startup.
pub(crate) fn default_document_path(name: &str) -> Result<PathBuf> {
    xdg::BaseDirectories::with_prefix("weekplan")
        .place_data_file(name)
        .map_err(|e| WeekplanError::XdgDirectory(e.to_string()))
}

/// Reads a document, distinguishing "absent" (first run) from I/O failure.
pub(crate) fn read_document(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(WeekplanError::file_system(path, e)),
    }
}

/// Rewrites a document atomically: write to a sibling temp file, then
/// rename over the target. A crash mid-write leaves the previously-good
/// document untouched.
pub(crate) fn atomic_write(path: &Path, contents: &str) -> Result<()> {
    let tmp = temp_sibling(path);

    fs::write(&tmp, contents).map_err(|e| WeekplanError::persistence(path, e))?;
    if let Err(e) = fs::rename(&tmp, path) {
        // Best-effort cleanup; the original document is still intact.
        let _ = fs::remove_file(&tmp);
        return Err(WeekplanError::persistence(path, e));
    }

    debug!("wrote {}", path.display());
    Ok(())
}

fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".tmp");
    PathBuf::from(name)
}
