use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, TrackerError};
use crate::models::Task;

/// Default file name under the data directory, and the relative fallback.
const DB_FILE: &str = "tasks.json";

/// The load/save boundary between the in-memory task collection and the
/// on-disk JSON file.
///
/// One `Store` wraps one file path. Each command invocation loads the full
/// collection, applies at most one mutation in memory, and saves the full
/// collection back.
pub struct Store {
    path: PathBuf,
}

impl Store {
    /// Creates a store over an explicit file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a store over the default database location.
    ///
    /// The path is determined in the following order:
    /// 1. `TASK_TRACKER_DB` environment variable.
    /// 2. `<data dir>/task-tracker/tasks.json` (e.g. `~/.local/share` on Linux).
    /// 3. `storage/tasks.json` (fallback).
    pub fn open_default() -> Self {
        let path = std::env::var("TASK_TRACKER_DB")
            .map(PathBuf::from)
            .unwrap_or_else(|_| match dirs::data_local_dir() {
                Some(mut p) => {
                    p.push("task-tracker");
                    p.push(DB_FILE);
                    p
                }
                None => Path::new("storage").join(DB_FILE),
            });
        Self::new(path)
    }

    /// The path this store reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the full task collection from the storage file.
    ///
    /// If the file does not exist it is created with initial content `[]`.
    /// An empty or whitespace-only file is an empty collection, not an error.
    pub fn load(&self) -> Result<Vec<Task>> {
        if !self.path.exists() {
            self.init_file()?;
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        let tasks = serde_json::from_str(&content)?;
        Ok(tasks)
    }

    /// Serializes the full collection and replaces the storage file.
    ///
    /// The JSON is built in memory first, written to a sibling temp file, and
    /// renamed over the destination, so a failing write never leaves a
    /// truncated task list behind.
    pub fn save(&self, tasks: &[Task]) -> Result<()> {
        let json =
            serde_json::to_string_pretty(tasks).map_err(|e| TrackerError::Storage(e.into()))?;
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)?;
            }
        }
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        restrict_permissions(&tmp)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn init_file(&self) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)?;
            }
        }
        fs::write(&self.path, "[]")?;
        restrict_permissions(&self.path)?;
        Ok(())
    }
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o600))
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> std::io::Result<()> {
    Ok(())
}
