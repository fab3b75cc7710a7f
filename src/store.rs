//! Storage layer for tsk
//!
//! Manages the persistent task list in a single JSON file:
//!
//! ```text
//! ~/.tsk/
//!   tasks.json    # Pretty-printed array of task records
//! ```
//!
//! The whole sequence is rewritten on every mutating operation. The load
//! path tolerates a missing, empty, or unparsable file by starting from an
//! empty sequence; corruption is never surfaced to the caller.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use directories::BaseDirs;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::task::{Priority, Task};

/// Directory under the user's home that holds the store file
pub const STORE_DIR: &str = ".tsk";

/// Default store file name
pub const STORE_FILE: &str = "tasks.json";

/// Resolve the default store path: `~/.tsk/tasks.json`
pub fn default_store_path() -> Result<PathBuf> {
    let base = BaseDirs::new().ok_or_else(|| {
        Error::InvalidArgument("could not determine home directory; pass --file".to_string())
    })?;
    Ok(base.home_dir().join(STORE_DIR).join(STORE_FILE))
}

/// Parse the on-disk representation: a JSON array of task records.
///
/// Kept as a separate fallible step so the loader's corruption fallback is
/// an explicit branch rather than a blanket catch.
pub fn parse_tasks(content: &str) -> serde_json::Result<Vec<Task>> {
    serde_json::from_str(content)
}

/// Owns the in-memory task sequence and its on-disk representation.
///
/// Insertion order is display order and only deletion changes it. Every
/// mutating operation persists the full sequence before returning.
#[derive(Debug)]
pub struct TaskStore {
    path: PathBuf,
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Bind to a store file and load its state.
    ///
    /// Creates the parent directory if necessary. A missing, zero-length,
    /// or unparsable file yields an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let tasks = load_tasks(&path)?;
        debug!(path = %path.display(), count = tasks.len(), "opened task store");

        Ok(Self { path, tasks })
    }

    /// Path to the store file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All tasks in insertion order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Tasks not yet completed, in insertion order
    pub fn pending(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(|t| !t.completed)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Add a new task and persist.
    ///
    /// Ids are assigned as `len + 1` at creation time. After a deletion this
    /// can collide with a surviving id; that quirk is long-standing observed
    /// behavior and is pinned by tests rather than repaired here.
    pub fn add(&mut self, description: impl Into<String>, priority: Priority) -> Result<Task> {
        let id = self.tasks.len() as u64 + 1;
        let task = Task::new(id, description, priority);

        debug!(id, priority = priority.as_str(), "adding task");
        self.tasks.push(task.clone());
        self.save()?;

        Ok(task)
    }

    /// Mark the first task with a matching id as completed and persist.
    ///
    /// Returns false without touching memory or disk when the id is unknown.
    pub fn complete(&mut self, id: u64) -> Result<bool> {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.mark_completed();
                debug!(id, "completed task");
                self.save()?;
                Ok(true)
            }
            None => {
                debug!(id, "complete: no such task");
                Ok(false)
            }
        }
    }

    /// Remove the first task with a matching id and persist.
    ///
    /// Returns false without touching memory or disk when the id is unknown.
    pub fn delete(&mut self, id: u64) -> Result<bool> {
        match self.tasks.iter().position(|t| t.id == id) {
            Some(idx) => {
                self.tasks.remove(idx);
                debug!(id, "deleted task");
                self.save()?;
                Ok(true)
            }
            None => {
                debug!(id, "delete: no such task");
                Ok(false)
            }
        }
    }

    /// Drop every completed task, keeping pending tasks in order.
    ///
    /// Persists unconditionally, even when nothing was removed. Returns the
    /// number of tasks removed.
    pub fn clear_completed(&mut self) -> Result<usize> {
        let before = self.tasks.len();
        self.tasks.retain(|t| !t.completed);
        let removed = before - self.tasks.len();

        debug!(removed, "cleared completed tasks");
        self.save()?;

        Ok(removed)
    }

    /// Persist the full sequence as pretty-printed JSON.
    fn save(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.tasks)?;
        write_atomic(&self.path, json.as_bytes())
    }
}

/// Load the task sequence from disk, tolerating absence and corruption.
fn load_tasks(path: &Path) -> Result<Vec<Task>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(err) => return Err(err.into()),
    };

    if content.is_empty() {
        return Ok(Vec::new());
    }

    match parse_tasks(&content) {
        Ok(tasks) => Ok(tasks),
        Err(err) => {
            warn!(path = %path.display(), %err, "store file unparsable, starting empty");
            Ok(Vec::new())
        }
    }
}

/// Write data using temp file + rename so readers never see partial writes.
fn write_atomic(path: &Path, data: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let temp_path = path.with_extension("tmp");

    let mut file = File::create(&temp_path)?;
    file.write_all(data)?;
    file.sync_all()?;

    fs::rename(&temp_path, path)?;

    Ok(())
}
