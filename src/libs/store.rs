//! JSON-backed task store.
//!
//! The [`Store`] owns the ordered task list and the monotonic id counter. It
//! is built once per command invocation with [`Store::load`] and handed to
//! every operation; each mutating operation rewrites the whole file.
//!
//! ## Persisted layout
//!
//! ```json
//! {
//!   "tasks": [
//!     { "id": 1, "uuid": "…", "text": "…", "done": false, "priority": "high",
//!       "due": "2025-07-20", "tags": ["+dev"], "created": "…", "updated": "…" }
//!   ],
//!   "nextId": 2
//! }
//! ```
//!
//! ## Robustness
//!
//! A missing file yields an empty store. A file that cannot be parsed is
//! treated the same way, so a corrupted store never blocks the user; the
//! distinction is kept in [`LoadOutcome`]. Writes go to a sibling temporary
//! file which is then renamed over the target.

use super::error::StoreError;
use super::filter;
use super::task::{Priority, Task, TaskFilter};
use super::validation::{generate_uuid, now_timestamp};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

pub const FIRST_ID: u64 = 1;

/// How the store came into being.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// No file existed (or it could not be read); the store starts empty.
    Fresh,
    /// The file was parsed successfully.
    Loaded,
    /// The file existed but was not a valid store; the store starts empty.
    Recovered(String),
}

#[derive(Serialize, Deserialize)]
struct StoreFile {
    #[serde(default)]
    tasks: Vec<Task>,
    #[serde(rename = "nextId", default = "first_id")]
    next_id: u64,
}

fn first_id() -> u64 {
    FIRST_ID
}

#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
    tasks: Vec<Task>,
    next_id: u64,
    outcome: LoadOutcome,
}

impl Store {
    /// A store in its zero state (no tasks, `next_id == 1`) bound to `path`.
    /// Nothing is read or written.
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            tasks: Vec::new(),
            next_id: FIRST_ID,
            outcome: LoadOutcome::Fresh,
        }
    }

    /// Reads the store file at `path`. Never fails: unreadable or malformed
    /// content produces an empty store and is reported through
    /// [`Store::load_outcome`].
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let mut store = Self::empty(path);

        let data = match fs::read_to_string(&store.path) {
            Ok(data) => data,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %store.path.display(), "no store file yet");
                return store;
            }
            Err(err) => {
                warn!(path = %store.path.display(), error = %err, "store file unreadable, starting empty");
                return store;
            }
        };

        match serde_json::from_str::<StoreFile>(&data) {
            Ok(file) => {
                store.tasks = file.tasks;
                store.next_id = file.next_id;
                match store.repair() {
                    Ok(()) => {
                        store.outcome = LoadOutcome::Loaded;
                        info!(path = %store.path.display(), tasks = store.tasks.len(), next_id = store.next_id, "store loaded");
                    }
                    Err(reason) => {
                        warn!(path = %store.path.display(), %reason, "store file is unusable, starting empty");
                        store.tasks.clear();
                        store.next_id = FIRST_ID;
                        store.outcome = LoadOutcome::Recovered(reason);
                    }
                }
            }
            Err(err) => {
                warn!(path = %store.path.display(), error = %err, "store file is corrupt, starting empty");
                store.outcome = LoadOutcome::Recovered(err.to_string());
            }
        }

        store
    }

    // Restores the invariants a hand-edited or older file may break. Fails
    // when the stored ids leave no room for another one.
    fn repair(&mut self) -> Result<(), String> {
        for task in self.tasks.iter_mut().filter(|task| task.uuid.is_empty()) {
            task.uuid = generate_uuid();
            warn!(id = task.id, uuid = %task.uuid, "task without uuid, assigned a new one");
        }

        let max_id = self.tasks.iter().map(|task| task.id).max().unwrap_or(0);
        if self.next_id <= max_id {
            let Some(next_id) = max_id.checked_add(1) else {
                return Err(format!("task id {} leaves no id to assign", max_id));
            };
            warn!(next_id = self.next_id, max_id, "nextId behind stored ids, raising it");
            self.next_id = next_id;
        }
        self.next_id = self.next_id.max(FIRST_ID);
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load_outcome(&self) -> &LoadOutcome {
        &self.outcome
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn get_by_uuid(&self, uuid: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.uuid == uuid)
    }

    fn position(&self, id: u64) -> Option<usize> {
        self.tasks.iter().position(|task| task.id == id)
    }

    /// Writes the whole store, replacing the previous file.
    pub fn save(&self) -> Result<(), StoreError> {
        let write_err = |source| StoreError::Write {
            path: self.path.clone(),
            source,
        };

        let file = StoreFile {
            tasks: self.tasks.clone(),
            next_id: self.next_id,
        };
        let data = serde_json::to_string_pretty(&file)?;

        if let Some(parent) = self.path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(write_err)?;
        }

        let mut tmp_name = self.path.clone().into_os_string();
        tmp_name.push(".tmp");
        let tmp_path = PathBuf::from(tmp_name);

        fs::write(&tmp_path, data).map_err(write_err)?;
        fs::rename(&tmp_path, &self.path).map_err(write_err)?;

        debug!(path = %self.path.display(), tasks = self.tasks.len(), "store saved");
        Ok(())
    }

    /// Appends a new task and persists. `priority` and `due` are expected to
    /// be validated already; `text` may be empty.
    pub fn add(&mut self, text: &str, tags: Vec<String>, priority: Priority, due: &str) -> Result<Task, StoreError> {
        let next_id = self.next_id.checked_add(1).ok_or(StoreError::IdsExhausted)?;
        let now = now_timestamp();
        let task = Task {
            id: self.next_id,
            uuid: generate_uuid(),
            text: text.to_string(),
            done: false,
            priority,
            due: due.to_string(),
            tags,
            created: now.clone(),
            updated: now,
        };

        self.tasks.push(task.clone());
        self.next_id = next_id;
        self.save()?;

        info!(id = task.id, uuid = %task.uuid, "task added");
        Ok(task)
    }

    /// Marks a task done. `Ok(None)` when no task has this id.
    pub fn done(&mut self, id: u64) -> Result<Option<&Task>, StoreError> {
        let Some(index) = self.position(id) else {
            return Ok(None);
        };

        let task = &mut self.tasks[index];
        task.done = true;
        task.updated = now_timestamp();
        self.save()?;

        info!(id, "task done");
        Ok(Some(&self.tasks[index]))
    }

    /// Deletes a task by id, returning it. Remaining ids are left as they are
    /// and the removed id is never handed out again.
    pub fn remove(&mut self, id: u64) -> Result<Option<Task>, StoreError> {
        let Some(index) = self.position(id) else {
            return Ok(None);
        };

        let task = self.tasks.remove(index);
        self.save()?;

        info!(id, "task removed");
        Ok(Some(task))
    }

    /// Replaces text and tags wholesale. Priority and due date are kept.
    pub fn edit(&mut self, id: u64, text: &str, tags: Vec<String>) -> Result<Option<&Task>, StoreError> {
        let Some(index) = self.position(id) else {
            return Ok(None);
        };

        let task = &mut self.tasks[index];
        task.text = text.to_string();
        task.tags = tags;
        task.updated = now_timestamp();
        self.save()?;

        info!(id, "task edited");
        Ok(Some(&self.tasks[index]))
    }

    /// Filtered and sorted view for display.
    pub fn list(&self, criteria: &TaskFilter) -> Vec<&Task> {
        let mut view = filter::filter_tasks(&self.tasks, criteria);
        filter::sort_tasks(&mut view);
        view
    }

    /// Swaps in a new task list and counter, as produced by an import.
    /// Does not persist.
    pub(crate) fn replace_contents(&mut self, tasks: Vec<Task>, next_id: u64) {
        self.tasks = tasks;
        self.next_id = next_id;
    }
}
