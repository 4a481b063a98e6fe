//! Document backend: the whole task set lives in one JSON file.
//!
//! Every mutating call loads the full collection, changes it in memory, and
//! rewrites the file. O(n) per write, which is fine for a personal task
//! list. There is no locking: two processes sharing the file can race and
//! silently overwrite each other, so usage is single-process only.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::warn;

use crate::error::Result;
use crate::storage::TaskStore;
use crate::task::Task;

/// File-backed document store. The file holds a single JSON array of flat
/// task objects, written with 2-space indentation.
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    /// Bind a store to the given file, creating the parent directory if
    /// needed. The file itself is only created on the first write.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(Self { path })
    }

    /// Load the full task set. An absent or unparsable file reads as an
    /// empty set, not an error.
    fn load(&self) -> Result<Vec<Task>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str(&content) {
            Ok(tasks) => Ok(tasks),
            Err(e) => {
                warn!("Unparsable task file {}: {}, treating as empty", self.path.display(), e);
                Ok(Vec::new())
            }
        }
    }

    /// Rewrite the entire file from the given task set.
    fn save(&self, tasks: &[Task]) -> Result<()> {
        let json = serde_json::to_string_pretty(tasks)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl TaskStore for JsonStore {
    fn add(&mut self, mut task: Task) -> Result<Task> {
        let mut tasks = self.load()?;
        // max + 1 id assignment: not crash-safe against concurrent writers
        task.id = tasks.iter().map(|t| t.id).max().map_or(1, |max| max + 1);
        tasks.push(task.clone());
        self.save(&tasks)?;
        Ok(task)
    }

    fn get(&self, id: i64) -> Result<Option<Task>> {
        Ok(self.load()?.into_iter().find(|t| t.id == id))
    }

    fn list_all(&self) -> Result<Vec<Task>> {
        self.load()
    }

    fn update(&mut self, task: &Task) -> Result<bool> {
        let mut tasks = self.load()?;
        match tasks.iter_mut().find(|t| t.id == task.id) {
            Some(existing) => {
                existing.title = task.title.clone();
                existing.description = task.description.clone();
                existing.completed = task.completed;
                existing.due_date = task.due_date.clone();
                existing.priority = task.priority;
                existing.category = task.category.clone();
                // id and created_at are kept from the stored record
                self.save(&tasks)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn delete(&mut self, id: i64) -> Result<bool> {
        let mut tasks = self.load()?;
        let before = tasks.len();
        tasks.retain(|t| t.id != id);
        if tasks.len() < before {
            self.save(&tasks)?;
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
