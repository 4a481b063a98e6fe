//! Storage engine: one task-persistence contract, two backends.
//!
//! The `TaskStore` trait is the uniform contract consumed by the command
//! handlers. Two strategies implement it:
//! - [`json::JsonStore`]: whole-collection-in-a-file document store
//!   (read-all, mutate, write-all on every mutation)
//! - [`sqlite::SqliteStore`]: embedded relational table with an
//!   auto-increment primary key, one statement per operation
//!
//! Both backends must produce behaviorally identical results for every
//! operation; `search` and `filter` are default methods over `list_all` so
//! the match semantics cannot drift between them.

pub mod json;
pub mod sqlite;

use crate::config::Config;
use crate::error::Result;
use crate::task::{Priority, Task};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Which persistence strategy backs the store. Fixed for the process
/// lifetime once chosen at startup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Document backend: a single JSON file holding the whole task set
    Json,
    /// Table backend: an embedded SQLite table
    #[default]
    Sqlite,
}

/// Optional predicates for `TaskStore::filter`, ANDed together.
///
/// An unset field is ignored. Category comparison is a case-insensitive
/// exact match, not a substring match.
#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    pub completed: Option<bool>,
    pub priority: Option<Priority>,
    pub category: Option<String>,
}

impl TaskFilter {
    /// Check whether a task satisfies every supplied predicate.
    pub fn matches(&self, task: &Task) -> bool {
        if let Some(completed) = self.completed {
            if task.completed != completed {
                return false;
            }
        }
        if let Some(priority) = self.priority {
            if task.priority != priority {
                return false;
            }
        }
        if let Some(category) = &self.category {
            match &task.category {
                Some(c) if c.to_lowercase() == category.to_lowercase() => {}
                _ => return false,
            }
        }
        true
    }
}

/// Uniform task-persistence contract over both backends.
///
/// Not-found is never an error: `get` returns `None`, `update` and `delete`
/// return `false`. Errors surface only on backend I/O failure.
pub trait TaskStore {
    /// Assign a fresh unique id, persist the record, and return the task
    /// with its id populated.
    fn add(&mut self, task: Task) -> Result<Task>;

    /// Exact-match lookup by id.
    fn get(&self, id: i64) -> Result<Option<Task>>;

    /// Full scan in backend-native order.
    fn list_all(&self) -> Result<Vec<Task>>;

    /// Rewrite all mutable fields of the record matching `task.id`.
    /// `id` and `created_at` are never altered even if present in the input.
    /// Returns whether a matching record existed.
    fn update(&mut self, task: &Task) -> Result<bool>;

    /// Remove the record. Returns whether it existed.
    fn delete(&mut self, id: i64) -> Result<bool>;

    /// Case-insensitive substring match against title, description, or
    /// category. Matches are not ranked.
    fn search(&self, query: &str) -> Result<Vec<Task>> {
        let query = query.to_lowercase();
        let matches = self
            .list_all()?
            .into_iter()
            .filter(|t| {
                t.title.to_lowercase().contains(&query)
                    || t.description.as_ref().is_some_and(|d| d.to_lowercase().contains(&query))
                    || t.category.as_ref().is_some_and(|c| c.to_lowercase().contains(&query))
            })
            .collect();
        Ok(matches)
    }

    /// Select the subset satisfying every supplied predicate.
    fn filter(&self, filter: &TaskFilter) -> Result<Vec<Task>> {
        let matches = self.list_all()?.into_iter().filter(|t| filter.matches(t)).collect();
        Ok(matches)
    }
}

/// Construct a store bound to the chosen backend, using the paths from
/// config. The backend cannot be changed afterwards.
pub fn open(backend: Backend, config: &Config) -> Result<Box<dyn TaskStore>> {
    match backend {
        Backend::Json => Ok(Box::new(json::JsonStore::new(&config.storage.json_path)?)),
        Backend::Sqlite => Ok(Box::new(sqlite::SqliteStore::open(&config.storage.db_path)?)),
    }
}
