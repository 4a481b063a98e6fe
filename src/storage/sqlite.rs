//! Table backend: an embedded SQLite table with auto-increment ids.
//!
//! Each operation maps to a single auto-committed statement. The connection
//! is opened once at construction, held for the process lifetime, and
//! released when the store is dropped.

use std::fs;
use std::path::Path;

use rusqlite::{Connection, Row, params};

use crate::error::Result;
use crate::storage::TaskStore;
use crate::task::{Priority, Task};

/// SQLite-backed store over a single `tasks` table.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) the database at the given path and ensure the
    /// schema exists.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(path)?;
        Self::init_schema(&conn)?;
        Ok(Self { conn })
    }

    fn init_schema(conn: &Connection) -> Result<()> {
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS tasks (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                description TEXT,
                completed BOOLEAN NOT NULL DEFAULT 0,
                created_at TEXT NOT NULL,
                due_date TEXT,
                priority INTEGER DEFAULT 1,
                category TEXT
            );
            "#,
        )?;
        Ok(())
    }
}

/// Map a row in column order (id, title, description, completed,
/// created_at, due_date, priority, category) to a Task.
fn task_from_row(row: &Row) -> rusqlite::Result<Task> {
    let priority: u8 = row.get(6)?;
    let priority = Priority::from_u8(priority).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            6,
            rusqlite::types::Type::Integer,
            format!("invalid priority {}", priority).into(),
        )
    })?;

    Ok(Task {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        completed: row.get(3)?,
        created_at: row.get(4)?,
        due_date: row.get(5)?,
        priority,
        category: row.get(7)?,
    })
}

const COLUMNS: &str = "id, title, description, completed, created_at, due_date, priority, category";

impl TaskStore for SqliteStore {
    fn add(&mut self, mut task: Task) -> Result<Task> {
        self.conn.execute(
            "INSERT INTO tasks (title, description, completed, created_at, due_date, priority, category)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                task.title,
                task.description,
                task.completed,
                task.created_at,
                task.due_date,
                task.priority.as_u8(),
                task.category,
            ],
        )?;
        task.id = self.conn.last_insert_rowid();
        Ok(task)
    }

    fn get(&self, id: i64) -> Result<Option<Task>> {
        let result = self.conn.query_row(
            &format!("SELECT {} FROM tasks WHERE id = ?1", COLUMNS),
            [id],
            task_from_row,
        );
        match result {
            Ok(task) => Ok(Some(task)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn list_all(&self) -> Result<Vec<Task>> {
        let mut stmt = self.conn.prepare(&format!("SELECT {} FROM tasks ORDER BY id", COLUMNS))?;
        let rows = stmt.query_map([], task_from_row)?;

        let mut tasks = Vec::new();
        for row in rows {
            tasks.push(row?);
        }
        Ok(tasks)
    }

    fn update(&mut self, task: &Task) -> Result<bool> {
        // created_at is deliberately absent from the SET list
        let changed = self.conn.execute(
            "UPDATE tasks SET
             title = ?1, description = ?2, completed = ?3,
             due_date = ?4, priority = ?5, category = ?6
             WHERE id = ?7",
            params![
                task.title,
                task.description,
                task.completed,
                task.due_date,
                task.priority.as_u8(),
                task.category,
                task.id,
            ],
        )?;
        Ok(changed > 0)
    }

    fn delete(&mut self, id: i64) -> Result<bool> {
        let changed = self.conn.execute("DELETE FROM tasks WHERE id = ?1", [id])?;
        Ok(changed > 0)
    }
}
