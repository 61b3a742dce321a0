//! The task store: sole owner of the `todos` table.
//!
//! `TaskStore` assigns identity, keeps ordering and enforces the text rule.
//! It wraps a single connection behind a mutex so one handle can be shared
//! by every request of the server.
//!
//! ## Usage
//!
//! ```rust
//! use taskboard::db::tasks::TaskStore;
//!
//! let store = TaskStore::open(":memory:")?;
//! let task = store.create("Buy milk")?;
//! let task = store.set_completion(task.id, true)?;
//! assert!(task.completed);
//! store.delete(task.id)?;
//! assert!(store.list()?.is_empty());
//! store.close()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::db::Db;
use crate::libs::task::{is_valid_text, Task};
use parking_lot::Mutex;
use rusqlite::{params, Connection, OptionalExtension, Row};
use thiserror::Error;

const SELECT_TASKS: &str = "SELECT id, task, completed, created_at FROM todos ORDER BY id ASC";
const SELECT_TASK: &str = "SELECT id, task, completed, created_at FROM todos WHERE id = ?1";
const INSERT_TASK: &str =
    "INSERT INTO todos (task, completed, created_at) VALUES (?1, FALSE, CURRENT_TIMESTAMP) RETURNING id, task, completed, created_at";
const DELETE_TASK: &str = "DELETE FROM todos WHERE id = ?1 RETURNING id, task, completed, created_at";
const UPDATE_COMPLETED: &str = "UPDATE todos SET completed = ?2 WHERE id = ?1 RETURNING id, task, completed, created_at";

/// Failures of store operations.
#[derive(Debug, Error)]
pub enum TaskError {
    /// The input broke a rule of the data model.
    #[error("{0}")]
    Validation(String),

    /// No task has the given id.
    #[error("task {0} not found")]
    NotFound(i64),

    /// The database itself failed.
    #[error("storage failure: {0}")]
    Store(#[from] rusqlite::Error),
}

pub struct TaskStore {
    conn: Mutex<Connection>,
}

impl TaskStore {
    /// Connects to `database_url` and makes sure the schema is current.
    pub fn open(database_url: &str) -> anyhow::Result<Self> {
        Ok(Self::from_db(Db::open(database_url)?))
    }

    pub fn from_db(db: Db) -> Self {
        TaskStore { conn: Mutex::new(db.conn) }
    }

    /// All tasks, oldest id first.
    pub fn list(&self) -> Result<Vec<Task>, TaskError> {
        let conn = self.conn.lock();
        let mut stmt = conn.prepare(SELECT_TASKS)?;
        let tasks = stmt.query_map([], task_from_row)?.collect::<Result<Vec<_>, _>>()?;

        Ok(tasks)
    }

    pub fn get(&self, id: i64) -> Result<Task, TaskError> {
        self.conn
            .lock()
            .query_row(SELECT_TASK, params![id], task_from_row)
            .optional()?
            .ok_or(TaskError::NotFound(id))
    }

    /// Inserts a pending task. The text is stored as given; blank text is rejected.
    pub fn create(&self, text: &str) -> Result<Task, TaskError> {
        if !is_valid_text(text) {
            return Err(TaskError::Validation("Task text must not be empty".to_string()));
        }

        let task = self.conn.lock().query_row(INSERT_TASK, params![text], task_from_row)?;

        Ok(task)
    }

    /// Permanently removes a task and returns what was deleted.
    pub fn delete(&self, id: i64) -> Result<Task, TaskError> {
        self.conn
            .lock()
            .query_row(DELETE_TASK, params![id], task_from_row)
            .optional()?
            .ok_or(TaskError::NotFound(id))
    }

    pub fn set_completion(&self, id: i64, completed: bool) -> Result<Task, TaskError> {
        self.conn
            .lock()
            .query_row(UPDATE_COMPLETED, params![id, completed], task_from_row)
            .optional()?
            .ok_or(TaskError::NotFound(id))
    }

    /// Closes the underlying connection, reporting any error SQLite raises on close.
    pub fn close(self) -> Result<(), TaskError> {
        self.conn.into_inner().close().map_err(|(_, error)| TaskError::Store(error))
    }
}

fn task_from_row(row: &Row) -> rusqlite::Result<Task> {
    Ok(Task {
        id: row.get(0)?,
        task: row.get(1)?,
        completed: row.get(2)?,
        created_at: row.get(3)?,
    })
}
