//! Todo repository over a shared SQLite connection
//!
//! All tool handlers go through this type; it owns the only mutable state in
//! the process. The connection mutex is the sole concurrency control on top
//! of SQLite's own locking.

use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::sync::{Arc, Mutex};

use crate::error::{TodoError, TodoResult};
use crate::schema;
use crate::types::Todo;

#[derive(Clone)]
pub struct TodoRepository {
    db: Arc<Mutex<Connection>>,
}

fn row_to_todo(row: &rusqlite::Row<'_>) -> rusqlite::Result<Todo> {
    Ok(Todo {
        id: row.get(0)?,
        title: row.get(1)?,
        completed: row.get(2)?,
        created_at: row.get(3)?,
    })
}

impl TodoRepository {
    /// Open a file-backed repository and ensure the schema exists.
    pub fn open(db_path: &Path) -> Result<Self> {
        let conn = Connection::open(db_path)
            .with_context(|| format!("Failed to open database at {:?}", db_path))?;
        Self::from_connection(conn)
    }

    /// Open an in-memory repository. Contents live for the process lifetime.
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().context("Failed to open in-memory database")?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        schema::ensure_tables(&conn)?;

        Ok(Self {
            db: Arc::new(Mutex::new(conn)),
        })
    }

    /// Insert a new todo and return the full record with its assigned id.
    pub fn create(&self, title: &str) -> TodoResult<Todo> {
        let conn = self.db.lock().unwrap();
        let created_at = chrono::Utc::now().to_rfc3339();

        conn.execute(
            "INSERT INTO todos (title, completed, created_at) VALUES (?1, 0, ?2)",
            params![title, &created_at],
        )?;

        Ok(Todo {
            id: conn.last_insert_rowid(),
            title: title.to_string(),
            completed: false,
            created_at,
        })
    }

    /// All completed todos. Ordered by id for stable output; the ordering is
    /// not part of the contract.
    pub fn list_completed(&self) -> TodoResult<Vec<Todo>> {
        self.list_by_completed(true)
    }

    /// All pending todos.
    pub fn list_pending(&self) -> TodoResult<Vec<Todo>> {
        self.list_by_completed(false)
    }

    fn list_by_completed(&self, completed: bool) -> TodoResult<Vec<Todo>> {
        let conn = self.db.lock().unwrap();

        let mut stmt = conn.prepare(
            "SELECT id, title, completed, created_at FROM todos WHERE completed = ?1 ORDER BY id",
        )?;
        let todos = stmt
            .query_map(params![completed], row_to_todo)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(todos)
    }

    /// Fetch a single todo by id.
    pub fn get(&self, id: i64) -> TodoResult<Todo> {
        let conn = self.db.lock().unwrap();

        conn.query_row(
            "SELECT id, title, completed, created_at FROM todos WHERE id = ?1",
            params![id],
            row_to_todo,
        )
        .optional()?
        .ok_or(TodoError::NotFound(id))
    }

    /// Mark a todo completed and return the updated record. Completing an
    /// already-completed todo succeeds.
    pub fn complete(&self, id: i64) -> TodoResult<Todo> {
        let conn = self.db.lock().unwrap();

        let changed = conn.execute("UPDATE todos SET completed = 1 WHERE id = ?1", params![id])?;
        if changed == 0 {
            return Err(TodoError::NotFound(id));
        }

        conn.query_row(
            "SELECT id, title, completed, created_at FROM todos WHERE id = ?1",
            params![id],
            row_to_todo,
        )
        .map_err(TodoError::from)
    }

    /// Delete a todo by id. Deleting a missing id is a silent success,
    /// matching SQLite's own DELETE semantics.
    pub fn delete(&self, id: i64) -> TodoResult<()> {
        let conn = self.db.lock().unwrap();
        conn.execute("DELETE FROM todos WHERE id = ?1", params![id])?;
        Ok(())
    }

    /// Remove every todo unconditionally.
    pub fn delete_all(&self) -> TodoResult<()> {
        let conn = self.db.lock().unwrap();
        conn.execute("DELETE FROM todos", [])?;
        Ok(())
    }
}
