//! Database schema initialization for todo-mcp

use anyhow::Result;
use rusqlite::Connection;

/// Ensure the todos table exists. Applied once at startup; no migrations.
pub fn ensure_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS todos (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            completed BOOLEAN NOT NULL DEFAULT 0,
            created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
        );

        CREATE INDEX IF NOT EXISTS idx_todos_completed
        ON todos(completed);
        "#,
    )?;

    Ok(())
}
