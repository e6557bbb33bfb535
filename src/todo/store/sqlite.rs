//! SQLite-backed storage.
//!
//! One `todos` table keyed by `id`. Deletion sets `deleted_at`; rows are never
//! removed, so the primary key keeps guarding against id reuse. Listing order
//! is `rowid`, which is insertion order.

use super::DataStore;
use crate::error::{Result, TodoError};
use crate::model::Todo;
use log::{debug, info};
use rusqlite::{params, Connection, ErrorCode, Row};
use std::path::Path;
use std::time::Duration;

pub const DB_FILENAME: &str = "todos.db";

const SCHEMA_SQL: &str = "CREATE TABLE IF NOT EXISTS todos (
    id           TEXT PRIMARY KEY NOT NULL,
    text         TEXT NOT NULL,
    is_completed INTEGER NOT NULL DEFAULT 0,
    created_at   TEXT NOT NULL,
    updated_at   TEXT NOT NULL,
    deleted_at   TEXT
);
CREATE INDEX IF NOT EXISTS idx_todos_deleted_at ON todos (deleted_at);";

const TODO_SELECT_SQL: &str =
    "SELECT id, text, is_completed, created_at, updated_at, deleted_at FROM todos";

pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens (creating if needed) the database under `root` and applies the schema.
    pub fn open(root: &Path) -> Result<Self> {
        if !root.exists() {
            std::fs::create_dir_all(root)?;
        }
        let path = root.join(DB_FILENAME);
        let conn = Connection::open(&path)?;
        info!("opened sqlite store at {}", path.display());
        Self::bootstrap(conn)
    }

    pub fn open_in_memory() -> Result<Self> {
        Self::bootstrap(Connection::open_in_memory()?)
    }

    fn bootstrap(conn: Connection) -> Result<Self> {
        conn.busy_timeout(Duration::from_secs(5))?;
        conn.execute_batch(SCHEMA_SQL)?;
        Ok(Self { conn })
    }

    fn query(&self, sql: &str, prefix: Option<&str>) -> Result<Vec<Todo>> {
        let mut stmt = self.conn.prepare(sql)?;
        let rows = match prefix {
            Some(p) => stmt.query_map(params![p], parse_todo_row)?,
            None => stmt.query_map([], parse_todo_row)?,
        };
        let mut todos = Vec::new();
        for row in rows {
            todos.push(row?);
        }
        Ok(todos)
    }
}

fn parse_todo_row(row: &Row<'_>) -> rusqlite::Result<Todo> {
    Ok(Todo {
        id: row.get(0)?,
        text: row.get(1)?,
        is_completed: row.get(2)?,
        created_at: row.get(3)?,
        updated_at: row.get(4)?,
        deleted_at: row.get(5)?,
    })
}

fn is_constraint_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _) if e.code == ErrorCode::ConstraintViolation
    )
}

impl DataStore for SqliteStore {
    fn all_todos(&self) -> Result<Vec<Todo>> {
        self.query(&format!("{TODO_SELECT_SQL} ORDER BY rowid"), None)
    }

    fn live_todos(&self) -> Result<Vec<Todo>> {
        self.query(
            &format!("{TODO_SELECT_SQL} WHERE deleted_at IS NULL ORDER BY rowid"),
            None,
        )
    }

    // substr instead of LIKE so '%' and '_' in user input are matched literally.
    fn todos_with_prefix(&self, prefix: &str) -> Result<Vec<Todo>> {
        self.query(
            &format!(
                "{TODO_SELECT_SQL} WHERE deleted_at IS NULL \
                 AND substr(id, 1, length(?1)) = ?1 ORDER BY rowid"
            ),
            Some(prefix),
        )
    }

    fn insert_todo(&mut self, todo: &Todo) -> Result<()> {
        let inserted = self.conn.execute(
            "INSERT INTO todos (id, text, is_completed, created_at, updated_at, deleted_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                todo.id,
                todo.text,
                todo.is_completed,
                todo.created_at,
                todo.updated_at,
                todo.deleted_at,
            ],
        );
        match inserted {
            Ok(_) => {
                debug!("inserted row {}", todo.id);
                Ok(())
            }
            Err(err) if is_constraint_violation(&err) => {
                Err(TodoError::DuplicateIdentifier(todo.id.clone()))
            }
            Err(err) => Err(err.into()),
        }
    }

    fn save_todo(&mut self, todo: &Todo) -> Result<()> {
        let changed = self.conn.execute(
            "UPDATE todos
             SET text = ?2, is_completed = ?3, updated_at = ?4, deleted_at = ?5
             WHERE id = ?1",
            params![
                todo.id,
                todo.text,
                todo.is_completed,
                todo.updated_at,
                todo.deleted_at,
            ],
        )?;
        if changed == 0 {
            return Err(TodoError::NotFound(todo.id.clone()));
        }
        debug!("updated row {}", todo.id);
        Ok(())
    }
}
