//! # Storage Layer
//!
//! The [`DataStore`] trait is the only way the rest of the crate touches
//! persisted to-dos. Commands are generic over it, so business rules are tested
//! against [`memory::InMemoryStore`] and run in production against one of the
//! durable backends.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: a single `todos.json` holding a JSON array of records in
//!   creation order. Rewritten wholesale on every mutation through a temporary
//!   file and an atomic rename, so a failed write never leaves a partial list.
//! - [`sqlite::SqliteStore`]: one `todos` table keyed by `id`. Each mutation is a
//!   single statement.
//! - [`memory::InMemoryStore`]: no persistence, for tests.
//!
//! [`AppStore`] wraps the two durable backends so the binary can pick one from
//! config at runtime while the API stays generic.
//!
//! ## Contract
//!
//! Every method that returns `Ok` has already made its change durable. Records
//! are returned as owned clones; nothing handed out aliases store state.
//! Deleted records are tombstoned (`deleted_at` set) and kept, so
//! [`DataStore::insert_todo`] keeps rejecting their ids.

use crate::error::{Result, TodoError};
use crate::model::Todo;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

pub mod fs;
pub mod memory;
pub mod sqlite;

pub trait DataStore {
    /// Every record, tombstoned ones included, in creation order.
    fn all_todos(&self) -> Result<Vec<Todo>>;

    /// Add a new record. Fails with `DuplicateIdentifier` if the id is taken,
    /// even by a deleted record.
    fn insert_todo(&mut self, todo: &Todo) -> Result<()>;

    /// Replace an existing record with the same id. Fails with `NotFound` if
    /// there is none.
    fn save_todo(&mut self, todo: &Todo) -> Result<()>;

    /// Live records in creation order.
    fn live_todos(&self) -> Result<Vec<Todo>> {
        Ok(self
            .all_todos()?
            .into_iter()
            .filter(|t| !t.is_deleted())
            .collect())
    }

    /// Live records whose id starts with `prefix`.
    fn todos_with_prefix(&self, prefix: &str) -> Result<Vec<Todo>> {
        Ok(self
            .live_todos()?
            .into_iter()
            .filter(|t| t.id.starts_with(prefix))
            .collect())
    }
}

/// Which durable backend a data directory uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    #[default]
    Json,
    Sqlite,
}

impl std::fmt::Display for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Backend::Json => write!(f, "json"),
            Backend::Sqlite => write!(f, "sqlite"),
        }
    }
}

impl FromStr for Backend {
    type Err = TodoError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Backend::Json),
            "sqlite" => Ok(Backend::Sqlite),
            other => Err(TodoError::Config(format!(
                "unknown backend '{other}' (expected json or sqlite)"
            ))),
        }
    }
}

/// A durable store picked at runtime from config.
pub enum AppStore {
    Json(fs::FileStore),
    Sqlite(sqlite::SqliteStore),
}

impl AppStore {
    pub fn open(backend: Backend, root: &Path) -> Result<Self> {
        Ok(match backend {
            Backend::Json => AppStore::Json(fs::FileStore::new(root.to_path_buf())),
            Backend::Sqlite => AppStore::Sqlite(sqlite::SqliteStore::open(root)?),
        })
    }
}

impl DataStore for AppStore {
    fn all_todos(&self) -> Result<Vec<Todo>> {
        match self {
            AppStore::Json(s) => s.all_todos(),
            AppStore::Sqlite(s) => s.all_todos(),
        }
    }

    fn insert_todo(&mut self, todo: &Todo) -> Result<()> {
        match self {
            AppStore::Json(s) => s.insert_todo(todo),
            AppStore::Sqlite(s) => s.insert_todo(todo),
        }
    }

    fn save_todo(&mut self, todo: &Todo) -> Result<()> {
        match self {
            AppStore::Json(s) => s.save_todo(todo),
            AppStore::Sqlite(s) => s.save_todo(todo),
        }
    }

    fn live_todos(&self) -> Result<Vec<Todo>> {
        match self {
            AppStore::Json(s) => s.live_todos(),
            AppStore::Sqlite(s) => s.live_todos(),
        }
    }

    fn todos_with_prefix(&self, prefix: &str) -> Result<Vec<Todo>> {
        match self {
            AppStore::Json(s) => s.todos_with_prefix(prefix),
            AppStore::Sqlite(s) => s.todos_with_prefix(prefix),
        }
    }
}
