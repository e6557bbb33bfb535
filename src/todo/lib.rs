//! # Todo Architecture
//!
//! Todo is a small to-do library with a CLI client. The library owns every
//! rule about records; the binary only parses arguments and prints.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs)                               │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Validation, prefix resolution, mutation rules            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait                                          │
//! │  - FileStore (JSON), SqliteStore, InMemoryStore (testing)   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Short ids
//!
//! Every record gets a 12-character hex id ([`id`]). Users may type any prefix
//! of at least three characters. A prefix that matches more than one live
//! record is rejected with [`error::TodoError::AmbiguousPrefix`]; the library
//! never guesses which record was meant.
//!
//! ## Deletion
//!
//! Deletes are tombstones: `deleted_at` is set and the record disappears from
//! every query, but the row is kept so its id is never reused.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Todo`, `TodoPatch`, `ListFilter`)
//! - [`id`]: Identifier generation
//! - [`config`]: Per-data-dir configuration
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod id;
pub mod model;
pub mod store;
