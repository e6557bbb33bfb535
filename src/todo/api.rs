//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for all
//! to-do operations, whatever the UI. It dispatches to `commands::*` and returns
//! structured [`CmdResult`]s. No business logic, no I/O, no formatting.
//!
//! `TodoApi<S: DataStore>` is generic over the storage backend:
//! - Production: `TodoApi<AppStore>`
//! - Testing: `TodoApi<InMemoryStore>`
//!
//! Callers pass full ids or prefixes of at least
//! [`MIN_PREFIX_LEN`](crate::commands::helpers::MIN_PREFIX_LEN) characters
//! wherever a record is targeted.

use crate::commands;
use crate::error::Result;
use crate::model::{ListFilter, TodoPatch};
use crate::store::DataStore;

pub struct TodoApi<S: DataStore> {
    store: S,
}

impl<S: DataStore> TodoApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn create(&mut self, text: &str) -> Result<CmdResult> {
        commands::create::run(&mut self.store, text)
    }

    pub fn list(&self, filter: ListFilter) -> Result<CmdResult> {
        commands::list::run(&self.store, filter)
    }

    pub fn find(&self, id_or_prefix: &str) -> Result<CmdResult> {
        commands::find::run(&self.store, id_or_prefix)
    }

    pub fn update_text(&mut self, id_or_prefix: &str, text: &str) -> Result<CmdResult> {
        commands::update::text(&mut self.store, id_or_prefix, text)
    }

    pub fn update(&mut self, id_or_prefix: &str, patch: &TodoPatch) -> Result<CmdResult> {
        commands::update::run(&mut self.store, id_or_prefix, patch)
    }

    pub fn toggle(&mut self, id_or_prefix: &str) -> Result<CmdResult> {
        commands::toggle::run(&mut self.store, id_or_prefix)
    }

    pub fn complete(&mut self, id_or_prefix: &str) -> Result<CmdResult> {
        commands::update::set_completed(&mut self.store, id_or_prefix, true)
    }

    pub fn reopen(&mut self, id_or_prefix: &str) -> Result<CmdResult> {
        commands::update::set_completed(&mut self.store, id_or_prefix, false)
    }

    pub fn delete(&mut self, id_or_prefix: &str) -> Result<CmdResult> {
        commands::delete::run(&mut self.store, id_or_prefix)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
