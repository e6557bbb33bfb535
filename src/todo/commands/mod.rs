//! Business logic, one module per operation.
//!
//! Every command takes the store explicitly, returns a [`CmdResult`], and never
//! prints. Mutating commands resolve their target first, validate input, build
//! the changed record as a copy and hand it to the store in one call, so a
//! failure at any step leaves persisted state as it was.

use crate::model::Todo;

pub mod create;
pub mod delete;
pub mod find;
pub mod helpers;
pub mod list;
pub mod toggle;
pub mod update;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Records created or changed by the command, in their new state.
    pub affected: Vec<Todo>,
    /// Records the command was asked to show.
    pub listed: Vec<Todo>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected(mut self, todos: Vec<Todo>) -> Self {
        self.affected = todos;
        self
    }

    pub fn with_listed(mut self, todos: Vec<Todo>) -> Self {
        self.listed = todos;
        self
    }

    /// The single affected record, for commands that touch exactly one.
    pub fn affected_one(&self) -> Option<&Todo> {
        match self.affected.as_slice() {
            [todo] => Some(todo),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::{FailingWrites, StoreFixture};
    use crate::store::DataStore;

    #[test]
    fn refused_writes_surface_as_persistence_and_change_nothing() {
        let mut store = FailingWrites::over(
            StoreFixture::new()
                .with_todo("aaa000000001", "buy milk")
                .with_completed_todo("bbb000000002", "walk dog"),
        );
        let before = store.all_todos().unwrap();

        let errors = [
            create::run(&mut store, "call mom").unwrap_err(),
            update::text(&mut store, "aaa", "buy oat milk").unwrap_err(),
            update::set_completed(&mut store, "aaa", true).unwrap_err(),
            toggle::run(&mut store, "bbb").unwrap_err(),
            delete::run(&mut store, "aaa").unwrap_err(),
        ];
        for err in errors {
            assert!(err.is_persistence(), "unexpected {err:?}");
        }
        assert_eq!(store.all_todos().unwrap(), before);
    }
}
