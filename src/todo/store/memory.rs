use super::DataStore;
use crate::error::{Result, TodoError};
use crate::model::Todo;

/// In-memory storage for testing. Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    todos: Vec<Todo>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataStore for InMemoryStore {
    fn all_todos(&self) -> Result<Vec<Todo>> {
        Ok(self.todos.clone())
    }

    fn insert_todo(&mut self, todo: &Todo) -> Result<()> {
        if self.todos.iter().any(|t| t.id == todo.id) {
            return Err(TodoError::DuplicateIdentifier(todo.id.clone()));
        }
        self.todos.push(todo.clone());
        Ok(())
    }

    fn save_todo(&mut self, todo: &Todo) -> Result<()> {
        let slot = self
            .todos
            .iter_mut()
            .find(|t| t.id == todo.id)
            .ok_or_else(|| TodoError::NotFound(todo.id.clone()))?;
        *slot = todo.clone();
        Ok(())
    }
}

// --- Test Fixtures ---


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_rejects_duplicate_ids() {
        let mut store = InMemoryStore::new();
        let todo = Todo::new("abcdef012345".into(), "a".into());
        store.insert_todo(&todo).unwrap();
        let err = store.insert_todo(&todo).unwrap_err();
        assert!(matches!(err, TodoError::DuplicateIdentifier(id) if id == "abcdef012345"));
    }

    #[test]
    fn save_requires_existing_record() {
        let mut store = InMemoryStore::new();
        let todo = Todo::new("abcdef012345".into(), "a".into());
        assert!(matches!(
            store.save_todo(&todo),
            Err(TodoError::NotFound(_))
        ));
    }

    #[test]
    fn handed_out_records_do_not_alias_store_state() {
        let mut store = InMemoryStore::new();
        store
            .insert_todo(&Todo::new("abcdef012345".into(), "a".into()))
            .unwrap();
        let mut copy = store.all_todos().unwrap().remove(0);
        copy.text = "changed".into();
        assert_eq!(store.all_todos().unwrap()[0].text, "a");
    }
}
