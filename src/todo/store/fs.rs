use super::DataStore;
use crate::error::{Result, TodoError};
use crate::model::Todo;
use log::debug;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

pub const DATA_FILENAME: &str = "todos.json";

pub struct FileStore {
    root: PathBuf,
    /// Where temp files are created before the rename. Same filesystem as `root`.
    staging: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self {
            staging: root.clone(),
            root,
        }
    }

    #[cfg(test)]
    fn with_staging(mut self, staging: PathBuf) -> Self {
        self.staging = staging;
        self
    }

    pub fn data_file(&self) -> PathBuf {
        self.root.join(DATA_FILENAME)
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path)?;
        }
        Ok(())
    }

    fn load(&self) -> Result<Vec<Todo>> {
        let data_file = self.data_file();
        if !data_file.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&data_file)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        let todos: Vec<Todo> = serde_json::from_str(&content)?;
        Ok(todos)
    }

    /// Writes the whole collection to a sibling temp file, then renames it over
    /// the data file. On any error the previous file is left untouched.
    fn store(&self, todos: &[Todo]) -> Result<()> {
        self.ensure_dir(&self.root)?;
        let content = serde_json::to_string_pretty(todos)?;

        let mut tmp = NamedTempFile::new_in(&self.staging)?;
        tmp.write_all(content.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(self.data_file()).map_err(|e| e.error)?;

        debug!(
            "wrote {} records to {}",
            todos.len(),
            self.data_file().display()
        );
        Ok(())
    }
}

impl DataStore for FileStore {
    fn all_todos(&self) -> Result<Vec<Todo>> {
        self.load()
    }

    fn insert_todo(&mut self, todo: &Todo) -> Result<()> {
        let mut todos = self.load()?;
        if todos.iter().any(|t| t.id == todo.id) {
            return Err(TodoError::DuplicateIdentifier(todo.id.clone()));
        }
        todos.push(todo.clone());
        self.store(&todos)
    }

    fn save_todo(&mut self, todo: &Todo) -> Result<()> {
        let mut todos = self.load()?;
        let slot = todos
            .iter_mut()
            .find(|t| t.id == todo.id)
            .ok_or_else(|| TodoError::NotFound(todo.id.clone()))?;
        *slot = todo.clone();
        self.store(&todos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo(id: &str, text: &str) -> Todo {
        Todo::new(id.to_string(), text.to_string())
    }

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nested"));
        assert!(store.all_todos().unwrap().is_empty());
    }

    #[test]
    fn empty_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(DATA_FILENAME), "").unwrap();
        let store = FileStore::new(dir.path().to_path_buf());
        assert!(store.all_todos().unwrap().is_empty());
    }

    #[test]
    fn insert_creates_directory_and_keeps_order() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("data"));
        store.insert_todo(&todo("aaa000000001", "first")).unwrap();
        store.insert_todo(&todo("aaa000000002", "second")).unwrap();
        store.insert_todo(&todo("aaa000000003", "third")).unwrap();

        let reopened = FileStore::new(dir.path().join("data"));
        let texts: Vec<_> = reopened
            .all_todos()
            .unwrap()
            .into_iter()
            .map(|t| t.text)
            .collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
    }

    #[test]
    fn file_is_a_json_array_of_records() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());
        store.insert_todo(&todo("abc123abc123", "buy milk")).unwrap();

        let raw = fs::read_to_string(store.data_file()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let first = &value.as_array().unwrap()[0];
        assert_eq!(first["id"], "abc123abc123");
        assert_eq!(first["text"], "buy milk");
        assert_eq!(first["is_completed"], false);
        assert!(first.get("created_at").is_some());
    }

    #[test]
    fn save_replaces_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());
        store.insert_todo(&todo("aaa000000001", "first")).unwrap();
        store.insert_todo(&todo("aaa000000002", "second")).unwrap();

        let mut updated = store.all_todos().unwrap()[0].clone();
        updated.text = "first, edited".into();
        store.save_todo(&updated).unwrap();

        let todos = store.all_todos().unwrap();
        assert_eq!(todos[0].text, "first, edited");
        assert_eq!(todos[1].text, "second");
    }

    #[test]
    fn corrupt_file_is_a_persistence_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(DATA_FILENAME), "{not json").unwrap();
        let store = FileStore::new(dir.path().to_path_buf());
        assert!(store.all_todos().unwrap_err().is_persistence());
    }

    #[test]
    fn unwritable_root_is_a_persistence_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();

        let mut store = FileStore::new(blocker.join("sub"));
        let err = store.insert_todo(&todo("aaa000000001", "lost")).unwrap_err();
        assert!(err.is_persistence());
    }

    #[test]
    fn rejected_insert_leaves_file_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());
        store.insert_todo(&todo("aaa000000001", "keep me")).unwrap();
        let before = fs::read_to_string(store.data_file()).unwrap();

        let err = store
            .insert_todo(&todo("aaa000000001", "collides"))
            .unwrap_err();
        assert!(matches!(err, TodoError::DuplicateIdentifier(_)));
        assert_eq!(fs::read_to_string(store.data_file()).unwrap(), before);
    }

    #[test]
    fn no_temp_files_are_left_behind() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());
        store.insert_todo(&todo("aaa000000001", "a")).unwrap();
        store.insert_todo(&todo("aaa000000002", "b")).unwrap();

        let entries: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from(DATA_FILENAME)]);
    }

    #[test]
    fn failed_write_keeps_existing_file_byte_for_byte() {
        use crate::commands::{create, delete, toggle, update};

        let dir = tempfile::tempdir().unwrap();
        let mut seed = FileStore::new(dir.path().to_path_buf());
        seed.insert_todo(&todo("aaa000000001", "buy milk")).unwrap();
        seed.insert_todo(&todo("bbb000000002", "walk dog")).unwrap();
        let before = fs::read(seed.data_file()).unwrap();

        let mut store =
            FileStore::new(dir.path().to_path_buf()).with_staging(dir.path().join("gone"));

        let errors = [
            create::run(&mut store, "call mom").unwrap_err(),
            update::text(&mut store, "aaa", "buy oat milk").unwrap_err(),
            toggle::run(&mut store, "aaa").unwrap_err(),
            delete::run(&mut store, "bbb").unwrap_err(),
        ];
        for err in errors {
            assert!(err.is_persistence(), "unexpected {err:?}");
        }

        assert_eq!(fs::read(store.data_file()).unwrap(), before);
        assert!(!dir.path().join("gone").exists());
    }
}
