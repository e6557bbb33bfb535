use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: String,
    pub text: String,
    pub is_completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    // Tombstone. Deleted records stay on disk so their ids are never reused.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Todo {
    pub fn new(id: String, text: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            text,
            is_completed: false,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Applies a patch in place. Returns `true` if any field was present.
    pub fn apply(&mut self, patch: &TodoPatch) -> bool {
        if patch.is_empty() {
            return false;
        }
        if let Some(text) = &patch.text {
            self.text = text.clone();
        }
        if let Some(done) = patch.is_completed {
            self.is_completed = done;
        }
        self.updated_at = Utc::now();
        true
    }
}

/// A partial update. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoPatch {
    pub text: Option<String>,
    pub is_completed: Option<bool>,
}

impl TodoPatch {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn completed(done: bool) -> Self {
        Self {
            is_completed: Some(done),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.is_completed.is_none()
    }
}

/// Which completion states a listing should include.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListFilter {
    #[default]
    All,
    Pending,
    Completed,
}

impl ListFilter {
    pub fn accepts(&self, todo: &Todo) -> bool {
        match self {
            ListFilter::All => true,
            ListFilter::Pending => !todo.is_completed,
            ListFilter::Completed => todo.is_completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_todo_is_pending_and_live() {
        let todo = Todo::new("a1b2c3d4e5f6".into(), "buy milk".into());
        assert!(!todo.is_completed);
        assert!(!todo.is_deleted());
        assert_eq!(todo.created_at, todo.updated_at);
    }

    #[test]
    fn apply_only_touches_present_fields() {
        let mut todo = Todo::new("a1b2c3d4e5f6".into(), "buy milk".into());
        assert!(todo.apply(&TodoPatch::completed(true)));
        assert_eq!(todo.text, "buy milk");
        assert!(todo.is_completed);

        assert!(todo.apply(&TodoPatch::text("buy oat milk")));
        assert_eq!(todo.text, "buy oat milk");
        assert!(todo.is_completed);
    }

    #[test]
    fn empty_patch_is_a_no_op() {
        let mut todo = Todo::new("a1b2c3d4e5f6".into(), "buy milk".into());
        let before = todo.clone();
        assert!(!todo.apply(&TodoPatch::default()));
        assert_eq!(todo, before);
    }

    #[test]
    fn tombstone_is_omitted_from_json_when_absent() {
        let todo = Todo::new("a1b2c3d4e5f6".into(), "x".into());
        let json = serde_json::to_string(&todo).unwrap();
        assert!(!json.contains("deleted_at"));

        let parsed: Todo = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, todo);
    }
}
