use thiserror::Error;

/// Failures of the backing medium. Any of these means the mutation did not happen.
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Store error: {0}")]
    Store(String),
}

#[derive(Error, Debug)]
pub enum TodoError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("No to-do matches '{0}'")]
    NotFound(String),

    #[error("Prefix '{prefix}' is ambiguous, it matches {}: {}", .matches.len(), .matches.join(", "))]
    AmbiguousPrefix { prefix: String, matches: Vec<String> },

    #[error("Prefix '{prefix}' is too short, use at least {min} characters")]
    PrefixTooShort { prefix: String, min: usize },

    #[error("Duplicate identifier: {0}")]
    DuplicateIdentifier(String),

    #[error("Persistence error: {0}")]
    Persistence(#[from] PersistenceError),

    #[error("Random source unavailable: {0}")]
    RandomSource(#[from] rand::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl TodoError {
    pub fn is_persistence(&self) -> bool {
        matches!(self, TodoError::Persistence(_))
    }
}

impl From<std::io::Error> for TodoError {
    fn from(err: std::io::Error) -> Self {
        TodoError::Persistence(err.into())
    }
}

impl From<serde_json::Error> for TodoError {
    fn from(err: serde_json::Error) -> Self {
        TodoError::Persistence(err.into())
    }
}

impl From<rusqlite::Error> for TodoError {
    fn from(err: rusqlite::Error) -> Self {
        TodoError::Persistence(err.into())
    }
}

pub type Result<T> = std::result::Result<T, TodoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ambiguous_message_lists_matches() {
        let err = TodoError::AmbiguousPrefix {
            prefix: "abc".into(),
            matches: vec!["abc111".into(), "abc222".into()],
        };
        assert_eq!(
            err.to_string(),
            "Prefix 'abc' is ambiguous, it matches 2: abc111, abc222"
        );
    }

    #[test]
    fn io_errors_classify_as_persistence() {
        let err: TodoError = std::io::Error::other("disk full").into();
        assert!(err.is_persistence());
        assert!(!TodoError::NotFound("abc".into()).is_persistence());
    }
}
