use crate::error::{Result, TodoError};
use crate::model::Todo;
use crate::store::DataStore;

/// Shortest prefix accepted for lookups. Anything shorter risks matching most
/// of the list.
pub const MIN_PREFIX_LEN: usize = 3;

/// Resolves a full id or id prefix to exactly one live record.
///
/// Input is trimmed and lowercased, since ids are lowercase hex. A full id is
/// just a prefix that happens to match one record. More than one match is an
/// error; this never picks one.
pub fn resolve_prefix<S: DataStore>(store: &S, input: &str) -> Result<Todo> {
    let prefix = input.trim().to_ascii_lowercase();
    if prefix.chars().count() < MIN_PREFIX_LEN {
        return Err(TodoError::PrefixTooShort {
            prefix,
            min: MIN_PREFIX_LEN,
        });
    }

    let mut matches = store.todos_with_prefix(&prefix)?;
    match matches.len() {
        0 => Err(TodoError::NotFound(prefix)),
        1 => Ok(matches.remove(0)),
        _ => Err(TodoError::AmbiguousPrefix {
            prefix,
            matches: matches.into_iter().map(|t| t.id).collect(),
        }),
    }
}

/// Rejects empty or whitespace-only text.
pub fn validate_text(text: &str) -> Result<()> {
    if text.trim().is_empty() {
        return Err(TodoError::InvalidInput(
            "to-do text cannot be empty".to_string(),
        ));
    }
    Ok(())
}
