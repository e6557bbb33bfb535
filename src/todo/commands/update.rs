use crate::commands::helpers::{resolve_prefix, validate_text};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TodoError};
use crate::model::TodoPatch;
use crate::store::DataStore;
use log::info;

/// Applies `patch` to the record `id_or_prefix` resolves to.
///
/// Input is validated before resolution and the store is written once, so an
/// invalid patch or a failed write leaves the stored record unchanged.
pub fn run<S: DataStore>(
    store: &mut S,
    id_or_prefix: &str,
    patch: &TodoPatch,
) -> Result<CmdResult> {
    if patch.is_empty() {
        return Err(TodoError::InvalidInput("nothing to update".to_string()));
    }
    if let Some(text) = &patch.text {
        validate_text(text)?;
    }

    let mut todo = resolve_prefix(store, id_or_prefix)?;
    let mut result = CmdResult::default();

    if let Some(done) = patch.is_completed {
        if patch.text.is_none() && todo.is_completed == done {
            result.add_message(CmdMessage::warning(format!(
                "To-do {} is already {}",
                todo.id,
                if done { "completed" } else { "pending" }
            )));
            return Ok(result.with_affected(vec![todo]));
        }
    }

    todo.apply(patch);
    store.save_todo(&todo)?;
    info!("updated to-do {}", todo.id);

    result.add_message(CmdMessage::success(format!(
        "To-do updated ({}): {}",
        todo.id, todo.text
    )));
    Ok(result.with_affected(vec![todo]))
}

pub fn text<S: DataStore>(
    store: &mut S,
    id_or_prefix: &str,
    new_text: &str,
) -> Result<CmdResult> {
    run(store, id_or_prefix, &TodoPatch::text(new_text))
}

pub fn set_completed<S: DataStore>(
    store: &mut S,
    id_or_prefix: &str,
    done: bool,
) -> Result<CmdResult> {
    run(store, id_or_prefix, &TodoPatch::completed(done))
}
