use crate::commands::helpers::resolve_prefix;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;
use chrono::Utc;
use log::info;

pub fn run<S: DataStore>(store: &mut S, id_or_prefix: &str) -> Result<CmdResult> {
    let mut todo = resolve_prefix(store, id_or_prefix)?;
    todo.is_completed = !todo.is_completed;
    todo.updated_at = Utc::now();
    store.save_todo(&todo)?;
    info!("toggled to-do {} to completed={}", todo.id, todo.is_completed);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "To-do {} ({}): {}",
        if todo.is_completed { "completed" } else { "reopened" },
        todo.id,
        todo.text
    )));
    Ok(result.with_affected(vec![todo]))
}
