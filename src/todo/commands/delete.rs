use crate::commands::helpers::resolve_prefix;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;
use chrono::Utc;
use log::info;

/// Tombstones the resolved record. It disappears from listings and lookups
/// but stays in the store so its id is never handed out again.
pub fn run<S: DataStore>(store: &mut S, id_or_prefix: &str) -> Result<CmdResult> {
    let mut todo = resolve_prefix(store, id_or_prefix)?;
    let now = Utc::now();
    todo.deleted_at = Some(now);
    todo.updated_at = now;
    store.save_todo(&todo)?;
    info!("deleted to-do {}", todo.id);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "To-do deleted ({}): {}",
        todo.id, todo.text
    )));
    Ok(result.with_affected(vec![todo]))
}
