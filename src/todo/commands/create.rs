use crate::commands::helpers::validate_text;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::id;
use crate::model::Todo;
use crate::store::DataStore;
use log::info;

pub fn run<S: DataStore>(store: &mut S, text: &str) -> Result<CmdResult> {
    validate_text(text)?;

    let todo = Todo::new(id::generate()?, text.to_string());
    store.insert_todo(&todo)?;
    info!("created to-do {}", todo.id);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "To-do created ({}): {}",
        todo.id, todo.text
    )));
    Ok(result.with_affected(vec![todo]))
}
