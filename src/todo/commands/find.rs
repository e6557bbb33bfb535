use crate::commands::helpers::resolve_prefix;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S, id_or_prefix: &str) -> Result<CmdResult> {
    let todo = resolve_prefix(store, id_or_prefix)?;
    Ok(CmdResult::default().with_listed(vec![todo]))
}
