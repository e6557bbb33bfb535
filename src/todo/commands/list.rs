use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::ListFilter;
use crate::store::DataStore;

/// Lists live to-dos in creation order. An empty store is not an error; the
/// result carries an info message instead.
pub fn run<S: DataStore>(store: &S, filter: ListFilter) -> Result<CmdResult> {
    let listed: Vec<_> = store
        .live_todos()?
        .into_iter()
        .filter(|t| filter.accepts(t))
        .collect();

    let mut result = CmdResult::default();
    if listed.is_empty() {
        result.add_message(CmdMessage::info(match filter {
            ListFilter::All => "No to-dos.",
            ListFilter::Pending => "No pending to-dos.",
            ListFilter::Completed => "No completed to-dos.",
        }));
    }
    Ok(result.with_listed(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn empty_store_is_success_with_message() {
        let store = InMemoryStore::new();
        let result = run(&store, ListFilter::All).unwrap();
        assert!(result.listed.is_empty());
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].level, MessageLevel::Info);
    }

    #[test]
    fn lists_in_creation_order_without_tombstones() {
        let fixture = StoreFixture::new()
            .with_todo("fff000000001", "first")
            .with_deleted_todo("aaa000000002", "gone")
            .with_todo("aaa000000003", "third");
        let result = run(&fixture.store, ListFilter::All).unwrap();
        let texts: Vec<_> = result.listed.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "third"]);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn filters_by_completion() {
        let fixture = StoreFixture::new()
            .with_todo("aaa000000001", "open")
            .with_completed_todo("aaa000000002", "closed");

        let pending = run(&fixture.store, ListFilter::Pending).unwrap().listed;
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].text, "open");

        let completed = run(&fixture.store, ListFilter::Completed).unwrap().listed;
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].text, "closed");
    }
}
