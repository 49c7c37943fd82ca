use super::HistoryTable;
use crate::domain::models::Message;
use crate::domain::models::Role;

#[test]
fn it_saves_and_restores_messages() {
    let mut table = HistoryTable::new();
    let messages = vec![
        Message::new(Role::User, "hello"),
        Message::new(Role::Assistant, "hi"),
    ];

    table.save("doc-a", &messages);
    assert_eq!(table.restore("doc-a"), messages);
}

#[test]
fn it_restores_empty_for_unknown_documents() {
    let table = HistoryTable::new();
    assert!(table.restore("never-seen").is_empty());
}

#[test]
fn it_skips_saving_empty_lists() {
    let mut table = HistoryTable::new();
    table.save("doc-a", &[]);
    assert!(table.is_empty());
}

#[test]
fn it_isolates_documents() {
    let mut table = HistoryTable::new();
    table.save("doc-a", &[Message::new(Role::User, "for a")]);
    table.save("doc-b", &[Message::new(Role::User, "for b")]);

    assert_eq!(table.restore("doc-a")[0].content, "for a");
    assert_eq!(table.restore("doc-b")[0].content, "for b");
    assert_eq!(table.document_ids(), vec!["doc-a", "doc-b"]);
}

#[test]
fn it_replaces_entries_on_save() {
    let mut table = HistoryTable::new();
    table.save("doc-a", &[Message::new(Role::User, "old")]);
    table.save("doc-a", &[Message::new(Role::User, "new")]);

    let restored = table.restore("doc-a");
    assert_eq!(restored.len(), 1);
    assert_eq!(restored[0].content, "new");
}

#[test]
fn it_removes_single_entries() {
    let mut table = HistoryTable::new();
    table.save("doc-a", &[Message::new(Role::User, "a")]);
    table.save("doc-b", &[Message::new(Role::User, "b")]);

    table.remove("doc-a");
    assert!(table.restore("doc-a").is_empty());
    assert_eq!(table.restore("doc-b").len(), 1);
}

#[test]
fn it_clears_all_entries() {
    let mut table = HistoryTable::new();
    table.save("doc-a", &[Message::new(Role::User, "a")]);
    table.save("doc-b", &[Message::new(Role::User, "b")]);

    table.clear();
    assert!(table.is_empty());
}
