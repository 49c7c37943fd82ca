#[cfg(test)]
#[path = "history_test.rs"]
mod tests;

use std::collections::HashMap;

use crate::domain::models::Message;

/// Per-document saved message sequences, used to restore context when
/// switching between documents. Entries are created lazily on the first
/// switch away from a document and survive until a full reset.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HistoryTable {
    entries: HashMap<String, Vec<Message>>,
}

impl HistoryTable {
    pub fn new() -> HistoryTable {
        return HistoryTable {
            entries: HashMap::new(),
        };
    }

    pub fn from_entries(entries: HashMap<String, Vec<Message>>) -> HistoryTable {
        return HistoryTable { entries };
    }

    /// Commits a document's messages. Empty lists are skipped so switching
    /// away from an untouched document never creates a table entry.
    pub fn save(&mut self, id: &str, messages: &[Message]) {
        if messages.is_empty() {
            return;
        }

        self.entries.insert(id.to_string(), messages.to_vec());
    }

    /// Returns a copy of a document's saved messages, or an empty sequence
    /// for documents never seen before.
    pub fn restore(&self, id: &str) -> Vec<Message> {
        if let Some(messages) = self.entries.get(id) {
            return messages.clone();
        }

        return vec![];
    }

    pub fn remove(&mut self, id: &str) {
        self.entries.remove(id);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn is_empty(&self) -> bool {
        return self.entries.is_empty();
    }

    pub fn document_ids(&self) -> Vec<String> {
        let mut ids = self.entries.keys().cloned().collect::<Vec<String>>();
        ids.sort();
        return ids;
    }

    pub fn entries(&self) -> &HashMap<String, Vec<Message>> {
        return &self.entries;
    }
}
