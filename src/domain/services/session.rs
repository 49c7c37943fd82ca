#[cfg(test)]
#[path = "session_test.rs"]
mod tests;

use super::HistoryTable;
use crate::domain::models::DocumentMetadata;
use crate::domain::models::Envelope;
use crate::domain::models::Message;
use crate::domain::models::Role;
use crate::domain::models::ENVELOPE_VERSION;

/// Handed back by [`SessionController::set_active_document`] when the new
/// document needs an authoritative metadata lookup. The originating id is
/// compared against the active id again at resolution time, which is what
/// discards fetches that lost a rapid document-switch race.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MetadataRequest {
    pub document_id: String,
}

/// Single source of truth for which document is being discussed and what has
/// been said. Owns the live message list and the history table outright;
/// everything outside reads snapshots. One instance per session, owned by the
/// composition root.
#[derive(Debug, Default)]
pub struct SessionController {
    history: HistoryTable,
    active_document_id: Option<String>,
    document: Option<DocumentMetadata>,
    messages: Vec<Message>,
    loading: bool,
    error: Option<String>,
}

impl SessionController {
    pub fn new() -> SessionController {
        return SessionController::default();
    }

    pub fn active_document_id(&self) -> Option<&str> {
        return self.active_document_id.as_deref();
    }

    pub fn document(&self) -> Option<&DocumentMetadata> {
        return self.document.as_ref();
    }

    pub fn messages(&self) -> &[Message] {
        return &self.messages;
    }

    pub fn history(&self) -> &HistoryTable {
        return &self.history;
    }

    pub fn loading(&self) -> bool {
        return self.loading;
    }

    pub fn error(&self) -> Option<&str> {
        return self.error.as_deref();
    }

    /// Switches the active document. Re-selecting the current id is a no-op.
    /// Otherwise the outgoing live list is committed to the history table
    /// before the incoming list is restored, transient flags reset, and
    /// provisional metadata is installed for the incoming id. Returns the
    /// metadata request to issue for non-null ids.
    pub fn set_active_document(&mut self, id: Option<&str>) -> Option<MetadataRequest> {
        if self.active_document_id.as_deref() == id {
            return None;
        }

        // Save before load: in-flight messages must land in the table even if
        // everything after this point goes wrong.
        if let Some(outgoing) = &self.active_document_id {
            self.history.save(outgoing, &self.messages);
        }

        self.active_document_id = id.map(str::to_string);
        self.messages = match id {
            Some(incoming) => self.history.restore(incoming),
            None => vec![],
        };
        self.loading = false;
        self.error = None;

        match id {
            Some(incoming) => {
                self.document = Some(DocumentMetadata::provisional(incoming));
                return Some(MetadataRequest {
                    document_id: incoming.to_string(),
                });
            }
            None => {
                self.document = None;
                return None;
            }
        }
    }

    /// Commits fetched metadata, unless the document has changed since the
    /// fetch was issued. A rename applied while the fetch was in flight wins
    /// over the fetched display name.
    pub fn resolve_metadata(&mut self, document_id: &str, mut metadata: DocumentMetadata) {
        if self.active_document_id.as_deref() != Some(document_id) {
            tracing::debug!(document_id, "discarding stale metadata fetch");
            return;
        }

        if let Some(current) = &self.document {
            if current.user_display_name {
                metadata.display_name = current.display_name.clone();
                metadata.user_display_name = true;
            }
        }

        self.document = Some(metadata);
    }

    /// Records a failed metadata fetch under the same staleness rule as
    /// [`SessionController::resolve_metadata`]. The provisional name stays.
    pub fn fail_metadata(&mut self, document_id: &str, error: &str) {
        if self.active_document_id.as_deref() != Some(document_id) {
            tracing::debug!(document_id, "discarding stale metadata failure");
            return;
        }

        self.error = Some(error.to_string());
    }

    pub fn add_user_message(&mut self, content: &str) -> String {
        return self.push_message(Role::User, content);
    }

    pub fn add_assistant_message(&mut self, content: &str) -> String {
        return self.push_message(Role::Assistant, content);
    }

    fn push_message(&mut self, role: Role, content: &str) -> String {
        let mut message = Message::new(role, content);

        // Timestamps are non-decreasing within a history even when the wall
        // clock steps backwards.
        if let Some(last) = self.messages.last() {
            message.timestamp = message.timestamp.max(last.timestamp);
        }

        let id = message.id.clone();
        self.messages.push(message);
        return id;
    }

    /// Applies a transform to the most recent assistant message, scanning
    /// from the end. Returns false (and changes nothing) when no assistant
    /// message exists. Backs retry and streaming-completion flows without
    /// duplicating history.
    pub fn replace_last_assistant<F>(&mut self, transform: F) -> bool
    where
        F: FnOnce(&mut Message),
    {
        let found = self
            .messages
            .iter_mut()
            .rev()
            .find(|msg| return msg.role == Role::Assistant);

        match found {
            Some(message) => {
                transform(message);
                return true;
            }
            None => return false,
        }
    }

    /// Optimistically updates the active document's display name. Silent
    /// no-op without an active document. The remote confirmation is the
    /// orchestrator's problem; a failure there surfaces through the error
    /// flag and the local name is not rolled back.
    pub fn rename_document(&mut self, new_name: &str) {
        if let Some(document) = &mut self.document {
            document.display_name = new_name.to_string();
            document.user_display_name = true;
        }
    }

    /// Empties the active document's conversation, live list and table entry
    /// both. Other documents' entries are untouched.
    pub fn clear_chat(&mut self) {
        self.messages.clear();
        self.loading = false;
        self.error = None;

        if let Some(active) = &self.active_document_id {
            self.history.remove(active);
        }
    }

    /// Full reset: live list, transient flags, and every table entry.
    pub fn clear_all_chats(&mut self) {
        self.messages.clear();
        self.loading = false;
        self.error = None;
        self.history.clear();
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn set_error(&mut self, error: Option<String>) {
        self.error = error;
    }

    /// Builds the durable snapshot. The active document's live list is
    /// reconciled into the snapshot's history copy so the envelope is
    /// self-consistent regardless of when the last switch happened.
    pub fn envelope(&self) -> Envelope {
        let mut histories = self.history.entries().clone();
        if let Some(active) = &self.active_document_id {
            if self.messages.is_empty() {
                histories.remove(active);
            } else {
                histories.insert(active.clone(), self.messages.clone());
            }
        }

        return Envelope {
            version: ENVELOPE_VERSION,
            histories,
            active_document_id: self.active_document_id.clone(),
            document: self.document.clone(),
            messages: self.messages.clone(),
        };
    }

    /// Restores state from a decoded envelope. Transient flags always come
    /// back as safe defaults so a crash mid-request never sticks.
    pub fn hydrate(&mut self, envelope: Envelope) {
        self.history = HistoryTable::from_entries(envelope.histories);
        self.active_document_id = envelope.active_document_id;
        self.document = envelope.document;
        self.messages = envelope.messages;
        self.loading = false;
        self.error = None;
    }
}
