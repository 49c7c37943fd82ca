#[cfg(test)]
#[path = "session_service_test.rs"]
mod tests;

use anyhow::Result;

use super::Persistence;
use super::SessionController;
use crate::domain::models::Message;
use crate::domain::models::RemoteName;
use crate::domain::models::StorageName;
use crate::infrastructure::remote::RemoteBox;
use crate::infrastructure::remote::RemoteManager;
use crate::infrastructure::storage::StorageManager;

/// Drives a [`SessionController`] against the asynchronous world: metadata
/// fetches, rename confirmations, and the write-through to durable storage
/// after every mutation. No failure from a collaborator escapes these
/// operations; they land in the controller's error flag or in the logs.
pub struct SessionService {
    controller: SessionController,
    remote: RemoteBox,
    persistence: Persistence,
}

impl SessionService {
    pub fn new(remote: RemoteBox, persistence: Persistence) -> SessionService {
        return SessionService {
            controller: SessionController::new(),
            remote,
            persistence,
        };
    }

    /// Composition-root constructor: resolves the named collaborators, wires
    /// a persistence adapter with the configured storage key, and restores
    /// the previous session.
    pub async fn start(remote_name: RemoteName, storage_name: StorageName) -> Result<SessionService> {
        let remote = RemoteManager::get(remote_name)?;
        let storage = StorageManager::get(storage_name)?;

        let mut service = SessionService::new(remote, Persistence::new(storage));
        service.load().await;
        return Ok(service);
    }

    pub fn controller(&self) -> &SessionController {
        return &self.controller;
    }

    pub fn messages(&self) -> &[Message] {
        return self.controller.messages();
    }

    /// Restores the previous session at startup. Absent, corrupt, or legacy
    /// payloads all resolve to a usable state.
    pub async fn load(&mut self) {
        let envelope = self.persistence.load().await;
        self.controller.hydrate(envelope);
    }

    /// Switches the active document. The synchronous transition (history
    /// reconciliation, provisional metadata) is visible immediately; the
    /// authoritative display name arrives once the fetch resolves, and only
    /// if the document is still the active one by then.
    pub async fn activate(&mut self, id: Option<&str>) {
        let request = self.controller.set_active_document(id);
        self.persist().await;

        let Some(request) = request else {
            return;
        };

        match self.remote.fetch_metadata(&request.document_id).await {
            Ok(metadata) => {
                self.controller
                    .resolve_metadata(&request.document_id, metadata);
                self.persist().await;
            }
            Err(err) => {
                tracing::error!(
                    error = ?err,
                    document_id = %request.document_id,
                    "metadata fetch failed"
                );
                self.controller.fail_metadata(
                    &request.document_id,
                    &format!("Failed to load document details: {err}"),
                );
            }
        }
    }

    /// Optimistic rename: the local name changes first and is not rolled
    /// back when the backend rejects the call; the failure only surfaces
    /// through the error flag.
    pub async fn rename(&mut self, new_name: &str) {
        let Some(id) = self
            .controller
            .active_document_id()
            .map(str::to_string)
        else {
            return;
        };

        self.controller.rename_document(new_name);
        self.persist().await;

        if let Err(err) = self.remote.rename(&id, new_name).await {
            tracing::error!(error = ?err, document_id = %id, "rename failed");
            self.controller
                .set_error(Some(format!("Failed to rename document: {err}")));
        }
    }

    pub async fn send_user_message(&mut self, content: &str) -> String {
        let id = self.controller.add_user_message(content);
        self.persist().await;
        return id;
    }

    pub async fn push_assistant_message(&mut self, content: &str) -> String {
        let id = self.controller.add_assistant_message(content);
        self.persist().await;
        return id;
    }

    pub async fn replace_last_assistant<F>(&mut self, transform: F) -> bool
    where
        F: FnOnce(&mut Message),
    {
        let replaced = self.controller.replace_last_assistant(transform);
        if replaced {
            self.persist().await;
        }
        return replaced;
    }

    pub async fn clear_chat(&mut self) {
        self.controller.clear_chat();
        self.persist().await;
    }

    pub async fn clear_all_chats(&mut self) {
        self.controller.clear_all_chats();
        self.persist().await;
    }

    /// Drops the persisted envelope entirely, on top of the in-memory reset.
    pub async fn teardown(&mut self) {
        self.controller.clear_all_chats();
        self.controller.set_active_document(None);
        self.persistence.reset().await;
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.controller.set_loading(loading);
    }

    pub fn set_error(&mut self, error: Option<String>) {
        self.controller.set_error(error);
    }

    async fn persist(&self) {
        self.persistence.save(&self.controller.envelope()).await;
    }
}
