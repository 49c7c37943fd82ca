use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;
use test_utils::legacy_envelope_fixture;

use super::Persistence;
use crate::domain::models::Envelope;
use crate::domain::models::Message;
use crate::domain::models::Role;
use crate::domain::models::Storage;
use crate::domain::models::StorageName;
use crate::infrastructure::storage::memory::MemoryStorage;

struct BrokenStorage {}

#[async_trait]
impl Storage for BrokenStorage {
    fn name(&self) -> StorageName {
        return StorageName::Memory;
    }

    #[allow(clippy::implicit_return)]
    async fn get(&self, _key: &str) -> Result<Option<String>> {
        bail!("storage disabled");
    }

    #[allow(clippy::implicit_return)]
    async fn set(&self, _key: &str, _value: &str) -> Result<()> {
        bail!("storage disabled");
    }

    #[allow(clippy::implicit_return)]
    async fn remove(&self, _key: &str) -> Result<()> {
        bail!("storage disabled");
    }
}

#[tokio::test]
async fn it_round_trips_envelopes() {
    let storage = MemoryStorage::new();
    let persistence = Persistence::with_key(Box::new(storage), "test-session");

    let envelope = Envelope {
        messages: vec![Message::new(Role::User, "hello")],
        active_document_id: Some("doc-a".to_string()),
        ..Envelope::default()
    };

    persistence.save(&envelope).await;
    let loaded = persistence.load().await;

    assert_eq!(loaded, envelope);
}

#[tokio::test]
async fn it_loads_empty_when_nothing_is_persisted() {
    let persistence = Persistence::with_key(Box::new(MemoryStorage::new()), "test-session");
    assert_eq!(persistence.load().await, Envelope::default());
}

#[tokio::test]
async fn it_loads_empty_from_corrupt_payloads() {
    let storage = MemoryStorage::new();
    storage.set("test-session", "{definitely not json").await.unwrap();

    let persistence = Persistence::with_key(Box::new(storage), "test-session");
    assert_eq!(persistence.load().await, Envelope::default());
}

#[tokio::test]
async fn it_migrates_legacy_payloads_on_load() {
    let storage = MemoryStorage::new();
    storage
        .set("test-session", legacy_envelope_fixture())
        .await
        .unwrap();

    let persistence = Persistence::with_key(Box::new(storage), "test-session");
    let loaded = persistence.load().await;

    assert_eq!(loaded.messages.len(), 2);
    assert_eq!(loaded.messages[0].role, Role::Assistant);
    assert_eq!(loaded.messages[0].content, "hi");
}

#[tokio::test]
async fn it_resets_the_persisted_key() {
    let storage = MemoryStorage::new();
    let handle = storage.clone();
    let persistence = Persistence::with_key(Box::new(storage), "test-session");

    persistence.save(&Envelope::default()).await;
    assert!(handle.get("test-session").await.unwrap().is_some());

    persistence.reset().await;
    assert_eq!(handle.get("test-session").await.unwrap(), None);
}

#[tokio::test]
async fn it_swallows_storage_failures() {
    let persistence = Persistence::with_key(Box::new(BrokenStorage {}), "test-session");

    // Writes are best-effort, reads degrade to empty. Neither panics nor
    // surfaces an error.
    persistence.save(&Envelope::default()).await;
    assert_eq!(persistence.load().await, Envelope::default());
    persistence.reset().await;
}

#[test]
fn it_derives_the_key_from_configuration() {
    let persistence = Persistence::new(Box::new(MemoryStorage::new()));

    #[cfg(not(feature = "dev"))]
    assert_eq!(persistence.key(), "docchat-session");

    #[cfg(feature = "dev")]
    assert!(persistence.key().starts_with("docchat-session-"));
}
