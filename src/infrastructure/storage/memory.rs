#[cfg(test)]
#[path = "memory_test.rs"]
mod tests;

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use dashmap::DashMap;

use crate::domain::models::Storage;
use crate::domain::models::StorageName;

/// Non-durable storage for tests and the dev variant. Clones share the same
/// underlying map, which lets tests keep a handle on storage handed to a
/// persistence adapter.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<DashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> MemoryStorage {
        return MemoryStorage::default();
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    fn name(&self) -> StorageName {
        return StorageName::Memory;
    }

    #[allow(clippy::implicit_return)]
    async fn get(&self, key: &str) -> Result<Option<String>> {
        if let Some(value) = self.entries.get(key) {
            return Ok(Some(value.to_string()));
        }

        return Ok(None);
    }

    #[allow(clippy::implicit_return)]
    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        return Ok(());
    }

    #[allow(clippy::implicit_return)]
    async fn remove(&self, key: &str) -> Result<()> {
        self.entries.remove(key);
        return Ok(());
    }
}
