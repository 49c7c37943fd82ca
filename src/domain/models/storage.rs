#[cfg(test)]
#[path = "storage_test.rs"]
mod tests;

use anyhow::Result;
use async_trait::async_trait;
use strum::EnumIter;
use strum::IntoEnumIterator;

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum StorageName {
    File,
    Memory,
}

impl StorageName {
    pub fn parse(text: String) -> Option<StorageName> {
        return StorageName::iter().find(|e| return e.to_string() == text);
    }
}

/// Durable key/value storage for the session envelope. A single key per
/// session; values are opaque strings owned by the persistence layer.
#[async_trait]
pub trait Storage {
    /// Returns the name of the storage backend.
    fn name(&self) -> StorageName;

    /// Returns the stored value for a key, or None when the key has never
    /// been written.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Writes a value under a key, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Drops a key. Removing an absent key is not an error.
    async fn remove(&self, key: &str) -> Result<()>;
}
