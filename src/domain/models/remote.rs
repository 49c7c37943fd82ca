#[cfg(test)]
#[path = "remote_test.rs"]
mod tests;

use anyhow::Result;
use async_trait::async_trait;
use strum::EnumIter;
use strum::IntoEnumIterator;

use super::DocumentMetadata;

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum RemoteName {
    Http,
    None,
}

impl RemoteName {
    pub fn parse(text: String) -> Option<RemoteName> {
        return RemoteName::iter().find(|e| return e.to_string() == text);
    }
}

/// The collaborator contract for document lookups and renames. Both calls may
/// fail with retrievable errors; callers keep provisional state on failure.
#[async_trait]
pub trait Remote {
    /// Returns the name of the remote.
    fn name(&self) -> RemoteName;

    /// Fetches authoritative metadata for a document id.
    async fn fetch_metadata(&self, id: &str) -> Result<DocumentMetadata>;

    /// Confirms a display-name change with the backend.
    async fn rename(&self, id: &str, new_name: &str) -> Result<()>;
}
