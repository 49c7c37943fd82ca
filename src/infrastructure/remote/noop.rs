#[cfg(test)]
#[path = "noop_test.rs"]
mod tests;

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::models::DocumentMetadata;
use crate::domain::models::Remote;
use crate::domain::models::RemoteName;

/// Offline remote: lookups answer with the provisional fallback metadata and
/// renames succeed without going anywhere.
#[derive(Default)]
pub struct NoopRemote {}

#[async_trait]
impl Remote for NoopRemote {
    fn name(&self) -> RemoteName {
        return RemoteName::None;
    }

    #[allow(clippy::implicit_return)]
    async fn fetch_metadata(&self, id: &str) -> Result<DocumentMetadata> {
        return Ok(DocumentMetadata::provisional(id));
    }

    #[allow(clippy::implicit_return)]
    async fn rename(&self, _id: &str, _new_name: &str) -> Result<()> {
        return Ok(());
    }
}
