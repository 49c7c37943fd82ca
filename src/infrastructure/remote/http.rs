#[cfg(test)]
#[path = "http_test.rs"]
mod tests;

use std::time::Duration;

use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;
use serde_derive::Deserialize;
use serde_derive::Serialize;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::DocumentMetadata;
use crate::domain::models::Remote;
use crate::domain::models::RemoteName;

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct DocumentInfoResponse {
    document_id: String,
    display_name: Option<String>,
    extracted_title: Option<String>,
    filename: Option<String>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct RenameRequest {
    document_id: String,
    new_display_name: String,
}

pub struct HttpRemote {
    url: String,
    timeout: String,
}

impl Default for HttpRemote {
    fn default() -> HttpRemote {
        return HttpRemote {
            url: Config::get(ConfigKey::RemoteURL),
            timeout: Config::get(ConfigKey::FetchTimeout),
        };
    }
}

#[async_trait]
impl Remote for HttpRemote {
    fn name(&self) -> RemoteName {
        return RemoteName::Http;
    }

    #[allow(clippy::implicit_return)]
    async fn fetch_metadata(&self, id: &str) -> Result<DocumentMetadata> {
        let res = reqwest::Client::new()
            .get(format!("{url}/documents/{id}", url = self.url))
            .timeout(Duration::from_millis(self.timeout.parse::<u64>()?))
            .send()
            .await?;

        if !res.status().is_success() {
            tracing::error!(
                status = res.status().as_u16(),
                document_id = %id,
                "failed to fetch document metadata"
            );
            bail!("Failed to fetch document metadata");
        }

        let info = res.json::<DocumentInfoResponse>().await?;
        tracing::debug!(body = ?info, "document metadata response");

        return Ok(DocumentMetadata::from_parts(
            &info.document_id,
            info.display_name,
            info.extracted_title,
            info.filename,
        ));
    }

    #[allow(clippy::implicit_return)]
    async fn rename(&self, id: &str, new_name: &str) -> Result<()> {
        let req = RenameRequest {
            document_id: id.to_string(),
            new_display_name: new_name.to_string(),
        };

        let res = reqwest::Client::new()
            .put(format!("{url}/documents/{id}/rename", url = self.url))
            .timeout(Duration::from_millis(self.timeout.parse::<u64>()?))
            .json(&req)
            .send()
            .await?;

        if !res.status().is_success() {
            tracing::error!(
                status = res.status().as_u16(),
                document_id = %id,
                "failed to rename document"
            );
            bail!("Failed to rename document");
        }

        return Ok(());
    }
}
