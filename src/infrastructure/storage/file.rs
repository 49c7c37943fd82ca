#[cfg(test)]
#[path = "file_test.rs"]
mod tests;

use std::path;

use anyhow::Result;
use async_trait::async_trait;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Storage;
use crate::domain::models::StorageName;

/// One `{key}.json` file per storage key under the configured directory.
pub struct FileStorage {
    pub storage_dir: path::PathBuf,
}

impl Default for FileStorage {
    fn default() -> FileStorage {
        let storage_dir = path::PathBuf::from(Config::get(ConfigKey::StorageDir));
        return FileStorage::new(storage_dir);
    }
}

impl FileStorage {
    pub fn new(storage_dir: path::PathBuf) -> FileStorage {
        return FileStorage { storage_dir };
    }

    fn get_file_path(&self, key: &str) -> path::PathBuf {
        return self.storage_dir.join(format!("{key}.json"));
    }
}

#[async_trait]
impl Storage for FileStorage {
    fn name(&self) -> StorageName {
        return StorageName::File;
    }

    #[allow(clippy::implicit_return)]
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let file_path = self.get_file_path(key);
        if !file_path.exists() {
            return Ok(None);
        }

        let payload = fs::read_to_string(file_path).await?;
        return Ok(Some(payload));
    }

    #[allow(clippy::implicit_return)]
    async fn set(&self, key: &str, value: &str) -> Result<()> {
        if !self.storage_dir.exists() {
            fs::create_dir_all(&self.storage_dir).await?;
        }

        let mut file = fs::File::create(self.get_file_path(key)).await?;
        file.write_all(value.as_bytes()).await?;

        return Ok(());
    }

    #[allow(clippy::implicit_return)]
    async fn remove(&self, key: &str) -> Result<()> {
        let file_path = self.get_file_path(key);
        if !file_path.exists() {
            return Ok(());
        }

        fs::remove_file(file_path).await?;
        return Ok(());
    }
}
