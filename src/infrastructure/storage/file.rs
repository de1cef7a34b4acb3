#[cfg(test)]
#[path = "file_test.rs"]
mod tests;

use std::collections::BTreeMap;
use std::path;

use anyhow::Result;
use async_trait::async_trait;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Storage;
use crate::domain::models::StorageName;

type Items = BTreeMap<String, String>;

/// Local storage kept as a flat YAML map on disk. Every call reads or rewrites
/// the whole file; there is no locking between processes.
pub struct FileStorage {
    pub file_path: path::PathBuf,
}

impl Default for FileStorage {
    fn default() -> FileStorage {
        return FileStorage::new(path::PathBuf::from(Config::get(ConfigKey::StorageFile)));
    }
}

impl FileStorage {
    pub fn new(file_path: path::PathBuf) -> FileStorage {
        return FileStorage { file_path };
    }

    async fn read(&self) -> Result<Items> {
        if !self.file_path.exists() {
            return Ok(Items::new());
        }

        let payload = fs::read_to_string(&self.file_path).await?;
        if payload.trim().is_empty() {
            return Ok(Items::new());
        }

        let items: Items = serde_yaml::from_str(&payload)?;
        return Ok(items);
    }

    async fn write(&self, items: &Items) -> Result<()> {
        if let Some(parent) = self.file_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).await?;
            }
        }

        let payload = serde_yaml::to_string(items)?;
        let mut file = fs::File::create(&self.file_path).await?;
        file.write_all(payload.as_bytes()).await?;
        file.flush().await?;

        return Ok(());
    }
}

#[async_trait]
impl Storage for FileStorage {
    fn name(&self) -> StorageName {
        return StorageName::File;
    }

    #[allow(clippy::implicit_return)]
    async fn get_item(&self, key: &str) -> Result<Option<String>> {
        let items = self.read().await?;
        return Ok(items.get(key).cloned());
    }

    #[allow(clippy::implicit_return)]
    async fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let mut items = self.read().await?;
        items.insert(key.to_string(), value.to_string());
        tracing::debug!(key, path = ?self.file_path, "Saved local storage item");

        return self.write(&items).await;
    }

    #[allow(clippy::implicit_return)]
    async fn remove_item(&self, key: &str) -> Result<()> {
        let mut items = self.read().await?;
        if items.remove(key).is_none() {
            return Ok(());
        }
        tracing::debug!(key, path = ?self.file_path, "Removed local storage item");

        return self.write(&items).await;
    }
}
