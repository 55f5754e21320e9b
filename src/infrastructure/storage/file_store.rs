//! Local filesystem image storage.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

use super::service::{ImageStorage, StorageError, StorageResult};

/// Stores images as flat files inside a single upload directory.
pub struct FileImageStorage {
    root: PathBuf,
}

impl FileImageStorage {
    /// Creates the storage, creating the upload directory if needed.
    pub async fn new(root: impl Into<PathBuf>) -> StorageResult<Self> {
        let root = root.into();
        tokio::fs::create_dir_all(&root).await?;
        debug!(path = %root.display(), "Image storage ready");
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, name: &str) -> StorageResult<PathBuf> {
        let valid = !name.is_empty()
            && name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.')
            && !name.starts_with('.');

        if !valid {
            return Err(StorageError::InvalidName(name.to_string()));
        }

        Ok(self.root.join(name))
    }
}

#[async_trait]
impl ImageStorage for FileImageStorage {
    async fn save(&self, extension: &str, bytes: Vec<u8>) -> StorageResult<String> {
        let name = format!("{}.{}", Uuid::new_v4(), extension);
        let path = self.path_for(&name)?;

        tokio::fs::write(&path, bytes).await?;
        debug!(file = %name, "Stored image");

        Ok(name)
    }

    async fn delete(&self, name: &str) -> StorageResult<()> {
        let path = self.path_for(name)?;

        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    async fn health_check(&self) -> bool {
        tokio::fs::metadata(&self.root)
            .await
            .map(|m| m.is_dir())
            .unwrap_or(false)
    }
}
