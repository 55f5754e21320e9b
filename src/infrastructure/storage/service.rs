//! Image storage trait and error types.

use async_trait::async_trait;
use serde_json::json;

use crate::error::AppError;

/// Image file extensions accepted for post attachments.
pub const ALLOWED_IMAGE_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid stored file name: {0}")]
    InvalidName(String),
}

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        tracing::error!(error = %err, "Image storage failure");
        AppError::internal("Failed to store image", json!({}))
    }
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Returns the lower-cased extension of `file_name` if it is an accepted image type.
pub fn image_extension(file_name: &str) -> Option<String> {
    let (_, ext) = file_name.rsplit_once('.')?;
    let ext = ext.to_ascii_lowercase();
    ALLOWED_IMAGE_EXTENSIONS
        .contains(&ext.as_str())
        .then_some(ext)
}

/// Storage backend for uploaded post images.
///
/// Stored files are addressed by the generated name returned from [`ImageStorage::save`],
/// which is what posts keep as their image link.
///
/// # Implementations
///
/// - [`crate::infrastructure::storage::FileImageStorage`] - Local directory served under `/img`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ImageStorage: Send + Sync {
    /// Persists `bytes` under a fresh unique name ending in `.{extension}`.
    async fn save(&self, extension: &str, bytes: Vec<u8>) -> StorageResult<String>;

    /// Removes a stored file. Removing a missing file succeeds.
    async fn delete(&self, name: &str) -> StorageResult<()>;

    /// Checks that the backend is writable.
    async fn health_check(&self) -> bool;
}
