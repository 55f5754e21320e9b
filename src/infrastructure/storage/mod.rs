//! Storage for uploaded post images.
//!
//! Provides an [`ImageStorage`] trait with a local directory implementation,
//! [`FileImageStorage`].

mod file_store;
mod service;

pub use file_store::FileImageStorage;
pub use service::{
    ALLOWED_IMAGE_EXTENSIONS, ImageStorage, StorageError, StorageResult, image_extension,
};

#[cfg(test)]
pub use service::MockImageStorage;
