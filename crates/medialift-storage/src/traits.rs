//! Storage abstraction trait
//!
//! This module defines the ObjectStore trait that all storage backends must
//! implement, and the error taxonomy for storage operations.

use async_trait::async_trait;
use bytes::Bytes;
use medialift_core::{IngestError, StorageBackend};
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Object already exists: {0}")]
    AlreadyExists(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Malformed storage response: {0}")]
    InvalidResponse(String),

    #[error("Storage backend error: {0}")]
    BackendError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

impl From<StorageError> for IngestError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::InvalidResponse(msg) => IngestError::InvalidResponse(msg),
            other => IngestError::Storage(other.to_string()),
        }
    }
}

/// Acknowledgment returned by a successful upload.
///
/// `path` is the store's canonical path for the object; it is what
/// [`ObjectStore::public_url`] resolves. No other field of the backend
/// response is exposed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    pub path: String,
}

/// Object store abstraction
///
/// All backends (hosted REST service, local filesystem) must implement this
/// trait. The pipeline never deletes objects: removing an image only clears
/// the caller's local reference, so this trait has no delete operation.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Upload `data` under `key` with the given content type.
    ///
    /// With `overwrite == false`, an existing object at `key` fails the
    /// call with [`StorageError::AlreadyExists`] instead of being replaced.
    async fn upload(
        &self,
        key: &str,
        data: Bytes,
        content_type: &str,
        overwrite: bool,
    ) -> StorageResult<StoredObject>;

    /// Resolve the public URL for a stored path.
    ///
    /// Non-failing by contract: this is pure URL construction and does not
    /// verify that the object exists.
    fn public_url(&self, path: &str) -> String;

    /// Check whether an object exists at `key`.
    async fn exists(&self, key: &str) -> StorageResult<bool>;

    /// Get the storage backend type
    fn backend_type(&self) -> StorageBackend;
}

/// Reject keys that could escape the store's namespace.
pub(crate) fn validate_key(key: &str) -> StorageResult<()> {
    if key.is_empty() || key.contains("..") || key.starts_with('/') {
        return Err(StorageError::InvalidKey(
            "Storage key contains invalid characters".to_string(),
        ));
    }
    Ok(())
}
