use crate::traits::{validate_key, ObjectStore, StorageError, StorageResult, StoredObject};
use crate::StorageBackend;
use async_trait::async_trait;
use bytes::Bytes;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Local filesystem storage implementation
#[derive(Clone)]
pub struct LocalObjectStore {
    base_path: PathBuf,
    base_url: String,
}

impl LocalObjectStore {
    /// Create a new LocalObjectStore instance
    ///
    /// # Arguments
    /// * `base_path` - Root directory for object storage (e.g., "/var/lib/medialift/media")
    /// * `base_url` - Base URL for serving objects (e.g., "http://localhost:3000/media")
    pub async fn new(base_path: impl Into<PathBuf>, base_url: String) -> StorageResult<Self> {
        let base_path = base_path.into();

        fs::create_dir_all(&base_path).await.map_err(|e| {
            StorageError::ConfigError(format!(
                "Failed to create storage directory {}: {}",
                base_path.display(),
                e
            ))
        })?;

        Ok(LocalObjectStore {
            base_path,
            base_url,
        })
    }

    /// Convert an object key to a filesystem path.
    ///
    /// Keys with path traversal sequences are rejected so no key can escape
    /// the base storage directory.
    fn key_to_path(&self, key: &str) -> StorageResult<PathBuf> {
        validate_key(key)?;
        Ok(self.base_path.join(key))
    }

    fn generate_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    async fn ensure_parent_dir(&self, path: &Path) -> StorageResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl ObjectStore for LocalObjectStore {
    async fn upload(
        &self,
        key: &str,
        data: Bytes,
        _content_type: &str,
        overwrite: bool,
    ) -> StorageResult<StoredObject> {
        let path = self.key_to_path(key)?;
        let size = data.len();

        self.ensure_parent_dir(&path).await?;

        let start = std::time::Instant::now();

        let mut file = if overwrite {
            fs::File::create(&path).await.map_err(|e| {
                StorageError::UploadFailed(format!(
                    "Failed to create file {}: {}",
                    path.display(),
                    e
                ))
            })?
        } else {
            fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&path)
                .await
                .map_err(|e| {
                    if e.kind() == std::io::ErrorKind::AlreadyExists {
                        StorageError::AlreadyExists(key.to_string())
                    } else {
                        StorageError::UploadFailed(format!(
                            "Failed to create file {}: {}",
                            path.display(),
                            e
                        ))
                    }
                })?
        };

        file.write_all(&data).await.map_err(|e| {
            StorageError::UploadFailed(format!("Failed to write file {}: {}", path.display(), e))
        })?;

        file.sync_all().await.map_err(|e| {
            StorageError::UploadFailed(format!("Failed to sync file {}: {}", path.display(), e))
        })?;

        tracing::info!(
            path = %path.display(),
            key = %key,
            size_bytes = size,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Local storage upload successful"
        );

        Ok(StoredObject {
            path: key.to_string(),
        })
    }

    fn public_url(&self, path: &str) -> String {
        self.generate_url(path)
    }

    async fn exists(&self, key: &str) -> StorageResult<bool> {
        let path = self.key_to_path(key)?;
        Ok(fs::try_exists(&path).await.unwrap_or(false))
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::Local
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    async fn test_store(dir: &tempfile::TempDir) -> LocalObjectStore {
        LocalObjectStore::new(dir.path(), "http://localhost:3000/media".to_string())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_upload_and_exists() {
        let dir = tempdir().unwrap();
        let store = test_store(&dir).await;

        let stored = store
            .upload(
                "1700000000000-abc123def45.jpg",
                Bytes::from_static(b"jpeg bytes"),
                "image/jpeg",
                false,
            )
            .await
            .unwrap();

        assert_eq!(stored.path, "1700000000000-abc123def45.jpg");
        assert!(store.exists(&stored.path).await.unwrap());
        assert!(!store.exists("other.jpg").await.unwrap());
    }

    #[tokio::test]
    async fn test_non_overwriting_upload_conflicts() {
        let dir = tempdir().unwrap();
        let store = test_store(&dir).await;

        let key = "1700000000000-abc123def45.jpg";
        store
            .upload(key, Bytes::from_static(b"first"), "image/jpeg", false)
            .await
            .unwrap();

        let result = store
            .upload(key, Bytes::from_static(b"second"), "image/jpeg", false)
            .await;
        assert!(matches!(result, Err(StorageError::AlreadyExists(_))));

        // The original bytes are untouched.
        let on_disk = fs::read(dir.path().join(key)).await.unwrap();
        assert_eq!(on_disk, b"first");
    }

    #[tokio::test]
    async fn test_overwrite_replaces_when_requested() {
        let dir = tempdir().unwrap();
        let store = test_store(&dir).await;

        let key = "1700000000000-abc123def45.jpg";
        store
            .upload(key, Bytes::from_static(b"first"), "image/jpeg", true)
            .await
            .unwrap();
        store
            .upload(key, Bytes::from_static(b"second"), "image/jpeg", true)
            .await
            .unwrap();

        let on_disk = fs::read(dir.path().join(key)).await.unwrap();
        assert_eq!(on_disk, b"second");
    }

    #[tokio::test]
    async fn test_path_traversal_rejected() {
        let dir = tempdir().unwrap();
        let store = test_store(&dir).await;

        let result = store
            .upload(
                "../escape.jpg",
                Bytes::from_static(b"x"),
                "image/jpeg",
                false,
            )
            .await;
        assert!(matches!(result, Err(StorageError::InvalidKey(_))));

        let result = store.exists("/etc/passwd").await;
        assert!(matches!(result, Err(StorageError::InvalidKey(_))));
    }

    #[tokio::test]
    async fn test_public_url_joins_base_url() {
        let dir = tempdir().unwrap();
        let store = LocalObjectStore::new(dir.path(), "http://localhost:3000/media/".to_string())
            .await
            .unwrap();

        assert_eq!(
            store.public_url("1700000000000-abc123def45.jpg"),
            "http://localhost:3000/media/1700000000000-abc123def45.jpg"
        );
    }
}
