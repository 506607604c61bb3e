#[cfg(feature = "storage-remote")]
use crate::HttpObjectStore;
#[cfg(feature = "storage-local")]
use crate::LocalObjectStore;
use crate::{ObjectStore, StorageBackend, StorageError, StorageResult};
use medialift_core::Config;
use std::sync::Arc;

/// Create an object store based on configuration
pub async fn create_store(config: &Config) -> StorageResult<Arc<dyn ObjectStore>> {
    match config.storage_backend {
        #[cfg(feature = "storage-remote")]
        StorageBackend::Remote => {
            let base_url = config.storage_url.clone().ok_or_else(|| {
                StorageError::ConfigError("STORAGE_URL not configured".to_string())
            })?;
            let service_key = config.storage_service_key.clone().ok_or_else(|| {
                StorageError::ConfigError("STORAGE_SERVICE_KEY not configured".to_string())
            })?;

            let store = HttpObjectStore::new(base_url, config.storage_bucket.clone(), service_key)?;
            Ok(Arc::new(store))
        }

        #[cfg(not(feature = "storage-remote"))]
        StorageBackend::Remote => Err(StorageError::ConfigError(
            "Remote storage backend not available (storage-remote feature not enabled)".to_string(),
        )),

        #[cfg(feature = "storage-local")]
        StorageBackend::Local => {
            let base_path = config.local_storage_path.clone().ok_or_else(|| {
                StorageError::ConfigError("LOCAL_STORAGE_PATH not configured".to_string())
            })?;
            let base_url = config.local_storage_base_url.clone().ok_or_else(|| {
                StorageError::ConfigError("LOCAL_STORAGE_BASE_URL not configured".to_string())
            })?;

            let store = LocalObjectStore::new(base_path, base_url).await?;
            Ok(Arc::new(store))
        }

        #[cfg(not(feature = "storage-local"))]
        StorageBackend::Local => Err(StorageError::ConfigError(
            "Local storage backend not available (storage-local feature not enabled)".to_string(),
        )),
    }
}
