//! Hosted object-store backend.
//!
//! Talks to a managed storage service (Supabase-style) over its REST API:
//! authenticated `POST /storage/v1/object/{bucket}/{key}` uploads, and
//! unauthenticated public URLs under `/storage/v1/object/public/{bucket}`.
//!
//! No request timeout is configured here: timeouts are delegated to the
//! underlying client's defaults.

use crate::traits::{validate_key, ObjectStore, StorageError, StorageResult, StoredObject};
use crate::StorageBackend;
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::StatusCode;

/// Remote storage service client
#[derive(Clone)]
pub struct HttpObjectStore {
    client: reqwest::Client,
    base_url: String,
    bucket: String,
    service_key: String,
}

/// Upload acknowledgment from the storage service.
///
/// Newer servers return `path`; older ones only `Key` as `{bucket}/{path}`.
/// Anything else is a malformed response.
#[derive(Debug, serde::Deserialize)]
struct UploadAck {
    #[serde(default)]
    path: Option<String>,
    #[serde(rename = "Key", default)]
    key: Option<String>,
}

impl UploadAck {
    fn into_path(self, bucket: &str) -> StorageResult<String> {
        if let Some(path) = self.path {
            return Ok(path);
        }
        if let Some(key) = self.key {
            let prefix = format!("{}/", bucket);
            return Ok(key
                .strip_prefix(&prefix)
                .map(str::to_string)
                .unwrap_or(key));
        }
        Err(StorageError::InvalidResponse(
            "upload response carries neither 'path' nor 'Key'".to_string(),
        ))
    }
}

impl HttpObjectStore {
    /// Create a new HttpObjectStore instance
    ///
    /// # Arguments
    /// * `base_url` - Service root (e.g., "https://abc.supabase.co")
    /// * `bucket` - Target bucket name
    /// * `service_key` - Bearer token for authenticated calls
    pub fn new(base_url: String, bucket: String, service_key: String) -> StorageResult<Self> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| StorageError::ConfigError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(HttpObjectStore {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            bucket,
            service_key,
        })
    }

    fn object_url(&self, key: &str) -> String {
        format!(
            "{}/storage/v1/object/{}/{}",
            self.base_url,
            self.bucket,
            urlencoding::encode(key)
        )
    }
}

#[async_trait]
impl ObjectStore for HttpObjectStore {
    async fn upload(
        &self,
        key: &str,
        data: Bytes,
        content_type: &str,
        overwrite: bool,
    ) -> StorageResult<StoredObject> {
        validate_key(key)?;

        let url = self.object_url(key);
        let size = data.len();
        let start = std::time::Instant::now();

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.service_key))
            .header("Content-Type", content_type)
            .header("x-upsert", overwrite.to_string())
            .body(data)
            .send()
            .await
            .map_err(|e| StorageError::UploadFailed(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::CONFLICT {
            return Err(StorageError::AlreadyExists(key.to_string()));
        }
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::error!(
                bucket = %self.bucket,
                key = %key,
                status = %status,
                size_bytes = size,
                duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                "Remote storage upload failed"
            );
            return Err(StorageError::UploadFailed(format!(
                "Upload rejected with status {}: {}",
                status, body
            )));
        }

        let ack: UploadAck = response
            .json()
            .await
            .map_err(|e| StorageError::InvalidResponse(e.to_string()))?;
        let path = ack.into_path(&self.bucket)?;

        tracing::info!(
            bucket = %self.bucket,
            key = %key,
            path = %path,
            size_bytes = size,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Remote storage upload successful"
        );

        Ok(StoredObject { path })
    }

    fn public_url(&self, path: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.base_url, self.bucket, path
        )
    }

    async fn exists(&self, key: &str) -> StorageResult<bool> {
        validate_key(key)?;

        let response = self
            .client
            .head(self.object_url(key))
            .header("Authorization", format!("Bearer {}", self.service_key))
            .send()
            .await
            .map_err(|e| StorageError::BackendError(e.to_string()))?;

        match response.status() {
            status if status.is_success() => Ok(true),
            StatusCode::NOT_FOUND => Ok(false),
            status => Err(StorageError::BackendError(format!(
                "Existence check failed with status {}",
                status
            ))),
        }
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::Remote
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_store() -> HttpObjectStore {
        HttpObjectStore::new(
            "https://abc.supabase.co/".to_string(),
            "uploads".to_string(),
            "service-key".to_string(),
        )
        .unwrap()
    }

    #[test]
    fn test_public_url_format() {
        let store = test_store();
        assert_eq!(
            store.public_url("1700000000000-abc123def45.jpg"),
            "https://abc.supabase.co/storage/v1/object/public/uploads/1700000000000-abc123def45.jpg"
        );
    }

    #[test]
    fn test_object_url_strips_trailing_slash() {
        let store = test_store();
        assert_eq!(
            store.object_url("a.jpg"),
            "https://abc.supabase.co/storage/v1/object/uploads/a.jpg"
        );
    }

    #[test]
    fn test_upload_ack_prefers_path() {
        let ack: UploadAck =
            serde_json::from_str(r#"{"path": "a.jpg", "Key": "uploads/a.jpg"}"#).unwrap();
        assert_eq!(ack.into_path("uploads").unwrap(), "a.jpg");
    }

    #[test]
    fn test_upload_ack_derives_path_from_key() {
        let ack: UploadAck = serde_json::from_str(r#"{"Key": "uploads/a.jpg"}"#).unwrap();
        assert_eq!(ack.into_path("uploads").unwrap(), "a.jpg");
    }

    #[test]
    fn test_upload_ack_missing_fields_is_invalid_response() {
        let ack: UploadAck = serde_json::from_str(r#"{"Id": "x"}"#).unwrap();
        assert!(matches!(
            ack.into_path("uploads"),
            Err(StorageError::InvalidResponse(_))
        ));
    }
}
