//! Configuration module
//!
//! Environment-driven configuration for the ingestion pipeline and its
//! storage collaborator.

use std::env;

use crate::policy::{EncodePolicy, TargetFormat};
use crate::storage_types::StorageBackend;

// Defaults
const MAX_DIMENSION: u32 = 1080;
const MAX_UPLOAD_SIZE_MB: usize = 25;
const DEFAULT_BUCKET: &str = "uploads";

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    pub storage_backend: StorageBackend,
    // Remote storage (hosted service)
    pub storage_url: Option<String>,
    pub storage_bucket: String,
    pub storage_service_key: Option<String>,
    // Local storage
    pub local_storage_path: Option<String>,
    pub local_storage_base_url: Option<String>,
    // Ingest policy
    pub max_width: u32,
    pub max_height: u32,
    pub encode_policy: EncodePolicy,
    pub max_upload_size_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let storage_backend = env::var("STORAGE_BACKEND")
            .unwrap_or_else(|_| StorageBackend::Remote.to_string())
            .parse::<StorageBackend>()?;

        let target_format = env::var("UPLOAD_TARGET_FORMAT")
            .unwrap_or_else(|_| TargetFormat::Jpeg.to_string())
            .parse::<TargetFormat>()?;

        let quality = env::var("UPLOAD_QUALITY")
            .unwrap_or_else(|_| EncodePolicy::DEFAULT_JPEG_QUALITY.to_string())
            .parse::<u8>()
            .map_err(|_| anyhow::anyhow!("UPLOAD_QUALITY must be a number between 1 and 100"))?;
        if !(1..=100).contains(&quality) {
            return Err(anyhow::anyhow!(
                "UPLOAD_QUALITY must be between 1 and 100, got {}",
                quality
            ));
        }

        let max_width = env::var("MAX_IMAGE_WIDTH")
            .unwrap_or_else(|_| MAX_DIMENSION.to_string())
            .parse()
            .unwrap_or(MAX_DIMENSION);
        let max_height = env::var("MAX_IMAGE_HEIGHT")
            .unwrap_or_else(|_| MAX_DIMENSION.to_string())
            .parse()
            .unwrap_or(MAX_DIMENSION);

        let max_upload_size_mb = env::var("MAX_UPLOAD_SIZE_MB")
            .unwrap_or_else(|_| MAX_UPLOAD_SIZE_MB.to_string())
            .parse::<usize>()
            .unwrap_or(MAX_UPLOAD_SIZE_MB);

        Ok(Config {
            storage_backend,
            storage_url: env::var("STORAGE_URL").ok(),
            storage_bucket: env::var("STORAGE_BUCKET")
                .unwrap_or_else(|_| DEFAULT_BUCKET.to_string()),
            storage_service_key: env::var("STORAGE_SERVICE_KEY").ok(),
            local_storage_path: env::var("LOCAL_STORAGE_PATH").ok(),
            local_storage_base_url: env::var("LOCAL_STORAGE_BASE_URL").ok(),
            max_width,
            max_height,
            encode_policy: EncodePolicy::new(target_format, quality),
            max_upload_size_bytes: max_upload_size_mb * 1024 * 1024,
        })
    }

    /// Check that the selected backend has the settings it needs.
    pub fn validate(&self) -> Result<(), anyhow::Error> {
        match self.storage_backend {
            StorageBackend::Remote => {
                if self.storage_url.is_none() {
                    return Err(anyhow::anyhow!(
                        "STORAGE_URL must be set for the remote backend"
                    ));
                }
                if self.storage_service_key.is_none() {
                    return Err(anyhow::anyhow!(
                        "STORAGE_SERVICE_KEY must be set for the remote backend"
                    ));
                }
            }
            StorageBackend::Local => {
                if self.local_storage_path.is_none() || self.local_storage_base_url.is_none() {
                    return Err(anyhow::anyhow!(
                        "LOCAL_STORAGE_PATH and LOCAL_STORAGE_BASE_URL must be set for the local backend"
                    ));
                }
            }
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            storage_backend: StorageBackend::Remote,
            storage_url: None,
            storage_bucket: DEFAULT_BUCKET.to_string(),
            storage_service_key: None,
            local_storage_path: None,
            local_storage_base_url: None,
            max_width: MAX_DIMENSION,
            max_height: MAX_DIMENSION,
            encode_policy: EncodePolicy::default(),
            max_upload_size_bytes: MAX_UPLOAD_SIZE_MB * 1024 * 1024,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.storage_backend, StorageBackend::Remote);
        assert_eq!(config.storage_bucket, "uploads");
        assert_eq!(config.max_width, 1080);
        assert_eq!(config.max_height, 1080);
        assert_eq!(config.encode_policy, EncodePolicy::default());
    }

    #[test]
    fn test_validate_remote_requires_url_and_key() {
        let config = Config::default();
        assert!(config.validate().is_err());

        let config = Config {
            storage_url: Some("https://abc.supabase.co".to_string()),
            storage_service_key: Some("service-key".to_string()),
            ..Config::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_local_requires_path_and_base_url() {
        let config = Config {
            storage_backend: StorageBackend::Local,
            ..Config::default()
        };
        assert!(config.validate().is_err());

        let config = Config {
            storage_backend: StorageBackend::Local,
            local_storage_path: Some("/var/lib/medialift/media".to_string()),
            local_storage_base_url: Some("http://localhost:3000/media".to_string()),
            ..Config::default()
        };
        assert!(config.validate().is_ok());
    }
}
