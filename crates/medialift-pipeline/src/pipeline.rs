//! Ingestion pipeline: validate → decode → resize → encode → upload → resolve.
//!
//! One ingest handles one file, start to finish. Ordering is strict: the
//! public URL is resolved only after the upload acknowledgment, which comes
//! only after the normalize step completes. There is no retry, no
//! cancellation, and no pipeline-owned timeout.

use std::sync::Arc;
use std::time::Instant;

use medialift_core::{
    Config, EncodePolicy, ImageField, IngestError, Notification, Notifier, UploadState,
};
use medialift_storage::{keys, ObjectStore};

use crate::image::codec;
use crate::image::resize::{shrink_to_bounds, ResizeBounds};
use crate::types::{NormalizedImage, SourceImage};
use crate::validator::ImageValidator;

/// One ingestion pipeline instance.
///
/// Stateless between calls. Concurrent `Ingestor`s share nothing but the
/// store's namespace; collision discipline there is the probabilistic key
/// scheme plus non-overwriting uploads.
pub struct Ingestor {
    store: Arc<dyn ObjectStore>,
    notifier: Arc<dyn Notifier>,
    validator: ImageValidator,
    bounds: ResizeBounds,
    policy: EncodePolicy,
}

impl Ingestor {
    pub fn new(store: Arc<dyn ObjectStore>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            store,
            notifier,
            validator: ImageValidator::default(),
            bounds: ResizeBounds::default(),
            policy: EncodePolicy::default(),
        }
    }

    /// Build an ingestor with bounds, policy and size limit from configuration.
    pub fn from_config(
        store: Arc<dyn ObjectStore>,
        notifier: Arc<dyn Notifier>,
        config: &Config,
    ) -> Self {
        Self {
            store,
            notifier,
            validator: ImageValidator::new(Some(config.max_upload_size_bytes)),
            bounds: ResizeBounds::new(config.max_width, config.max_height),
            policy: config.encode_policy,
        }
    }

    pub fn with_bounds(mut self, bounds: ResizeBounds) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn with_policy(mut self, policy: EncodePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_validator(mut self, validator: ImageValidator) -> Self {
        self.validator = validator;
        self
    }

    /// Run the pipeline for one file and return its public URL.
    ///
    /// Fails fast on a non-image declared type before any decode work. On
    /// any failure no partial state is exposed: there is no URL and no
    /// reference to an unresolvable key.
    pub async fn ingest(&self, source: SourceImage) -> Result<String, IngestError> {
        self.validator.validate(&source)?;

        let filename = source.filename.clone();
        let normalized = self.normalize(source).await?;

        let key = keys::generate_object_key(&filename);
        let size = normalized.data.len();
        let start = Instant::now();

        let stored = self
            .store
            .upload(&key, normalized.data, normalized.content_type, false)
            .await?;
        // Resolution is pure URL construction; it must come after the
        // upload acknowledgment so a returned URL always maps to a stored
        // object.
        let url = self.store.public_url(&stored.path);

        tracing::info!(
            key = %key,
            path = %stored.path,
            width = normalized.width,
            height = normalized.height,
            size_bytes = size,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Image ingested"
        );

        Ok(url)
    }

    /// Drive a caller's form field through one ingest.
    ///
    /// The field is `InFlight` for the duration and leaves that state on
    /// every exit path. The URL is written only on success; on failure the
    /// previous value is untouched and the notifier receives a destructive
    /// notification carrying the error's message.
    ///
    /// Callers should not start another ingest for the same field while
    /// `field.state.is_busy()`.
    pub async fn ingest_into(
        &self,
        field: &mut ImageField,
        source: SourceImage,
    ) -> Result<(), IngestError> {
        field.state = UploadState::InFlight;

        match self.ingest(source).await {
            Ok(url) => {
                field.url = url;
                field.state = UploadState::Succeeded;
                self.notifier
                    .notify(Notification::success("Image uploaded successfully"));
                Ok(())
            }
            Err(err) => {
                field.state = UploadState::Failed;
                tracing::error!(error = %err, "Image ingest failed");
                self.notifier.notify(Notification::destructive(err.to_string()));
                Err(err)
            }
        }
    }

    /// Remove the image reference from a field.
    ///
    /// Local state only: the stored object is intentionally not deleted.
    pub fn clear(&self, field: &mut ImageField) {
        field.clear();
    }

    /// Decode, resize and re-encode off the async pool.
    ///
    /// CPU-bound; runs under `spawn_blocking` so it doesn't stall other
    /// tasks. One file per invocation, no parallel decode.
    async fn normalize(&self, source: SourceImage) -> Result<NormalizedImage, IngestError> {
        let bounds = self.bounds;
        let policy = self.policy;

        tokio::task::spawn_blocking(move || {
            let img = codec::decode(&source.data)?;
            let resized = shrink_to_bounds(&img, bounds);
            let data = codec::encode(&resized, &policy)?;
            Ok(NormalizedImage {
                width: resized.width(),
                height: resized.height(),
                data,
                content_type: policy.format.content_type(),
            })
        })
        .await
        .map_err(|e| IngestError::Internal(format!("image task failed: {}", e)))?
    }
}
