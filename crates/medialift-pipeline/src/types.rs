//! Types for the ingestion pipeline.

use bytes::Bytes;

/// A user-selected file as received from the caller.
///
/// Transient: owned by exactly one ingest invocation and dropped when it
/// completes.
#[derive(Clone, Debug)]
pub struct SourceImage {
    pub filename: String,
    /// Declared media type (e.g. from the file input), not sniffed content.
    pub content_type: String,
    pub data: Bytes,
}

impl SourceImage {
    pub fn new(
        filename: impl Into<String>,
        content_type: impl Into<String>,
        data: impl Into<Bytes>,
    ) -> Self {
        Self {
            filename: filename.into(),
            content_type: content_type.into(),
            data: data.into(),
        }
    }
}

/// The resized, re-encoded artifact produced by the normalize step.
///
/// Consumed by the upload step; never persisted locally.
#[derive(Clone, Debug)]
pub struct NormalizedImage {
    pub data: Bytes,
    pub width: u32,
    pub height: u32,
    pub content_type: &'static str,
}
