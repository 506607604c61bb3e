//! Error types module
//!
//! This module provides the error taxonomy for the ingestion pipeline. All
//! pipeline failures are unified under [`IngestError`]; the storage crate
//! converts its own error type into the `Storage`/`InvalidResponse` variants
//! so callers see a single surface.

/// Failure of one ingest invocation.
///
/// Every variant carries a human-readable message suitable for the
/// caller-facing notification. No variant exposes partial pipeline state.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    /// The input's declared media type is not an image (or the payload
    /// failed another pre-decode check). Raised before any decode work.
    #[error("Invalid input: {0}")]
    InvalidInputType(String),

    /// The binary could not be decoded into a bitmap.
    #[error("Image decode failed: {0}")]
    Decode(String),

    /// Re-encoding the normalized bitmap failed.
    #[error("Image encode failed: {0}")]
    Encode(String),

    /// The storage collaborator reported a failure on upload.
    #[error("Storage error: {0}")]
    Storage(String),

    /// The storage collaborator returned a response that doesn't match its
    /// declared schema.
    #[error("Malformed storage response: {0}")]
    InvalidResponse(String),

    /// Unexpected internal failure (e.g. a panicked worker task).
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IngestError {
    /// Whether the user can fix the failure by choosing a different file.
    pub fn is_user_correctable(&self) -> bool {
        matches!(self, IngestError::InvalidInputType(_) | IngestError::Decode(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_correctable_classification() {
        assert!(IngestError::InvalidInputType("not an image".into()).is_user_correctable());
        assert!(IngestError::Decode("truncated jpeg".into()).is_user_correctable());
        assert!(!IngestError::Storage("quota exceeded".into()).is_user_correctable());
        assert!(!IngestError::Internal("task panicked".into()).is_user_correctable());
    }

    #[test]
    fn test_messages_carry_detail() {
        let err = IngestError::Storage("bucket quota exceeded".into());
        assert!(err.to_string().contains("bucket quota exceeded"));
    }
}
