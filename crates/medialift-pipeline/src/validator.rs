//! Pre-decode validation.
//!
//! Cheap checks that run before any decode work: declared media type,
//! payload presence, and an optional size bound. Validation never inspects
//! the bytes, so a rejected file costs no decode.

use crate::types::SourceImage;
use medialift_core::IngestError;

/// Validation errors for uploaded files
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Not an image: {content_type}")]
    NotAnImage { content_type: String },

    #[error("Empty file")]
    EmptyFile,

    #[error("File too large: {size} bytes (max: {max} bytes)")]
    FileTooLarge { size: usize, max: usize },
}

impl From<ValidationError> for IngestError {
    fn from(err: ValidationError) -> Self {
        IngestError::InvalidInputType(err.to_string())
    }
}

/// Image upload validator
#[derive(Debug, Clone, Default)]
pub struct ImageValidator {
    max_size_bytes: Option<usize>,
}

impl ImageValidator {
    pub fn new(max_size_bytes: Option<usize>) -> Self {
        Self { max_size_bytes }
    }

    pub fn validate(&self, source: &SourceImage) -> Result<(), ValidationError> {
        let declared = source.content_type.trim().to_lowercase();
        if !declared.starts_with("image/") {
            return Err(ValidationError::NotAnImage {
                content_type: source.content_type.clone(),
            });
        }

        if source.data.is_empty() {
            return Err(ValidationError::EmptyFile);
        }

        if let Some(max) = self.max_size_bytes {
            if source.data.len() > max {
                return Err(ValidationError::FileTooLarge {
                    size: source.data.len(),
                    max,
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(content_type: &str, data: &'static [u8]) -> SourceImage {
        SourceImage::new("photo.jpg", content_type, data)
    }

    #[test]
    fn test_accepts_image_types() {
        let validator = ImageValidator::default();
        assert!(validator.validate(&source("image/jpeg", b"data")).is_ok());
        assert!(validator.validate(&source("image/png", b"data")).is_ok());
        assert!(validator.validate(&source("IMAGE/WEBP", b"data")).is_ok());
    }

    #[test]
    fn test_rejects_non_image_types() {
        let validator = ImageValidator::default();
        let result = validator.validate(&source("text/plain", b"hello"));
        assert!(matches!(result, Err(ValidationError::NotAnImage { .. })));

        let result = validator.validate(&source("application/pdf", b"%PDF"));
        assert!(matches!(result, Err(ValidationError::NotAnImage { .. })));
    }

    #[test]
    fn test_rejects_empty_payload() {
        let validator = ImageValidator::default();
        assert!(matches!(
            validator.validate(&source("image/jpeg", b"")),
            Err(ValidationError::EmptyFile)
        ));
    }

    #[test]
    fn test_size_bound() {
        let validator = ImageValidator::new(Some(3));
        assert!(validator.validate(&source("image/jpeg", b"abc")).is_ok());
        assert!(matches!(
            validator.validate(&source("image/jpeg", b"abcd")),
            Err(ValidationError::FileTooLarge { size: 4, max: 3 })
        ));
    }

    #[test]
    fn test_maps_to_invalid_input_type() {
        let validator = ImageValidator::default();
        let err: IngestError = validator
            .validate(&source("text/plain", b"hello"))
            .unwrap_err()
            .into();
        assert!(matches!(err, IngestError::InvalidInputType(_)));
        assert!(err.to_string().contains("text/plain"));
    }
}
