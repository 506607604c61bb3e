//! Medialift Pipeline Library
//!
//! The image ingestion pipeline: validate → decode → bounded resize →
//! re-encode → upload → public URL resolution. [`Ingestor`] is the entry
//! point; one call handles one file, and the caller's form state is driven
//! through [`Ingestor::ingest_into`].

pub mod image;
pub mod pipeline;
pub mod types;
pub mod validator;

// Re-export commonly used types
pub use image::resize::{bounded_dimensions, shrink_to_bounds, ResizeBounds};
pub use medialift_core::IngestError;
pub use pipeline::Ingestor;
pub use types::{NormalizedImage, SourceImage};
pub use validator::{ImageValidator, ValidationError};
