//! Medialift Core Library
//!
//! This crate provides the domain types shared across all Medialift
//! components: configuration, the encode policy, the ingest error taxonomy,
//! the upload state machine, and the caller-facing notification types.

pub mod config;
pub mod error;
pub mod field;
pub mod notify;
pub mod policy;
pub mod storage_types;

// Re-export commonly used types
pub use config::Config;
pub use error::IngestError;
pub use field::{ImageField, UploadState};
pub use notify::{Notification, NotificationVariant, Notifier, NullNotifier};
pub use policy::{EncodePolicy, TargetFormat};
pub use storage_types::StorageBackend;
