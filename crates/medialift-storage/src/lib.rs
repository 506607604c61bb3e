//! Medialift Storage Library
//!
//! This crate provides the object-store abstraction for the ingestion
//! pipeline: the `ObjectStore` trait plus a remote (hosted REST service)
//! backend and a local filesystem backend.
//!
//! # Object key format
//!
//! Keys are flat: `{epoch_millis}-{base36_token}.{ext}`, generated by the
//! `keys` module. Uniqueness is probabilistic; all uploads are
//! non-overwriting so a residual collision fails loudly instead of
//! replacing an object. Keys must not contain `..` or a leading `/`.

pub mod factory;
#[cfg(feature = "storage-remote")]
pub mod http;
pub mod keys;
#[cfg(feature = "storage-local")]
pub mod local;
pub mod traits;

// Re-export commonly used types
pub use factory::create_store;
#[cfg(feature = "storage-remote")]
pub use http::HttpObjectStore;
pub use keys::generate_object_key;
#[cfg(feature = "storage-local")]
pub use local::LocalObjectStore;
pub use medialift_core::StorageBackend;
pub use traits::{ObjectStore, StorageError, StorageResult, StoredObject};
