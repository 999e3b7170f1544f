//! # Object Stores
//!
//! Remote object storage behind a single upload operation.
//!
//! - `s3`: AWS S3 (or an S3-compatible endpoint) via the official SDK
//! - `dry_run`: logs uploads without touching the network
//! - `memory`: records uploads in memory (tests and the `test-support` feature)

mod dry_run;
#[cfg(any(test, feature = "test-support"))]
mod memory;
mod s3;

pub use dry_run::DryRunStore;
#[cfg(any(test, feature = "test-support"))]
pub use memory::{MemoryStore, StoredObject};
pub use s3::S3Store;

use async_trait::async_trait;
use std::path::Path;
use thiserror::Error;

/// Object store errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// The remote write was rejected or could not be sent
    #[error("failed to upload {key}: {message}")]
    Upload { key: String, message: String },
    /// The local file could not be read for upload
    #[error("failed to read {path} for upload to {key}: {source}")]
    Read {
        key: String,
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl StoreError {
    pub(crate) fn read(
        key: &str,
        path: &Path,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        StoreError::Read {
            key: key.to_string(),
            path: path.display().to_string(),
            source: source.into(),
        }
    }
}

/// Destination for uploaded files
///
/// Writes always overwrite; there is no existence check or read-back.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Stream the file at `path` to `key`
    async fn put_file(&self, key: &str, path: &Path, content_type: &str)
        -> Result<(), StoreError>;

    /// Short human-readable destination, e.g. `s3://bucket`
    fn describe(&self) -> String;
}

#[async_trait]
impl<T: ObjectStore + ?Sized> ObjectStore for &T {
    async fn put_file(
        &self,
        key: &str,
        path: &Path,
        content_type: &str,
    ) -> Result<(), StoreError> {
        (**self).put_file(key, path, content_type).await
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
