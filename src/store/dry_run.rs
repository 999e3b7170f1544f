//! # Dry-Run Store
//!
//! Logs what would be uploaded and succeeds without calling AWS.

use super::{ObjectStore, StoreError};
use async_trait::async_trait;
use std::path::Path;
use tracing::info;

/// Stand-in store for `--dry-run`
#[derive(Debug, Clone)]
pub struct DryRunStore {
    bucket: String,
}

impl DryRunStore {
    pub fn new(bucket: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
        }
    }
}

#[async_trait]
impl ObjectStore for DryRunStore {
    async fn put_file(
        &self,
        key: &str,
        path: &Path,
        content_type: &str,
    ) -> Result<(), StoreError> {
        // Still require the file to be readable so a dry run catches local problems
        let size = tokio::fs::metadata(path)
            .await
            .map_err(|e| StoreError::read(key, path, e))?
            .len();
        info!(
            "DRY RUN: would upload {} ({} bytes, {}) to s3://{}/{}",
            path.display(),
            size,
            content_type,
            self.bucket,
            key
        );
        Ok(())
    }

    fn describe(&self) -> String {
        format!("s3://{} (dry run)", self.bucket)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_dry_run_accepts_existing_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let store = DryRunStore::new("bucket");

        store
            .put_file("java/index.txt", file.path(), "text/plain")
            .await
            .unwrap();
        assert_eq!(store.describe(), "s3://bucket (dry run)");
    }

    #[tokio::test]
    async fn test_dry_run_rejects_missing_file() {
        let store = DryRunStore::new("bucket");

        let err = store
            .put_file("java/a.jar", Path::new("/nonexistent/a.jar"), "application/java-archive")
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Read { .. }));
    }
}
