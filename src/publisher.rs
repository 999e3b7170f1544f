//! # Artifact Publisher
//!
//! Uploads each discovered artifact, then overwrites the shared index object
//! with a record naming it.
//!
//! Every artifact costs exactly two remote writes, in this order:
//!
//! 1. the artifact bytes to `<prefix>/<artifact name>`
//! 2. the index record to `<prefix>/index.txt`
//!
//! Processing is strictly sequential and stops at the first failure. When a
//! run matches several artifacts the index describes the last one processed.

use crate::config::BuildMetadata;
use crate::constants::{ARTIFACT_CONTENT_TYPE, INDEX_CONTENT_TYPE, INDEX_OBJECT_NAME};
use crate::index::IndexRecord;
use crate::scan::Artifact;
use crate::store::{ObjectStore, StoreError};
use std::time::Instant;
use thiserror::Error;
use tracing::{info, info_span, Instrument};

/// Errors that abort a publishing run
#[derive(Debug, Error)]
pub enum PublishError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("failed to write index record for {artifact}: {source}")]
    IndexFile {
        artifact: String,
        #[source]
        source: std::io::Error,
    },
}

/// Key layout under the bucket
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishLayout {
    key_prefix: String,
}

impl PublishLayout {
    /// Trailing slashes are dropped; an empty prefix puts objects at the bucket root
    pub fn new(key_prefix: &str) -> Self {
        Self {
            key_prefix: key_prefix.trim_end_matches('/').to_string(),
        }
    }

    pub fn artifact_key(&self, artifact_name: &str) -> String {
        self.key_for(artifact_name)
    }

    pub fn index_key(&self) -> String {
        self.key_for(INDEX_OBJECT_NAME)
    }

    fn key_for(&self, name: &str) -> String {
        if self.key_prefix.is_empty() {
            name.to_string()
        } else {
            format!("{}/{}", self.key_prefix, name)
        }
    }
}

/// Outcome of a completed run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublishReport {
    /// Published artifact names in processing order
    pub published: Vec<String>,
    /// Record left in the index object, if anything was published
    pub last_index: Option<IndexRecord>,
}

impl PublishReport {
    /// Remote writes performed (two per artifact)
    pub fn upload_count(&self) -> usize {
        self.published.len() * 2
    }
}

/// Sequential publisher over an object store
#[derive(Debug)]
pub struct Publisher<S> {
    store: S,
    layout: PublishLayout,
    build: BuildMetadata,
}

impl<S: ObjectStore> Publisher<S> {
    pub fn new(store: S, layout: PublishLayout, build: BuildMetadata) -> Self {
        Self {
            store,
            layout,
            build,
        }
    }

    /// Upload one artifact and overwrite the index with its record
    ///
    /// The transient index file is removed before this returns, whether the
    /// index upload succeeded or not.
    ///
    /// # Errors
    ///
    /// Returns the first store or temp-file failure; the index is not
    /// touched when the artifact upload fails.
    pub async fn publish_one(&self, artifact: &Artifact) -> Result<IndexRecord, PublishError> {
        let artifact_key = self.layout.artifact_key(&artifact.name);
        let span = info_span!(
            "artifact.publish",
            artifact.name = %artifact.name,
            artifact.key = %artifact_key
        );

        async move {
            let start = Instant::now();
            info!(
                "Uploading {} to {}/{}",
                artifact.path.display(),
                self.store.describe(),
                artifact_key
            );
            self.store
                .put_file(&artifact_key, &artifact.path, ARTIFACT_CONTENT_TYPE)
                .await?;

            let record = IndexRecord::new(&self.build, artifact.name.as_str());
            let index_file = record
                .write_temp()
                .map_err(|source| PublishError::IndexFile {
                    artifact: artifact.name.clone(),
                    source,
                })?;
            let index_key = self.layout.index_key();
            self.store
                .put_file(&index_key, index_file.path(), INDEX_CONTENT_TYPE)
                .await?;
            drop(index_file);

            info!(
                duration_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX),
                "Published {} and updated {}", artifact.name, index_key
            );
            Ok(record)
        }
        .instrument(span)
        .await
    }

    /// Publish every artifact in iteration order, stopping at the first failure
    ///
    /// # Errors
    ///
    /// Returns the failure that aborted the run. Artifacts published before
    /// it stay published; nothing is retried or rolled back.
    pub async fn publish_all<I>(&self, artifacts: I) -> Result<PublishReport, PublishError>
    where
        I: IntoIterator<Item = Artifact>,
    {
        let mut report = PublishReport::default();

        for artifact in artifacts {
            let record = self.publish_one(&artifact).await?;
            report.published.push(artifact.name);
            report.last_index = Some(record);
        }

        if report.published.is_empty() {
            info!("No artifacts matched, nothing uploaded");
        }
        Ok(report)
    }
}
