//! # Artifact Publisher
//!
//! CI step that uploads `dd-java-agent` build artifacts to S3 and records the
//! most recent one in a plaintext index object.
//!
//! ## Overview
//!
//! 1. **Configuration** - Credentials and build metadata are read from the
//!    environment once and validated before anything else happens
//! 2. **Discovery** - The build output directory is walked recursively and
//!    base names are matched against `dd-java-agent*jar`
//! 3. **Publishing** - Each match is uploaded to `java/<name>`, then
//!    `java/index.txt` is overwritten with branch, commit, artifact name and user
//!
//! Uploads are sequential. The first failure aborts the run; nothing is retried.

pub mod config;
pub mod constants;
pub mod index;
pub mod matcher;
pub mod observability;
pub mod publisher;
pub mod runtime;
pub mod scan;
pub mod store;

pub use config::{BuildMetadata, ConfigError, PublishTarget, PublisherConfig, StaticCredentials};
pub use index::IndexRecord;
pub use matcher::ArtifactMatcher;
pub use publisher::{PublishError, PublishLayout, PublishReport, Publisher};
pub use scan::{discover_artifacts, Artifact};
pub use store::{DryRunStore, ObjectStore, S3Store, StoreError};
#[cfg(any(test, feature = "test-support"))]
pub use store::{MemoryStore, StoredObject};
