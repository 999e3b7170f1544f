//! # Publish Target
//!
//! Where artifacts are read from and where they are written to.

use crate::constants::{DEFAULT_BUCKET, DEFAULT_KEY_PREFIX, DEFAULT_LIBS_PATH};
use std::path::PathBuf;

/// Source directory and destination bucket for a run
///
/// Defaults reproduce the fixed CI layout; CLI flags override individual fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishTarget {
    /// Destination bucket
    pub bucket: String,
    /// Key prefix, without a trailing slash
    pub key_prefix: String,
    /// Build output directory scanned recursively
    pub libs_path: PathBuf,
    /// Explicit region; the default AWS region chain is used when unset
    pub region: Option<String>,
    /// Custom endpoint (LocalStack, S3-compatible stores)
    pub endpoint_url: Option<String>,
}

impl Default for PublishTarget {
    fn default() -> Self {
        Self {
            bucket: DEFAULT_BUCKET.to_string(),
            key_prefix: DEFAULT_KEY_PREFIX.to_string(),
            libs_path: PathBuf::from(DEFAULT_LIBS_PATH),
            region: None,
            endpoint_url: None,
        }
    }
}
