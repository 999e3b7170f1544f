//! # Constants
//!
//! Fixed values for a publishing run. CLI flags may override the target
//! values, everything else is fixed.

/// Bucket receiving artifacts and the index object
pub const DEFAULT_BUCKET: &str = "datadog-reliability-env";

/// Build output directory scanned for artifacts (relative to the working directory)
pub const DEFAULT_LIBS_PATH: &str = "./workspace/dd-java-agent/build/libs";

/// Key prefix for every uploaded object
pub const DEFAULT_KEY_PREFIX: &str = "java";

/// Object name of the latest-build index, placed under the key prefix
pub const INDEX_OBJECT_NAME: &str = "index.txt";

/// Base name stem identifying an agent artifact
pub const ARTIFACT_STEM: &str = "dd-java-agent";

/// Trailing marker an artifact base name must end with
pub const ARTIFACT_MARKER: &str = "jar";

/// Region used when the default AWS region chain resolves nothing
pub const FALLBACK_REGION: &str = "us-east-1";

/// Log filter applied when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "artifact_publisher=info";

pub const ARTIFACT_CONTENT_TYPE: &str = "application/java-archive";
pub const INDEX_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

// Environment variables
pub const ENV_ACCESS_KEY_ID: &str = "AWS_ACCESS_KEY_ID";
pub const ENV_SECRET_ACCESS_KEY: &str = "AWS_SECRET_ACCESS_KEY";
pub const ENV_BRANCH: &str = "CIRCLE_BRANCH";
pub const ENV_COMMIT_SHA: &str = "CIRCLE_SHA1";
pub const ENV_USERNAME: &str = "CIRCLE_USERNAME";
