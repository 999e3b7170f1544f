//! # Command-Line Arguments
//!
//! Every flag is optional. Without flags the run uses the fixed CI layout.
//!
//! ```bash
//! # Publish from the default build directory
//! artifact-publisher
//!
//! # Preview against a different directory
//! artifact-publisher --libs-path ./build/libs --dry-run
//!
//! # Publish to LocalStack
//! artifact-publisher --endpoint-url http://localhost:4566 --region us-east-1
//! ```

use crate::config::PublishTarget;
use crate::constants::{DEFAULT_BUCKET, DEFAULT_KEY_PREFIX, DEFAULT_LIBS_PATH};
use clap::Parser;
use std::path::PathBuf;

/// Upload dd-java-agent build artifacts and a latest-build index to S3
///
/// Credentials and build metadata are read from AWS_ACCESS_KEY_ID,
/// AWS_SECRET_ACCESS_KEY, CIRCLE_BRANCH, CIRCLE_SHA1 and CIRCLE_USERNAME.
#[derive(Debug, Parser)]
#[command(name = "artifact-publisher", version)]
pub struct Cli {
    /// Build output directory scanned recursively for artifacts
    #[arg(long, default_value = DEFAULT_LIBS_PATH)]
    pub libs_path: PathBuf,

    /// Destination bucket
    #[arg(long, default_value = DEFAULT_BUCKET)]
    pub bucket: String,

    /// Key prefix for artifacts and the index object
    #[arg(long, default_value = DEFAULT_KEY_PREFIX)]
    pub prefix: String,

    /// AWS region (defaults to the AWS region chain, then us-east-1)
    #[arg(long)]
    pub region: Option<String>,

    /// Custom S3 endpoint, e.g. LocalStack
    #[arg(long)]
    pub endpoint_url: Option<String>,

    /// Log the uploads without performing them
    #[arg(long)]
    pub dry_run: bool,
}

impl Cli {
    /// Publish target described by the flags
    pub fn target(&self) -> PublishTarget {
        PublishTarget {
            bucket: self.bucket.clone(),
            key_prefix: self.prefix.clone(),
            libs_path: self.libs_path.clone(),
            region: self.region.clone(),
            endpoint_url: self.endpoint_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags_uses_ci_layout() {
        let cli = Cli::try_parse_from(["artifact-publisher"]).unwrap();

        assert!(!cli.dry_run);
        assert_eq!(cli.target(), PublishTarget::default());
    }

    #[test]
    fn test_flags_override_target() {
        let cli = Cli::try_parse_from([
            "artifact-publisher",
            "--libs-path",
            "/tmp/libs",
            "--bucket",
            "staging-bucket",
            "--prefix",
            "java-nightly",
            "--region",
            "eu-west-1",
            "--endpoint-url",
            "http://localhost:4566",
            "--dry-run",
        ])
        .unwrap();

        let target = cli.target();
        assert!(cli.dry_run);
        assert_eq!(target.libs_path, PathBuf::from("/tmp/libs"));
        assert_eq!(target.bucket, "staging-bucket");
        assert_eq!(target.key_prefix, "java-nightly");
        assert_eq!(target.region.as_deref(), Some("eu-west-1"));
        assert_eq!(target.endpoint_url.as_deref(), Some("http://localhost:4566"));
    }

    #[test]
    fn test_unknown_flag_rejected() {
        let err = Cli::try_parse_from(["artifact-publisher", "--retry"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::UnknownArgument);
    }
}
