//! # Publisher Configuration
//!
//! Run configuration built once at startup from environment variables.
//!
//! Every variable the run depends on is required. Validation happens before
//! any filesystem or network work so a misconfigured CI job fails fast with
//! the full list of missing variables instead of uploading an index with
//! empty fields.

mod build;
mod credentials;
mod target;

pub use build::BuildMetadata;
pub use credentials::StaticCredentials;
pub use target::PublishTarget;

use crate::constants::{
    ENV_ACCESS_KEY_ID, ENV_BRANCH, ENV_COMMIT_SHA, ENV_SECRET_ACCESS_KEY, ENV_USERNAME,
};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("required environment variable {name} is not set or empty")]
    MissingVar { name: &'static str },
    #[error("required environment variables are not set or empty: {}", .names.join(", "))]
    MissingVars { names: Vec<&'static str> },
}

/// Complete configuration for one publishing run
#[derive(Debug, Clone)]
pub struct PublisherConfig {
    pub credentials: StaticCredentials,
    pub build: BuildMetadata,
    pub target: PublishTarget,
}

impl PublisherConfig {
    /// Load configuration from the process environment
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] naming every required variable that is absent or empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    ///
    /// Values are kept verbatim; a value that is empty or only whitespace
    /// counts as missing. The publish target starts from its defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] naming every required variable that is absent or empty.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut missing = Vec::new();
        let mut required = |name: &'static str| -> String {
            match lookup(name).filter(|value| !value.trim().is_empty()) {
                Some(value) => value,
                None => {
                    missing.push(name);
                    String::new()
                }
            }
        };

        let access_key_id = required(ENV_ACCESS_KEY_ID);
        let secret_access_key = required(ENV_SECRET_ACCESS_KEY);
        let branch = required(ENV_BRANCH);
        let commit_sha = required(ENV_COMMIT_SHA);
        let username = required(ENV_USERNAME);

        match missing.len() {
            0 => Ok(Self {
                credentials: StaticCredentials::new(access_key_id, secret_access_key),
                build: BuildMetadata {
                    branch,
                    commit_sha,
                    username,
                },
                target: PublishTarget::default(),
            }),
            1 => Err(ConfigError::MissingVar { name: missing[0] }),
            _ => Err(ConfigError::MissingVars { names: missing }),
        }
    }

    /// Replace the publish target (CLI overrides)
    #[must_use]
    pub fn with_target(mut self, target: PublishTarget) -> Self {
        self.target = target;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn full_env() -> HashMap<&'static str, String> {
        HashMap::from([
            (ENV_ACCESS_KEY_ID, "AKIAEXAMPLE".to_string()),
            (ENV_SECRET_ACCESS_KEY, "wJalrXUtnFEMI".to_string()),
            (ENV_BRANCH, "main".to_string()),
            (ENV_COMMIT_SHA, "abc123".to_string()),
            (ENV_USERNAME, "alice".to_string()),
        ])
    }

    fn load(env: &HashMap<&'static str, String>) -> Result<PublisherConfig, ConfigError> {
        PublisherConfig::from_lookup(|name| env.get(name).cloned())
    }

    #[test]
    fn test_from_lookup_all_present() {
        let config = load(&full_env()).unwrap();

        assert_eq!(config.build.branch, "main");
        assert_eq!(config.build.commit_sha, "abc123");
        assert_eq!(config.build.username, "alice");
        assert_eq!(config.credentials.access_key_id(), "AKIAEXAMPLE");
        assert_eq!(config.credentials.secret_access_key(), "wJalrXUtnFEMI");
        assert_eq!(config.target.bucket, "datadog-reliability-env");
    }

    #[test]
    fn test_from_lookup_single_missing() {
        let mut env = full_env();
        env.remove(ENV_USERNAME);

        let err = load(&env).unwrap_err();
        assert_eq!(err, ConfigError::MissingVar { name: "CIRCLE_USERNAME" });
        assert!(err.to_string().contains("CIRCLE_USERNAME"));
    }

    #[test]
    fn test_from_lookup_reports_every_missing_var() {
        let mut env = full_env();
        env.remove(ENV_SECRET_ACCESS_KEY);
        env.remove(ENV_COMMIT_SHA);

        let err = load(&env).unwrap_err();
        assert_eq!(
            err,
            ConfigError::MissingVars {
                names: vec!["AWS_SECRET_ACCESS_KEY", "CIRCLE_SHA1"]
            }
        );
        assert_eq!(
            err.to_string(),
            "required environment variables are not set or empty: AWS_SECRET_ACCESS_KEY, CIRCLE_SHA1"
        );
    }

    #[test]
    fn test_from_lookup_blank_counts_as_missing() {
        let mut env = full_env();
        env.insert(ENV_BRANCH, "   ".to_string());

        let err = load(&env).unwrap_err();
        assert_eq!(err, ConfigError::MissingVar { name: "CIRCLE_BRANCH" });
    }

    #[test]
    fn test_with_target_overrides_defaults() {
        let target = PublishTarget {
            bucket: "other-bucket".to_string(),
            ..PublishTarget::default()
        };
        let config = load(&full_env()).unwrap().with_target(target);

        assert_eq!(config.target.bucket, "other-bucket");
        assert_eq!(config.target.key_prefix, "java");
    }
}
