//! # Publishing Run
//!
//! Wires configuration, discovery and the publisher together.

use crate::config::PublisherConfig;
use crate::matcher::ArtifactMatcher;
use crate::publisher::{PublishLayout, PublishReport, Publisher};
use crate::runtime::Cli;
use crate::scan::discover_artifacts;
use crate::store::{DryRunStore, ObjectStore, S3Store};
use anyhow::{Context, Result};
use tracing::info;

/// Validate configuration, pick the store and publish
///
/// # Errors
///
/// Fails before any upload if a required environment variable is missing,
/// otherwise on the first upload or temp-file failure.
pub async fn run(cli: &Cli) -> Result<PublishReport> {
    let config = PublisherConfig::from_env()
        .context("Invalid publisher configuration")?
        .with_target(cli.target());

    info!(
        "Publishing {} build {} (triggered by {})",
        config.build.branch, config.build.commit_sha, config.build.username
    );

    if cli.dry_run {
        let store = DryRunStore::new(config.target.bucket.as_str());
        publish(&store, &config).await
    } else {
        let store = S3Store::connect(&config.target, &config.credentials).await;
        publish(&store, &config).await
    }
}

/// Discover artifacts under the configured directory and publish them to `store`
///
/// # Errors
///
/// Returns the first upload or temp-file failure; the run is not resumed.
pub async fn publish<S: ObjectStore>(store: S, config: &PublisherConfig) -> Result<PublishReport> {
    let matcher = ArtifactMatcher::dd_java_agent();
    info!(
        "Scanning {} for artifacts, destination {}",
        config.target.libs_path.display(),
        store.describe()
    );

    let publisher = Publisher::new(
        store,
        PublishLayout::new(&config.target.key_prefix),
        config.build.clone(),
    );
    let artifacts = discover_artifacts(&config.target.libs_path, &matcher);
    let report = publisher
        .publish_all(artifacts)
        .await
        .context("Artifact publishing failed")?;

    match &report.last_index {
        Some(record) => info!(
            "Published {} artifact(s) with {} upload(s); index names {}",
            report.published.len(),
            report.upload_count(),
            record.artifact
        ),
        None => info!("Run complete, no artifacts published"),
    }
    Ok(report)
}
