//! # Artifact Publisher
//!
//! Uploads `dd-java-agent` build artifacts and a latest-build index to S3.
//!
//! ## Usage
//!
//! ```bash
//! export AWS_ACCESS_KEY_ID=... AWS_SECRET_ACCESS_KEY=...
//! export CIRCLE_BRANCH=main CIRCLE_SHA1=abc123 CIRCLE_USERNAME=alice
//! artifact-publisher
//! ```
//!
//! Exits non-zero on any configuration or upload failure. Finding no
//! artifacts is a successful run.

use anyhow::Result;
use artifact_publisher::observability::init_logging;
use artifact_publisher::runtime::{run, Cli};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
    init_logging()?;

    let cli = Cli::parse();
    run(&cli).await?;

    Ok(())
}
