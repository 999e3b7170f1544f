//! # S3 Store
//!
//! Uploads through the official AWS SDK.
//!
//! Credentials come from the validated run configuration rather than the
//! SDK's default chain. The region is taken from the CLI override, then the
//! default region chain (`AWS_REGION`, profile), then `us-east-1`.

use super::{ObjectStore, StoreError};
use crate::config::{PublishTarget, StaticCredentials};
use crate::constants::FALLBACK_REGION;
use async_trait::async_trait;
use aws_config::meta::region::RegionProviderChain;
use aws_config::{BehaviorVersion, Region};
use aws_credential_types::Credentials;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;
use std::path::Path;
use tracing::{debug, info};

/// Name reported by the static credentials provider
const CREDENTIALS_PROVIDER_NAME: &str = "artifact-publisher";

/// S3 bucket destination
pub struct S3Store {
    client: Client,
    bucket: String,
}

impl std::fmt::Debug for S3Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("S3Store")
            .field("bucket", &self.bucket)
            .finish_non_exhaustive()
    }
}

impl S3Store {
    /// Wrap an existing SDK client
    pub fn new(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }

    /// Build an S3 client for the target bucket using static credentials
    ///
    /// A custom endpoint switches the client to path-style addressing for
    /// LocalStack and other S3-compatible stores.
    pub async fn connect(target: &PublishTarget, credentials: &StaticCredentials) -> Self {
        let region = RegionProviderChain::first_try(target.region.clone().map(Region::new))
            .or_default_provider()
            .or_else(Region::new(FALLBACK_REGION));

        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(region)
            .credentials_provider(Credentials::new(
                credentials.access_key_id(),
                credentials.secret_access_key(),
                None,
                None,
                CREDENTIALS_PROVIDER_NAME,
            ));

        if let Some(endpoint) = &target.endpoint_url {
            info!("Routing S3 requests to custom endpoint {}", endpoint);
            loader = loader.endpoint_url(endpoint);
        }

        let sdk_config = loader.load().await;

        let mut s3_config = aws_sdk_s3::config::Builder::from(&sdk_config);
        if target.endpoint_url.is_some() {
            s3_config = s3_config.force_path_style(true);
        }

        Self::new(Client::from_conf(s3_config.build()), target.bucket.clone())
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

}

#[async_trait]
impl ObjectStore for S3Store {
    async fn put_file(
        &self,
        key: &str,
        path: &Path,
        content_type: &str,
    ) -> Result<(), StoreError> {
        let body = ByteStream::from_path(path)
            .await
            .map_err(|e| StoreError::read(key, path, e))?;

        let output = self
            .client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type(content_type)
            .body(body)
            .send()
            .await
            .map_err(|err| StoreError::Upload {
                key: key.to_string(),
                message: DisplayErrorContext(&err).to_string(),
            })?;

        debug!(
            "Uploaded s3://{}/{} (etag: {})",
            self.bucket,
            key,
            output.e_tag().unwrap_or("none")
        );
        Ok(())
    }

    fn describe(&self) -> String {
        format!("s3://{}", self.bucket)
    }
}
