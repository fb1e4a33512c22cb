//! Archive uploader
//!
//! Writes the exported body to the configured bucket and key. Upload failures
//! are logged once and swallowed.

use super::destination::DestinationConfig;
use super::outcome::{ExportOutcome, SkipReason};
use crate::adapters::provider::{CloudProvider, PutObjectRequest};
use crate::domain::DeploymentContext;
use std::sync::Arc;

/// Final stage of the workflow
pub struct ArchiveUploader {
    provider: Arc<dyn CloudProvider>,
    dry_run: bool,
}

impl ArchiveUploader {
    pub fn new(provider: Arc<dyn CloudProvider>) -> Self {
        Self {
            provider,
            dry_run: false,
        }
    }

    /// Evaluate the destination but never call the object store
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Archives `body` to the destination named in `custom`
    pub async fn archive(
        &self,
        body: Vec<u8>,
        custom: &toml::Table,
        context: &DeploymentContext,
    ) -> ExportOutcome {
        let DestinationConfig::Complete { bucket, key } = DestinationConfig::from_custom(custom)
        else {
            return ExportOutcome::skipped(SkipReason::DestinationIncomplete);
        };
        let bytes = body.len();

        if self.dry_run {
            tracing::info!(bucket = %bucket, key = %key, bytes, "Dry run, skipping upload to S3");
            return ExportOutcome::DryRun { bucket, key, bytes };
        }

        let request = PutObjectRequest {
            bucket: bucket.clone(),
            key: key.clone(),
            body,
        };

        match self.provider.put_object(request, context).await {
            Ok(()) => {
                tracing::info!(bucket = %bucket, key = %key, bytes, "File uploaded to S3");
                ExportOutcome::Uploaded { bucket, key, bytes }
            }
            Err(e) => {
                tracing::debug!(error = %e, "putObject failed");
                tracing::error!(bucket = %bucket, key = %key, "Failed to upload file to S3");
                ExportOutcome::UploadFailed { bucket, key }
            }
        }
    }
}
