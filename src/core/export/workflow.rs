//! Export workflow - runs the three stages in order
//!
//! Each stage yields an `Option`; the first `None` ends the run. Nothing is
//! retried and no error escapes: every run ends in an [`ExportOutcome`].

use super::exporter::DescriptionExporter;
use super::outcome::{ExportOutcome, SkipReason};
use super::resolver::StackResolver;
use super::uploader::ArchiveUploader;
use crate::adapters::provider::CloudProvider;
use crate::config::SwaggerConfig;
use crate::domain::DeploymentContext;
use std::sync::Arc;
use std::time::Instant;

/// Post-deploy export of the API description
pub struct ExportWorkflow {
    context: DeploymentContext,
    custom: toml::Table,
    resolver: StackResolver,
    exporter: DescriptionExporter,
    uploader: ArchiveUploader,
}

impl ExportWorkflow {
    /// Create a workflow for a deployment and its custom settings
    pub fn new(
        provider: Arc<dyn CloudProvider>,
        context: DeploymentContext,
        custom: toml::Table,
    ) -> Self {
        Self {
            context,
            custom,
            resolver: StackResolver::new(provider.clone()),
            exporter: DescriptionExporter::new(provider.clone()),
            uploader: ArchiveUploader::new(provider),
        }
    }

    /// Create a workflow from loaded configuration
    pub fn from_config(provider: Arc<dyn CloudProvider>, config: &SwaggerConfig) -> Self {
        Self::new(provider, config.deployment_context(), config.custom.clone())
            .with_dry_run(config.application.dry_run)
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.uploader = self.uploader.with_dry_run(dry_run);
        self
    }

    pub fn context(&self) -> &DeploymentContext {
        &self.context
    }

    /// Run the workflow once
    pub async fn run(&self) -> ExportOutcome {
        let start = Instant::now();
        let outcome = self.run_stages().await;

        tracing::debug!(
            stack = %self.context.stack_name(),
            outcome = %outcome,
            duration_ms = start.elapsed().as_millis(),
            "Export workflow finished"
        );
        outcome
    }

    async fn run_stages(&self) -> ExportOutcome {
        let Some(gateway_id) = self.resolver.resolve(&self.context).await else {
            return ExportOutcome::skipped(SkipReason::StackUnavailable);
        };

        let Some(description) = self.exporter.export(gateway_id, &self.context).await else {
            return ExportOutcome::skipped(SkipReason::DescriptionUnavailable);
        };

        let Some(body) = description.into_body() else {
            return ExportOutcome::skipped(SkipReason::DescriptionUnavailable);
        };

        self.uploader.archive(body, &self.custom, &self.context).await
    }
}
