//! Export command implementation
//!
//! Registers the export workflow for the post-deploy event and fires it, the
//! way the deploy tool does once a stack update finishes.

use crate::adapters::aws::AwsProvider;
use crate::config::{load_config, SwaggerConfig};
use crate::core::export::{ExportOutcome, ExportWorkflow};
use crate::core::hooks::{ExportSwaggerPlugin, HookRegistry, AFTER_DEPLOY};
use clap::Args;
use std::sync::Arc;

/// Arguments for the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Override the deployment stage
    #[arg(short, long)]
    pub stage: Option<String>,

    /// Override the AWS region
    #[arg(short, long)]
    pub region: Option<String>,

    /// Resolve and export, but don't write to S3
    #[arg(long)]
    pub dry_run: bool,

    /// Print the outcome as JSON
    #[arg(long)]
    pub json: bool,
}

impl ExportArgs {
    /// Execute the export command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Starting export command");

        let mut config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load configuration");
                eprintln!("Failed to load configuration: {e}");
                return Ok(2);
            }
        };

        self.apply_overrides(&mut config);

        if let Err(e) = config.validate() {
            tracing::error!(error = %e, "Configuration validation failed");
            eprintln!("Configuration validation failed: {e}");
            return Ok(2);
        }

        let provider = match AwsProvider::load(&config.provider).await {
            Ok(p) => p,
            Err(e) => {
                tracing::error!(error = %e, "Failed to create AWS provider");
                eprintln!("Failed to initialize AWS clients: {e}");
                return Ok(4);
            }
        };

        let context = config.deployment_context();
        tracing::info!(
            stack = %context.stack_name(),
            region = %context.region(),
            dry_run = config.application.dry_run,
            "Running post-deploy hooks"
        );

        let workflow = ExportWorkflow::from_config(Arc::new(provider), &config);
        let plugin = ExportSwaggerPlugin::new(workflow);
        let outcome_rx = plugin.subscribe();

        let mut registry = HookRegistry::new();
        plugin.register(&mut registry);
        registry.trigger(AFTER_DEPLOY).await;

        let outcome = outcome_rx.borrow().clone();
        match outcome {
            Some(outcome) => self.report(&outcome)?,
            None => tracing::warn!("Post-deploy hook produced no outcome"),
        }

        Ok(0)
    }

    fn apply_overrides(&self, config: &mut SwaggerConfig) {
        if let Some(stage) = &self.stage {
            tracing::info!(stage = %stage, "Overriding stage from CLI");
            config.provider.stage = stage.clone();
        }
        if let Some(region) = &self.region {
            tracing::info!(region = %region, "Overriding region from CLI");
            config.provider.region = region.clone();
        }
        if self.dry_run {
            tracing::info!("Enabling dry-run mode from CLI");
            config.application.dry_run = true;
        }
    }

    fn report(&self, outcome: &ExportOutcome) -> anyhow::Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(outcome)?);
        } else {
            println!("Export: {outcome}");
        }
        Ok(())
    }
}
