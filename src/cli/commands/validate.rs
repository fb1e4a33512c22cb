//! Validate config command implementation

use crate::config::load_config;
use crate::core::export::DestinationConfig;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // load_config validates as part of loading
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Configuration is invalid");
                println!("   Error: {e}");
                return Ok(2);
            }
        };

        let context = config.deployment_context();
        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Service: {}", context.service_name());
        println!("  Stage: {}", context.stage());
        println!("  Region: {}", context.region());
        println!("  Stack: {}", context.stack_name());
        if let Some(profile) = &config.provider.profile {
            println!("  AWS Profile: {profile}");
        }
        println!("  Log Level: {}", config.application.log_level);
        println!("  Dry Run: {}", config.application.dry_run);

        match DestinationConfig::from_custom(&config.custom) {
            DestinationConfig::Complete { bucket, key } => {
                println!("  Archive: s3://{bucket}/{key}");
            }
            DestinationConfig::Incomplete => {
                println!("  Archive: disabled (custom.swaggerDestinations needs s3BucketName and s3KeyName)");
            }
        }
        println!();
        Ok(0)
    }
}
