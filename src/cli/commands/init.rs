//! Init command implementation
//!
//! Generates a sample configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "export-swagger.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2);
        }

        match fs::write(&self.output, Self::sample_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Set service.name and the provider stage/region");
                println!("  2. Fill in custom.swaggerDestinations to archive the export");
                println!("  3. Validate configuration: export-swagger validate-config");
                println!("  4. After deploying: export-swagger export");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {}", e);
                Ok(5)
            }
        }
    }

    fn sample_config() -> &'static str {
        r#"# export-swagger configuration
# Exports the API Gateway swagger description after a deploy and archives it to S3

[application]
log_level = "info"
dry_run = false

[service]
name = "my-service"

[provider]
stage = "dev"
region = "us-east-1"
# profile = "default"

# Both fields are required for the upload to happen
[custom.swaggerDestinations]
s3BucketName = "${SWAGGER_BUCKET}"
s3KeyName = "my-service/swagger.json"

[logging]
local_enabled = false
local_path = "./logs"
local_rotation = "daily"  # daily | hourly | never
"#
    }
}
