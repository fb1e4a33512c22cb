// Export Swagger - API Gateway description exporter
// Copyright (c) 2025 Export Swagger Contributors
// Licensed under the MIT License

use clap::Parser;
use export_swagger::cli::{Cli, Commands};
use export_swagger::config::{load_config, LoggingConfig};
use export_swagger::logging::init_logging;
use std::process;

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // File logging follows the config file when it loads; otherwise console only
    let file_config = load_config(&cli.config).ok();
    let logging_config = file_config
        .as_ref()
        .map(|c| c.logging.clone())
        .unwrap_or_default();
    let log_level = cli
        .log_level
        .clone()
        .or_else(|| file_config.map(|c| c.application.log_level))
        .unwrap_or_else(|| "info".to_string());

    let guard = match init_logging(&log_level, &logging_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(5);
        }
    };

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "Export Swagger - API Gateway description exporter"
    );

    let exit_code = match execute_command(&cli).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e}");
            5
        }
    };

    // process::exit skips destructors, so flush file logs first
    drop(guard);
    process::exit(exit_code);
}

/// Execute the CLI command
async fn execute_command(cli: &Cli) -> anyhow::Result<i32> {
    match &cli.command {
        Commands::Export(args) => args.execute(&cli.config).await,
        Commands::ValidateConfig(args) => args.execute(&cli.config).await,
        Commands::Init(args) => args.execute().await,
    }
}
