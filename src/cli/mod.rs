//! CLI interface and argument parsing

pub mod commands;

use clap::{Parser, Subcommand};

/// Export Swagger - archive API Gateway descriptions after deploy
#[derive(Parser, Debug)]
#[command(name = "export-swagger")]
#[command(version, about, long_about = None)]
#[command(author = "Export Swagger Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(
        short,
        long,
        default_value = "export-swagger.toml",
        env = "EXPORT_SWAGGER_CONFIG"
    )]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "EXPORT_SWAGGER_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fire the post-deploy hook: export the API description and archive it
    Export(commands::export::ExportArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_export() {
        let cli = Cli::parse_from(["export-swagger", "export"]);
        assert_eq!(cli.config, "export-swagger.toml");
        assert!(matches!(cli.command, Commands::Export(_)));
    }

    #[test]
    fn test_cli_parse_export_overrides() {
        let cli = Cli::parse_from([
            "export-swagger",
            "export",
            "--stage",
            "prod",
            "--region",
            "eu-west-1",
            "--dry-run",
        ]);
        let Commands::Export(args) = cli.command else {
            panic!("expected export command");
        };
        assert_eq!(args.stage.as_deref(), Some("prod"));
        assert_eq!(args.region.as_deref(), Some("eu-west-1"));
        assert!(args.dry_run);
        assert!(!args.json);
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from(["export-swagger", "--config", "custom.toml", "export"]);
        assert_eq!(cli.config, "custom.toml");
    }

    #[test]
    fn test_cli_parse_with_log_level() {
        let cli = Cli::parse_from(["export-swagger", "--log-level", "debug", "export"]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_cli_parse_validate_config() {
        let cli = Cli::parse_from(["export-swagger", "validate-config"]);
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["export-swagger", "init", "--force"]);
        assert!(matches!(cli.command, Commands::Init(ref args) if args.force));
    }
}
