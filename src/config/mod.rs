//! Configuration management.
//!
//! Settings are read from a TOML file with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `EXPORT_SWAGGER_<SECTION>_<KEY>` overrides
//! - Defaults for everything except the service name
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [service]
//! name = "users-api"
//!
//! [provider]
//! stage = "prod"
//! region = "us-east-1"
//!
//! [custom.swaggerDestinations]
//! s3BucketName = "${DOCS_BUCKET}"
//! s3KeyName = "users-api/swagger.json"
//! ```
//!
//! ```rust,no_run
//! use export_swagger::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("export-swagger.toml")?;
//! println!("Stack: {}", config.deployment_context().stack_name());
//! # Ok(())
//! # }
//! ```

pub mod loader;
pub mod schema;

pub use loader::{load_config, parse_config};
pub use schema::{ApplicationConfig, LoggingConfig, ProviderConfig, ServiceConfig, SwaggerConfig};
