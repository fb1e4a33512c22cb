//! Export workflow
//!
//! 1. [`StackResolver`] describes `{service}-{stage}` and recovers the gateway id
//! 2. [`DescriptionExporter`] requests the swagger JSON export for that gateway/stage
//! 3. [`ArchiveUploader`] writes the body to `custom.swaggerDestinations` when complete
//!
//! ```rust,no_run
//! use export_swagger::adapters::aws::AwsProvider;
//! use export_swagger::config::load_config;
//! use export_swagger::core::export::ExportWorkflow;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("export-swagger.toml")?;
//! let provider = Arc::new(AwsProvider::load(&config.provider).await?);
//! let outcome = ExportWorkflow::from_config(provider, &config).run().await;
//! println!("{outcome}");
//! # Ok(())
//! # }
//! ```

pub mod destination;
pub mod exporter;
pub mod outcome;
pub mod resolver;
pub mod uploader;
pub mod workflow;

pub use destination::DestinationConfig;
pub use exporter::DescriptionExporter;
pub use outcome::{ExportOutcome, SkipReason};
pub use resolver::StackResolver;
pub use uploader::ArchiveUploader;
pub use workflow::ExportWorkflow;
