// Export Swagger - API Gateway description exporter
// Copyright (c) 2025 Export Swagger Contributors
// Licensed under the MIT License

//! # Export Swagger
//!
//! A post-deploy hook that archives the interface description of a freshly
//! deployed API Gateway.
//!
//! ## Overview
//!
//! Once the `after:deploy:deploy` event fires, the hook:
//! - **Resolves** the gateway id from the `ServiceEndpoint` output of the
//!   `{service}-{stage}` CloudFormation stack
//! - **Exports** the swagger JSON description of the gateway stage, with
//!   integration extensions
//! - **Archives** the document to `custom.swaggerDestinations.s3BucketName` /
//!   `s3KeyName` when both are configured
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Export workflow and lifecycle hooks
//! - [`adapters`] - Cloud provider trait and its AWS SDK implementation
//! - [`domain`] - Identifiers, deployment context, errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use export_swagger::adapters::aws::AwsProvider;
//! use export_swagger::config::load_config;
//! use export_swagger::core::export::ExportWorkflow;
//! use export_swagger::core::hooks::{ExportSwaggerPlugin, HookRegistry, AFTER_DEPLOY};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("export-swagger.toml")?;
//!     let provider = Arc::new(AwsProvider::load(&config.provider).await?);
//!
//!     let plugin = ExportSwaggerPlugin::new(ExportWorkflow::from_config(provider, &config));
//!     let mut registry = HookRegistry::new();
//!     plugin.register(&mut registry);
//!
//!     registry.trigger(AFTER_DEPLOY).await;
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Library functions return [`domain::Result`]. The workflow itself never
//! fails: remote errors end the run early and are reported through
//! [`core::export::ExportOutcome`] and the logs.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
