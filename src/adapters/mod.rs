//! External system integrations.
//!
//! - [`provider`] - The [`CloudProvider`](provider::CloudProvider) trait the workflow depends on
//! - [`aws`] - AWS SDK implementation (CloudFormation, API Gateway, S3)
//!
//! # Design Pattern
//!
//! Adapters isolate the AWS SDK behind a trait so the workflow can be driven by
//! a fake provider in tests.
//!
//! ```rust,no_run
//! use export_swagger::adapters::aws::AwsProvider;
//! use export_swagger::config::ProviderConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let settings = ProviderConfig {
//!     stage: "dev".to_string(),
//!     region: "us-east-1".to_string(),
//!     profile: None,
//! };
//! let provider = AwsProvider::load(&settings).await?;
//! # Ok(())
//! # }
//! ```

pub mod aws;
pub mod provider;
