//! Domain types
//!
//! - Identifiers ([`StackName`], [`GatewayId`])
//! - The [`DeploymentContext`] a hook runs for
//! - Transient stage values ([`StackOutputs`], [`ExportedDescription`])
//! - Error types ([`SwaggerError`], [`ProviderError`]) and the [`Result`] alias
//!
//! ```rust
//! use export_swagger::domain::{DeploymentContext, GatewayId};
//!
//! let ctx = DeploymentContext::new("users-api", "prod", "us-east-1");
//! assert_eq!(ctx.stack_name().as_str(), "users-api-prod");
//!
//! let id = GatewayId::from_service_endpoint("https://abc123.execute-api.us-east-1.amazonaws.com/prod");
//! assert_eq!(id.as_str(), "abc123");
//! ```

pub mod artifacts;
pub mod deployment;
pub mod errors;
pub mod ids;
pub mod result;

pub use artifacts::{ExportedDescription, StackOutput, StackOutputs, SERVICE_ENDPOINT_KEY};
pub use deployment::DeploymentContext;
pub use errors::{ProviderError, SwaggerError};
pub use ids::{GatewayId, StackName};
pub use result::Result;
