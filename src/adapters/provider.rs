//! Cloud provider abstraction
//!
//! The workflow reaches the provider's remote procedures only through this
//! trait, so tests can substitute a recording fake for the AWS adapter.

use crate::domain::{
    DeploymentContext, ExportedDescription, GatewayId, Result, StackName, StackOutputs,
};
use async_trait::async_trait;

/// Export type requested from API Gateway
pub const EXPORT_TYPE_SWAGGER: &str = "swagger";

/// Accept header for the export
pub const ACCEPT_JSON: &str = "application/json";

/// Export parameter asking for integration details to be embedded
pub const EXTENSIONS_PARAMETER: (&str, &str) = ("extensions", "integrations");

/// Parameters of an API description export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRequest {
    pub gateway_id: GatewayId,
    pub stage: String,
    pub export_type: &'static str,
    pub accepts: &'static str,
    pub extensions: &'static str,
}

impl ExportRequest {
    /// Swagger JSON export with integration extensions for a gateway stage
    pub fn swagger_json(gateway_id: GatewayId, stage: impl Into<String>) -> Self {
        Self {
            gateway_id,
            stage: stage.into(),
            export_type: EXPORT_TYPE_SWAGGER,
            accepts: ACCEPT_JSON,
            extensions: EXTENSIONS_PARAMETER.1,
        }
    }
}

/// Destination and payload of an object upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PutObjectRequest {
    pub bucket: String,
    pub key: String,
    pub body: Vec<u8>,
}

/// Remote operations consumed by the export workflow
///
/// Every call receives the deployment context so implementations can target
/// the deployment's region.
#[async_trait]
pub trait CloudProvider: Send + Sync {
    /// Describe a stack and return its outputs
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the stack does not exist.
    async fn describe_stack(
        &self,
        stack_name: &StackName,
        context: &DeploymentContext,
    ) -> Result<StackOutputs>;

    /// Export the API description of a gateway stage
    ///
    /// # Errors
    ///
    /// Returns an error if the export request fails.
    async fn export_description(
        &self,
        request: &ExportRequest,
        context: &DeploymentContext,
    ) -> Result<ExportedDescription>;

    /// Store an object
    ///
    /// # Errors
    ///
    /// Returns an error if the upload fails.
    async fn put_object(&self, request: PutObjectRequest, context: &DeploymentContext)
        -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swagger_json_request_parameters() {
        let request = ExportRequest::swagger_json(GatewayId::new("abc123"), "prod");
        assert_eq!(request.gateway_id.as_str(), "abc123");
        assert_eq!(request.stage, "prod");
        assert_eq!(request.export_type, "swagger");
        assert_eq!(request.accepts, "application/json");
        assert_eq!(request.extensions, "integrations");
    }
}
