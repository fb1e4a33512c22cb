//! Stack resolver
//!
//! Describes the deployed stack and recovers the gateway id from its
//! `ServiceEndpoint` output.

use crate::adapters::provider::CloudProvider;
use crate::domain::{DeploymentContext, GatewayId, StackOutputs, SERVICE_ENDPOINT_KEY};
use std::sync::Arc;

/// First stage of the workflow
pub struct StackResolver {
    provider: Arc<dyn CloudProvider>,
}

impl StackResolver {
    pub fn new(provider: Arc<dyn CloudProvider>) -> Self {
        Self { provider }
    }

    /// Resolves the gateway id of the deployment
    ///
    /// Returns `None` only when the stack cannot be described. A stack without
    /// a `ServiceEndpoint` output resolves to the empty id.
    pub async fn resolve(&self, context: &DeploymentContext) -> Option<GatewayId> {
        let stack_name = context.stack_name();

        let outputs = match self.provider.describe_stack(&stack_name, context).await {
            Ok(outputs) => outputs,
            Err(e) => {
                tracing::debug!(stack = %stack_name, error = %e, "Stack description unavailable");
                return None;
            }
        };

        let gateway_id = gateway_id_from_outputs(&outputs);
        tracing::debug!(
            stack = %stack_name,
            outputs = outputs.len(),
            gateway_id = %gateway_id,
            "Resolved gateway id"
        );
        Some(gateway_id)
    }
}

/// Gateway id from the last `ServiceEndpoint` output, or the empty id
pub fn gateway_id_from_outputs(outputs: &StackOutputs) -> GatewayId {
    outputs
        .iter()
        .filter(|output| output.key == SERVICE_ENDPOINT_KEY)
        .last()
        .map(|output| GatewayId::from_service_endpoint(&output.value))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StackOutput;

    #[test]
    fn test_gateway_id_from_service_endpoint_output() {
        let outputs = StackOutputs::new(vec![
            StackOutput::new("ServerlessDeploymentBucketName", "svc-dev-bucket"),
            StackOutput::new(
                "ServiceEndpoint",
                "https://abc123.execute-api.us-east-1.amazonaws.com/prod",
            ),
        ]);
        assert_eq!(gateway_id_from_outputs(&outputs).as_str(), "abc123");
    }

    #[test]
    fn test_missing_service_endpoint_is_empty() {
        let outputs = StackOutputs::new(vec![StackOutput::new("HelloLambdaFunctionQualifiedArn", "arn:aws:lambda:x")]);
        assert!(gateway_id_from_outputs(&outputs).is_empty());
        assert!(gateway_id_from_outputs(&StackOutputs::default()).is_empty());
    }

    #[test]
    fn test_last_service_endpoint_wins() {
        let outputs = StackOutputs::new(vec![
            StackOutput::new("ServiceEndpoint", "https://first.execute-api.us-east-1.amazonaws.com/dev"),
            StackOutput::new("ServiceEndpoint", "https://second.execute-api.us-east-1.amazonaws.com/dev"),
        ]);
        assert_eq!(gateway_id_from_outputs(&outputs).as_str(), "second");
    }

    #[test]
    fn test_key_match_is_exact() {
        let outputs = StackOutputs::new(vec![StackOutput::new(
            "serviceendpoint",
            "https://abc123.execute-api.us-east-1.amazonaws.com/prod",
        )]);
        assert!(gateway_id_from_outputs(&outputs).is_empty());
    }
}
