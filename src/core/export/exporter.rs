//! Description exporter

use crate::adapters::provider::{CloudProvider, ExportRequest};
use crate::domain::{DeploymentContext, ExportedDescription, GatewayId};
use std::sync::Arc;

/// Second stage of the workflow
///
/// Requests a swagger JSON export with integration extensions. The gateway id
/// is not checked; an empty id is submitted as-is.
pub struct DescriptionExporter {
    provider: Arc<dyn CloudProvider>,
}

impl DescriptionExporter {
    pub fn new(provider: Arc<dyn CloudProvider>) -> Self {
        Self { provider }
    }

    /// Returns the export response, or `None` if the request failed
    pub async fn export(
        &self,
        gateway_id: GatewayId,
        context: &DeploymentContext,
    ) -> Option<ExportedDescription> {
        let request = ExportRequest::swagger_json(gateway_id, context.stage());

        match self.provider.export_description(&request, context).await {
            Ok(description) => {
                tracing::debug!(
                    rest_api_id = %request.gateway_id,
                    has_body = description.body.is_some(),
                    content_type = ?description.content_type,
                    "API description exported"
                );
                Some(description)
            }
            Err(e) => {
                tracing::debug!(
                    rest_api_id = %request.gateway_id,
                    error = %e,
                    "API description unavailable"
                );
                None
            }
        }
    }
}
